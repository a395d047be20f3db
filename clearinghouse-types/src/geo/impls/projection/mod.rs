//! Forward transforms of the projection families the clearinghouse can evaluate.
//!
//! Each family is available in two forms: a free function working on raw radians
//! ([`nicolosi_forward`], [`robinson_forward`]) and a [`Projection`](crate::geo::Projection)
//! implementation that takes points in degrees ([`NicolosiGlobular`], [`Robinson`]).

mod nicolosi;
mod robinson;

pub use nicolosi::{nicolosi_forward, NicolosiGlobular};
pub use robinson::{robinson_forward, robinson_xy, Robinson, ROBINSON_TABLE};
