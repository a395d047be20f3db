//! Point types and forward map projections used by the PRJ clearinghouse.
//!
//! The crate has two halves:
//! * [`cartesian`] - planar points produced by projections;
//! * [`geo`] - geographic points, the reference [`Datum`](geo::Datum) and the
//!   [`Projection`](geo::Projection) implementations for the projection families that the
//!   clearinghouse can evaluate numerically.

pub mod cartesian;
pub mod error;
pub mod geo;

pub use error::ClearinghouseTypesError;
