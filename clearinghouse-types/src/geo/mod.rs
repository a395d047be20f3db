//! Geometries in geographic coordinates (latitude and longitude) (see [`GeoPoint`]) and forward projection of them
//! into planar coordinates (see [`Projection`] and [`ProjectionFamily`]).

mod datum;
mod family;
pub mod impls;
mod traits;

pub use datum::Datum;
pub use family::ProjectionFamily;
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::projection::Projection;
