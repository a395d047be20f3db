//! Points in planar (projected) coordinates.

mod impls;
mod traits;

pub use impls::{Point2, Point2d};
pub use traits::{CartesianPoint2d, NewCartesianPoint2d};
