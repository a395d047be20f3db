/// Forward transformation of points from one coordinate space into another.
///
/// Only the forward direction is available: none of the projections in this crate have an
/// inverse implementation.
pub trait Projection {
    /// Type of the input point.
    type InPoint;
    /// Type of the output point.
    type OutPoint;

    /// Projects the point. Returns `None` if the result cannot be represented by finite
    /// coordinates.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
}
