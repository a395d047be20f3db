use num_traits::{Float, Num};

/// Point in a 2d planar coordinate system.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: Num + Copy + PartialOrd;

    /// Easting.
    fn x(&self) -> Self::Num;
    /// Northing.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates are finite.
    fn is_finite(&self) -> bool
    where
        Self::Num: Float,
    {
        self.x().is_finite() && self.y().is_finite()
    }
}

/// Cartesian point that can be constructed from its coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> + Sized {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;
}
