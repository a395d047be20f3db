use crate::cartesian::traits::{CartesianPoint2d, NewCartesianPoint2d};
pub use nalgebra::Point2;
use nalgebra::Scalar;
use num_traits::Num;

/// Projected point with `f64` coordinates.
pub type Point2d = Point2<f64>;

impl<N: Num + Copy + PartialOrd + Scalar> CartesianPoint2d for Point2<N> {
    type Num = N;

    fn x(&self) -> N {
        self.x
    }
    fn y(&self) -> N {
        self.y
    }
}

impl<N: Num + Copy + PartialOrd + Scalar> NewCartesianPoint2d<N> for Point2<N> {
    fn new(x: N, y: N) -> Self {
        Point2::new(x, y)
    }
}
