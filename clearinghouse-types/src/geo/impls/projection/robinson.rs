use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d, Point2d};
use crate::geo::datum::Datum;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use crate::geo::traits::projection::Projection;
use std::marker::PhantomData;

/// Scale of the parallel length ratio.
const X_SCALE: f64 = 0.8487;
/// Scale of the distance from the equator ratio.
const Y_SCALE: f64 = 1.3523;
/// Latitude step of [`ROBINSON_TABLE`] in degrees.
const STEP_DEG: f64 = 5.0;

/// Robinson's defining table: `(X, Y)` for every 5 degrees of absolute latitude from 0 to 90.
///
/// `X` is the length of the parallel relative to the equator, `Y` is the distance of the
/// parallel from the equator relative to the pole.
pub const ROBINSON_TABLE: [(f64, f64); 19] = [
    (1.0000, 0.0000),
    (0.9986, 0.0620),
    (0.9954, 0.1240),
    (0.9900, 0.1860),
    (0.9822, 0.2480),
    (0.9730, 0.3100),
    (0.9600, 0.3720),
    (0.9427, 0.4340),
    (0.9216, 0.4958),
    (0.8962, 0.5571),
    (0.8679, 0.6176),
    (0.8350, 0.6769),
    (0.7986, 0.7346),
    (0.7597, 0.7903),
    (0.7186, 0.8435),
    (0.6732, 0.8936),
    (0.6213, 0.9394),
    (0.5722, 0.9761),
    (0.5322, 1.0000),
];

/// Interpolated `(X, Y)` ratios for the latitude given in degrees.
///
/// The sign of the latitude is ignored. Latitudes beyond 90 degrees are clamped to the
/// last row of the table.
pub fn robinson_xy(lat_deg: f64) -> (f64, f64) {
    let abs_lat = lat_deg.abs().min(90.0);
    let last = ROBINSON_TABLE.len() - 1;

    let index = ((abs_lat / STEP_DEG) as usize).min(last);
    if index == last {
        return ROBINSON_TABLE[last];
    }

    let t = (abs_lat - index as f64 * STEP_DEG) / STEP_DEG;
    let (x0, y0) = ROBINSON_TABLE[index];
    let (x1, y1) = ROBINSON_TABLE[index + 1];

    (x0 + t * (x1 - x0), y0 + t * (y1 - y0))
}

/// Forward Robinson transform on a sphere.
///
/// `lat`, `lon` and `lon0` are in radians, the result is in the units of `radius`. The table
/// lookup converts the latitude to degrees internally.
pub fn robinson_forward(lat: f64, lon: f64, lon0: f64, radius: f64) -> Point2d {
    let (x_ratio, y_ratio) = robinson_xy(lat.to_degrees());
    let dlon = lon - lon0;
    let sign = if lat < 0.0 { -1.0 } else { 1.0 };

    Point2d::new(
        X_SCALE * radius * x_ratio * dlon,
        Y_SCALE * radius * y_ratio * sign,
    )
}

/// Robinson projection of a sphere. Input points are in degrees, output in metres.
#[derive(Debug, Copy, Clone)]
pub struct Robinson<In, Out> {
    datum: Datum,
    central_meridian: f64,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> Robinson<In, Out> {
    /// Creates the projection on the given datum (its semimajor axis is used as the sphere radius)
    /// centered on `central_meridian` degrees.
    pub fn new(datum: Datum, central_meridian: f64) -> Self {
        Self {
            datum,
            central_meridian,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<In, Out> Default for Robinson<In, Out> {
    fn default() -> Self {
        Self::new(Datum::SPHERE, 0.0)
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection for Robinson<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let projected = robinson_forward(
            input.lat_rad(),
            input.lon_rad(),
            self.central_meridian.to_radians(),
            self.datum.semimajor(),
        );

        projected
            .is_finite()
            .then(|| Out::new(projected.x, projected.y))
    }
}
