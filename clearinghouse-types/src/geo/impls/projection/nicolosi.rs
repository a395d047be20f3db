use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d, Point2d};
use crate::geo::datum::Datum;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use crate::geo::traits::projection::Projection;
use std::f64::consts::{FRAC_PI_2, PI};
use std::marker::PhantomData;

/// Tolerance of the equality tests that select the special cases of the transform.
const EPSILON: f64 = 1e-10;

/// Forward Nicolosi Globular transform on a sphere.
///
/// `lat`, `lon` and `lon0` are in radians, the result is in the units of `radius`. The
/// central meridian, the equator, the bounding meridians (`|lon - lon0| = π/2`) and the poles
/// are evaluated with exact formulas because the general one has removable singularities
/// there. Latitudes outside of `[-π/2, π/2]` are not valid input.
pub fn nicolosi_forward(lat: f64, lon: f64, lon0: f64, radius: f64) -> Point2d {
    let dlon = lon - lon0;

    if dlon.abs() < EPSILON {
        return Point2d::new(0.0, radius * lat);
    }

    if lat.abs() < EPSILON {
        return Point2d::new(radius * dlon, 0.0);
    }

    if (dlon.abs() - FRAC_PI_2).abs() < EPSILON {
        return Point2d::new(radius * dlon * lat.cos(), FRAC_PI_2 * radius * lat.sin());
    }

    if (lat.abs() - FRAC_PI_2).abs() < EPSILON {
        return Point2d::new(0.0, radius * lat);
    }

    let (sin_lat, cos_lat) = lat.sin_cos();

    let b = PI / (2.0 * dlon) - 2.0 * dlon / PI;
    let c = 2.0 * lat / PI;
    let d = (1.0 - c * c) / (sin_lat - c);

    let b2_d2 = (b * b) / (d * d);
    let d2_b2 = (d * d) / (b * b);

    let m = (b * sin_lat / d - b / 2.0) / (1.0 + b2_d2);
    let n = (d2_b2 * sin_lat + d / 2.0) / (1.0 + d2_b2);

    // Radicands can go slightly negative near the special cases.
    let x_root = (m * m + cos_lat * cos_lat / (1.0 + b2_d2)).max(0.0).sqrt();
    let y_root = (n * n - (d2_b2 * sin_lat * sin_lat + d * sin_lat - 1.0) / (1.0 + d2_b2))
        .max(0.0)
        .sqrt();

    let x_sign = if dlon > 0.0 { 1.0 } else { -1.0 };
    let y_sign = if lat < 0.0 { 1.0 } else { -1.0 };

    Point2d::new(
        FRAC_PI_2 * radius * (m + x_sign * x_root),
        FRAC_PI_2 * radius * (n + y_sign * y_root),
    )
}

/// Nicolosi Globular projection of a sphere. Input points are in degrees, output in metres.
#[derive(Debug, Copy, Clone)]
pub struct NicolosiGlobular<In, Out> {
    datum: Datum,
    central_meridian: f64,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> NicolosiGlobular<In, Out> {
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

    /// Central meridian in degrees.
    pub fn central_meridian(&self) -> f64 {
        self.central_meridian
    }
}

impl<In, Out> Default for NicolosiGlobular<In, Out> {
    fn default() -> Self {
        Self::new(Datum::SPHERE, 0.0)
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection for NicolosiGlobular<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let projected = nicolosi_forward(
            input.lat_rad(),
            input.lon_rad(),
            self.central_meridian.to_radians(),
            self.datum.semimajor(),
        );

        if projected.is_finite() {
            Some(Out::new(projected.x, projected.y))
        } else {
            None
        }
    }
}
