use crate::cartesian::{NewCartesianPoint2d, Point2d};
use crate::geo::datum::Datum;
use crate::geo::impls::projection::{
    nicolosi_forward, robinson_forward, NicolosiGlobular, Robinson,
};
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::traits::projection::Projection;
use serde::{Deserialize, Serialize};

/// Projection families with a forward transform implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ProjectionFamily {
    /// Polyconic globular projection of one hemisphere, evaluated in closed form.
    NicolosiGlobular,
    /// Pseudocylindrical compromise projection, interpolated from Robinson's table.
    Robinson,
}

impl ProjectionFamily {
    /// Forward transform of `(lat, lon)` around the central meridian `lon0` on a sphere of
    /// the given radius. Angles are in radians, the result is in the units of `radius`.
    pub fn forward(&self, lat: f64, lon: f64, lon0: f64, radius: f64) -> Point2d {
        match self {
            ProjectionFamily::NicolosiGlobular => nicolosi_forward(lat, lon, lon0, radius),
            ProjectionFamily::Robinson => robinson_forward(lat, lon, lon0, radius),
        }
    }

    /// Returns a projection of points given in degrees, centered on `central_meridian` degrees.
    pub fn get_projection<In, Out>(
        &self,
        datum: Datum,
        central_meridian: f64,
    ) -> Box<dyn Projection<InPoint = In, OutPoint = Out>>
    where
        In: NewGeoPoint + 'static,
        Out: NewCartesianPoint2d + 'static,
    {
        match self {
            ProjectionFamily::NicolosiGlobular => {
                Box::new(NicolosiGlobular::<In, Out>::new(datum, central_meridian))
            }
            ProjectionFamily::Robinson => {
                Box::new(Robinson::<In, Out>::new(datum, central_meridian))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::impls::GeoPoint2d;
    use crate::latlon;

    #[test]
    fn forward_dispatches_to_family() {
        let lat = 0.4;
        let lon = 0.9;
        assert_eq!(
            ProjectionFamily::NicolosiGlobular.forward(lat, lon, 0.1, 2.0),
            nicolosi_forward(lat, lon, 0.1, 2.0)
        );
        assert_eq!(
            ProjectionFamily::Robinson.forward(lat, lon, 0.1, 2.0),
            robinson_forward(lat, lon, 0.1, 2.0)
        );
    }

    #[test]
    fn boxed_projection_matches_forward() {
        let projection = ProjectionFamily::Robinson.get_projection::<GeoPoint2d, Point2d>(
            Datum::SPHERE,
            10.0,
        );
        let projected = projection.project(&latlon!(20.0, 40.0)).unwrap();
        let expected = robinson_forward(
            20f64.to_radians(),
            40f64.to_radians(),
            10f64.to_radians(),
            Datum::SPHERE.semimajor(),
        );
        assert_eq!(projected, expected);
    }
}
