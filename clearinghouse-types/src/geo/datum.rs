use crate::error::ClearinghouseTypesError;
use serde::{Deserialize, Serialize};

/// Reference surface of a geographic coordinate system.
///
/// The projections in this crate use spherical forms only, so they read the semimajor axis
/// as the sphere radius and ignore flattening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// WGS 84 ellipsoid.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Authalic sphere with the radius of 6371 km.
    pub const SPHERE: Self = Datum {
        semimajor: 6_371_000.0,
        inv_flattening: 0.0,
    };

    /// Sphere with the given radius. Fails if the radius is not a finite positive number.
    pub fn sphere(radius: f64) -> Result<Self, ClearinghouseTypesError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ClearinghouseTypesError::InvalidRadius(radius));
        }

        Ok(Self {
            semimajor: radius,
            inv_flattening: 0.0,
        })
    }

    /// Semimajor axis (or radius of a sphere) in metres.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening. Zero for a sphere.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// True if the datum has no flattening.
    pub fn is_sphere(&self) -> bool {
        self.inv_flattening == 0.0
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::SPHERE
    }
}
