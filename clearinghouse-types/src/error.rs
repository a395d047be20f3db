//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClearinghouseTypesError {
    /// Sphere radius must be a finite positive number.
    #[error("invalid sphere radius: {0}")]
    InvalidRadius(f64),
}
