//! Error types used by the crate.

use clearinghouse_types::ClearinghouseTypesError;
use thiserror::Error;

use crate::format::FormatKey;

/// Clearinghouse error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClearinghouseError {
    /// No projection with the given id.
    #[error("projection not found: {0}")]
    NotFound(String),
    /// Invalid projection definition.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Two definitions share the same id.
    #[error("duplicate projection id: {0}")]
    DuplicateId(String),
    /// The projection cannot be encoded in the requested format.
    #[error("format {format} is not available for {id}")]
    FormatUnavailable {
        /// Projection id.
        id: String,
        /// Requested format.
        format: FormatKey,
    },
    /// The projection has no forward transform implementation.
    #[error("no forward transform for {0}")]
    TransformUnavailable(String),
    /// Invalid input of a forward transform.
    #[error(transparent)]
    Transform(#[from] ClearinghouseTypesError),
}

/// Result with [`ClearinghouseError`].
pub type Result<T> = std::result::Result<T, ClearinghouseError>;
