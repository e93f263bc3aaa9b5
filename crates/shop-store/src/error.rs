use std::path::PathBuf;

use domain::{DomainError, ValidationError};
use thiserror::Error;

/// Errors that can occur when saving or loading a shop.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The dump could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record did not have the expected fields.
    #[error("Malformed {record} record: {reason}")]
    Malformed { record: &'static str, reason: String },

    /// A line started with a tag this format does not know.
    #[error("Unknown record tag: {tag:?}")]
    UnknownRecord { tag: String },

    /// A record parsed but the domain refused its values.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Nothing has been saved to the store yet.
    #[error("No shop has been saved")]
    Empty,
}

impl StoreError {
    pub(crate) fn malformed(record: &'static str, reason: impl Into<String>) -> Self {
        StoreError::Malformed {
            record,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(error: ValidationError) -> Self {
        StoreError::Domain(error.into())
    }
}

/// Result type for shop store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
