//! Domain error types.

use thiserror::Error;

use crate::machine::MachineError;
use crate::shop::ShopError;
use crate::validation::ValidationError;

/// Errors that can occur during domain operations.
///
/// Each operation returns its own narrow error. This type is for callers
/// that chain construction, paper loading and printing in one function
/// and propagate every failure with `?`.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A constructor rejected one of its arguments.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// A printing machine refused an operation.
    #[error("Machine error: {0}")]
    Machine(#[from] MachineError),

    /// A shop-level operation failed.
    #[error("Shop error: {0}")]
    Shop(#[from] ShopError),
}

/// A token that names none of the variants of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {token:?}")]
pub struct ParseVariantError {
    pub kind: &'static str,
    pub token: String,
}

impl ParseVariantError {
    pub(crate) fn new(kind: &'static str, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
        }
    }
}
