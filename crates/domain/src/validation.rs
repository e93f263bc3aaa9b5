//! Construction-time argument checks.

use thiserror::Error;

/// An argument rejected while constructing a domain object.
///
/// Construction fails as a whole: no partially built value is returned.
/// Setters do not re-run these checks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Name cannot be null or empty.")]
    EmptyName,

    #[error("Base salary must be non-negative (got {value}).")]
    NegativeSalary { value: f64 },

    #[error("Base price must be non-negative (got {value}).")]
    NegativeBasePrice { value: f64 },

    #[error("The number of pages must not be negative.")]
    NegativePageCount { pages: i32 },

    #[error("Unit price must not be negative.")]
    NegativeUnitPrice { value: f64 },

    #[error("The bonus percentage must be between 0 and 100 (got {value}).")]
    BonusOutOfRange { value: f64 },

    #[error("The revenue values must not be negative (got {value}).")]
    NegativeRevenue { value: f64 },

    #[error("Discount rate must not be negative (got {value}).")]
    NegativeDiscountRate { value: f64 },

    #[error("Discount threshold must not be negative (got {value}).")]
    NegativeDiscountThreshold { value: i32 },

    #[error("Pages per minute must be greater than 0 (got {value}).")]
    NonPositivePrintSpeed { value: i32 },

    #[error("Machine capacity must not be negative (got {value}).")]
    NegativeCapacity { value: i32 },
}

pub(crate) fn non_negative_money(
    value: f64,
    err: impl FnOnce(f64) -> ValidationError,
) -> Result<f64, ValidationError> {
    if value < 0.0 { Err(err(value)) } else { Ok(value) }
}
