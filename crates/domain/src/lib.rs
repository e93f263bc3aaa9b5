//! Domain layer for the printing shop.
//!
//! This crate provides:
//! - paper stock and per-sheet pricing
//! - printable editions (books, posters, newspapers) and their catalog
//! - employees and salary rules
//! - printing machines with their paper ledger
//! - the printing shop aggregate with its financial calculations

pub mod edition;
pub mod employee;
pub mod error;
pub mod machine;
pub mod observer;
pub mod paper;
pub mod shop;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use common::{EditionId, ShopId};
pub use edition::{
    Edition, EditionCatalog, EditionKind, Printable, VOLUME_DISCOUNT_RATE,
    VOLUME_DISCOUNT_THRESHOLD,
};
pub use employee::{Employee, ManagerTerms, Payable, Role};
pub use error::{DomainError, ParseVariantError};
pub use machine::{MachineDetails, MachineError, PrintJob, PrintingMachine};
pub use observer::{PrintObserver, TracingObserver};
pub use paper::{Paper, PaperSize, PaperType};
pub use shop::{FinancialReport, PrintingShop, ShopError, ordering};
pub use validation::ValidationError;
