//! The printing shop aggregate and its financial reporting.

pub mod ordering;
mod printing_shop;
mod report;

pub use printing_shop::PrintingShop;
pub use report::FinancialReport;

use common::EditionId;
use thiserror::Error;

use crate::machine::MachineError;

/// Errors that can occur during shop operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    /// No machine at the given position.
    #[error("Machine not found at index {index}")]
    MachineNotFound { index: usize },

    /// The edition handle is not in the shop's catalog.
    #[error("Edition not found: {0}")]
    EditionNotFound(EditionId),

    /// Every machine refused the job.
    #[error("No suitable machine for {edition_id} (color: {is_color})")]
    NoSuitableMachine { edition_id: EditionId, is_color: bool },

    /// The selected machine refused the job.
    #[error(transparent)]
    Machine(#[from] MachineError),
}
