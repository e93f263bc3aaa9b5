//! Printing machines and their paper ledger.

mod job;
mod printing_machine;

pub use job::PrintJob;
pub use printing_machine::{MachineDetails, PrintingMachine};

use common::EditionId;
use thiserror::Error;

/// Errors that can occur during machine operations.
///
/// A failed operation leaves the machine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// Loading would overflow the paper tray.
    #[error(
        "Cannot load paper, because the machine capacity is exceeded ({current} + {requested} > {max_capacity})."
    )]
    CapacityExceeded {
        requested: i32,
        current: i32,
        max_capacity: i32,
    },

    /// A color job was sent to a black-and-white machine.
    #[error("This machine does not support color printing.")]
    UnsupportedColor,

    /// Not enough sheets are loaded for the job.
    #[error("There isn't enough paper to print the publication ({available} loaded, {required} required).")]
    InsufficientPaper { required: i32, available: i32 },

    /// The edition handle points at nothing.
    #[error("Edition not found: {0}")]
    EditionNotFound(EditionId),
}

impl MachineError {
    /// Short label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            MachineError::CapacityExceeded { .. } => "capacity_exceeded",
            MachineError::UnsupportedColor => "unsupported_color",
            MachineError::InsufficientPaper { .. } => "insufficient_paper",
            MachineError::EditionNotFound(_) => "edition_not_found",
        }
    }
}
