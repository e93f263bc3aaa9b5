use common::EditionId;
use serde::{Deserialize, Serialize};

/// Outcome of one successful print on a machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    pub edition_id: EditionId,
    /// Sheets taken from the paper tray.
    pub sheets_used: i32,
    /// Estimated duration in whole minutes.
    pub printing_time_minutes: f64,
    /// Copies of this edition printed by this machine so far.
    pub machine_copies: u32,
    /// Copies of this edition printed anywhere so far.
    pub edition_copies: i32,
}
