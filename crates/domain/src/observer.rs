//! Hooks for the progress messages of the printing workflow.
//!
//! Machines and shops report what they do through a [`PrintObserver`]
//! handed to them by the caller instead of writing to a console.

use common::EditionId;

use crate::edition::Edition;
use crate::machine::{MachineError, PrintJob};

/// Receives notifications from the printing workflow.
///
/// Every method has an empty default so observers implement only the
/// points they care about.
pub trait PrintObserver {
    /// A job passed its checks and is about to consume paper.
    fn printing_started(&self, _edition_id: EditionId, _edition: &Edition, _minutes: f64) {}

    /// An edition's global copy count went up by one.
    fn edition_printed(&self, _edition_id: EditionId, _edition: &Edition) {}

    /// A machine finished a job.
    fn job_completed(&self, _job: &PrintJob, _edition: &Edition) {}

    /// A machine refused a job; its state is unchanged.
    fn job_rejected(&self, _edition_id: EditionId, _error: &MachineError) {}

    /// An edition's income was evaluated for a shop-level total.
    fn income_calculated(&self, _edition_id: EditionId, _edition: &Edition, _income: f64) {}
}

/// Default observer: turns every notification into a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PrintObserver for TracingObserver {
    fn printing_started(&self, edition_id: EditionId, edition: &Edition, minutes: f64) {
        tracing::debug!(%edition_id, title = edition.title(), minutes, "printing started");
    }

    fn edition_printed(&self, edition_id: EditionId, edition: &Edition) {
        tracing::debug!(
            %edition_id,
            kind = %edition.kind(),
            title = edition.title(),
            printed_copies = edition.printed_copies(),
            "edition printed"
        );
    }

    fn job_completed(&self, job: &PrintJob, edition: &Edition) {
        tracing::info!(
            edition_id = %job.edition_id,
            title = edition.title(),
            machine_copies = job.machine_copies,
            sheets = job.sheets_used,
            "printed publication"
        );
    }

    fn job_rejected(&self, edition_id: EditionId, error: &MachineError) {
        tracing::warn!(%edition_id, %error, "print job rejected");
    }

    fn income_calculated(&self, edition_id: EditionId, edition: &Edition, income: f64) {
        tracing::trace!(
            %edition_id,
            printed_copies = edition.printed_copies(),
            income,
            "income calculated"
        );
    }
}
