use std::collections::HashMap;
use std::fmt;

use common::EditionId;

use crate::edition::{EditionCatalog, Printable};
use crate::observer::PrintObserver;
use crate::validation::ValidationError;

use super::{MachineError, PrintJob};

/// A printing machine with a paper tray and a per-edition copy ledger.
///
/// State changes only through [`load_paper`](Self::load_paper) and
/// [`print_edition`](Self::print_edition). Copy counts kept here are
/// scoped to this machine; they feed the shop's paper-cost accounting
/// and may differ from an edition's global `printed_copies` when the
/// same edition runs on several machines.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintingMachine {
    max_capacity: i32,
    pages_per_minute: i32,
    color_support: bool,
    current_paper_load: i32,
    /// Editions in the order this machine first printed them.
    printed_editions: Vec<EditionId>,
    edition_copies: HashMap<EditionId, u32>,
}

impl PrintingMachine {
    /// Creates an empty, unloaded machine.
    pub fn new(
        max_capacity: i32,
        pages_per_minute: i32,
        color_support: bool,
    ) -> Result<Self, ValidationError> {
        if max_capacity < 0 {
            return Err(ValidationError::NegativeCapacity {
                value: max_capacity,
            });
        }
        if pages_per_minute <= 0 {
            return Err(ValidationError::NonPositivePrintSpeed {
                value: pages_per_minute,
            });
        }

        Ok(Self {
            max_capacity,
            pages_per_minute,
            color_support,
            current_paper_load: 0,
            printed_editions: Vec::new(),
            edition_copies: HashMap::new(),
        })
    }

    pub fn max_capacity(&self) -> i32 {
        self.max_capacity
    }

    pub fn pages_per_minute(&self) -> i32 {
        self.pages_per_minute
    }

    pub fn color_support(&self) -> bool {
        self.color_support
    }

    pub fn current_paper_load(&self) -> i32 {
        self.current_paper_load
    }

    /// Overwrites the tray level without any capacity check.
    ///
    /// Used when restoring a machine from a saved dump.
    pub fn set_current_paper_load(&mut self, current_paper_load: i32) {
        self.current_paper_load = current_paper_load;
    }

    /// Editions printed on this machine, first print first.
    pub fn printed_editions(&self) -> &[EditionId] {
        &self.printed_editions
    }

    /// Copies of `edition_id` printed by this machine.
    pub fn copies_of(&self, edition_id: EditionId) -> u32 {
        self.edition_copies.get(&edition_id).copied().unwrap_or(0)
    }

    /// `(edition, copies)` pairs in first-print order.
    pub fn edition_copies(&self) -> impl Iterator<Item = (EditionId, u32)> + '_ {
        self.printed_editions
            .iter()
            .map(|id| (*id, self.copies_of(*id)))
    }

    /// Sets the machine-scoped copy count of an edition, registering the
    /// edition as printed if it is new to this machine.
    ///
    /// Used when restoring a machine from a saved dump.
    pub fn restore_edition_copies(&mut self, edition_id: EditionId, copies: u32) {
        if !self.edition_copies.contains_key(&edition_id) {
            self.printed_editions.push(edition_id);
        }
        self.edition_copies.insert(edition_id, copies);
    }

    /// Adds sheets to the paper tray.
    ///
    /// Fails with [`MachineError::CapacityExceeded`] if the tray would
    /// hold more than `max_capacity` sheets.
    pub fn load_paper(&mut self, sheets: i32) -> Result<(), MachineError> {
        let loaded = i64::from(self.current_paper_load) + i64::from(sheets);
        if loaded > i64::from(self.max_capacity) {
            metrics::counter!("paper_loads_rejected").increment(1);
            return Err(MachineError::CapacityExceeded {
                requested: sheets,
                current: self.current_paper_load,
                max_capacity: self.max_capacity,
            });
        }

        self.current_paper_load += sheets;
        metrics::counter!("paper_sheets_loaded_total").increment(u64::try_from(sheets).unwrap_or(0));
        tracing::debug!(sheets, load = self.current_paper_load, "paper loaded");
        Ok(())
    }

    /// Prints one copy of an edition.
    ///
    /// The color check runs before the paper check, so a color job on a
    /// black-and-white machine always fails with
    /// [`MachineError::UnsupportedColor`]. On success one sheet per page
    /// leaves the tray, the edition's global copy count goes up by one
    /// and so does this machine's count for it.
    pub fn print_edition(
        &mut self,
        editions: &mut EditionCatalog,
        edition_id: EditionId,
        is_color: bool,
        observer: &dyn PrintObserver,
    ) -> Result<PrintJob, MachineError> {
        let result = self.run_job(editions, edition_id, is_color, observer);
        match &result {
            Ok(_) => metrics::counter!("printing_jobs_total").increment(1),
            Err(error) => {
                metrics::counter!("printing_jobs_failed", "reason" => error.reason()).increment(1);
                observer.job_rejected(edition_id, error);
            }
        }
        result
    }

    fn run_job(
        &mut self,
        editions: &mut EditionCatalog,
        edition_id: EditionId,
        is_color: bool,
        observer: &dyn PrintObserver,
    ) -> Result<PrintJob, MachineError> {
        if is_color && !self.color_support {
            return Err(MachineError::UnsupportedColor);
        }

        let edition = editions
            .get_mut(edition_id)
            .ok_or(MachineError::EditionNotFound(edition_id))?;

        let required = edition.number_of_pages();
        if self.current_paper_load < required {
            return Err(MachineError::InsufficientPaper {
                required,
                available: self.current_paper_load,
            });
        }

        let minutes = self.calculate_printing_time(required);
        observer.printing_started(edition_id, edition, minutes);

        self.current_paper_load -= required;
        let edition_copies = edition.print();
        observer.edition_printed(edition_id, edition);

        let machine_copies = self.copies_of(edition_id) + 1;
        self.restore_edition_copies(edition_id, machine_copies);

        let job = PrintJob {
            edition_id,
            sheets_used: required,
            printing_time_minutes: minutes,
            machine_copies,
            edition_copies,
        };
        observer.job_completed(&job, edition);
        Ok(job)
    }

    /// Minutes needed for `total_pages`, rounded up.
    pub fn calculate_printing_time(&self, total_pages: i32) -> f64 {
        (f64::from(total_pages) / f64::from(self.pages_per_minute)).ceil()
    }

    /// Pages printed by this machine across all editions.
    ///
    /// Editions missing from `editions` count as zero pages.
    pub fn total_printed_pages(&self, editions: &EditionCatalog) -> i64 {
        self.edition_copies()
            .filter_map(|(id, copies)| {
                editions
                    .get(id)
                    .map(|edition| i64::from(edition.number_of_pages()) * i64::from(copies))
            })
            .sum()
    }
}

impl PrintingMachine {
    /// Renders the machine details with each printed edition written out
    /// in full, resolved against `editions`.
    pub fn display_with<'a>(&'a self, editions: &'a EditionCatalog) -> MachineDetails<'a> {
        MachineDetails {
            machine: self,
            editions: Some(editions),
        }
    }
}

/// Display adapter returned by [`PrintingMachine::display_with`].
#[derive(Debug, Clone, Copy)]
pub struct MachineDetails<'a> {
    machine: &'a PrintingMachine,
    editions: Option<&'a EditionCatalog>,
}

impl fmt::Display for MachineDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let machine = self.machine;
        writeln!(f, "Machine Details: ")?;
        writeln!(f, "Max Capacity: {}", machine.max_capacity)?;
        writeln!(f, "Pages Per Minute: {}", machine.pages_per_minute)?;
        writeln!(f, "Color Support: {}", machine.color_support)?;
        writeln!(f, "Current Paper Load: {}", machine.current_paper_load)?;
        writeln!(f, "Printed Editions: ")?;
        for (id, copies) in machine.edition_copies() {
            match self.editions.and_then(|editions| editions.get(id)) {
                Some(edition) => writeln!(f, "{edition} = {copies} copies")?,
                None => writeln!(f, "{id} = {copies} copies")?,
            }
        }
        Ok(())
    }
}

/// Without a catalog at hand, printed editions are shown by id.
impl fmt::Display for PrintingMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = MachineDetails {
            machine: self,
            editions: None,
        };
        fmt::Display::fmt(&details, f)
    }
}
