use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use common::{EditionId, ShopId};

use crate::edition::{Edition, EditionCatalog};
use crate::employee::{Employee, Payable};
use crate::machine::{MachineError, PrintJob, PrintingMachine};
use crate::observer::{PrintObserver, TracingObserver};
use crate::paper::PaperType;

use super::{FinancialReport, ShopError};

/// Printing shop aggregate root.
///
/// Owns its staff, its machines and the catalog of editions those
/// machines print. Machines are addressed by their position in
/// [`machines`](Self::machines).
#[derive(Clone)]
pub struct PrintingShop {
    id: ShopId,
    name: String,
    employees: Vec<Employee>,
    machines: Vec<PrintingMachine>,
    editions: EditionCatalog,
    /// Shop price list, independent of each paper's own base price.
    paper_pricing: BTreeMap<PaperType, f64>,
    total_sales: f64,
    observer: Arc<dyn PrintObserver + Send + Sync>,
}

impl PrintingShop {
    /// Creates an empty shop with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ShopId::new(),
            name: name.into(),
            employees: Vec::new(),
            machines: Vec::new(),
            editions: EditionCatalog::new(),
            paper_pricing: BTreeMap::new(),
            total_sales: 0.0,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replaces the observer notified by print jobs and income totals.
    pub fn with_observer(mut self, observer: Arc<dyn PrintObserver + Send + Sync>) -> Self {
        self.observer = observer;
        self
    }

    pub fn id(&self) -> ShopId {
        self.id
    }

    pub fn set_id(&mut self, id: ShopId) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn total_sales(&self) -> f64 {
        self.total_sales
    }

    pub fn set_total_sales(&mut self, total_sales: f64) {
        self.total_sales = total_sales;
    }

    /// Adds `amount` to the sales total. Negative amounts are accepted.
    pub fn record_sale(&mut self, amount: f64) {
        self.total_sales += amount;
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    pub fn machines(&self) -> &[PrintingMachine] {
        &self.machines
    }

    pub fn machine(&self, index: usize) -> Option<&PrintingMachine> {
        self.machines.get(index)
    }

    /// Mutable access for loading paper.
    pub fn machine_mut(&mut self, index: usize) -> Option<&mut PrintingMachine> {
        self.machines.get_mut(index)
    }

    /// Adds a machine and returns its index.
    pub fn add_machine(&mut self, machine: PrintingMachine) -> usize {
        self.machines.push(machine);
        self.machines.len() - 1
    }

    pub fn editions(&self) -> &EditionCatalog {
        &self.editions
    }

    pub fn edition(&self, id: EditionId) -> Option<&Edition> {
        self.editions.get(id)
    }

    pub fn edition_mut(&mut self, id: EditionId) -> Option<&mut Edition> {
        self.editions.get_mut(id)
    }

    /// Registers an edition with the shop and returns its handle.
    pub fn add_edition(&mut self, edition: Edition) -> EditionId {
        self.editions.add(edition)
    }

    pub fn paper_pricing(&self) -> &BTreeMap<PaperType, f64> {
        &self.paper_pricing
    }

    pub fn set_paper_pricing(&mut self, paper_type: PaperType, price: f64) {
        self.paper_pricing.insert(paper_type, price);
    }

    /// Replaces the whole price list.
    pub fn replace_paper_pricing(&mut self, pricing: BTreeMap<PaperType, f64>) {
        self.paper_pricing = pricing;
    }

    /// Listed price of `paper_type`, or 0.0 when unlisted.
    pub fn price_for_paper(&self, paper_type: PaperType) -> f64 {
        self.paper_pricing.get(&paper_type).copied().unwrap_or(0.0)
    }

    /// Prints one copy of an edition on the machine at `machine_index`.
    #[tracing::instrument(skip(self), fields(shop = %self.name))]
    pub fn print_edition(
        &mut self,
        machine_index: usize,
        edition_id: EditionId,
        is_color: bool,
    ) -> Result<PrintJob, ShopError> {
        let machine = self
            .machines
            .get_mut(machine_index)
            .ok_or(ShopError::MachineNotFound {
                index: machine_index,
            })?;
        let job = machine.print_edition(
            &mut self.editions,
            edition_id,
            is_color,
            self.observer.as_ref(),
        )?;
        Ok(job)
    }

    /// Prints one copy on the first machine, in order, that accepts the job.
    ///
    /// Machines that refuse keep their state. Fails with
    /// [`ShopError::NoSuitableMachine`] when every machine refuses.
    #[tracing::instrument(skip(self), fields(shop = %self.name))]
    pub fn print_on_any_machine(
        &mut self,
        edition_id: EditionId,
        is_color: bool,
    ) -> Result<(usize, PrintJob), ShopError> {
        if !self.editions.contains(edition_id) {
            return Err(ShopError::EditionNotFound(edition_id));
        }

        for (index, machine) in self.machines.iter_mut().enumerate() {
            match machine.print_edition(
                &mut self.editions,
                edition_id,
                is_color,
                self.observer.as_ref(),
            ) {
                Ok(job) => return Ok((index, job)),
                Err(MachineError::UnsupportedColor | MachineError::InsufficientPaper { .. }) => {
                    continue;
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(ShopError::NoSuitableMachine {
            edition_id,
            is_color,
        })
    }

    /// Sum of every employee's salary.
    pub fn calculate_total_salaries(&self) -> f64 {
        self.employees.iter().map(Payable::calculate_salary).sum()
    }

    /// Paper spent by every machine.
    ///
    /// Uses each machine's own copy counts: for every edition a machine
    /// printed, `copies * pages * sheet price`.
    pub fn calculate_paper_costs(&self) -> f64 {
        let mut total = 0.0;
        for machine in &self.machines {
            for (id, copies) in machine.edition_copies() {
                let Some(edition) = self.editions.get(id) else {
                    tracing::warn!(edition_id = %id, "machine refers to an unknown edition");
                    continue;
                };
                total += f64::from(copies)
                    * f64::from(edition.number_of_pages())
                    * edition.paper().calculate_price();
            }
        }
        total
    }

    pub fn calculate_total_expenses(&self) -> f64 {
        self.calculate_total_salaries() + self.calculate_paper_costs()
    }

    /// Sales income of the printed editions.
    ///
    /// Each edition counts once per machine that printed it, with its
    /// income taken from the edition's global copy count. An edition
    /// printed on two machines is therefore counted twice.
    pub fn calculate_total_income(&self) -> f64 {
        let mut total = 0.0;
        for machine in &self.machines {
            for &id in machine.printed_editions() {
                let Some(edition) = self.editions.get(id) else {
                    tracing::warn!(edition_id = %id, "machine refers to an unknown edition");
                    continue;
                };
                let income = edition.calculate_income();
                self.observer.income_calculated(id, edition, income);
                total += income;
            }
        }
        total
    }

    pub fn financial_report(&self) -> FinancialReport {
        let total_salaries = self.calculate_total_salaries();
        let paper_costs = self.calculate_paper_costs();
        FinancialReport {
            total_salaries,
            paper_costs,
            total_expenses: total_salaries + paper_costs,
            total_income: self.calculate_total_income(),
            total_sales: self.total_sales,
        }
    }
}

impl fmt::Debug for PrintingShop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintingShop")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("employees", &self.employees)
            .field("machines", &self.machines)
            .field("editions", &self.editions)
            .field("paper_pricing", &self.paper_pricing)
            .field("total_sales", &self.total_sales)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for PrintingShop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PrintingShop{{id={}, name='{}', number of employees={}, total sales={:?}}}",
            self.id,
            self.name,
            self.employees.len(),
            self.total_sales
        )
    }
}
