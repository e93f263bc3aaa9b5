use std::fmt;

use serde::{Deserialize, Serialize};

/// Snapshot of a shop's books at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub total_salaries: f64,
    pub paper_costs: f64,
    pub total_expenses: f64,
    pub total_income: f64,
    pub total_sales: f64,
}

impl FinancialReport {
    /// Income minus expenses.
    pub fn profit(&self) -> f64 {
        self.total_income - self.total_expenses
    }
}

impl fmt::Display for FinancialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Salaries: {:.2}", self.total_salaries)?;
        writeln!(f, "Paper Costs: {:.2}", self.paper_costs)?;
        writeln!(f, "Total Expenses: {:.2}", self.total_expenses)?;
        writeln!(f, "Total Income: {:.2}", self.total_income)?;
        writeln!(f, "Total Sales: {:.2}", self.total_sales)?;
        write!(f, "Profit: {:.2}", self.profit())
    }
}
