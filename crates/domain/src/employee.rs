//! Shop staff and salary rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, non_negative_money};

/// Anything the shop pays a salary to.
pub trait Payable {
    fn calculate_salary(&self) -> f64;
}

/// Bonus terms of a manager.
///
/// The bonus is paid only while `current_revenue` is strictly above
/// `revenue_threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ManagerTerms {
    bonus_percentage: f64,
    revenue_threshold: f64,
    current_revenue: f64,
}

impl ManagerTerms {
    pub fn new(
        bonus_percentage: f64,
        revenue_threshold: f64,
        current_revenue: f64,
    ) -> Result<Self, ValidationError> {
        if !(0.0..=100.0).contains(&bonus_percentage) {
            return Err(ValidationError::BonusOutOfRange {
                value: bonus_percentage,
            });
        }
        let revenue_threshold =
            non_negative_money(revenue_threshold, |value| ValidationError::NegativeRevenue { value })?;
        let current_revenue =
            non_negative_money(current_revenue, |value| ValidationError::NegativeRevenue { value })?;

        Ok(Self {
            bonus_percentage,
            revenue_threshold,
            current_revenue,
        })
    }

    pub fn bonus_percentage(&self) -> f64 {
        self.bonus_percentage
    }

    pub fn revenue_threshold(&self) -> f64 {
        self.revenue_threshold
    }

    pub fn current_revenue(&self) -> f64 {
        self.current_revenue
    }

    pub fn set_current_revenue(&mut self, current_revenue: f64) -> Result<(), ValidationError> {
        self.current_revenue =
            non_negative_money(current_revenue, |value| ValidationError::NegativeRevenue { value })?;
        Ok(())
    }

    pub fn earns_bonus(&self) -> bool {
        self.current_revenue > self.revenue_threshold
    }
}

/// What an employee does in the shop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Operator,
    Manager(ManagerTerms),
}

impl Role {
    pub fn type_name(&self) -> &'static str {
        match self {
            Role::Operator => "Operator",
            Role::Manager(_) => "Manager",
        }
    }
}

/// A member of staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    base_salary: f64,
    role: Role,
}

impl Employee {
    pub fn new(name: impl Into<String>, base_salary: f64, role: Role) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let base_salary =
            non_negative_money(base_salary, |value| ValidationError::NegativeSalary { value })?;

        Ok(Self {
            name,
            base_salary,
            role,
        })
    }

    pub fn operator(name: impl Into<String>, base_salary: f64) -> Result<Self, ValidationError> {
        Self::new(name, base_salary, Role::Operator)
    }

    pub fn manager(
        name: impl Into<String>,
        base_salary: f64,
        bonus_percentage: f64,
        revenue_threshold: f64,
        current_revenue: f64,
    ) -> Result<Self, ValidationError> {
        let employee = Self::new(name, base_salary, Role::Operator)?;
        let terms = ManagerTerms::new(bonus_percentage, revenue_threshold, current_revenue)?;
        Ok(Self {
            role: Role::Manager(terms),
            ..employee
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_salary(&self) -> f64 {
        self.base_salary
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn is_manager(&self) -> bool {
        matches!(self.role, Role::Manager(_))
    }

    /// Bonus terms, for managers only.
    pub fn manager_terms_mut(&mut self) -> Option<&mut ManagerTerms> {
        match &mut self.role {
            Role::Manager(terms) => Some(terms),
            Role::Operator => None,
        }
    }
}

impl Payable for Employee {
    fn calculate_salary(&self) -> f64 {
        match &self.role {
            Role::Manager(terms) if terms.earns_bonus() => {
                self.base_salary + (self.base_salary * terms.bonus_percentage) / 100.0
            }
            _ => self.base_salary,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Employee: {}, Base Salary: {:?}",
            self.role.type_name(),
            self.name,
            self.base_salary
        )?;
        if let Role::Manager(terms) = &self.role {
            write!(
                f,
                ", Revenue Limit: {:?}, Bonus Percentage: {:?}, Current Revenue: {:?}",
                terms.revenue_threshold, terms.bonus_percentage, terms.current_revenue
            )?;
        }
        Ok(())
    }
}
