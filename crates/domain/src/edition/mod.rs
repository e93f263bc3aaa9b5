//! Printable editions: books, posters and newspapers.

mod catalog;

pub use catalog::EditionCatalog;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseVariantError;
use crate::paper::Paper;
use crate::validation::{ValidationError, non_negative_money};

/// Copies sold at full unit price before the volume discount applies.
pub const VOLUME_DISCOUNT_THRESHOLD: i32 = 100;

/// Price factor for every copy past [`VOLUME_DISCOUNT_THRESHOLD`].
pub const VOLUME_DISCOUNT_RATE: f64 = 0.90;

/// Capability of anything that can go through a printing machine.
pub trait Printable {
    /// Records one more printed copy and returns the new total.
    fn print(&mut self) -> i32;

    /// Cost of the paper consumed by one copy.
    fn calculate_printing_costs(&self) -> f64;
}

/// Variant-specific part of an edition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EditionKind {
    Book,
    Poster,
    /// A newspaper whose paper cost is multiplied by `discount_rate`
    /// once its page count exceeds `discount_threshold`.
    ///
    /// The rate is a plain multiplier: `0.90` takes 10% off, `1.1`
    /// adds 10%.
    Newspaper {
        discount_rate: f64,
        discount_threshold: i32,
    },
}

impl EditionKind {
    /// A newspaper without a configured discount.
    pub const PLAIN_NEWSPAPER: EditionKind = EditionKind::Newspaper {
        discount_rate: 0.0,
        discount_threshold: 0,
    };

    pub fn type_name(&self) -> &'static str {
        match self {
            EditionKind::Book => "Book",
            EditionKind::Poster => "Poster",
            EditionKind::Newspaper { .. } => "Newspaper",
        }
    }

    fn validate(self) -> Result<Self, ValidationError> {
        if let EditionKind::Newspaper {
            discount_rate,
            discount_threshold,
        } = self
        {
            if discount_rate < 0.0 {
                return Err(ValidationError::NegativeDiscountRate {
                    value: discount_rate,
                });
            }
            if discount_threshold < 0 {
                return Err(ValidationError::NegativeDiscountThreshold {
                    value: discount_threshold,
                });
            }
        }
        Ok(self)
    }
}

impl fmt::Display for EditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Parses a type name. `Newspaper` comes back as
/// [`EditionKind::PLAIN_NEWSPAPER`] since the name carries no discount.
impl FromStr for EditionKind {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Book" => Ok(EditionKind::Book),
            "Poster" => Ok(EditionKind::Poster),
            "Newspaper" => Ok(EditionKind::PLAIN_NEWSPAPER),
            other => Err(ParseVariantError::new("edition type", other)),
        }
    }
}

/// A printable document with its paper stock and sale price.
///
/// Only the constructors validate. The setters accept any value, so a
/// caller can, for instance, set a negative page count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edition {
    title: String,
    number_of_pages: i32,
    paper: Paper,
    unit_price: f64,
    printed_copies: i32,
    kind: EditionKind,
}

impl Edition {
    pub fn new(
        kind: EditionKind,
        title: impl Into<String>,
        number_of_pages: i32,
        paper: Paper,
        unit_price: f64,
    ) -> Result<Self, ValidationError> {
        if number_of_pages < 0 {
            return Err(ValidationError::NegativePageCount {
                pages: number_of_pages,
            });
        }
        let unit_price =
            non_negative_money(unit_price, |value| ValidationError::NegativeUnitPrice { value })?;
        let kind = kind.validate()?;

        Ok(Self {
            title: title.into(),
            number_of_pages,
            paper,
            unit_price,
            printed_copies: 0,
            kind,
        })
    }

    pub fn book(
        title: impl Into<String>,
        number_of_pages: i32,
        paper: Paper,
        unit_price: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(EditionKind::Book, title, number_of_pages, paper, unit_price)
    }

    pub fn poster(
        title: impl Into<String>,
        number_of_pages: i32,
        paper: Paper,
        unit_price: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(EditionKind::Poster, title, number_of_pages, paper, unit_price)
    }

    pub fn newspaper(
        title: impl Into<String>,
        number_of_pages: i32,
        paper: Paper,
        unit_price: f64,
        discount_rate: f64,
        discount_threshold: i32,
    ) -> Result<Self, ValidationError> {
        Self::new(
            EditionKind::Newspaper {
                discount_rate,
                discount_threshold,
            },
            title,
            number_of_pages,
            paper,
            unit_price,
        )
    }

    pub fn kind(&self) -> EditionKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn number_of_pages(&self) -> i32 {
        self.number_of_pages
    }

    pub fn paper(&self) -> &Paper {
        &self.paper
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Copies printed so far, across every machine.
    pub fn printed_copies(&self) -> i32 {
        self.printed_copies
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_number_of_pages(&mut self, number_of_pages: i32) {
        self.number_of_pages = number_of_pages;
    }

    pub fn set_paper(&mut self, paper: Paper) {
        self.paper = paper;
    }

    pub fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = unit_price;
    }

    pub fn set_printed_copies(&mut self, printed_copies: i32) {
        self.printed_copies = printed_copies;
    }

    /// Sales income for all printed copies.
    ///
    /// The first 100 copies sell at the unit price, the rest at 90% of it.
    pub fn calculate_income(&self) -> f64 {
        if self.printed_copies > VOLUME_DISCOUNT_THRESHOLD {
            let discounted = f64::from(self.printed_copies - VOLUME_DISCOUNT_THRESHOLD);
            f64::from(VOLUME_DISCOUNT_THRESHOLD) * self.unit_price
                + discounted * self.unit_price * VOLUME_DISCOUNT_RATE
        } else {
            f64::from(self.printed_copies) * self.unit_price
        }
    }
}

impl Printable for Edition {
    fn print(&mut self) -> i32 {
        self.printed_copies += 1;
        self.printed_copies
    }

    fn calculate_printing_costs(&self) -> f64 {
        let base_cost = self.paper.calculate_price() * f64::from(self.number_of_pages);
        match self.kind {
            EditionKind::Newspaper {
                discount_rate,
                discount_threshold,
            } if self.number_of_pages > discount_threshold => base_cost * discount_rate,
            _ => base_cost,
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edition: Type: {}, Title: {}, Number of Pages: {}, Paper: {}, Unit Price: {:?}, Printed Copies: {}",
            self.kind, self.title, self.number_of_pages, self.paper, self.unit_price, self.printed_copies
        )
    }
}
