//! Paper stock: sizes, types and per-sheet pricing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseVariantError;
use crate::validation::{ValidationError, non_negative_money};

/// ISO paper sizes stocked by the shop, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PaperSize {
    A1,
    A2,
    A3,
    A4,
    A5,
}

impl PaperSize {
    pub const ALL: [PaperSize; 5] = [
        PaperSize::A1,
        PaperSize::A2,
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
    ];

    /// Factor applied to a paper's base price for this size.
    pub fn price_multiplier(&self) -> f64 {
        match self {
            PaperSize::A1 => 4.0,
            PaperSize::A2 => 3.0,
            PaperSize::A3 => 2.0,
            PaperSize::A4 => 1.5,
            PaperSize::A5 => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaperSize::A1 => "A1",
            PaperSize::A2 => "A2",
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaperSize {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        PaperSize::ALL
            .into_iter()
            .find(|size| size.as_str() == token)
            .ok_or_else(|| ParseVariantError::new("paper size", token))
    }
}

/// Kind of paper stock. Keys the shop-level price list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaperType {
    Standard,
    Glossy,
    NewsPrint,
}

impl PaperType {
    pub const ALL: [PaperType; 3] = [PaperType::Standard, PaperType::Glossy, PaperType::NewsPrint];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaperType::Standard => "STANDARD",
            PaperType::Glossy => "GLOSSY",
            PaperType::NewsPrint => "NEWS_PRINT",
        }
    }
}

impl fmt::Display for PaperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaperType {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        PaperType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == token)
            .ok_or_else(|| ParseVariantError::new("paper type", token))
    }
}

/// A paper stock with its base price per sheet.
///
/// The base price already reflects the paper type; only the size
/// scales it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    size: PaperSize,
    paper_type: PaperType,
    base_price: f64,
}

impl Paper {
    pub fn new(
        size: PaperSize,
        paper_type: PaperType,
        base_price: f64,
    ) -> Result<Self, ValidationError> {
        let base_price =
            non_negative_money(base_price, |value| ValidationError::NegativeBasePrice { value })?;
        Ok(Self {
            size,
            paper_type,
            base_price,
        })
    }

    pub fn size(&self) -> PaperSize {
        self.size
    }

    pub fn paper_type(&self) -> PaperType {
        self.paper_type
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Price of one sheet: base price scaled by the size multiplier.
    pub fn calculate_price(&self) -> f64 {
        self.base_price * self.size.price_multiplier()
    }
}

impl fmt::Display for Paper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Paper{{size={}, type={}, basePrice={:?}}}",
            self.size, self.paper_type, self.base_price
        )
    }
}
