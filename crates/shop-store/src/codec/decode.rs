use common::ShopId;
use domain::PrintingShop;

use super::records::{parse_employee, parse_machine, parse_pricing, parse_printed_entry};
use super::{
    EDITION, EMPLOYEE, EMPLOYEES, MACHINE, MACHINES, NAME, PAPER_PRICING, PRINTED_EDITIONS,
    SHOP_ID, TOTAL_EXPENSES, TOTAL_SALES,
};
use crate::error::{Result, StoreError};

/// Rebuilds a shop from dump lines fed one at a time.
///
/// Lines that fail to parse are logged and skipped; everything that did
/// parse is kept.
#[derive(Debug)]
pub struct ShopDecoder {
    shop: PrintingShop,
    skipped: usize,
}

impl ShopDecoder {
    /// Starts from an empty shop named `default_name`, used when the
    /// dump has no `Name:` line.
    pub fn new(default_name: &str) -> Self {
        Self {
            shop: PrintingShop::new(default_name),
            skipped: 0,
        }
    }

    /// Applies one line; `line_number` is only used for diagnostics.
    pub fn feed(&mut self, line_number: usize, line: &str) {
        if let Err(error) = self.apply(line_number, line) {
            self.skip(line_number, &error);
        }
    }

    /// Number of lines skipped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn finish(self) -> PrintingShop {
        self.shop
    }

    fn skip(&mut self, line_number: usize, error: &StoreError) {
        self.skipped += 1;
        metrics::counter!("shop_store_lines_skipped").increment(1);
        tracing::warn!(line = line_number, %error, "skipping unreadable record");
    }

    fn apply(&mut self, line_number: usize, line: &str) -> Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }
        let (tag, rest) = line.split_once(':').ok_or_else(|| StoreError::UnknownRecord {
            tag: line.to_string(),
        })?;
        let value = rest.strip_prefix(' ').unwrap_or(rest);

        match tag {
            SHOP_ID => {
                let id = value
                    .parse::<ShopId>()
                    .map_err(|e| StoreError::malformed("shop id", e.to_string()))?;
                self.shop.set_id(id);
            }
            NAME => self.shop.set_name(value),
            TOTAL_SALES => {
                let total_sales = value
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| StoreError::malformed("total sales", e.to_string()))?;
                self.shop.set_total_sales(total_sales);
            }
            TOTAL_EXPENSES => tracing::debug!(value, "ignoring derived total expenses"),
            EMPLOYEES | MACHINES | PRINTED_EDITIONS | PAPER_PRICING => {
                if !value.trim().is_empty() {
                    return Err(StoreError::malformed("section header", value));
                }
            }
            EMPLOYEE => self.shop.add_employee(parse_employee(value)?),
            MACHINE => {
                let record = parse_machine(value)?;
                for error in &record.rejected {
                    self.skip(line_number, error);
                }
                let mut machine = record.machine;
                for (edition, copies) in record.editions {
                    let id = self.shop.add_edition(edition);
                    machine.restore_edition_copies(id, copies);
                }
                self.shop.add_machine(machine);
            }
            EDITION => {
                // Derived from the machine lines; parsed only to report damage.
                let (edition, copies) = parse_printed_entry(value)?;
                tracing::trace!(title = edition.title(), copies, "skipping printed edition summary");
            }
            other => match parse_pricing(line) {
                Ok((paper_type, price)) => self.shop.set_paper_pricing(paper_type, price),
                Err(_) if other.parse::<domain::PaperType>().is_err() => {
                    return Err(StoreError::UnknownRecord {
                        tag: other.to_string(),
                    });
                }
                Err(error) => return Err(error),
            },
        }
        Ok(())
    }
}

/// Rebuilds a shop from a complete dump.
///
/// Never fails: malformed lines are skipped and a dump without a name
/// yields a shop called `default_name`.
pub fn decode_shop(input: &str, default_name: &str) -> PrintingShop {
    let mut decoder = ShopDecoder::new(default_name);
    for (index, line) in input.lines().enumerate() {
        decoder.feed(index + 1, line);
    }
    decoder.finish()
}
