//! The line-oriented shop dump format.
//!
//! ```text
//! PrintingShopID: <uuid>
//! Name: <name>
//! Total Sales: <double>
//! Total Expenses: <double>
//! Employees:
//! Employee: <Type>: <name>, Base Salary: <d>, Salary: <d>
//! Machines:
//! Machine: Max Capacity: <n>, ..., Current Paper Load: <n>[, Edition: <edition>=<copies>]*
//! Printed Editions:
//! Edition: <edition>=<copies>
//! Paper Pricing:
//! <PAPER_TYPE>: <price>
//! ```
//!
//! `Total Expenses` and the `Printed Editions` section are derived data:
//! they are written for readers of the file and ignored on load.

mod decode;
mod encode;
pub mod records;

pub use decode::{ShopDecoder, decode_shop};
pub use encode::{encode_shop, shop_lines};

const SHOP_ID: &str = "PrintingShopID";
const NAME: &str = "Name";
const TOTAL_SALES: &str = "Total Sales";
const TOTAL_EXPENSES: &str = "Total Expenses";
const EMPLOYEES: &str = "Employees";
const EMPLOYEE: &str = "Employee";
const MACHINES: &str = "Machines";
const MACHINE: &str = "Machine";
const PRINTED_EDITIONS: &str = "Printed Editions";
const EDITION: &str = "Edition";
const PAPER_PRICING: &str = "Paper Pricing";
