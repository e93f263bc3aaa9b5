//! Writers and parsers for the individual record kinds.
//!
//! Records are comma-separated `Label: value` fields in a fixed order.
//! Parsers check each label and parse from both ends where a free-text
//! field (a title or a name) may itself contain the separator.

use std::fmt::Display;
use std::str::FromStr;

use domain::{
    Edition, EditionKind, Employee, Paper, PaperSize, PaperType, Payable, PrintingMachine,
};

use crate::error::{Result, StoreError};

/// Separator between a machine's own fields and each printed edition.
pub const EDITION_SEPARATOR: &str = ", Edition: ";

const FIELD_SEPARATOR: &str = ", ";

/// Formats a double so that parsing it back yields the same value.
///
/// Whole numbers keep their `.0` suffix.
pub fn format_double(value: f64) -> String {
    format!("{value:?}")
}

/// Kinds an inline edition can start with after [`EDITION_SEPARATOR`].
const EDITION_KINDS: [EditionKind; 3] = [
    EditionKind::Book,
    EditionKind::Poster,
    EditionKind::PLAIN_NEWSPAPER,
];

/// A machine line: the machine itself and the editions it has printed,
/// each with its machine-scoped copy count.
///
/// Inline editions that failed to parse are kept in `rejected` so the
/// machine survives them.
#[derive(Debug)]
pub struct MachineRecord {
    pub machine: PrintingMachine,
    pub editions: Vec<(Edition, u32)>,
    pub rejected: Vec<StoreError>,
}

pub fn write_employee(employee: &Employee) -> String {
    format!(
        "{}: {}, Base Salary: {}, Salary: {}",
        employee.role().type_name(),
        employee.name(),
        format_double(employee.base_salary()),
        format_double(employee.calculate_salary()),
    )
}

/// Parses `<Type>: <name>, Base Salary: <d>, Salary: <d>`.
///
/// Managers come back with zeroed bonus terms and an unknown type comes
/// back as an operator. The `Salary` field is derived and ignored.
pub fn parse_employee(record: &str) -> Result<Employee> {
    const RECORD: &str = "employee";

    let (type_name, rest) = record
        .split_once(": ")
        .ok_or_else(|| StoreError::malformed(RECORD, "missing employee type"))?;
    let rest = rest
        .rsplit_once(", Salary: ")
        .map_or(rest, |(head, _salary)| head);
    let (name, base_salary) = rest
        .rsplit_once(", Base Salary: ")
        .ok_or_else(|| StoreError::malformed(RECORD, "missing Base Salary"))?;
    let base_salary = parse_value(base_salary, RECORD, "Base Salary")?;

    let employee = match type_name.trim() {
        "Manager" => Employee::manager(name, base_salary, 0.0, 0.0, 0.0)?,
        "Operator" => Employee::operator(name, base_salary)?,
        other => {
            tracing::warn!(
                employee_type = other,
                name,
                "unknown employee type, restoring as operator"
            );
            Employee::operator(name, base_salary)?
        }
    };
    Ok(employee)
}

pub fn write_edition(edition: &Edition) -> String {
    let paper = edition.paper();
    format!(
        "Type: {}, Title: {}, Number of Pages: {}, Size: {}, Type: {}, Base Price: {}, Unit Price: {}, Printed Copies: {}",
        edition.kind(),
        edition.title(),
        edition.number_of_pages(),
        paper.size(),
        paper.paper_type(),
        format_double(paper.base_price()),
        format_double(edition.unit_price()),
        edition.printed_copies(),
    )
}

/// Parses an edition record, restoring its printed copy count.
///
/// Newspapers come back without a discount since the record does not
/// carry one.
pub fn parse_edition(record: &str) -> Result<Edition> {
    const RECORD: &str = "edition";

    let parts: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
    if parts.len() < 8 {
        return Err(StoreError::malformed(
            RECORD,
            format!("expected 8 fields, found {}", parts.len()),
        ));
    }
    // Everything between the type and the last six fields is the title.
    let tail = parts.len() - 6;

    let kind: EditionKind = field(parts[0], "Type", RECORD)?
        .parse()
        .map_err(|e: domain::ParseVariantError| StoreError::malformed(RECORD, e.to_string()))?;
    let joined_title = parts[1..tail].join(FIELD_SEPARATOR);
    let title = field(&joined_title, "Title", RECORD)?;
    let number_of_pages = labelled(parts[tail], "Number of Pages", RECORD)?;
    let size: PaperSize = field(parts[tail + 1], "Size", RECORD)?
        .parse()
        .map_err(|e: domain::ParseVariantError| StoreError::malformed(RECORD, e.to_string()))?;
    let paper_type: PaperType = field(parts[tail + 2], "Type", RECORD)?
        .parse()
        .map_err(|e: domain::ParseVariantError| StoreError::malformed(RECORD, e.to_string()))?;
    let base_price = labelled(parts[tail + 3], "Base Price", RECORD)?;
    let unit_price = labelled(parts[tail + 4], "Unit Price", RECORD)?;
    let printed_copies = labelled(parts[tail + 5], "Printed Copies", RECORD)?;

    let paper = Paper::new(size, paper_type, base_price)?;
    let mut edition = Edition::new(kind, title, number_of_pages, paper, unit_price)?;
    edition.set_printed_copies(printed_copies);
    Ok(edition)
}

/// Writes `<edition record>=<copies>`.
pub fn write_printed_entry(edition: &Edition, copies: u32) -> String {
    format!("{}={copies}", write_edition(edition))
}

/// Parses `<edition record>=<copies>`.
pub fn parse_printed_entry(entry: &str) -> Result<(Edition, u32)> {
    let (edition, copies) = entry
        .rsplit_once('=')
        .ok_or_else(|| StoreError::malformed("printed edition", "missing copy count"))?;
    let copies = parse_value(copies, "printed edition", "copies")?;
    Ok((parse_edition(edition)?, copies))
}

pub fn write_machine(machine: &PrintingMachine, editions: &[(&Edition, u32)]) -> String {
    let mut line = format!(
        "Max Capacity: {}, Pages Per Minute: {}, Color Support: {}, Current Paper Load: {}",
        machine.max_capacity(),
        machine.pages_per_minute(),
        machine.color_support(),
        machine.current_paper_load(),
    );
    for (edition, copies) in editions {
        line.push_str(EDITION_SEPARATOR);
        line.push_str(&write_printed_entry(edition, *copies));
    }
    line
}

/// Parses a machine record and the printed editions appended to it.
///
/// The paper load is restored as written, without a capacity check.
/// Only the four machine fields are required; an inline edition that
/// does not parse is reported in [`MachineRecord::rejected`].
pub fn parse_machine(record: &str) -> Result<MachineRecord> {
    const RECORD: &str = "machine";

    let (header, entries) = split_inline_editions(record);
    let fields: Vec<&str> = header.split(FIELD_SEPARATOR).collect();
    let [capacity, speed, color, load] = fields.as_slice() else {
        return Err(StoreError::malformed(
            RECORD,
            format!("expected 4 fields, found {}", fields.len()),
        ));
    };

    let mut machine = PrintingMachine::new(
        labelled(capacity, "Max Capacity", RECORD)?,
        labelled(speed, "Pages Per Minute", RECORD)?,
        labelled(color, "Color Support", RECORD)?,
    )?;
    machine.set_current_paper_load(labelled(load, "Current Paper Load", RECORD)?);

    let mut editions = Vec::with_capacity(entries.len());
    let mut rejected = Vec::new();
    for entry in entries {
        match parse_printed_entry(entry) {
            Ok(parsed) => editions.push(parsed),
            Err(error) => rejected.push(error),
        }
    }
    Ok(MachineRecord {
        machine,
        editions,
        rejected,
    })
}

/// Splits a machine record into its own fields and the inline edition
/// entries.
///
/// An entry starts only where the separator is followed by
/// `Type: <kind>, Title: `, so titles containing the separator stay whole.
fn split_inline_editions(record: &str) -> (&str, Vec<&str>) {
    let mut starts = Vec::new();
    let mut from = 0;
    while let Some(found) = record[from..].find(EDITION_SEPARATOR) {
        let at = from + found;
        from = at + EDITION_SEPARATOR.len();
        if starts_edition(&record[from..]) {
            starts.push(at);
        }
    }

    let header = &record[..starts.first().copied().unwrap_or(record.len())];
    let entries = starts
        .iter()
        .enumerate()
        .map(|(i, &at)| {
            let end = starts.get(i + 1).copied().unwrap_or(record.len());
            &record[at + EDITION_SEPARATOR.len()..end]
        })
        .collect();
    (header, entries)
}

fn starts_edition(rest: &str) -> bool {
    let Some(rest) = rest.strip_prefix("Type: ") else {
        return false;
    };
    EDITION_KINDS.iter().any(|kind| {
        rest.strip_prefix(kind.type_name())
            .is_some_and(|rest| rest.starts_with(", Title: "))
    })
}

pub fn write_pricing(paper_type: PaperType, price: f64) -> String {
    format!("{paper_type}: {}", format_double(price))
}

/// Parses `<PAPER_TYPE>: <price>`.
pub fn parse_pricing(record: &str) -> Result<(PaperType, f64)> {
    const RECORD: &str = "paper pricing";

    let (paper_type, price) = record
        .split_once(':')
        .ok_or_else(|| StoreError::malformed(RECORD, "missing ':'"))?;
    let paper_type = paper_type
        .parse()
        .map_err(|e: domain::ParseVariantError| StoreError::malformed(RECORD, e.to_string()))?;
    Ok((paper_type, parse_value(price, RECORD, "price")?))
}

/// Returns the value of a `Label: value` field after checking its label.
fn field<'a>(segment: &'a str, label: &str, record: &'static str) -> Result<&'a str> {
    segment
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(": "))
        .ok_or_else(|| StoreError::malformed(record, format!("expected {label:?} in {segment:?}")))
}

fn labelled<T>(segment: &str, label: &str, record: &'static str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    parse_value(field(segment, label, record)?, record, label)
}

fn parse_value<T>(value: &str, record: &'static str, label: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| StoreError::malformed(record, format!("{label}: {e} ({value:?})")))
}
