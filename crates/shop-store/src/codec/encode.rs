use domain::{Edition, EditionCatalog, PrintingMachine, PrintingShop};

use super::records::{format_double, write_employee, write_machine, write_pricing, write_printed_entry};
use super::{
    EDITION, EMPLOYEE, EMPLOYEES, MACHINE, MACHINES, NAME, PAPER_PRICING, PRINTED_EDITIONS,
    SHOP_ID, TOTAL_EXPENSES, TOTAL_SALES,
};

/// Renders a shop as the lines of its dump, without line terminators.
pub fn shop_lines(shop: &PrintingShop) -> Vec<String> {
    let mut lines = vec![
        format!("{SHOP_ID}: {}", shop.id()),
        format!("{NAME}: {}", shop.name()),
        format!("{TOTAL_SALES}: {}", format_double(shop.total_sales())),
        format!(
            "{TOTAL_EXPENSES}: {}",
            format_double(shop.calculate_total_expenses())
        ),
        format!("{EMPLOYEES}:"),
    ];

    lines.extend(
        shop.employees()
            .iter()
            .map(|employee| format!("{EMPLOYEE}: {}", write_employee(employee))),
    );

    lines.push(format!("{MACHINES}:"));
    for machine in shop.machines() {
        let printed = printed_by(machine, shop.editions());
        lines.push(format!("{MACHINE}: {}", write_machine(machine, &printed)));
    }

    lines.push(format!("{PRINTED_EDITIONS}:"));
    for machine in shop.machines() {
        for (edition, copies) in printed_by(machine, shop.editions()) {
            lines.push(format!("{EDITION}: {}", write_printed_entry(edition, copies)));
        }
    }

    lines.push(format!("{PAPER_PRICING}:"));
    lines.extend(
        shop.paper_pricing()
            .iter()
            .map(|(paper_type, price)| write_pricing(*paper_type, *price)),
    );

    lines
}

/// Renders a shop as a complete dump, one record per line.
pub fn encode_shop(shop: &PrintingShop) -> String {
    let mut dump = String::new();
    for line in shop_lines(shop) {
        dump.push_str(&line);
        dump.push('\n');
    }
    dump
}

/// The editions a machine printed, in first-print order, resolved
/// against the shop's catalog.
fn printed_by<'a>(
    machine: &PrintingMachine,
    editions: &'a EditionCatalog,
) -> Vec<(&'a Edition, u32)> {
    machine
        .edition_copies()
        .filter_map(|(id, copies)| match editions.get(id) {
            Some(edition) => Some((edition, copies)),
            None => {
                tracing::warn!(edition_id = %id, "machine refers to an edition missing from the catalog");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use domain::{Employee, Paper, PaperSize, PaperType};

    use super::*;

    #[test]
    fn test_empty_shop_layout() {
        let shop = PrintingShop::new("Empty");
        let lines = shop_lines(&shop);
        assert_eq!(
            lines,
            vec![
                format!("PrintingShopID: {}", shop.id()),
                "Name: Empty".to_string(),
                "Total Sales: 0.0".to_string(),
                "Total Expenses: 0.0".to_string(),
                "Employees:".to_string(),
                "Machines:".to_string(),
                "Printed Editions:".to_string(),
                "Paper Pricing:".to_string(),
            ]
        );
    }

    #[test]
    fn test_pricing_follows_declaration_order() {
        let mut shop = PrintingShop::new("Priced");
        shop.set_paper_pricing(PaperType::NewsPrint, 0.05);
        shop.set_paper_pricing(PaperType::Standard, 0.12);
        let lines = shop_lines(&shop);
        let tail: Vec<&str> = lines.iter().rev().take(2).map(String::as_str).collect();
        assert_eq!(tail, vec!["NEWS_PRINT: 0.05", "STANDARD: 0.12"]);
    }

    #[test]
    fn test_printed_editions_section_mirrors_machines() {
        let mut shop = PrintingShop::new("Busy");
        shop.add_employee(Employee::operator("Ivan", 800.0).unwrap());
        let paper = Paper::new(PaperSize::A4, PaperType::Standard, 0.1).unwrap();
        let flyer = shop.add_edition(Edition::poster("Flyer", 1, paper, 2.0).unwrap());
        let machine = shop.add_machine(PrintingMachine::new(10, 10, false).unwrap());
        shop.machine_mut(machine).unwrap().load_paper(10).unwrap();
        shop.print_edition(machine, flyer, false).unwrap();
        shop.print_edition(machine, flyer, false).unwrap();

        let dump = encode_shop(&shop);
        let expected_entry = "Type: Poster, Title: Flyer, Number of Pages: 1, Size: A4, \
                              Type: STANDARD, Base Price: 0.1, Unit Price: 2.0, Printed Copies: 2=2";
        assert!(dump.contains(&format!(
            "Machine: Max Capacity: 10, Pages Per Minute: 10, Color Support: false, \
             Current Paper Load: 8, Edition: {expected_entry}\n"
        )));
        assert!(dump.contains(&format!("Printed Editions:\nEdition: {expected_entry}\n")));
        assert!(dump.contains("Employee: Operator: Ivan, Base Salary: 800.0, Salary: 800.0\n"));
        assert!(dump.ends_with("Paper Pricing:\n"));
    }
}
