//! Integration tests for saving and loading shops.
//!
//! These tests write real files into temporary directories and check
//! what survives a save followed by a load.

use common::Config;
use domain::{
    Edition, EditionKind, Employee, Paper, PaperSize, PaperType, Payable, PrintingMachine,
    PrintingShop,
};
use shop_store::{FileShopStore, InMemoryShopStore, ShopStore, StoreError, decode_shop, encode_shop};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn paper(size: PaperSize, paper_type: PaperType, base_price: f64) -> Paper {
    Paper::new(size, paper_type, base_price).unwrap()
}

/// A shop with staff, two machines, a shared edition and a price list.
fn working_shop() -> PrintingShop {
    let mut shop = PrintingShop::new("Riverside Print");
    shop.record_sale(2500.0);
    shop.add_employee(Employee::manager("Maria", 1000.0, 10.0, 5000.0, 6000.0).unwrap());
    shop.add_employee(Employee::operator("Ivan", 800.0).unwrap());
    shop.set_paper_pricing(PaperType::Glossy, 0.3);
    shop.set_paper_pricing(PaperType::Standard, 0.12);

    let poster = shop.add_edition(
        Edition::poster(
            "Summer Festival",
            10,
            paper(PaperSize::A2, PaperType::Glossy, 0.25),
            6.0,
        )
        .unwrap(),
    );
    let flyer = shop.add_edition(
        Edition::poster(
            "Flyer",
            1,
            paper(PaperSize::A5, PaperType::Standard, 0.1),
            2.0,
        )
        .unwrap(),
    );

    let color = shop.add_machine(PrintingMachine::new(1500, 50, true).unwrap());
    shop.machine_mut(color).unwrap().load_paper(1500).unwrap();
    for _ in 0..150 {
        shop.print_edition(color, poster, true).unwrap();
    }

    let mono = shop.add_machine(PrintingMachine::new(500, 40, false).unwrap());
    shop.machine_mut(mono).unwrap().load_paper(100).unwrap();
    shop.print_edition(mono, flyer, false).unwrap();
    shop.print_edition(mono, flyer, false).unwrap();

    shop
}

mod file_store {
    use super::*;

    #[test]
    fn working_shop_survives_a_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileShopStore::new(dir.path().join("shop.txt"));
        let shop = working_shop();

        store.save(&shop).unwrap();
        let restored = store.try_load().unwrap();

        assert_eq!(restored.id(), shop.id());
        assert_eq!(restored.name(), "Riverside Print");
        assert_eq!(restored.total_sales(), 2500.0);
        assert_eq!(restored.paper_pricing(), shop.paper_pricing());

        let names: Vec<&str> = restored.employees().iter().map(Employee::name).collect();
        assert_eq!(names, vec!["Maria", "Ivan"]);
        assert!(restored.employees()[0].is_manager());

        assert_eq!(restored.machines().len(), 2);
        let color = restored.machine(0).unwrap();
        assert_eq!(color.max_capacity(), 1500);
        assert_eq!(color.pages_per_minute(), 50);
        assert!(color.color_support());
        assert_eq!(color.current_paper_load(), 0);
        assert_eq!(color.total_printed_pages(restored.editions()), 1500);

        let poster_id = color.printed_editions()[0];
        assert_eq!(color.copies_of(poster_id), 150);
        let poster = restored.edition(poster_id).unwrap();
        assert_eq!(poster.title(), "Summer Festival");
        assert_eq!(poster.printed_copies(), 150);

        let mono = restored.machine(1).unwrap();
        assert_eq!(mono.current_paper_load(), 98);
        assert_eq!(mono.copies_of(mono.printed_editions()[0]), 2);

        assert_close(restored.calculate_paper_costs(), shop.calculate_paper_costs());
        assert_close(restored.calculate_total_income(), shop.calculate_total_income());
    }

    #[test]
    fn manager_bonus_terms_are_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileShopStore::new(dir.path().join("shop.txt"));
        let shop = working_shop();
        assert_close(shop.calculate_total_salaries(), 1900.0);

        store.save(&shop).unwrap();
        let restored = store.load();

        let maria = &restored.employees()[0];
        assert_eq!(maria.base_salary(), 1000.0);
        assert_close(maria.calculate_salary(), 1000.0);
        assert_close(restored.calculate_total_salaries(), 1800.0);
    }

    #[test]
    fn restored_shop_keeps_printing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileShopStore::new(dir.path().join("shop.txt"));
        store.save(&working_shop()).unwrap();

        let mut restored = store.load();
        let mono = restored.machine(1).unwrap();
        let flyer = mono.printed_editions()[0];
        restored.print_edition(1, flyer, false).unwrap();

        assert_eq!(restored.machine(1).unwrap().copies_of(flyer), 3);
        assert_eq!(restored.edition(flyer).unwrap().printed_copies(), 3);
    }

    #[test]
    fn missing_file_yields_an_empty_default_shop() {
        let dir = tempfile::tempdir().unwrap();
        let store =
            FileShopStore::new(dir.path().join("never-saved.txt")).with_default_shop_name("Fresh");

        assert!(matches!(store.try_load(), Err(StoreError::Io { .. })));
        let shop = store.load();
        assert_eq!(shop.name(), "Fresh");
        assert!(shop.machines().is_empty());
        assert_eq!(shop.total_sales(), 0.0);
    }

    #[test]
    fn store_follows_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join("configured.txt");
        let data_file_value = data_file.display().to_string();
        let config = Config::from_lookup(|key| match key {
            "PRINTING_SHOP_DATA_FILE" => Some(data_file_value.clone()),
            "PRINTING_SHOP_DEFAULT_NAME" => Some("Configured Shop".to_string()),
            _ => None,
        });

        let store = FileShopStore::from_config(&config);
        assert_eq!(store.load().name(), "Configured Shop");

        store.save(&working_shop()).unwrap();
        assert!(data_file.exists());
        assert_eq!(store.load().name(), "Riverside Print");
    }

    #[test]
    fn stray_latin1_byte_does_not_cut_the_load_short() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        let mut contents = b"Name: Latin\nEmployee: Operator: Jos".to_vec();
        contents.push(0xE9);
        contents.extend_from_slice(
            b", Base Salary: 700.0, Salary: 700.0\n\
              Machine: Max Capacity: 300, Pages Per Minute: 30, Color Support: true, Current Paper Load: 10\n\
              Total Sales: 42.0\n",
        );
        std::fs::write(&path, contents).unwrap();

        let shop = FileShopStore::new(&path).try_load().unwrap();
        assert_eq!(shop.name(), "Latin");
        assert_eq!(shop.employees().len(), 1);
        assert_eq!(shop.employees()[0].name(), "Jos\u{FFFD}");
        assert_eq!(shop.machines().len(), 1);
        assert_eq!(shop.machine(0).unwrap().max_capacity(), 300);
        assert_eq!(shop.total_sales(), 42.0);
    }

    #[test]
    fn hand_edited_file_loads_what_it_can() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edited.txt");
        std::fs::write(
            &path,
            "Name: Hand Edited\n\
             \n\
             Total Sales: not a number\n\
             Employees:\n\
             Employee: Operator: Ivan, Base Salary: 800.0, Salary: 800.0\n\
             Employee: Manager: , Base Salary: 900.0, Salary: 900.0\n\
             Machines:\n\
             Machine: Max Capacity: 200, Pages Per Minute: 20, Color Support: false, Current Paper Load: 50\n\
             Paper Pricing:\n\
             NEWS_PRINT: 0.04\n",
        )
        .unwrap();

        let shop = FileShopStore::new(&path).load();
        assert_eq!(shop.name(), "Hand Edited");
        assert_eq!(shop.total_sales(), 0.0);
        assert_eq!(shop.employees().len(), 1);
        assert_eq!(shop.machines().len(), 1);
        assert_eq!(shop.machine(0).unwrap().current_paper_load(), 50);
        assert_eq!(shop.price_for_paper(PaperType::NewsPrint), 0.04);
    }
}

mod text_format {
    use super::*;

    #[test]
    fn reencoding_a_loaded_shop_is_stable() {
        // The first load drops manager bonus terms; after that the text is fixed.
        let loaded = decode_shop(&encode_shop(&working_shop()), "Fallback");
        let first = encode_shop(&loaded);
        let second = encode_shop(&decode_shop(&first, "Fallback"));
        assert_eq!(first, second);
    }

    #[test]
    fn title_containing_the_edition_separator_survives() {
        let mut shop = PrintingShop::new("Second Printing");
        let book = shop.add_edition(
            Edition::book(
                "Rust, Edition: Second",
                120,
                paper(PaperSize::A5, PaperType::Standard, 0.02),
                30.0,
            )
            .unwrap(),
        );
        let machine = shop.add_machine(PrintingMachine::new(1000, 60, false).unwrap());
        shop.machine_mut(machine).unwrap().load_paper(500).unwrap();
        shop.print_edition(machine, book, false).unwrap();
        shop.print_edition(machine, book, false).unwrap();

        let restored = decode_shop(&encode_shop(&shop), "Fallback");

        assert_eq!(restored.machines().len(), 1);
        let press = restored.machine(0).unwrap();
        assert_eq!(press.max_capacity(), 1000);
        assert_eq!(press.pages_per_minute(), 60);
        assert!(!press.color_support());
        assert_eq!(press.current_paper_load(), 260);
        let id = press.printed_editions()[0];
        assert_eq!(press.copies_of(id), 2);
        assert_eq!(restored.edition(id).unwrap().title(), "Rust, Edition: Second");
        assert_close(restored.calculate_paper_costs(), shop.calculate_paper_costs());
    }

    #[test]
    fn shared_edition_is_split_per_machine_on_load() {
        let mut shop = PrintingShop::new("Two Presses");
        let flyer = shop.add_edition(
            Edition::poster(
                "Flyer",
                1,
                paper(PaperSize::A5, PaperType::Standard, 0.1),
                2.0,
            )
            .unwrap(),
        );
        for _ in 0..2 {
            let index = shop.add_machine(PrintingMachine::new(10, 10, false).unwrap());
            shop.machine_mut(index).unwrap().load_paper(10).unwrap();
        }
        shop.print_edition(0, flyer, false).unwrap();
        shop.print_edition(1, flyer, false).unwrap();
        shop.print_edition(1, flyer, false).unwrap();

        let restored = decode_shop(&encode_shop(&shop), "Fallback");

        assert_eq!(restored.editions().len(), 2);
        let first = restored.machine(0).unwrap().printed_editions()[0];
        let second = restored.machine(1).unwrap().printed_editions()[0];
        assert_ne!(first, second);
        assert_eq!(restored.edition(first).unwrap().printed_copies(), 3);
        assert_eq!(restored.edition(second).unwrap().printed_copies(), 3);
        assert_eq!(restored.machine(0).unwrap().copies_of(first), 1);
        assert_eq!(restored.machine(1).unwrap().copies_of(second), 2);
        assert_close(restored.calculate_total_income(), shop.calculate_total_income());
        assert_close(restored.calculate_paper_costs(), shop.calculate_paper_costs());
    }

    #[test]
    fn newspapers_come_back_without_discount() {
        let mut shop = PrintingShop::new("Daily");
        let news = shop.add_edition(
            Edition::newspaper(
                "Morning Gazette",
                150,
                paper(PaperSize::A5, PaperType::NewsPrint, 0.15),
                1.2,
                0.90,
                100,
            )
            .unwrap(),
        );
        let machine = shop.add_machine(PrintingMachine::new(1000, 100, false).unwrap());
        shop.machine_mut(machine).unwrap().load_paper(150).unwrap();
        shop.print_edition(machine, news, false).unwrap();

        let restored = decode_shop(&encode_shop(&shop), "Fallback");
        let id = restored.machine(0).unwrap().printed_editions()[0];
        let edition = restored.edition(id).unwrap();
        assert_eq!(edition.kind(), EditionKind::PLAIN_NEWSPAPER);
        assert_eq!(edition.title(), "Morning Gazette");
        assert_eq!(edition.printed_copies(), 1);
    }

    #[test]
    fn exact_doubles_survive() {
        let mut shop = PrintingShop::new("Precise");
        shop.set_total_sales(0.1 + 0.2);
        shop.set_paper_pricing(PaperType::Glossy, 1.0 / 3.0);

        let restored = decode_shop(&encode_shop(&shop), "Fallback");
        assert_eq!(restored.total_sales(), 0.1 + 0.2);
        assert_eq!(restored.price_for_paper(PaperType::Glossy), 1.0 / 3.0);
    }
}

mod memory_store {
    use super::*;

    #[test]
    fn memory_store_matches_file_store_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.txt");
        let shop = working_shop();

        FileShopStore::new(&path).save(&shop).unwrap();
        let memory = InMemoryShopStore::new();
        memory.save(&shop).unwrap();

        assert_eq!(
            memory.contents().unwrap(),
            std::fs::read_to_string(&path).unwrap()
        );
    }
}
