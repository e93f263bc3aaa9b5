use std::cell::RefCell;

use common::Config;
use domain::PrintingShop;

use crate::codec::{decode_shop, encode_shop};
use crate::error::{Result, StoreError};
use crate::store::ShopStore;

/// In-memory shop store for testing.
///
/// Holds the same text a [`FileShopStore`](crate::FileShopStore) would
/// write, so saves and loads go through the real codec.
#[derive(Debug)]
pub struct InMemoryShopStore {
    dump: RefCell<Option<String>>,
    default_shop_name: String,
}

impl InMemoryShopStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            dump: RefCell::new(None),
            default_shop_name: Config::DEFAULT_SHOP_NAME.to_string(),
        }
    }

    /// Creates a store that already holds `dump`.
    pub fn from_dump(dump: impl Into<String>) -> Self {
        Self {
            dump: RefCell::new(Some(dump.into())),
            ..Self::new()
        }
    }

    pub fn with_default_shop_name(mut self, name: impl Into<String>) -> Self {
        self.default_shop_name = name.into();
        self
    }

    /// Returns the stored text, if anything has been saved.
    pub fn contents(&self) -> Option<String> {
        self.dump.borrow().clone()
    }

    pub fn clear(&self) {
        *self.dump.borrow_mut() = None;
    }
}

impl Default for InMemoryShopStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopStore for InMemoryShopStore {
    fn save(&self, shop: &PrintingShop) -> Result<()> {
        *self.dump.borrow_mut() = Some(encode_shop(shop));
        Ok(())
    }

    fn try_load(&self) -> Result<PrintingShop> {
        self.dump
            .borrow()
            .as_deref()
            .map(|dump| decode_shop(dump, &self.default_shop_name))
            .ok_or(StoreError::Empty)
    }

    fn default_shop_name(&self) -> &str {
        &self.default_shop_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = InMemoryShopStore::new().with_default_shop_name("Blank");
        assert!(matches!(store.try_load(), Err(StoreError::Empty)));
        assert_eq!(store.load().name(), "Blank");
        assert!(store.contents().is_none());
    }

    #[test]
    fn test_save_and_clear() {
        let store = InMemoryShopStore::new();
        let shop = PrintingShop::new("Kept");
        store.save(&shop).unwrap();

        let contents = store.contents().unwrap();
        assert!(contents.starts_with(&format!("PrintingShopID: {}\nName: Kept\n", shop.id())));
        assert_eq!(store.try_load().unwrap().id(), shop.id());

        store.clear();
        assert!(store.contents().is_none());
    }

    #[test]
    fn test_from_dump() {
        let store = InMemoryShopStore::from_dump("Total Sales: 42.0\n");
        let shop = store.try_load().unwrap();
        assert_eq!(shop.name(), Config::DEFAULT_SHOP_NAME);
        assert_eq!(shop.total_sales(), 42.0);
    }
}
