use domain::PrintingShop;

use crate::Result;

/// Core trait for shop store implementations.
///
/// A store keeps the text dump of one shop. Loading is available in two
/// flavours: [`try_load`](Self::try_load) reports why nothing could be
/// read, [`load`](Self::load) never fails and falls back to an empty
/// shop.
pub trait ShopStore {
    /// Writes the shop, replacing whatever the store held before.
    fn save(&self, shop: &PrintingShop) -> Result<()>;

    /// Reads the stored shop.
    ///
    /// Fails only when the dump cannot be reached at all; malformed lines
    /// inside it are skipped.
    fn try_load(&self) -> Result<PrintingShop>;

    /// Name given to a shop whose dump lacks one, and to the empty shop
    /// returned by [`load`](Self::load) on failure.
    fn default_shop_name(&self) -> &str;

    /// Reads the stored shop, or returns an empty one if nothing can be
    /// read.
    fn load(&self) -> PrintingShop {
        match self.try_load() {
            Ok(shop) => shop,
            Err(error) => {
                tracing::warn!(%error, "could not load shop, starting empty");
                PrintingShop::new(self.default_shop_name())
            }
        }
    }
}
