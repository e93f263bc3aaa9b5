//! Text persistence for [`PrintingShop`](domain::PrintingShop).
//!
//! A shop is written as one record per line, each line starting with a
//! tag such as `Name:` or `Machine:`. [`codec`] turns shops into that
//! text and back; [`ShopStore`] implementations decide where the text
//! lives.

pub mod codec;
pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use codec::{ShopDecoder, decode_shop, encode_shop};
pub use error::{Result, StoreError};
pub use file::FileShopStore;
pub use memory::InMemoryShopStore;
pub use store::ShopStore;
