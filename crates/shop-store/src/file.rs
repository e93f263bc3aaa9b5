use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use common::Config;
use domain::PrintingShop;

use crate::codec::{ShopDecoder, shop_lines};
use crate::error::{Result, StoreError};
use crate::store::ShopStore;

/// Keeps a shop as a text file on disk.
#[derive(Debug, Clone)]
pub struct FileShopStore {
    path: PathBuf,
    default_shop_name: String,
}

impl FileShopStore {
    /// Creates a store for `path` that names unnamed shops
    /// [`Config::DEFAULT_SHOP_NAME`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            default_shop_name: Config::DEFAULT_SHOP_NAME.to_string(),
        }
    }

    /// Creates a store from the data file and default name in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_file.clone())
            .with_default_shop_name(config.default_shop_name.clone())
    }

    pub fn with_default_shop_name(mut self, name: impl Into<String>) -> Self {
        self.default_shop_name = name.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ShopStore for FileShopStore {
    #[tracing::instrument(skip(self, shop), fields(path = %self.path.display(), shop = %shop.id()))]
    fn save(&self, shop: &PrintingShop) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        for line in shop_lines(shop) {
            writeln!(writer, "{line}").map_err(|e| StoreError::io(&self.path, e))?;
        }
        writer.flush().map_err(|e| StoreError::io(&self.path, e))?;

        metrics::counter!("shop_store_saves_total").increment(1);
        tracing::info!("shop saved");
        Ok(())
    }

    /// Fails only if the file cannot be opened. Bytes that are not UTF-8
    /// are replaced and the line is still decoded; a read error part way
    /// through keeps whatever was decoded up to that point.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn try_load(&self) -> Result<PrintingShop> {
        let file = File::open(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let mut decoder = ShopDecoder::new(&self.default_shop_name);
        for (index, line) in BufReader::new(file).split(b'\n').enumerate() {
            let line_number = index + 1;
            let raw = match line {
                Ok(raw) => raw,
                Err(error) => {
                    tracing::warn!(line = line_number, %error, "read failed, keeping what was loaded");
                    break;
                }
            };
            let bytes = raw.strip_suffix(b"\r").unwrap_or(raw.as_slice());
            let line = String::from_utf8_lossy(bytes);
            if matches!(line, Cow::Owned(_)) {
                tracing::warn!(line = line_number, "replaced bytes that are not valid UTF-8");
            }
            decoder.feed(line_number, &line);
        }

        metrics::counter!("shop_store_loads_total").increment(1);
        tracing::info!(skipped = decoder.skipped(), "shop loaded");
        Ok(decoder.finish())
    }

    fn default_shop_name(&self) -> &str {
        &self.default_shop_name
    }
}
