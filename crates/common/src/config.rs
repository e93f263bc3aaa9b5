//! Runtime configuration loaded from environment variables.

use std::path::PathBuf;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Printing shop configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `PRINTING_SHOP_DATA_FILE`: path of the shop dump (default: `"printing_shop.txt"`)
/// - `PRINTING_SHOP_DEFAULT_NAME`: name used when a dump carries none (default: `"Default Shop"`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `PRINTING_SHOP_LOG_FORMAT`: `text` or `json` (default: `text`)
#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub default_shop_name: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    pub const DEFAULT_DATA_FILE: &'static str = "printing_shop.txt";
    pub const DEFAULT_SHOP_NAME: &'static str = "Default Shop";

    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_file: lookup("PRINTING_SHOP_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            default_shop_name: lookup("PRINTING_SHOP_DEFAULT_NAME")
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(defaults.default_shop_name),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("PRINTING_SHOP_LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(defaults.log_format),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(Self::DEFAULT_DATA_FILE),
            default_shop_name: Self::DEFAULT_SHOP_NAME.to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}
