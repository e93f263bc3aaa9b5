//! Tracing subscriber bootstrap.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, LogFormat};

/// Installs the global tracing subscriber described by `config`.
///
/// `RUST_LOG` wins over `config.log_level` when both are set. Returns
/// `false` when a subscriber was already installed, so repeated calls
/// (e.g. from several tests) are harmless.
pub fn init_tracing(config: &Config) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    match result {
        Ok(()) => {
            tracing::debug!(level = %config.log_level, format = ?config.log_format, "tracing initialised");
            true
        }
        Err(_) => false,
    }
}
