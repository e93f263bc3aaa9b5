//! Shared building blocks for the printing shop crates.
//!
//! - identifier newtypes for shops and editions
//! - runtime configuration read from the environment
//! - tracing subscriber bootstrap

pub mod config;
pub mod telemetry;
pub mod types;

pub use config::{Config, LogFormat};
pub use types::{EditionId, ShopId};
