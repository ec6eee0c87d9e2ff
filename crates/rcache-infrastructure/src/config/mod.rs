//! Configuration
//!
//! Typed configuration and the Figment-based loader that fills it from
//! defaults, a TOML file and `RCACHE_` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, CacheConfig, LoggingConfig};
