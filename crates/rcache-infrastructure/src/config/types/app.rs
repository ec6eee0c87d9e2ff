//! Main application configuration

use super::{CacheConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
///
/// ```toml
/// [cache]
/// endpoints = "10.0.0.1:6379,10.0.0.2:6379"
/// max_read_pool = 20
/// max_write_pool = 10
///
/// [logging]
/// level = "warn"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Cache facade and backend configuration
    pub cache: CacheConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}
