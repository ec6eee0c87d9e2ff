//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Facade behavior constants are defined in `rcache_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "rcache.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "rcache";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "RCACHE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "RCACHE_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "rcache";

/// `tracing` target used for cache failure lines
pub const CACHE_LOG_TARGET: &str = "rcache::cache";
