//! Structured logging with tracing
//!
//! Sets up the global subscriber (plain or JSON, optional daily rolling file)
//! and owns the single failure line every cache operation emits.

use crate::constants::{CACHE_LOG_TARGET, LOG_FILE_PREFIX, LOG_FILTER_ENV};
use rcache_domain::error::{Error, Result};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use tracing::{Level, error, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// `RCACHE_LOG` overrides the configured level with a full filter directive.
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| std::path::Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| std::ffi::OsStr::new(LOG_FILE_PREFIX)),
        )
    });

    // Layer types differ between JSON and plain output
    let installed = if config.json_format {
        let stdout = fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let registry = Registry::default().with(filter);
        match file_appender {
            Some(appender) => {
                let file = fmt::layer()
                    .json()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true);
                registry.with(stdout).with(file).try_init()
            }
            None => registry.with(stdout).try_init(),
        }
    } else {
        let stdout = fmt::layer().with_target(true).with_thread_ids(true);
        let registry = Registry::default().with(filter);
        match file_appender {
            Some(appender) => {
                let file = fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true);
                registry.with(stdout).with(file).try_init()
            }
            None => registry.with(stdout).try_init(),
        }
    };

    installed.map_err(|e| Error::configuration_with_source("Logging is already initialized", e))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}

/// Format the failure line for a cache operation
///
/// ```
/// use rcache_domain::Error;
/// use rcache_infrastructure::logging::format_cache_failure;
///
/// let line = format_cache_failure("cache", "fetch", "session:42", &Error::timeout("1000ms"));
/// assert_eq!(line, "cache:fetch exception! key=session:42, message=Timeout: 1000ms");
/// ```
pub fn format_cache_failure(component: &str, operation: &str, key: &str, err: &Error) -> String {
    format!("{component}:{operation} exception! key={key}, message={err}")
}

/// Emit the failure line for a cache operation at error level
pub fn log_cache_failure(component: &str, operation: &str, key: &str, err: &Error) {
    error!(
        target: CACHE_LOG_TARGET,
        "{}",
        format_cache_failure(component, operation, key, err)
    );
}
