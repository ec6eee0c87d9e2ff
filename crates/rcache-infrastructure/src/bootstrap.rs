//! Startup wiring
//!
//! Builds the process-wide cache handle once, from configuration. The handle
//! is then passed explicitly to whatever needs it.

use crate::cache::CacheFacade;
use crate::config::{AppConfig, ConfigLoader};
use crate::logging::init_logging;
use rcache_domain::error::Result;
use std::path::Path;
use tracing::info;

/// Build the cache facade described by `config`
pub fn init_cache(config: &AppConfig) -> Result<CacheFacade> {
    let facade = CacheFacade::from_config(&config.cache)?;

    if config.cache.is_enabled() {
        info!(
            provider = facade.provider_name(),
            endpoints = ?config.cache.endpoints,
            max_read_pool = config.cache.max_read_pool,
            max_write_pool = config.cache.max_write_pool,
            timeout_ms = config.cache.timeout_ms,
            "Cache initialized"
        );
    } else {
        info!("No cache endpoints configured, caching disabled");
    }

    Ok(facade)
}

/// Load configuration, install logging and build the cache facade
///
/// Without an explicit path the default locations are searched.
pub fn init(config_path: Option<&Path>) -> Result<(AppConfig, CacheFacade)> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;

    init_logging(config.logging.clone())?;
    let cache = init_cache(&config)?;

    Ok((config, cache))
}
