//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::types::cache::LEGACY_CACHE_KEYS;
use crate::config::{AppConfig, CacheConfig, LoggingConfig};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::value::{Dict, Map, Value};
use figment::{Figment, Metadata, Profile, Provider};
use rcache_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Later sources override earlier ones:
    /// 1. `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables, nested with `__` (e.g. `RCACHE_CACHE__ENDPOINTS`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(LegacyKeys(Toml::file(config_path)));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(LegacyKeys(Toml::file(&default_path)));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(LegacyKeys(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        ));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Reload configuration
    pub fn reload(&self) -> Result<AppConfig> {
        self.load()
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let path = path.as_ref();
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Provider adapter renaming legacy `[cache]` keys to their current names
///
/// Applied per layer, so a legacy key in the file is still overridden by the
/// current key in the environment. When a layer holds both spellings the
/// current one wins.
struct LegacyKeys<P>(P);

impl<P: Provider> Provider for LegacyKeys<P> {
    fn metadata(&self) -> Metadata {
        self.0.metadata()
    }

    fn data(&self) -> figment::Result<Map<Profile, Dict>> {
        let mut data = self.0.data()?;
        for dict in data.values_mut() {
            if let Some(Value::Dict(_, cache)) = dict.get_mut("cache") {
                rename_legacy_keys(cache);
            }
        }
        Ok(data)
    }

    fn profile(&self) -> Option<Profile> {
        self.0.profile()
    }
}

fn rename_legacy_keys(cache: &mut Dict) {
    for (legacy, current) in LEGACY_CACHE_KEYS {
        if let Some(value) = cache.remove(legacy) {
            cache.entry(current.to_string()).or_insert(value);
        }
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_cache_config(&config.cache)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_cache_config(config: &CacheConfig) -> Result<()> {
    if !config.is_enabled() {
        return Ok(());
    }
    if config.max_read_pool == 0 {
        return Err(Error::configuration(
            "Cache read pool size cannot be 0 when caching is enabled",
        ));
    }
    if config.max_write_pool == 0 {
        return Err(Error::configuration(
            "Cache write pool size cannot be 0 when caching is enabled",
        ));
    }
    if config.timeout_ms == 0 {
        return Err(Error::configuration(
            "Cache timeout cannot be 0 when caching is enabled",
        ));
    }
    if config.max_capacity == Some(0) {
        return Err(Error::configuration("Cache capacity cannot be 0"));
    }
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cache configuration
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.config.cache = cache;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set the cache endpoints
    pub fn with_endpoints<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.cache.endpoints = endpoints.into_iter().map(Into::into).collect();
        self
    }

    /// Set the key namespace
    pub fn with_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.config.cache.namespace = Some(namespace.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig> {
        validate_app_config(&self.config)?;
        Ok(self.config)
    }
}
