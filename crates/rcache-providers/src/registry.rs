//! Cache Backend Registry
//!
//! Auto-registration system for cache backends. Backends register themselves
//! with `#[linkme::distributed_slice(CACHE_BACKENDS)]` and are discovered at
//! runtime by name.

use crate::constants::{
    BACKEND_REDIS, REDIS_DEFAULT_MAX_READ_POOL, REDIS_DEFAULT_MAX_WRITE_POOL,
};
use rcache_domain::constants::DEFAULT_OPERATION_TIMEOUT_MS;
use rcache_domain::error::{Error, Result};
use rcache_domain::ports::providers::CacheBackend;
use std::sync::Arc;
use std::time::Duration;

/// Configuration for cache backend creation
///
/// Contains all configuration options that a backend might need.
/// Backends use what they need and ignore the rest.
#[derive(Debug, Clone)]
pub struct CacheBackendConfig {
    /// Backend name (e.g., "redis", "moka", "null")
    pub provider: String,
    /// Read-write endpoints (`host:port`, `password@host:port` or URL)
    pub endpoints: Vec<String>,
    /// Read-only endpoints; empty means reads use `endpoints`
    pub read_endpoints: Vec<String>,
    /// Maximum pooled connections used for reads
    pub max_read_pool: u32,
    /// Maximum pooled connections used for writes
    pub max_write_pool: u32,
    /// Per-call network timeout
    pub timeout: Duration,
    /// Entry capacity for in-memory backends
    pub max_capacity: Option<u64>,
}

impl Default for CacheBackendConfig {
    fn default() -> Self {
        Self {
            provider: BACKEND_REDIS.to_string(),
            endpoints: Vec::new(),
            read_endpoints: Vec::new(),
            max_read_pool: REDIS_DEFAULT_MAX_READ_POOL,
            max_write_pool: REDIS_DEFAULT_MAX_WRITE_POOL,
            timeout: Duration::from_millis(DEFAULT_OPERATION_TIMEOUT_MS),
            max_capacity: None,
        }
    }
}

impl CacheBackendConfig {
    /// Create a new config with the given backend name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the read-write endpoints
    pub fn with_endpoints<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.endpoints = endpoints.into_iter().map(Into::into).collect();
        self
    }

    /// Set dedicated read-only endpoints
    pub fn with_read_endpoints<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.read_endpoints = endpoints.into_iter().map(Into::into).collect();
        self
    }

    /// Set the pool sizes
    pub fn with_pool_sizes(mut self, max_read_pool: u32, max_write_pool: u32) -> Self {
        self.max_read_pool = max_read_pool;
        self.max_write_pool = max_write_pool;
        self
    }

    /// Set the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the in-memory capacity
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Endpoints serving reads
    pub fn effective_read_endpoints(&self) -> &[String] {
        if self.read_endpoints.is_empty() {
            &self.endpoints
        } else {
            &self.read_endpoints
        }
    }
}

/// Registry entry for cache backends
///
/// Each backend registers one entry holding metadata and the factory used
/// to create instances.
pub struct CacheBackendEntry {
    /// Unique backend name (e.g., "redis", "moka", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a backend instance
    pub factory: fn(&CacheBackendConfig) -> Result<Arc<dyn CacheBackend>>,
}

#[linkme::distributed_slice]
pub static CACHE_BACKENDS: [CacheBackendEntry] = [..];

/// Resolve cache backend by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn CacheBackend>)` - Created backend instance
/// * `Err(Error::Configuration)` - Backend unknown or creation failed
pub fn resolve_cache_backend(config: &CacheBackendConfig) -> Result<Arc<dyn CacheBackend>> {
    let name = config.provider.as_str();

    if let Some(entry) = CACHE_BACKENDS.iter().find(|entry| entry.name == name) {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = CACHE_BACKENDS.iter().map(|e| e.name).collect();
    Err(Error::configuration(format!(
        "Unknown cache backend '{name}'. Available backends: {available:?}"
    )))
}

/// List all registered cache backends
///
/// Returns `(name, description)` pairs sorted by name.
pub fn list_cache_backends() -> Vec<(&'static str, &'static str)> {
    let mut backends: Vec<(&'static str, &'static str)> = CACHE_BACKENDS
        .iter()
        .map(|e| (e.name, e.description))
        .collect();
    backends.sort_unstable_by_key(|(name, _)| *name);
    backends
}
