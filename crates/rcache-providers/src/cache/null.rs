//! Null cache backend
//!
//! A backend that stores nothing. Resolved whenever no endpoint is
//! configured, which turns every facade operation into a no-op returning
//! its default value.

use crate::constants::BACKEND_NULL;
use rcache_domain::error::Result;
use rcache_domain::ports::providers::CacheBackend;
use std::time::Duration;

/// Null cache backend that doesn't store anything
///
/// Reads always miss, writes are accepted and dropped.
///
/// # Example
///
/// ```rust
/// use rcache_providers::cache::NullCacheBackend;
/// use rcache_providers::CacheBackend;
///
/// let backend = NullCacheBackend::new();
/// backend.set("key", b"1", None).unwrap();
/// assert!(backend.get("key").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCacheBackend;

impl NullCacheBackend {
    /// Create a new null cache backend
    pub fn new() -> Self {
        Self
    }
}

impl CacheBackend for NullCacheBackend {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    fn get_many(&self, keys: &[String]) -> Result<Vec<Option<Vec<u8>>>> {
        Ok(vec![None; keys.len()])
    }

    fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> Result<()> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    fn exists(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    fn keys(&self, _pattern: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        BACKEND_NULL
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use crate::registry::{CACHE_BACKENDS, CacheBackendEntry};

#[linkme::distributed_slice(CACHE_BACKENDS)]
static NULL_BACKEND: CacheBackendEntry = CacheBackendEntry {
    name: BACKEND_NULL,
    description: "No-op backend, caching disabled",
    factory: |_config| Ok(std::sync::Arc::new(NullCacheBackend::new())),
};
