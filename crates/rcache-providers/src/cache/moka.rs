//! Moka in-memory cache backend
//!
//! Concurrent in-process cache using Moka, with a TTL tracked per entry so
//! it honors the same expiry plans as Redis.
//!
//! ## Example
//!
//! ```ignore
//! use rcache_providers::cache::MokaCacheBackend;
//!
//! let backend = MokaCacheBackend::with_capacity(1_000);
//! ```

use crate::constants::{BACKEND_MOKA, MOKA_DEFAULT_MAX_CAPACITY};
use globset::GlobBuilder;
use moka::Expiry as MokaExpiry;
use moka::sync::Cache;
use rcache_domain::error::{Error, Result};
use rcache_domain::ports::providers::CacheBackend;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Clone)]
struct StoredValue {
    bytes: Arc<[u8]>,
    ttl: Option<Duration>,
}

/// Expires each entry after the TTL it was written with; rewrites reset it
struct PerEntryTtl;

impl MokaExpiry<String, StoredValue> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &StoredValue,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        value.ttl
    }
}

/// Moka-based in-memory cache backend
#[derive(Clone)]
pub struct MokaCacheBackend {
    cache: Cache<String, StoredValue>,
    max_capacity: u64,
}

impl Default for MokaCacheBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheBackend {
    /// Create a new Moka cache backend with default capacity
    pub fn new() -> Self {
        Self::with_capacity(MOKA_DEFAULT_MAX_CAPACITY)
    }

    /// Create a new Moka cache backend holding at most `max_capacity` entries
    pub fn with_capacity(max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self {
            cache,
            max_capacity,
        }
    }

    /// Get the maximum capacity of the cache
    pub fn max_capacity(&self) -> u64 {
        self.max_capacity
    }
}

impl CacheBackend for MokaCacheBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.cache.get(key).map(|stored| stored.bytes.to_vec()))
    }

    fn get_many(&self, keys: &[String]) -> Result<Vec<Option<Vec<u8>>>> {
        keys.iter().map(|key| self.get(key)).collect()
    }

    fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        self.cache.insert(
            key.to_string(),
            StoredValue {
                bytes: Arc::from(value),
                ttl,
            },
        );
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.cache.remove(key).is_some())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.cache.contains_key(key))
    }

    fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        // Backslash escapes on every platform, as in Redis MATCH
        let matcher = GlobBuilder::new(pattern)
            .backslash_escape(true)
            .build()
            .map_err(|e| Error::invalid_argument(format!("Invalid key pattern '{pattern}': {e}")))?
            .compile_matcher();

        Ok(self
            .cache
            .iter()
            .filter(|(key, _)| matcher.is_match(key.as_str()))
            .map(|(key, _)| key.as_ref().clone())
            .collect())
    }

    fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        BACKEND_MOKA
    }
}

impl std::fmt::Debug for MokaCacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheBackend")
            .field("max_capacity", &self.max_capacity)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use crate::registry::{CACHE_BACKENDS, CacheBackendEntry};

#[linkme::distributed_slice(CACHE_BACKENDS)]
static MOKA_BACKEND: CacheBackendEntry = CacheBackendEntry {
    name: BACKEND_MOKA,
    description: "Moka in-process cache with per-entry TTL",
    factory: |config| {
        let backend = match config.max_capacity {
            Some(max_capacity) => MokaCacheBackend::with_capacity(max_capacity),
            None => MokaCacheBackend::new(),
        };
        Ok(Arc::new(backend))
    },
};
