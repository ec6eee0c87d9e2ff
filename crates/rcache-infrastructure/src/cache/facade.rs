//! Cache facade
//!
//! The handle applications hold. Each operation performs one backend call
//! through the shared pool, maps the typed value across the JSON boundary and
//! logs a failure exactly once before returning it.
//!
//! Callers that want "cache is best-effort" discard the error:
//!
//! ```ignore
//! let session: Session = cache.fetch("session:42").unwrap_or_default();
//! let present = cache.exists("session:42").unwrap_or(false);
//! ```

use crate::config::CacheConfig;
use crate::logging::log_cache_failure;
use chrono::{DateTime, TimeDelta, Utc};
use rcache_domain::codec;
use rcache_domain::constants::{DEFAULT_LOG_COMPONENT, FETCH_ALL_PATTERN, NAMESPACE_SEPARATOR};
use rcache_domain::error::Result;
use rcache_domain::ports::providers::{CacheBackend, escape_pattern};
use rcache_domain::value_objects::{CacheStats, Expiry, ExpiryPlan};
use rcache_providers::resolve_cache_backend;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Facade operation, as named in failure log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOperation {
    /// Store with or without expiry
    Store,
    /// Single-key fetch
    Fetch,
    /// Fetch every key in the namespace
    FetchAll,
    /// Delete
    Remove,
    /// Presence check
    Exists,
    /// Health check
    Ping,
}

impl CacheOperation {
    /// Name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Store => "store",
            Self::Fetch => "fetch",
            Self::FetchAll => "fetch_all",
            Self::Remove => "remove",
            Self::Exists => "exists",
            Self::Ping => "ping",
        }
    }
}

impl fmt::Display for CacheOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    failures: AtomicU64,
}

/// Shared cache handle
///
/// Cheap to clone; clones share the backend, its pools and the counters.
#[derive(Clone)]
pub struct CacheFacade {
    backend: Arc<dyn CacheBackend>,
    namespace: Option<String>,
    component: String,
    counters: Arc<Counters>,
}

impl CacheFacade {
    /// Wrap a backend
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self {
            backend,
            namespace: None,
            component: DEFAULT_LOG_COMPONENT.to_string(),
            counters: Arc::new(Counters::default()),
        }
    }

    /// Build the backend named by the configuration and wrap it
    ///
    /// A Redis configuration without endpoints yields the null backend.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        let backend = resolve_cache_backend(&config.to_backend_config())?;
        let mut facade = Self::new(backend).with_component(config.component.clone());
        if let Some(namespace) = &config.namespace {
            facade = facade.with_namespace(namespace.clone());
        }
        Ok(facade)
    }

    /// Prefix every key with `namespace:`
    pub fn with_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        let namespace = namespace.into();
        self.namespace = (!namespace.is_empty()).then_some(namespace);
        self
    }

    /// Label written at the start of failure log lines
    pub fn with_component<S: Into<String>>(mut self, component: S) -> Self {
        self.component = component.into();
        self
    }

    /// Name of the backend in use
    pub fn provider_name(&self) -> &str {
        self.backend.provider_name()
    }

    /// Configured namespace, if any
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Store a value without expiry
    ///
    /// An absent value (one that serializes to `null`) is not written.
    pub fn store<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.store_with(key, value, Expiry::Never)
    }

    /// Store a value until an absolute deadline
    ///
    /// A deadline that is not in the future deletes the key instead.
    pub fn store_until<T>(&self, key: &str, value: &T, deadline: DateTime<Utc>) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.store_with(key, value, Expiry::At(deadline))
    }

    /// Store a value for a fixed duration
    ///
    /// The TTL is not renewed on read. A duration `<= 0` deletes the key instead.
    pub fn store_for<T>(&self, key: &str, value: &T, ttl: TimeDelta) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.store_with(key, value, Expiry::After(ttl))
    }

    /// Store a value with any expiry form
    pub fn store_with<T, E>(&self, key: &str, value: &T, expiry: E) -> Result<()>
    where
        T: Serialize + ?Sized,
        E: Into<Expiry>,
    {
        let result = self.try_store(key, value, expiry.into());
        self.observe(CacheOperation::Store, key, result)
    }

    fn try_store<T>(&self, key: &str, value: &T, expiry: Expiry) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        // Absence wins over expiry: an absent value never deletes
        let Some(bytes) = codec::encode(value)? else {
            return Ok(());
        };

        let key = self.namespaced_key(key);
        match expiry.plan() {
            ExpiryPlan::Persist => self.backend.set(&key, &bytes, None),
            ExpiryPlan::ExpireIn(ttl) => self.backend.set(&key, &bytes, Some(ttl)),
            ExpiryPlan::Evict => self.backend.delete(&key).map(|_| ()),
        }
    }

    /// Fetch a value, `None` when the key is empty or not stored
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        if key.is_empty() {
            return Ok(None);
        }
        let result = self.try_get(key);
        self.observe(CacheOperation::Fetch, key, result)
    }

    fn try_get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.backend.get(&self.namespaced_key(key))? {
            Some(bytes) => {
                let value = codec::decode(&bytes)?;
                self.counters.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(value))
            }
            None => {
                self.counters.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    /// Fetch a value, `T::default()` when the key is empty or not stored
    pub fn fetch<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.get(key).map(Option::unwrap_or_default)
    }

    /// Fetch every stored value in the namespace
    ///
    /// Keys are returned without the namespace prefix. Keys that disappear
    /// between the scan and the read are skipped; a value that fails to
    /// decode fails the whole call. The scan is unbounded, so this is meant
    /// for small key spaces.
    pub fn fetch_all<T>(&self) -> Result<HashMap<String, T>>
    where
        T: DeserializeOwned,
    {
        let result = self.try_fetch_all();
        self.observe(CacheOperation::FetchAll, FETCH_ALL_PATTERN, result)
    }

    fn try_fetch_all<T>(&self) -> Result<HashMap<String, T>>
    where
        T: DeserializeOwned,
    {
        let pattern = match &self.namespace {
            Some(ns) => {
                format!("{}{NAMESPACE_SEPARATOR}{FETCH_ALL_PATTERN}", escape_pattern(ns))
            }
            None => FETCH_ALL_PATTERN.to_string(),
        };
        let keys = self.backend.keys(&pattern)?;
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        let values = self.backend.get_many(&keys)?;
        let mut entries = HashMap::with_capacity(keys.len());
        for (key, bytes) in keys.into_iter().zip(values) {
            let Some(bytes) = bytes else {
                continue;
            };
            let value = codec::decode(&bytes)?;
            entries.insert(self.strip_namespace(key), value);
        }
        Ok(entries)
    }

    /// Delete a key, `true` if something was removed
    pub fn remove(&self, key: &str) -> Result<bool> {
        let result = self.backend.delete(&self.namespaced_key(key));
        self.observe(CacheOperation::Remove, key, result)
    }

    /// Whether a key is stored
    ///
    /// `unwrap_or(false)` makes an unreachable backend look like a miss.
    pub fn exists(&self, key: &str) -> Result<bool> {
        let result = self.backend.exists(&self.namespaced_key(key));
        self.observe(CacheOperation::Exists, key, result)
    }

    /// Check that the backend answers
    pub fn ping(&self) -> Result<()> {
        let result = self.backend.ping();
        self.observe(CacheOperation::Ping, "", result)
    }

    /// Snapshot of the hit, miss and failure counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            failures: self.counters.failures.load(Ordering::Relaxed),
        }
    }

    fn observe<T>(&self, operation: CacheOperation, key: &str, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.counters.failures.fetch_add(1, Ordering::Relaxed);
            log_cache_failure(&self.component, operation.as_str(), key, e);
        }
        result
    }

    fn namespaced_key(&self, key: &str) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}{NAMESPACE_SEPARATOR}{key}"),
            None => key.to_string(),
        }
    }

    fn strip_namespace(&self, key: String) -> String {
        let Some(ns) = &self.namespace else {
            return key;
        };
        key.strip_prefix(ns.as_str())
            .and_then(|rest| rest.strip_prefix(NAMESPACE_SEPARATOR))
            .map(str::to_string)
            .unwrap_or(key)
    }
}

impl fmt::Debug for CacheFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheFacade")
            .field("backend", &self.backend)
            .field("namespace", &self.namespace)
            .field("component", &self.component)
            .field("stats", &self.stats())
            .finish()
    }
}
