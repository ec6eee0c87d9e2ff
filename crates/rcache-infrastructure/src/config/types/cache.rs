//! Cache configuration types

use rcache_domain::constants::{DEFAULT_LOG_COMPONENT, DEFAULT_OPERATION_TIMEOUT_MS};
use rcache_providers::constants::{
    BACKEND_NULL, BACKEND_REDIS, REDIS_DEFAULT_MAX_READ_POOL, REDIS_DEFAULT_MAX_WRITE_POOL,
};
use rcache_providers::registry::CacheBackendConfig;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Keys from older deployments and the current keys they map to
pub const LEGACY_CACHE_KEYS: [(&str, &str); 3] = [
    ("redis_server_session", "endpoints"),
    ("redis_max_read_pool", "max_read_pool"),
    ("redis_max_write_pool", "max_write_pool"),
];

/// Cache configuration
///
/// Keys from older deployments (`redis_server_session`,
/// `redis_max_read_pool`, `redis_max_write_pool`) are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Backend name (redis, moka, null)
    pub provider: String,

    /// Read-write endpoints, as a list or a comma-separated string
    #[serde(alias = "redis_server_session", deserialize_with = "deserialize_endpoints")]
    pub endpoints: Vec<String>,

    /// Read-only endpoints; empty means reads use `endpoints`
    #[serde(deserialize_with = "deserialize_endpoints")]
    pub read_endpoints: Vec<String>,

    /// Maximum pooled connections for reads
    #[serde(alias = "redis_max_read_pool")]
    pub max_read_pool: u32,

    /// Maximum pooled connections for writes
    #[serde(alias = "redis_max_write_pool")]
    pub max_write_pool: u32,

    /// Per-call network timeout in milliseconds
    pub timeout_ms: u64,

    /// Optional key prefix isolating this application's records
    pub namespace: Option<String>,

    /// Component label written in failure log lines
    pub component: String,

    /// Entry capacity for the in-memory backend
    pub max_capacity: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: BACKEND_REDIS.to_string(),
            endpoints: Vec::new(),
            read_endpoints: Vec::new(),
            max_read_pool: REDIS_DEFAULT_MAX_READ_POOL,
            max_write_pool: REDIS_DEFAULT_MAX_WRITE_POOL,
            timeout_ms: DEFAULT_OPERATION_TIMEOUT_MS,
            namespace: None,
            component: DEFAULT_LOG_COMPONENT.to_string(),
            max_capacity: None,
        }
    }
}

impl CacheConfig {
    /// Whether caching is active
    ///
    /// A Redis backend without endpoints disables caching entirely.
    pub fn is_enabled(&self) -> bool {
        self.effective_provider() != BACKEND_NULL
    }

    /// Backend that will actually be resolved
    pub fn effective_provider(&self) -> &str {
        if self.provider == BACKEND_REDIS && self.endpoints.is_empty() {
            BACKEND_NULL
        } else {
            &self.provider
        }
    }

    /// Per-call network timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Backend factory configuration
    pub fn to_backend_config(&self) -> CacheBackendConfig {
        let mut config = CacheBackendConfig::new(self.effective_provider())
            .with_endpoints(self.endpoints.iter().cloned())
            .with_read_endpoints(self.read_endpoints.iter().cloned())
            .with_pool_sizes(self.max_read_pool, self.max_write_pool)
            .with_timeout(self.timeout());
        if let Some(max_capacity) = self.max_capacity {
            config = config.with_max_capacity(max_capacity);
        }
        config
    }
}

/// Split a comma-separated endpoint list, dropping blanks
///
/// ```
/// use rcache_infrastructure::config::types::split_endpoints;
///
/// assert_eq!(split_endpoints("a:6379, b:6379,"), vec!["a:6379", "b:6379"]);
/// ```
pub fn split_endpoints(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|endpoint| !endpoint.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEndpoints {
    Joined(String),
    List(Vec<String>),
}

fn deserialize_endpoints<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawEndpoints::deserialize(deserializer)? {
        RawEndpoints::Joined(raw) => split_endpoints(&raw),
        RawEndpoints::List(list) => list.iter().flat_map(|raw| split_endpoints(raw)).collect(),
    })
}
