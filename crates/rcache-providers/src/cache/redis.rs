//! Redis distributed cache backend
//!
//! Distributed cache implementation using Redis as the backend.
//! Suitable for multi-instance deployments.
//!
//! ## Features
//!
//! - Separate read and write pools (`r2d2`), each rotating over its endpoints
//! - Per-call timeout on connect, read and write
//! - Millisecond TTLs (`SET ... PX`)
//! - Cursor-based key enumeration (`SCAN`), never `KEYS`
//!
//! ## Example
//!
//! ```ignore
//! use rcache_providers::cache::RedisCacheBackend;
//! use rcache_providers::CacheBackendConfig;
//!
//! let config = CacheBackendConfig::new("redis").with_endpoints(["127.0.0.1:6379"]);
//! let backend = RedisCacheBackend::new(&config)?;
//! ```

use crate::cache::redis_pool::{EndpointConnectionManager, TracingErrorHandler};
use crate::constants::{BACKEND_REDIS, REDIS_SCAN_COUNT};
use crate::registry::CacheBackendConfig;
use rcache_domain::error::{Error, Result};
use rcache_domain::ports::providers::CacheBackend;
use rcache_domain::value_objects::ttl_millis;
use r2d2::{Pool, PooledConnection};
use redis::{Commands, RedisError};
use std::sync::Arc;
use std::time::Duration;

type RedisPool = Pool<EndpointConnectionManager>;

/// Which pool serves a command
#[derive(Debug, Clone, Copy)]
enum PoolRole {
    Read,
    Write,
}

impl PoolRole {
    fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

/// Redis cache backend
///
/// Clones share the same pools.
#[derive(Clone)]
pub struct RedisCacheBackend {
    endpoints: Vec<String>,
    read_pool: RedisPool,
    write_pool: RedisPool,
    timeout: Duration,
}

impl RedisCacheBackend {
    /// Create a Redis backend from configuration
    ///
    /// Pools are built without opening connections, so an unreachable
    /// server does not fail startup; the first operation reports it.
    pub fn new(config: &CacheBackendConfig) -> Result<Self> {
        let write_pool = build_pool(&config.endpoints, config.max_write_pool, config.timeout)?;
        let read_pool = build_pool(
            config.effective_read_endpoints(),
            config.max_read_pool,
            config.timeout,
        )?;

        Ok(Self {
            endpoints: config.endpoints.clone(),
            read_pool,
            write_pool,
            timeout: config.timeout,
        })
    }

    /// Create a Redis backend for a single endpoint with default pool sizes
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        Self::new(&CacheBackendConfig::new(BACKEND_REDIS).with_endpoints([endpoint]))
    }

    /// Per-call timeout applied to connects, reads and writes
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Maximum size of the (read, write) pools
    pub fn pool_sizes(&self) -> (u32, u32) {
        (self.read_pool.max_size(), self.write_pool.max_size())
    }

    fn connection(&self, role: PoolRole) -> Result<PooledConnection<EndpointConnectionManager>> {
        let pool = match role {
            PoolRole::Read => &self.read_pool,
            PoolRole::Write => &self.write_pool,
        };
        // r2d2 only gives up on a checkout once `connection_timeout` has elapsed
        pool.get().map_err(|e| {
            Error::timeout(format!(
                "No Redis connection from {} pool within {}ms: {e}",
                role.as_str(),
                self.timeout.as_millis()
            ))
        })
    }
}

fn build_pool(endpoints: &[String], max_size: u32, timeout: Duration) -> Result<RedisPool> {
    if max_size == 0 {
        return Err(Error::configuration("Redis pool size cannot be 0"));
    }
    let manager = EndpointConnectionManager::new(endpoints, timeout)?;

    Ok(Pool::builder()
        .max_size(max_size)
        .min_idle(Some(0))
        .connection_timeout(timeout)
        .test_on_check_out(false)
        .error_handler(Box::new(TracingErrorHandler))
        .build_unchecked(manager))
}

/// Map a Redis error for `command` to the domain error
fn command_error(command: &str, e: RedisError) -> Error {
    if e.is_timeout() {
        Error::timeout(format!("Redis {command} timed out: {e}"))
    } else if e.is_io_error() || e.is_connection_refusal() || e.is_connection_dropped() {
        Error::network_with_source(format!("Redis {command} failed"), e)
    } else {
        Error::cache(format!("Redis {command} failed: {e}"))
    }
}

impl CacheBackend for RedisCacheBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.connection(PoolRole::Read)?;

        let value: Option<Vec<u8>> = conn.get(key).map_err(|e| command_error("GET", e))?;
        Ok(value)
    }

    fn get_many(&self, keys: &[String]) -> Result<Vec<Option<Vec<u8>>>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.connection(PoolRole::Read)?;

        redis::cmd("MGET")
            .arg(keys)
            .query(&mut *conn)
            .map_err(|e| command_error("MGET", e))
    }

    fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.connection(PoolRole::Write)?;

        let mut command = redis::cmd("SET");
        command.arg(key).arg(value);
        if let Some(ttl) = ttl {
            command.arg("PX").arg(ttl_millis(ttl));
        }

        command
            .query::<()>(&mut *conn)
            .map_err(|e| command_error("SET", e))
    }

    fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection(PoolRole::Write)?;

        let deleted: usize = conn.del(key).map_err(|e| command_error("DEL", e))?;
        Ok(deleted > 0)
    }

    fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection(PoolRole::Read)?;

        let count: usize = conn.exists(key).map_err(|e| command_error("EXISTS", e))?;
        Ok(count > 0)
    }

    fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.connection(PoolRole::Read)?;
        let mut keys = Vec::new();
        let mut cursor: u64 = 0;

        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(REDIS_SCAN_COUNT)
                .query(&mut *conn)
                .map_err(|e| command_error("SCAN", e))?;

            keys.extend(batch);
            if next == 0 {
                break;
            }
            cursor = next;
        }

        // SCAN may return a key more than once while the keyspace is rehashed
        keys.sort_unstable();
        keys.dedup();
        Ok(keys)
    }

    fn ping(&self) -> Result<()> {
        let mut conn = self.connection(PoolRole::Read)?;

        redis::cmd("PING")
            .query::<()>(&mut *conn)
            .map_err(|e| command_error("PING", e))
    }

    fn provider_name(&self) -> &str {
        BACKEND_REDIS
    }
}

impl std::fmt::Debug for RedisCacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheBackend")
            .field("endpoints", &self.endpoints)
            .field("read_pool", &self.read_pool.max_size())
            .field("write_pool", &self.write_pool.max_size())
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use crate::registry::{CACHE_BACKENDS, CacheBackendEntry};

#[linkme::distributed_slice(CACHE_BACKENDS)]
static REDIS_BACKEND: CacheBackendEntry = CacheBackendEntry {
    name: BACKEND_REDIS,
    description: "Redis distributed cache with pooled read/write connections",
    factory: |config| Ok(Arc::new(RedisCacheBackend::new(config)?)),
};
