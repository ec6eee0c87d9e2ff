//! Backend Constants
//!
//! Constants specific to backend implementations. Facade-wide defaults live
//! in `rcache_domain::constants`.

// ============================================================================
// REDIS BACKEND CONSTANTS
// ============================================================================

/// Default Redis port when an endpoint omits it
pub const REDIS_DEFAULT_PORT: u16 = 6379;

/// Default read pool size
pub const REDIS_DEFAULT_MAX_READ_POOL: u32 = 10;

/// Default write pool size
pub const REDIS_DEFAULT_MAX_WRITE_POOL: u32 = 10;

/// COUNT hint passed to each SCAN step
pub const REDIS_SCAN_COUNT: usize = 1000;

// ============================================================================
// MOKA BACKEND CONSTANTS
// ============================================================================

/// Default number of entries held by the in-memory backend
pub const MOKA_DEFAULT_MAX_CAPACITY: u64 = 10_000;

// ============================================================================
// BACKEND NAMES
// ============================================================================

/// Registry name of the Redis backend
pub const BACKEND_REDIS: &str = "redis";

/// Registry name of the Moka backend
pub const BACKEND_MOKA: &str = "moka";

/// Registry name of the null backend
pub const BACKEND_NULL: &str = "null";
