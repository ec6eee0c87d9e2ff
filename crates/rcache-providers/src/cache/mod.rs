//! Cache Backend Implementations
//!
//! ## Available Backends
//!
//! | Backend | Type | Description |
//! |---------|------|-------------|
//! | [`NullCacheBackend`] | Disabled | No-op backend |
//! | `MokaCacheBackend` | Local | In-memory cache (development, tests) |
//! | `RedisCacheBackend` | Distributed | Redis-backed for multi-instance |
//!
//! ## Backend Selection Guide
//!
//! - **Caching disabled**: `NullCacheBackend` (no endpoints configured)
//! - **Single process**: `MokaCacheBackend`
//! - **Production**: `RedisCacheBackend`

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;
#[cfg(feature = "cache-redis")]
pub mod redis;
#[cfg(feature = "cache-redis")]
pub mod redis_pool;

// Re-export for convenience
#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheBackend;
pub use null::NullCacheBackend;
#[cfg(feature = "cache-redis")]
pub use redis::RedisCacheBackend;
#[cfg(feature = "cache-redis")]
pub use redis_pool::{EndpointConnectionManager, normalize_endpoint};
