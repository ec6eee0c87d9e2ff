//! # rcache - Backend Implementations
//!
//! This crate contains the cache backends behind the facade. Each backend
//! implements the `CacheBackend` port defined in `rcache-domain` and
//! registers itself in [`registry::CACHE_BACKENDS`].
//!
//! | Backend | Type | Description |
//! |---------|------|-------------|
//! | [`cache::NullCacheBackend`] | Disabled | Stores nothing, used when no endpoint is configured |
//! | `MokaCacheBackend` | Local | In-process cache with per-entry TTL |
//! | `RedisCacheBackend` | Distributed | Pooled Redis connections with read/write split |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! rcache-providers = { version = "0.1", default-features = false, features = ["cache-redis"] }
//! ```

// Re-export rcache-domain types commonly used with backends
pub use rcache_domain::error::{Error, Result};
pub use rcache_domain::ports::providers::CacheBackend;

/// Backend-specific constants
pub mod constants;

/// Cache backend implementations
pub mod cache;

/// Backend registry and factory resolution
pub mod registry;

pub use registry::{CacheBackendConfig, list_cache_backends, resolve_cache_backend};
