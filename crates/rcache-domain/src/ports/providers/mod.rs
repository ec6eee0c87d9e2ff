//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | CacheBackend | Key-value store serving the cache facade |

/// Cache backend port
pub mod cache;

pub use cache::{CacheBackend, escape_pattern};
