//! Cache Backend Port
//!
//! Port for the key-value store behind the cache facade. Implementations
//! exist for Redis (pooled, distributed), Moka (in-process) and a null
//! backend used when caching is disabled.
//!
//! Backends deal in opaque bytes. Typing, expiry resolution, namespacing and
//! failure logging all happen in the facade, so each method maps to exactly
//! one store command.

use crate::error::Result;
use std::time::Duration;

/// Cache Backend Port
///
/// All calls are synchronous and block the calling thread for at most the
/// backend's configured operation timeout. Implementations must be safe to
/// share between threads; connection reuse is their own business.
///
/// # Example
///
/// ```ignore
/// use rcache_domain::CacheBackend;
///
/// backend.set("session:42", br#"{"user":"alice"}"#, None)?;
/// let bytes = backend.get("session:42")?;
/// ```
pub trait CacheBackend: Send + Sync + std::fmt::Debug {
    /// Read one value
    ///
    /// # Returns
    /// The stored bytes, or `None` if the key is absent or expired
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Read several values in one round trip
    ///
    /// The returned vector is aligned with `keys`; absent keys yield `None`.
    fn get_many(&self, keys: &[String]) -> Result<Vec<Option<Vec<u8>>>>;

    /// Write one value
    ///
    /// # Arguments
    /// * `key` - The cache key
    /// * `value` - Encoded value
    /// * `ttl` - Time to live, `None` to store without expiry
    fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Delete a key
    ///
    /// # Returns
    /// True if the key existed
    fn delete(&self, key: &str) -> Result<bool>;

    /// Check if a key exists
    fn exists(&self, key: &str) -> Result<bool>;

    /// List keys matching a glob pattern (`*`, `?`, `[...]`, `\` escapes)
    ///
    /// Walks the whole key space; cost grows with the size of the store.
    fn keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Round trip to the store without touching data
    fn ping(&self) -> Result<()>;

    /// Name of this backend implementation (e.g. "redis", "moka", "null")
    fn provider_name(&self) -> &str;
}

/// Characters with a meaning in key patterns
const PATTERN_METACHARACTERS: [char; 7] = ['*', '?', '[', ']', '{', '}', '\\'];

/// Escape `literal` so it only matches itself inside a key pattern
///
/// ```
/// use rcache_domain::ports::providers::escape_pattern;
///
/// assert_eq!(escape_pattern("tenant[1]"), r"tenant\[1\]");
/// ```
pub fn escape_pattern(literal: &str) -> String {
    let mut escaped = String::with_capacity(literal.len());
    for c in literal.chars() {
        if PATTERN_METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
