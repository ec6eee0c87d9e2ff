//! Domain constants
//!
//! Values that define the behavior of the cache facade regardless of which
//! backend serves it.

/// Per-call network timeout applied to every backend operation (milliseconds)
pub const DEFAULT_OPERATION_TIMEOUT_MS: u64 = 1000;

/// Wildcard used by `fetch_all` to enumerate the key space
pub const FETCH_ALL_PATTERN: &str = "*";

/// Separator between a namespace and the record key
pub const NAMESPACE_SEPARATOR: &str = ":";

/// Component label written in failure log lines
pub const DEFAULT_LOG_COMPONENT: &str = "cache";

/// Shortest TTL handed to a backend; sub-millisecond remainders round up to it
pub const MIN_TTL_MILLIS: u64 = 1;
