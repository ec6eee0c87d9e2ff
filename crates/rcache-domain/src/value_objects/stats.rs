//! Cache operation statistics

use serde::{Deserialize, Serialize};

/// Snapshot of facade counters
///
/// A failed operation counts as a failure only, never as a miss, even though
/// callers that discard the error cannot tell the two apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Fetches that found a stored value
    pub hits: u64,
    /// Fetches that found nothing
    pub misses: u64,
    /// Operations that failed against the backend
    pub failures: u64,
}

impl CacheStats {
    /// Create empty cache statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Hit rate over successful fetches (0.0 to 1.0)
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}
