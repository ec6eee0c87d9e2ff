//! Value Objects
//!
//! Immutable values passed between the facade and the backends.

/// Expiry rules for stored records
pub mod expiry;
/// Operation counters
pub mod stats;

pub use expiry::{Expiry, ExpiryPlan, ttl_millis};
pub use stats::CacheStats;
