//! # rcache Domain Layer
//!
//! Core types shared by every rcache crate: the cache backend port, the
//! expiry rules applied before a record reaches the store, the JSON
//! serialization boundary and the error type.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ports`] | `CacheBackend` trait implemented by providers |
//! | [`value_objects`] | `Expiry`, `ExpiryPlan`, `CacheStats` |
//! | [`codec`] | Value encoding for the store |
//! | [`error`] | Domain error and `Result` alias |
//! | [`constants`] | Defaults shared across layers |

pub mod codec;
pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::providers::CacheBackend;
pub use value_objects::{CacheStats, Expiry, ExpiryPlan};
