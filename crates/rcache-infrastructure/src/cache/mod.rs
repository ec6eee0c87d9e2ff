//! Cache facade over the configured backend

pub mod facade;

pub use facade::{CacheFacade, CacheOperation};
