//! # rcache Infrastructure Layer
//!
//! Everything an application touches: the cache facade, configuration
//! loading and logging.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | `CacheFacade`, the shared cache handle |
//! | [`config`] | Figment-based configuration |
//! | [`logging`] | Subscriber setup and the cache failure line |
//! | [`bootstrap`] | Builds the facade at startup |
//! | [`error_ext`] | Error context helpers |
//!
//! ## Example
//!
//! ```ignore
//! use rcache_infrastructure::bootstrap::init_cache;
//! use rcache_infrastructure::config::ConfigLoader;
//!
//! let config = ConfigLoader::new().load()?;
//! let cache = init_cache(&config)?;
//! cache.store("session:42", &session)?;
//! ```

pub mod bootstrap;
pub mod cache;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{init, init_cache};
pub use cache::{CacheFacade, CacheOperation};
pub use config::{AppConfig, CacheConfig, ConfigLoader, LoggingConfig};
pub use rcache_domain::error::{Error, Result};
