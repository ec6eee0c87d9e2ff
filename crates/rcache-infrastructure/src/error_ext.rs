//! Context for foreign errors
//!
//! Figment, TOML and file-system failures surface as domain errors carrying
//! a short description of what was being attempted, with the original error
//! kept as the source.

use rcache_domain::error::{Error, Result};
use std::fmt::Display;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Attach context while converting into [`Error`]
///
/// ```ignore
/// use rcache_infrastructure::error_ext::ErrorContext;
///
/// std::fs::write(path, contents)
///     .with_context(|| format!("Failed to write config file {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Wrap a failure as [`Error::Infrastructure`]
    fn context<C: Display>(self, context: C) -> Result<T>;

    /// Like [`ErrorContext::context`], building the message only on failure
    fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> Result<T>;

    /// Wrap a failure as [`Error::Configuration`]
    fn config_context<C: Display>(self, context: C) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|err| infrastructure(&context, err))
    }

    fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> Result<T> {
        self.map_err(|err| infrastructure(&f(), err))
    }

    fn config_context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|err| {
            let (message, source) = describe(&context, err);
            Error::Configuration {
                message,
                source: Some(source),
            }
        })
    }
}

fn infrastructure<C: Display, E>(context: &C, err: E) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    let (message, source) = describe(context, err);
    Error::Infrastructure {
        message,
        source: Some(source),
    }
}

fn describe<C: Display, E>(context: &C, err: E) -> (String, BoxedSource)
where
    E: std::error::Error + Send + Sync + 'static,
{
    (format!("{context}: {err}"), Box::new(err))
}
