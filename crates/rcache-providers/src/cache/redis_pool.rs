//! Redis connection management for `r2d2`
//!
//! `r2d2` owns pooling; this module only tells it how to open, validate and
//! discard a Redis connection. A manager holds one client per endpoint and
//! rotates through them when the pool asks for a new connection, so a pool
//! spreads its connections over every configured host and skips hosts that
//! refuse.

use crate::constants::REDIS_DEFAULT_PORT;
use rcache_domain::error::{Error, Result};
use redis::{Client, Connection, ConnectionLike, RedisError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

/// Turn a configured endpoint into a Redis URL
///
/// Accepted forms:
/// - `host` and `host:port` become `redis://host:port/`
/// - `password@host:port` becomes `redis://:password@host:port/`, with the
///   password percent-encoded
/// - `redis://...`, `rediss://...` and `unix://...` pass through
///
/// # Example
///
/// ```
/// use rcache_providers::cache::normalize_endpoint;
///
/// assert_eq!(normalize_endpoint("10.0.0.1:6380").unwrap(), "redis://10.0.0.1:6380/");
/// ```
pub fn normalize_endpoint(endpoint: &str) -> Result<String> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(Error::configuration("Redis endpoint cannot be empty"));
    }
    if endpoint.contains("://") {
        return Ok(endpoint.to_string());
    }

    let (password, address) = match endpoint.rsplit_once('@') {
        Some((password, address)) => (Some(password), address),
        None => (None, endpoint),
    };

    let address = if address.contains(':') {
        address.to_string()
    } else {
        format!("{address}:{REDIS_DEFAULT_PORT}")
    };

    Ok(match password {
        Some(password) if !password.is_empty() => {
            format!("redis://:{}@{address}/", urlencoding::encode(password))
        }
        _ => format!("redis://{address}/"),
    })
}

/// `r2d2` connection manager over a list of Redis endpoints
#[derive(Debug)]
pub struct EndpointConnectionManager {
    clients: Vec<(String, Client)>,
    next: AtomicUsize,
    timeout: Duration,
}

impl EndpointConnectionManager {
    /// Build a manager for the given endpoints
    ///
    /// Fails if the list is empty or an endpoint is not a valid Redis
    /// address. No connection is opened here.
    pub fn new(endpoints: &[String], timeout: Duration) -> Result<Self> {
        if endpoints.is_empty() {
            return Err(Error::configuration(
                "At least one Redis endpoint is required",
            ));
        }

        let clients = endpoints
            .iter()
            .map(|endpoint| {
                let url = normalize_endpoint(endpoint)?;
                let client = Client::open(url.as_str()).map_err(|e| {
                    Error::configuration_with_source(
                        format!("Invalid Redis endpoint '{endpoint}'"),
                        e,
                    )
                })?;
                Ok((endpoint.trim().to_string(), client))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            clients,
            next: AtomicUsize::new(0),
            timeout,
        })
    }

    /// Endpoints served by this manager, in rotation order
    pub fn endpoints(&self) -> impl Iterator<Item = &str> {
        self.clients.iter().map(|(endpoint, _)| endpoint.as_str())
    }

    fn open(&self, client: &Client) -> redis::RedisResult<Connection> {
        let conn = client.get_connection_with_timeout(self.timeout)?;
        conn.set_read_timeout(Some(self.timeout))?;
        conn.set_write_timeout(Some(self.timeout))?;
        Ok(conn)
    }
}

impl r2d2::ManageConnection for EndpointConnectionManager {
    type Connection = Connection;
    type Error = RedisError;

    fn connect(&self) -> std::result::Result<Connection, RedisError> {
        let count = self.clients.len();
        let start = self.next.fetch_add(1, Ordering::Relaxed);
        let mut attempt = 0;

        loop {
            let (endpoint, client) = &self.clients[start.wrapping_add(attempt) % count];
            match self.open(client) {
                Ok(conn) => return Ok(conn),
                Err(e) if attempt + 1 < count => {
                    debug!(
                        endpoint = %endpoint,
                        error = %e,
                        "Redis endpoint unavailable, trying next"
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn is_valid(&self, conn: &mut Connection) -> std::result::Result<(), RedisError> {
        redis::cmd("PING").query::<()>(conn)
    }

    fn has_broken(&self, conn: &mut Connection) -> bool {
        !conn.is_open()
    }
}

/// Routes `r2d2` connection errors into `tracing` instead of the `log` crate
#[derive(Debug, Clone, Copy)]
pub(crate) struct TracingErrorHandler;

impl r2d2::HandleError<RedisError> for TracingErrorHandler {
    fn handle_error(&self, error: RedisError) {
        debug!(error = %error, "Redis pool failed to open a connection");
    }
}
