//! Tracing setup and request-scoped logging.

use std::fmt;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter` when it is set and
/// parses. Fails if a global subscriber is already installed.
pub fn init(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| Error::config(format!("invalid log filter '{}': {}", default_filter, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::config(format!("logging already initialised: {}", e)))
}

/// A request-scoped logger.
///
/// Every message carries the request id and path of the request it was
/// created for. It borrows both, so it cannot outlive the request.
#[derive(Debug, Clone, Copy)]
pub struct RequestLog<'a> {
    request_id: &'a str,
    path: &'a str,
}

impl<'a> RequestLog<'a> {
    /// Creates a logger for one request.
    pub fn new(request_id: &'a str, path: &'a str) -> Self {
        Self { request_id, path }
    }

    /// Logs an info-level message.
    ///
    /// ```
    /// # use showcase_gate::logging::RequestLog;
    /// let log = RequestLog::new("req-1", "/dashboard");
    /// log.info(format_args!("redirecting to {}", "/signin"));
    /// ```
    pub fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(request_id = %self.request_id, path = %self.path, "{}", args);
    }

    /// Logs a debug-level message.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(request_id = %self.request_id, path = %self.path, "{}", args);
    }
}
