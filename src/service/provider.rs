use std::fmt;

use async_trait::async_trait;

use super::types::HealthStatus;

/// Errors from talking to the summarization backend.
///
/// The view collapses every variant into one user-facing message; the
/// variants exist so the detail can be logged.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Transport-level failure (connection refused, DNS, reset).
    Network(String),
    /// Backend answered with a non-2xx status.
    Api { status: u16, message: String },
    /// Body was not JSON, or not the JSON we can read a summary from.
    Parse(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Network(msg) => write!(f, "network error: {msg}"),
            ServiceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ServiceError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

#[async_trait]
pub trait SummaryService: Send + Sync {
    /// Base URL the service talks to, for display.
    fn endpoint(&self) -> &str;

    /// Sends `text` verbatim and returns the `summary` field of the reply.
    ///
    /// `Ok(None)` means the backend answered with JSON that carried no
    /// summary; that is not an error.
    async fn summarize(&self, text: &str) -> Result<Option<String>, ServiceError>;

    /// Probes the backend's root endpoint.
    async fn health(&self) -> Result<HealthStatus, ServiceError>;
}
