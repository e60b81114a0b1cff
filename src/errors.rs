//! Error types for quickanswer
//!
//! Every handler failure is one of these variants. The router and the
//! dispatcher never swallow them; they reach the caller unchanged.

use thiserror::Error;

/// Main error type for query answering
#[derive(Error, Debug)]
pub enum QueryError {
    /// Malformed or semantically invalid user-supplied input
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Aggregation over zero elements
    #[error("Nothing to aggregate: {what} is empty")]
    EmptyInput { what: &'static str },

    /// Collaborator I/O failure (non-success status, unreachable host, bad body)
    #[error("{service} is unavailable: {reason}")]
    UpstreamUnavailable { service: String, reason: String },

    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Timeout errors
    #[error("Query timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },
}

impl QueryError {
    /// Build an upstream failure for a named service
    pub fn upstream(service: impl Into<String>, reason: impl Into<String>) -> Self {
        QueryError::UpstreamUnavailable {
            service: service.into(),
            reason: reason.into(),
        }
    }

    /// True when the query itself was rejected rather than the system failing
    pub fn is_user_error(&self) -> bool {
        matches!(self, QueryError::Validation(_) | QueryError::EmptyInput { .. })
    }
}

/// Result type alias for query operations
pub type Result<T> = std::result::Result<T, QueryError>;
