//! Error types for the resources client.

use thiserror::Error;

/// Result type for resources client operations.
pub type Result<T> = std::result::Result<T, ResourcesError>;

/// Resources client errors.
#[derive(Debug, Error)]
pub enum ResourcesError {
    /// Configuration error (missing or invalid base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Request { status: u16, message: String },

    /// Body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Body was JSON but neither the `{success, data}` envelope nor a bare payload
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl ResourcesError {
    /// HTTP status code, if the backend responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
