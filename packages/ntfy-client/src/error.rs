//! Error types for the ntfy client.

use thiserror::Error;

/// Result type for ntfy client operations.
pub type Result<T> = std::result::Result<T, NtfyError>;

/// ntfy client errors.
#[derive(Debug, Error)]
pub enum NtfyError {
    /// Configuration error (empty topic, malformed base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout, unreadable body)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}
