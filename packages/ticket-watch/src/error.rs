//! Typed errors for a single event check.
//!
//! Every variant is collapsed to `Status::Unclear` by the checker; they exist
//! so the log line says what actually went wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// Transport failure (DNS, connect, timeout, unreadable body)
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// Page did not have the expected structure
    #[error("unexpected page structure at {url}: {reason}")]
    Parse { url: String, reason: String },
}

impl CheckError {
    pub fn fetch(url: &str, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Fetch {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn parse(url: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

pub type CheckResult<T> = std::result::Result<T, CheckError>;
