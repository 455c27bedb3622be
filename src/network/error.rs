//! The one failure the catalog fetch can report.

use thiserror::Error;

/// Why the country catalog could not be obtained.
///
/// The view only ever shows the `Display` text; the variants exist for logs
/// and tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The service answered with a non-success status.
    #[error("Error fetching countries (HTTP {0})")]
    Status(u16),

    /// Connecting, sending or reading the body failed.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The body was not a list of countries.
    #[error("Invalid country data: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            FetchError::Transport(format!("connection failed: {}", e))
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}
