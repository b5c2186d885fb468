//! Error types for citadel-core.
//!
//! Only two of these ever reach the user as messages: [`FilterError::NoFiltersProvided`]
//! and [`FetchError::ExhaustedRetries`]. The others are observed between
//! attempts and end up as the detail of the final failure.

use thiserror::Error;

/// Errors raised while collecting filter values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Every filter field was empty after trimming
    #[error("Please enter at least one filter value before searching.")]
    NoFiltersProvided,
}

/// Errors that can occur while fetching characters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Non-2xx, non-404 response; retried
    #[error("Server error: {status} {reason}")]
    RetryableHttp { status: u16, reason: String },
    /// Connection failure or unreadable response body; retried
    #[error("Network error: {0}")]
    Network(String),
    /// URL could not be parsed or uses an unsupported scheme
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Every attempt failed
    #[error("Request failed after {attempts} attempts: {detail}")]
    ExhaustedRetries { attempts: u32, detail: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Network(format!("malformed response body: {}", err))
    }
}
