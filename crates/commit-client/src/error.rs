//! Error kinds for backend requests

use thiserror::Error;

/// Errors returned by [`crate::CommitApi`] implementations
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL is not an absolute http(s) URL
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Connection, TLS or body-read failure
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status
    #[error("request to {url} returned HTTP {status}")]
    Status { status: u16, url: String },

    /// The body did not have the expected shape
    #[error("malformed response from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
