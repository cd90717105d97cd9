//! Error types for client construction and request failures.

use thiserror::Error;

/// Errors raised while building a [`ProductSearchClient`](crate::rapidapi::ProductSearchClient).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("RapidAPI key is required")]
    MissingApiKey,

    #[error("Failed to configure proxy {url}: {source}")]
    InvalidProxy {
        url: String,
        #[source]
        source: wreq::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] wreq::Error),
}

/// A failed request. Only its message leaves the crate, as the `error`
/// field of an [`ApiResponse`](crate::rapidapi::ApiResponse).
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to send request: {0}")]
    Transport(#[source] wreq::Error),

    #[error("Request failed with status {status} for url: {url}")]
    Status { status: u16, url: String },

    #[error("Failed to read response body: {0}")]
    Body(#[source] wreq::Error),

    #[error("Failed to parse response body as JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
