//! Error taxonomy for searches and provider calls

use std::time::Duration;
use thiserror::Error;

/// Errors that can fail a whole search request.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid date format: '{0}' (expected YYYY/MM/DD)")]
    InvalidDateFormat(String),

    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("malformed query string: {0}")]
    MalformedQuery(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SearchError {
    /// True for errors caused by the caller's input rather than by the service.
    pub fn is_bad_request(&self) -> bool {
        !matches!(self, SearchError::Internal(_))
    }
}

/// Failure of a single provider call. These never escape the aggregation engine.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid request url: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}
