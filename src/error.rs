//! Error types for the Flutterwave client

use thiserror::Error;

/// Result type alias for Flutterwave operations
pub type Result<T> = std::result::Result<T, FlutterwaveError>;

/// Main error type for Flutterwave operations.
///
/// Only faults the provider never got to answer end up here. Everything the
/// provider actually said, including non-200 statuses and failure bodies, is
/// reported through [`Envelope`](crate::Envelope) instead.
#[derive(Error, Debug)]
pub enum FlutterwaveError {
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error (DNS, connection, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL could not be combined with an endpoint path
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}
