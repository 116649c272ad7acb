//! Error types for MaveDB API operations.

use thiserror::Error;

/// Errors that can occur during MaveDB API operations.
#[derive(Debug, Error)]
pub enum MaveError {
    /// Configuration is missing or incomplete.
    #[error("MaveDB configuration required: {0}")]
    ConfigMissing(String),

    /// A POST was attempted without a configured auth token.
    #[error("an auth token is required for POST requests")]
    AuthTokenMissing,

    /// The API returned a non-success status.
    #[error("MaveDB API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// A success response was missing an expected field.
    #[error("malformed API response: missing `{field}` field")]
    MalformedResponse { field: &'static str },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result type alias for MaveDB operations.
pub type Result<T> = core::result::Result<T, MaveError>;
