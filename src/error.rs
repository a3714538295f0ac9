//! Error types for TheAudioDB client.

use thiserror::Error;

/// Transport-level errors raised by an [`ApiClient`](crate::api::ApiClient).
///
/// These never reach the view layer: the repository folds every variant
/// into a fixed failure message.
#[derive(Debug, Error)]
pub enum AudioDbError {
    /// HTTP request failed (connection, timeout, body read or decode).
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The configured base URL or an endpoint could not be joined.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Client configuration was rejected.
    #[error("Config error: {0}")]
    ConfigError(String),
}

/// Result type alias for TheAudioDB operations.
pub type Result<T> = std::result::Result<T, AudioDbError>;
