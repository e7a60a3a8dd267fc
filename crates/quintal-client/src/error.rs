//! Cart API error types.

use thiserror::Error;

/// Errors that can occur when calling the Cart API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Transport-level failure; no response was received.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The server answered with an error status.
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// The response body could not be parsed.
    #[error("Failed to parse response: {0}")]
    Deserialization(String),

    /// The server answered `success: false` or omitted the cart payload.
    #[error("Request rejected: {0}")]
    Rejected(String),
}
