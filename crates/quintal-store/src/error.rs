//! Guest store error types.

use thiserror::Error;

/// Errors that can occur when persisting the guest cart.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted record exists but cannot be parsed.
    #[error("Corrupt cart record: {0}")]
    Corrupt(String),

    /// Failed to serialize the record.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
