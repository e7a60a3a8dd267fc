//! Cart domain error types.

use thiserror::Error;

/// Errors that can occur in cart and pricing operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// A cart line was constructed with missing required fields.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
