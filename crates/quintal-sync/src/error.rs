//! Sync coordination error types.

use quintal_client::ApiError;
use quintal_commerce::CartError;
use quintal_store::StoreError;
use thiserror::Error;

/// Errors that can occur in session coordination.
#[derive(Error, Debug)]
pub enum SyncError {
    /// A Cart API call failed. Cart state is left at last known good.
    #[error("Cart API error: {0}")]
    Api(#[from] ApiError),

    /// Guest persistence failed. The in-memory state keeps the applied
    /// mutation; the next successful save rewrites the full record.
    #[error("Guest store error: {0}")]
    Store(#[from] StoreError),

    /// A domain-level failure (overflow, currency mismatch, validation).
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// `login` was called on an already-authenticated session.
    #[error("Session is already authenticated")]
    AlreadyAuthenticated,

    /// A server-authority operation was called while guest.
    #[error("Session is not authenticated")]
    NotAuthenticated,

    /// The mutation queue worker has shut down.
    #[error("Mutation queue closed")]
    QueueClosed,
}
