//! Cart session coordination for Quintal.
//!
//! The cart has two possible authorities: durable local storage while
//! the customer is a guest, and the server's cart document once they
//! are authenticated. This crate owns that split:
//!
//! - [`CartAuthority`] is the mode flag
//! - [`CartSession`] holds the working snapshot, persists guest
//!   mutations, performs the one-time merge at login, and mirrors the
//!   server's responses afterwards
//! - [`MutationQueue`] serializes server-bound mutations so rapid edits
//!   cannot be clobbered by out-of-order responses
//!
//! # Example
//!
//! ```rust,ignore
//! use quintal_sync::{CartMutation, CartSession, MutationQueue};
//!
//! let mut session = CartSession::new(api, store);
//! session.start()?;
//!
//! let queue = MutationQueue::spawn(session);
//! queue.apply(CartMutation::Add(line)).await?;
//! queue.apply(CartMutation::Login(user)).await?;
//! ```

mod authority;
mod error;
mod queue;
mod session;

pub use authority::CartAuthority;
pub use error::SyncError;
pub use queue::{CartMutation, MutationQueue};
pub use session::CartSession;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CartAuthority, CartMutation, CartSession, MutationQueue, SyncError};
}
