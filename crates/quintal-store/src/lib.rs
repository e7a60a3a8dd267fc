//! Guest cart persistence for Quintal.
//!
//! A guest session's cart lives in durable local storage under a single
//! `"cart"` record. This crate defines the record shape, the
//! [`GuestCartStore`] trait the sync coordinator is injected with, and
//! two implementations: a JSON file store and an in-memory store for
//! tests.

mod error;
mod file;
mod record;
mod store;

pub use error::StoreError;
pub use file::FileCartStore;
pub use record::{GuestCartRecord, CART_KEY};
pub use store::{GuestCartStore, MemoryCartStore};
