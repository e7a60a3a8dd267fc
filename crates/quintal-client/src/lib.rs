//! Cart API client for Quintal.
//!
//! Defines the wire contract of the server-side cart collaborator (the
//! JSON envelope and request bodies), the [`CartApi`] trait, a
//! reqwest-backed implementation, and an in-memory fake server for
//! tests and local development.
//!
//! # Example
//!
//! ```rust,ignore
//! use quintal_client::{CartApi, HttpCartApi};
//!
//! let api = HttpCartApi::new("https://api.example.com/v1/")?
//!     .with_bearer_token(token);
//! let cart = api.fetch_cart().await?;
//! ```

mod api;
mod envelope;
mod error;
mod http;
mod memory;

pub use api::CartApi;
pub use envelope::{
    AddItemBody, ApiEnvelope, CartData, CartDocument, LineRef, RemoveItemBody, SyncBody,
    UpdateItemBody,
};
pub use error::ApiError;
pub use http::HttpCartApi;
pub use memory::MemoryCartApi;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AddItemBody, ApiError, CartApi, CartDocument, HttpCartApi, LineRef, MemoryCartApi,
        RemoveItemBody, SyncBody, UpdateItemBody,
    };
}
