//! The Cart API contract.

use crate::envelope::{AddItemBody, CartDocument, LineRef, RemoveItemBody, UpdateItemBody};
use crate::error::ApiError;
use async_trait::async_trait;
use std::sync::Arc;

/// The server-side cart collaborator.
///
/// Every mutation returns the server's canonical cart document; callers
/// must replace their local state with it wholesale rather than predict
/// the result, because the server may clamp or drop lines against live
/// stock without signalling an error.
#[async_trait]
pub trait CartApi: Send + Sync {
    /// `GET /cart`: fetch the current server cart.
    async fn fetch_cart(&self) -> Result<CartDocument, ApiError>;

    /// `POST /cart/add`: add a line.
    async fn add_item(&self, body: AddItemBody) -> Result<CartDocument, ApiError>;

    /// `PUT /cart/update`: set a line's quantity.
    async fn update_item(&self, body: UpdateItemBody) -> Result<CartDocument, ApiError>;

    /// `DELETE /cart/remove`: remove a line (body-carrying DELETE).
    async fn remove_item(&self, body: RemoveItemBody) -> Result<CartDocument, ApiError>;

    /// `DELETE /cart/clear`: empty the cart.
    async fn clear(&self) -> Result<CartDocument, ApiError>;

    /// `POST /cart/sync`: the one-time guest merge at login.
    async fn sync(&self, local_items: Vec<LineRef>) -> Result<CartDocument, ApiError>;
}

#[async_trait]
impl<T: CartApi + ?Sized> CartApi for Arc<T> {
    async fn fetch_cart(&self) -> Result<CartDocument, ApiError> {
        (**self).fetch_cart().await
    }

    async fn add_item(&self, body: AddItemBody) -> Result<CartDocument, ApiError> {
        (**self).add_item(body).await
    }

    async fn update_item(&self, body: UpdateItemBody) -> Result<CartDocument, ApiError> {
        (**self).update_item(body).await
    }

    async fn remove_item(&self, body: RemoveItemBody) -> Result<CartDocument, ApiError> {
        (**self).remove_item(body).await
    }

    async fn clear(&self) -> Result<CartDocument, ApiError> {
        (**self).clear().await
    }

    async fn sync(&self, local_items: Vec<LineRef>) -> Result<CartDocument, ApiError> {
        (**self).sync(local_items).await
    }
}
