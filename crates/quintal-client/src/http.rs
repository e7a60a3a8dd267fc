//! Reqwest-backed Cart API client.

use crate::api::CartApi;
use crate::envelope::{
    AddItemBody, ApiEnvelope, CartData, CartDocument, LineRef, RemoveItemBody, SyncBody,
    UpdateItemBody,
};
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use tracing::debug;
use url::Url;

/// HTTP implementation of the Cart API.
///
/// # Example
///
/// ```rust,ignore
/// let api = HttpCartApi::new("https://api.example.com/v1/")?
///     .with_bearer_token(session_token);
/// let cart = api.fetch_cart().await?;
/// ```
pub struct HttpCartApi {
    base_url: Url,
    client: Client,
    bearer_token: Option<String>,
}

impl HttpCartApi {
    /// Create a client against a base URL.
    ///
    /// A trailing slash is appended so endpoint paths resolve under any
    /// path prefix the base URL carries.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ApiError> {
        let mut raw = base_url.as_ref().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;
        Ok(Self {
            base_url,
            client: Client::new(),
            bearer_token: None,
        })
    }

    /// Attach a bearer token sent on every request.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    async fn dispatch<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<CartDocument, ApiError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;
        debug!(%method, %url, "cart api request");

        let mut builder = self.client.request(method, url.clone());
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let envelope: ApiEnvelope<CartData> = response
            .json()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        envelope.into_data().map(|data| data.cart)
    }
}

#[async_trait]
impl CartApi for HttpCartApi {
    async fn fetch_cart(&self) -> Result<CartDocument, ApiError> {
        self.dispatch::<()>(Method::GET, "cart", None).await
    }

    async fn add_item(&self, body: AddItemBody) -> Result<CartDocument, ApiError> {
        self.dispatch(Method::POST, "cart/add", Some(&body)).await
    }

    async fn update_item(&self, body: UpdateItemBody) -> Result<CartDocument, ApiError> {
        self.dispatch(Method::PUT, "cart/update", Some(&body)).await
    }

    async fn remove_item(&self, body: RemoveItemBody) -> Result<CartDocument, ApiError> {
        self.dispatch(Method::DELETE, "cart/remove", Some(&body))
            .await
    }

    async fn clear(&self) -> Result<CartDocument, ApiError> {
        self.dispatch::<()>(Method::DELETE, "cart/clear", None).await
    }

    async fn sync(&self, local_items: Vec<LineRef>) -> Result<CartDocument, ApiError> {
        let body = SyncBody { local_items };
        self.dispatch(Method::POST, "cart/sync", Some(&body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpCartApi::new("not a url"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let api = HttpCartApi::new("https://api.example.com/v1").unwrap();
        let url = api.base_url.join("cart/add").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/cart/add");
    }
}
