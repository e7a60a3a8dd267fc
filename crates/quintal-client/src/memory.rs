//! In-process Cart API fake.
//!
//! Holds a server-side cart document plus a variant catalog with live
//! stock, and reproduces the server's reconciliation behavior: every
//! mutation and the login sync silently clamp quantities against live
//! stock and drop lines that can no longer be fulfilled. Used by tests
//! and local development in place of the network.

use crate::api::CartApi;
use crate::envelope::{AddItemBody, CartDocument, LineRef, RemoveItemBody, UpdateItemBody};
use crate::error::ApiError;
use async_trait::async_trait;
use quintal_commerce::cart::{CartLine, LineKey};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    /// Variant templates keyed by line key; template `stock` is live stock.
    catalog: HashMap<LineKey, CartLine>,
    /// The server's cart document.
    items: Vec<CartLine>,
    /// Recorded `/cart/sync` bodies, for asserting merge behavior.
    sync_requests: Vec<Vec<LineRef>>,
    /// Recorded `/cart/update` bodies, for asserting serialization.
    update_requests: Vec<UpdateItemBody>,
}

impl Inner {
    /// Apply the server's silent reconciliation for one requested line.
    ///
    /// Quantities are clamped into the template's live bounds; a line
    /// whose live stock is gone is dropped without an error. Unknown
    /// variants are dropped too (the sync endpoint ignores them).
    fn reconcile(&mut self, key: &LineKey, requested: i64) {
        let Some(template) = self.catalog.get(key) else {
            self.items.retain(|l| &l.key() != key);
            return;
        };

        if template.stock <= 0 || requested <= 0 {
            self.items.retain(|l| &l.key() != key);
            return;
        }

        let quantity = template.bounds().clamp(requested).quantity;
        if let Some(existing) = self.items.iter_mut().find(|l| &l.key() == key) {
            existing.quantity = quantity;
            existing.stock = template.stock;
        } else {
            let mut line = template.clone();
            line.quantity = quantity;
            self.items.push(line);
        }
    }

    fn document(&self) -> CartDocument {
        CartDocument {
            items: self.items.clone(),
        }
    }
}

/// An in-memory fake of the Cart API server.
pub struct MemoryCartApi {
    state: Mutex<Inner>,
}

impl Default for MemoryCartApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCartApi {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(Inner::default()),
        }
    }

    /// Register a variant template; its `stock` field is the live stock.
    pub fn with_variant(self, template: CartLine) -> Self {
        {
            let mut state = self.lock();
            state.catalog.insert(template.key(), template);
        }
        self
    }

    /// Change a variant's live stock and reconcile the cart against it.
    pub fn set_stock(&self, key: &LineKey, stock: i64) {
        let mut state = self.lock();
        if let Some(template) = state.catalog.get_mut(key) {
            template.stock = stock;
        }
        let requested = state
            .items
            .iter()
            .find(|l| &l.key() == key)
            .map(|l| l.quantity);
        if let Some(requested) = requested {
            state.reconcile(key, requested);
        }
    }

    /// The bodies `/cart/sync` has been called with, oldest first.
    pub fn sync_requests(&self) -> Vec<Vec<LineRef>> {
        self.lock().sync_requests.clone()
    }

    /// The bodies `/cart/update` has been called with, oldest first.
    pub fn update_requests(&self) -> Vec<UpdateItemBody> {
        self.lock().update_requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl CartApi for MemoryCartApi {
    async fn fetch_cart(&self) -> Result<CartDocument, ApiError> {
        Ok(self.lock().document())
    }

    async fn add_item(&self, body: AddItemBody) -> Result<CartDocument, ApiError> {
        let mut state = self.lock();
        let key = LineKey::new(body.product_id, body.variant_id);
        if !state.catalog.contains_key(&key) {
            return Err(ApiError::Rejected(format!(
                "unknown variant {}",
                key.variant_id
            )));
        }
        let existing = state
            .items
            .iter()
            .find(|l| l.key() == key)
            .map(|l| l.quantity)
            .unwrap_or(0);
        state.reconcile(&key, existing.saturating_add(body.quantity));
        Ok(state.document())
    }

    async fn update_item(&self, body: UpdateItemBody) -> Result<CartDocument, ApiError> {
        let mut state = self.lock();
        state.update_requests.push(body.clone());
        let key = LineKey::new(body.product_id, body.variant_id);
        state.reconcile(&key, body.quantity);
        Ok(state.document())
    }

    async fn remove_item(&self, body: RemoveItemBody) -> Result<CartDocument, ApiError> {
        let mut state = self.lock();
        let key = LineKey::new(body.product_id, body.variant_id);
        state.items.retain(|l| l.key() != key);
        Ok(state.document())
    }

    async fn clear(&self) -> Result<CartDocument, ApiError> {
        let mut state = self.lock();
        state.items.clear();
        Ok(state.document())
    }

    async fn sync(&self, local_items: Vec<LineRef>) -> Result<CartDocument, ApiError> {
        let mut state = self.lock();
        state.sync_requests.push(local_items.clone());
        for item in local_items {
            let key = LineKey::new(item.product_id, item.variant_id);
            let existing = state
                .items
                .iter()
                .find(|l| l.key() == key)
                .map(|l| l.quantity)
                .unwrap_or(0);
            state.reconcile(&key, existing.saturating_add(item.quantity));
        }
        Ok(state.document())
    }
}
