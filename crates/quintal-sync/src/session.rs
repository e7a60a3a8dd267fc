//! The cart session: one snapshot, one authority, one merge per login.

use crate::authority::CartAuthority;
use crate::error::SyncError;
use quintal_client::{AddItemBody, CartApi, LineRef, RemoveItemBody, UpdateItemBody};
use quintal_commerce::cart::{CartLine, CartSnapshot, LineKey, OrderSummary};
use quintal_commerce::catalog::QuantityAdjustment;
use quintal_commerce::ids::UserId;
use quintal_commerce::money::Money;
use quintal_store::{GuestCartRecord, GuestCartStore};
use tracing::{debug, info, warn};

/// Owns the working cart snapshot and coordinates the two authorities.
///
/// While guest, mutations apply to the snapshot synchronously and are
/// persisted to the injected store. After [`login`](Self::login) the
/// server is sole authority: every mutation calls the matching endpoint
/// and replaces the snapshot wholesale with the returned document. A
/// failed call leaves the snapshot at its last known good state; no
/// retry or rollback happens here.
pub struct CartSession<A, S> {
    api: A,
    store: S,
    snapshot: CartSnapshot,
    authority: CartAuthority,
}

impl<A: CartApi, S: GuestCartStore> CartSession<A, S> {
    /// Create a fresh guest session with an empty snapshot.
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            snapshot: CartSnapshot::new(),
            authority: CartAuthority::Guest,
        }
    }

    /// Guest boot: load the persisted record, if any, as working state.
    pub fn start(&mut self) -> Result<(), SyncError> {
        if self.authority.is_authenticated() {
            return Err(SyncError::AlreadyAuthenticated);
        }
        if let Some(record) = self.store.load()? {
            debug!(lines = record.items.len(), "resuming persisted guest cart");
            self.snapshot.replace(record.items);
        }
        Ok(())
    }

    pub fn authority(&self) -> &CartAuthority {
        &self.authority
    }

    pub fn snapshot(&self) -> &CartSnapshot {
        &self.snapshot
    }

    /// Add a line to the cart.
    ///
    /// Returns the advisory quantity adjustment when the guest-side
    /// clamp changed the request; server-side clamping is silent.
    pub async fn add_item(
        &mut self,
        line: CartLine,
    ) -> Result<Option<QuantityAdjustment>, SyncError> {
        match &self.authority {
            CartAuthority::Guest => {
                let clamped = self.snapshot.add_line(line);
                self.persist_guest()?;
                Ok(clamped.adjustment)
            }
            CartAuthority::Authenticated { .. } => {
                let body = AddItemBody {
                    product_id: line.product_id.clone(),
                    variant_id: line.variant_id.clone(),
                    quantity: line.quantity,
                };
                let document = self.api.add_item(body).await?;
                self.snapshot.replace(document.items);
                Ok(None)
            }
        }
    }

    /// Set a line's quantity; non-positive removes the line.
    pub async fn set_quantity(
        &mut self,
        key: &LineKey,
        quantity: i64,
    ) -> Result<Option<QuantityAdjustment>, SyncError> {
        match &self.authority {
            CartAuthority::Guest => {
                let clamped = self.snapshot.set_quantity(key, quantity);
                self.persist_guest()?;
                Ok(clamped.and_then(|c| c.adjustment))
            }
            CartAuthority::Authenticated { .. } => {
                let body = UpdateItemBody {
                    product_id: key.product_id.clone(),
                    variant_id: key.variant_id.clone(),
                    quantity,
                };
                let document = self.api.update_item(body).await?;
                self.snapshot.replace(document.items);
                Ok(None)
            }
        }
    }

    /// Remove a line; absent keys are a no-op.
    pub async fn remove_item(&mut self, key: &LineKey) -> Result<(), SyncError> {
        match &self.authority {
            CartAuthority::Guest => {
                self.snapshot.remove_line(key);
                self.persist_guest()?;
                Ok(())
            }
            CartAuthority::Authenticated { .. } => {
                let body = RemoveItemBody {
                    product_id: key.product_id.clone(),
                    variant_id: key.variant_id.clone(),
                };
                let document = self.api.remove_item(body).await?;
                self.snapshot.replace(document.items);
                Ok(())
            }
        }
    }

    /// Empty the cart.
    pub async fn clear(&mut self) -> Result<(), SyncError> {
        match &self.authority {
            CartAuthority::Guest => {
                self.snapshot.clear();
                self.persist_guest()?;
                Ok(())
            }
            CartAuthority::Authenticated { .. } => {
                let document = self.api.clear().await?;
                self.snapshot.replace(document.items);
                Ok(())
            }
        }
    }

    /// Re-fetch the server's cart. Only meaningful while authenticated.
    pub async fn refresh(&mut self) -> Result<(), SyncError> {
        if !self.authority.is_authenticated() {
            return Err(SyncError::NotAuthenticated);
        }
        let document = self.api.fetch_cart().await?;
        self.snapshot.replace(document.items);
        Ok(())
    }

    /// The one-time guest merge at login.
    ///
    /// Ships the current lines' `(productId, variantId, quantity)`
    /// triples to the sync endpoint and unconditionally adopts the
    /// returned cart: the server may have clamped or dropped lines
    /// against live stock, so the local optimistic state is never
    /// re-applied. On failure the session stays guest with its snapshot
    /// untouched; the caller may retry.
    pub async fn login(&mut self, user: UserId) -> Result<(), SyncError> {
        if self.authority.is_authenticated() {
            return Err(SyncError::AlreadyAuthenticated);
        }

        let local_items: Vec<LineRef> = self.snapshot.lines().iter().map(LineRef::from).collect();
        info!(user = %user, lines = local_items.len(), "merging guest cart at login");

        let document = self.api.sync(local_items).await?;
        self.snapshot.replace(document.items);
        self.authority = CartAuthority::Authenticated { user };
        Ok(())
    }

    /// Drop server authority and clear in-memory state.
    ///
    /// The guest store's record is left alone so a later guest session
    /// can resume it; a later `login` merges whatever accumulated since.
    pub fn logout(&mut self) {
        if let Some(user) = self.authority.user() {
            info!(user = %user, "logging out; clearing in-memory cart");
        } else {
            warn!("logout called on a guest session");
        }
        self.snapshot.clear();
        self.authority = CartAuthority::Guest;
    }

    /// Order totals for the current snapshot.
    pub fn summary(&self, wallet_deduction: Money) -> Result<OrderSummary, SyncError> {
        Ok(OrderSummary::compute(&self.snapshot, wallet_deduction)?)
    }

    fn persist_guest(&self) -> Result<(), SyncError> {
        let record = GuestCartRecord::new(self.snapshot.lines().to_vec());
        self.store.save(&record)?;
        Ok(())
    }
}
