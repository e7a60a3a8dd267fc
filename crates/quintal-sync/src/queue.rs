//! Serialized cart mutations.
//!
//! The observed storefront fired one request per click and applied
//! "last response wins", so rapid +/- edits on a line could be clobbered
//! by an out-of-order response. The queue removes that race: a single
//! worker owns the session, dispatches one mutation at a time, and
//! coalesces bursts of quantity edits on the same line down to the last
//! requested value. Two browser tabs writing the same server-side cart
//! document can still overwrite each other; that limitation lives on the
//! server, not here.

use crate::error::SyncError;
use crate::session::CartSession;
use quintal_client::CartApi;
use quintal_commerce::cart::{CartLine, CartSnapshot, LineKey};
use quintal_commerce::ids::UserId;
use quintal_store::GuestCartStore;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, warn};

/// A cart mutation routed through the queue.
#[derive(Debug)]
pub enum CartMutation {
    Add(CartLine),
    SetQuantity(LineKey, i64),
    Remove(LineKey),
    Clear,
    Login(UserId),
    Logout,
}

impl CartMutation {
    /// The line key a quantity edit targets, for coalescing.
    fn quantity_edit_key(&self) -> Option<&LineKey> {
        match self {
            CartMutation::SetQuantity(key, _) => Some(key),
            _ => None,
        }
    }
}

struct Envelope {
    mutation: CartMutation,
    reply: Option<oneshot::Sender<Result<(), SyncError>>>,
}

/// Handle to the mutation worker.
///
/// Cloneable; dropping every handle shuts the worker down once the
/// queue drains.
#[derive(Clone)]
pub struct MutationQueue {
    tx: mpsc::UnboundedSender<Envelope>,
    snapshot_rx: watch::Receiver<CartSnapshot>,
}

impl MutationQueue {
    /// Spawn the worker that owns the session.
    pub fn spawn<A, S>(session: CartSession<A, S>) -> Self
    where
        A: CartApi + 'static,
        S: GuestCartStore + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(session.snapshot().clone());
        tokio::spawn(run_worker(session, rx, snapshot_tx));
        Self { tx, snapshot_rx }
    }

    /// Enqueue a mutation and wait for its outcome.
    pub async fn apply(&self, mutation: CartMutation) -> Result<(), SyncError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Envelope {
                mutation,
                reply: Some(reply_tx),
            })
            .map_err(|_| SyncError::QueueClosed)?;
        reply_rx.await.map_err(|_| SyncError::QueueClosed)?
    }

    /// Enqueue a mutation without waiting; failures are logged by the
    /// worker.
    pub fn enqueue(&self, mutation: CartMutation) -> Result<(), SyncError> {
        self.tx
            .send(Envelope {
                mutation,
                reply: None,
            })
            .map_err(|_| SyncError::QueueClosed)
    }

    /// The snapshot as of the last applied mutation.
    pub fn snapshot(&self) -> CartSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Watch snapshot changes (for UI subscriptions).
    pub fn watch(&self) -> watch::Receiver<CartSnapshot> {
        self.snapshot_rx.clone()
    }
}

async fn run_worker<A, S>(
    mut session: CartSession<A, S>,
    mut rx: mpsc::UnboundedReceiver<Envelope>,
    snapshot_tx: watch::Sender<CartSnapshot>,
) where
    A: CartApi,
    S: GuestCartStore,
{
    while let Some(first) = rx.recv().await {
        // Drain whatever queued up behind the first mutation so a burst
        // of edits can be coalesced before anything is dispatched.
        let mut batch = vec![first];
        while let Ok(next) = rx.try_recv() {
            batch.push(next);
        }

        // A quantity edit is superseded when a later edit in the same
        // batch targets the same line key; only the last value goes out.
        let superseded: Vec<bool> = batch
            .iter()
            .enumerate()
            .map(|(index, envelope)| {
                envelope
                    .mutation
                    .quantity_edit_key()
                    .map(|key| {
                        batch[index + 1..]
                            .iter()
                            .any(|later| later.mutation.quantity_edit_key() == Some(key))
                    })
                    .unwrap_or(false)
            })
            .collect();

        for (envelope, superseded) in batch.into_iter().zip(superseded) {
            if superseded {
                debug!(mutation = ?envelope.mutation, "quantity edit superseded in batch");
                if let Some(reply) = envelope.reply {
                    let _ = reply.send(Ok(()));
                }
                continue;
            }

            let result = dispatch(&mut session, envelope.mutation).await;
            match &result {
                Ok(()) => {
                    let _ = snapshot_tx.send(session.snapshot().clone());
                }
                Err(e) => warn!(error = %e, "cart mutation failed"),
            }
            if let Some(reply) = envelope.reply {
                let _ = reply.send(result);
            }
        }
    }
}

async fn dispatch<A, S>(
    session: &mut CartSession<A, S>,
    mutation: CartMutation,
) -> Result<(), SyncError>
where
    A: CartApi,
    S: GuestCartStore,
{
    match mutation {
        CartMutation::Add(line) => session.add_item(line).await.map(|_| ()),
        CartMutation::SetQuantity(key, quantity) => {
            session.set_quantity(&key, quantity).await.map(|_| ())
        }
        CartMutation::Remove(key) => session.remove_item(&key).await,
        CartMutation::Clear => session.clear().await,
        CartMutation::Login(user) => session.login(user).await,
        CartMutation::Logout => {
            session.logout();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quintal_client::MemoryCartApi;
    use quintal_commerce::catalog::{PriceTier, ResolvedPrice, StockBounds};
    use quintal_commerce::ids::{ProductId, VariantId};
    use quintal_commerce::money::{Currency, Money};
    use quintal_store::MemoryCartStore;
    use std::sync::Arc;

    fn line(product: &str, variant: &str, quantity: i64) -> CartLine {
        CartLine::new(
            ProductId::new(product),
            VariantId::new(variant),
            "Test Product",
            ResolvedPrice {
                price: Money::new(9000, Currency::INR),
                tier: PriceTier::Bronze,
            },
            Money::new(12000, Currency::INR),
            quantity,
            StockBounds::new(1, 100),
            18.0,
        )
        .unwrap()
    }

    fn queue_with_api() -> (MutationQueue, Arc<MemoryCartApi>) {
        let api = Arc::new(MemoryCartApi::new().with_variant(line("p1", "v1", 1)));
        let store = Arc::new(MemoryCartStore::new());
        let session = CartSession::new(api.clone(), store);
        (MutationQueue::spawn(session), api)
    }

    #[tokio::test]
    async fn test_mutations_apply_in_order() {
        let (queue, _api) = queue_with_api();
        queue.apply(CartMutation::Add(line("p1", "v1", 4))).await.unwrap();
        queue
            .apply(CartMutation::SetQuantity(LineKey::new("p1", "v1"), 7))
            .await
            .unwrap();

        assert_eq!(queue.snapshot().total_units(), 7);
    }

    #[tokio::test]
    async fn test_burst_of_edits_coalesces_to_last_value() {
        let (queue, api) = queue_with_api();
        queue.apply(CartMutation::Add(line("p1", "v1", 1))).await.unwrap();
        queue
            .apply(CartMutation::Login(UserId::new("user-1")))
            .await
            .unwrap();

        // Rapid +/- clicks: enqueued back-to-back with no await between,
        // so the worker sees them as one batch. The current-thread test
        // runtime keeps the worker parked until the first await below.
        let key = LineKey::new("p1", "v1");
        queue.enqueue(CartMutation::SetQuantity(key.clone(), 2)).unwrap();
        queue.enqueue(CartMutation::SetQuantity(key.clone(), 3)).unwrap();
        queue.enqueue(CartMutation::SetQuantity(key.clone(), 4)).unwrap();
        queue
            .apply(CartMutation::SetQuantity(key.clone(), 5))
            .await
            .unwrap();

        // One server call, carrying the final value.
        let updates = api.update_requests();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].quantity, 5);
        assert_eq!(queue.snapshot().total_units(), 5);
    }

    #[tokio::test]
    async fn test_edits_on_different_keys_are_not_coalesced() {
        let api = Arc::new(
            MemoryCartApi::new()
                .with_variant(line("p1", "v1", 1))
                .with_variant(line("p2", "v2", 1)),
        );
        let store = Arc::new(MemoryCartStore::new());
        let queue = MutationQueue::spawn(CartSession::new(api.clone(), store));

        queue.apply(CartMutation::Add(line("p1", "v1", 1))).await.unwrap();
        queue.apply(CartMutation::Add(line("p2", "v2", 1))).await.unwrap();
        queue
            .apply(CartMutation::Login(UserId::new("user-1")))
            .await
            .unwrap();

        queue
            .enqueue(CartMutation::SetQuantity(LineKey::new("p1", "v1"), 6))
            .unwrap();
        queue
            .apply(CartMutation::SetQuantity(LineKey::new("p2", "v2"), 8))
            .await
            .unwrap();

        let updates = api.update_requests();
        assert_eq!(updates.len(), 2);
    }

    #[tokio::test]
    async fn test_superseded_edit_still_resolves() {
        let (queue, _api) = queue_with_api();
        queue.apply(CartMutation::Add(line("p1", "v1", 1))).await.unwrap();

        let key = LineKey::new("p1", "v1");
        let early = queue.apply(CartMutation::SetQuantity(key.clone(), 2));
        let late = queue.apply(CartMutation::SetQuantity(key.clone(), 9));
        let (early, late) = tokio::join!(early, late);
        early.unwrap();
        late.unwrap();

        assert_eq!(queue.snapshot().total_units(), 9);
    }

    #[tokio::test]
    async fn test_watch_observes_updates() {
        let (queue, _api) = queue_with_api();
        let mut rx = queue.watch();

        queue.apply(CartMutation::Add(line("p1", "v1", 4))).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().total_units(), 4);
    }
}
