//! The guest cart store trait and the in-memory implementation.

use crate::error::StoreError;
use crate::record::GuestCartRecord;
use std::sync::{Arc, Mutex};

/// Durable storage for the guest cart.
///
/// Injected into the sync coordinator so guest persistence can be
/// swapped (file, embedded KV store, server-side session) without
/// touching cart state.
pub trait GuestCartStore: Send + Sync {
    /// Load the persisted record. `None` when nothing was ever saved.
    fn load(&self) -> Result<Option<GuestCartRecord>, StoreError>;

    /// Persist the record, replacing any previous one.
    fn save(&self, record: &GuestCartRecord) -> Result<(), StoreError>;

    /// Delete the persisted record.
    fn clear(&self) -> Result<(), StoreError>;
}

impl<T: GuestCartStore + ?Sized> GuestCartStore for Arc<T> {
    fn load(&self) -> Result<Option<GuestCartRecord>, StoreError> {
        (**self).load()
    }

    fn save(&self, record: &GuestCartRecord) -> Result<(), StoreError> {
        (**self).save(record)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryCartStore {
    record: Mutex<Option<GuestCartRecord>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GuestCartStore for MemoryCartStore {
    fn load(&self) -> Result<Option<GuestCartRecord>, StoreError> {
        Ok(self
            .record
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn save(&self, record: &GuestCartRecord) -> Result<(), StoreError> {
        *self
            .record
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(record.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self
            .record
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryCartStore::new();
        assert!(store.load().unwrap().is_none());

        let record = GuestCartRecord::empty();
        store.save(&record).unwrap();
        assert_eq!(store.load().unwrap(), Some(record));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
