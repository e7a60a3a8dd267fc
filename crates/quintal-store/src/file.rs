//! JSON-file guest cart store.

use crate::error::StoreError;
use crate::record::{GuestCartRecord, CART_KEY};
use crate::store::GuestCartStore;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Guest cart persistence backed by a single JSON file.
///
/// Writes go to a temp file in the same directory followed by a rename,
/// so a crash mid-write never leaves a half-written record. A missing
/// file loads as `None`; an unparseable file surfaces as
/// [`StoreError::Corrupt`] rather than being silently discarded.
pub struct FileCartStore {
    path: PathBuf,
}

impl FileCartStore {
    /// Store the record as `<dir>/cart.json`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let path = dir.into().join(format!("{CART_KEY}.json"));
        Self { path }
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl GuestCartStore for FileCartStore {
    fn load(&self) -> Result<Option<GuestCartRecord>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e)),
        };
        let record = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", self.path.display())))?;
        Ok(Some(record))
    }

    fn save(&self, record: &GuestCartRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_vec_pretty(record)?;
        let temp = self.temp_path();
        fs::write(&temp, raw)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quintal_commerce::catalog::{PriceTier, ResolvedPrice, StockBounds};
    use quintal_commerce::cart::CartLine;
    use quintal_commerce::ids::{ProductId, VariantId};
    use quintal_commerce::money::{Currency, Money};

    fn record() -> GuestCartRecord {
        let line = CartLine::new(
            ProductId::new("p1"),
            VariantId::new("v1"),
            "Test Product",
            ResolvedPrice {
                price: Money::new(9000, Currency::INR),
                tier: PriceTier::Bronze,
            },
            Money::new(12000, Currency::INR),
            5,
            StockBounds::new(1, 100),
            18.0,
        )
        .unwrap();
        GuestCartRecord::new(vec![line])
    }

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCartStore::new(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCartStore::new(dir.path());

        let record = record();
        store.save(&record).unwrap();
        assert_eq!(store.load().unwrap(), Some(record));
    }

    #[test]
    fn test_save_replaces_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCartStore::new(dir.path());

        store.save(&record()).unwrap();
        store.save(&GuestCartRecord::empty()).unwrap();
        assert!(store.load().unwrap().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_record_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCartStore::new(dir.path());
        fs::write(dir.path().join("cart.json"), "{not json").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCartStore::new(dir.path());

        store.save(&record()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
