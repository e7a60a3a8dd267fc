//! The persisted guest cart record.

use chrono::{DateTime, Utc};
use quintal_commerce::cart::CartLine;
use serde::{Deserialize, Serialize};

/// Storage key the guest cart is persisted under.
pub const CART_KEY: &str = "cart";

/// The durable guest-mode cart: the lines plus a last-updated stamp.
///
/// Rewritten wholesale on every guest mutation, read once at session
/// start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestCartRecord {
    pub items: Vec<CartLine>,
    pub last_updated: DateTime<Utc>,
}

impl GuestCartRecord {
    /// Create a record stamped now.
    pub fn new(items: Vec<CartLine>) -> Self {
        Self {
            items,
            last_updated: Utc::now(),
        }
    }

    /// Create an empty record stamped now.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_shape() {
        let record = GuestCartRecord::empty();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("items").is_some());
        // ISO-8601 stamp under the camelCase key.
        assert!(json["lastUpdated"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_record_round_trip() {
        let record = GuestCartRecord::empty();
        let raw = serde_json::to_string(&record).unwrap();
        let parsed: GuestCartRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, record);
    }
}
