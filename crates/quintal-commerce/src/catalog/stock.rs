//! Quantity bounds for a purchasable variant.
//!
//! Wholesale variants carry a minimum order quantity (MOQ) and a stock
//! snapshot. A requested quantity is always clamped into those bounds
//! rather than rejected; the adjustment is reported so callers can show
//! a specific message.

use serde::{Deserialize, Serialize};

/// The MOQ/stock bounds of a variant, as seen at last resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockBounds {
    /// Minimum order quantity.
    pub moq: i64,
    /// Available stock.
    pub stock: i64,
}

impl StockBounds {
    pub fn new(moq: i64, stock: i64) -> Self {
        Self { moq, stock }
    }

    /// Clamp a requested quantity into `[moq, stock]`.
    ///
    /// The returned quantity is always `max(moq, min(stock, requested))`.
    /// When MOQ exceeds stock, MOQ wins. The adjustment reports what the
    /// unclamped request violated, for UI messaging only.
    pub fn clamp(&self, requested: i64) -> ClampedQuantity {
        let quantity = self.moq.max(self.stock.min(requested));

        let adjustment = if requested < self.moq {
            Some(QuantityAdjustment::RaisedToMinimum { minimum: self.moq })
        } else if requested > self.stock {
            Some(QuantityAdjustment::CappedToStock {
                available: self.stock,
            })
        } else {
            None
        };

        ClampedQuantity {
            quantity,
            adjustment,
        }
    }

    /// Seed quantity for a freshly added line (or after a variant switch).
    pub fn seed(&self) -> ClampedQuantity {
        self.clamp(self.moq)
    }
}

/// Why a requested quantity was adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuantityAdjustment {
    /// The request was below the minimum order quantity.
    RaisedToMinimum { minimum: i64 },
    /// The request exceeded available stock.
    CappedToStock { available: i64 },
}

/// A validated quantity, always in bounds, with an advisory adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedQuantity {
    /// The in-bounds quantity.
    pub quantity: i64,
    /// Set when the request was adjusted; None when it was already valid.
    pub adjustment: Option<QuantityAdjustment>,
}

impl ClampedQuantity {
    /// Check whether the original request was already in bounds.
    pub fn was_in_bounds(&self) -> bool {
        self.adjustment.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_in_bounds() {
        let bounds = StockBounds::new(5, 100);
        let clamped = bounds.clamp(20);
        assert_eq!(clamped.quantity, 20);
        assert!(clamped.was_in_bounds());
    }

    #[test]
    fn test_clamp_below_moq() {
        let bounds = StockBounds::new(5, 100);
        let clamped = bounds.clamp(2);
        assert_eq!(clamped.quantity, 5);
        assert_eq!(
            clamped.adjustment,
            Some(QuantityAdjustment::RaisedToMinimum { minimum: 5 })
        );
    }

    #[test]
    fn test_clamp_above_stock() {
        let bounds = StockBounds::new(5, 100);
        let clamped = bounds.clamp(150);
        assert_eq!(clamped.quantity, 100);
        assert_eq!(
            clamped.adjustment,
            Some(QuantityAdjustment::CappedToStock { available: 100 })
        );
    }

    #[test]
    fn test_clamp_always_in_range() {
        let bounds = StockBounds::new(10, 50);
        for requested in [-5, 0, 1, 10, 30, 50, 51, 1000] {
            let clamped = bounds.clamp(requested);
            assert!(clamped.quantity >= 10 && clamped.quantity <= 50);
        }
    }

    #[test]
    fn test_moq_wins_over_stock() {
        // MOQ above stock: the clamp still raises to MOQ.
        let bounds = StockBounds::new(20, 10);
        let clamped = bounds.clamp(5);
        assert_eq!(clamped.quantity, 20);
    }

    #[test]
    fn test_seed_quantity() {
        let bounds = StockBounds::new(12, 100);
        assert_eq!(bounds.seed().quantity, 12);
    }
}
