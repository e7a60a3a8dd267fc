//! The cart snapshot reducer.
//!
//! `CartSnapshot` holds the canonical list of lines for the current
//! session. Every operation is a synchronous, total function of the
//! current snapshot: quantities are clamped into bounds rather than
//! rejected, so none of the reducer operations can fail.

use crate::cart::{CartLine, LineKey};
use crate::catalog::ClampedQuantity;
use serde::{Deserialize, Serialize};

/// An ordered collection of cart lines, unique by `(productId, variantId)`.
///
/// Insertion order is preserved but carries no semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    items: Vec<CartLine>,
}

impl CartSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from lines, keeping the first line per key.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut snapshot = Self::new();
        for line in lines {
            if !snapshot.contains(&line.key()) {
                snapshot.items.push(line);
            }
        }
        snapshot
    }

    /// Add a line to the cart.
    ///
    /// If the key already exists, the existing line's quantity is set to
    /// the clamped sum of old and new quantities; the line's other fields
    /// are left untouched. Otherwise the line is inserted with its
    /// quantity clamped into its own bounds.
    pub fn add_line(&mut self, line: CartLine) -> ClampedQuantity {
        if let Some(existing) = self.items.iter_mut().find(|l| l.key() == line.key()) {
            let requested = existing.quantity.saturating_add(line.quantity);
            let clamped = existing.bounds().clamp(requested);
            existing.quantity = clamped.quantity;
            return clamped;
        }

        let clamped = line.bounds().clamp(line.quantity);
        let mut line = line;
        line.quantity = clamped.quantity;
        self.items.push(line);
        clamped
    }

    /// Remove a line. Returns false (not an error) when the key is absent.
    pub fn remove_line(&mut self, key: &LineKey) -> bool {
        let len_before = self.items.len();
        self.items.retain(|l| &l.key() != key);
        self.items.len() < len_before
    }

    /// Set a line's quantity.
    ///
    /// A non-positive quantity removes the line. Returns the clamp result
    /// when a line was updated, None when the line was removed or absent.
    pub fn set_quantity(&mut self, key: &LineKey, quantity: i64) -> Option<ClampedQuantity> {
        if quantity <= 0 {
            self.remove_line(key);
            return None;
        }

        let line = self.items.iter_mut().find(|l| &l.key() == key)?;
        let clamped = line.bounds().clamp(quantity);
        line.quantity = clamped.quantity;
        Some(clamped)
    }

    /// Empty the snapshot.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Wholesale substitution with a server-authoritative set of lines.
    ///
    /// Never merges field by field; the incoming lines are the new truth.
    pub fn replace(&mut self, lines: Vec<CartLine>) {
        *self = Self::from_lines(lines);
    }

    /// Look up a line by key.
    pub fn line(&self, key: &LineKey) -> Option<&CartLine> {
        self.items.iter().find(|l| &l.key() == key)
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.items
    }

    /// Check whether a key is present.
    pub fn contains(&self, key: &LineKey) -> bool {
        self.line(key).is_some()
    }

    /// Number of unique lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    pub fn total_units(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }
}
