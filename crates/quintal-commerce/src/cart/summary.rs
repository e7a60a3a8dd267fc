//! Order summary derived from a cart snapshot.
//!
//! Downstream checkout and display code depend on these four fields
//! byte-for-byte; display variations must derive from them rather than
//! recompute. GST is additive: unit prices are GST-exclusive and the
//! total is `max(0, subtotal + totalGst - wallet)`.

use crate::cart::CartSnapshot;
use crate::error::CartError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Canonical order totals for a cart snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Sum of resolved unit price times quantity.
    pub subtotal: Money,
    /// Sum of per-line GST amounts.
    pub total_gst: Money,
    /// MRP total minus subtotal. Kept raw: goes negative when a hub
    /// price exceeds MRP.
    pub savings: Money,
    /// Payable total after GST and wallet deduction, floored at zero.
    pub total: Money,
    /// The wallet deduction this summary was computed with.
    pub wallet_deduction: Money,
}

impl OrderSummary {
    /// Compute the summary for a snapshot and wallet deduction.
    ///
    /// Overflow is the only intrinsic failure; a wallet deduction in a
    /// different currency than the cart is a currency mismatch. An empty
    /// snapshot yields all-zero totals in the wallet's currency.
    pub fn compute(snapshot: &CartSnapshot, wallet_deduction: Money) -> Result<Self, CartError> {
        let currency = snapshot
            .lines()
            .first()
            .map(|l| l.unit_price.currency)
            .unwrap_or(wallet_deduction.currency);

        if wallet_deduction.currency != currency {
            return Err(CartError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: wallet_deduction.currency.code().to_string(),
            });
        }

        let mut subtotal = Money::zero(currency);
        let mut total_gst = Money::zero(currency);
        let mut mrp_total = Money::zero(currency);

        for line in snapshot.lines() {
            subtotal = subtotal
                .try_add(&line.line_total()?)
                .ok_or(CartError::Overflow)?;
            total_gst = total_gst
                .try_add(&line.gst_amount()?)
                .ok_or(CartError::Overflow)?;
            mrp_total = mrp_total
                .try_add(&line.mrp_total()?)
                .ok_or(CartError::Overflow)?;
        }

        let savings = mrp_total
            .try_subtract(&subtotal)
            .ok_or(CartError::Overflow)?;

        let payable = subtotal.try_add(&total_gst).ok_or(CartError::Overflow)?;
        let total = payable
            .try_subtract(&wallet_deduction)
            .ok_or(CartError::Overflow)?
            .clamp_at_zero();

        Ok(Self {
            subtotal,
            total_gst,
            savings,
            total,
            wallet_deduction,
        })
    }

    /// The amount payable before the wallet deduction is applied.
    pub fn payable_before_wallet(&self) -> Money {
        // Proven not to overflow during compute.
        self.subtotal + self.total_gst
    }

    /// How much of the wallet deduction was actually consumed.
    ///
    /// Derived; never changes the canonical fields. When the wallet
    /// covers the full payable amount, only the covered part counts.
    pub fn wallet_applied(&self) -> Money {
        self.payable_before_wallet() - self.total
    }

    /// Check whether the wallet covered the whole order.
    pub fn is_free_of_charge(&self) -> bool {
        self.total.is_zero()
    }
}
