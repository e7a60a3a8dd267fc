//! Wholesale commerce domain types and logic for Quintal.
//!
//! This crate provides the pure domain core of the storefront:
//!
//! - **Money**: minor-unit monetary values with checked arithmetic
//! - **Catalog**: product variants, hub stock records, MOQ/stock bounds,
//!   volume-discount tier resolution
//! - **Cart**: the snapshot reducer and the canonical order summary
//!
//! # Example
//!
//! ```rust,ignore
//! use quintal_commerce::prelude::*;
//!
//! let source = PriceSource::for_variant(&variant, hub_record.as_ref());
//! let clamped = source.bounds().clamp(requested_qty);
//! let resolved = source.resolve_price(clamped.quantity);
//!
//! let line = CartLine::new(
//!     variant.product_id.clone(),
//!     variant.id.clone(),
//!     product_name,
//!     resolved,
//!     source.mrp(),
//!     clamped.quantity,
//!     source.bounds(),
//!     variant.gst_percentage,
//! )?;
//!
//! let mut cart = CartSnapshot::new();
//! cart.add_line(line);
//! let summary = OrderSummary::compute(&cart, wallet_deduction)?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CartError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        resolve_unit_price, ClampedQuantity, HubStockRecord, PriceSource, PriceTier,
        ProductVariant, QuantityAdjustment, ResolvedPrice, StockBounds, TierRule,
    };

    // Cart
    pub use crate::cart::{CartLine, CartSnapshot, LineKey, OrderSummary};
}
