//! Catalog types: variants, hub stock records, quantity bounds, tier pricing.

mod stock;
mod tier;
mod variant;

pub use stock::{ClampedQuantity, QuantityAdjustment, StockBounds};
pub use tier::{resolve_unit_price, PriceTier, ResolvedPrice, TierRule};
pub use variant::{HubStockRecord, PriceSource, ProductVariant};
