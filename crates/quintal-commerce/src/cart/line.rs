//! Cart line items.

use crate::catalog::{ResolvedPrice, StockBounds};
use crate::error::CartError;
use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Composite key identifying a line within a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineKey {
    pub product_id: ProductId,
    pub variant_id: VariantId,
}

impl LineKey {
    pub fn new(product_id: impl Into<ProductId>, variant_id: impl Into<VariantId>) -> Self {
        Self {
            product_id: product_id.into(),
            variant_id: variant_id.into(),
        }
    }
}

/// One product variant in the cart.
///
/// `unit_price` is always a value produced by tier resolution, never a
/// raw list price; the constructor takes the resolver's output to make
/// that hard to get wrong. `stock` and `moq` are the bounds snapshot at
/// last resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product ID.
    pub product_id: ProductId,
    /// Variant being purchased.
    pub variant_id: VariantId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Variant name (e.g., "500g Pouch").
    pub variant_name: Option<String>,
    /// Resolved unit price.
    pub unit_price: Money,
    /// Maximum retail price, for savings display.
    pub mrp: Money,
    /// Quantity, always within `[moq, stock]` as of last clamp.
    pub quantity: i64,
    /// Units per pack.
    pub pack_size: i64,
    /// Pack type (e.g., "pouch", "carton").
    pub pack_type: String,
    /// Stock snapshot at last resolution.
    pub stock: i64,
    /// Minimum order quantity.
    pub moq: i64,
    /// GST rate as a percentage.
    pub gst_percentage: f64,
}

impl CartLine {
    /// Create a new cart line.
    ///
    /// The requested quantity is clamped into the variant's bounds.
    /// Returns a validation error when `product_id`, `variant_id` or
    /// `name` is empty.
    pub fn new(
        product_id: ProductId,
        variant_id: VariantId,
        name: impl Into<String>,
        unit_price: ResolvedPrice,
        mrp: Money,
        quantity: i64,
        bounds: StockBounds,
        gst_percentage: f64,
    ) -> Result<Self, CartError> {
        let name = name.into();
        if product_id.is_empty() {
            return Err(CartError::Validation("missing product id".to_string()));
        }
        if variant_id.is_empty() {
            return Err(CartError::Validation("missing variant id".to_string()));
        }
        if name.is_empty() {
            return Err(CartError::Validation("missing product name".to_string()));
        }

        let clamped = bounds.clamp(quantity);
        Ok(Self {
            product_id,
            variant_id,
            name,
            variant_name: None,
            unit_price: unit_price.price,
            mrp,
            quantity: clamped.quantity,
            pack_size: 1,
            pack_type: "unit".to_string(),
            stock: bounds.stock,
            moq: bounds.moq,
            gst_percentage,
        })
    }

    /// Set the variant display name.
    pub fn with_variant_name(mut self, variant_name: impl Into<String>) -> Self {
        self.variant_name = Some(variant_name.into());
        self
    }

    /// Set the pack configuration.
    pub fn with_pack(mut self, pack_size: i64, pack_type: impl Into<String>) -> Self {
        self.pack_size = pack_size;
        self.pack_type = pack_type.into();
        self
    }

    /// The composite key of this line.
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id.clone(),
            variant_id: self.variant_id.clone(),
        }
    }

    /// The bounds snapshot carried by this line.
    pub fn bounds(&self) -> StockBounds {
        StockBounds::new(self.moq, self.stock)
    }

    /// Line total at the resolved unit price.
    pub fn line_total(&self) -> Result<Money, CartError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CartError::Overflow)
    }

    /// Line total at MRP.
    pub fn mrp_total(&self) -> Result<Money, CartError> {
        self.mrp
            .try_multiply(self.quantity)
            .ok_or(CartError::Overflow)
    }

    /// GST amount on this line.
    pub fn gst_amount(&self) -> Result<Money, CartError> {
        Ok(self.line_total()?.percentage(self.gst_percentage))
    }
}
