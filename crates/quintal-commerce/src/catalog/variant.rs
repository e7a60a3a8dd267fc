//! Product variants and hub stock records.
//!
//! A variant is a purchasable pack configuration of a product with its
//! own wholesale price, MOQ, stock and tier table. A customer bound to a
//! fulfillment hub prices against the hub's stock record instead, which
//! supersedes the variant's pricing as a unit.

use crate::catalog::{resolve_unit_price, ResolvedPrice, StockBounds, TierRule};
use crate::ids::{HubId, ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable pack configuration of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Parent product ID.
    pub product_id: ProductId,
    /// Variant name (e.g., "500g Pouch").
    pub name: String,
    /// Units per pack.
    pub pack_size: i64,
    /// Pack type (e.g., "pouch", "carton").
    pub pack_type: String,
    /// Wholesale unit price before tier discounts.
    pub wholesale_price: Money,
    /// Maximum retail price.
    pub mrp: Money,
    /// Minimum order quantity.
    pub moq: i64,
    /// Available stock.
    pub stock: i64,
    /// GST rate as a percentage (e.g., 18.0).
    pub gst_percentage: f64,
    /// Volume discount rules, in the order supplied by the catalog.
    #[serde(default)]
    pub tier_pricing: Vec<TierRule>,
}

impl ProductVariant {
    /// Check if this variant has any purchasable stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// MOQ/stock bounds for quantity clamping.
    pub fn bounds(&self) -> StockBounds {
        StockBounds::new(self.moq, self.stock)
    }
}

/// A hub's stock record for one variant.
///
/// When a customer is bound to a fulfillment hub, this record supersedes
/// the variant's own price, MRP, stock and tier table wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubStockRecord {
    /// The hub that owns this record.
    pub hub_id: HubId,
    /// Product this record prices.
    pub product_id: ProductId,
    /// Variant this record prices.
    pub variant_id: VariantId,
    /// Hub's cost price (back-office reporting, not customer-facing).
    pub cost_price: Money,
    /// Hub's selling price; replaces the variant's wholesale price.
    pub selling_price: Money,
    /// Hub's MRP.
    pub mrp: Money,
    /// Hub's available stock.
    pub stock: i64,
    /// Hub's tier rules, in the order supplied.
    #[serde(default)]
    pub tier_pricing: Vec<TierRule>,
}

/// The pricing source for a variant: either the variant itself or, for a
/// hub-bound customer, the hub's stock record.
///
/// Hub precedence is total. A present record replaces price, MRP, stock
/// and tier table as a unit, never field by field. MOQ stays with the
/// variant; hubs do not override it.
#[derive(Debug, Clone, Copy)]
pub struct PriceSource<'a> {
    variant: &'a ProductVariant,
    hub: Option<&'a HubStockRecord>,
}

impl<'a> PriceSource<'a> {
    /// Resolve the source for a variant, preferring the hub record when given.
    pub fn for_variant(variant: &'a ProductVariant, hub: Option<&'a HubStockRecord>) -> Self {
        Self { variant, hub }
    }

    pub fn base_price(&self) -> Money {
        match self.hub {
            Some(record) => record.selling_price,
            None => self.variant.wholesale_price,
        }
    }

    pub fn mrp(&self) -> Money {
        match self.hub {
            Some(record) => record.mrp,
            None => self.variant.mrp,
        }
    }

    pub fn stock(&self) -> i64 {
        match self.hub {
            Some(record) => record.stock,
            None => self.variant.stock,
        }
    }

    pub fn moq(&self) -> i64 {
        self.variant.moq
    }

    pub fn tier_rules(&self) -> &[TierRule] {
        match self.hub {
            Some(record) => &record.tier_pricing,
            None => &self.variant.tier_pricing,
        }
    }

    /// MOQ/stock bounds from this source.
    pub fn bounds(&self) -> StockBounds {
        StockBounds::new(self.moq(), self.stock())
    }

    /// Resolve the effective unit price for a quantity from this source.
    pub fn resolve_price(&self, quantity: i64) -> ResolvedPrice {
        resolve_unit_price(self.base_price(), self.tier_rules(), quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceTier;
    use crate::money::Currency;

    fn rupees(amount: i64) -> Money {
        Money::new(amount * 100, Currency::INR)
    }

    fn variant() -> ProductVariant {
        ProductVariant {
            id: VariantId::new("var-1"),
            product_id: ProductId::new("prod-1"),
            name: "500g Pouch".to_string(),
            pack_size: 500,
            pack_type: "pouch".to_string(),
            wholesale_price: rupees(100),
            mrp: rupees(140),
            moq: 5,
            stock: 200,
            gst_percentage: 18.0,
            tier_pricing: vec![TierRule::new(PriceTier::Silver, 10, rupees(90))],
        }
    }

    fn hub_record() -> HubStockRecord {
        HubStockRecord {
            hub_id: HubId::new("hub-1"),
            product_id: ProductId::new("prod-1"),
            variant_id: VariantId::new("var-1"),
            cost_price: rupees(70),
            selling_price: rupees(95),
            mrp: rupees(130),
            stock: 40,
            tier_pricing: vec![TierRule::new(PriceTier::Gold, 10, rupees(85))],
        }
    }

    #[test]
    fn test_variant_source() {
        let variant = variant();
        let source = PriceSource::for_variant(&variant, None);
        assert_eq!(source.base_price(), rupees(100));
        assert_eq!(source.mrp(), rupees(140));
        assert_eq!(source.stock(), 200);
        assert_eq!(source.moq(), 5);
    }

    #[test]
    fn test_hub_record_supersedes_as_a_unit() {
        let variant = variant();
        let record = hub_record();
        let source = PriceSource::for_variant(&variant, Some(&record));

        assert_eq!(source.base_price(), rupees(95));
        assert_eq!(source.mrp(), rupees(130));
        assert_eq!(source.stock(), 40);
        // Hub tier table replaces the variant's, not merged with it.
        let resolved = source.resolve_price(15);
        assert_eq!(resolved.price, rupees(85));
        assert_eq!(resolved.tier, PriceTier::Gold);
    }

    #[test]
    fn test_moq_stays_with_variant() {
        let variant = variant();
        let record = hub_record();
        let source = PriceSource::for_variant(&variant, Some(&record));
        assert_eq!(source.moq(), 5);
        assert_eq!(source.bounds(), StockBounds::new(5, 40));
    }

    #[test]
    fn test_resolve_price_from_variant_rules() {
        let variant = variant();
        let source = PriceSource::for_variant(&variant, None);
        let resolved = source.resolve_price(12);
        assert_eq!(resolved.price, rupees(90));
        assert_eq!(resolved.tier, PriceTier::Silver);
    }

    #[test]
    fn test_variant_camel_case_wire_shape() {
        let variant = variant();
        let json = serde_json::to_value(&variant).unwrap();
        assert!(json.get("wholesalePrice").is_some());
        assert!(json.get("packSize").is_some());
        assert!(json.get("gstPercentage").is_some());
        assert!(json.get("tierPricing").is_some());
        let rule = &json["tierPricing"][0];
        assert_eq!(rule["tier"], "silver");
        assert!(rule.get("minimumQuantity").is_some());
    }
}
