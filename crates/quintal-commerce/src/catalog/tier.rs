//! Volume-discount tier pricing.
//!
//! A variant (or a hub stock record) carries an unordered list of tier
//! rules. Resolution scans the rules in the order supplied and keeps the
//! first strictly price-improving eligible rule's award, letting later
//! rules improve further. The scan is order-sensitive for the awarded
//! tier when two eligible rules quote the same price; callers that need
//! a stable award must supply rules in a stable order.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A volume discount band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    /// Base tier, awarded when no rule applies.
    #[default]
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl PriceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Bronze => "bronze",
            PriceTier::Silver => "silver",
            PriceTier::Gold => "gold",
            PriceTier::Platinum => "platinum",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bronze" => Some(PriceTier::Bronze),
            "silver" => Some(PriceTier::Silver),
            "gold" => Some(PriceTier::Gold),
            "platinum" => Some(PriceTier::Platinum),
            _ => None,
        }
    }
}

/// A single volume-discount rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierRule {
    /// The band this rule awards.
    pub tier: PriceTier,
    /// Smallest quantity at which the rule applies.
    pub minimum_quantity: i64,
    /// Unit price quoted by the rule.
    pub price: Money,
}

impl TierRule {
    pub fn new(tier: PriceTier, minimum_quantity: i64, price: Money) -> Self {
        Self {
            tier,
            minimum_quantity,
            price,
        }
    }
}

/// The outcome of tier resolution: the effective unit price and its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPrice {
    /// Effective unit price.
    pub price: Money,
    /// Awarded tier.
    pub tier: PriceTier,
}

/// Resolve the effective unit price for a requested quantity.
///
/// Starts from `{base_price, Bronze}` and scans `rules` in the order
/// supplied: a rule replaces the running best iff the quantity meets its
/// threshold and its price is strictly lower than the current best.
/// Rules quoting a different currency than the base price are skipped.
pub fn resolve_unit_price(base_price: Money, rules: &[TierRule], quantity: i64) -> ResolvedPrice {
    let mut best = ResolvedPrice {
        price: base_price,
        tier: PriceTier::Bronze,
    };

    for rule in rules {
        if rule.price.currency != base_price.currency {
            continue;
        }
        if quantity >= rule.minimum_quantity && rule.price.amount_minor < best.price.amount_minor {
            best = ResolvedPrice {
                price: rule.price,
                tier: rule.tier,
            };
        }
    }

    best
}
