//! Derived pricing totals for a cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals derived from a cart against the current catalog.
///
/// Never persisted; recomputed on every render by the storefront's pricing
/// calculator. `total = subtotal - discount + shipping`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PricingSummary {
    /// Sum of unit price x quantity over resolvable lines.
    pub subtotal: Decimal,
    /// Volume discount. Zero unless the subtotal crosses the threshold.
    pub discount: Decimal,
    /// Flat shipping fee. Zero for an empty cart.
    pub shipping: Decimal,
    /// Amount due.
    pub total: Decimal,
}

impl PricingSummary {
    /// Whether a discount row should be shown at all.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        !self.discount.is_zero()
    }
}
