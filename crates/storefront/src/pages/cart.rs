//! Cart page view.
//!
//! Lines render from the live catalog (name, price, image), not from the
//! persisted snapshot - the snapshot exists so the storage format stays
//! stable, but display always reflects current catalog data. Lines whose
//! product no longer resolves are skipped in the item list yet left in
//! storage; they still count toward the badge.

use rust_decimal::Decimal;

use trailcase_core::{LineKey, PricingSummary};

use crate::cart::CartSlot;
use crate::pricing;
use crate::state::AppState;

use super::{CartBadgeView, format_price};

/// One rendered cart line.
#[derive(Debug, Clone)]
pub struct CartLineView {
    /// The line's dedup key, for quantity controls to address it.
    pub key: LineKey,
    /// Product name from the catalog.
    pub name: String,
    /// Formatted unit price.
    pub unit_price: String,
    /// Units in this line.
    pub quantity: u32,
    /// Formatted price x quantity.
    pub line_total: String,
    /// Image reference from the catalog.
    pub image_url: String,
}

/// The summary block next to the line list.
#[derive(Debug, Clone)]
pub struct SummaryView {
    /// Formatted subtotal.
    pub subtotal: String,
    /// Formatted discount, `None` when the row is hidden.
    pub discount: Option<String>,
    /// Formatted shipping fee.
    pub shipping: String,
    /// Formatted total.
    pub total: String,
}

impl From<PricingSummary> for SummaryView {
    fn from(summary: PricingSummary) -> Self {
        Self {
            subtotal: format_price(summary.subtotal),
            discount: summary
                .has_discount()
                .then(|| format!("-{}", format_price(summary.discount))),
            shipping: format_price(summary.shipping),
            total: format_price(summary.total),
        }
    }
}

/// Cart page display data.
#[derive(Debug, Clone)]
pub struct CartPageView {
    /// Rendered lines, unresolvable ones skipped.
    pub items: Vec<CartLineView>,
    /// Pricing summary block.
    pub summary: SummaryView,
    /// Cart badge.
    pub badge: CartBadgeView,
}

impl CartPageView {
    /// Whether to show the empty-cart message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Build the cart page from the session state.
#[must_use]
pub fn build<S: CartSlot>(state: &AppState<S>) -> CartPageView {
    let cart = state.cart().load();
    let catalog = state.catalog();

    let items = cart
        .lines()
        .iter()
        .filter_map(|line| {
            let product = catalog.get(&line.id)?;
            let line_total = product.price * Decimal::from(line.quantity);
            Some(CartLineView {
                key: line.key(),
                name: product.name.clone(),
                unit_price: format_price(product.price),
                quantity: line.quantity,
                line_total: format_price(line_total),
                image_url: product.image_url.clone(),
            })
        })
        .collect();

    CartPageView {
        items,
        summary: pricing::summarize(&cart, catalog).into(),
        badge: CartBadgeView {
            count: cart.total_item_count(),
        },
    }
}
