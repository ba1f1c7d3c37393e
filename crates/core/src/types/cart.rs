//! The shopping cart and its line items.
//!
//! A cart is an ordered sequence of lines; insertion order is significant
//! for display. Two lines are the same entry iff their [`LineKey`] matches:
//! product id, color, and size all three. Every mutation here keeps the
//! invariant that line quantities are at least 1 - a decrement that reaches
//! zero removes the line entirely.
//!
//! The cart serializes as a bare JSON array of camelCase line objects. That
//! shape is the persisted storage format shared across releases, so it must
//! stay stable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::product::Product;

/// The triple identifying a unique cart line.
///
/// Repeated add-to-cart actions merge into one line exactly when all three
/// components match. Quantity adjustments address lines by this same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    /// Product identifier.
    pub id: ProductId,
    /// Chosen color variant.
    pub color: String,
    /// Chosen size variant.
    pub size: String,
}

impl LineKey {
    /// Create a key from its components.
    pub fn new(id: ProductId, color: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            id,
            color: color.into(),
            size: size.into(),
        }
    }
}

/// One distinct (product, color, size) entry in the cart.
///
/// Carries a denormalized snapshot of the product's display fields taken at
/// add time, so the cart page can render even if the catalog has since
/// changed. Pricing, however, always resolves against the live catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product identifier.
    pub id: ProductId,
    /// Product name at time of add.
    pub name: String,
    /// Unit price at time of add.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image reference at time of add.
    pub image_url: String,
    /// Chosen color variant.
    pub color: String,
    /// Chosen size variant.
    pub size: String,
    /// Number of units. Always >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot a product into a new line.
    ///
    /// `color` and `size` override the product defaults when the shopper
    /// picked a variant (the product page selects); `None` falls back to
    /// the catalog values.
    #[must_use]
    pub fn snapshot(
        product: &Product,
        quantity: u32,
        color: Option<&str>,
        size: Option<&str>,
    ) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            color: color.unwrap_or(&product.color).to_owned(),
            size: size.unwrap_or(&product.size).to_owned(),
            quantity,
        }
    }

    /// The dedup key for this line.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey {
            id: self.id.clone(),
            color: self.color.clone(),
            size: self.size.clone(),
        }
    }

    /// Price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// An ordered shopping cart.
///
/// Serde-transparent: persists as a plain array of lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines. Drives the cart badge.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Add `quantity` units of a product, merging into an existing line
    /// when the (id, color, size) key already exists.
    ///
    /// A zero quantity is a no-op. No upper bound is enforced on the merged
    /// quantity.
    pub fn add_product(
        &mut self,
        product: &Product,
        quantity: u32,
        color: Option<&str>,
        size: Option<&str>,
    ) {
        if quantity == 0 {
            return;
        }

        let key = LineKey::new(
            product.id.clone(),
            color.unwrap_or(&product.color),
            size.unwrap_or(&product.size),
        );

        if let Some(line) = self.lines.iter_mut().find(|line| line.key() == key) {
            line.quantity += quantity;
            return;
        }

        self.lines
            .push(CartLine::snapshot(product, quantity, color, size));
    }

    /// Adjust the quantity of the line matching `key` by `delta`.
    ///
    /// If the resulting quantity is zero or below, the line is removed.
    /// Returns `false` when no line matches.
    pub fn adjust_quantity(&mut self, key: &LineKey, delta: i64) -> bool {
        let Some(index) = self.lines.iter().position(|line| &line.key() == key) else {
            return false;
        };

        let Some(line) = self.lines.get_mut(index) else {
            return false;
        };
        let updated = i64::from(line.quantity) + delta;

        if updated <= 0 {
            self.lines.remove(index);
        } else {
            line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
        }

        true
    }

    /// Remove every line for the given product, regardless of variant.
    ///
    /// Returns the number of lines removed.
    pub fn remove_product(&mut self, id: &ProductId) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| &line.id != id);
        before - self.lines.len()
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = core::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
