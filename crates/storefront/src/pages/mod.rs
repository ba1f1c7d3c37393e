//! Page view models.
//!
//! Each submodule builds the render-ready data for one page of the site:
//! plain structs of formatted strings, no I/O and no rendering. The CLI
//! (or any other front end) decides how to draw them. This is the shared
//! replacement for the per-page card/counter code the original site
//! duplicated five times over.

pub mod cart;
pub mod catalog;
pub mod home;
pub mod product;

use rust_decimal::Decimal;

use trailcase_core::Product;

/// Cart badge data: a count that is hidden when zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartBadgeView {
    /// Total units across all cart lines.
    pub count: u64,
}

impl CartBadgeView {
    /// Whether the badge should be drawn at all.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.count > 0
    }
}

/// Product card data shared by the home, catalog, and product pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    /// Product identifier, for navigation to the detail page.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Formatted unit price.
    pub price: String,
    /// Star string, e.g. `★★★★☆`.
    pub stars: String,
    /// Whether to show the SALE badge.
    pub on_sale: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: format_price(product.price),
            stars: stars(product.rating),
            on_sale: product.sales_status,
        }
    }
}

/// Format an amount as a display price, e.g. `$249.99`.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// Render a 0-5 rating as filled and empty stars, whole stars only.
#[must_use]
pub fn stars(rating: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let full = (rating.clamp(0.0, 5.0).floor()) as usize;
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}
