//! Pricing calculator.
//!
//! A pure function from cart contents and the current catalog to a
//! [`PricingSummary`]. Business rules:
//!
//! - subtotal: sum of live catalog price x quantity over resolvable lines
//! - discount: 10% of subtotal once the subtotal reaches 3000
//! - shipping: flat 30 whenever the cart holds at least one line
//! - total: subtotal - discount + shipping
//!
//! Lines whose product id no longer resolves against the catalog are
//! silently excluded from the subtotal; the product may have been removed
//! from the catalog after the line was added. That is a defined
//! degradation, not an error - the line stays in storage and still makes
//! the cart count as non-empty for shipping.

use rust_decimal::Decimal;

use trailcase_core::{Cart, PricingSummary};

use crate::catalog::CatalogStore;

/// Subtotal at or above which the volume discount applies.
const DISCOUNT_THRESHOLD: Decimal = Decimal::from_parts(3000, 0, 0, false, 0);

/// Discount rate: 10%.
const DISCOUNT_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Flat shipping fee for any non-empty cart.
const SHIPPING_FLAT: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Compute the pricing summary for a cart against the current catalog.
#[must_use]
pub fn summarize(cart: &Cart, catalog: &CatalogStore) -> PricingSummary {
    let subtotal: Decimal = cart
        .into_iter()
        .filter_map(|line| {
            catalog
                .get(&line.id)
                .map(|product| product.price * Decimal::from(line.quantity))
        })
        .sum();

    let discount = if subtotal >= DISCOUNT_THRESHOLD {
        subtotal * DISCOUNT_RATE
    } else {
        Decimal::ZERO
    };

    let shipping = if cart.is_empty() {
        Decimal::ZERO
    } else {
        SHIPPING_FLAT
    };

    PricingSummary {
        subtotal,
        discount,
        shipping,
        total: subtotal - discount + shipping,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use trailcase_core::{Product, ProductId};

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Decimal::from(price),
            image_url: String::new(),
            rating: 4.0,
            popularity: 10,
            category: "Suitcases".to_owned(),
            color: "Black".to_owned(),
            size: "M".to_owned(),
            sales_status: false,
            blocks: Vec::new(),
        }
    }

    fn catalog_and_cart(entries: &[(&str, i64, u32)]) -> (CatalogStore, Cart) {
        let products: Vec<Product> = entries.iter().map(|(id, p, _)| product(id, *p)).collect();
        let mut cart = Cart::new();
        for ((_, _, qty), p) in entries.iter().zip(&products) {
            cart.add_product(p, *qty, None, None);
        }
        (CatalogStore::from_products(products), cart)
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let summary = summarize(&Cart::new(), &CatalogStore::empty());
        assert_eq!(summary, PricingSummary::default());
        assert!(!summary.has_discount());
    }

    #[test]
    fn test_worked_example() {
        // 2 x 1000 + 2 x 500 = 3000 -> 10% discount, flat shipping.
        let (catalog, cart) = catalog_and_cart(&[("a", 1000, 2), ("b", 500, 2)]);
        let summary = summarize(&cart, &catalog);

        assert_eq!(summary.subtotal, Decimal::from(3000));
        assert_eq!(summary.discount, Decimal::from(300));
        assert_eq!(summary.shipping, Decimal::from(30));
        assert_eq!(summary.total, Decimal::from(2730));
    }

    #[test]
    fn test_below_threshold_no_discount() {
        let (catalog, cart) = catalog_and_cart(&[("a", 1000, 2), ("b", 499, 2)]);
        let summary = summarize(&cart, &catalog);

        assert_eq!(summary.subtotal, Decimal::from(2998));
        assert_eq!(summary.discount, Decimal::ZERO);
        assert_eq!(summary.total, Decimal::from(3028));
    }

    #[test]
    fn test_nonempty_cart_pays_flat_shipping() {
        let (catalog, cart) = catalog_and_cart(&[("a", 10, 1)]);
        assert_eq!(summarize(&cart, &catalog).shipping, Decimal::from(30));
    }

    #[test]
    fn test_unresolvable_line_excluded_from_subtotal() {
        let (_, cart) = catalog_and_cart(&[("a", 1000, 2)]);
        // Catalog no longer carries product "a".
        let catalog = CatalogStore::empty();
        let summary = summarize(&cart, &catalog);

        assert_eq!(summary.subtotal, Decimal::ZERO);
        assert_eq!(summary.discount, Decimal::ZERO);
        // The line still exists, so shipping still applies.
        assert_eq!(summary.shipping, Decimal::from(30));
        assert_eq!(summary.total, Decimal::from(30));
    }

    #[test]
    fn test_uses_live_catalog_price_not_snapshot() {
        let (_, cart) = catalog_and_cart(&[("a", 100, 1)]);
        // Price changed in the catalog since the line was added.
        let catalog = CatalogStore::from_products(vec![product("a", 150)]);
        assert_eq!(summarize(&cart, &catalog).subtotal, Decimal::from(150));
    }

    #[test]
    fn test_summarize_is_pure() {
        let (catalog, cart) = catalog_and_cart(&[("a", 1000, 2), ("b", 500, 2)]);
        assert_eq!(summarize(&cart, &catalog), summarize(&cart, &catalog));
    }
}
