//! Integration tests for Trailcase.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p trailcase-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart persistence across sessions, checkout
//! - `browse_pipeline` - Filter, search, sort, paginate end to end
//! - `storefront_pages` - Page views over a real catalog file
//!
//! The tests exercise the storefront through the same entry points the CLI
//! uses: a catalog JSON file on disk and a file-backed cart slot, both in a
//! per-test temporary directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;

use trailcase_core::{Product, ProductId};

/// A small but varied catalog: three categories, a price spread, block tags,
/// and a couple of sale items.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    let mut products = Vec::new();

    let spec: &[(&str, &str, i64, f64, i64, &str, &str, &str, bool)] = &[
        ("case-01", "Alpine Carry-On", 1200, 4.5, 90, "Suitcases", "Black", "M", false),
        ("case-02", "Summit Spinner", 1800, 4.0, 70, "Suitcases", "Silver", "L", true),
        ("case-03", "Basecamp Trunk", 2400, 3.5, 40, "Suitcases", "Green", "XL", false),
        ("bag-01", "Ridge Duffel", 600, 4.8, 120, "Bags", "Black", "M", false),
        ("bag-02", "Creek Tote", 300, 3.0, 30, "Bags", "Tan", "S", true),
        ("pack-01", "Traverse Pack", 900, 4.2, 110, "Backpacks", "Blue", "M", false),
        ("pack-02", "Scramble Daypack", 450, 3.8, 60, "Backpacks", "Black", "S", false),
    ];

    for &(id, name, price, rating, popularity, category, color, size, on_sale) in spec {
        products.push(Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: Decimal::from(price),
            image_url: format!("images/{id}.jpg"),
            rating,
            popularity,
            category: category.to_owned(),
            color: color.to_owned(),
            size: size.to_owned(),
            sales_status: on_sale,
            blocks: Vec::new(),
        });
    }

    products
}

/// Write `products` to `dir/data.json` in the catalog document shape and
/// return the file path.
///
/// # Panics
///
/// Panics on I/O or serialization failure; test setup only.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn write_catalog(dir: &Path, products: &[Product]) -> PathBuf {
    let path = dir.join("data.json");
    let document = serde_json::json!({ "data": products });
    std::fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();
    path
}
