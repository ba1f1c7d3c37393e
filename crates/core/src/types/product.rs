//! Catalog product records.
//!
//! Products are sourced entirely from the static catalog document and are
//! never mutated by the client. Field names serialize in camelCase to match
//! the catalog JSON shape (`imageUrl`, `salesStatus`, ...).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A purchasable product from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in the store currency. Non-negative.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image reference (relative path or URL).
    pub image_url: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f64,
    /// Popularity score used for the popularity sort.
    pub popularity: i64,
    /// Category name (e.g., "Suitcases").
    pub category: String,
    /// Default color variant.
    pub color: String,
    /// Default size variant.
    pub size: String,
    /// Whether the product is currently on sale.
    pub sales_status: bool,
    /// Page-section tags this product appears in
    /// (e.g., "Selected Products", "You May Also Like").
    #[serde(default)]
    pub blocks: Vec<String>,
}

impl Product {
    /// Whether this product is tagged for the given page section.
    #[must_use]
    pub fn in_block(&self, block: &str) -> bool {
        self.blocks.iter().any(|b| b == block)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "case-01",
            "name": "Aluminum Carry-On",
            "price": 249.99,
            "imageUrl": "../assets/images/case-01.jpg",
            "rating": 4.5,
            "popularity": 87,
            "category": "Suitcases",
            "color": "Silver",
            "size": "S",
            "salesStatus": true,
            "blocks": ["Selected Products"]
        }"#
    }

    #[test]
    fn test_deserialize_camel_case() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(product.id.as_str(), "case-01");
        assert_eq!(product.price, Decimal::new(24999, 2));
        assert_eq!(product.image_url, "../assets/images/case-01.jpg");
        assert!(product.sales_status);
    }

    #[test]
    fn test_blocks_default_to_empty() {
        let json = r#"{
            "id": "case-02",
            "name": "Soft Duffel",
            "price": 80,
            "imageUrl": "x.jpg",
            "rating": 3.0,
            "popularity": 5,
            "category": "Bags",
            "color": "Black",
            "size": "M",
            "salesStatus": false
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.blocks.is_empty());
        assert!(!product.in_block("Selected Products"));
    }

    #[test]
    fn test_in_block() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        assert!(product.in_block("Selected Products"));
        assert!(!product.in_block("New Products Arrival"));
    }

    #[test]
    fn test_price_serializes_as_number() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("price").unwrap().is_number());
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("salesStatus").is_some());
    }
}
