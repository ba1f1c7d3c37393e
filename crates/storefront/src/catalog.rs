//! The read-only product catalog.
//!
//! The catalog is a static JSON document with a top-level `data` field
//! holding an array of product records. It is loaded once per page load,
//! held in memory, and never mutated. A failed load degrades to an empty
//! catalog with a logged error; dependent views then render empty rather
//! than failing.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use trailcase_core::{Product, ProductId};

/// Errors that can occur while loading the catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The catalog file is not valid JSON of the expected shape.
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        /// Path that was attempted.
        path: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Wire shape of the catalog resource: `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    data: Vec<Product>,
}

/// In-memory catalog store with read-only access by identifier.
///
/// Cheaply cloneable via `Arc`; clones share the same product list.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    inner: Arc<CatalogInner>,
}

#[derive(Debug)]
struct CatalogInner {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl CatalogStore {
    /// Load the catalog from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let document: CatalogDocument =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        let store = Self::from_products(document.data);
        tracing::info!(products = store.len(), path = %path.display(), "Loaded catalog");
        Ok(store)
    }

    /// Load the catalog, degrading to an empty store on failure.
    ///
    /// The error is logged; nothing is surfaced to the shopper. This is the
    /// storefront's defined behavior for a missing or corrupt catalog
    /// resource.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(error = %e, "Catalog load failed, serving empty catalog");
                Self::empty()
            }
        }
    }

    /// An empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_products(Vec::new())
    }

    /// Build a store from an already-parsed product list.
    ///
    /// When two records share an id, the first one wins for lookups.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            by_id.entry(product.id.clone()).or_insert(index);
        }

        Self {
            inner: Arc::new(CatalogInner { products, by_id }),
        }
    }

    /// Look up a product by identifier.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.inner
            .by_id
            .get(id)
            .and_then(|&index| self.inner.products.get(index))
    }

    /// All products in document order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.inner.products
    }

    /// Products tagged for a given page section, in document order.
    #[must_use]
    pub fn in_block(&self, block: &str) -> Vec<&Product> {
        self.inner
            .products
            .iter()
            .filter(|product| product.in_block(block))
            .collect()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "data": [
            {
                "id": "case-01", "name": "Aluminum Carry-On", "price": 250,
                "imageUrl": "images/case-01.jpg", "rating": 4.5, "popularity": 87,
                "category": "Suitcases", "color": "Silver", "size": "S",
                "salesStatus": true, "blocks": ["Selected Products"]
            },
            {
                "id": "bag-02", "name": "Weekender Duffel", "price": 95,
                "imageUrl": "images/bag-02.jpg", "rating": 4.0, "popularity": 40,
                "category": "Bags", "color": "Olive", "size": "M",
                "salesStatus": false, "blocks": []
            }
        ]
    }"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_lookup() {
        let file = write_temp(SAMPLE);
        let catalog = CatalogStore::load(file.path()).unwrap();

        assert_eq!(catalog.len(), 2);
        let product = catalog.get(&ProductId::new("case-01")).unwrap();
        assert_eq!(product.name, "Aluminum Carry-On");
        assert!(catalog.get(&ProductId::new("nope")).is_none());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = CatalogStore::load(Path::new("/nonexistent/data.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_is_parse_error() {
        let file = write_temp("{ not json");
        let err = CatalogStore::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_load_or_empty_degrades() {
        let catalog = CatalogStore::load_or_empty(Path::new("/nonexistent/data.json"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_missing_data_field_means_empty() {
        let file = write_temp("{}");
        let catalog = CatalogStore::load(file.path()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_in_block() {
        let file = write_temp(SAMPLE);
        let catalog = CatalogStore::load(file.path()).unwrap();

        let selected = catalog.in_block("Selected Products");
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id.as_str(), "case-01");
    }

    #[test]
    fn test_duplicate_id_first_record_wins() {
        let mut first = serde_json::from_str::<serde_json::Value>(SAMPLE).unwrap();
        let dup = first["data"][0].clone();
        let mut dup = dup;
        dup["name"] = serde_json::Value::String("Impostor".to_owned());
        first["data"].as_array_mut().unwrap().push(dup);

        let file = write_temp(&first.to_string());
        let catalog = CatalogStore::load(file.path()).unwrap();

        let product = catalog.get(&ProductId::new("case-01")).unwrap();
        assert_eq!(product.name, "Aluminum Carry-On");
    }
}
