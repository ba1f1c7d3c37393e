//! Integration tests for the catalog browse pipeline over a catalog file.
//!
//! The catalog is written to disk and loaded through [`CatalogStore`], so
//! these tests also cover the JSON document shape end to end.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rust_decimal::Decimal;

use trailcase_storefront::browse::{BrowseQuery, PageLink, ProductFilter, SortKey};
use trailcase_storefront::catalog::CatalogStore;

use trailcase_integration_tests::{sample_products, write_catalog};

fn loaded_catalog() -> CatalogStore {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), &sample_products());
    CatalogStore::load(&path).unwrap()
}

// =============================================================================
// Filter + Search + Sort
// =============================================================================

#[test]
fn test_category_filter_then_price_sort() {
    let catalog = loaded_catalog();
    let query = BrowseQuery {
        filter: ProductFilter {
            category: Some("Suitcases".to_owned()),
            ..ProductFilter::default()
        },
        sort: SortKey::PriceLowToHigh,
        page: 1,
        ..BrowseQuery::default()
    };

    let page = query.apply(catalog.all());
    let prices: Vec<Decimal> = page.items.iter().map(|p| p.price).collect();
    let expected: Vec<Decimal> = [1200, 1800, 2400].into_iter().map(Decimal::from).collect();
    assert_eq!(prices, expected);
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = loaded_catalog();
    let query = BrowseQuery {
        search: Some("PACK".to_owned()),
        ..BrowseQuery::default()
    };

    let page = query.apply(catalog.all());
    assert_eq!(page.total_matches, 2);
    assert!(page.items.iter().all(|p| p.name.to_lowercase().contains("pack")));
}

#[test]
fn test_on_sale_filter() {
    let catalog = loaded_catalog();
    let query = BrowseQuery {
        filter: ProductFilter {
            on_sale_only: true,
            ..ProductFilter::default()
        },
        ..BrowseQuery::default()
    };

    let page = query.apply(catalog.all());
    assert_eq!(page.total_matches, 2);
    assert!(page.items.iter().all(|p| p.sales_status));
}

#[test]
fn test_rating_sort_descends() {
    let catalog = loaded_catalog();
    let query = BrowseQuery {
        sort: SortKey::Rating,
        ..BrowseQuery::default()
    };

    let page = query.apply(catalog.all());
    let ratings: Vec<f64> = page.items.iter().map(|p| p.rating).collect();
    let mut sorted = ratings.clone();
    sorted.sort_by(|a, b| b.total_cmp(a));
    assert_eq!(ratings, sorted);
}

// =============================================================================
// Pagination
// =============================================================================

#[test]
fn test_everything_fits_one_page() {
    let catalog = loaded_catalog();
    let page = BrowseQuery::default().apply(catalog.all());

    assert_eq!(page.total_pages, 1);
    assert_eq!(page.window_start, 1);
    assert_eq!(page.window_end, sample_products().len());
    assert!(page.links.is_empty());
}

#[test]
fn test_large_catalog_pages_and_links() {
    // 30 records spread over three pages of 12.
    let mut products = Vec::new();
    for i in 0..30 {
        let mut p = sample_products()[0].clone();
        p.id = trailcase_core::ProductId::new(format!("bulk-{i}"));
        products.push(p);
    }
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), &products);
    let catalog = CatalogStore::load(&path).unwrap();

    let query = BrowseQuery {
        page: 2,
        ..BrowseQuery::default()
    };
    let page = query.apply(catalog.all());

    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 12);
    assert_eq!(page.window_start, 13);
    assert_eq!(page.window_end, 24);
    assert_eq!(page.links.first(), Some(&PageLink::Prev));
    assert_eq!(page.links.last(), Some(&PageLink::Next));
}

#[test]
fn test_out_of_range_page_clamps_to_last() {
    let catalog = loaded_catalog();
    let query = BrowseQuery {
        page: 42,
        ..BrowseQuery::default()
    };

    let page = query.apply(catalog.all());
    assert_eq!(page.page, 1);
    assert!(!page.items.is_empty());
}
