//! Integration tests for the cart life cycle.
//!
//! These tests run the cart through a file-backed slot in a temporary
//! directory, reopening the store between steps to prove persistence
//! works across sessions the way the browser cart survived page loads.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use trailcase_core::{LineKey, ProductId};
use trailcase_storefront::cart::{CartStore, CheckoutError, FileSlot};

use trailcase_integration_tests::sample_products;

fn open(dir: &tempfile::TempDir) -> CartStore<FileSlot> {
    CartStore::new(FileSlot::new(dir.path().join("cart.json")))
}

// =============================================================================
// Persistence Across Sessions
// =============================================================================

#[test]
fn test_cart_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let products = sample_products();

    {
        let mut store = open(&dir);
        store.add_item(&products[0], 2, None, None).unwrap();
        store.add_item(&products[3], 1, None, None).unwrap();
    }

    // A fresh store over the same file sees the same cart.
    let store = open(&dir);
    let cart = store.load();
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total_item_count(), 3);
}

#[test]
fn test_merge_applies_to_persisted_lines() {
    let dir = tempfile::tempdir().unwrap();
    let products = sample_products();

    open(&dir).add_item(&products[0], 1, None, None).unwrap();
    open(&dir).add_item(&products[0], 2, None, None).unwrap();

    let cart = open(&dir).load();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines()[0].quantity, 3);
}

#[test]
fn test_variant_lines_stay_distinct_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let products = sample_products();

    open(&dir)
        .add_item(&products[0], 1, Some("Red"), None)
        .unwrap();
    open(&dir)
        .add_item(&products[0], 1, Some("Blue"), None)
        .unwrap();

    assert_eq!(open(&dir).load().len(), 2);
}

#[test]
fn test_corrupt_slot_file_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "not json at all").unwrap();

    let store = open(&dir);
    assert!(store.load().is_empty());
    assert_eq!(store.total_item_count(), 0);
}

// =============================================================================
// Quantity Adjustments
// =============================================================================

#[test]
fn test_adjust_persists() {
    let dir = tempfile::tempdir().unwrap();
    let products = sample_products();
    open(&dir).add_item(&products[0], 2, None, None).unwrap();

    let key = LineKey::new(
        products[0].id.clone(),
        products[0].color.clone(),
        products[0].size.clone(),
    );
    open(&dir).adjust_quantity(&key, 3).unwrap();

    assert_eq!(open(&dir).load().lines()[0].quantity, 5);
}

#[test]
fn test_adjust_to_zero_removes_line_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let products = sample_products();
    open(&dir).add_item(&products[0], 1, None, None).unwrap();

    let key = LineKey::new(
        products[0].id.clone(),
        products[0].color.clone(),
        products[0].size.clone(),
    );
    open(&dir).adjust_quantity(&key, -1).unwrap();

    assert!(open(&dir).load().is_empty());
}

#[test]
fn test_remove_drops_every_variant() {
    let dir = tempfile::tempdir().unwrap();
    let products = sample_products();
    open(&dir)
        .add_item(&products[0], 1, Some("Red"), None)
        .unwrap();
    open(&dir)
        .add_item(&products[0], 1, Some("Blue"), None)
        .unwrap();
    open(&dir).add_item(&products[3], 1, None, None).unwrap();

    open(&dir).remove_item(&products[0].id).unwrap();

    let cart = open(&dir).load();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.lines()[0].id, products[3].id);
}

// =============================================================================
// Checkout
// =============================================================================

#[test]
fn test_checkout_empty_cart_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let result = open(&dir).checkout();
    assert!(matches!(result, Err(CheckoutError::EmptyCart)));
}

#[test]
fn test_checkout_clears_the_slot_file() {
    let dir = tempfile::tempdir().unwrap();
    let products = sample_products();
    open(&dir).add_item(&products[0], 1, None, None).unwrap();

    open(&dir).checkout().unwrap();

    assert!(!dir.path().join("cart.json").exists());
    assert!(open(&dir).load().is_empty());
}

// =============================================================================
// Persisted Format
// =============================================================================

#[test]
fn test_slot_file_is_a_bare_camel_case_array() {
    let dir = tempfile::tempdir().unwrap();
    let products = sample_products();
    open(&dir).add_item(&products[0], 2, None, None).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("cart.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let lines = value.as_array().expect("cart persists as a bare array");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["id"], "case-01");
    assert_eq!(lines[0]["quantity"], 2);
    assert!(lines[0]["imageUrl"].is_string());
    assert!(lines[0]["price"].is_number());
}

#[test]
fn test_legacy_slot_contents_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let legacy = r#"[
        {"id":"case-01","name":"Alpine Carry-On","price":1200,
         "imageUrl":"images/case-01.jpg","color":"Black","size":"M","quantity":2}
    ]"#;
    std::fs::write(dir.path().join("cart.json"), legacy).unwrap();

    let cart = open(&dir).load();
    assert_eq!(cart.total_item_count(), 2);

    let key = ProductId::new("case-01");
    assert_eq!(cart.lines()[0].id, key);
}
