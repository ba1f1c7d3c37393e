//! Trailcase Storefront library.
//!
//! This crate provides the storefront behavior as a library: loading the
//! static product catalog, mutating and persisting the shopping cart,
//! computing pricing summaries, and running the catalog browse pipeline
//! (filter, search, sort, paginate). The `pages` module turns those pieces
//! into render-ready view models; the CLI crate does the actual printing.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod login;
pub mod pages;
pub mod pricing;
pub mod state;
