//! Trailcase Core - Shared types library.
//!
//! This crate provides common types used across all Trailcase components:
//! - `storefront` - Catalog, cart, pricing, and browse logic
//! - `cli` - Command-line storefront pages
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no
//! storage access, no rendering. The cart mutation rules (merge-by-key,
//! remove-on-zero) live here because every consumer must agree on them;
//! persistence lives in the storefront crate.
//!
//! # Modules
//!
//! - [`types`] - Products, cart lines, pricing summaries, IDs, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
