//! Core types for Trailcase.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod email;
pub mod id;
pub mod pricing;
pub mod product;

pub use cart::{Cart, CartLine, LineKey};
pub use email::{Email, EmailError};
pub use id::ProductId;
pub use pricing::PricingSummary;
pub use product::Product;
