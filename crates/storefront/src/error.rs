//! Unified error handling for the storefront.
//!
//! The error taxonomy mirrors how the storefront degrades: catalog fetch
//! failures and malformed carts are absorbed before they ever become an
//! `AppError` (logged, degraded to empty); what remains here are the
//! conditions a caller must actually handle - a missing product page,
//! a storage write failure, a rejected checkout, or invalid login input.
//! Nothing is fatal; the worst case is a degraded, emptied view.

use thiserror::Error;

use trailcase_core::ProductId;

use crate::cart::{CheckoutError, StorageError};
use crate::catalog::CatalogError;
use crate::login::LoginError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The catalog document could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The cart slot could not be written or removed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Checkout was rejected.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Login form input failed validation. Recoverable by resubmission.
    #[error("Login error: {0}")]
    Login(#[from] LoginError),

    /// No product with this identifier exists in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
