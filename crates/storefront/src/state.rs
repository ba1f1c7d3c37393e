//! Application state for one page load.
//!
//! The original pages each kept their own module-level globals (current
//! page, current product, a product cache hung off `window`). Here the
//! state is one explicit object: every page receives an [`AppState`],
//! built once at its defined initialization point, and nothing reaches
//! across modules for shared mutables.

use crate::cart::{CartSlot, CartStore, FileSlot};
use crate::catalog::CatalogStore;
use crate::config::StorefrontConfig;

/// Everything a page needs: the catalog for the session and the persisted
/// cart.
#[derive(Debug, Clone)]
pub struct AppState<S> {
    catalog: CatalogStore,
    cart: CartStore<S>,
}

impl AppState<FileSlot> {
    /// Initialize state for a page load: load the catalog (degrading to
    /// empty on failure) and attach the file-backed cart slot.
    #[must_use]
    pub fn init(config: &StorefrontConfig) -> Self {
        let catalog = CatalogStore::load_or_empty(&config.catalog_path);
        let cart = CartStore::new(FileSlot::new(&config.cart_path));
        Self { catalog, cart }
    }
}

impl<S: CartSlot> AppState<S> {
    /// Build state from parts (tests use a [`crate::cart::MemorySlot`]).
    pub const fn new(catalog: CatalogStore, cart: CartStore<S>) -> Self {
        Self { catalog, cart }
    }

    /// The session's catalog.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The persisted cart, read-only.
    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// The persisted cart, for mutation.
    pub const fn cart_mut(&mut self) -> &mut CartStore<S> {
        &mut self.cart
    }
}
