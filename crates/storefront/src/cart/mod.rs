//! Cart persistence and mutation.
//!
//! [`CartStore`] wraps a [`CartSlot`] and applies the shared cart rules
//! from `trailcase-core`, persisting after every mutation. Each mutating
//! operation returns the new total item count so callers can refresh the
//! cart badge without a second load.
//!
//! The merge key for additions and for quantity adjustments is the full
//! (id, color, size) triple. The original site adjusted quantities by id
//! alone, which corrupted multi-variant carts; this store uses one
//! consistent key everywhere.

pub mod slot;

pub use slot::{CART_KEY, CartSlot, FileSlot, MemorySlot, StorageError};

use thiserror::Error;

use trailcase_core::{Cart, LineKey, Product, ProductId};

/// Errors from the checkout step.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nothing to check out.
    #[error("your cart is empty")]
    EmptyCart,
    /// The cart slot could not be cleared.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The persisted shopping cart.
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    slot: S,
}

impl<S: CartSlot> CartStore<S> {
    /// Wrap a storage slot.
    pub const fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Deserialize the persisted cart.
    ///
    /// An absent slot is an empty cart. A malformed value is treated as
    /// empty too - logged at warn, never surfaced to the shopper.
    #[must_use]
    pub fn load(&self) -> Cart {
        let Some(raw) = self.slot.read() else {
            return Cart::new();
        };

        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed persisted cart, treating as empty");
                Cart::new()
            }
        }
    }

    /// Serialize and persist the full cart, replacing prior content.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the slot rejects the write.
    pub fn save(&mut self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart)?;
        self.slot.write(&raw)
    }

    /// Add units of a product to the cart, merging by (id, color, size).
    ///
    /// Returns the new total item count.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the updated cart fails.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: u32,
        color: Option<&str>,
        size: Option<&str>,
    ) -> Result<u64, StorageError> {
        let mut cart = self.load();
        cart.add_product(product, quantity, color, size);
        self.save(&cart)?;

        tracing::debug!(
            product = %product.id,
            quantity,
            items = cart.total_item_count(),
            "Added to cart"
        );
        Ok(cart.total_item_count())
    }

    /// Adjust a line's quantity by `delta`; a result of zero or below
    /// removes the line. Returns the new total item count.
    ///
    /// Unknown keys are ignored (the cart page can only address lines it
    /// just rendered, but another tab may have removed one meanwhile).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the updated cart fails.
    pub fn adjust_quantity(&mut self, key: &LineKey, delta: i64) -> Result<u64, StorageError> {
        let mut cart = self.load();
        if cart.adjust_quantity(key, delta) {
            self.save(&cart)?;
        }
        Ok(cart.total_item_count())
    }

    /// Remove all lines for a product. Returns the new total item count.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the updated cart fails.
    pub fn remove_item(&mut self, id: &ProductId) -> Result<u64, StorageError> {
        let mut cart = self.load();
        if cart.remove_product(id) > 0 {
            self.save(&cart)?;
        }
        Ok(cart.total_item_count())
    }

    /// Remove the persisted cart entirely.
    ///
    /// Callers are expected to confirm with the shopper first; the store
    /// itself does not prompt.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the slot rejects the removal.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.slot.remove()
    }

    /// Complete a purchase: rejects an empty cart, otherwise wipes it.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when there is nothing to buy,
    /// or a storage error if the slot cannot be cleared.
    pub fn checkout(&mut self) -> Result<(), CheckoutError> {
        if self.load().is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.clear()?;
        Ok(())
    }

    /// Sum of quantities across all lines; drives the badge.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.load().total_item_count()
    }
}
