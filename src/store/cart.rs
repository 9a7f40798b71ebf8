//! store::cart
//!
//! Persisted cart store.

use crate::core::cart::{CartItem, CartState};
use crate::store::records::{self, CartRecord, CART_KEY};
use crate::store::traits::StateStore;
use crate::store::StoreError;

/// The shopping-cart store.
///
/// Composes the pure [`CartState`] with a borrowed storage backend.
/// Rehydrated once at `open`; every mutation persists synchronously, so a
/// store opened afterward against the same backend observes the change.
///
/// # Duplicate policy
///
/// `add_item` appends unconditionally: entries with the same id
/// accumulate. See [`crate::core::cart`] for the rationale.
pub struct CartStore<'a> {
    backend: &'a dyn StateStore,
    state: CartState,
}

impl<'a> CartStore<'a> {
    /// Open the cart, rehydrating from the backend.
    ///
    /// An absent or malformed record yields an empty cart; only a backend
    /// read failure (I/O, not absence) is an error.
    pub fn open(backend: &'a dyn StateStore) -> Result<Self, StoreError> {
        let raw = backend.load(CART_KEY)?;
        let state = records::rehydrate_cart(raw.as_deref());
        Ok(Self { backend, state })
    }

    /// Append an item and persist the updated collection.
    pub fn add_item(&mut self, item: CartItem) -> Result<(), StoreError> {
        self.state.add_item(item);
        self.persist()
    }

    /// Number of entries (not quantity-weighted). Pure read.
    pub fn get_item_count(&self) -> usize {
        self.state.item_count()
    }

    /// The items in insertion order. Pure read.
    pub fn items(&self) -> &[CartItem] {
        self.state.items()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&CartRecord::from_state(&self.state))
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.backend.save(CART_KEY, &json)?;
        Ok(())
    }
}
