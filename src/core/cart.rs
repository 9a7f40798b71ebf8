//! core::cart
//!
//! Pure cart state and the item snapshot it collects.
//!
//! # Design
//!
//! `CartState` is a pure state-transition core: it knows nothing about
//! persistence. The persisted store in [`crate::store::cart`] composes it
//! with a storage backend.
//!
//! # Duplicate policy
//!
//! `add_item` performs no existence check, so entries with the same id
//! accumulate. This is the observed behavior of the original cart and is
//! deliberately asymmetric with the wishlist, which rejects duplicates.
//! Callers needing idempotence must check before appending.

use serde::{Deserialize, Serialize};

use crate::core::catalog::Product;
use crate::core::types::{Price, ProductId};

/// A product reference captured at the moment it was added to the cart.
///
/// This is a snapshot, not a live join against the catalog: later catalog
/// changes do not affect items already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CartItem {
    /// Catalog-unique identifier.
    pub id: ProductId,

    /// Display name at the time of the add.
    pub name: String,

    /// Unit price at the time of the add.
    pub price: Price,

    /// Pre-discount price; present only when the item was discounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,

    /// Image URI.
    pub image: String,
}

impl CartItem {
    /// Snapshot a catalog product into a cart item.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            original_price: product.original_price,
            image: product.image.clone(),
        }
    }
}

/// The cart's ordered collection of item snapshots.
///
/// Insertion order is preserved and is the canonical display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    /// Create a cart from already-validated items, preserving their order.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Append an item to the cart.
    ///
    /// No existence check is performed: adding the same id twice leaves
    /// two entries in the collection.
    pub fn add_item(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Number of entries in the cart (not quantity-weighted).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }
}
