//! core::wishlist
//!
//! Pure wishlist state, unique by item id.
//!
//! # Duplicate policy
//!
//! Unlike the cart, `add_item` checks for an existing entry with the same
//! id and is a no-op on a duplicate. The first inserted payload is
//! retained; a later add with different fields is discarded. Mutators
//! report whether the collection changed so the persisted store can skip
//! the write on a no-op.

use serde::{Deserialize, Serialize};

use crate::core::catalog::Product;
use crate::core::types::{Price, ProductId, Rating};

/// A product reference saved for later, with the display snapshot the
/// card needs without re-fetching the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WishlistItem {
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

    /// Review score snapshot.
    pub rating: Rating,

    /// Review count snapshot.
    pub review_count: u32,
}

impl WishlistItem {
    /// Snapshot a catalog product into a wishlist item.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            original_price: product.original_price,
            image: product.image.clone(),
            rating: product.rating,
            review_count: product.review_count,
        }
    }
}

/// The wishlist's ordered collection, unique by id.
///
/// Insertion order is preserved and is the canonical display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishlistState {
    items: Vec<WishlistItem>,
}

impl WishlistState {
    /// Create a wishlist from items already known to have unique ids.
    pub fn from_items(items: Vec<WishlistItem>) -> Self {
        Self { items }
    }

    /// Insert an item unless an entry with the same id already exists.
    ///
    /// Returns `true` if the collection changed. On a duplicate id the
    /// call is a no-op and the first inserted payload is retained.
    pub fn add_item(&mut self, item: WishlistItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the entry with the given id.
    ///
    /// Returns `true` if an entry was removed; removing an absent id is a
    /// no-op, not an error.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    /// Pure membership check.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    /// Number of entries in the wishlist.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The items in insertion order.
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }
}
