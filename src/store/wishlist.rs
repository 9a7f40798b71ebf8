//! store::wishlist
//!
//! Persisted wishlist store.

use crate::core::types::ProductId;
use crate::core::wishlist::{WishlistItem, WishlistState};
use crate::store::records::{self, WishlistRecord, WISHLIST_KEY};
use crate::store::traits::StateStore;
use crate::store::StoreError;

/// The saved-for-later store.
///
/// Unlike the cart, inserts are guarded: an `add_item` with an id already
/// in the collection is a no-op that performs no persistence write and
/// keeps the first inserted payload.
pub struct WishlistStore<'a> {
    backend: &'a dyn StateStore,
    state: WishlistState,
}

impl<'a> WishlistStore<'a> {
    /// Open the wishlist, rehydrating from the backend.
    ///
    /// An absent or malformed record yields an empty wishlist; only a
    /// backend read failure (I/O, not absence) is an error.
    pub fn open(backend: &'a dyn StateStore) -> Result<Self, StoreError> {
        let raw = backend.load(WISHLIST_KEY)?;
        let state = records::rehydrate_wishlist(raw.as_deref());
        Ok(Self { backend, state })
    }

    /// Insert an item unless its id is already present.
    ///
    /// Persists only when the collection changed; the duplicate no-op
    /// does not touch storage.
    pub fn add_item(&mut self, item: WishlistItem) -> Result<(), StoreError> {
        if self.state.add_item(item) {
            self.persist()?;
        }
        Ok(())
    }

    /// Remove the entry with the given id, if present.
    ///
    /// Removing an absent id is a no-op, not an error, and performs no
    /// persistence write.
    pub fn remove_item(&mut self, id: &ProductId) -> Result<(), StoreError> {
        if self.state.remove_item(id) {
            self.persist()?;
        }
        Ok(())
    }

    /// Pure membership check.
    pub fn is_in_wishlist(&self, id: &ProductId) -> bool {
        self.state.contains(id)
    }

    /// Collection size. Pure read.
    pub fn get_item_count(&self) -> usize {
        self.state.item_count()
    }

    /// The items in insertion order. Pure read.
    pub fn items(&self) -> &[WishlistItem] {
        self.state.items()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&WishlistRecord::from_state(&self.state))
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.backend.save(WISHLIST_KEY, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Price, Rating};
    use crate::store::memory::MemoryStateStore;
    use rust_decimal_macros::dec;

    fn item(id: &str, name: &str) -> WishlistItem {
        WishlistItem {
            id: ProductId::new(id).unwrap(),
            name: name.to_string(),
            price: Price::new(dec!(19.99)).unwrap(),
            original_price: None,
            image: format!("https://img.example/{id}.jpg"),
            rating: Rating::new(dec!(4.5)).unwrap(),
            review_count: 12,
        }
    }

    fn id(raw: &str) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    #[test]
    fn add_then_membership() {
        let backend = MemoryStateStore::new();
        let mut wishlist = WishlistStore::open(&backend).expect("open");

        wishlist.add_item(item("1", "First")).expect("add");

        assert!(wishlist.is_in_wishlist(&id("1")));
        assert_eq!(wishlist.get_item_count(), 1);
    }

    #[test]
    fn duplicate_add_keeps_first_payload_and_skips_write() {
        let backend = MemoryStateStore::new();
        let mut wishlist = WishlistStore::open(&backend).expect("open");

        wishlist.add_item(item("1", "First")).expect("add");

        // Writes disabled: the duplicate no-op must not attempt one.
        backend.set_fail_writes(true);
        wishlist
            .add_item(item("1", "Second"))
            .expect("duplicate add is a no-op");

        assert_eq!(wishlist.get_item_count(), 1);
        assert_eq!(wishlist.items()[0].name, "First");
    }

    #[test]
    fn remove_absent_skips_write() {
        let backend = MemoryStateStore::new();
        let mut wishlist = WishlistStore::open(&backend).expect("open");
        wishlist.add_item(item("1", "First")).expect("add");

        backend.set_fail_writes(true);
        wishlist
            .remove_item(&id("9"))
            .expect("absent remove is a no-op");

        assert_eq!(wishlist.get_item_count(), 1);
    }

    #[test]
    fn remove_then_membership_false() {
        let backend = MemoryStateStore::new();
        let mut wishlist = WishlistStore::open(&backend).expect("open");

        wishlist.add_item(item("1", "First")).expect("add");
        wishlist.remove_item(&id("1")).expect("remove");

        assert!(!wishlist.is_in_wishlist(&id("1")));

        let reopened = WishlistStore::open(&backend).expect("reopen");
        assert!(!reopened.is_in_wishlist(&id("1")));
    }

    #[test]
    fn persists_across_instances() {
        let backend = MemoryStateStore::new();

        {
            let mut wishlist = WishlistStore::open(&backend).expect("open");
            wishlist.add_item(item("1", "First")).expect("add");
            wishlist.add_item(item("2", "Second")).expect("add");
        }

        let reopened = WishlistStore::open(&backend).expect("reopen");
        assert_eq!(reopened.get_item_count(), 2);
        let order: Vec<&str> = reopened.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, ["1", "2"]);
    }

    #[test]
    fn malformed_record_falls_back_to_empty() {
        let backend = MemoryStateStore::with_entries([(
            WISHLIST_KEY.to_string(),
            r#"{"items": "oops"}"#.to_string(),
        )]);

        let wishlist = WishlistStore::open(&backend).expect("open");
        assert_eq!(wishlist.get_item_count(), 0);
    }
}
