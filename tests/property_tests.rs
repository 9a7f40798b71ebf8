//! Property-based tests for the store layer.
//!
//! These tests use proptest to verify the store invariants hold across
//! randomly generated inputs: wishlist uniqueness and idempotence, cart
//! accumulation, direction determinism, and record round-trips.

use std::collections::HashSet;

use proptest::prelude::*;
use rust_decimal::Decimal;

use veshop::core::cart::{CartItem, CartState};
use veshop::core::language::LanguageState;
use veshop::core::types::{Direction, Locale, Price, ProductId, Rating};
use veshop::core::wishlist::{WishlistItem, WishlistState};
use veshop::store::records::{
    parse_wishlist, rehydrate_cart, rehydrate_language, rehydrate_wishlist, CartRecord,
    LanguageRecord, WishlistRecord,
};

/// Strategy for generating valid product id strings.
fn valid_id() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9._-]{0,15}"
}

/// Strategy for generating prices with two decimal places.
fn valid_price() -> impl Strategy<Value = Price> {
    (0u32..1_000_000).prop_map(|cents| Price::new(Decimal::new(i64::from(cents), 2)).unwrap())
}

/// Strategy for generating ratings with one decimal place in [0, 5].
fn valid_rating() -> impl Strategy<Value = Rating> {
    (0u32..=50).prop_map(|tenths| Rating::new(Decimal::new(i64::from(tenths), 1)).unwrap())
}

fn cart_item() -> impl Strategy<Value = CartItem> {
    (valid_id(), valid_price(), proptest::option::of(0u32..100_000)).prop_map(
        |(id, price, markup_cents)| {
            let original_price = markup_cents
                .map(|cents| Price::new(price.amount() + Decimal::new(i64::from(cents), 2)).unwrap());
            CartItem {
                id: ProductId::new(&id).unwrap(),
                name: format!("Product {id}"),
                price,
                original_price,
                image: format!("https://img.example/{id}.jpg"),
            }
        },
    )
}

fn wishlist_item() -> impl Strategy<Value = WishlistItem> {
    (valid_id(), valid_price(), valid_rating(), 0u32..10_000).prop_map(
        |(id, price, rating, review_count)| WishlistItem {
            id: ProductId::new(&id).unwrap(),
            name: format!("Product {id}"),
            price,
            original_price: None,
            image: format!("https://img.example/{id}.jpg"),
            rating,
            review_count,
        },
    )
}

proptest! {
    /// Cart adds always accumulate: count equals the number of adds,
    /// regardless of duplicate ids.
    #[test]
    fn cart_count_equals_number_of_adds(items in prop::collection::vec(cart_item(), 0..20)) {
        let mut cart = CartState::default();
        for item in &items {
            cart.add_item(item.clone());
        }
        prop_assert_eq!(cart.item_count(), items.len());
    }

    /// Adding the same wishlist item twice changes the count by exactly
    /// one, and membership holds after either call.
    #[test]
    fn wishlist_add_is_idempotent(item in wishlist_item(), others in prop::collection::vec(wishlist_item(), 0..10)) {
        let mut wishlist = WishlistState::default();
        for other in others {
            wishlist.add_item(other);
        }

        let before = wishlist.item_count();
        let already_present = wishlist.contains(&item.id);

        wishlist.add_item(item.clone());
        prop_assert!(wishlist.contains(&item.id));
        let after_first = wishlist.item_count();
        prop_assert_eq!(after_first, if already_present { before } else { before + 1 });

        wishlist.add_item(item.clone());
        prop_assert!(wishlist.contains(&item.id));
        prop_assert_eq!(wishlist.item_count(), after_first);
    }

    /// The wishlist never holds two entries with the same id, whatever
    /// sequence of adds and removes produced it.
    #[test]
    fn wishlist_ids_stay_unique(ops in prop::collection::vec((wishlist_item(), prop::bool::ANY), 0..40)) {
        let mut wishlist = WishlistState::default();
        for (item, remove) in ops {
            if remove {
                wishlist.remove_item(&item.id);
            } else {
                wishlist.add_item(item);
            }

            let mut seen = HashSet::new();
            for entry in wishlist.items() {
                prop_assert!(seen.insert(entry.id.clone()), "duplicate id {}", entry.id);
            }
        }
    }

    /// After a remove, membership is false - whether or not the id was
    /// present beforehand.
    #[test]
    fn wishlist_remove_clears_membership(item in wishlist_item(), pre_add in prop::bool::ANY) {
        let mut wishlist = WishlistState::default();
        if pre_add {
            wishlist.add_item(item.clone());
        }

        wishlist.remove_item(&item.id);
        prop_assert!(!wishlist.contains(&item.id));
    }

    /// Direction equals rtl exactly when the locale is Arabic.
    #[test]
    fn direction_determinism(first in prop::sample::select(&Locale::ALL[..]), second in prop::sample::select(&Locale::ALL[..])) {
        let mut state = LanguageState::default();
        state.set_language(first);
        state.set_language(second);

        prop_assert_eq!(state.direction() == Direction::Rtl, second == Locale::Ar);
        prop_assert_eq!(state.direction(), state.language().direction());
    }

    /// Cart records round-trip through JSON bit-for-bit, order preserved.
    #[test]
    fn cart_record_roundtrip(items in prop::collection::vec(cart_item(), 0..10)) {
        let mut cart = CartState::default();
        for item in items {
            cart.add_item(item);
        }

        let json = serde_json::to_string(&CartRecord::from_state(&cart)).unwrap();
        let reloaded = rehydrate_cart(Some(&json));
        prop_assert_eq!(reloaded, cart);
    }

    /// Wishlist records round-trip; generated ids are deduplicated first
    /// so the record satisfies the uniqueness invariant.
    #[test]
    fn wishlist_record_roundtrip(items in prop::collection::vec(wishlist_item(), 0..10)) {
        let mut wishlist = WishlistState::default();
        for item in items {
            wishlist.add_item(item);
        }

        let json = serde_json::to_string(&WishlistRecord::from_state(&wishlist)).unwrap();
        prop_assert!(parse_wishlist(&json).is_ok());
        let reloaded = rehydrate_wishlist(Some(&json));
        prop_assert_eq!(reloaded, wishlist);
    }

    /// Language records round-trip for every locale.
    #[test]
    fn language_record_roundtrip(locale in prop::sample::select(&Locale::ALL[..])) {
        let state = LanguageState::for_locale(locale);
        let json = serde_json::to_string(&LanguageRecord::from_state(&state)).unwrap();
        let reloaded = rehydrate_language(Some(&json));
        prop_assert_eq!(reloaded, state);
    }

    /// Arbitrary junk never makes rehydration panic; it yields defaults
    /// or a successfully parsed state.
    #[test]
    fn rehydration_never_panics(junk in ".{0,200}") {
        let _ = rehydrate_cart(Some(&junk));
        let _ = rehydrate_wishlist(Some(&junk));
        let _ = rehydrate_language(Some(&junk));
    }

    /// Valid ids round-trip through serde; junk with whitespace is
    /// rejected at deserialization.
    #[test]
    fn product_id_serde_roundtrip(id in valid_id()) {
        let id = ProductId::new(&id).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(id, parsed);
    }
}
