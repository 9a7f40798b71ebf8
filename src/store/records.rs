//! store::records
//!
//! Persisted record schemas and rehydration.
//!
//! # Record layout
//!
//! Each store persists one versionless JSON record under its own key,
//! matching the original storefront's storage format:
//!
//! | key | shape |
//! |---|---|
//! | `ve-shop-cart` | `{ "items": [CartItem, ...] }` |
//! | `ve-shop-wishlist` | `{ "items": [WishlistItem, ...] }` |
//! | `ve-shop-language` | `{ "language": "en"\|"ar", "direction": "ltr"\|"rtl" }` |
//!
//! # Parsing
//!
//! Records are parsed strictly (unknown fields rejected, invariants
//! checked), but rehydration never fails: an absent or malformed record
//! yields the documented default state. Persisted state can be corrupted
//! by anything that writes to the state directory; silently resetting is
//! the contract, crashing is not.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::cart::{CartItem, CartState};
use crate::core::language::LanguageState;
use crate::core::types::{Direction, Locale, Price};
use crate::core::wishlist::{WishlistItem, WishlistState};

/// Record key for the cart store.
pub const CART_KEY: &str = "ve-shop-cart";

/// Record key for the wishlist store.
pub const WISHLIST_KEY: &str = "ve-shop-wishlist";

/// Record key for the language store.
pub const LANGUAGE_KEY: &str = "ve-shop-language";

/// Errors from record parsing.
///
/// These never escape the store layer: rehydration maps them to the
/// default state. They exist so tests can pin down *why* a record was
/// rejected.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to parse record: {0}")]
    ParseError(String),

    #[error("invalid record: {0}")]
    InvalidValue(String),
}

/// Persisted cart record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartRecord {
    pub items: Vec<CartItem>,
}

impl CartRecord {
    /// Snapshot the in-memory state for persistence.
    pub fn from_state(state: &CartState) -> Self {
        Self {
            items: state.items().to_vec(),
        }
    }
}

/// Persisted wishlist record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WishlistRecord {
    pub items: Vec<WishlistItem>,
}

impl WishlistRecord {
    /// Snapshot the in-memory state for persistence.
    pub fn from_state(state: &WishlistState) -> Self {
        Self {
            items: state.items().to_vec(),
        }
    }
}

/// Persisted language record.
///
/// The direction field is written for compatibility with the original
/// record shape, but on load it is recomputed from the locale so the two
/// can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageRecord {
    pub language: Locale,
    pub direction: Direction,
}

impl LanguageRecord {
    /// Snapshot the in-memory state for persistence.
    pub fn from_state(state: &LanguageState) -> Self {
        Self {
            language: state.language(),
            direction: state.direction(),
        }
    }
}

/// Parse a cart record strictly.
pub fn parse_cart(json: &str) -> Result<CartRecord, RecordError> {
    let record: CartRecord =
        serde_json::from_str(json).map_err(|e| RecordError::ParseError(e.to_string()))?;

    for item in &record.items {
        validate_price_pair(item.price, item.original_price)?;
    }
    Ok(record)
}

/// Parse a wishlist record strictly.
///
/// Uniqueness by id is a schema invariant: a record containing two
/// entries with the same id is rejected as malformed rather than
/// second-guessed.
pub fn parse_wishlist(json: &str) -> Result<WishlistRecord, RecordError> {
    let record: WishlistRecord =
        serde_json::from_str(json).map_err(|e| RecordError::ParseError(e.to_string()))?;

    let mut seen = std::collections::HashSet::new();
    for item in &record.items {
        validate_price_pair(item.price, item.original_price)?;
        if !seen.insert(item.id.clone()) {
            return Err(RecordError::InvalidValue(format!(
                "duplicate wishlist id '{}'",
                item.id
            )));
        }
    }
    Ok(record)
}

/// Parse a language record strictly.
pub fn parse_language(json: &str) -> Result<LanguageRecord, RecordError> {
    serde_json::from_str(json).map_err(|e| RecordError::ParseError(e.to_string()))
}

fn validate_price_pair(price: Price, original: Option<Price>) -> Result<(), RecordError> {
    if let Some(original) = original {
        if original < price {
            return Err(RecordError::InvalidValue(format!(
                "original price {original} is below current price {price}"
            )));
        }
    }
    Ok(())
}

/// Rehydrate cart state from a raw record.
///
/// Absent (`None`) and malformed records both yield the empty default.
pub fn rehydrate_cart(raw: Option<&str>) -> CartState {
    match raw {
        Some(json) => parse_cart(json)
            .map(|record| CartState::from_items(record.items))
            .unwrap_or_default(),
        None => CartState::default(),
    }
}

/// Rehydrate wishlist state from a raw record.
pub fn rehydrate_wishlist(raw: Option<&str>) -> WishlistState {
    match raw {
        Some(json) => parse_wishlist(json)
            .map(|record| WishlistState::from_items(record.items))
            .unwrap_or_default(),
        None => WishlistState::default(),
    }
}

/// Rehydrate language state from a raw record.
///
/// The direction is recomputed from the stored locale, so a hand-edited
/// record whose fields disagree loads with the derived direction.
pub fn rehydrate_language(raw: Option<&str>) -> LanguageState {
    match raw {
        Some(json) => parse_language(json)
            .map(|record| LanguageState::for_locale(record.language))
            .unwrap_or_default(),
        None => LanguageState::default(),
    }
}
