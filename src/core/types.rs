//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`ProductId`] - Validated catalog identifier
//! - [`Price`] - Non-negative decimal amount, currency-agnostic
//! - [`Rating`] - Review score in [0, 5]
//! - [`Locale`] - Supported display language
//! - [`Direction`] - Text layout flow, derived from the locale
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs: a negative
//! price or an unsupported locale never makes it past the boundary.
//!
//! # Examples
//!
//! ```
//! use veshop::core::types::{Direction, Locale, Price, ProductId};
//! use rust_decimal_macros::dec;
//!
//! // Valid constructions
//! let id = ProductId::new("42").unwrap();
//! let price = Price::new(dec!(89.99)).unwrap();
//! assert_eq!(Locale::Ar.direction(), Direction::Rtl);
//!
//! // Invalid constructions fail at creation time
//! assert!(ProductId::new("").is_err());
//! assert!(Price::new(dec!(-1)).is_err());
//! assert!("fr".parse::<Locale>().is_err());
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid product id: {0}")]
    InvalidProductId(String),

    #[error("invalid price: {0}")]
    InvalidPrice(String),

    #[error("invalid rating: {0}")]
    InvalidRating(String),

    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
}

/// A validated catalog identifier.
///
/// Product ids are opaque strings assigned by the catalog. They must:
/// - Not be empty
/// - Not contain whitespace or ASCII control characters
///
/// # Example
///
/// ```
/// use veshop::core::types::ProductId;
///
/// let id = ProductId::new("sku-1042").unwrap();
/// assert_eq!(id.as_str(), "sku-1042");
///
/// assert!(ProductId::new("").is_err());
/// assert!(ProductId::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Create a new validated product id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidProductId` if the id is empty or
    /// contains whitespace or control characters.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        if id.is_empty() {
            return Err(TypeError::InvalidProductId(
                "product id cannot be empty".into(),
            ));
        }
        if id.chars().any(|c| c.is_whitespace() || c.is_ascii_control()) {
            return Err(TypeError::InvalidProductId(
                "product id cannot contain whitespace or control characters".into(),
            ));
        }
        Ok(Self(id))
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative decimal amount.
///
/// Prices are currency-agnostic units captured from the catalog. The
/// persisted form is a JSON number, matching the original records.
///
/// # Example
///
/// ```
/// use veshop::core::types::Price;
/// use rust_decimal_macros::dec;
///
/// let price = Price::new(dec!(129.99)).unwrap();
/// assert_eq!(price.to_string(), "129.99");
///
/// assert!(Price::new(dec!(-0.01)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Create a new validated price.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidPrice` if the amount is negative.
    pub fn new(amount: Decimal) -> Result<Self, TypeError> {
        if amount.is_sign_negative() {
            return Err(TypeError::InvalidPrice(format!(
                "price cannot be negative, got {amount}"
            )));
        }
        Ok(Self(amount))
    }

    /// Get the underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = TypeError;

    fn try_from(d: Decimal) -> Result<Self, Self::Error> {
        Self::new(d)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A review score in [0, 5].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rating(Decimal);

impl Rating {
    /// Create a new validated rating.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRating` if the score is outside [0, 5].
    pub fn new(score: Decimal) -> Result<Self, TypeError> {
        if score.is_sign_negative() || score > Decimal::from(5) {
            return Err(TypeError::InvalidRating(format!(
                "rating must be within [0, 5], got {score}"
            )));
        }
        Ok(Self(score))
    }

    /// Get the underlying decimal score.
    pub fn score(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Rating {
    type Error = TypeError;

    fn try_from(d: Decimal) -> Result<Self, Self::Error> {
        Self::new(d)
    }
}

impl From<Rating> for Decimal {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supported display languages.
///
/// The storefront ships with English and Arabic resources. Anything else
/// is rejected at the parse boundary; the state machine has no other
/// transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Arabic
    Ar,
}

impl Locale {
    /// All supported locales, in display order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    /// Get the locale code as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Derive the text direction for this locale.
    ///
    /// Direction is a pure function of the locale: Arabic reads
    /// right-to-left, everything else left-to-right. It is never chosen
    /// independently.
    pub fn direction(&self) -> Direction {
        match self {
            Locale::Ar => Direction::Rtl,
            _ => Direction::Ltr,
        }
    }

    /// The native name of the language, as shown by the switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ar => "العربية",
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            other => Err(TypeError::UnsupportedLocale(other.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Text layout flow, left-to-right or right-to-left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right
    #[default]
    Ltr,
    /// Right-to-left
    Rtl,
}

impl Direction {
    /// Get the direction as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
