//! core::catalog
//!
//! Static mock catalog.
//!
//! # Design
//!
//! The storefront renders entirely from mock data: there is no remote
//! fetch and no retry logic. The catalog ships as an embedded JSON asset
//! parsed and validated once per process via [`Catalog::builtin`]. Stores
//! never read the catalog; they collect snapshots taken from it by the
//! command layer.

use serde::Deserialize;
use thiserror::Error;

use crate::core::types::{Price, ProductId, Rating};

/// The embedded mock catalog asset.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Errors from catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog asset is not valid JSON or fails field validation.
    #[error("failed to parse catalog: {0}")]
    ParseError(String),

    /// A product entry violates a catalog invariant.
    #[error("invalid product '{id}': {message}")]
    InvalidProduct { id: String, message: String },
}

/// Storefront navigation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Sports,
    Books,
    Beauty,
    Toys,
}

impl Category {
    /// All categories, in navigation order.
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::Fashion,
        Category::Home,
        Category::Sports,
        Category::Books,
        Category::Beauty,
        Category::Toys,
    ];

    /// The category slug used in config, CLI flags, and the asset file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::Home => "home",
            Category::Sports => "sports",
            Category::Books => "books",
            Category::Beauty => "beauty",
            Category::Toys => "toys",
        }
    }

    /// Translation key for the category label.
    pub fn label_key(&self) -> String {
        format!("categories.{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog product.
///
/// Field names in the asset follow the original mock data
/// (`originalPrice`, `reviewCount`, `isOnSale`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Product {
    /// Catalog-unique identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Current unit price.
    pub price: Price,

    /// Pre-discount price; present only when discounted.
    #[serde(default)]
    pub original_price: Option<Price>,

    /// Review score.
    pub rating: Rating,

    /// Review count.
    pub review_count: u32,

    /// Image URI.
    pub image: String,

    /// Navigation category.
    pub category: Category,

    /// Promotional badge text, if any.
    #[serde(default)]
    pub badge: Option<String>,

    /// Whether the product is flagged for the deals rail.
    #[serde(default, rename = "isOnSale")]
    pub on_sale: bool,
}

impl Product {
    /// Discount percentage, rounded to the nearest integer.
    ///
    /// `None` when the product has no original price or the original
    /// price is zero.
    pub fn discount_percent(&self) -> Option<i64> {
        use rust_decimal::prelude::ToPrimitive;

        let original = self.original_price?.amount();
        if original.is_zero() {
            return None;
        }
        let percent = (original - self.price.amount()) * rust_decimal::Decimal::from(100) / original;
        percent.round().to_i64()
    }
}

/// The ordered product collection.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load and validate the embedded mock catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the asset is malformed or violates an
    /// invariant (duplicate ids, original price below the sale price).
    /// The asset is compiled in, so a failure here is a build defect,
    /// not a runtime condition a user can trigger.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let catalog = Self { products };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for product in &self.products {
            if !seen.insert(product.id.clone()) {
                return Err(CatalogError::InvalidProduct {
                    id: product.id.to_string(),
                    message: "duplicate product id".into(),
                });
            }
            if let Some(original) = product.original_price {
                if original < product.price {
                    return Err(CatalogError::InvalidProduct {
                        id: product.id.to_string(),
                        message: format!(
                            "original price {original} is below current price {}",
                            product.price
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// The products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products in the given category, in catalog order.
    pub fn in_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }
}
