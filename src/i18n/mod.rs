//! i18n
//!
//! Translation resource lookup.
//!
//! # Design
//!
//! Display strings live in embedded JSON bundles, one per locale and
//! namespace (`common`, `product`, `cart`, `auth`). A [`Translator`] is
//! built for the locale the language store currently holds; the store's
//! selection is the single source of truth, so switching languages means
//! building a new translator.
//!
//! # Key syntax
//!
//! Keys are dot paths within a namespace. The namespace defaults to
//! `common` and can be given explicitly with a colon:
//!
//! - `"messages.item_added_to_cart"` resolves in `common`
//! - `"product:card.was"` resolves in `product`
//!
//! # Fallback
//!
//! Resolution tries the active locale, then English, then echoes the key
//! back unchanged: a missing string renders as its key rather than
//! failing the whole render.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::core::types::Locale;

/// Namespace names, matching the original bundle split.
const NAMESPACES: [&str; 4] = ["common", "product", "cart", "auth"];

/// The namespace assumed when a key carries no explicit `ns:` prefix.
const DEFAULT_NAMESPACE: &str = "common";

/// Errors from translation resource loading.
#[derive(Debug, Error)]
pub enum I18nError {
    /// An embedded bundle is not valid JSON. The bundles are compiled in,
    /// so this is a build defect, not a runtime condition.
    #[error("failed to parse {locale} bundle '{namespace}': {message}")]
    ParseError {
        locale: Locale,
        namespace: String,
        message: String,
    },
}

fn bundle_source(locale: Locale, namespace: &str) -> &'static str {
    match (locale, namespace) {
        (Locale::En, "common") => include_str!("../../locales/en/common.json"),
        (Locale::En, "product") => include_str!("../../locales/en/product.json"),
        (Locale::En, "cart") => include_str!("../../locales/en/cart.json"),
        (Locale::En, "auth") => include_str!("../../locales/en/auth.json"),
        (Locale::Ar, "common") => include_str!("../../locales/ar/common.json"),
        (Locale::Ar, "product") => include_str!("../../locales/ar/product.json"),
        (Locale::Ar, "cart") => include_str!("../../locales/ar/cart.json"),
        (Locale::Ar, "auth") => include_str!("../../locales/ar/auth.json"),
        _ => "{}",
    }
}

fn load_bundles(locale: Locale) -> Result<HashMap<&'static str, Value>, I18nError> {
    let mut bundles = HashMap::with_capacity(NAMESPACES.len());
    for namespace in NAMESPACES {
        let value: Value =
            serde_json::from_str(bundle_source(locale, namespace)).map_err(|e| {
                I18nError::ParseError {
                    locale,
                    namespace: namespace.to_string(),
                    message: e.to_string(),
                }
            })?;
        bundles.insert(namespace, value);
    }
    Ok(bundles)
}

/// Locale-bound string lookup.
pub struct Translator {
    locale: Locale,
    active: HashMap<&'static str, Value>,
    fallback: HashMap<&'static str, Value>,
}

impl Translator {
    /// Build a translator for the given locale.
    ///
    /// # Errors
    ///
    /// Returns `I18nError` if an embedded bundle fails to parse.
    pub fn new(locale: Locale) -> Result<Self, I18nError> {
        let active = load_bundles(locale)?;
        let fallback = if locale == Locale::En {
            active.clone()
        } else {
            load_bundles(Locale::En)?
        };
        Ok(Self {
            locale,
            active,
            fallback,
        })
    }

    /// The locale this translator resolves in.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolve a key to a display string.
    ///
    /// Falls back to English, then to the key itself.
    pub fn t(&self, key: &str) -> String {
        let (namespace, path) = key
            .split_once(':')
            .unwrap_or((DEFAULT_NAMESPACE, key));

        resolve(&self.active, namespace, path)
            .or_else(|| resolve(&self.fallback, namespace, path))
            .unwrap_or_else(|| key.to_string())
    }
}

fn resolve(bundles: &HashMap<&'static str, Value>, namespace: &str, path: &str) -> Option<String> {
    let mut node = bundles.get(namespace)?;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(str::to_string)
}
