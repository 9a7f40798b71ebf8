//! store::language
//!
//! Persisted language store.
//!
//! # Side effect
//!
//! A language change must also update the rendered document's root
//! attributes. That effect does not live here: `set_language` returns the
//! applied `(Locale, Direction)` pair and the session layer applies it to
//! the [`crate::ui::document::Document`] after the mutation succeeds,
//! keeping this core portable and free of rendering-layer writes.

use crate::core::language::LanguageState;
use crate::core::types::{Direction, Locale};
use crate::store::records::{self, LanguageRecord, LANGUAGE_KEY};
use crate::store::traits::StateStore;
use crate::store::StoreError;

/// The locale selection store.
///
/// Two states, `en` and `ar`; other codes are unrepresentable as
/// [`Locale`] and get rejected at the CLI parse boundary.
pub struct LanguageStore<'a> {
    backend: &'a dyn StateStore,
    state: LanguageState,
}

impl<'a> LanguageStore<'a> {
    /// Open the language store, rehydrating from the backend.
    ///
    /// An absent or malformed record yields the `en`/`ltr` default. The
    /// persisted direction field is ignored in favor of the value derived
    /// from the locale.
    pub fn open(backend: &'a dyn StateStore) -> Result<Self, StoreError> {
        let raw = backend.load(LANGUAGE_KEY)?;
        let state = records::rehydrate_language(raw.as_deref());
        Ok(Self { backend, state })
    }

    /// Transition to a new locale.
    ///
    /// Recomputes the direction, updates `{locale, direction}` as one
    /// unit, persists the record, and returns the applied pair for the
    /// orchestrating layer to mirror onto the document. Setting the
    /// current locale again is valid and produces the same pair.
    pub fn set_language(&mut self, locale: Locale) -> Result<(Locale, Direction), StoreError> {
        let applied = self.state.set_language(locale);
        self.persist()?;
        Ok(applied)
    }

    /// The active locale. Pure read.
    pub fn language(&self) -> Locale {
        self.state.language()
    }

    /// The derived text direction. Pure read.
    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&LanguageRecord::from_state(&self.state))
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.backend.save(LANGUAGE_KEY, &json)?;
        Ok(())
    }
}
