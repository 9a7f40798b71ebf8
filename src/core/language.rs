//! core::language
//!
//! Pure language selection state.
//!
//! # Invariant
//!
//! `direction` is always the value derived from `language`; the two fields
//! are updated as one unit and can never represent different effective
//! states. The document side effect that accompanies a language change
//! lives in the session layer, not here.

use crate::core::types::{Direction, Locale};

/// The active locale and its derived text direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageState {
    language: Locale,
    direction: Direction,
}

impl LanguageState {
    /// Create state for a locale, deriving the direction.
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            language: locale,
            direction: locale.direction(),
        }
    }

    /// Transition to a new locale.
    ///
    /// Recomputes the direction and updates both fields atomically.
    /// Setting the current locale again is valid and leaves the state
    /// unchanged.
    pub fn set_language(&mut self, locale: Locale) -> (Locale, Direction) {
        *self = Self::for_locale(locale);
        (self.language, self.direction)
    }

    /// The active locale.
    pub fn language(&self) -> Locale {
        self.language
    }

    /// The derived text direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}
