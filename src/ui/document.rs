//! ui::document
//!
//! Root attributes of the rendered surface.
//!
//! # Ownership
//!
//! `Document` models what the original storefront kept on the document
//! element: the active language and text direction. Only the
//! language-change path writes it (via [`Document::apply_locale`], an
//! unconditional overwrite); renderers read it to lay out output. The
//! command layer must never mutate these attributes directly.

use crate::core::types::{Direction, Locale};

/// Width used when right-aligning RTL output.
pub const RENDER_WIDTH: usize = 72;

/// The rendered surface's root attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Document {
    lang: Locale,
    dir: Direction,
}

impl Document {
    /// A document with the default `en`/`ltr` attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a locale and its direction to the root attributes.
    ///
    /// Overwrites both unconditionally; applying the same locale twice is
    /// valid and leaves the attributes identical.
    pub fn apply_locale(&mut self, lang: Locale, dir: Direction) {
        self.lang = lang;
        self.dir = dir;
    }

    /// The document language attribute.
    pub fn lang(&self) -> Locale {
        self.lang
    }

    /// The document direction attribute.
    pub fn dir(&self) -> Direction {
        self.dir
    }

    /// Lay out a line for the document's direction.
    ///
    /// LTR output is returned unchanged; RTL output is right-aligned to
    /// [`RENDER_WIDTH`] columns.
    pub fn align(&self, line: &str) -> String {
        match self.dir {
            Direction::Ltr => line.to_string(),
            Direction::Rtl => format!("{:>width$}", line, width = RENDER_WIDTH),
        }
    }
}
