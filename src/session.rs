//! session
//!
//! Per-invocation dependency container and orchestration.
//!
//! # Design
//!
//! There are no ambient singletons: `Session::open` explicitly constructs
//! everything a command needs (configuration, the file-backed storage
//! doorway, a translator bound to the persisted locale, and the
//! [`Document`] attributes) and commands receive it by reference.
//!
//! The one cross-cutting side effect in the system lives here:
//! [`Session::switch_language`] mutates the language store first, then
//! applies the returned `(locale, direction)` pair to the document and
//! rebuilds the translator. The store core itself never touches the
//! rendering layer.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::config::{Config, ConfigError};
use crate::core::types::{Direction, Locale};
use crate::i18n::{I18nError, Translator};
use crate::store::{FileStateStore, LanguageStore, StoreError};
use crate::ui::{Document, Verbosity};

/// Execution context assembled from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Override for the state directory (highest precedence).
    pub state_dir: Option<PathBuf>,

    /// Minimal output.
    pub quiet: bool,

    /// Verbose diagnostics.
    pub debug: bool,
}

/// Errors from session assembly and orchestration.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    I18n(#[from] I18nError),
}

/// Explicitly constructed state container for one CLI invocation.
pub struct Session {
    backend: FileStateStore,
    translator: Translator,
    document: Document,
    verbosity: Verbosity,
}

impl Session {
    /// Open a session: load config, open the storage doorway, rehydrate
    /// the language selection, and derive the translator and document
    /// from it.
    ///
    /// # Errors
    ///
    /// Fails on an unparsable config file, a backend I/O failure, or a
    /// malformed embedded translation bundle. Absent or corrupt persisted
    /// records are not errors; they rehydrate to defaults.
    pub fn open(ctx: &Context) -> Result<Self, SessionError> {
        let config = Config::load()?;

        let state_dir = match &ctx.state_dir {
            Some(dir) => dir.clone(),
            None => config.state_dir()?,
        };
        let backend = FileStateStore::new(state_dir);

        let language = LanguageStore::open(&backend)?;
        let (locale, direction) = (language.language(), language.direction());

        let translator = Translator::new(locale)?;
        let mut document = Document::new();
        document.apply_locale(locale, direction);

        let verbosity = Verbosity::from_flags(ctx.quiet || config.quiet(), ctx.debug);

        Ok(Self {
            backend,
            translator,
            document,
            verbosity,
        })
    }

    /// The storage doorway commands open stores against.
    pub fn backend(&self) -> &FileStateStore {
        &self.backend
    }

    /// The translator bound to the active locale.
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// The document root attributes.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Output verbosity for this invocation.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Switch the active language.
    ///
    /// Orchestrates the full transition: persist the new selection, apply
    /// the locale effect to the document, rebuild the translator so every
    /// subsequent lookup resolves in the new locale. Returns the applied
    /// pair.
    pub fn switch_language(
        &mut self,
        locale: Locale,
    ) -> Result<(Locale, Direction), SessionError> {
        let mut store = LanguageStore::open(&self.backend)?;
        let (applied_locale, applied_direction) = store.set_language(locale)?;

        self.document.apply_locale(applied_locale, applied_direction);
        self.translator = Translator::new(applied_locale)?;

        Ok((applied_locale, applied_direction))
    }
}
