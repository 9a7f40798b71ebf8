//! ui
//!
//! User-facing output utilities: verbosity-aware printing and the
//! document attribute model renderers consult for direction.

pub mod document;
pub mod output;

pub use document::Document;
pub use output::Verbosity;
