//! Ve-Shop - a storefront in your terminal
//!
//! Ve-Shop is a single-binary CLI storefront rendering a mock catalog and
//! keeping three pieces of state consistent across invocations: the
//! shopping cart, the wishlist, and the display language with its derived
//! text direction. Each is persisted as its own JSON record under a local
//! state directory and rehydrated on startup.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to handlers)
//! - [`session`] - Explicitly constructed dependency container per invocation
//! - [`store`] - Persisted stores composed from pure cores and a storage capability
//! - [`core`] - Domain types, pure state transitions, catalog, configuration
//! - [`i18n`] - Translation resource lookup
//! - [`ui`] - Output formatting and document attributes
//!
//! # Correctness Invariants
//!
//! Ve-Shop maintains the following invariants:
//!
//! 1. Wishlist entries are unique by id; cart entries deliberately are not
//! 2. Direction is always the value derived from the active locale
//! 3. Corrupt persisted records rehydrate to defaults, never crash startup
//! 4. Every mutation persists synchronously before returning

pub mod cli;
pub mod core;
pub mod i18n;
pub mod session;
pub mod store;
pub mod ui;
