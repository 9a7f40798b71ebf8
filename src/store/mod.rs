//! store
//!
//! Persisted state stores and their storage capability.
//!
//! # Architecture
//!
//! Every store composes a pure state core from [`crate::core`] with a
//! borrowed [`StateStore`] backend:
//!
//! - [`traits`] - the save/load/delete capability and [`StorageError`]
//! - [`file`] - file-backed records under the state directory
//! - [`memory`] - in-memory backend for tests
//! - [`records`] - persisted record schemas and rehydration rules
//! - [`cart`], [`wishlist`], [`language`] - the three persisted stores
//!
//! # Rehydration contract
//!
//! Opening a store never fails on bad data: absent and malformed records
//! both yield the documented default state. Backend I/O failures do
//! surface, as does a failed persistence write after a mutation.

pub mod cart;
pub mod file;
pub mod language;
pub mod memory;
pub mod records;
pub mod traits;
pub mod wishlist;

pub use cart::CartStore;
pub use file::FileStateStore;
pub use language::LanguageStore;
pub use memory::MemoryStateStore;
pub use traits::{StateStore, StorageError};
pub use wishlist::WishlistStore;

use thiserror::Error;

/// Errors from persisted store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to serialize state for persistence.
    #[error("failed to serialize state: {0}")]
    Serialize(String),

    /// Storage backend failure.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
