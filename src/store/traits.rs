//! store::traits
//!
//! Storage capability trait definition.
//!
//! # Design
//!
//! The `StateStore` trait defines a simple key-value interface for
//! serialized store records. Keys are the record names the original
//! storefront used (e.g. "ve-shop-cart") and payloads are opaque strings;
//! interpretation belongs to [`crate::store::records`].
//!
//! # Semantics
//!
//! Implementations MUST:
//! - Apply writes synchronously: a `load` following a `save` in the same
//!   process observes the write
//! - Report absence as `Ok(None)`, never as an error
//! - Be thread-safe (Send + Sync)
//!
//! # Example
//!
//! ```ignore
//! use veshop::store::{StateStore, StorageError};
//!
//! fn count_raw_bytes(store: &dyn StateStore) -> Result<usize, StorageError> {
//!     Ok(store.load("ve-shop-cart")?.map_or(0, |raw| raw.len()))
//! }
//! ```

use thiserror::Error;

/// Errors from storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to read from storage.
    #[error("failed to read state: {0}")]
    ReadError(String),

    /// Failed to write to storage.
    #[error("failed to write state: {0}")]
    WriteError(String),

    /// Failed to delete from storage.
    #[error("failed to delete state: {0}")]
    DeleteError(String),
}

/// Trait for store record backends.
///
/// Implementations must be thread-safe (Send + Sync). Payloads are
/// treated as opaque; backends never parse them.
pub trait StateStore: Send + Sync {
    /// Load the record for a key.
    ///
    /// Returns `Ok(Some(payload))` if the record exists and
    /// `Ok(None)` if it does not. An absent record is not an error;
    /// `Err` is reserved for storage access failures.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Persist a record under a key, overwriting any existing value.
    ///
    /// The write completes before this returns: a `load` of the same key
    /// in the same process observes it.
    fn save(&self, key: &str, payload: &str) -> Result<(), StorageError>;

    /// Delete the record for a key.
    ///
    /// Returns `Ok(())` even if the record did not exist. This makes
    /// delete idempotent.
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Check whether a record exists.
    ///
    /// Default implementation uses `load()` and checks for `Some`.
    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.load(key)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = StorageError::ReadError("disk gone".into());
        assert!(err.to_string().contains("read"));
        assert!(err.to_string().contains("disk gone"));

        let err = StorageError::WriteError("disk full".into());
        assert!(err.to_string().contains("write"));

        let err = StorageError::DeleteError("io error".into());
        assert!(err.to_string().contains("delete"));
    }
}
