//! store::file
//!
//! File-based record storage.
//!
//! # Layout
//!
//! One JSON file per record key under the state directory:
//! `<state_dir>/<key>.json`. The directory is created on demand and all
//! writes are atomic (write to temp file, sync, then rename), so a
//! crashed write leaves either the old record or the new one, never a
//! torn file.
//!
//! # Example
//!
//! ```ignore
//! use veshop::store::{FileStateStore, StateStore};
//!
//! let store = FileStateStore::new("/home/me/.veshop/state".into());
//! store.save("ve-shop-cart", r#"{"items":[]}"#)?;
//! assert!(store.load("ve-shop-cart")?.is_some());
//! ```

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::traits::{StateStore, StorageError};

/// File-based record storage rooted at a state directory.
#[derive(Debug)]
pub struct FileStateStore {
    /// Directory holding one JSON file per record key.
    dir: PathBuf,
}

impl FileStateStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory does not need to exist yet; it is created on the
    /// first write.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// The state directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStateStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.record_path(key);
        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::ReadError(format!("cannot read {}: {e}", path.display())))
    }

    fn save(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            StorageError::WriteError(format!("cannot create {}: {e}", self.dir.display()))
        })?;

        let path = self.record_path(key);
        let temp_path = path.with_extension("json.tmp");

        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(|e| {
                    StorageError::WriteError(format!(
                        "cannot create {}: {e}",
                        temp_path.display()
                    ))
                })?;

            file.write_all(payload.as_bytes()).map_err(|e| {
                StorageError::WriteError(format!("cannot write {}: {e}", temp_path.display()))
            })?;

            file.sync_all().map_err(|e| {
                StorageError::WriteError(format!("cannot sync {}: {e}", temp_path.display()))
            })?;
        }

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(|e| {
            StorageError::WriteError(format!("cannot rename into {}: {e}", path.display()))
        })?;

        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.record_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::DeleteError(format!(
                "cannot delete {}: {e}",
                path.display()
            ))),
        }
    }
}
