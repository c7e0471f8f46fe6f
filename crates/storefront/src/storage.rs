//! Durable key-value storage for shopper state.
//!
//! The cart is persisted as a single JSON string under a fixed key. Storage
//! is abstracted behind [`KeyValueStore`] so the cart store can run against
//! the filesystem in production and an in-memory map in tests.
//!
//! # Backends
//!
//! - [`FileStore`] - one `<key>.json` file per key inside a data directory,
//!   written atomically (temp file + rename)
//! - [`MemoryStore`] - a `HashMap` behind a mutex

use std::collections::HashMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur reading or writing a storage slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key is not usable as a slot name.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// A string key-value store.
///
/// All operations are synchronous; a successful `set` is durable before it
/// returns.
pub trait KeyValueStore {
    /// Read a slot. Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the key is invalid or the backend fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a slot, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the key is invalid or the backend fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a slot. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the key is invalid or the backend fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Reject keys that would escape the data directory or produce odd file
/// names. Applied by every backend so behaviour does not depend on which
/// one is configured.
fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey("key cannot be empty".to_string()));
    }
    if key.contains('/') || key.contains('\\') || key.contains("..") || key.starts_with('.') {
        return Err(StorageError::InvalidKey(format!(
            "key contains path characters: {key:?}"
        )));
    }
    if key.chars().any(char::is_control) {
        return Err(StorageError::InvalidKey(format!(
            "key contains control characters: {key:?}"
        )));
    }
    Ok(())
}

// =============================================================================
// File Store
// =============================================================================

/// File-backed store: each key is a `<key>.json` file in `base_path`.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `base_path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(base_path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = base_path.into();
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Directory holding the slot files.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        let tmp_path = self
            .base_path
            .join(format!(".{key}.{}.tmp", Uuid::new_v4().simple()));

        let write = || -> std::io::Result<()> {
            let mut file = std::fs::File::create(&tmp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
            drop(file);
            std::fs::rename(&tmp_path, &path)
        };

        write().map_err(|e| {
            // Best effort: leave no stray temp files behind
            let _ = std::fs::remove_file(&tmp_path);
            StorageError::Io(e)
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory store. Contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot already populated.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_key_rejects_paths() {
        assert!(validate_key("marineHarvestCart").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("bad\nkey").is_err());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().expect("tempdir");
        let store = FileStore::open(dir.path()).expect("open");

        assert_eq!(store.get("cart").expect("get"), None);

        store.set("cart", "[]").expect("set");
        assert_eq!(store.get("cart").expect("get").as_deref(), Some("[]"));

        store.set("cart", "[1]").expect("overwrite");
        assert_eq!(store.get("cart").expect("get").as_deref(), Some("[1]"));

        store.remove("cart").expect("remove");
        assert_eq!(store.get("cart").expect("get"), None);
        store.remove("cart").expect("remove missing");
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = TempDir::new().expect("tempdir");
        FileStore::open(dir.path())
            .expect("open")
            .set("cart", "persisted")
            .expect("set");

        let reopened = FileStore::open(dir.path()).expect("reopen");
        assert_eq!(
            reopened.get("cart").expect("get").as_deref(),
            Some("persisted")
        );
    }

    #[test]
    fn test_file_store_leaves_no_temp_files() {
        let dir = TempDir::new().expect("tempdir");
        let store = FileStore::open(dir.path()).expect("open");
        store.set("cart", "[]").expect("set");

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .expect("read_dir")
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["cart.json"]);
    }

    #[test]
    fn test_file_store_creates_nested_directory() {
        let dir = TempDir::new().expect("tempdir");
        let nested = dir.path().join("data").join("carts");
        let store = FileStore::open(&nested).expect("open");
        store.set("cart", "[]").expect("set");
        assert!(nested.join("cart.json").exists());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::with_entry("cart", "seed");
        assert_eq!(store.get("cart").expect("get").as_deref(), Some("seed"));

        store.remove("cart").expect("remove");
        assert_eq!(store.get("cart").expect("get"), None);
        assert!(store.set("../cart", "x").is_err());
    }
}
