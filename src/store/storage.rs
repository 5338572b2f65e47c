//! Key-value storage backends

use crate::config::project_dirs;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the storage file in the data directory
const STORAGE_FILE_NAME: &str = "local_storage.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("storage encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key-value storage, the persistence seam of the store
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage {
    /// Read a key; `None` if it was never written or was removed
    fn load(&self, key: &str) -> Option<String>;

    /// Write a key
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key entirely
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory storage, used when no data directory is available and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Storage backed by a single JSON object file, rewritten on every change
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Default storage file in the platform data directory
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().join(STORAGE_FILE_NAME))
    }

    /// Open the storage file. A missing file starts empty; an unreadable or
    /// corrupt one is logged and also starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Ignoring unreadable storage file {}: {e}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
