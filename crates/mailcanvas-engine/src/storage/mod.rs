//! Key-value persistence backends.
//!
//! The store only needs `load(key)` and `save(key, value)`. [`FileStore`]
//! keeps one JSON file per key in a directory; [`MemoryStore`] keeps entries
//! in memory and counts saves, which tests use to check persistence.

use relative_path::{Component, RelativePath};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
    #[error("Invalid storage directory: {0}")]
    InvalidStorageDir(String),
}

/// Host-supplied key-value capability
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an entry without counting it as a save
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful saves since creation
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.saves += 1;
        Ok(())
    }
}

/// Directory-backed store: each key lives in `<root>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        if root.exists() && !root.is_dir() {
            return Err(StorageError::InvalidStorageDir(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write an exported HTML rendering next to the stored state
    pub fn write_html(&self, key: &str, html: &str) -> Result<PathBuf, StorageError> {
        let path = self.key_path(key, "html")?;
        fs::write(&path, html)?;
        Ok(path)
    }

    /// Reject keys that would not map to a single file directly under the root
    pub fn check_key(&self, key: &str) -> Result<(), StorageError> {
        let mut components = RelativePath::new(key).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => Err(StorageError::InvalidKey(key.to_string())),
        }
    }

    // Keys may contain dots; the extension is appended, never replaced
    fn key_path(&self, key: &str, extension: &str) -> Result<PathBuf, StorageError> {
        self.check_key(key)?;
        Ok(RelativePath::new(&format!("{key}.{extension}")).to_path(&self.root))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key, "json")?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    /// Stages the value in `<key>.json.tmp`, then renames it over `<key>.json`.
    /// A crash mid-write leaves the previous file intact.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key, "json")?;
        let staging = self.key_path(key, "json.tmp")?;
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }
}
