//! Storage backends: the minimal string-keyed store the roster persists to.

use std::collections::HashMap;
use std::fs::{remove_file, rename, File};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use super::error::SaveError;

/// A string-keyed key/value store. This is the whole persistence contract:
/// one full read before an operation, one full write after it. Backends never
/// interpret the value.
pub trait StorageBackend {
    /// Read the value under `key`, or `None` if the key has never been
    /// written.
    fn get(&self, key: &str) -> Result<Option<String>, SaveError>;

    /// Replace the value under `key`. Full-replace semantics only.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SaveError>;

    /// Delete the value under `key`. No-op if absent.
    fn remove(&mut self, key: &str) -> Result<(), SaveError>;
}

/// File-backed storage: one file per key under a root directory.
///
/// Writes are atomic: the value is written to a temp file, flushed and
/// synced, then renamed over the destination, so a crash mid-write leaves
/// the previous value intact.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn write_atomic(path: &Path, value: &str) -> Result<(), SaveError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.flush()?;

            // sync_all ensures data is written to disk (portable fsync)
            file.sync_all()?;
        }

        rename(&temp_path, path)?;

        log::debug!("Saved {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SaveError> {
        let path = self.key_path(key);
        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut value = String::new();
        file.read_to_string(&mut value)?;

        log::debug!("Loaded {} bytes from {:?}", value.len(), path);
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SaveError> {
        Self::write_atomic(&self.key_path(key), value)
    }

    fn remove(&mut self, key: &str) -> Result<(), SaveError> {
        let path = self.key_path(key);
        match remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Purely in-memory storage. State lives exactly as long as the backend does.
/// Also the backend of choice in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SaveError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SaveError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SaveError> {
        self.entries.remove(key);
        Ok(())
    }
}
