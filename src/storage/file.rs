//! File-backed storage: a single JSON object mapping keys to values

use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{Storage, StorageError};

/// Storage file name inside the storage directory
const STORAGE_FILE: &str = "storage.json";

/// Key-value storage persisted to `<dir>/storage.json`
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<IndexMap<String, String>>,
}

impl FileStorage {
    /// Open (or lazily create) the storage in `dir`
    ///
    /// A missing file starts empty. An unreadable or corrupt file is logged and
    /// also starts empty; it gets replaced on the next write.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StorageError> {
        let path = dir.as_ref().join(STORAGE_FILE);

        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<IndexMap<String, String>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Discarding corrupt storage file {:?}: {}", path, e);
                    IndexMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => IndexMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!("Opened storage {:?} ({} keys)", path, entries.len());

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &IndexMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries).map_err(|source| {
            StorageError::Encode {
                key: STORAGE_FILE.to_string(),
                source,
            }
        })?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        let previous = entries.insert(key.to_string(), value.to_string());

        if let Err(e) = self.flush(&entries) {
            // Keep memory consistent with disk
            match previous {
                Some(old) => {
                    entries.insert(key.to_string(), old);
                }
                None => {
                    entries.shift_remove(key);
                }
            }
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        let Some((index, _, old)) = entries.shift_remove_full(key) else {
            return Ok(());
        };

        if let Err(e) = self.flush(&entries) {
            entries.shift_insert(index, key.to_string(), old);
            return Err(e);
        }
        Ok(())
    }
}
