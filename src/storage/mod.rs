//! Storage module - key-value persistence standing in for browser local storage
//!
//! Values are JSON strings keyed by name, exactly like `localStorage`. Typed
//! records go through [`load_versioned`] / [`save_versioned`], which wrap them
//! in a small versioned envelope and validate it on the way back in.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Current schema version of persisted records
pub const SCHEMA_VERSION: u32 = 1;

/// Errors raised by a storage backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage quota exceeded writing '{key}' ({needed} bytes, {available} available)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    #[error("stored value for '{key}' is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored value for '{key}' has schema version {found}, expected {expected}")]
    SchemaMismatch {
        key: String,
        found: u32,
        expected: u32,
    },

    #[error("failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend poisoned")]
    Poisoned,
}

/// A string key-value store
pub trait Storage: Send + Sync {
    /// Read the raw value stored under `key`
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    data: &'a T,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Stored<T> {
    Versioned { version: u32, data: T },
    Legacy(T),
}

/// Decode a raw stored value, accepting the current envelope or a legacy bare payload
pub fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, StorageError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|source| {
        StorageError::Corrupt {
            key: key.to_string(),
            source,
        }
    })?;

    // An envelope with the wrong version must not fall through to the legacy arm
    if let Some(found) = envelope_version(&value) {
        if found != SCHEMA_VERSION {
            return Err(StorageError::SchemaMismatch {
                key: key.to_string(),
                found,
                expected: SCHEMA_VERSION,
            });
        }
    }

    let stored: Stored<T> =
        serde_json::from_value(value).map_err(|source| StorageError::Corrupt {
            key: key.to_string(),
            source,
        })?;

    match stored {
        Stored::Versioned { version, data } => {
            tracing::debug!("Read '{}' at schema version {}", key, version);
            Ok(data)
        }
        Stored::Legacy(data) => {
            tracing::debug!("Read legacy unversioned value for '{}'", key);
            Ok(data)
        }
    }
}

fn envelope_version(value: &serde_json::Value) -> Option<u32> {
    let obj = value.as_object()?;
    if !obj.contains_key("data") {
        return None;
    }
    obj.get("version")?.as_u64().map(|v| v as u32)
}

/// Encode a record inside the current envelope
pub fn encode<T: Serialize>(key: &str, data: &T) -> Result<String, StorageError> {
    serde_json::to_string(&EnvelopeRef {
        version: SCHEMA_VERSION,
        data,
    })
    .map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })
}

/// Load and validate a typed record
pub fn load_versioned<T: DeserializeOwned>(
    storage: &dyn Storage,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match storage.read(key)? {
        Some(raw) => decode(key, &raw).map(Some),
        None => Ok(None),
    }
}

/// Persist a typed record under the current schema version
pub fn save_versioned<T: Serialize>(
    storage: &dyn Storage,
    key: &str,
    data: &T,
) -> Result<(), StorageError> {
    let raw = encode(key, data)?;
    storage.write(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
    }

    #[test]
    fn test_roundtrip_envelope() {
        let storage = MemoryStorage::new();
        let record = Record {
            name: "folio".to_string(),
        };
        save_versioned(&storage, "rec", &record).unwrap();

        let raw = storage.read("rec").unwrap().unwrap();
        assert!(raw.starts_with(r#"{"version":1,"data":"#));

        let loaded: Option<Record> = load_versioned(&storage, "rec").unwrap();
        assert_eq!(loaded, Some(record));
    }

    #[test]
    fn test_missing_key_is_none() {
        let storage = MemoryStorage::new();
        let loaded: Option<Record> = load_versioned(&storage, "nothing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_legacy_payload_accepted() {
        let loaded: Record = decode("rec", r#"{"name":"old"}"#).unwrap();
        assert_eq!(loaded.name, "old");
    }

    #[test]
    fn test_future_version_rejected() {
        let err = decode::<Record>("rec", r#"{"version":7,"data":{"name":"x"}}"#).unwrap_err();
        assert!(matches!(
            err,
            StorageError::SchemaMismatch { found: 7, expected: 1, .. }
        ));
    }

    #[test]
    fn test_garbage_is_corrupt() {
        let err = decode::<Record>("rec", "{not json").unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));

        let err = decode::<Record>("rec", r#"{"title":"wrong shape"}"#).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }
}
