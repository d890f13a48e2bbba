//! Typed JSON store over a raw backend.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::backend::StorageBackend;
use super::error::StorageError;

/// Sentinel key written and removed by the availability probe.
const PROBE_KEY: &str = "__scorecast-probe__";

/// Durable, synchronous key-value storage with JSON encoding.
///
/// Availability is probed once at construction by writing and removing a
/// sentinel key; every operation short-circuits to
/// [`StorageError::Unavailable`] when the probe failed, so a disabled medium
/// degrades to "acts as if storage is empty" rather than failing later in
/// surprising ways.
///
/// Nothing here panics on storage faults. The `Result`-returning methods make
/// the failure inspectable; [`LocalStore::get_or`] applies the soft contract
/// (default value plus a logged warning) for callers that don't care why.
pub struct LocalStore {
    backend: Box<dyn StorageBackend>,
    available: bool,
}

impl LocalStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        let available = match backend
            .write(PROBE_KEY, "1")
            .and_then(|_| backend.remove(PROBE_KEY))
        {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "storage unavailable, all operations will no-op");
                false
            }
        };
        Self { backend, available }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    fn ensure_available(&self) -> Result<(), StorageError> {
        if self.available {
            Ok(())
        } else {
            Err(StorageError::Unavailable)
        }
    }

    /// Serialize `value` to JSON text and write it under `key`.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        self.ensure_available()?;
        let text = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.backend.write(key, &text)?;
        Ok(())
    }

    /// Read and parse the value under `key`.
    ///
    /// A corrupted entry is removed and reported as
    /// [`StorageError::Corrupted`]; it is never surfaced as a panic.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        self.ensure_available()?;
        let Some(text) = self.backend.read(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&text) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                debug!(key, error = %e, "dropping corrupted entry");
                if let Err(e) = self.backend.remove(key) {
                    warn!(key, error = %e, "failed to remove corrupted entry");
                }
                Err(StorageError::Corrupted {
                    key: key.to_string(),
                })
            }
        }
    }

    /// Soft read: `default` on absence or on any failure, with a warning for
    /// actual faults.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(StorageError::Unavailable) => default,
            Err(e) => {
                warn!(key, error = %e, "falling back to default value");
                default
            }
        }
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.ensure_available()?;
        self.backend.remove(key)?;
        Ok(())
    }

    /// Delete every key.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.ensure_available()?;
        self.backend.clear()?;
        Ok(())
    }

    /// All currently stored keys, for prefix sweeps.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.ensure_available()?;
        Ok(self.backend.keys()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::backend::MemoryBackend;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    fn memory_store() -> LocalStore {
        LocalStore::new(Box::new(MemoryBackend::new()))
    }

    #[test]
    fn test_set_get_round_trip() {
        let store = memory_store();
        let value = Sample {
            name: "nfl".to_string(),
            count: 7,
        };
        store.set("sample", &value).unwrap();
        assert_eq!(store.get::<Sample>("sample").unwrap(), Some(value));
    }

    #[test]
    fn test_get_absent_returns_none() {
        let store = memory_store();
        assert_eq!(store.get::<Sample>("nothing").unwrap(), None);
        assert_eq!(store.get_or("nothing", 42u32), 42);
    }

    #[test]
    fn test_corrupted_entry_is_dropped() {
        let backend = MemoryBackend::new();
        backend.write("bad", "{not json").unwrap();
        let store = LocalStore::new(Box::new(backend));

        assert!(matches!(
            store.get::<Sample>("bad"),
            Err(StorageError::Corrupted { .. })
        ));
        // Entry was removed, so a second read sees an empty slot.
        assert_eq!(store.get::<Sample>("bad").unwrap(), None);
    }

    #[test]
    fn test_get_or_defaults_on_corruption() {
        let backend = MemoryBackend::new();
        backend.write("bad", "][").unwrap();
        let store = LocalStore::new(Box::new(backend));
        assert_eq!(store.get_or("bad", 9u32), 9);
    }

    #[test]
    fn test_unavailable_storage_never_panics() {
        let store = LocalStore::new(Box::new(MemoryBackend::read_only()));
        assert!(!store.is_available());
        assert!(matches!(
            store.set("k", &1u32),
            Err(StorageError::Unavailable)
        ));
        assert!(matches!(
            store.get::<u32>("k"),
            Err(StorageError::Unavailable)
        ));
        assert_eq!(store.get_or("k", 5u32), 5);
    }

    #[test]
    fn test_clear_and_keys() {
        let store = memory_store();
        store.set("a", &1u32).unwrap();
        store.set("b", &2u32).unwrap();
        assert_eq!(store.keys().unwrap(), vec!["a", "b"]);
        store.clear().unwrap();
        assert!(store.keys().unwrap().is_empty());
    }
}
