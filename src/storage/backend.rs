//! Raw string key-value backends.
//!
//! The store above this layer only ever sees text; JSON encoding and the
//! soft-failure contract live in [`super::store`]. The trait seam exists so
//! tests can exercise the unavailable-storage path without touching the
//! filesystem.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Synchronous raw key-value storage.
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> io::Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&self, key: &str) -> io::Result<()>;
    fn keys(&self) -> io::Result<Vec<String>>;
    fn clear(&self) -> io::Result<()>;
}

/// File-backed storage: one JSON map file holding every key.
///
/// Mirrors the single shared blob of a browser's local storage - there is no
/// in-process cache, so every operation re-reads and re-parses the file.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load_map(&self) -> io::Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn save_map(&self, map: &BTreeMap<String, String>) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(map)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, contents)
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.load_map()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> io::Result<()> {
        let mut map = self.load_map()?;
        map.insert(key.to_string(), value.to_string());
        self.save_map(&map)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        let mut map = self.load_map()?;
        if map.remove(key).is_some() {
            self.save_map(&map)?;
        }
        Ok(())
    }

    fn keys(&self) -> io::Result<Vec<String>> {
        Ok(self.load_map()?.keys().cloned().collect())
    }

    fn clear(&self) -> io::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral use.
pub struct MemoryBackend {
    entries: Mutex<BTreeMap<String, String>>,
    read_only: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            read_only: false,
        }
    }

    /// A backend that rejects every write, simulating a disabled or
    /// quota-exhausted storage medium.
    pub fn read_only() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            read_only: true,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_writable(&self) -> io::Result<()> {
        if self.read_only {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "storage is read-only",
            ))
        } else {
            Ok(())
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> io::Result<()> {
        self.check_writable()?;
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.check_writable()?;
        self.lock().remove(key);
        Ok(())
    }

    fn keys(&self) -> io::Result<Vec<String>> {
        Ok(self.lock().keys().cloned().collect())
    }

    fn clear(&self) -> io::Result<()> {
        self.check_writable()?;
        self.lock().clear();
        Ok(())
    }
}
