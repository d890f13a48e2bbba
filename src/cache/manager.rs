use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::storage::{cache_key, LocalStore, StorageError, CACHE_PREFIX};

/// Default time-to-live for cached game data, in milliseconds.
/// Score data goes stale fast; five minutes keeps reads cheap without
/// showing ancient scores.
pub const DEFAULT_CACHE_TTL_MS: i64 = 5 * 60 * 1000;

/// A cached payload with its creation time and time-to-live.
///
/// Wire shape: `{ data, timestamp: epoch-ms, ttl: ms }`. An entry is valid
/// iff `now - timestamp <= ttl`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: T,
    pub timestamp: i64,
    pub ttl: i64,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T, now: DateTime<Utc>, ttl_ms: i64) -> Self {
        Self {
            data,
            timestamp: now.timestamp_millis(),
            ttl: ttl_ms,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() - self.timestamp > self.ttl
    }

    pub fn age_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now.timestamp_millis() - self.timestamp) / 60_000
    }

    pub fn age_display(&self, now: DateTime<Utc>) -> String {
        let minutes = self.age_minutes(now);
        if minutes < 1 {
            // Covers clock skew too
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            format!("{}h ago", minutes / 60)
        } else {
            format!("{}d ago", minutes / 1440)
        }
    }
}

/// Typed accessors for TTL-expiring cached payloads.
///
/// Reads apply the expiry check and transparently evict expired entries;
/// `cleanup_expired_data` is the only proactive sweep. Every failure path
/// degrades softly (absent / false / zero) with a logged warning.
pub struct CacheManager {
    store: Arc<LocalStore>,
    clock: Arc<dyn Clock>,
}

impl CacheManager {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<LocalStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Cache `data` under `key` with the default TTL.
    pub fn cache_game_data<T: Serialize>(&self, key: &str, data: &T) -> bool {
        self.cache_game_data_with_ttl(key, data, DEFAULT_CACHE_TTL_MS)
    }

    pub fn cache_game_data_with_ttl<T: Serialize>(&self, key: &str, data: &T, ttl_ms: i64) -> bool {
        let entry = CacheEntry::new(data, self.clock.now(), ttl_ms);
        match self.store.set(&cache_key(key), &entry) {
            Ok(_) => true,
            Err(e) => {
                warn!(key, error = %e, "failed to write cache entry");
                false
            }
        }
    }

    /// Read a cached payload, evicting it if the TTL has elapsed.
    pub fn cached_game_data<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let full_key = cache_key(key);
        match self.store.get::<CacheEntry<T>>(&full_key) {
            Ok(Some(entry)) => {
                if entry.is_expired(self.clock.now()) {
                    debug!(key, "cache entry expired, evicting");
                    if let Err(e) = self.store.remove(&full_key) {
                        warn!(key, error = %e, "failed to evict expired cache entry");
                    }
                    None
                } else {
                    Some(entry.data)
                }
            }
            Ok(None) => None,
            Err(StorageError::Unavailable) => None,
            Err(e) => {
                // Corrupted entries were already dropped by the store.
                warn!(key, error = %e, "cache read failed");
                None
            }
        }
    }

    /// Sweep every cache-prefixed key, removing expired and corrupted
    /// entries. Returns the number removed.
    pub fn cleanup_expired_data(&self) -> usize {
        let keys = match self.store.keys() {
            Ok(keys) => keys,
            Err(e) => {
                warn!(error = %e, "cannot enumerate keys for cache cleanup");
                return 0;
            }
        };

        let now = self.clock.now();
        let mut removed = 0;
        for key in keys.iter().filter(|k| k.starts_with(CACHE_PREFIX)) {
            match self.store.get::<CacheEntry<serde_json::Value>>(key) {
                Ok(Some(entry)) if entry.is_expired(now) => {
                    if self.store.remove(key).is_ok() {
                        removed += 1;
                    }
                }
                Ok(_) => {}
                Err(StorageError::Corrupted { .. }) => {
                    // The store already dropped the damaged entry.
                    removed += 1;
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "skipping cache entry during cleanup");
                }
            }
        }
        if removed > 0 {
            debug!(removed, "cache cleanup complete");
        }
        removed
    }

    /// Remove every cache entry regardless of age.
    pub fn clear_cache(&self) -> bool {
        let keys = match self.store.keys() {
            Ok(keys) => keys,
            Err(e) => {
                warn!(error = %e, "cannot enumerate keys to clear cache");
                return false;
            }
        };
        let mut ok = true;
        for key in keys.iter().filter(|k| k.starts_with(CACHE_PREFIX)) {
            if let Err(e) = self.store.remove(key) {
                warn!(key = %key, error = %e, "failed to remove cache entry");
                ok = false;
            }
        }
        ok
    }
}
