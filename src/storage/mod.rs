//! Local persistence layer.
//!
//! A typed wrapper over raw key-value storage with JSON encoding, an
//! availability probe, and soft failure semantics. Values live under a fixed
//! set of reserved keys plus two dynamic prefix families (`cache-` for TTL
//! cache entries, `state-` for generic persistent state).

pub mod backend;
pub mod error;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::StorageError;
pub use store::LocalStore;

/// Prefix for the dynamic cache-entry key family.
pub const CACHE_PREFIX: &str = "cache-";

/// Prefix for generic persistent-state entries.
pub const STATE_PREFIX: &str = "state-";

/// The reserved, enumerated storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    UserPreferences,
    FavoriteTeams,
    FilterSettings,
    ThemeMode,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::UserPreferences,
        StorageKey::FavoriteTeams,
        StorageKey::FilterSettings,
        StorageKey::ThemeMode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::UserPreferences => "user-preferences",
            StorageKey::FavoriteTeams => "favorite-teams",
            StorageKey::FilterSettings => "filter-settings",
            StorageKey::ThemeMode => "theme-mode",
        }
    }
}

/// Full storage key for a cache entry.
pub fn cache_key(name: &str) -> String {
    format!("{}{}", CACHE_PREFIX, name)
}

/// Full storage key for a persistent-state entry.
pub fn state_key(name: &str) -> String {
    format!("{}{}", STATE_PREFIX, name)
}
