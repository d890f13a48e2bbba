//! Scorecast - core library for a sports-scores dashboard.
//!
//! Three loosely coupled pieces:
//!
//! - [`storage`]: a typed key-value persistence layer with JSON encoding and
//!   graceful degradation when the backing medium is unavailable
//! - [`prefs`] / [`cache`]: domain accessors layered on storage (user
//!   preferences, favorite teams, TTL-expiring game-data caches)
//! - [`mock`]: an in-memory game-data generator that simulates live score
//!   progression on a caller-owned timer
//!
//! The generator and the persistence layer are independent leaves; the
//! presentation layer (not part of this crate) consumes both.

pub mod cache;
pub mod clock;
pub mod config;
pub mod mock;
pub mod models;
pub mod prefs;
pub mod storage;

pub use cache::{CacheEntry, CacheManager, DEFAULT_CACHE_TTL_MS};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use mock::{GeneratorConfig, LiveUpdater, MockGenerator, TeamCatalog, UpdaterHandle};
pub use models::{
    DisplaySettings, FilterSettings, Game, GameClock, GameStatus, Score, Sport, Team, ThemeMode,
    UserPreferences,
};
pub use prefs::PreferenceManager;
pub use storage::{
    FileBackend, LocalStore, MemoryBackend, StorageBackend, StorageError, StorageKey,
};
