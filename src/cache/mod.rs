//! TTL-expiring cache accessors over local storage.

pub mod manager;

pub use manager::{CacheEntry, CacheManager, DEFAULT_CACHE_TTL_MS};
