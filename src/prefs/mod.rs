//! Preference accessors: user preferences, favorite teams, filters, theme,
//! recent searches, and backup export/import.

pub mod manager;

pub use manager::{PreferenceManager, MAX_RECENT_SEARCHES};
