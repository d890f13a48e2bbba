//! Persisted user preference records.
//!
//! These are whole-record read-modify-write documents: accessors never do
//! partial merges, callers read, modify, and save the full record. All fields
//! carry `serde(default)` so older payloads and imports parse cleanly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySettings {
    pub show_logos: bool,
    pub show_records: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_logos: true,
            show_records: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub favorite_teams: Vec<String>,
    pub default_sport: String,
    pub compact_mode: bool,
    pub auto_refresh: bool,
    pub theme: ThemeMode,
    pub display_settings: DisplaySettings,
    /// Auto-refresh cadence in seconds.
    pub refresh_interval: u32,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            favorite_teams: Vec::new(),
            default_sport: "nfl".to_string(),
            compact_mode: false,
            auto_refresh: true,
            theme: ThemeMode::Auto,
            display_settings: DisplaySettings::default(),
            refresh_interval: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    StartAsc,
    StartDesc,
}

/// Dashboard filter state persisted under the `filter-settings` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSettings {
    /// Sport tags to show; empty means all sports.
    pub sports: Vec<String>,
    /// Status tags to show; empty means all statuses.
    pub statuses: Vec<String>,
    pub sort_order: SortOrder,
}
