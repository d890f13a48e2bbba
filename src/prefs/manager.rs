use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{FilterSettings, ThemeMode, UserPreferences};
use crate::storage::{state_key, LocalStore, StorageKey};

/// Most recent searches kept, newest first.
pub const MAX_RECENT_SEARCHES: usize = 10;

/// State-prefix name for the recent-searches list.
const RECENT_SEARCHES: &str = "recent-searches";

/// Typed, domain-specific accessors over the local store.
///
/// Every read returns a usable value (stored or default) and every write
/// reports success as a boolean; storage faults degrade with a warning and
/// never propagate. Read-modify-write here is not atomic across overlapping
/// callers; last write wins.
pub struct PreferenceManager {
    store: Arc<LocalStore>,
}

impl PreferenceManager {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }

    fn set_soft<T: serde::Serialize>(&self, key: &str, value: &T) -> bool {
        match self.store.set(key, value) {
            Ok(_) => true,
            Err(e) => {
                warn!(key, error = %e, "failed to persist value");
                false
            }
        }
    }

    // ===== User preferences =====

    /// The stored preferences record, or the defaults when absent or
    /// corrupted. Never partial.
    pub fn user_preferences(&self) -> UserPreferences {
        self.store
            .get_or(StorageKey::UserPreferences.as_str(), UserPreferences::default())
    }

    /// Whole-record overwrite. Callers merge before saving.
    pub fn save_user_preferences(&self, prefs: &UserPreferences) -> bool {
        self.set_soft(StorageKey::UserPreferences.as_str(), prefs)
    }

    // ===== Favorite teams =====

    pub fn favorite_teams(&self) -> Vec<String> {
        self.store
            .get_or(StorageKey::FavoriteTeams.as_str(), Vec::new())
    }

    pub fn save_favorite_teams(&self, teams: &[String]) -> bool {
        self.set_soft(StorageKey::FavoriteTeams.as_str(), &teams)
    }

    /// Append `team_id` if not already present. Idempotent.
    pub fn add_favorite_team(&self, team_id: &str) -> bool {
        let mut teams = self.favorite_teams();
        if teams.iter().any(|t| t == team_id) {
            return true;
        }
        teams.push(team_id.to_string());
        self.save_favorite_teams(&teams)
    }

    /// Remove `team_id`. Succeeds even when it was absent.
    pub fn remove_favorite_team(&self, team_id: &str) -> bool {
        let mut teams = self.favorite_teams();
        teams.retain(|t| t != team_id);
        self.save_favorite_teams(&teams)
    }

    // ===== Filters and theme =====

    pub fn filter_settings(&self) -> FilterSettings {
        self.store
            .get_or(StorageKey::FilterSettings.as_str(), FilterSettings::default())
    }

    pub fn save_filter_settings(&self, filters: &FilterSettings) -> bool {
        self.set_soft(StorageKey::FilterSettings.as_str(), filters)
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.store
            .get_or(StorageKey::ThemeMode.as_str(), ThemeMode::default())
    }

    pub fn set_theme_mode(&self, theme: ThemeMode) -> bool {
        self.set_soft(StorageKey::ThemeMode.as_str(), &theme)
    }

    // ===== Recent searches =====

    pub fn recent_searches(&self) -> Vec<String> {
        self.store.get_or(&state_key(RECENT_SEARCHES), Vec::new())
    }

    /// Record a search term: deduped case-insensitively, newest first,
    /// capped at [`MAX_RECENT_SEARCHES`]. Blank terms are ignored.
    pub fn add_recent_search(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        let mut searches = self.recent_searches();
        searches.retain(|s| !s.eq_ignore_ascii_case(term));
        searches.insert(0, term.to_string());
        searches.truncate(MAX_RECENT_SEARCHES);
        self.set_soft(&state_key(RECENT_SEARCHES), &searches)
    }

    pub fn clear_recent_searches(&self) -> bool {
        match self.store.remove(&state_key(RECENT_SEARCHES)) {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "failed to clear recent searches");
                false
            }
        }
    }

    // ===== Export / import =====

    /// One JSON object aggregating the current value of every recognized
    /// key-group, suitable for round-trip through [`import_user_data`].
    ///
    /// [`import_user_data`]: PreferenceManager::import_user_data
    pub fn export_user_data(&self) -> Option<Value> {
        if !self.store.is_available() {
            return None;
        }
        let mut payload = serde_json::Map::new();
        for key in Self::export_keys() {
            match self.store.get::<Value>(&key) {
                Ok(Some(value)) => {
                    payload.insert(key, value);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(key = %key, error = %e, "skipping key during export");
                }
            }
        }
        Some(Value::Object(payload))
    }

    /// Import a payload produced by [`export_user_data`].
    ///
    /// Every recognized key-group present in the payload is validated
    /// against its schema before anything is written; a validation failure
    /// returns false with zero writes. Writes after validation are still
    /// individual last-write-wins operations, not a transaction.
    ///
    /// [`export_user_data`]: PreferenceManager::export_user_data
    pub fn import_user_data(&self, payload: &Value) -> bool {
        let Some(object) = payload.as_object() else {
            warn!("import payload is not a JSON object");
            return false;
        };

        let recent_key = state_key(RECENT_SEARCHES);
        let mut pending: Vec<(&String, &Value)> = Vec::new();
        for (key, value) in object {
            let valid = match key.as_str() {
                k if k == StorageKey::UserPreferences.as_str() => {
                    validates::<UserPreferences>(value)
                }
                k if k == StorageKey::FavoriteTeams.as_str() => validates::<Vec<String>>(value),
                k if k == StorageKey::FilterSettings.as_str() => validates::<FilterSettings>(value),
                k if k == StorageKey::ThemeMode.as_str() => validates::<ThemeMode>(value),
                k if k == recent_key => validates::<Vec<String>>(value),
                _ => {
                    debug!(key = %key, "ignoring unrecognized key in import payload");
                    continue;
                }
            };
            if !valid {
                warn!(key = %key, "import payload failed schema validation, nothing written");
                return false;
            }
            pending.push((key, value));
        }

        if pending.is_empty() {
            warn!("import payload contains no recognized keys");
            return false;
        }

        let mut ok = true;
        for (key, value) in pending {
            if !self.set_soft(key, value) {
                ok = false;
            }
        }
        ok
    }

    fn export_keys() -> Vec<String> {
        let mut keys: Vec<String> = StorageKey::ALL
            .iter()
            .map(|k| k.as_str().to_string())
            .collect();
        keys.push(state_key(RECENT_SEARCHES));
        keys
    }
}

fn validates<T: DeserializeOwned>(value: &Value) -> bool {
    serde_json::from_value::<T>(value.clone()).is_ok()
}
