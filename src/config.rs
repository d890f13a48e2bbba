//! Application configuration management.
//!
//! Configuration is stored at `~/.config/scorecast/config.json`; the
//! persisted key-value store defaults to a file under the platform data
//! directory.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/data directory paths
const APP_NAME: &str = "scorecast";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Storage file name inside the data directory
const STORAGE_FILE: &str = "storage.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Overrides the platform data directory for the key-value store.
    pub storage_dir: Option<PathBuf>,
    /// Live-update cadence in seconds for the demo feed.
    pub update_interval_secs: Option<u64>,
    /// Artificial read latency in milliseconds for the mock feed.
    pub simulated_latency_ms: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Path of the key-value storage file.
    pub fn storage_file(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.storage_dir {
            return Ok(dir.join(STORAGE_FILE));
        }
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME).join(STORAGE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_dir_override() {
        let config = Config {
            storage_dir: Some(PathBuf::from("/tmp/scorecast-test")),
            ..Config::default()
        };
        assert_eq!(
            config.storage_file().unwrap(),
            PathBuf::from("/tmp/scorecast-test/storage.json")
        );
    }
}
