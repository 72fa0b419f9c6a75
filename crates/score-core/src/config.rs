use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_STORAGE_KEY: &str = "scoreRows";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub storage_key: Option<String>,
    #[serde(default)]
    pub scoring: Option<bool>,
    #[serde(default)]
    pub persistence: Option<bool>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/scoreboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("scoreboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("scoreboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the user config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        Self::config_path()
            .filter(|path| path.exists())
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|content| Self::from_toml(&content))
            .unwrap_or_default()
    }

    pub fn from_toml(content: &str) -> Option<Self> {
        toml::from_str(content).ok()
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("scoreboard")))
            .unwrap_or_else(|| PathBuf::from(".scoreboard"))
    }

    pub fn effective_storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    pub fn scoring_enabled(&self) -> bool {
        self.scoring.unwrap_or(true)
    }

    pub fn persistence_enabled(&self) -> bool {
        self.persistence.unwrap_or(true)
    }
}
