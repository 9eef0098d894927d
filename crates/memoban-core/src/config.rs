use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from the platform config directory.
///
/// Missing or unreadable files fall back to defaults so the app can start
/// without any setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the hosted table service.
    #[serde(default)]
    pub service_url: Option<String>,
    /// Publishable API key for the hosted table service.
    #[serde(default)]
    pub service_key: Option<String>,
    /// Color assigned to newly created boards.
    #[serde(default = "default_board_color")]
    pub default_board_color: String,
    /// Icon name assigned to newly created boards.
    #[serde(default = "default_board_icon")]
    pub default_board_icon: String,
}

fn default_board_color() -> String {
    "#3b82f6".to_string()
}

fn default_board_icon() -> String {
    "layout-grid".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: None,
            service_key: None,
            default_board_color: default_board_color(),
            default_board_icon: default_board_icon(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/memoban/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("memoban/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("memoban\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }
}
