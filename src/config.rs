//! Application configuration
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (`MORTUI_*`, highest priority)
//! 2. Config file (~/.config/mortui/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Rick and Morty API
    pub api_url: String,

    /// Path of the JSON file holding the favorites list
    pub favorites_path: PathBuf,

    /// Theme name: "dark" or "light"
    pub theme: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level filter when RUST_LOG is unset ("error".."trace")
    pub level: String,

    /// Whether to also write JSON log files
    pub file_enabled: bool,

    /// Directory for rotated log files
    pub file_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://rickandmortyapi.com/api".to_string(),
            favorites_path: default_favorites_path(),
            theme: "dark".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("mortui")
                .join("logs"),
        }
    }
}

/// Favorites live under the platform data dir, next to the logs
fn default_favorites_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mortui")
        .join("favorites.json")
}

// ─────────────────────────────────────────────────────────────────────────────
// File configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure; every field optional so partial files work
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_url: Option<String>,
    favorites_path: Option<PathBuf>,
    theme: Option<String>,
    #[serde(default)]
    logging: FileLogging,
}

#[derive(Debug, Default, Deserialize)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<PathBuf>,
}

impl Config {
    /// Path of the config file (~/.config/mortui/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mortui").join("config.toml"))
    }

    /// Load configuration: env vars > config file > defaults
    pub fn load() -> Self {
        let mut config = Self::from_file().unwrap_or_default();

        if let Ok(url) = std::env::var("MORTUI_API_URL") {
            config.api_url = url;
        }
        if let Ok(path) = std::env::var("MORTUI_FAVORITES_PATH") {
            config.favorites_path = PathBuf::from(path);
        }
        if let Ok(theme) = std::env::var("MORTUI_THEME") {
            config.theme = theme;
        }
        if let Ok(level) = std::env::var("MORTUI_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }

    /// Read and merge the config file over the defaults
    fn from_file() -> Option<Self> {
        let path = Self::config_path()?;
        let contents = std::fs::read_to_string(&path).ok()?;

        let file: FileConfig = match toml::from_str(&contents) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Warning: ignoring invalid config {}: {}", path.display(), e);
                return None;
            }
        };

        let defaults = Self::default();
        Some(Self {
            api_url: file.api_url.unwrap_or(defaults.api_url),
            favorites_path: file.favorites_path.unwrap_or(defaults.favorites_path),
            theme: file.theme.unwrap_or(defaults.theme),
            logging: LoggingConfig {
                level: file.logging.level.unwrap_or(defaults.logging.level),
                file_enabled: file
                    .logging
                    .file_enabled
                    .unwrap_or(defaults.logging.file_enabled),
                file_dir: file.logging.file_dir.unwrap_or(defaults.logging.file_dir),
            },
        })
    }

    /// Write a commented template on first run so options are discoverable
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Render this configuration as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# mortui configuration
# Precedence: MORTUI_* environment variables > this file > defaults

# Base URL of the Rick and Morty API
api_url = "{api_url}"

# Where the favorites list is persisted (one JSON array)
favorites_path = "{favorites_path}"

# Theme: "dark" or "light"
theme = "{theme}"

[logging]
# Log level when RUST_LOG is unset: error, warn, info, debug, trace
level = "{level}"

# Write JSON log files (daily rotation) in addition to the in-app capture
file_enabled = {file_enabled}
file_dir = "{file_dir}"
"#,
            api_url = self.api_url,
            favorites_path = self.favorites_path.display(),
            theme = self.theme,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://rickandmortyapi.com/api");
        assert_eq!(config.theme, "dark");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.file_enabled);
    }

    #[test]
    fn test_template_round_trips_through_toml() {
        let config = Config::default();
        let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
        assert_eq!(file.api_url.unwrap(), config.api_url);
        assert_eq!(file.theme.unwrap(), config.theme);
        assert_eq!(file.logging.level.unwrap(), config.logging.level);
    }

    #[test]
    fn test_partial_file_config() {
        let file: FileConfig = toml::from_str(r#"theme = "light""#).unwrap();
        assert_eq!(file.theme.as_deref(), Some("light"));
        assert!(file.api_url.is_none());
        assert!(file.logging.level.is_none());
    }
}
