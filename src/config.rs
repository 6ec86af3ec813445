//! Configuration management for pagebuddy
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.pagebuddy/config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::errors::{PagerError, Result};
use crate::pager::PagerConfig;

/// Complete configuration for pagebuddy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pagination: PagerConfig,
    pub viewer: ViewerConfig,
    pub paths: PathsConfig,
}

/// Viewer behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub color_output: bool,
    pub show_banner: bool,
    pub remember_page_size: bool,
}

/// File system paths configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub state_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pagination: PagerConfig::default(),
            viewer: ViewerConfig::default(),
            paths: PathsConfig::default(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            show_banner: true,
            remember_page_size: true,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            state_dir: "~/.pagebuddy".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PagerError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| PagerError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".pagebuddy").join("config.toml");
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.pagination.page_sizes.is_empty() {
            return Err(PagerError::ConfigError(
                "page_sizes must list at least one size".to_string()
            ));
        }

        if self.pagination.page_sizes.iter().any(|size| *size == 0) {
            return Err(PagerError::ConfigError(
                "page_sizes entries must be greater than 0".to_string()
            ));
        }

        if !self.pagination.page_sizes.contains(&self.pagination.default_page_size) {
            return Err(PagerError::ConfigError(
                format!(
                    "default_page_size {} is not one of the configured page_sizes",
                    self.pagination.default_page_size
                )
            ));
        }

        if self.paths.state_dir.is_empty() {
            return Err(PagerError::ConfigError(
                "state_dir must not be empty".to_string()
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &PathBuf) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| PagerError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PagerError::ConfigError(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PagerError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if path.starts_with("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(&path[2..]);
            }
        }
        PathBuf::from(path)
    }

    /// Get state directory path
    pub fn state_dir(&self) -> PathBuf {
        Self::expand_path(&self.paths.state_dir)
    }

    /// Directory holding saved per-view settings
    pub fn views_dir(&self) -> PathBuf {
        self.state_dir().join("views")
    }

    /// Input history file for the interactive session
    pub fn history_file(&self) -> PathBuf {
        self.state_dir().join("history.txt")
    }
}
