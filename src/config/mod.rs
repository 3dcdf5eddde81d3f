//! Configuration management for foliosh
//!
//! This module handles loading, parsing, and managing configuration:
//! - Configuration file (TOML format)
//! - Command-line overrides
//! - Default values
//!
//! The active theme also lives in this file (under `[theme]`), written by
//! the theme store whenever the `mode` command switches it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::theme::Theme;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display configuration
    pub display: DisplayConfig,

    /// History configuration
    pub history: HistoryConfig,

    /// Theme configuration
    pub theme: ThemeConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Display and output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Enable colored output
    pub color_output: bool,

    /// Enable command-word highlighting
    pub syntax_highlighting: bool,
}

/// Command history configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of history entries
    pub max_size: usize,

    /// Path to history file
    pub file_path: PathBuf,

    /// Enable history persistence
    pub persist: bool,
}

/// Theme configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Persisted theme choice
    pub current: Theme,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: LogLevel,

    /// Enable timestamps in logs
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            syntax_highlighting: true,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: 1000,
            file_path: default_history_file(),
            persist: true,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            current: Theme::System,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            timestamps: true,
        }
    }
}

fn default_history_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".foliosh")
        .join("history")
}

impl Config {
    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist yet.
    ///
    /// # Arguments
    /// * `path` - Explicit config file path, or None for the default
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path(),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)?;
        let config: Config =
            toml::from_str(&text).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        Ok(config)
    }

    /// Default configuration file path (`~/.foliosh/config.toml`).
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".foliosh")
            .join("config.toml")
    }

    /// Save configuration to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Generic(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, text)?;
        Ok(())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.history.max_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "history.max_size".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.display.color_output);
        assert!(config.display.syntax_highlighting);
        assert_eq!(config.history.max_size, 1000);
        assert_eq!(config.theme.current, Theme::System);
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_validate_rejects_zero_history() {
        let mut config = Config::default();
        config.history.max_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.display.color_output = false;
        config.theme.current = Theme::Dark;
        config.save(&path).unwrap();

        let loaded = Config::load_from_file(Some(&path)).unwrap();
        assert!(!loaded.display.color_output);
        assert_eq!(loaded.theme.current, Theme::Dark);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let config = Config::load_from_file(Some(&path)).unwrap();
        assert_eq!(config.history.max_size, 1000);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\ncolor_output = false\n").unwrap();

        let config = Config::load_from_file(Some(&path)).unwrap();
        assert!(!config.display.color_output);
        assert!(config.display.syntax_highlighting);
        assert_eq!(config.theme.current, Theme::System);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "display = nonsense [").unwrap();

        assert!(Config::load_from_file(Some(&path)).is_err());
    }
}
