// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading
//! and saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[feedback]` - Feedback screen settings (recent-list size)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ECOFLY_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "settings.toml";

/// Default number of entries shown in the recent-feedback list.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "pt-BR", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Feedback screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackConfig {
    /// How many entries the recent-feedback list shows.
    #[serde(
        default = "default_recent_limit",
        skip_serializing_if = "Option::is_none"
    )]
    pub recent_limit: Option<usize>,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_recent_limit() -> Option<usize> {
    Some(DEFAULT_RECENT_LIMIT)
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Feedback screen settings.
    #[serde(default)]
    pub feedback: FeedbackConfig,
}

impl Config {
    /// Effective recent-feedback list size.
    #[must_use]
    pub fn recent_limit(&self) -> usize {
        self.feedback.recent_limit.unwrap_or(DEFAULT_RECENT_LIMIT)
    }
}

/// Loads the configuration from the default location.
///
/// A missing file yields the default configuration; an unreadable or
/// malformed file is logged and also yields the default, so a broken
/// settings file can never prevent startup.
#[must_use]
pub fn load() -> Config {
    let Some(dir) = paths::get_app_config_dir() else {
        return Config::default();
    };
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Config::default();
    }

    match load_from_path(&path) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Failed to load config, using defaults: {}", error);
            Config::default()
        }
    }
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the config directory cannot be resolved or the
/// file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    let dir = paths::get_app_config_dir().ok_or_else(|| {
        crate::error::Error::Config("could not determine config directory".to_string())
    })?;
    fs::create_dir_all(&dir)?;
    save_to_path(config, &dir.join(CONFIG_FILE))
}

/// Loads the configuration from an explicit path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Saves the configuration to an explicit path.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
