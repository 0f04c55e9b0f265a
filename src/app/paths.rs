// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! This module provides a single source of truth for application data
//! paths, ensuring consistent directory usage across all components.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **Environment variables** (`ECOFLY_DATA_DIR`, `ECOFLY_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate
//!
//! The data directory holds the durable key-value store (favorites,
//! feedback); the config directory holds `settings.toml`.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "EcoFly";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ECOFLY_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ECOFLY_CONFIG_DIR";

/// Returns the application data directory path.
///
/// # Resolution Order
///
/// 1. `ECOFLY_DATA_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific data directory:
///    - Linux: `~/.local/share/EcoFly/`
///    - macOS: `~/Library/Application Support/EcoFly/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\EcoFly\`
///
/// Returns `None` if the data directory cannot be determined (rare edge case).
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_DATA_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Platform default with app name
    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the application config directory path.
///
/// # Resolution Order
///
/// 1. `ECOFLY_CONFIG_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific config directory:
///    - Linux: `~/.config/EcoFly/`
///    - macOS: `~/Library/Application Support/EcoFly/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\EcoFly\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
