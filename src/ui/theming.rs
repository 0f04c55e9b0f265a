// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection with system detection.

use serde::{Deserialize, Serialize};

/// User-selectable theme mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the mode to an effective dark/light decision.
    ///
    /// `System` asks the OS; detection failure defaults to dark, the
    /// mode the product photography is staged for.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Next mode for the navbar toggle: light → dark → system → light.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    /// Glyph shown on the navbar toggle button.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            ThemeMode::Light => "☀",
            ThemeMode::Dark => "☾",
            ThemeMode::System => "◐",
        }
    }
}
