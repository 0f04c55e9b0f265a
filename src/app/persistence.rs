// SPDX-License-Identifier: MPL-2.0
//! Preference persistence logic.
//!
//! This module handles saving user preferences (language, theme) to the
//! config file when the user changes them through the navbar.

use crate::app::config;
use crate::i18n::I18n;
use crate::ui::theming::ThemeMode;
use unic_langid::LanguageIdentifier;

/// Applies the newly selected locale and persists it to config.
///
/// Guarded during tests to keep isolation: unit tests exercise the
/// locale switch by calling `I18n::set_locale` directly.
pub fn apply_language_change(i18n: &mut I18n, locale: LanguageIdentifier) {
    i18n.set_locale(locale.clone());

    if cfg!(test) {
        return;
    }

    let mut cfg = config::load();
    cfg.general.language = Some(locale.to_string());
    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }
}

/// Persists the selected theme mode to config.
pub fn apply_theme_change(theme_mode: ThemeMode) {
    if cfg!(test) {
        return;
    }

    let mut cfg = config::load();
    cfg.general.theme_mode = theme_mode;
    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }
}
