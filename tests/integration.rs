// SPDX-License-Identifier: MPL-2.0
use ecofly::app::config::{self, Config};
use ecofly::i18n::I18n;
use ecofly::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to pt-BR
    let mut brazilian_config = Config::default();
    brazilian_config.general.language = Some("pt-BR".to_string());
    config::save_to_path(&brazilian_config, &temp_config_file_path)
        .expect("Failed to write pt-BR config file");

    // Load i18n with pt-BR config
    let loaded_brazilian_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load pt-BR config from path");
    let i18n_pt = I18n::new(None, &loaded_brazilian_config);
    assert_eq!(i18n_pt.current_locale().to_string(), "pt-BR");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_lang_overrides_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    cfg.general.language = Some("en-US".to_string());
    config::save_to_path(&cfg, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(Some("pt-BR".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "pt-BR");
}

#[test]
fn test_theme_mode_round_trips_via_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    cfg.general.theme_mode = ThemeMode::Dark;
    config::save_to_path(&cfg, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
}
