// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization using the Fluent localization
//! system. Translation files are embedded `.ftl` resources, one per
//! locale; the active locale is resolved from CLI flag, config file, or
//! OS locale, in that order, and can be switched at runtime.
//!
//! The store ships `pt-BR` (its native language) and `en-US` (the
//! fallback locale).

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const FALLBACK_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let res = FluentResource::try_new(
                            String::from_utf8_lossy(content.data.as_ref()).to_string(),
                        )
                        .expect("Failed to parse FTL file.");
                        let mut bundle = FluentBundle::new(vec![locale.clone()]);
                        // Interpolated values go into plain-text toasts and
                        // window titles; Unicode isolation marks would leak
                        // into them as visible garbage on some fonts.
                        bundle.set_use_isolating(false);
                        bundle.add_resource(res).expect("Failed to add resource.");
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }
        available_locales.sort_by_key(std::string::ToString::to_string);

        let default_locale: LanguageIdentifier = FALLBACK_LOCALE.parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Translates a message key with no arguments.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates a message key with string arguments
    /// (e.g. `$name` in `favorite-added`).
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    /// Translates a message key with one numeric `$count` argument, so
    /// plural categories select correctly.
    pub fn tr_count(&self, key: &str, count: usize) -> String {
        let mut fluent_args = FluentArgs::new();
        fluent_args.set("count", FluentValue::from(count as i64));
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.general.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use unic_langid::LanguageIdentifier;

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "pt-BR".parse().unwrap()];
        let lang = resolve_locale(Some("pt-BR".to_string()), &config, &available);
        assert_eq!(lang, Some("pt-BR".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("pt-BR".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "pt-BR".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("pt-BR".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_unknown_falls_through() {
        let mut config = Config::default();
        config.general.language = Some("xx-YY".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "pt-BR".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        // Config value is not available, so resolution is system dependent.
        if let Some(l) = lang {
            assert!(available.contains(&l));
        }
    }

    #[test]
    fn both_shipped_locales_are_loaded() {
        let i18n = I18n::default();
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"pt-BR".parse().unwrap()));
    }

    #[test]
    fn tr_resolves_keys_in_the_active_locale() {
        let mut config = Config::default();
        config.general.language = Some("pt-BR".to_string());
        let i18n = I18n::new(None, &config);
        assert_eq!(i18n.tr("nav-home"), "Início");
    }

    #[test]
    fn tr_reports_missing_keys() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn tr_with_args_interpolates_without_isolation_marks() {
        let mut config = Config::default();
        config.general.language = Some("pt-BR".to_string());
        let i18n = I18n::new(None, &config);

        let text = i18n.tr_with_args("favorite-added", &[("name", "EcoBag Lana Del Rey")]);
        assert_eq!(text, "EcoBag Lana Del Rey adicionado aos favoritos");
    }

    #[test]
    fn tr_count_selects_plural_categories() {
        let mut config = Config::default();
        config.general.language = Some("pt-BR".to_string());
        let i18n = I18n::new(None, &config);

        assert_eq!(i18n.tr_count("feedback-count", 1), "1 avaliação recebida");
        assert_eq!(i18n.tr_count("feedback-count", 3), "3 avaliações recebidas");
    }

    #[test]
    fn set_locale_ignores_unknown_locales() {
        let mut i18n = I18n::default();
        let before = i18n.current_locale().clone();
        i18n.set_locale("xx-YY".parse().unwrap());
        assert_eq!(i18n.current_locale(), &before);
    }
}
