// SPDX-License-Identifier: MPL-2.0
use super::translations::{TranslationTable, UiTranslations};
use super::Language;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Fluent bundles for every embedded `.ftl` file.
pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl I18n {
    pub fn new() -> Self {
        let mut bundles = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(file = filename, "ignoring translation file with invalid locale");
                continue;
            };
            let Some(language) = Language::from_tag(locale.language.as_str()) else {
                tracing::debug!(%locale, "no UI language for translation file");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((partial, errors)) => {
                    tracing::warn!(file = filename, errors = errors.len(), "translation file has syntax errors");
                    partial
                }
            };

            let mut bundle = FluentBundle::new(vec![locale]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(file = filename, errors = errors.len(), "duplicate translation keys");
            }
            bundles.insert(language, bundle);
        }

        Self { bundles }
    }

    /// Looks up `key` in the bundle for `language`.
    pub fn tr(&self, language: Language, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&language) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }

    /// Resolves every label of both languages into a static table.
    pub fn translation_table(&self) -> TranslationTable {
        TranslationTable::new(
            UiTranslations::from_lookup(|key| self.tr(Language::En, key)),
            UiTranslations::from_lookup(|key| self.tr(Language::Es, key)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_languages_are_embedded() {
        let i18n = I18n::new();
        assert!(i18n.bundles.contains_key(&Language::En));
        assert!(i18n.bundles.contains_key(&Language::Es));
    }

    #[test]
    fn tr_resolves_per_language() {
        let i18n = I18n::new();
        assert_eq!(i18n.tr(Language::En, "app-title"), "Online Recipes");
        assert_eq!(i18n.tr(Language::Es, "app-title"), "Recetas Online");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new();
        assert_eq!(i18n.tr(Language::En, "no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn every_label_is_translated() {
        let table = I18n::new().translation_table();
        for language in [Language::En, Language::Es] {
            for label in table.get(language).labels() {
                assert!(!label.starts_with("MISSING"), "{language:?}: {label}");
            }
        }
    }
}
