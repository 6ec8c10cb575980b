// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Labels come from embedded Fluent files and are resolved once into a
//! [`TranslationTable`]. The [`LanguageStore`] holds the active language,
//! persists it under [`LANGUAGE_KEY`](crate::storage::LANGUAGE_KEY) and
//! exposes the matching labels as a derived view.
//!
//! # Language resolution at startup
//!
//! 1. `--lang` CLI argument (applied for the session, not persisted)
//! 2. Stored `preferred-language` value, if it is a known tag
//! 3. `[general] default_language` from the config (`en` by default)

pub mod fluent;
pub mod translations;

pub use translations::{TranslationTable, UiTranslations};

use crate::reactive::{Derived, Signal, Subscription};
use crate::storage::{SharedStorage, LANGUAGE_KEY};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// The two supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    /// Tag used in storage and on the command line.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Parses a tag. Anything but `en` or `es` is rejected.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }
}

pub struct LanguageStore {
    language: Signal<Language>,
    translations: Derived<UiTranslations>,
    storage: SharedStorage,
}

impl std::fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageStore")
            .field("language", &self.language.get())
            .finish_non_exhaustive()
    }
}

impl LanguageStore {
    /// Restores the stored language, or uses `fallback` when nothing valid
    /// is stored.
    pub fn new(storage: SharedStorage, table: Rc<TranslationTable>, fallback: Language) -> Self {
        let stored = storage.get_item(LANGUAGE_KEY);
        let initial = match stored.as_deref().map(|tag| (tag, Language::from_tag(tag))) {
            Some((_, Some(language))) => language,
            Some((tag, None)) => {
                tracing::debug!(tag, "ignoring unknown stored language");
                fallback
            }
            None => fallback,
        };

        let language = Signal::new(initial);
        let translations = Derived::new(&language, move |language: &Language| {
            table.get(*language).clone()
        });

        Self {
            language,
            translations,
            storage,
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Switches language and persists the choice.
    pub fn set_language(&self, language: Language) {
        self.language.set(language);
        self.storage.set_item(LANGUAGE_KEY, language.tag());
    }

    pub fn toggle_language(&self) {
        self.set_language(self.language().toggled());
    }

    /// Switches language for this session only.
    pub fn apply_session_override(&self, language: Language) {
        self.language.set(language);
    }

    /// Labels for the active language.
    #[must_use]
    pub fn translations(&self) -> UiTranslations {
        self.translations.get()
    }

    /// Runs `callback` after every language change.
    pub fn subscribe(&self, callback: impl Fn(&Language) + 'static) -> Subscription {
        self.language.subscribe(callback)
    }
}
