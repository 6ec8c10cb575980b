// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection, persisted under
//! [`THEME_KEY`](crate::storage::THEME_KEY).
//!
//! Without a stored choice the initial mode follows the operating system
//! preference reported by `dark-light`, and falls back to light when the
//! preference cannot be detected.

use crate::reactive::Signal;
use crate::storage::{SharedStorage, THEME_KEY};
use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Operating system preference.
    #[must_use]
    pub fn from_system() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}

pub struct ThemeStore {
    mode: Signal<ThemeMode>,
    storage: SharedStorage,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode.get())
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    pub fn new(storage: SharedStorage) -> Self {
        Self::with_system_default(storage, ThemeMode::from_system)
    }

    /// Like [`ThemeStore::new`] with an injectable system preference.
    pub fn with_system_default(storage: SharedStorage, system: impl FnOnce() -> ThemeMode) -> Self {
        let stored = storage
            .get_item(THEME_KEY)
            .and_then(|tag| ThemeMode::from_tag(&tag));
        let initial = stored.unwrap_or_else(system);

        Self {
            mode: Signal::new(initial),
            storage,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn set_theme(&self, mode: ThemeMode) {
        self.mode.set(mode);
        self.storage.set_item(THEME_KEY, mode.tag());
    }

    pub fn toggle_theme(&self) {
        self.set_theme(self.mode().toggled());
    }
}
