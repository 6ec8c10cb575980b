// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file in the config directory.
//!
//! # Configuration Sections
//!
//! - `[general]` - Fallback display language
//! - `[recipes]` - Where recipes come from and how many to fetch
//! - `[list]` - Infinite-scroll tuning
//! - `[thumbnails]` - Image cache size
//!
//! User-facing preferences that change at runtime (language, theme,
//! cooking progress) are not stored here; they live in the key-value
//! storage. This file is only read at startup.
//!
//! # Examples
//!
//! ```no_run
//! use recipe_lens::config::{self, SourceMode};
//!
//! let (mut config, _warning) = config::load();
//! config.recipes.source = SourceMode::Random;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// How the recipe collection is populated at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMode {
    /// Bundled bilingual dataset, no network.
    Static,
    /// A fixed number of random recipes fetched in parallel.
    Random,
    /// Alphabetical pages loaded on scroll.
    #[default]
    Paginated,
}

impl std::str::FromStr for SourceMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(SourceMode::Static),
            "random" => Ok(SourceMode::Random),
            "paginated" => Ok(SourceMode::Paginated),
            other => Err(format!("unknown source mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Language used when no valid preference has been stored yet.
    #[serde(default)]
    pub default_language: Language,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipesConfig {
    #[serde(default)]
    pub source: SourceMode,

    /// Parallel requests issued in random mode.
    #[serde(default = "default_random_count")]
    pub random_count: usize,

    /// TheMealDB API root, without trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for RecipesConfig {
    fn default() -> Self {
        Self {
            source: SourceMode::default(),
            random_count: DEFAULT_RANDOM_COUNT,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl RecipesConfig {
    /// Random batch size clamped to the supported range.
    #[must_use]
    pub fn clamped_random_count(&self) -> usize {
        self.random_count.clamp(MIN_RANDOM_COUNT, MAX_RANDOM_COUNT)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListConfig {
    #[serde(default = "default_scroll_threshold_px")]
    pub scroll_threshold_px: f32,

    #[serde(default = "default_prefill_min_recipes")]
    pub prefill_min_recipes: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            prefill_min_recipes: DEFAULT_PREFILL_MIN_RECIPES,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThumbnailsConfig {
    #[serde(default = "default_thumbnail_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for ThumbnailsConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_THUMBNAIL_CACHE_CAPACITY,
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub recipes: RecipesConfig,

    #[serde(default)]
    pub list: ListConfig,

    #[serde(default)]
    pub thumbnails: ThumbnailsConfig,
}

fn default_random_count() -> usize {
    DEFAULT_RANDOM_COUNT
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_scroll_threshold_px() -> f32 {
    DEFAULT_SCROLL_THRESHOLD_PX
}

fn default_prefill_min_recipes() -> usize {
    DEFAULT_PREFILL_MIN_RECIPES
}

fn default_thumbnail_cache_capacity() -> usize {
    DEFAULT_THUMBNAIL_CACHE_CAPACITY
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (
                    Config::default(),
                    Some("config-load-error".to_string()),
                ),
            };
        }
    }
    (Config::default(), None)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                default_language: Language::Es,
            },
            recipes: RecipesConfig {
                source: SourceMode::Random,
                random_count: 8,
                api_base_url: "http://localhost:9000/api".to_string(),
            },
            list: ListConfig {
                scroll_threshold_px: 120.0,
                prefill_min_recipes: 4,
            },
            thumbnails: ThumbnailsConfig { cache_capacity: 10 },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_falls_back_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[recipes\nsource = 1")
            .expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("config-load-error"));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[recipes]\nsource = \"static\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");

        assert_eq!(loaded.recipes.source, SourceMode::Static);
        assert_eq!(loaded.recipes.random_count, DEFAULT_RANDOM_COUNT);
        assert_eq!(loaded.general.default_language, Language::En);
        assert_eq!(loaded.list, ListConfig::default());
    }

    #[test]
    fn random_count_is_clamped() {
        let mut recipes = RecipesConfig::default();
        recipes.random_count = 0;
        assert_eq!(recipes.clamped_random_count(), MIN_RANDOM_COUNT);
        recipes.random_count = 1_000;
        assert_eq!(recipes.clamped_random_count(), MAX_RANDOM_COUNT);
    }

    #[test]
    fn source_mode_parses_case_insensitively() {
        assert_eq!("Static".parse::<SourceMode>(), Ok(SourceMode::Static));
        assert_eq!("paginated".parse::<SourceMode>(), Ok(SourceMode::Paginated));
        assert!("sometimes".parse::<SourceMode>().is_err());
    }
}
