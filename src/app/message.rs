// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Route;
use crate::error::FetchError;
use crate::recipe::{Recipe, RecipeId};
use crate::ui::{language_toggle, recipe_detail, recipe_list};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    List(recipe_list::Message),
    Detail(recipe_detail::Message),
    Header(language_toggle::Message),
    Navigate(Route),
    /// A letter page finished (failed requests arrive as empty pages).
    PageLoaded {
        letter: char,
        recipes: Vec<Recipe>,
    },
    /// A random batch or name search finished.
    BatchLoaded(Vec<Recipe>),
    LookupFinished {
        id: RecipeId,
        recipe: Option<Recipe>,
    },
    ThumbnailLoaded {
        url: String,
        result: Result<Vec<u8>, FetchError>,
    },
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Session language override (`en` or `es`), not persisted.
    pub lang: Option<String>,
    /// Initial route, e.g. `/recipe/52772`.
    pub route: Option<String>,
    /// Recipe source override: `static`, `random` or `paginated`.
    pub source: Option<String>,
    /// Start with a name search instead of the source's default listing.
    pub search: Option<String>,
    /// Optional data directory override (for storage.cbor).
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
