// SPDX-License-Identifier: MPL-2.0
//! Synchronous key-value storage for small pieces of UI state.
//!
//! Values are plain strings, mirroring a browser's local storage. The
//! stores that use it (language, theme, cooking progress) own the format
//! of their values; this layer only moves strings in and out.
//!
//! Two backends exist:
//! - [`FileStorage`] keeps every entry in a CBOR map in the app data
//!   directory and writes through on each mutation.
//! - [`MemoryStorage`] keeps entries in memory only (tests, and the
//!   fallback when the data directory is unusable).

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::rc::Rc;

/// Key holding the preferred UI language tag.
pub const LANGUAGE_KEY: &str = "preferred-language";

/// Key holding the preferred theme tag.
pub const THEME_KEY: &str = "app-theme";

/// Prefix of the per-recipe cooking progress keys.
pub const COOKING_PROGRESS_PREFIX: &str = "cooking-progress-";

/// Returns the storage key for a recipe's cooking progress.
#[must_use]
pub fn cooking_progress_key(recipe_id: &str) -> String {
    format!("{COOKING_PROGRESS_PREFIX}{recipe_id}")
}

/// String key-value store with interior mutability.
///
/// Access is assumed to always succeed from the caller's point of view;
/// backends log their own failures.
pub trait LocalStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Handle shared between the stores that persist state.
pub type SharedStorage = Rc<dyn LocalStorage>;
