// SPDX-License-Identifier: MPL-2.0
//! The process-wide recipe collection.
//!
//! [`RecipeStore`] owns the recipes as a [`Signal`] so views can derive
//! from it, plus the alphabetical pagination cursor. Network access goes
//! through the free `fetch_*` functions, which never fail: a request error
//! is logged and contributes nothing to the result.
//!
//! Pagination is split in two so the Iced update loop can run the request
//! as a task in between:
//!
//! ```text
//! begin_page() ──► Some(letter) ──► fetch_letter_page(letter) ──► finish_page(recipes)
//!      │
//!      └──► None   (a page is already in flight, or every letter was loaded)
//! ```

use super::client::RecipeSource;
use super::dataset::BundledDataset;
use super::meal_db::normalize_all;
use super::{Recipe, RecipeId};
use crate::i18n::Language;
use crate::reactive::{Derived, Signal, Subscription};
use futures_util::future::join_all;
use std::collections::HashSet;

/// Letters walked by the pagination cursor, in order.
pub const PAGE_LETTERS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

#[derive(Debug)]
pub struct RecipeStore {
    recipes: Signal<Vec<Recipe>>,
    cursor: usize,
    loading: bool,
    has_more: bool,
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeStore {
    /// An empty store positioned at the first page.
    pub fn new() -> Self {
        Self {
            recipes: Signal::new(Vec::new()),
            cursor: 0,
            loading: false,
            has_more: true,
        }
    }

    /// Snapshot of the collection.
    #[must_use]
    pub fn recipes(&self) -> Vec<Recipe> {
        self.recipes.get()
    }

    pub fn with_recipes<R>(&self, f: impl FnOnce(&[Recipe]) -> R) -> R {
        self.recipes.with(|recipes| f(recipes))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.with_recipes(<[Recipe]>::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a page request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether pagination can still produce recipes.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// The letter the next page will request.
    #[must_use]
    pub fn next_letter(&self) -> Option<char> {
        PAGE_LETTERS.get(self.cursor).copied()
    }

    /// Whether every letter page has been loaded. A collection installed
    /// with [`replace`](RecipeStore::replace) never counts as exhausted.
    #[must_use]
    pub fn pages_exhausted(&self) -> bool {
        self.cursor >= PAGE_LETTERS.len()
    }

    /// Replaces the collection with the bundled dataset in `language`.
    pub fn load_static(&mut self, dataset: &BundledDataset, language: Language) {
        self.replace(dataset.project(language));
    }

    /// Replaces the whole collection. Pagination is switched off and the
    /// cursor is left where it was.
    pub fn replace(&mut self, recipes: Vec<Recipe>) {
        self.loading = false;
        self.has_more = false;
        self.recipes.set(recipes);
    }

    /// Clears the collection and rewinds the cursor to `a`.
    pub fn reset_pagination(&mut self) {
        self.cursor = 0;
        self.loading = false;
        self.has_more = true;
        self.recipes.set(Vec::new());
    }

    /// Starts the next page load.
    ///
    /// Returns the letter to request, or `None` when a load is already in
    /// flight or every letter has been loaded. Nothing is queued.
    pub fn begin_page(&mut self) -> Option<char> {
        if self.loading || !self.has_more {
            return None;
        }
        let letter = self.next_letter()?;
        self.loading = true;
        Some(letter)
    }

    /// Completes the in-flight page load with its recipes.
    ///
    /// Recipes whose identifier is already held are skipped. Returns the
    /// number actually appended.
    pub fn finish_page(&mut self, page: Vec<Recipe>) -> usize {
        if !self.loading {
            tracing::debug!("ignoring page completion without a load in flight");
            return 0;
        }

        let mut appended = 0;
        self.recipes.update(|recipes| {
            let mut known: HashSet<RecipeId> =
                recipes.iter().map(|recipe| recipe.id.clone()).collect();
            for recipe in page {
                if known.insert(recipe.id.clone()) {
                    recipes.push(recipe);
                    appended += 1;
                }
            }
        });

        self.cursor += 1;
        self.loading = false;
        if self.cursor >= PAGE_LETTERS.len() {
            self.has_more = false;
            tracing::info!(total = self.len(), "all recipe pages loaded");
        }
        appended
    }

    /// Loads the next page from `source`. A no-op when [`begin_page`]
    /// declines.
    ///
    /// [`begin_page`]: RecipeStore::begin_page
    pub async fn load_more_recipes(&mut self, source: &dyn RecipeSource) -> usize {
        let Some(letter) = self.begin_page() else {
            return 0;
        };
        let page = fetch_letter_page(source, letter).await;
        self.finish_page(page)
    }

    /// The recipe with identifier `id`, if held.
    #[must_use]
    pub fn recipe_by_id(&self, id: &str) -> Option<Recipe> {
        self.recipes
            .with(|recipes| recipes.iter().find(|recipe| recipe.id.as_str() == id).cloned())
    }

    /// A view that tracks the recipe with identifier `id` as the collection
    /// changes. Holds `None` while the recipe is absent.
    pub fn watch_recipe(&self, id: RecipeId) -> Derived<Option<Recipe>> {
        Derived::new(&self.recipes, move |recipes: &Vec<Recipe>| {
            recipes.iter().find(|recipe| recipe.id == id).cloned()
        })
    }

    pub fn subscribe(&self, callback: impl Fn(&Vec<Recipe>) + 'static) -> Subscription {
        self.recipes.subscribe(callback)
    }
}

/// Issues `count` random requests at once and keeps every recipe that
/// arrived, in request order. Failed requests are dropped.
pub async fn fetch_random_batch(source: &dyn RecipeSource, count: usize) -> Vec<Recipe> {
    let requests = (0..count).map(|_| source.random());
    let results = join_all(requests).await;

    let mut failed = 0;
    let recipes: Vec<Recipe> = results
        .into_iter()
        .filter_map(|result| match result {
            Ok(records) => normalize_all(&records).into_iter().next(),
            Err(err) => {
                failed += 1;
                tracing::warn!(error = %err, "random recipe request failed");
                None
            }
        })
        .collect();

    tracing::info!(requested = count, received = recipes.len(), failed, "random batch complete");
    recipes
}

/// Recipes starting with `letter`, or nothing if the request fails.
pub async fn fetch_letter_page(source: &dyn RecipeSource, letter: char) -> Vec<Recipe> {
    match source.search_by_letter(letter).await {
        Ok(records) => normalize_all(&records),
        Err(err) => {
            tracing::warn!(%letter, error = %err, "letter page request failed");
            Vec::new()
        }
    }
}

/// Recipes matching `name`. No match and failure both yield an empty list.
pub async fn fetch_by_name(source: &dyn RecipeSource, name: &str) -> Vec<Recipe> {
    match source.search_by_name(name).await {
        Ok(records) => normalize_all(&records),
        Err(err) => {
            tracing::warn!(name, error = %err, "name search failed");
            Vec::new()
        }
    }
}

/// The recipe with identifier `id`, if the API knows it.
pub async fn fetch_by_id(source: &dyn RecipeSource, id: &RecipeId) -> Option<Recipe> {
    match source.lookup(id).await {
        Ok(records) => normalize_all(&records).into_iter().next(),
        Err(err) => {
            tracing::warn!(%id, error = %err, "recipe lookup failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: RecipeId::new(id),
            name: format!("Recipe {id}"),
            cuisine: String::new(),
            category: String::new(),
            image: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            tags: None,
            video_url: None,
            details: None,
        }
    }

    #[test]
    fn begin_page_guards_against_reentry() {
        let mut store = RecipeStore::new();
        assert_eq!(store.begin_page(), Some('a'));
        assert!(store.is_loading());
        assert_eq!(store.begin_page(), None);

        store.finish_page(vec![recipe("1")]);
        assert!(!store.is_loading());
        assert_eq!(store.begin_page(), Some('b'));
    }

    #[test]
    fn finish_page_skips_known_ids() {
        let mut store = RecipeStore::new();
        store.begin_page();
        store.finish_page(vec![recipe("1"), recipe("2")]);
        store.begin_page();
        let appended = store.finish_page(vec![recipe("2"), recipe("3"), recipe("3")]);

        assert_eq!(appended, 1);
        let ids: Vec<String> = store.recipes().iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn finish_page_without_begin_is_ignored() {
        let mut store = RecipeStore::new();
        assert_eq!(store.finish_page(vec![recipe("1")]), 0);
        assert!(store.is_empty());
        assert_eq!(store.next_letter(), Some('a'));
    }

    #[test]
    fn cursor_exhausts_after_last_letter() {
        let mut store = RecipeStore::new();
        for _ in PAGE_LETTERS {
            assert!(store.begin_page().is_some());
            store.finish_page(Vec::new());
        }
        assert!(!store.has_more());
        assert!(store.pages_exhausted());
        assert_eq!(store.begin_page(), None);
        assert_eq!(store.next_letter(), None);
    }

    #[test]
    fn replace_switches_pagination_off() {
        let mut store = RecipeStore::new();
        store.replace(vec![recipe("1")]);
        assert!(!store.has_more());
        assert!(!store.pages_exhausted());
        assert_eq!(store.begin_page(), None);

        store.reset_pagination();
        assert!(store.is_empty());
        assert_eq!(store.begin_page(), Some('a'));
    }

    #[test]
    fn lookup_by_id_returns_none_when_absent() {
        let mut store = RecipeStore::new();
        store.replace(vec![recipe("52772")]);
        assert_eq!(
            store.recipe_by_id("52772").map(|r| r.name),
            Some("Recipe 52772".to_string())
        );
        assert!(store.recipe_by_id("0").is_none());
    }

    #[test]
    fn watched_recipe_appears_when_loaded() {
        let mut store = RecipeStore::new();
        let watched = store.watch_recipe(RecipeId::new("3"));
        assert!(watched.get().is_none());

        store.begin_page();
        store.finish_page(vec![recipe("3")]);

        assert_eq!(watched.get().map(|r| r.id), Some(RecipeId::new("3")));
    }

    #[test]
    fn subscribers_see_appended_pages() {
        let mut store = RecipeStore::new();
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let _sub = store.subscribe(move |recipes| sink.set(recipes.len()));

        store.begin_page();
        store.finish_page(vec![recipe("1"), recipe("2")]);

        assert_eq!(seen.get(), 2);
    }
}
