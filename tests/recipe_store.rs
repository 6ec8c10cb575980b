// SPDX-License-Identifier: MPL-2.0
//! Recipe store behavior against a scripted recipe source.

use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;
use recipe_lens::error::FetchError;
use recipe_lens::recipe::client::FetchResult;
use recipe_lens::recipe::store::{self, PAGE_LETTERS};
use recipe_lens::recipe::{MealDbRecord, RecipeId, RecipeSource, RecipeStore};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

fn record(id: &str) -> MealDbRecord {
    MealDbRecord {
        id: Some(RecipeId::new(id)),
        name: Some(format!("Meal {id}")),
        instructions: Some("Mix.\r\nServe.".to_string()),
        ..Default::default()
    }
    .with_slot(1, "Rice", Some("1 cup"))
}

#[derive(Default)]
struct ScriptedSource {
    pages: HashMap<char, Vec<&'static str>>,
    failing_letters: HashSet<char>,
    failing_random: HashSet<usize>,
    known: Vec<&'static str>,
    random_calls: AtomicUsize,
    letter_calls: Mutex<Vec<char>>,
}

impl RecipeSource for ScriptedSource {
    fn random(&self) -> BoxFuture<'static, FetchResult> {
        let call = self.random_calls.fetch_add(1, Ordering::SeqCst);
        let result = if self.failing_random.contains(&call) {
            Err(FetchError::Network("connection reset".to_string()))
        } else {
            Ok(vec![record(&format!("r{call}"))])
        };
        future::ready(result).boxed()
    }

    fn search_by_letter(&self, letter: char) -> BoxFuture<'static, FetchResult> {
        if let Ok(mut calls) = self.letter_calls.lock() {
            calls.push(letter);
        }
        let result = if self.failing_letters.contains(&letter) {
            Err(FetchError::Status(503))
        } else {
            Ok(self
                .pages
                .get(&letter)
                .map(|ids| ids.iter().map(|id| record(id)).collect())
                .unwrap_or_default())
        };
        future::ready(result).boxed()
    }

    fn search_by_name(&self, name: &str) -> BoxFuture<'static, FetchResult> {
        let records = self
            .known
            .iter()
            .filter(|id| format!("Meal {id}").to_lowercase().contains(&name.to_lowercase()))
            .map(|id| record(id))
            .collect();
        future::ready(Ok(records)).boxed()
    }

    fn lookup(&self, id: &RecipeId) -> BoxFuture<'static, FetchResult> {
        let records = self
            .known
            .iter()
            .filter(|known| **known == id.as_str())
            .map(|known| record(known))
            .collect();
        future::ready(Ok(records)).boxed()
    }
}

fn ids(store: &RecipeStore) -> Vec<String> {
    store.recipes().iter().map(|r| r.id.to_string()).collect()
}

#[tokio::test]
async fn paging_walks_every_letter_then_stops() {
    let source = ScriptedSource {
        pages: HashMap::from([('a', vec!["1"]), ('z', vec!["26"])]),
        ..Default::default()
    };
    let mut store = RecipeStore::new();

    for _ in PAGE_LETTERS {
        store.load_more_recipes(&source).await;
    }
    assert!(!store.has_more());
    assert_eq!(ids(&store), vec!["1", "26"]);

    assert_eq!(store.load_more_recipes(&source).await, 0);
    let calls = source.letter_calls.lock().map(|c| c.clone()).unwrap_or_default();
    assert_eq!(calls, PAGE_LETTERS.to_vec());
}

#[tokio::test]
async fn overlapping_pages_are_deduplicated() {
    let source = ScriptedSource {
        pages: HashMap::from([('a', vec!["1", "2"]), ('b', vec!["2", "3"])]),
        ..Default::default()
    };
    let mut store = RecipeStore::new();

    assert_eq!(store.load_more_recipes(&source).await, 2);
    assert_eq!(store.load_more_recipes(&source).await, 1);
    assert_eq!(ids(&store), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn failed_page_still_advances_cursor() {
    let source = ScriptedSource {
        pages: HashMap::from([('b', vec!["2"])]),
        failing_letters: HashSet::from(['a']),
        ..Default::default()
    };
    let mut store = RecipeStore::new();

    assert_eq!(store.load_more_recipes(&source).await, 0);
    assert_eq!(store.next_letter(), Some('b'));
    assert!(!store.is_loading());

    store.load_more_recipes(&source).await;
    assert_eq!(ids(&store), vec!["2"]);
}

#[tokio::test]
async fn load_in_flight_is_not_repeated() {
    let source = ScriptedSource::default();
    let mut store = RecipeStore::new();

    assert_eq!(store.begin_page(), Some('a'));
    assert_eq!(store.load_more_recipes(&source).await, 0);
    let calls = source.letter_calls.lock().map(|c| c.len()).unwrap_or_default();
    assert_eq!(calls, 0);
}

#[tokio::test]
async fn random_batch_keeps_successes_in_request_order() {
    let source = ScriptedSource {
        failing_random: HashSet::from([3, 7, 11]),
        ..Default::default()
    };

    let recipes = store::fetch_random_batch(&source, 20).await;

    assert_eq!(recipes.len(), 17);
    let expected: Vec<String> = (0..20)
        .filter(|n| ![3, 7, 11].contains(n))
        .map(|n| format!("r{n}"))
        .collect();
    let got: Vec<String> = recipes.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(got, expected);
    assert_eq!(recipes[0].ingredients, vec!["1 cup Rice"]);
    assert_eq!(recipes[0].instructions, vec!["Mix.", "Serve."]);
}

#[tokio::test]
async fn name_search_without_match_is_empty() {
    let source = ScriptedSource {
        known: vec!["52772", "52773"],
        ..Default::default()
    };

    assert!(store::fetch_by_name(&source, "sushi").await.is_empty());
    assert_eq!(store::fetch_by_name(&source, "52772").await.len(), 1);
}

#[tokio::test]
async fn lookup_of_unknown_id_is_none() {
    let source = ScriptedSource {
        known: vec!["52772"],
        ..Default::default()
    };

    let found = store::fetch_by_id(&source, &RecipeId::new("52772")).await;
    assert_eq!(found.map(|r| r.name), Some("Meal 52772".to_string()));
    assert!(store::fetch_by_id(&source, &RecipeId::new("0")).await.is_none());
}
