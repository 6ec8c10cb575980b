// SPDX-License-Identifier: MPL-2.0
//! Recipe data: the internal model, its sources and the reactive store.
//!
//! - [`meal_db`] decodes TheMealDB records and normalizes them
//! - [`client`] fetches records over HTTP behind the [`RecipeSource`] trait
//! - [`dataset`] holds the bundled bilingual recipes
//! - [`store`] owns the recipe collection and the pagination cursor

pub mod client;
pub mod dataset;
pub mod meal_db;
pub mod store;

pub use client::{MealDbClient, RecipeSource};
pub use dataset::BundledDataset;
pub use meal_db::{MealDbRecord, MealDbResponse};
pub use store::RecipeStore;

use crate::i18n::UiTranslations;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Recipe identifier.
///
/// TheMealDB ids are strings, bundled ids are numbers. Both are kept in
/// their textual form so route parameters compare by string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for RecipeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecipeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => RecipeId::from(n),
            Raw::Text(s) => RecipeId(s.trim().to_string()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self, translations: &UiTranslations) -> &str {
        match self {
            Difficulty::Easy => &translations.easy,
            Difficulty::Medium => &translations.medium,
            Difficulty::Hard => &translations.hard,
        }
    }
}

/// Preparation facts only the bundled dataset provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeDetails {
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
}

/// A recipe as the views consume it. Built once per fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub cuisine: String,
    pub category: String,
    pub image: String,
    /// Combined "measurement ingredient" lines, in source order.
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tags: Option<Vec<String>>,
    pub video_url: Option<String>,
    pub details: Option<RecipeDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_compare_equal() {
        let from_number: RecipeId = serde_json::from_str("52772").expect("number id");
        let from_text: RecipeId = serde_json::from_str("\"52772\"").expect("text id");
        assert_eq!(from_number, from_text);
        assert_eq!(from_number.as_str(), "52772");
    }

    #[test]
    fn difficulty_uses_translated_label() {
        let labels = UiTranslations {
            easy: "Fácil".to_string(),
            ..UiTranslations::default()
        };
        assert_eq!(Difficulty::Easy.label(&labels), "Fácil");
    }
}
