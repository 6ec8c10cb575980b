// SPDX-License-Identifier: MPL-2.0
//! Bundled bilingual recipe dataset.
//!
//! Each entry carries parallel English and Spanish fields. The active
//! language decides which side is projected into [`Recipe`]. Both sides
//! must be filled in: there is no fallback from one language to the other,
//! so an incomplete entry rejects the whole dataset at load time.

use super::{Difficulty, Recipe, RecipeDetails, RecipeId};
use crate::error::{Error, Result};
use crate::i18n::Language;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(RustEmbed)]
#[folder = "assets/data/"]
struct DataAsset;

const DATASET_FILE: &str = "recipes.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedRecipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(rename = "name_es")]
    pub name_es: String,
    pub cuisine: String,
    #[serde(rename = "cuisine_es")]
    pub cuisine_es: String,
    pub category: String,
    #[serde(rename = "category_es")]
    pub category_es: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub image: String,
    pub ingredients: Vec<String>,
    #[serde(rename = "ingredients_es")]
    pub ingredients_es: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(rename = "instructions_es")]
    pub instructions_es: Vec<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default, rename = "tags_es")]
    pub tags_es: Option<Vec<String>>,
}

impl LocalizedRecipe {
    fn validate(&self) -> std::result::Result<(), String> {
        let texts = [
            ("name", &self.name, &self.name_es),
            ("cuisine", &self.cuisine, &self.cuisine_es),
            ("category", &self.category, &self.category_es),
        ];
        for (field, en, es) in texts {
            if en.trim().is_empty() || es.trim().is_empty() {
                return Err(format!("missing {field} translation"));
            }
        }

        let lists = [
            ("ingredients", &self.ingredients, &self.ingredients_es),
            ("instructions", &self.instructions, &self.instructions_es),
        ];
        for (field, en, es) in lists {
            check_parallel(field, en, es)?;
            if en.is_empty() {
                return Err(format!("{field} is empty"));
            }
        }

        match (&self.tags, &self.tags_es) {
            (None, None) => Ok(()),
            (Some(en), Some(es)) => check_parallel("tags", en, es),
            _ => Err("tags present in only one language".to_string()),
        }
    }

    /// The recipe as seen in `language`.
    pub fn project(&self, language: Language) -> Recipe {
        let pick = |en: &String, es: &String| match language {
            Language::En => en.clone(),
            Language::Es => es.clone(),
        };
        let pick_list = |en: &Vec<String>, es: &Vec<String>| match language {
            Language::En => en.clone(),
            Language::Es => es.clone(),
        };

        Recipe {
            id: self.id.clone(),
            name: pick(&self.name, &self.name_es),
            cuisine: pick(&self.cuisine, &self.cuisine_es),
            category: pick(&self.category, &self.category_es),
            image: self.image.clone(),
            ingredients: pick_list(&self.ingredients, &self.ingredients_es),
            instructions: pick_list(&self.instructions, &self.instructions_es),
            tags: match language {
                Language::En => self.tags.clone(),
                Language::Es => self.tags_es.clone(),
            },
            video_url: None,
            details: Some(RecipeDetails {
                prep_time_minutes: self.prep_time,
                cook_time_minutes: self.cook_time,
                servings: self.servings,
                difficulty: self.difficulty,
            }),
        }
    }
}

// Parallel lists must line up so checked indices survive a language switch.
fn check_parallel(field: &str, en: &[String], es: &[String]) -> std::result::Result<(), String> {
    if en.len() != es.len() {
        return Err(format!(
            "{field} has {} English and {} Spanish entries",
            en.len(),
            es.len()
        ));
    }
    if en.iter().chain(es).any(|item| item.trim().is_empty()) {
        return Err(format!("{field} contains an empty entry"));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct BundledDataset {
    recipes: Vec<LocalizedRecipe>,
}

impl BundledDataset {
    /// Parses and validates the embedded dataset.
    pub fn load() -> Result<Self> {
        let file = DataAsset::get(DATASET_FILE)
            .ok_or_else(|| Error::Dataset(format!("{DATASET_FILE} is not embedded")))?;
        Self::from_json(&String::from_utf8_lossy(file.data.as_ref()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let recipes: Vec<LocalizedRecipe> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.id.clone()) {
                return Err(Error::Dataset(format!("duplicate recipe id {}", recipe.id)));
            }
            recipe
                .validate()
                .map_err(|reason| Error::Dataset(format!("recipe {}: {reason}", recipe.id)))?;
        }

        Ok(Self { recipes })
    }

    /// All recipes in `language`, in dataset order.
    pub fn project(&self, language: Language) -> Vec<Recipe> {
        self.recipes
            .iter()
            .map(|recipe| recipe.project(language))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
