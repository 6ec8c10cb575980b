// SPDX-License-Identifier: MPL-2.0
//! TheMealDB record shape and its normalization into [`Recipe`].
//!
//! The API spreads ingredients over twenty numbered field pairs
//! (`strIngredient1`/`strMeasure1` … `strIngredient20`/`strMeasure20`).
//! Pairs are sparse: empty or null ingredient slots are skipped, and a
//! measurement may be missing for a present ingredient.

use super::{Recipe, RecipeId};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Number of ingredient/measure slot pairs in a record.
pub const INGREDIENT_SLOTS: usize = 20;

/// Response envelope of every endpoint. `meals` is `null` on no match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealDbResponse {
    #[serde(default)]
    pub meals: Option<Vec<MealDbRecord>>,
}

impl MealDbResponse {
    pub fn into_records(self) -> Vec<MealDbRecord> {
        self.meals.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MealDbRecord {
    #[serde(rename = "idMeal")]
    pub id: Option<RecipeId>,
    #[serde(rename = "strMeal")]
    pub name: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strTags")]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    /// Every other field, including the numbered slots.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl MealDbRecord {
    /// Ingredient text of slot `index` (1-based), if present.
    pub fn ingredient(&self, index: usize) -> Option<&str> {
        self.text_field(&format!("strIngredient{index}"))
    }

    /// Measurement text of slot `index` (1-based), if present.
    pub fn measure(&self, index: usize) -> Option<&str> {
        self.text_field(&format!("strMeasure{index}"))
    }

    /// Fills slot `index` (1-based).
    #[must_use]
    pub fn with_slot(mut self, index: usize, ingredient: &str, measure: Option<&str>) -> Self {
        self.fields.insert(
            format!("strIngredient{index}"),
            Value::String(ingredient.to_string()),
        );
        self.fields.insert(
            format!("strMeasure{index}"),
            measure.map_or(Value::Null, |m| Value::String(m.to_string())),
        );
        self
    }

    fn text_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Builds the internal recipe.
    pub fn normalize(&self) -> Recipe {
        Recipe {
            id: self.id.clone().unwrap_or_else(|| RecipeId::new("")),
            name: self.name.clone().unwrap_or_default(),
            cuisine: self.area.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            image: self.thumbnail.clone().unwrap_or_default(),
            ingredients: self.combined_ingredients(),
            instructions: split_instructions(self.instructions.as_deref().unwrap_or_default()),
            tags: self.tags.as_deref().and_then(split_tags),
            video_url: self
                .youtube
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
            details: None,
        }
    }

    fn combined_ingredients(&self) -> Vec<String> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|index| {
                let ingredient = self.ingredient(index)?.trim();
                if ingredient.is_empty() {
                    return None;
                }
                let measure = self.measure(index).map(str::trim).unwrap_or_default();
                Some(if measure.is_empty() {
                    ingredient.to_string()
                } else {
                    format!("{measure} {ingredient}")
                })
            })
            .collect()
    }
}

/// Splits free text into trimmed, non-empty lines.
pub fn split_instructions(text: &str) -> Vec<String> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_tags(raw: &str) -> Option<Vec<String>> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Normalizes a batch, dropping records without an identifier.
pub fn normalize_all(records: &[MealDbRecord]) -> Vec<Recipe> {
    records
        .iter()
        .map(MealDbRecord::normalize)
        .filter(|recipe| {
            if recipe.id.is_empty() {
                tracing::debug!(name = %recipe.name, "dropping record without idMeal");
                false
            } else {
                true
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERIYAKI: &str = r#"{
        "idMeal": "52772",
        "strMeal": "Teriyaki Chicken Casserole",
        "strArea": "Japanese",
        "strCategory": "Chicken",
        "strInstructions": "Preheat oven to 350 F.\r\n\r\n  Combine soy sauce and sugar.  \nBake for 35 minutes.",
        "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
        "strTags": "Meat, Casserole",
        "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s",
        "strIngredient1": "soy sauce",
        "strMeasure1": "3/4 cup",
        "strIngredient2": " water ",
        "strMeasure2": "",
        "strIngredient3": "",
        "strMeasure3": "1 tbsp",
        "strIngredient4": "brown sugar",
        "strMeasure4": null,
        "strIngredient5": null,
        "strSource": null,
        "dateModified": null
    }"#;

    fn teriyaki() -> MealDbRecord {
        serde_json::from_str(TERIYAKI).expect("valid record")
    }

    #[test]
    fn maps_scalar_fields() {
        let recipe = teriyaki().normalize();
        assert_eq!(recipe.id.as_str(), "52772");
        assert_eq!(recipe.name, "Teriyaki Chicken Casserole");
        assert_eq!(recipe.cuisine, "Japanese");
        assert_eq!(recipe.category, "Chicken");
        assert!(recipe.image.ends_with(".jpg"));
        assert_eq!(
            recipe.video_url.as_deref(),
            Some("https://www.youtube.com/watch?v=4aZr5hZXP_s")
        );
        assert!(recipe.details.is_none());
    }

    #[test]
    fn ingredients_follow_slot_order_and_skip_empty_slots() {
        let recipe = teriyaki().normalize();
        assert_eq!(
            recipe.ingredients,
            vec!["3/4 cup soy sauce", "water", "brown sugar"]
        );
    }

    #[test]
    fn instructions_are_split_and_trimmed() {
        let recipe = teriyaki().normalize();
        assert_eq!(
            recipe.instructions,
            vec![
                "Preheat oven to 350 F.",
                "Combine soy sauce and sugar.",
                "Bake for 35 minutes."
            ]
        );
    }

    #[test]
    fn tags_are_split_and_trimmed() {
        let recipe = teriyaki().normalize();
        assert_eq!(
            recipe.tags,
            Some(vec!["Meat".to_string(), "Casserole".to_string()])
        );
    }

    #[test]
    fn absent_optional_fields_map_to_none() {
        let record: MealDbRecord =
            serde_json::from_str(r#"{"idMeal":"1","strMeal":"Plain","strTags":null,"strYoutube":""}"#)
                .expect("valid record");
        let recipe = record.normalize();
        assert!(recipe.tags.is_none());
        assert!(recipe.video_url.is_none());
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn null_meals_is_empty() {
        let response: MealDbResponse = serde_json::from_str(r#"{"meals":null}"#).expect("valid");
        assert!(response.into_records().is_empty());

        let response: MealDbResponse = serde_json::from_str("{}").expect("valid");
        assert!(response.into_records().is_empty());
    }

    #[test]
    fn ingredient_count_matches_non_empty_slots() {
        let mut record = MealDbRecord {
            id: Some(RecipeId::new("9")),
            ..MealDbRecord::default()
        };
        for index in 1..=INGREDIENT_SLOTS {
            let ingredient = if index % 3 == 0 { "  " } else { "salt" };
            record = record.with_slot(index, ingredient, Some("1 tsp"));
        }
        let expected = (1..=INGREDIENT_SLOTS).filter(|i| i % 3 != 0).count();
        assert_eq!(record.normalize().ingredients.len(), expected);
    }

    #[test]
    fn normalize_all_drops_records_without_id() {
        let records = vec![teriyaki(), MealDbRecord::default()];
        let recipes = normalize_all(&records);
        assert_eq!(recipes.len(), 1);
    }
}
