// SPDX-License-Identifier: MPL-2.0
//! Cooking mode: per-recipe checklist of ingredients and steps.
//!
//! Progress is stored as JSON under `cooking-progress-<id>`:
//!
//! ```json
//! { "checkedIngredients": [0, 2], "checkedSteps": [1] }
//! ```
//!
//! Stored progress is loaded when the session is created, even if cooking
//! mode is off, so the checklist is already restored when the user enters
//! it again. Changes are written only while cooking mode is on. Leaving
//! cooking mode forgets the progress.

use crate::recipe::RecipeId;
use crate::storage::{cooking_progress_key, SharedStorage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookingProgress {
    #[serde(default)]
    pub checked_ingredients: BTreeSet<usize>,
    #[serde(default)]
    pub checked_steps: BTreeSet<usize>,
}

impl CookingProgress {
    fn clear(&mut self) {
        self.checked_ingredients.clear();
        self.checked_steps.clear();
    }
}

pub struct CookingSession {
    recipe_id: RecipeId,
    active: bool,
    progress: CookingProgress,
    storage: SharedStorage,
}

impl std::fmt::Debug for CookingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookingSession")
            .field("recipe_id", &self.recipe_id)
            .field("active", &self.active)
            .field("progress", &self.progress)
            .finish_non_exhaustive()
    }
}

impl CookingSession {
    /// Creates the session for `recipe_id`, restoring stored progress.
    pub fn load(recipe_id: RecipeId, storage: SharedStorage) -> Self {
        let key = cooking_progress_key(recipe_id.as_str());
        let progress = match storage.get_item(&key) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::debug!(%key, error = %err, "discarding malformed cooking progress");
                CookingProgress::default()
            }),
            None => CookingProgress::default(),
        };

        Self {
            recipe_id,
            active: false,
            progress,
            storage,
        }
    }

    #[must_use]
    pub fn recipe_id(&self) -> &RecipeId {
        &self.recipe_id
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enters or leaves cooking mode.
    ///
    /// Leaving clears the checklist and deletes the stored progress.
    pub fn toggle_cooking_mode(&mut self) {
        if self.active {
            self.active = false;
            self.progress.clear();
            self.storage.remove_item(&self.key());
        } else {
            self.active = true;
        }
    }

    pub fn toggle_ingredient(&mut self, index: usize) {
        flip(&mut self.progress.checked_ingredients, index);
        self.persist();
    }

    pub fn toggle_step(&mut self, index: usize) {
        flip(&mut self.progress.checked_steps, index);
        self.persist();
    }

    #[must_use]
    pub fn is_ingredient_checked(&self, index: usize) -> bool {
        self.progress.checked_ingredients.contains(&index)
    }

    #[must_use]
    pub fn is_step_checked(&self, index: usize) -> bool {
        self.progress.checked_steps.contains(&index)
    }

    /// Number of checked steps.
    #[must_use]
    pub fn steps_completed(&self) -> usize {
        self.progress.checked_steps.len()
    }

    #[must_use]
    pub fn progress(&self) -> &CookingProgress {
        &self.progress
    }

    fn key(&self) -> String {
        cooking_progress_key(self.recipe_id.as_str())
    }

    fn persist(&self) {
        if !self.active {
            return;
        }
        match serde_json::to_string(&self.progress) {
            Ok(json) => self.storage.set_item(&self.key(), &json),
            Err(err) => tracing::warn!(error = %err, "failed to encode cooking progress"),
        }
    }
}

fn flip(set: &mut BTreeSet<usize>, index: usize) {
    if !set.remove(&index) {
        set.insert(index);
    }
}
