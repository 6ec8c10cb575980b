// SPDX-License-Identifier: MPL-2.0
use super::Language;

/// Every label the views need, resolved for one language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiTranslations {
    pub title: String,
    pub subtitle: String,
    pub back_to_recipes: String,
    pub ingredients: String,
    pub instructions: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: String,
    pub recipe_not_found: String,
    pub minutes: String,
    pub easy: String,
    pub medium: String,
    pub hard: String,
    pub start_cooking: String,
    pub exit_cooking_mode: String,
    pub search_placeholder: String,
    pub loading: String,
    pub no_results: String,
    pub no_more_recipes: String,
    pub watch_video: String,
    pub tags: String,
    pub steps_completed: String,
    pub theme_light: String,
    pub theme_dark: String,
    /// Label of the language button: the name of the *other* language.
    pub language_toggle: String,
}

impl UiTranslations {
    pub(crate) fn from_lookup(tr: impl Fn(&str) -> String) -> Self {
        Self {
            title: tr("app-title"),
            subtitle: tr("app-subtitle"),
            back_to_recipes: tr("back-to-recipes"),
            ingredients: tr("ingredients"),
            instructions: tr("instructions"),
            prep_time: tr("prep-time"),
            cook_time: tr("cook-time"),
            servings: tr("servings"),
            difficulty: tr("difficulty"),
            recipe_not_found: tr("recipe-not-found"),
            minutes: tr("minutes"),
            easy: tr("difficulty-easy"),
            medium: tr("difficulty-medium"),
            hard: tr("difficulty-hard"),
            start_cooking: tr("start-cooking"),
            exit_cooking_mode: tr("exit-cooking-mode"),
            search_placeholder: tr("search-placeholder"),
            loading: tr("loading"),
            no_results: tr("no-results"),
            no_more_recipes: tr("no-more-recipes"),
            watch_video: tr("watch-video"),
            tags: tr("tags"),
            steps_completed: tr("steps-completed"),
            theme_light: tr("theme-light"),
            theme_dark: tr("theme-dark"),
            language_toggle: tr("language-toggle"),
        }
    }

    #[cfg(test)]
    pub(crate) fn labels(&self) -> Vec<&str> {
        vec![
            &self.title,
            &self.subtitle,
            &self.back_to_recipes,
            &self.ingredients,
            &self.instructions,
            &self.prep_time,
            &self.cook_time,
            &self.servings,
            &self.difficulty,
            &self.recipe_not_found,
            &self.minutes,
            &self.easy,
            &self.medium,
            &self.hard,
            &self.start_cooking,
            &self.exit_cooking_mode,
            &self.search_placeholder,
            &self.loading,
            &self.no_results,
            &self.no_more_recipes,
            &self.watch_video,
            &self.tags,
            &self.steps_completed,
            &self.theme_light,
            &self.theme_dark,
            &self.language_toggle,
        ]
    }
}

/// The fixed language → labels mapping. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    en: UiTranslations,
    es: UiTranslations,
}

impl TranslationTable {
    pub fn new(en: UiTranslations, es: UiTranslations) -> Self {
        Self { en, es }
    }

    #[must_use]
    pub fn get(&self, language: Language) -> &UiTranslations {
        match language {
            Language::En => &self.en,
            Language::Es => &self.es,
        }
    }
}
