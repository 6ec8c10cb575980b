// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers mutate the stores and return follow-up tasks. Store
//! subscriptions only raise flags; after every message [`App::sync`] folds
//! the flagged changes back into the state the views read and schedules
//! image downloads for whatever became visible.

use super::{App, Message, Route};
use crate::config::SourceMode;
use crate::recipe::{store, Recipe, RecipeId};
use crate::ui::language_toggle;
use crate::ui::recipe_detail::{self, Resolution};
use crate::ui::recipe_list::{self, filter_recipes};
use crate::ui::thumbnails::preview_url;
use iced::widget::image::Handle;
use iced::Task;
use std::rc::Rc;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::List(message) => self.handle_list_message(message),
            Message::Detail(message) => self.handle_detail_message(message),
            Message::Header(message) => {
                match message {
                    language_toggle::Message::ToggleLanguage => self.language.toggle_language(),
                    language_toggle::Message::ToggleTheme => self.theme.toggle_theme(),
                }
                Task::none()
            }
            Message::Navigate(route) => self.navigate(route),
            Message::PageLoaded { letter, recipes } => {
                let received = recipes.len();
                let appended = self.recipes.finish_page(recipes);
                tracing::debug!(%letter, received, appended, "recipe page loaded");
                self.prefill()
            }
            Message::BatchLoaded(recipes) => {
                self.batch_loading = false;
                tracing::debug!(count = recipes.len(), "recipe batch loaded");
                self.recipes.replace(recipes);
                Task::none()
            }
            Message::LookupFinished { id, recipe } => self.handle_lookup(&id, recipe),
            Message::ThumbnailLoaded { url, result } => {
                match result {
                    Ok(bytes) => self.thumbnails.insert(url, Handle::from_bytes(bytes)),
                    Err(err) => {
                        tracing::warn!(%url, error = %err, "image download failed");
                        self.thumbnails.fail(&url);
                    }
                }
                Task::none()
            }
        };

        let follow_up = self.sync();
        Task::batch([task, follow_up])
    }

    fn handle_list_message(&mut self, message: recipe_list::Message) -> Task<Message> {
        let status = self.load_status();
        match recipe_list::update(&mut self.list, message, status) {
            recipe_list::Event::None | recipe_list::Event::FilterChanged => self.request_images(),
            recipe_list::Event::LoadMore => {
                let page = self.request_next_page();
                Task::batch([page, self.request_images()])
            }
            recipe_list::Event::OpenRecipe(id) => self.navigate(Route::Recipe(id)),
        }
    }

    fn handle_detail_message(&mut self, message: recipe_detail::Message) -> Task<Message> {
        let Some(detail) = self.detail.as_mut() else {
            return Task::none();
        };
        match recipe_detail::update(detail, message) {
            recipe_detail::Event::None => Task::none(),
            recipe_detail::Event::Back => self.navigate(Route::List),
        }
    }

    fn handle_lookup(&mut self, id: &RecipeId, recipe: Option<Recipe>) -> Task<Message> {
        let Some(detail) = self.detail.as_mut() else {
            return Task::none();
        };
        if detail.recipe_id() != id {
            tracing::debug!(%id, "discarding lookup for a screen that was left");
            return Task::none();
        }
        detail.finish_lookup(recipe);
        self.request_images()
    }

    /// Switches screens. The list's scroll observer only runs while the list
    /// is shown.
    pub(super) fn navigate(&mut self, route: Route) -> Task<Message> {
        tracing::debug!(path = %route.path(), "navigating");
        self.route = route.clone();

        match route {
            Route::List => {
                self.detail = None;
                self.list.on_enter();
                self.request_images()
            }
            Route::Recipe(id) => {
                self.list.on_leave();
                let remote = self.mode != SourceMode::Static && self.source.is_some();
                let detail = recipe_detail::State::new(
                    id.clone(),
                    &self.recipes,
                    remote,
                    Rc::clone(&self.storage),
                );
                let pending = detail.resolution() == &Resolution::Pending;
                self.detail = Some(detail);
                if pending {
                    self.lookup(id)
                } else {
                    self.request_images()
                }
            }
        }
    }

    pub(super) fn load_static(&mut self) {
        match &self.dataset {
            Some(dataset) => self.recipes.load_static(dataset, self.language.language()),
            None => self.recipes.replace(Vec::new()),
        }
    }

    /// Starts the next alphabetical page, if pagination allows one.
    pub(super) fn request_next_page(&mut self) -> Task<Message> {
        if self.mode != SourceMode::Paginated {
            return Task::none();
        }
        let Some(source) = self.source.clone() else {
            return Task::none();
        };
        let Some(letter) = self.recipes.begin_page() else {
            return Task::none();
        };

        Task::perform(
            async move { store::fetch_letter_page(source.as_ref(), letter).await },
            move |recipes| Message::PageLoaded { letter, recipes },
        )
    }

    /// Keeps paging while the list is too short to scroll.
    fn prefill(&mut self) -> Task<Message> {
        if self.recipes.len() < self.config.list.prefill_min_recipes && self.recipes.has_more() {
            self.request_next_page()
        } else {
            Task::none()
        }
    }

    pub(super) fn load_random_batch(&mut self) -> Task<Message> {
        let Some(source) = self.source.clone() else {
            return Task::none();
        };
        let count = self.config.recipes.clamped_random_count();
        self.batch_loading = true;

        Task::perform(
            async move { store::fetch_random_batch(source.as_ref(), count).await },
            Message::BatchLoaded,
        )
    }

    pub(super) fn search_by_name(&mut self, name: String) -> Task<Message> {
        let Some(source) = self.source.clone() else {
            return Task::none();
        };
        self.batch_loading = true;

        Task::perform(
            async move { store::fetch_by_name(source.as_ref(), &name).await },
            Message::BatchLoaded,
        )
    }

    fn lookup(&mut self, id: RecipeId) -> Task<Message> {
        let Some(source) = self.source.clone() else {
            if let Some(detail) = self.detail.as_mut() {
                detail.finish_lookup(None);
            }
            return Task::none();
        };

        Task::perform(
            async move {
                let recipe = store::fetch_by_id(source.as_ref(), &id).await;
                (id, recipe)
            },
            |(id, recipe)| Message::LookupFinished { id, recipe },
        )
    }

    /// Downloads images for the recipes currently on screen that are neither
    /// cached nor already requested. Off-screen handles age out of the LRU.
    fn request_images(&mut self) -> Task<Message> {
        let Some(client) = self.images.clone() else {
            return Task::none();
        };

        let urls: Vec<String> = match &self.route {
            Route::List => {
                let filtered = filter_recipes(&self.recipes_snapshot, self.list.query());
                let visible = self.list.visible_cards(filtered.len());
                filtered[visible]
                    .iter()
                    .filter(|recipe| !recipe.image.is_empty())
                    .take(self.config.thumbnails.cache_capacity)
                    .map(|recipe| preview_url(&recipe.image))
                    .collect()
            }
            Route::Recipe(_) => self
                .detail
                .as_ref()
                .and_then(|detail| detail.recipe())
                .filter(|recipe| !recipe.image.is_empty())
                .map(|recipe| vec![recipe.image.clone()])
                .unwrap_or_default(),
        };

        let tasks: Vec<Task<Message>> = urls
            .into_iter()
            .filter(|url| self.thumbnails.request(url))
            .map(|url| {
                let download = client.fetch_image(url.clone());
                Task::perform(download, move |result| Message::ThumbnailLoaded {
                    url,
                    result,
                })
            })
            .collect();

        Task::batch(tasks)
    }

    /// Folds flagged store changes into the view-facing state.
    pub(super) fn sync(&mut self) -> Task<Message> {
        if self.language_changed.replace(false) {
            self.translations = self.language.translations();
            if self.mode == SourceMode::Static {
                self.load_static();
            }
        }

        let detail_changed = self.detail.as_mut().is_some_and(recipe_detail::State::sync);
        let recipes_changed = self.recipes_changed.replace(false);
        if recipes_changed {
            self.recipes_snapshot = self.recipes.recipes();
        }

        if recipes_changed || detail_changed {
            self.request_images()
        } else {
            Task::none()
        }
    }
}
