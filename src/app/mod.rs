// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the list and detail
//! screens.
//!
//! The `App` struct wires together the stores (language, theme, recipes),
//! the recipe source chosen at startup and the two screens. Every store
//! mutation happens inside `App::update`; network requests run as Iced
//! tasks and come back as messages.

pub mod message;
pub mod paths;
pub mod route;
mod update;
mod view;

pub use message::{Flags, Message};
pub use route::Route;

use crate::config::{self, Config, SourceMode};
use crate::i18n::fluent::I18n;
use crate::i18n::{Language, LanguageStore, UiTranslations};
use crate::reactive::Subscription;
use crate::recipe::{BundledDataset, MealDbClient, Recipe, RecipeSource, RecipeStore};
use crate::storage::{FileStorage, MemoryStorage, SharedStorage};
use crate::ui::recipe_list::LoadStatus;
use crate::ui::theming::{ThemeMode, ThemeStore};
use crate::ui::thumbnails::ThumbnailCache;
use crate::ui::{recipe_detail, recipe_list};
use iced::{window, Element, Task, Theme};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    config: Config,
    /// Source actually in use, after CLI overrides and fallbacks.
    mode: SourceMode,
    storage: SharedStorage,
    language: LanguageStore,
    translations: UiTranslations,
    language_changed: Rc<Cell<bool>>,
    _language_watch: Subscription,
    theme: ThemeStore,
    recipes: RecipeStore,
    /// Copy of the collection handed to the views, refreshed on the next
    /// sync after the store notifies.
    recipes_snapshot: Vec<Recipe>,
    recipes_changed: Rc<Cell<bool>>,
    _recipes_watch: Subscription,
    /// A random batch or name search is in flight.
    batch_loading: bool,
    dataset: Option<BundledDataset>,
    source: Option<Arc<dyn RecipeSource>>,
    images: Option<MealDbClient>,
    route: Route,
    list: recipe_list::State,
    detail: Option<recipe_detail::State>,
    thumbnails: ThumbnailCache,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.mode)
            .field("route", &self.route)
            .field("recipes", &self.recipes_snapshot.len())
            .finish_non_exhaustive()
    }
}

/// Collaborators the application talks to, replaceable in tests.
pub struct Services {
    pub storage: SharedStorage,
    /// Recipe API. `None` forces the bundled dataset.
    pub source: Option<Arc<dyn RecipeSource>>,
    /// Image downloads. `None` disables thumbnails.
    pub images: Option<MealDbClient>,
    pub system_theme: fn() -> ThemeMode,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 640;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

fn open_storage() -> SharedStorage {
    match FileStorage::open() {
        Some((storage, warning)) => {
            if let Some(warning) = warning {
                tracing::warn!(%warning, path = %storage.path().display(), "storage file unreadable, starting empty");
            }
            Rc::new(storage)
        }
        None => {
            tracing::warn!("no data directory available, preferences will not persist");
            Rc::new(MemoryStorage::new())
        }
    }
}

impl App {
    /// Initializes application state from CLI flags and on-disk settings.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (config, config_warning) = config::load();
        if let Some(key) = config_warning {
            tracing::warn!(%key, "using default configuration");
        }

        let images = match MealDbClient::new(&config.recipes.api_base_url) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!(error = %err, "failed to build HTTP client");
                None
            }
        };
        let source = images
            .clone()
            .map(|client| Arc::new(client) as Arc<dyn RecipeSource>);

        let services = Services {
            storage: open_storage(),
            source,
            images,
            system_theme: ThemeMode::from_system,
        };
        Self::with_services(config, flags, services)
    }

    /// Builds the application around explicit collaborators and returns the
    /// startup tasks.
    pub fn with_services(config: Config, flags: Flags, services: Services) -> (Self, Task<Message>) {
        let Services {
            storage,
            source,
            images,
            system_theme,
        } = services;

        let table = Rc::new(I18n::new().translation_table());
        let language = LanguageStore::new(
            Rc::clone(&storage),
            table,
            config.general.default_language,
        );
        if let Some(tag) = flags.lang.as_deref() {
            match Language::from_tag(tag) {
                Some(session) => language.apply_session_override(session),
                None => tracing::warn!(tag, "ignoring unsupported --lang value"),
            }
        }
        let language_changed = Rc::new(Cell::new(false));
        let changed = Rc::clone(&language_changed);
        let language_watch = language.subscribe(move |_| changed.set(true));

        let theme = ThemeStore::with_system_default(Rc::clone(&storage), system_theme);

        let requested = match flags.source.as_deref() {
            Some(raw) => raw.parse::<SourceMode>().unwrap_or_else(|err: String| {
                tracing::warn!(%err, "ignoring --source value");
                config.recipes.source
            }),
            None => config.recipes.source,
        };
        let (mode, source) = match (requested, source) {
            (SourceMode::Static, _) => (SourceMode::Static, None),
            (mode, Some(source)) => (mode, Some(source)),
            (mode, None) => {
                tracing::warn!(?mode, "recipe API unavailable, using bundled recipes");
                (SourceMode::Static, None)
            }
        };

        let dataset = if mode == SourceMode::Static {
            match BundledDataset::load() {
                Ok(dataset) => Some(dataset),
                Err(err) => {
                    tracing::error!(error = %err, "bundled recipes unavailable");
                    None
                }
            }
        } else {
            None
        };

        tracing::info!(?mode, language = language.language().tag(), "starting");

        let recipes = RecipeStore::new();
        let recipes_changed = Rc::new(Cell::new(true));
        let changed = Rc::clone(&recipes_changed);
        let recipes_watch = recipes.subscribe(move |_| changed.set(true));

        let mut app = App {
            translations: language.translations(),
            list: recipe_list::State::new(config.list.scroll_threshold_px),
            thumbnails: ThumbnailCache::new(config.thumbnails.cache_capacity),
            recipes_snapshot: Vec::new(),
            recipes,
            recipes_changed,
            _recipes_watch: recipes_watch,
            config,
            mode,
            storage,
            language,
            language_changed,
            _language_watch: language_watch,
            theme,
            batch_loading: false,
            dataset,
            source,
            images,
            route: Route::List,
            detail: None,
        };

        let search = flags
            .search
            .filter(|query| !query.trim().is_empty());
        let load = match (app.mode, search) {
            (SourceMode::Static, search) => {
                app.load_static();
                if let Some(query) = search {
                    app.list.set_query(query);
                }
                Task::none()
            }
            (_, Some(name)) => app.search_by_name(name),
            (SourceMode::Random, None) => app.load_random_batch(),
            (SourceMode::Paginated, None) => app.request_next_page(),
        };

        let route = flags.route.as_deref().map(Route::parse).unwrap_or_default();
        let navigate = app.navigate(route);
        let sync = app.sync();

        (app, Task::batch([load, navigate, sync]))
    }

    fn title(&self) -> String {
        let app_title = &self.translations.title;
        match (&self.route, self.detail.as_ref().and_then(|detail| detail.recipe())) {
            (Route::Recipe(_), Some(recipe)) => format!("{} - {}", recipe.name, app_title),
            _ => app_title.clone(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.mode().iced_theme()
    }

    fn load_status(&self) -> LoadStatus {
        LoadStatus {
            loading: self.recipes.is_loading() || self.batch_loading,
            has_more: self.recipes.has_more(),
        }
    }

    /// Pagination walked past `z`. A name search or random batch never
    /// reaches this state.
    fn end_of_pages(&self) -> bool {
        self.mode == SourceMode::Paginated && self.recipes.pages_exhausted()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            route: &self.route,
            translations: &self.translations,
            theme: self.theme.mode(),
            list: &self.list,
            detail: self.detail.as_ref(),
            recipes: &self.recipes_snapshot,
            thumbnails: &self.thumbnails,
            status: self.load_status(),
            end_of_pages: self.end_of_pages(),
        })
    }
}
