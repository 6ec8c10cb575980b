// SPDX-License-Identifier: MPL-2.0
//! Recipe detail screen with cooking mode.
//!
//! The screen watches its recipe in the [`RecipeStore`], so a recipe that
//! arrives with a later page, or a re-localized copy after a language
//! switch, replaces what is shown. An identifier the collection does not
//! hold ends in an explicit not-found state. In remote modes it is looked
//! up over the network first, and the screen shows a pending state
//! meanwhile.

use crate::i18n::UiTranslations;
use crate::reactive::Derived;
use crate::recipe::{Recipe, RecipeDetails, RecipeId, RecipeStore};
use crate::storage::SharedStorage;
use crate::ui::cooking::CookingSession;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::thumbnails::ThumbnailCache;
use iced::{
    alignment::Horizontal,
    font::Weight,
    widget::{button, container, image, scrollable, text, Column, Container, Row},
    ContentFit, Element, Font, Length,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Recipe),
    /// A remote lookup is in flight.
    Pending,
    NotFound,
}

#[derive(Debug)]
pub struct State {
    recipe_id: RecipeId,
    watched: Derived<Option<Recipe>>,
    seen_version: u64,
    resolution: Resolution,
    cooking: CookingSession,
}

impl State {
    /// Resolves `recipe_id` against `store` and keeps watching it.
    ///
    /// With `remote_lookup`, a miss starts as [`Resolution::Pending`] and
    /// the caller is expected to start a lookup.
    pub fn new(
        recipe_id: RecipeId,
        store: &RecipeStore,
        remote_lookup: bool,
        storage: SharedStorage,
    ) -> Self {
        let watched = store.watch_recipe(recipe_id.clone());
        let resolution = match watched.get() {
            Some(recipe) => Resolution::Found(recipe),
            None if remote_lookup => Resolution::Pending,
            None => Resolution::NotFound,
        };
        let cooking = CookingSession::load(recipe_id.clone(), storage);
        Self {
            recipe_id,
            seen_version: watched.version(),
            watched,
            resolution,
            cooking,
        }
    }

    #[must_use]
    pub fn recipe_id(&self) -> &RecipeId {
        &self.recipe_id
    }

    #[must_use]
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    #[must_use]
    pub fn recipe(&self) -> Option<&Recipe> {
        match &self.resolution {
            Resolution::Found(recipe) => Some(recipe),
            _ => None,
        }
    }

    #[must_use]
    pub fn cooking(&self) -> &CookingSession {
        &self.cooking
    }

    /// Settles a pending lookup. Ignored unless a lookup is pending.
    pub fn finish_lookup(&mut self, recipe: Option<Recipe>) {
        if self.resolution != Resolution::Pending {
            return;
        }
        self.resolution = match recipe {
            Some(recipe) if recipe.id == self.recipe_id => Resolution::Found(recipe),
            _ => Resolution::NotFound,
        };
    }

    /// Picks up the collection's copy of the recipe after the store
    /// changed. A recipe that left the collection stays on screen.
    ///
    /// Returns whether the shown recipe changed.
    pub fn sync(&mut self) -> bool {
        let version = self.watched.version();
        if version == self.seen_version {
            return false;
        }
        self.seen_version = version;

        match self.watched.get() {
            Some(recipe) if self.recipe() != Some(&recipe) => {
                self.resolution = Resolution::Found(recipe);
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    ToggleCookingMode,
    ToggleIngredient(usize),
    ToggleStep(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Back,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Back => Event::Back,
        Message::ToggleCookingMode => {
            state.cooking.toggle_cooking_mode();
            Event::None
        }
        Message::ToggleIngredient(index) => {
            state.cooking.toggle_ingredient(index);
            Event::None
        }
        Message::ToggleStep(index) => {
            state.cooking.toggle_step(index);
            Event::None
        }
    }
}

/// Contextual data needed to render the detail screen.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub translations: &'a UiTranslations,
    pub thumbnails: &'a ThumbnailCache,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back = button(text(format!("← {}", ctx.translations.back_to_recipes)).size(typography::BODY))
        .style(styles::button::primary)
        .on_press(Message::Back);

    let body: Element<'a, Message> = match &ctx.state.resolution {
        Resolution::Found(recipe) => recipe_body(&ctx, recipe),
        Resolution::Pending => text(ctx.translations.loading.as_str())
            .size(typography::BODY)
            .into(),
        Resolution::NotFound => text(ctx.translations.recipe_not_found.as_str())
            .size(typography::TITLE_MD)
            .into(),
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(back)
        .push(body);

    scrollable(Container::new(content).center_x(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn recipe_body<'a>(ctx: &ViewContext<'a>, recipe: &'a Recipe) -> Element<'a, Message> {
    let t = ctx.translations;
    let cooking = ctx.state.cooking();

    let mut column = Column::new().spacing(spacing::MD);

    if let Some(handle) = ctx.thumbnails.peek(&recipe.image) {
        column = column.push(
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::HERO_IMAGE_HEIGHT))
                .content_fit(ContentFit::Cover),
        );
    }

    column = column
        .push(
            text(recipe.name.as_str())
                .size(typography::TITLE_LG)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                }),
        )
        .push(text(format!("{} · {}", recipe.cuisine, recipe.category)).size(typography::BODY));

    if let Some(details) = recipe.details {
        column = column.push(details_row(t, details));
    }

    if let Some(tags) = recipe.tags.as_ref().filter(|tags| !tags.is_empty()) {
        column = column.push(
            text(format!("{}: {}", t.tags, tags.join(", "))).size(typography::CAPTION),
        );
    }

    if let Some(url) = &recipe.video_url {
        column = column.push(text(format!("{}: {}", t.watch_video, url)).size(typography::CAPTION));
    }

    let cooking_label = if cooking.is_active() {
        t.exit_cooking_mode.as_str()
    } else {
        t.start_cooking.as_str()
    };
    column = column.push(
        button(text(cooking_label).size(typography::BODY))
            .style(styles::button::primary)
            .on_press(Message::ToggleCookingMode),
    );

    column = column
        .push(section(
            t.ingredients.as_str(),
            checklist(
                &recipe.ingredients,
                cooking.is_active(),
                |i| cooking.is_ingredient_checked(i),
                Message::ToggleIngredient,
                false,
            ),
        ))
        .push(section(
            t.instructions.as_str(),
            instructions(t, recipe, ctx.state),
        ));

    column.into()
}

fn details_row<'a>(t: &'a UiTranslations, details: RecipeDetails) -> Element<'a, Message> {
    let fact = |label: &str, value: String| -> Element<'a, Message> {
        container(
            Column::new()
                .align_x(Horizontal::Center)
                .push(text(label.to_string()).size(typography::CAPTION))
                .push(text(value).size(typography::BODY)),
        )
        .padding([spacing::XS, spacing::SM])
        .style(styles::container::badge)
        .into()
    };

    Row::new()
        .spacing(spacing::SM)
        .push(fact(&t.prep_time, format!("{} {}", details.prep_time_minutes, t.minutes)))
        .push(fact(&t.cook_time, format!("{} {}", details.cook_time_minutes, t.minutes)))
        .push(fact(&t.servings, details.servings.to_string()))
        .push(fact(&t.difficulty, details.difficulty.label(t).to_string()))
        .into()
}

fn section<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(spacing::SM)
            .push(text(title).size(typography::TITLE_MD))
            .push(body),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn instructions<'a>(
    t: &'a UiTranslations,
    recipe: &'a Recipe,
    state: &'a State,
) -> Element<'a, Message> {
    let cooking = state.cooking();
    let mut column = Column::new().spacing(spacing::XS);

    if cooking.is_active() {
        column = column.push(
            text(format!(
                "{}: {} / {}",
                t.steps_completed,
                cooking.steps_completed(),
                recipe.instructions.len()
            ))
            .size(typography::CAPTION)
            .color(palette::SUCCESS_500),
        );
    }

    column
        .push(checklist(
            &recipe.instructions,
            cooking.is_active(),
            |i| cooking.is_step_checked(i),
            Message::ToggleStep,
            true,
        ))
        .into()
}

/// Plain list outside cooking mode, toggleable rows inside it.
fn checklist<'a>(
    items: &'a [String],
    active: bool,
    is_checked: impl Fn(usize) -> bool,
    on_toggle: fn(usize) -> Message,
    numbered: bool,
) -> Element<'a, Message> {
    items
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::XXS), |column, (index, item)| {
            let prefix = if numbered {
                format!("{}.", index + 1)
            } else {
                "•".to_string()
            };
            if active {
                let checked = is_checked(index);
                let mark = if checked { "☑" } else { "☐" };
                column.push(
                    button(text(format!("{mark} {prefix} {item}")).size(typography::BODY))
                        .width(Length::Fill)
                        .style(styles::button::checklist(checked))
                        .on_press(on_toggle(index)),
                )
            } else {
                column.push(text(format!("{prefix} {item}")).size(typography::BODY))
            }
        })
        .into()
}
