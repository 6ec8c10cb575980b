// SPDX-License-Identifier: MPL-2.0
//! Recipe list screen: search box, card grid and infinite scroll.
//!
//! Filtering works on the recipes already loaded and never fetches.
//! Loading the next page is driven by a [`NearBottomObserver`] that the
//! application arms when the list becomes visible and disarms when it
//! leaves, so scroll positions reported while another screen is shown
//! cannot trigger a load.
//!
//! Cards have a fixed height, so the last reported scroll position is
//! enough to tell which cards are on screen ([`State::visible_cards`]).

use crate::i18n::UiTranslations;
use crate::recipe::{Recipe, RecipeId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::thumbnails::{preview_url, ThumbnailCache};
use iced::{
    alignment::Horizontal,
    widget::{
        button, container, image, scrollable::Viewport, text, text_input, Column, Container,
        Id, Row, Scrollable,
    },
    ContentFit, Element, Length,
};
use std::ops::Range;

/// Widget id of the list's scrollable.
pub const SCROLLABLE_ID: &str = "recipe-list";

/// Offset of the first card row inside the scrollable content.
const GRID_TOP: f32 = spacing::LG + sizing::SEARCH_HEIGHT + spacing::LG;

/// Distance between the tops of two card rows.
const ROW_PITCH: f32 = sizing::CARD_HEIGHT + spacing::MD;

/// Viewport height assumed until the scrollable reports its geometry.
const INITIAL_VIEWPORT_HEIGHT: f32 = 800.0;

/// Recipes whose name, cuisine, category or any tag contains `query`,
/// ignoring case. A blank query keeps everything.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return recipes.iter().collect();
    }

    recipes
        .iter()
        .filter(|recipe| {
            let contains = |field: &str| field.to_lowercase().contains(&needle);
            contains(&recipe.name)
                || contains(&recipe.cuisine)
                || contains(&recipe.category)
                || recipe
                    .tags
                    .as_ref()
                    .is_some_and(|tags| tags.iter().any(|tag| contains(tag)))
        })
        .collect()
}

/// Scroll geometry reported by the list's scrollable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset_y: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ScrollMetrics {
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        }
    }

    /// Distance left between the bottom of the viewport and the end of the
    /// content.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        (self.content_height - self.offset_y - self.viewport_height).max(0.0)
    }
}

/// Pagination state the observer needs from the recipe store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStatus {
    pub loading: bool,
    pub has_more: bool,
}

/// Decides when scrolling should request the next page.
#[derive(Debug, Clone, PartialEq)]
pub struct NearBottomObserver {
    armed: bool,
    threshold_px: f32,
}

impl NearBottomObserver {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            armed: false,
            threshold_px: threshold_px.max(0.0),
        }
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Whether `metrics` should trigger the next page.
    #[must_use]
    pub fn observe(&self, metrics: &ScrollMetrics, query: &str, status: LoadStatus) -> bool {
        self.armed
            && query.trim().is_empty()
            && !status.loading
            && status.has_more
            && metrics.remaining() <= self.threshold_px
    }
}

#[derive(Debug, Clone)]
pub struct State {
    query: String,
    observer: NearBottomObserver,
    /// Last geometry reported by the scrollable.
    viewport: Option<ScrollMetrics>,
}

impl State {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            query: String::new(),
            observer: NearBottomObserver::new(threshold_px),
            viewport: None,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the filter. The grid re-renders from the top, so the last
    /// scroll position is forgotten.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.viewport = None;
    }

    /// Indices into the filtered list of the cards inside the viewport,
    /// plus one extra row below it.
    #[must_use]
    pub fn visible_cards(&self, count: usize) -> Range<usize> {
        let (offset, height) = self.viewport.map_or((0.0, INITIAL_VIEWPORT_HEIGHT), |m| {
            (m.offset_y, m.viewport_height)
        });

        let first_row = ((offset - GRID_TOP).max(0.0) / ROW_PITCH).floor() as usize;
        let end_row = ((offset + height - GRID_TOP).max(0.0) / ROW_PITCH).ceil() as usize + 1;

        let start = (first_row * sizing::CARDS_PER_ROW).min(count);
        let end = (end_row * sizing::CARDS_PER_ROW).min(count);
        start..end
    }

    /// Called when the list becomes the visible screen.
    pub fn on_enter(&mut self) {
        self.observer.arm();
    }

    /// Called when the list stops being the visible screen.
    pub fn on_leave(&mut self) {
        self.observer.disarm();
    }

    #[must_use]
    pub fn observer(&self) -> &NearBottomObserver {
        &self.observer
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Scrolled(ScrollMetrics),
    OpenRecipe(RecipeId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The query changed; visible recipes may differ.
    FilterChanged,
    LoadMore,
    OpenRecipe(RecipeId),
}

pub fn update(state: &mut State, message: Message, status: LoadStatus) -> Event {
    match message {
        Message::QueryChanged(query) => {
            state.set_query(query);
            Event::FilterChanged
        }
        Message::Scrolled(metrics) => {
            state.viewport = Some(metrics);
            if state.observer.observe(&metrics, &state.query, status) {
                Event::LoadMore
            } else {
                Event::None
            }
        }
        Message::OpenRecipe(id) => Event::OpenRecipe(id),
    }
}

/// Contextual data needed to render the list.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub recipes: &'a [Recipe],
    pub translations: &'a UiTranslations,
    pub thumbnails: &'a ThumbnailCache,
    pub status: LoadStatus,
    /// Every alphabetical page has been loaded.
    pub end_of_pages: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let search = text_input(&ctx.translations.search_placeholder, &ctx.state.query)
        .on_input(Message::QueryChanged)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::SEARCH_WIDTH));

    let visible = filter_recipes(ctx.recipes, &ctx.state.query);

    let mut grid = Column::new().spacing(spacing::MD);
    for chunk in visible.chunks(sizing::CARDS_PER_ROW) {
        let row = chunk.iter().copied().fold(Row::new().spacing(spacing::MD), |row, recipe| {
            row.push(recipe_card(recipe, ctx.thumbnails))
        });
        grid = grid.push(row);
    }

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(search)
        .push(grid);

    if let Some(status) = status_line(&ctx, visible.is_empty()) {
        content = content.push(text(status).size(typography::BODY));
    }

    Scrollable::new(Container::new(content).center_x(Length::Fill))
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| {
            Message::Scrolled(ScrollMetrics::from_viewport(&viewport))
        })
        .into()
}

fn status_line<'a>(ctx: &ViewContext<'a>, nothing_visible: bool) -> Option<&'a str> {
    if ctx.status.loading {
        Some(ctx.translations.loading.as_str())
    } else if nothing_visible && !ctx.state.query.trim().is_empty() {
        Some(ctx.translations.no_results.as_str())
    } else if ctx.end_of_pages {
        Some(ctx.translations.no_more_recipes.as_str())
    } else {
        None
    }
}

fn recipe_card<'a>(recipe: &'a Recipe, thumbnails: &'a ThumbnailCache) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match thumbnails.peek(&preview_url(&recipe.image)) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text(""))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .style(styles::container::image_placeholder)
            .into(),
    };

    let subtitle = match (recipe.cuisine.is_empty(), recipe.category.is_empty()) {
        (false, false) => format!("{} · {}", recipe.cuisine, recipe.category),
        (false, true) => recipe.cuisine.clone(),
        (true, false) => recipe.category.clone(),
        (true, true) => String::new(),
    };

    let mut body = Column::new()
        .spacing(spacing::XXS)
        .push(picture)
        .push(text(recipe.name.as_str()).size(typography::TITLE_MD))
        .push(text(subtitle).size(typography::CAPTION));

    if let Some(tags) = recipe.tags.as_ref().filter(|tags| !tags.is_empty()) {
        let badges = tags.iter().fold(Row::new().spacing(spacing::XXS), |row, tag| {
            row.push(
                container(text(tag.as_str()).size(typography::CAPTION))
                    .padding([2.0, spacing::XS])
                    .style(styles::container::badge),
            )
        });
        body = body.push(badges);
    }

    button(body)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .style(styles::button::card)
        .on_press(Message::OpenRecipe(recipe.id.clone()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, name: &str, cuisine: &str, category: &str, tags: Option<&[&str]>) -> Recipe {
        Recipe {
            id: RecipeId::new(id),
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            category: category.to_string(),
            image: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            tags: tags.map(|t| t.iter().map(ToString::to_string).collect()),
            video_url: None,
            details: None,
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe("1", "Teriyaki Chicken Casserole", "Japanese", "Chicken", Some(&["Meat", "Casserole"])),
            recipe("2", "Spicy Arrabiata Penne", "Italian", "Vegetarian", Some(&["Pasta", "Curry"])),
            recipe("3", "Apple Frangipan Tart", "British", "Dessert", None),
        ]
    }

    fn ids(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.id.to_string()).collect()
    }

    const IDLE: LoadStatus = LoadStatus {
        loading: false,
        has_more: true,
    };

    fn near_bottom() -> ScrollMetrics {
        ScrollMetrics {
            offset_y: 850.0,
            viewport_height: 600.0,
            content_height: 1500.0,
        }
    }

    #[test]
    fn blank_query_keeps_everything() {
        let recipes = sample();
        assert_eq!(filter_recipes(&recipes, "   ").len(), 3);
    }

    #[test]
    fn filter_matches_each_field_case_insensitively() {
        let recipes = sample();
        assert_eq!(ids(&filter_recipes(&recipes, "TERIYAKI")), vec!["1"]);
        assert_eq!(ids(&filter_recipes(&recipes, "italian")), vec!["2"]);
        assert_eq!(ids(&filter_recipes(&recipes, "dessert")), vec!["3"]);
        assert_eq!(ids(&filter_recipes(&recipes, "casserole")), vec!["1"]);
        assert_eq!(ids(&filter_recipes(&recipes, "curry")), vec!["2"]);
        assert!(filter_recipes(&recipes, "sushi").is_empty());
    }

    #[test]
    fn remaining_distance_never_negative() {
        let metrics = ScrollMetrics {
            offset_y: 1000.0,
            viewport_height: 600.0,
            content_height: 1200.0,
        };
        assert_eq!(metrics.remaining(), 0.0);
        assert_eq!(near_bottom().remaining(), 50.0);
    }

    #[test]
    fn disarmed_observer_never_fires() {
        let observer = NearBottomObserver::new(200.0);
        assert!(!observer.observe(&near_bottom(), "", IDLE));
    }

    #[test]
    fn armed_observer_fires_near_bottom_only() {
        let mut observer = NearBottomObserver::new(200.0);
        observer.arm();
        assert!(observer.observe(&near_bottom(), "", IDLE));

        let top = ScrollMetrics {
            offset_y: 0.0,
            ..near_bottom()
        };
        assert!(!observer.observe(&top, "", IDLE));
    }

    #[test]
    fn active_query_suspends_loading() {
        let mut observer = NearBottomObserver::new(200.0);
        observer.arm();
        assert!(!observer.observe(&near_bottom(), "pasta", IDLE));
    }

    #[test]
    fn in_flight_or_exhausted_blocks_loading() {
        let mut observer = NearBottomObserver::new(200.0);
        observer.arm();
        let loading = LoadStatus {
            loading: true,
            has_more: true,
        };
        let exhausted = LoadStatus {
            loading: false,
            has_more: false,
        };
        assert!(!observer.observe(&near_bottom(), "", loading));
        assert!(!observer.observe(&near_bottom(), "", exhausted));
    }

    #[test]
    fn leaving_the_screen_disarms() {
        let mut state = State::new(200.0);
        state.on_enter();
        assert_eq!(
            update(&mut state, Message::Scrolled(near_bottom()), IDLE),
            Event::LoadMore
        );

        state.on_leave();
        assert_eq!(
            update(&mut state, Message::Scrolled(near_bottom()), IDLE),
            Event::None
        );
    }

    fn scrolled_to(offset_y: f32) -> ScrollMetrics {
        ScrollMetrics {
            offset_y,
            viewport_height: 100.0,
            content_height: 5000.0,
        }
    }

    #[test]
    fn visible_cards_start_at_the_top() {
        let state = State::new(200.0);
        let visible = state.visible_cards(100);
        assert_eq!(visible.start, 0);
        assert!(visible.end > sizing::CARDS_PER_ROW);
        assert_eq!(state.visible_cards(2), 0..2);
    }

    #[test]
    fn visible_cards_follow_scrolling() {
        let mut state = State::new(200.0);
        let second_row = GRID_TOP + ROW_PITCH;
        update(&mut state, Message::Scrolled(scrolled_to(second_row)), IDLE);

        let per_row = sizing::CARDS_PER_ROW;
        assert_eq!(state.visible_cards(100), per_row..per_row * 3);
        assert_eq!(state.visible_cards(per_row + 1), per_row..per_row + 1);
        assert!(state.visible_cards(per_row).is_empty());
    }

    #[test]
    fn new_query_forgets_scroll_position() {
        let mut state = State::new(200.0);
        update(&mut state, Message::Scrolled(scrolled_to(5000.0)), IDLE);
        assert_ne!(state.visible_cards(100).start, 0);

        update(&mut state, Message::QueryChanged("pasta".into()), IDLE);
        assert_eq!(state.visible_cards(100).start, 0);
    }

    #[test]
    fn query_change_is_reported() {
        let mut state = State::new(200.0);
        let event = update(&mut state, Message::QueryChanged("chicken".into()), IDLE);
        assert_eq!(event, Event::FilterChanged);
        assert_eq!(state.query(), "chicken");
    }
}
