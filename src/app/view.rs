// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the header and
//! the current screen based on application state.

use super::{Message, Route};
use crate::i18n::UiTranslations;
use crate::recipe::Recipe;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::recipe_list::LoadStatus;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::thumbnails::ThumbnailCache;
use crate::ui::{language_toggle, recipe_detail, recipe_list};
use iced::{
    alignment::Vertical,
    widget::{container, text, Column, Container, Row},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub route: &'a Route,
    pub translations: &'a UiTranslations,
    pub theme: ThemeMode,
    pub list: &'a recipe_list::State,
    pub detail: Option<&'a recipe_detail::State>,
    pub recipes: &'a [Recipe],
    pub thumbnails: &'a ThumbnailCache,
    pub status: LoadStatus,
    pub end_of_pages: bool,
}

/// Renders the header above the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.route, ctx.detail) {
        (Route::Recipe(_), Some(detail)) => recipe_detail::view(recipe_detail::ViewContext {
            state: detail,
            translations: ctx.translations,
            thumbnails: ctx.thumbnails,
        })
        .map(Message::Detail),
        _ => recipe_list::view(recipe_list::ViewContext {
            state: ctx.list,
            recipes: ctx.recipes,
            translations: ctx.translations,
            thumbnails: ctx.thumbnails,
            status: ctx.status,
            end_of_pages: ctx.end_of_pages,
        })
        .map(Message::List),
    };

    Column::new()
        .push(view_header(ctx.translations, ctx.theme))
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_header(translations: &UiTranslations, theme: ThemeMode) -> Element<'_, Message> {
    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(text(translations.title.as_str()).size(typography::TITLE_LG))
        .push(text(translations.subtitle.as_str()).size(typography::CAPTION));

    let row = Row::new()
        .align_y(Vertical::Center)
        .push(container(titles).width(Length::Fill))
        .push(language_toggle::view(translations, theme).map(Message::Header));

    container(row)
        .padding([spacing::MD, spacing::LG])
        .width(Length::Fill)
        .style(styles::container::header)
        .into()
}
