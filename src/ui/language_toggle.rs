// SPDX-License-Identifier: MPL-2.0
//! Header controls: language and theme toggles.

use crate::i18n::UiTranslations;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text, Row};
use iced::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleLanguage,
    ToggleTheme,
}

/// Each button is labelled with what pressing it switches *to*.
pub fn view<'a>(translations: &'a UiTranslations, theme: ThemeMode) -> Element<'a, Message> {
    let theme_label = match theme.toggled() {
        ThemeMode::Light => translations.theme_light.as_str(),
        ThemeMode::Dark => translations.theme_dark.as_str(),
    };

    Row::new()
        .spacing(spacing::XS)
        .push(
            button(text(translations.language_toggle.as_str()).size(typography::CAPTION))
                .style(styles::button::pill)
                .on_press(Message::ToggleLanguage),
        )
        .push(
            button(text(theme_label).size(typography::CAPTION))
                .style(styles::button::pill)
                .on_press(Message::ToggleTheme),
        )
        .into()
}
