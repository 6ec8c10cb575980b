// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (start cooking, back).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Outlined pill used in the header (language, theme).
pub fn pill(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
        _ => palette.background.weak.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.background.base.text,
        border: Border {
            color: palette::PRIMARY_500,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Whole-card click target. Keeps the card surface, lifts on hover.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let lifted = matches!(status, button::Status::Hovered | button::Status::Pressed);

    button::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: palette.background.base.text,
        border: Border {
            color: if lifted {
                palette::PRIMARY_400
            } else {
                Color::TRANSPARENT
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: if lifted { shadow::MD } else { shadow::SM },
        snap: true,
    }
}

/// Checklist row in cooking mode. Checked rows fade out.
pub fn checklist(checked: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let base_text = palette.background.base.text;
        let text_color = if checked {
            Color {
                a: opacity::COMPLETED,
                ..base_text
            }
        } else {
            base_text
        };
        let background = match status {
            button::Status::Hovered => Some(Background::Color(palette.background.weak.color)),
            _ => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_rows_are_faded() {
        let theme = Theme::Light;
        let open = checklist(false)(&theme, button::Status::Active);
        let done = checklist(true)(&theme, button::Status::Active);
        assert!(done.text_color.a < open.text_color.a);
    }

    #[test]
    fn hovered_card_gets_brand_border() {
        let style = card(&Theme::Dark, button::Status::Hovered);
        assert_eq!(style.border.color, palette::PRIMARY_400);
    }
}
