// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Raised surface for detail sections.
///
/// Derived from the active theme's background so it reads well in both
/// light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Page header band.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Small rounded badge (tags, difficulty).
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_100)),
        text_color: Some(palette::PRIMARY_600),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Grey block shown while a thumbnail downloads.
pub fn image_placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
