// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use recipe_lens::ui::design_tokens::{palette, sizing, spacing, typography};
    use recipe_lens::ui::styles::{button, container};
    use recipe_lens::ui::theming::ThemeMode;

    #[test]
    fn all_button_styles_compile() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = button::primary(&theme, Status::Active);
            let _ = button::pill(&theme, Status::Hovered);
            let _ = button::card(&theme, Status::Pressed);
            let _ = button::checklist(true)(&theme, Status::Active);
        }
    }

    #[test]
    fn all_container_styles_compile() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = container::panel(&theme);
            let _ = container::badge(&theme);
            let _ = container::image_placeholder(&theme);
        }
    }

    #[test]
    fn header_uses_brand_color() {
        let style = container::header(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(palette::PRIMARY_500)));
        assert_eq!(style.text_color, Some(palette::WHITE));
    }

    #[test]
    fn checked_rows_differ_from_unchecked() {
        let theme = Theme::Light;
        let checked = button::checklist(true)(&theme, Status::Active);
        let unchecked = button::checklist(false)(&theme, Status::Active);
        assert_ne!(checked.text_color, unchecked.text_color);
    }

    #[test]
    fn layout_tokens_fit_the_content_width() {
        let cards = sizing::CARD_WIDTH * sizing::CARDS_PER_ROW as f32
            + spacing::MD * (sizing::CARDS_PER_ROW as f32 - 1.0);
        assert!(cards <= sizing::CONTENT_MAX_WIDTH);
        assert!(typography::TITLE_LG > typography::BODY);
    }

    #[test]
    fn theming_switches_correctly() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }
}
