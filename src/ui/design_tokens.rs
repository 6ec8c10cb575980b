// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for every screen.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use recipe_lens::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (tomato scale)
    pub const PRIMARY_100: Color = Color::from_rgb(1.0, 0.9, 0.86);
    pub const PRIMARY_400: Color = Color::from_rgb(0.96, 0.49, 0.38);
    pub const PRIMARY_500: Color = Color::from_rgb(0.9, 0.38, 0.27);
    pub const PRIMARY_600: Color = Color::from_rgb(0.78, 0.3, 0.2);

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Checked items in cooking mode
    pub const COMPLETED: f32 = 0.55;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Recipe cards
    pub const CARD_WIDTH: f32 = 240.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 160.0;
    /// Fixed card height so grid rows have a known pitch
    pub const CARD_HEIGHT: f32 = 280.0;

    // Detail hero image
    pub const HERO_IMAGE_HEIGHT: f32 = 320.0;

    pub const CONTENT_MAX_WIDTH: f32 = 960.0;
    pub const SEARCH_WIDTH: f32 = 420.0;
    /// Rendered height of the search box (body text plus padding)
    pub const SEARCH_HEIGHT: f32 = 36.0;

    /// Cards per row in the list grid
    pub const CARDS_PER_ROW: usize = 3;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Card names, section headers
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;

    /// Caption - Badges, tags, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::COMPLETED > 0.0 && opacity::COMPLETED < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::CARDS_PER_ROW > 0);
    assert!(sizing::CARD_HEIGHT > sizing::CARD_IMAGE_HEIGHT);
};
