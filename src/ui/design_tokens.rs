// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (night gradient + glass semantic colors)
- **Glass**: White-alpha levels that produce the frosted-glass look
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use glass_gallery::ui::design_tokens::{glass, palette, spacing};
use iced::Color;

// A glass surface over the night gradient
let surface = glass::SURFACE;

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Night gradient endpoints (indigo -> purple -> pink)
    pub const INDIGO_900: Color = Color::from_rgb(0.192, 0.180, 0.506);
    pub const PURPLE_900: Color = Color::from_rgb(0.345, 0.110, 0.529);
    pub const PINK_800: Color = Color::from_rgb(0.616, 0.090, 0.302);

    // Accent scale used by gradient blobs and colored glass
    pub const BLUE_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const CYAN_400: Color = Color::from_rgb(0.133, 0.827, 0.933);
    pub const PURPLE_400: Color = Color::from_rgb(0.753, 0.518, 0.988);
    pub const PINK_400: Color = Color::from_rgb(0.957, 0.447, 0.714);
    pub const ROSE_400: Color = Color::from_rgb(0.984, 0.443, 0.522);
    pub const ORANGE_400: Color = Color::from_rgb(0.984, 0.573, 0.235);
    pub const INDIGO_400: Color = Color::from_rgb(0.506, 0.549, 0.973);

    // Semantic colors for notification accents
    pub const SUCCESS_400: Color = Color::from_rgb(0.290, 0.871, 0.502);
    pub const INFO_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const WARNING_400: Color = Color::from_rgb(0.984, 0.749, 0.141);
    pub const ERROR_400: Color = Color::from_rgb(0.973, 0.443, 0.443);
}

// ============================================================================
// Glass Surfaces (white-alpha levels)
// ============================================================================

pub mod glass {
    use super::Color;

    /// Standard glass card surface.
    pub const SURFACE: Color = Color {
        a: 0.10,
        ..Color::WHITE
    };

    /// Slightly denser surface (hovered cards, nav items).
    pub const SURFACE_STRONG: Color = Color {
        a: 0.18,
        ..Color::WHITE
    };

    /// Pressed / active surface.
    pub const SURFACE_ACTIVE: Color = Color {
        a: 0.28,
        ..Color::WHITE
    };

    /// Hairline border around glass panels.
    pub const EDGE: Color = Color {
        a: 0.20,
        ..Color::WHITE
    };

    /// Primary text on the night gradient.
    pub const TEXT: Color = Color::WHITE;

    /// Secondary text (descriptions, captions).
    pub const TEXT_DIM: Color = Color {
        a: 0.70,
        ..Color::WHITE
    };

    /// Tertiary text (hints, stat labels).
    pub const TEXT_FAINT: Color = Color {
        a: 0.55,
        ..Color::WHITE
    };
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const PARTICLE_MIN: f32 = 0.1;
    pub const PARTICLE_MAX: f32 = 0.3;
    pub const BLOB: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
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
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon glyph sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;
    pub const MESSAGE_INPUT_HEIGHT: f32 = 128.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1120.0;

    // Decorative elements
    pub const ICON_BUBBLE: f32 = 48.0;
    pub const PLAYER_TILE: f32 = 280.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero title - Showcase heading
    pub const TITLE_XL: f32 = 40.0;

    /// Large title - Screen headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - App name, panel headings
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - Card titles
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Taglines, stat values
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Badges, stat labels, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Glass edges, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Toast accents, active nav buttons
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 20.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    const SOFT_BLACK: Color = Color {
        a: 0.35,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 6.0,
    };

    pub const MD: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    pub const LG: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::PARTICLE_MIN < opacity::PARTICLE_MAX);

    // Glass surfaces get denser as interaction deepens
    assert!(glass::SURFACE.a < glass::SURFACE_STRONG.a);
    assert!(glass::SURFACE_STRONG.a < glass::SURFACE_ACTIVE.a);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);

    // Typography validation
    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::INDIGO_900.r >= 0.0 && palette::INDIGO_900.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn text_levels_fade_progressively() {
        assert!(glass::TEXT.a > glass::TEXT_DIM.a);
        assert!(glass::TEXT_DIM.a > glass::TEXT_FAINT.a);
    }
}
