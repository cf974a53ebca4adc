// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use skillforge_landing::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.33);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.78);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.9);

    // Brand colors (indigo scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.88, 0.9, 0.99); // Very light indigo
    pub const PRIMARY_200: Color = Color::from_rgb(0.76, 0.8, 0.97); // Light indigo
    pub const PRIMARY_400: Color = Color::from_rgb(0.52, 0.6, 0.95); // Medium light indigo
    pub const PRIMARY_500: Color = Color::from_rgb(0.4, 0.49, 0.92); // Primary indigo
    pub const PRIMARY_600: Color = Color::from_rgb(0.33, 0.41, 0.82); // Medium dark indigo
    pub const PRIMARY_700: Color = Color::from_rgb(0.26, 0.33, 0.7); // Dark indigo
    pub const PRIMARY_800: Color = Color::from_rgb(0.19, 0.25, 0.56); // Very dark indigo

    // Accent colors (violet scale, the second stop of the brand gradient)
    pub const ACCENT_400: Color = Color::from_rgb(0.58, 0.42, 0.74);
    pub const ACCENT_500: Color = Color::from_rgb(0.46, 0.29, 0.64);
    pub const ACCENT_600: Color = Color::from_rgb(0.38, 0.23, 0.54);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;

    /// Decorative background orbs - faint enough to never fight the copy
    pub const ORB: f32 = 0.16;
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
    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const CTA_HEIGHT: f32 = 48.0;

    // Chrome
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const RIBBON_HEIGHT: f32 = 3.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;

    // Feature cards
    pub const CARD_WIDTH: f32 = 340.0;
    pub const CARD_HEIGHT: f32 = 180.0;
    /// Vertical travel of the hover lift.
    pub const CARD_LIFT: f32 = 12.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.
    //!
    //! The scale provides semantic sizes for consistent text hierarchy:
    //! - Display/Titles: Large headings (hero, section headings)
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Display - Hero headline
    pub const DISPLAY: f32 = 44.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Brand name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Card headings
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Hero subtitle, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, timestamps, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
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

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
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
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::ORB > 0.0 && opacity::ORB < opacity::OVERLAY_SUBTLE);

    // Sizing validation
    assert!(sizing::CARD_WIDTH > sizing::CARD_HEIGHT);
    assert!(sizing::CARD_LIFT < sizing::CARD_HEIGHT);
    assert!(sizing::RIBBON_HEIGHT < sizing::NAVBAR_HEIGHT);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};
