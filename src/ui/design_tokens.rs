// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! - **Palette**: base colors (brand greens, grayscale, semantic)
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Border**: border width scale
//! - **Radius**: border radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (eco green scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.87, 0.96, 0.89);
    pub const PRIMARY_200: Color = Color::from_rgb(0.73, 0.91, 0.78);
    pub const PRIMARY_400: Color = Color::from_rgb(0.38, 0.76, 0.49);
    pub const PRIMARY_500: Color = Color::from_rgb(0.22, 0.66, 0.37);
    pub const PRIMARY_600: Color = Color::from_rgb(0.16, 0.55, 0.30);
    pub const PRIMARY_700: Color = Color::from_rgb(0.12, 0.44, 0.24);

    // Favorite accent (heart)
    pub const FAVORITE_500: Color = Color::from_rgb(0.937, 0.267, 0.267);

    // Star rating
    pub const STAR_ACTIVE: Color = Color::from_rgb(0.98, 0.8, 0.08);

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
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Component Sizing
// ============================================================================

pub mod sizing {
    /// Inline card image area (square).
    pub const CARD_IMAGE: f32 = 260.0;
    /// Product card width.
    pub const CARD_WIDTH: f32 = 300.0;
    /// Inline thumbnail edge.
    pub const THUMBNAIL: f32 = 48.0;
    /// Modal thumbnail edge.
    pub const THUMBNAIL_LG: f32 = 64.0;
    /// Modal image area.
    pub const MODAL_IMAGE: f32 = 440.0;
    /// Modal card width.
    pub const MODAL_WIDTH: f32 = 520.0;
    /// Toast card width.
    pub const TOAST_WIDTH: f32 = 340.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const SUBTITLE: f32 = 16.0;
    pub const TITLE: f32 = 20.0;
    pub const HEADLINE: f32 = 28.0;
    /// Star glyphs in the rating input.
    pub const STAR: f32 = 26.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_scale_darkens_with_index() {
        // Rough monotonicity check on the green channel of the brand scale.
        assert!(palette::PRIMARY_100.g > palette::PRIMARY_400.g);
        assert!(palette::PRIMARY_400.g > palette::PRIMARY_700.g);
    }

    #[test]
    fn spacing_scale_is_monotonic() {
        assert!(spacing::XXS < spacing::XS);
        assert!(spacing::XS < spacing::SM);
        assert!(spacing::SM < spacing::MD);
        assert!(spacing::MD < spacing::LG);
        assert!(spacing::LG < spacing::XL);
    }
}
