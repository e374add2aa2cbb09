// SPDX-License-Identifier: MPL-2.0
//! Design tokens centralisés suivant le Design Tokens W3C standard.
//!
//! Single source of truth for colors, spacing, sizing, radii and shadows
//! used by the banner, navbar, map overlays and composer card.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand blues (mode buttons, post button, wordmark)
    pub const PRIMARY_600: Color = Color::from_rgb(0.11, 0.31, 0.85);
    pub const PRIMARY_500: Color = Color::from_rgb(0.15, 0.39, 0.92);
    pub const PRIMARY_400: Color = Color::from_rgb(0.24, 0.49, 0.96);
    pub const PRIMARY_100: Color = Color::from_rgb(0.86, 0.92, 1.0);

    // Capture accents
    pub const RECORD_RED: Color = Color::from_rgb(0.87, 0.23, 0.23);
    pub const CAPTURE_GREEN: Color = Color::from_rgb(0.13, 0.65, 0.37);

    // Map surface
    pub const MAP_WATER: Color = Color::from_rgb(0.67, 0.83, 0.93);
    pub const MAP_LAND: Color = Color::from_rgb(0.93, 0.92, 0.88);
    pub const MAP_GRID: Color = Color::from_rgb(0.80, 0.79, 0.74);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_PRESSED: f32 = 0.9;

    /// Surface background - semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Height of the top bar (banner and navbar).
    pub const TOP_BAR_HEIGHT: f32 = 80.0;

    /// Width of the composer card overlay.
    pub const COMPOSER_WIDTH: f32 = 448.0;

    /// Height of the live capture preview area.
    pub const CAPTURE_HEIGHT: f32 = 400.0;

    /// Height of the photo/video review preview.
    pub const PREVIEW_HEIGHT: f32 = 160.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 10.0,
    };
}
