//! Visual themes for the widget artwork.
//!
//! Each widget picks its colors from a small theme struct instead of loose
//! color parameters, so a dashboard full of gauges stays consistent. Themes
//! are plain `const` values; setters that swap a theme invalidate the
//! widget's cached background layer.
//!
//! The named constants cover the common instrument looks (dark and light
//! dials, classic LCD tints, signal LED colors). All values are flat Rgb565
//! colors; shading is done in the drawing code by mixing toward black or
//! white where needed.

use embedded_graphics::pixelcolor::Rgb565;

// =============================================================================
// Dial Backgrounds
// =============================================================================

/// Colors for a gauge face and its surrounding rim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundTheme {
    /// Dial face fill.
    pub face: Rgb565,
    /// Outer rim ring (the "frame").
    pub rim_outer: Rgb565,
    /// Inner rim ring, between frame and face.
    pub rim_inner: Rgb565,
    /// Tickmark label and title text color.
    pub label: Rgb565,
    /// Tickmark stroke and symbol color.
    pub symbol: Rgb565,
}

pub mod backgrounds {
    use super::*;

    pub const DARK_GRAY: BackgroundTheme = BackgroundTheme {
        face: Rgb565::new(4, 8, 4),
        rim_outer: Rgb565::new(18, 37, 18),
        rim_inner: Rgb565::new(9, 18, 9),
        label: Rgb565::new(29, 59, 29),
        symbol: Rgb565::new(31, 63, 31),
    };

    pub const SATIN_GRAY: BackgroundTheme = BackgroundTheme {
        face: Rgb565::new(8, 17, 9),
        rim_outer: Rgb565::new(18, 37, 18),
        rim_inner: Rgb565::new(10, 20, 10),
        label: Rgb565::new(28, 57, 28),
        symbol: Rgb565::new(30, 61, 30),
    };

    pub const LIGHT_GRAY: BackgroundTheme = BackgroundTheme {
        face: Rgb565::new(22, 45, 22),
        rim_outer: Rgb565::new(14, 29, 14),
        rim_inner: Rgb565::new(18, 37, 18),
        label: Rgb565::new(2, 4, 2),
        symbol: Rgb565::new(0, 0, 0),
    };

    pub const WHITE: BackgroundTheme = BackgroundTheme {
        face: Rgb565::new(31, 63, 31),
        rim_outer: Rgb565::new(16, 33, 16),
        rim_inner: Rgb565::new(24, 49, 24),
        label: Rgb565::new(0, 0, 0),
        symbol: Rgb565::new(0, 0, 0),
    };

    pub const BLACK: BackgroundTheme = BackgroundTheme {
        face: Rgb565::new(0, 0, 0),
        rim_outer: Rgb565::new(14, 29, 14),
        rim_inner: Rgb565::new(6, 12, 6),
        label: Rgb565::new(30, 61, 30),
        symbol: Rgb565::new(31, 63, 31),
    };

    pub const BEIGE: BackgroundTheme = BackgroundTheme {
        face: Rgb565::new(27, 52, 22),
        rim_outer: Rgb565::new(16, 33, 16),
        rim_inner: Rgb565::new(22, 43, 18),
        label: Rgb565::new(2, 4, 2),
        symbol: Rgb565::new(4, 8, 4),
    };

    pub const BROWN: BackgroundTheme = BackgroundTheme {
        face: Rgb565::new(19, 30, 10),
        rim_outer: Rgb565::new(12, 18, 6),
        rim_inner: Rgb565::new(15, 24, 8),
        label: Rgb565::new(31, 61, 28),
        symbol: Rgb565::new(31, 63, 31),
    };

    pub const RED: BackgroundTheme = BackgroundTheme {
        face: Rgb565::new(14, 6, 3),
        rim_outer: Rgb565::new(20, 12, 8),
        rim_inner: Rgb565::new(10, 4, 2),
        label: Rgb565::new(31, 59, 29),
        symbol: Rgb565::new(31, 63, 31),
    };

    pub const GREEN: BackgroundTheme = BackgroundTheme {
        face: Rgb565::new(4, 24, 6),
        rim_outer: Rgb565::new(8, 33, 10),
        rim_inner: Rgb565::new(2, 16, 4),
        label: Rgb565::new(29, 61, 29),
        symbol: Rgb565::new(31, 63, 31),
    };

    pub const BLUE: BackgroundTheme = BackgroundTheme {
        face: Rgb565::new(4, 12, 18),
        rim_outer: Rgb565::new(8, 20, 24),
        rim_inner: Rgb565::new(2, 8, 12),
        label: Rgb565::new(29, 59, 31),
        symbol: Rgb565::new(31, 63, 31),
    };

    pub const ANTHRACITE: BackgroundTheme = BackgroundTheme {
        face: Rgb565::new(3, 7, 4),
        rim_outer: Rgb565::new(12, 24, 12),
        rim_inner: Rgb565::new(6, 12, 6),
        label: Rgb565::new(26, 53, 26),
        symbol: Rgb565::new(28, 57, 28),
    };
}

// =============================================================================
// Pointer Colors
// =============================================================================

/// Three-shade pointer coloring: highlight, body, and outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerTheme {
    pub light: Rgb565,
    pub medium: Rgb565,
    pub dark: Rgb565,
}

pub mod pointers {
    use super::*;

    pub const RED: PointerTheme = PointerTheme {
        light: Rgb565::new(31, 19, 9),
        medium: Rgb565::new(27, 8, 4),
        dark: Rgb565::new(20, 2, 1),
    };

    pub const GREEN: PointerTheme = PointerTheme {
        light: Rgb565::new(15, 55, 12),
        medium: Rgb565::new(6, 40, 6),
        dark: Rgb565::new(2, 24, 3),
    };

    pub const BLUE: PointerTheme = PointerTheme {
        light: Rgb565::new(12, 38, 31),
        medium: Rgb565::new(4, 20, 26),
        dark: Rgb565::new(1, 10, 18),
    };

    pub const ORANGE: PointerTheme = PointerTheme {
        light: Rgb565::new(31, 44, 8),
        medium: Rgb565::new(31, 32, 0),
        dark: Rgb565::new(24, 20, 0),
    };

    pub const YELLOW: PointerTheme = PointerTheme {
        light: Rgb565::new(31, 60, 14),
        medium: Rgb565::new(31, 55, 0),
        dark: Rgb565::new(26, 42, 0),
    };

    pub const WHITE: PointerTheme = PointerTheme {
        light: Rgb565::new(31, 63, 31),
        medium: Rgb565::new(28, 57, 28),
        dark: Rgb565::new(22, 45, 22),
    };

    pub const GRAY: PointerTheme = PointerTheme {
        light: Rgb565::new(22, 45, 22),
        medium: Rgb565::new(16, 32, 16),
        dark: Rgb565::new(10, 20, 10),
    };

    pub const BLACK: PointerTheme = PointerTheme {
        light: Rgb565::new(8, 16, 8),
        medium: Rgb565::new(4, 8, 4),
        dark: Rgb565::new(0, 0, 0),
    };
}

// =============================================================================
// LCD Colors
// =============================================================================

/// Colors for an LCD readout: bezel border, face, and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcdTheme {
    pub bezel: Rgb565,
    pub background: Rgb565,
    pub text: Rgb565,
}

pub mod lcds {
    use super::*;

    pub const STANDARD: LcdTheme = LcdTheme {
        bezel: Rgb565::new(13, 27, 14),
        background: Rgb565::new(23, 49, 24),
        text: Rgb565::new(3, 7, 3),
    };

    pub const STANDARD_GREEN: LcdTheme = LcdTheme {
        bezel: Rgb565::new(6, 20, 8),
        background: Rgb565::new(16, 63, 16),
        text: Rgb565::new(0, 12, 0),
    };

    pub const BLUE: LcdTheme = LcdTheme {
        bezel: Rgb565::new(2, 10, 16),
        background: Rgb565::new(6, 28, 28),
        text: Rgb565::new(30, 62, 31),
    };

    pub const RED: LcdTheme = LcdTheme {
        bezel: Rgb565::new(14, 4, 4),
        background: Rgb565::new(28, 28, 24),
        text: Rgb565::new(10, 2, 2),
    };

    pub const YELLOW: LcdTheme = LcdTheme {
        bezel: Rgb565::new(22, 40, 4),
        background: Rgb565::new(31, 58, 12),
        text: Rgb565::new(4, 6, 0),
    };

    pub const BLACK: LcdTheme = LcdTheme {
        bezel: Rgb565::new(2, 4, 2),
        background: Rgb565::new(4, 8, 4),
        text: Rgb565::new(30, 61, 30),
    };

    pub const WHITE: LcdTheme = LcdTheme {
        bezel: Rgb565::new(24, 49, 24),
        background: Rgb565::new(31, 63, 31),
        text: Rgb565::new(0, 0, 0),
    };

    pub const AMBER: LcdTheme = LcdTheme {
        bezel: Rgb565::new(16, 22, 2),
        background: Rgb565::new(31, 44, 10),
        text: Rgb565::new(8, 4, 0),
    };
}

// =============================================================================
// LED Colors
// =============================================================================

/// Colors for a signal LED in its lit and unlit states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedTheme {
    /// Body color when lit.
    pub on: Rgb565,
    /// Center highlight when lit.
    pub glow: Rgb565,
    /// Body color when dark.
    pub off: Rgb565,
    /// Surrounding rim ring.
    pub rim: Rgb565,
}

pub mod leds {
    use super::*;

    pub const RED: LedTheme = LedTheme {
        on: Rgb565::new(31, 6, 3),
        glow: Rgb565::new(31, 20, 12),
        off: Rgb565::new(8, 1, 1),
        rim: Rgb565::new(10, 20, 10),
    };

    pub const GREEN: LedTheme = LedTheme {
        on: Rgb565::new(6, 60, 8),
        glow: Rgb565::new(18, 63, 18),
        off: Rgb565::new(1, 12, 2),
        rim: Rgb565::new(10, 20, 10),
    };

    pub const BLUE: LedTheme = LedTheme {
        on: Rgb565::new(6, 24, 31),
        glow: Rgb565::new(14, 44, 31),
        off: Rgb565::new(1, 5, 8),
        rim: Rgb565::new(10, 20, 10),
    };

    pub const ORANGE: LedTheme = LedTheme {
        on: Rgb565::new(31, 34, 2),
        glow: Rgb565::new(31, 48, 12),
        off: Rgb565::new(8, 8, 0),
        rim: Rgb565::new(10, 20, 10),
    };

    pub const YELLOW: LedTheme = LedTheme {
        on: Rgb565::new(31, 60, 4),
        glow: Rgb565::new(31, 63, 16),
        off: Rgb565::new(8, 14, 0),
        rim: Rgb565::new(10, 20, 10),
    };

    pub const CYAN: LedTheme = LedTheme {
        on: Rgb565::new(4, 56, 28),
        glow: Rgb565::new(16, 63, 31),
        off: Rgb565::new(1, 12, 7),
        rim: Rgb565::new(10, 20, 10),
    };
}

// =============================================================================
// Scale Sections
// =============================================================================

/// A colored value range on a gauge scale (e.g. a red zone from 80 to 100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub start: f32,
    pub stop: f32,
    pub color: Rgb565,
}

impl Section {
    pub const fn new(start: f32, stop: f32, color: Rgb565) -> Self {
        Self { start, stop, color }
    }

    /// True if `value` lies within this section (inclusive bounds).
    pub fn contains(&self, value: f32) -> bool {
        value >= self.start && value <= self.stop
    }
}

/// Color of the first section containing `value`, if any. Widgets use this
/// to recolor their value bar as it moves through defined zones.
pub fn section_color_for(sections: &[Section], value: f32) -> Option<Rgb565> {
    sections.iter().find(|s| s.contains(value)).map(|s| s.color)
}

// =============================================================================
// Unit Tests
// =============================================================================
