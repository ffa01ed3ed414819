//! Color constants and Rgb565 helpers.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! This format is native to many embedded displays and needs no conversion
//! when writing to a display buffer. The interpolation helper below works on
//! the unpacked components with fixed-point math.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0).
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31).
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0).
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0).
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue (0, 0, 31).
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow (31, 63, 0).
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure cyan (0, 63, 31).
pub const CYAN: Rgb565 = Rgb565::CYAN;

// =============================================================================
// Custom Colors (shared by the widget artwork)
// =============================================================================

/// Orange for warning markers. Slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Mid gray for knobs and unlit elements.
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);

/// Dark gray for rims and dividers.
pub const DARK_GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Very dark gray for housings.
pub const DARKER_GRAY: Rgb565 = Rgb565::new(4, 8, 4);

// =============================================================================
// Component Access
// =============================================================================

/// Unpack an Rgb565 color into `(r, g, b)` channel values.
#[inline]
fn components(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (
        i32::from((raw >> 11) & 0x1F),
        i32::from((raw >> 5) & 0x3F),
        i32::from(raw & 0x1F),
    )
}

/// Approximate luminance of an Rgb565 color, scaled to `0..=255`.
///
/// Channel weights follow the usual perceptual split (green counts most).
/// The 5/6-bit channels are expanded to 8 bits before weighting.
pub fn luminance(color: Rgb565) -> u32 {
    let (r, g, b) = components(color);
    let r8 = (r * 255 / 31) as u32;
    let g8 = (g * 255 / 63) as u32;
    let b8 = (b * 255 / 31) as u32;
    (r8 * 77 + g8 * 151 + b8 * 28) >> 8
}

/// Pick a readable label color for the given background: white on dark
/// backgrounds, black on light ones.
pub fn label_color_for_bg(bg: Rgb565) -> Rgb565 {
    if luminance(bg) < 128 { WHITE } else { BLACK }
}

/// Linear interpolation between two Rgb565 colors.
///
/// `t` is clamped into `[0, 1]`; each channel interpolates independently
/// with 8-bit fixed-point math.
pub fn lerp_rgb565(from: Rgb565, to: Rgb565, t: f32) -> Rgb565 {
    let t_fixed = (t.clamp(0.0, 1.0) * 256.0) as i32;

    let (from_r, from_g, from_b) = components(from);
    let (to_r, to_g, to_b) = components(to);

    let mix = |a: i32, b: i32| a + (((b - a) * t_fixed) >> 8);

    Rgb565::new(
        mix(from_r, to_r).clamp(0, 31) as u8,
        mix(from_g, to_g).clamp(0, 63) as u8,
        mix(from_b, to_b).clamp(0, 31) as u8,
    )
}

/// Darken a color by mixing it toward black.
pub fn darken(color: Rgb565, amount: f32) -> Rgb565 {
    lerp_rgb565(color, BLACK, amount)
}

/// Brighten a color by mixing it toward white.
pub fn brighten(color: Rgb565, amount: f32) -> Rgb565 {
    lerp_rgb565(color, WHITE, amount)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb565(BLACK, WHITE, 0.0), BLACK);
        assert_eq!(lerp_rgb565(BLACK, WHITE, 1.0), WHITE);
        assert_eq!(lerp_rgb565(RED, RED, 0.5), RED);
    }

    #[test]
    fn test_lerp_midpoint_is_between() {
        let mid = lerp_rgb565(BLACK, WHITE, 0.5);
        let (r, g, b) = components(mid);
        assert!(r > 10 && r < 20, "r={r}");
        assert!(g > 25 && g < 40, "g={g}");
        assert!(b > 10 && b < 20, "b={b}");
    }

    #[test]
    fn test_lerp_t_is_clamped() {
        assert_eq!(lerp_rgb565(BLACK, WHITE, -1.0), BLACK);
        assert_eq!(lerp_rgb565(BLACK, WHITE, 2.0), WHITE);
    }

    #[test]
    fn test_luminance_ordering() {
        assert_eq!(luminance(BLACK), 0);
        assert!(luminance(WHITE) > 250);
        assert!(luminance(YELLOW) > luminance(RED));
        assert!(luminance(RED) > luminance(BLACK));
    }

    #[test]
    fn test_label_color_contrast() {
        assert_eq!(label_color_for_bg(BLACK), WHITE);
        assert_eq!(label_color_for_bg(DARK_GRAY), WHITE);
        assert_eq!(label_color_for_bg(WHITE), BLACK);
        assert_eq!(label_color_for_bg(YELLOW), BLACK);
    }

    #[test]
    fn test_darken_and_brighten() {
        assert!(luminance(darken(GRAY, 0.5)) < luminance(GRAY));
        assert!(luminance(brighten(GRAY, 0.5)) > luminance(GRAY));
    }
}
