//! Low-level drawing helpers shared across widgets.
//!
//! These are intentionally simple and focused on a single responsibility:
//! radial ticks, pointers, knobs, rims, and arc bands are the same few
//! shapes on every round instrument, parameterized by center, radius and
//! angle. All functions draw into any `DrawTarget<Color = Rgb565>` and
//! propagate the target's error.
//!
//! Angles are radians, measured clockwise from the positive x axis (screen
//! coordinates, y down).

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Triangle};

use crate::colors::{DARK_GRAY, GRAY};
use crate::geometry::{HALF_PI, polar_to_point};
use crate::themes::{BackgroundTheme, PointerTheme};

/// Angular step used to approximate arcs with line segments (3 degrees).
const ARC_SEGMENT_STEP: f32 = 3.0 * core::f32::consts::PI / 180.0;

/// Draw a radial tick line from `r_inner` to `r_outer` at `angle`.
pub fn draw_radial_tick<D>(
    target: &mut D,
    center: Point,
    angle: f32,
    r_inner: f32,
    r_outer: f32,
    width: u32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(
        polar_to_point(center, r_inner, angle),
        polar_to_point(center, r_outer, angle),
    )
    .into_styled(PrimitiveStyle::with_stroke(color, width))
    .draw(target)
}

/// Draw a band following a circular arc, approximated with line segments.
///
/// Used for section ranges on radial scales. `angle_start` may exceed
/// `angle_end`; nothing is drawn in that case.
pub fn draw_arc_band<D>(
    target: &mut D,
    center: Point,
    radius: f32,
    angle_start: f32,
    angle_end: f32,
    width: u32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if angle_end <= angle_start {
        return Ok(());
    }

    let style = PrimitiveStyle::with_stroke(color, width);
    let mut angle = angle_start;
    let mut prev = polar_to_point(center, radius, angle);
    while angle < angle_end {
        angle = (angle + ARC_SEGMENT_STEP).min(angle_end);
        let next = polar_to_point(center, radius, angle);
        Line::new(prev, next).into_styled(style).draw(target)?;
        prev = next;
    }
    Ok(())
}

/// Draw a gauge pointer: a filled needle triangle with a short tail.
///
/// The needle reaches `length` from `center` along `angle`; the tail extends
/// `tail` in the opposite direction. `half_width` is the needle's half-width
/// at the hub.
pub fn draw_pointer<D>(
    target: &mut D,
    center: Point,
    angle: f32,
    length: f32,
    tail: f32,
    half_width: f32,
    theme: &PointerTheme,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let tip = polar_to_point(center, length, angle);
    let left = polar_to_point(center, half_width, angle - HALF_PI);
    let right = polar_to_point(center, half_width, angle + HALF_PI);

    Triangle::new(tip, left, right)
        .into_styled(
            embedded_graphics::primitives::PrimitiveStyleBuilder::new()
                .fill_color(theme.medium)
                .stroke_color(theme.dark)
                .stroke_width(1)
                .build(),
        )
        .draw(target)?;

    if tail > 0.0 {
        let tail_tip = polar_to_point(center, tail, angle + core::f32::consts::PI);
        Triangle::new(tail_tip, left, right)
            .into_styled(PrimitiveStyle::with_fill(theme.light))
            .draw(target)?;
    }
    Ok(())
}

/// Draw the center knob the pointer pivots on.
pub fn draw_knob<D>(target: &mut D, center: Point, diameter: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, diameter)
        .into_styled(PrimitiveStyle::with_fill(GRAY))
        .draw(target)?;
    Circle::with_center(center, diameter)
        .into_styled(PrimitiveStyle::with_stroke(DARK_GRAY, 1))
        .draw(target)
}

/// Draw the rim rings and dial face of a round gauge.
///
/// The rim is two concentric stroked circles; the face fills the interior.
pub fn draw_rim<D>(
    target: &mut D,
    center: Point,
    size: u32,
    theme: &BackgroundTheme,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, size)
        .into_styled(PrimitiveStyle::with_stroke(theme.rim_outer, 3))
        .draw(target)?;
    Circle::with_center(center, size.saturating_sub(6))
        .into_styled(PrimitiveStyle::with_stroke(theme.rim_inner, 2))
        .draw(target)?;
    Circle::with_center(center, size.saturating_sub(10))
        .into_styled(PrimitiveStyle::with_fill(theme.face))
        .draw(target)
}

/// Format a value with a fixed number of decimals into a stack string.
///
/// Output that would exceed the capacity is truncated.
pub fn format_value(value: f32, decimals: usize) -> heapless::String<16> {
    let mut text = heapless::String::new();
    write!(text, "{value:.decimals$}").ok();
    text
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::RED;
    use crate::layer::Layer;
    use crate::themes::pointers;

    #[test]
    fn test_format_value_decimals() {
        assert_eq!(format_value(12.345, 1).as_str(), "12.3");
        assert_eq!(format_value(12.345, 0).as_str(), "12");
        assert_eq!(format_value(-3.5, 2).as_str(), "-3.50");
        assert_eq!(format_value(0.0, 1).as_str(), "0.0");
    }

    #[test]
    fn test_arc_band_draws_pixels() {
        let mut layer = Layer::new(Size::new(100, 100));
        draw_arc_band(&mut layer, Point::new(50, 50), 40.0, 0.0, HALF_PI, 2, RED).ok();
        assert!(layer.drawn_pixel_count() > 0);

        // First quadrant arc (clockwise from east): pixels right of center
        assert!(layer.pixel(Point::new(90, 50)).is_some());
    }

    #[test]
    fn test_arc_band_empty_range_draws_nothing() {
        let mut layer = Layer::new(Size::new(100, 100));
        draw_arc_band(&mut layer, Point::new(50, 50), 40.0, 1.0, 1.0, 2, RED).ok();
        assert_eq!(layer.drawn_pixel_count(), 0);
    }

    #[test]
    fn test_pointer_reaches_toward_angle() {
        let mut layer = Layer::new(Size::new(100, 100));
        // Pointing east
        draw_pointer(&mut layer, Point::new(50, 50), 0.0, 40.0, 10.0, 3.0, &pointers::RED).ok();

        assert!(layer.pixel(Point::new(85, 50)).is_some(), "needle tip area");
        assert!(layer.pixel(Point::new(15, 50)).is_none(), "opposite side beyond tail");
    }

    #[test]
    fn test_knob_is_centered() {
        let mut layer = Layer::new(Size::new(60, 60));
        draw_knob(&mut layer, Point::new(30, 30), 12).ok();
        assert!(layer.pixel(Point::new(30, 30)).is_some());
        assert!(layer.pixel(Point::new(30, 10)).is_none());
    }
}
