//! Angle and scale math shared across the widgets.
//!
//! Pure functions only. Angles handed to the drawing code are in radians;
//! the public widget API speaks degrees (compass headings, scale ranges),
//! so conversion constants live here alongside the helpers.

use embedded_graphics::prelude::*;
use std::f32::consts::PI;

// =============================================================================
// Angle Constants
// =============================================================================

/// Degrees to radians.
pub const RAD_FACTOR: f32 = PI / 180.0;

/// Radians to degrees.
pub const DEG_FACTOR: f32 = 180.0 / PI;

/// Quarter turn.
pub const HALF_PI: f32 = PI / 2.0;

/// Full turn.
pub const TWO_PI: f32 = PI * 2.0;

// =============================================================================
// Range Helpers
// =============================================================================

/// Clamp `value` into `[min, max]`.
pub fn set_in_range(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Wrap `value` into the half-open interval `[lower, upper)`.
///
/// The bounds must describe a non-empty interval.
pub fn wrap(value: f32, lower: f32, upper: f32) -> f32 {
    debug_assert!(upper > lower, "rotary bounds are of negative or zero size");
    let distance = upper - lower;
    let times = ((value - lower) / distance).floor();
    value - times * distance
}

/// Signed shortest rotation from heading `from` to heading `to`, in degrees,
/// within `[-180, 180)`. Used so compass needles turn through the nearer
/// side of the rose.
pub fn shortest_angle(from: f32, to: f32) -> f32 {
    wrap(to - from, -180.0, 180.0)
}

/// Round `range` to a "nice" number (1, 2 or 5 times a power of ten) for
/// tickmark spacing. With `round` the nearest nice number is chosen,
/// otherwise the smallest nice number not below `range`.
pub fn nice_number(range: f32, round: bool) -> f32 {
    if range <= 0.0 || !range.is_finite() {
        return 0.0;
    }

    let exponent = range.log10().floor();
    let fraction = range / 10f32.powf(exponent);

    let nice_fraction = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice_fraction * 10f32.powf(exponent)
}

// =============================================================================
// Polar Helpers
// =============================================================================

/// Point at `radius` from `center` along `angle` (radians, measured
/// clockwise from the positive x axis to match screen coordinates).
pub fn polar_to_point(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + (radius * angle.cos()) as i32,
        center.y + (radius * angle.sin()) as i32,
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
