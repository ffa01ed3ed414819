//! Easing functions for animated value transitions.
//!
//! Every function maps elapsed time to an interpolated value using the
//! classic four-argument form:
//!
//! ```text
//! f(t, b, c, d) -> value
//! ```
//!
//! - `t`: elapsed time in seconds, `0 <= t <= d`
//! - `b`: begin value
//! - `c`: total change in value (`end - begin`)
//! - `d`: total duration in seconds
//!
//! # Endpoint Fidelity
//!
//! Every family returns `b` at `t = 0` and exactly `b + c` at `t = d`. This
//! is enforced with explicit guards rather than trusting the curve formulas,
//! so transitions always land exactly on their target value and never
//! asymptotically approach it. A non-positive duration returns `b + c` for
//! any `t` (instantaneous completion, never a division by zero).
//!
//! # Families
//!
//! | Family    | Curve                        | Extended parameters       |
//! |-----------|------------------------------|---------------------------|
//! | `linear`  | constant rate                | -                         |
//! | `regular` | quadratic                    | -                         |
//! | `strong`  | quartic                      | -                         |
//! | `elastic` | decaying sine overshoot      | amplitude `a`, period `p` |
//! | `back`    | slight reverse overshoot     | overshoot `s`             |
//! | `bounce`  | piecewise parabolic rebound  | -                         |
//!
//! The elastic and back families have `*_with` variants taking their tuning
//! parameters explicitly; the plain variants substitute the family defaults.
//!
//! # Curve Selection
//!
//! Widgets store an [`Easing`] value in their configuration and call
//! [`Easing::ease`], which dispatches to the free functions with defaults.
//! In-out variants are symmetric around `d / 2`; the quadratic in-out curve
//! passes through exactly `b + c / 2` at the midpoint.

use std::f32::consts::TAU;

// =============================================================================
// Family Defaults
// =============================================================================

/// Default overshoot factor for the back family (about 10% overshoot).
pub const BACK_DEFAULT_OVERSHOOT: f32 = 1.70158;

/// Default elastic period as a fraction of the duration (in/out variants).
const ELASTIC_PERIOD_FACTOR: f32 = 0.3;

/// Default elastic period fraction for the in-out variant.
const ELASTIC_PERIOD_FACTOR_IN_OUT: f32 = 0.45;

/// Endpoint guard shared by every family.
///
/// Returns `Some` when the inputs are outside the open interval where the
/// curve formula applies: non-positive durations complete instantly, and
/// `t` at or beyond either end lands exactly on the corresponding endpoint.
#[inline]
fn endpoints(t: f32, b: f32, c: f32, d: f32) -> Option<f32> {
    if d <= 0.0 || t >= d {
        Some(b + c)
    } else if t <= 0.0 {
        Some(b)
    } else {
        None
    }
}

// =============================================================================
// Linear
// =============================================================================

/// Constant-rate interpolation.
pub fn linear(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    c * t / d + b
}

// =============================================================================
// Regular (quadratic)
// =============================================================================

/// Quadratic acceleration from standstill.
pub fn regular_ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    let t = t / d;
    c * t * t + b
}

/// Quadratic deceleration to standstill.
pub fn regular_ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    let t = t / d;
    -c * t * (t - 2.0) + b
}

/// Quadratic acceleration then deceleration, symmetric around `d / 2`.
pub fn regular_ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * t * t + b
    } else {
        t -= 1.0;
        -c / 2.0 * (t * (t - 2.0) - 1.0) + b
    }
}

// =============================================================================
// Strong (quartic)
// =============================================================================

/// Quartic acceleration from standstill.
pub fn strong_ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    let t = t / d;
    c * t * t * t * t + b
}

/// Quartic deceleration to standstill.
pub fn strong_ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    let t = t / d - 1.0;
    -c * (t * t * t * t - 1.0) + b
}

/// Quartic acceleration then deceleration, symmetric around `d / 2`.
pub fn strong_ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * t * t * t * t + b
    } else {
        t -= 2.0;
        -c / 2.0 * (t * t * t * t - 2.0) + b
    }
}

// =============================================================================
// Elastic
// =============================================================================

/// Resolve elastic amplitude/period into the effective amplitude and phase
/// shift. An amplitude of zero or smaller than the total change cannot reach
/// the target, so it falls back to the default (amplitude = change).
fn elastic_params(c: f32, a: f32, p: f32) -> (f32, f32) {
    if a == 0.0 || a.abs() < c.abs() {
        (c, p / 4.0)
    } else {
        (a, p / TAU * (c / a).asin())
    }
}

/// Elastic ease-in with explicit amplitude `a` and period `p`.
pub fn elastic_ease_in_with(t: f32, b: f32, c: f32, d: f32, a: f32, p: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    if c == 0.0 {
        return b;
    }
    let (a, s) = elastic_params(c, a, p);
    let t = t / d - 1.0;
    -(a * (10.0 * t).exp2() * ((t * d - s) * TAU / p).sin()) + b
}

/// Elastic ease-out with explicit amplitude `a` and period `p`.
pub fn elastic_ease_out_with(t: f32, b: f32, c: f32, d: f32, a: f32, p: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    if c == 0.0 {
        return b;
    }
    let (a, s) = elastic_params(c, a, p);
    let t = t / d;
    a * (-10.0 * t).exp2() * ((t * d - s) * TAU / p).sin() + c + b
}

/// Elastic ease-in-out with explicit amplitude `a` and period `p`.
pub fn elastic_ease_in_out_with(t: f32, b: f32, c: f32, d: f32, a: f32, p: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    if c == 0.0 {
        return b;
    }
    let (a, s) = elastic_params(c, a, p);
    let mut t = t / (d / 2.0);
    t -= 1.0;
    if t < 0.0 {
        -0.5 * (a * (10.0 * t).exp2() * ((t * d - s) * TAU / p).sin()) + b
    } else {
        a * (-10.0 * t).exp2() * ((t * d - s) * TAU / p).sin() * 0.5 + c + b
    }
}

/// Elastic ease-in with the default amplitude and period (`p = 0.3 d`).
pub fn elastic_ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    elastic_ease_in_with(t, b, c, d, c, d * ELASTIC_PERIOD_FACTOR)
}

/// Elastic ease-out with the default amplitude and period (`p = 0.3 d`).
pub fn elastic_ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    elastic_ease_out_with(t, b, c, d, c, d * ELASTIC_PERIOD_FACTOR)
}

/// Elastic ease-in-out with the default amplitude and period (`p = 0.45 d`).
pub fn elastic_ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    elastic_ease_in_out_with(t, b, c, d, c, d * ELASTIC_PERIOD_FACTOR_IN_OUT)
}

// =============================================================================
// Back
// =============================================================================

/// Back ease-in with explicit overshoot `s`.
pub fn back_ease_in_with(t: f32, b: f32, c: f32, d: f32, s: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    let t = t / d;
    c * t * t * ((s + 1.0) * t - s) + b
}

/// Back ease-out with explicit overshoot `s`.
pub fn back_ease_out_with(t: f32, b: f32, c: f32, d: f32, s: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    let t = t / d - 1.0;
    c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
}

/// Back ease-in-out with explicit overshoot `s` (scaled by 1.525 so the
/// combined curve overshoots by the same fraction as the one-sided variants).
pub fn back_ease_in_out_with(t: f32, b: f32, c: f32, d: f32, s: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    let s = s * 1.525;
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b
    } else {
        t -= 2.0;
        c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
    }
}

/// Back ease-in with the default overshoot.
pub fn back_ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    back_ease_in_with(t, b, c, d, BACK_DEFAULT_OVERSHOOT)
}

/// Back ease-out with the default overshoot.
pub fn back_ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    back_ease_out_with(t, b, c, d, BACK_DEFAULT_OVERSHOOT)
}

/// Back ease-in-out with the default overshoot.
pub fn back_ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    back_ease_in_out_with(t, b, c, d, BACK_DEFAULT_OVERSHOOT)
}

// =============================================================================
// Bounce
// =============================================================================

/// Bounce ease-out: a ball dropped onto the target, rebounding to rest.
pub fn bounce_ease_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    let t = t / d;
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + b
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + b
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984375) + b
    }
}

/// Bounce ease-in: the ease-out curve mirrored in time.
pub fn bounce_ease_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    c - bounce_ease_out(d - t, 0.0, c, d) + b
}

/// Bounce ease-in-out, symmetric around `d / 2`.
pub fn bounce_ease_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if let Some(v) = endpoints(t, b, c, d) {
        return v;
    }
    if t < d / 2.0 {
        bounce_ease_in(t * 2.0, 0.0, c, d) * 0.5 + b
    } else {
        bounce_ease_out(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
    }
}

// =============================================================================
// Curve Registry
// =============================================================================

/// Named easing curve, selectable in widget configuration.
///
/// Dispatches to the free functions above with the family defaults for the
/// elastic and back tuning parameters. This is the declarative handle widget
/// code stores; the functions themselves stay pure and stateless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    RegularIn,
    RegularOut,
    #[default]
    RegularInOut,
    StrongIn,
    StrongOut,
    StrongInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    BackIn,
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
}

impl Easing {
    /// Every named curve, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Linear,
        Self::RegularIn,
        Self::RegularOut,
        Self::RegularInOut,
        Self::StrongIn,
        Self::StrongOut,
        Self::StrongInOut,
        Self::ElasticIn,
        Self::ElasticOut,
        Self::ElasticInOut,
        Self::BackIn,
        Self::BackOut,
        Self::BackInOut,
        Self::BounceIn,
        Self::BounceOut,
        Self::BounceInOut,
    ];

    /// Evaluate this curve at elapsed time `t`.
    pub fn ease(self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        match self {
            Self::Linear => linear(t, b, c, d),
            Self::RegularIn => regular_ease_in(t, b, c, d),
            Self::RegularOut => regular_ease_out(t, b, c, d),
            Self::RegularInOut => regular_ease_in_out(t, b, c, d),
            Self::StrongIn => strong_ease_in(t, b, c, d),
            Self::StrongOut => strong_ease_out(t, b, c, d),
            Self::StrongInOut => strong_ease_in_out(t, b, c, d),
            Self::ElasticIn => elastic_ease_in(t, b, c, d),
            Self::ElasticOut => elastic_ease_out(t, b, c, d),
            Self::ElasticInOut => elastic_ease_in_out(t, b, c, d),
            Self::BackIn => back_ease_in(t, b, c, d),
            Self::BackOut => back_ease_out(t, b, c, d),
            Self::BackInOut => back_ease_in_out(t, b, c, d),
            Self::BounceIn => bounce_ease_in(t, b, c, d),
            Self::BounceOut => bounce_ease_out(t, b, c, d),
            Self::BounceInOut => bounce_ease_in_out(t, b, c, d),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Representative (begin, change, duration) triples, including negative
    /// change and sub-second durations.
    const CASES: [(f32, f32, f32); 4] = [
        (0.0, 100.0, 1.0),
        (20.0, 60.0, 2.0),
        (-5.0, -10.0, 0.5),
        (180.0, -90.0, 2.5),
    ];

    #[test]
    fn test_endpoint_fidelity_all_families() {
        for easing in Easing::ALL {
            for (b, c, d) in CASES {
                assert_eq!(easing.ease(0.0, b, c, d), b, "{easing:?} at t=0");
                assert_eq!(easing.ease(d, b, c, d), b + c, "{easing:?} at t=d");
            }
        }
    }

    #[test]
    fn test_out_of_range_time_clamps_to_endpoints() {
        for easing in Easing::ALL {
            assert_eq!(easing.ease(-0.5, 10.0, 40.0, 1.0), 10.0, "{easing:?} before start");
            assert_eq!(easing.ease(1.5, 10.0, 40.0, 1.0), 50.0, "{easing:?} after end");
        }
    }

    #[test]
    fn test_zero_and_negative_duration_complete_instantly() {
        for easing in Easing::ALL {
            for t in [0.0, 0.5, 1.0] {
                assert_eq!(easing.ease(t, 10.0, 40.0, 0.0), 50.0, "{easing:?} d=0");
                assert_eq!(easing.ease(t, 10.0, 40.0, -1.0), 50.0, "{easing:?} d<0");
            }
        }
    }

    #[test]
    fn test_regular_in_out_midpoint_exact() {
        // Quadratic in-out passes through exactly b + c/2 at t = d/2
        assert_eq!(regular_ease_in_out(1.0, 20.0, 60.0, 2.0), 50.0);
        assert_eq!(Easing::RegularInOut.ease(1.0, 20.0, 60.0, 2.0), 50.0);
    }

    #[test]
    fn test_in_out_symmetry_around_midpoint() {
        // f(d/2 - x) - b must mirror (b + c) - f(d/2 + x)
        let in_outs = [
            Easing::RegularInOut,
            Easing::StrongInOut,
            Easing::BackInOut,
            Easing::BounceInOut,
            Easing::ElasticInOut,
        ];
        let (b, c, d) = (0.0f32, 1.0f32, 2.0f32);
        for easing in in_outs {
            for x in [0.1, 0.3, 0.5, 0.7, 0.9] {
                let lo = easing.ease(d / 2.0 - x, b, c, d) - b;
                let hi = (b + c) - easing.ease(d / 2.0 + x, b, c, d);
                assert!(
                    (lo - hi).abs() < 1e-4,
                    "{easing:?} asymmetric at x={x}: {lo} vs {hi}"
                );
            }
        }
    }

    #[test]
    fn test_linear_is_proportional() {
        assert_eq!(linear(0.25, 0.0, 100.0, 1.0), 25.0);
        assert_eq!(linear(0.5, 0.0, 100.0, 1.0), 50.0);
        assert_eq!(linear(0.75, 0.0, 100.0, 1.0), 75.0);
    }

    #[test]
    fn test_regular_in_stays_below_linear() {
        // Acceleration from standstill lags the linear ramp before d/2
        for t in [0.1, 0.2, 0.3, 0.4] {
            let eased = regular_ease_in(t, 0.0, 100.0, 1.0);
            let straight = linear(t, 0.0, 100.0, 1.0);
            assert!(eased < straight, "at t={t}: {eased} >= {straight}");
        }
    }

    #[test]
    fn test_back_ease_in_dips_below_start() {
        // The back family pulls away from the start before accelerating
        let v = back_ease_in(0.3, 0.0, 100.0, 1.0);
        assert!(v < 0.0, "expected dip below start, got {v}");
    }

    #[test]
    fn test_elastic_ease_out_overshoots_target() {
        // The decaying sine must exceed the target at least once
        let overshoot = (1..100)
            .map(|i| elastic_ease_out(i as f32 / 100.0, 0.0, 100.0, 1.0))
            .fold(f32::MIN, f32::max);
        assert!(overshoot > 100.0, "no overshoot observed, max {overshoot}");
    }

    #[test]
    fn test_elastic_zero_change_is_flat() {
        for t in [0.1, 0.5, 0.9] {
            assert_eq!(elastic_ease_in(t, 42.0, 0.0, 1.0), 42.0);
            assert_eq!(elastic_ease_out(t, 42.0, 0.0, 1.0), 42.0);
            assert_eq!(elastic_ease_in_out(t, 42.0, 0.0, 1.0), 42.0);
        }
    }

    #[test]
    fn test_elastic_defaults_match_explicit_params() {
        for t in [0.2, 0.5, 0.8] {
            assert_eq!(
                elastic_ease_out(t, 0.0, 100.0, 1.0),
                elastic_ease_out_with(t, 0.0, 100.0, 1.0, 100.0, 0.3),
            );
        }
    }

    #[test]
    fn test_elastic_undersized_amplitude_falls_back_to_default() {
        // An amplitude smaller than the change cannot reach the target;
        // the default (amplitude = change) must be substituted instead
        for t in [0.2, 0.5, 0.8] {
            assert_eq!(
                elastic_ease_out_with(t, 0.0, 100.0, 1.0, 10.0, 0.3),
                elastic_ease_out(t, 0.0, 100.0, 1.0),
            );
        }
    }

    #[test]
    fn test_bounce_out_stays_within_travel() {
        // Bounce never overshoots: all intermediate values within [b, b+c]
        for i in 1..100 {
            let v = bounce_ease_out(i as f32 / 100.0, 0.0, 100.0, 1.0);
            assert!((0.0..=100.0).contains(&v), "bounce out of range at {i}: {v}");
        }
    }
}
