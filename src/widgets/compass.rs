//! Compass with a rotating needle over a cached rose.
//!
//! Headings are degrees in `[0, 360)`, measured clockwise from north.
//! Animated heading changes always rotate through the shorter side of the
//! rose, so 350 to 10 degrees swings 20 degrees across north rather than
//! 340 degrees the long way round. The needle settles with an elastic
//! overshoot, like a damped magnetic needle.
//!
//! The rose (rim, face, degree ticks, cardinal symbols) is cached in the
//! background layer; only the needle and hub are drawn per frame.

use std::time::Instant;

use bon::Builder;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};
use embedded_graphics::text::Text;

use crate::easing::Easing;
use crate::geometry::{HALF_PI, RAD_FACTOR, polar_to_point, shortest_angle, wrap};
use crate::layer::Layer;
use crate::repaint::RepaintGate;
use crate::styles::{CENTERED, LABEL_FONT, TITLE_FONT};
use crate::themes::{BackgroundTheme, PointerTheme, backgrounds, pointers};
use crate::tween::AnimatedValue;
use crate::widgets::primitives::{draw_knob, draw_radial_tick, draw_rim};

/// Duration of an animated heading change, in seconds.
const ROTATE_TIME: f32 = 2.0;

// =============================================================================
// Configuration
// =============================================================================

/// Visual parameters of a [`Compass`].
#[derive(Debug, Clone, Builder)]
pub struct CompassConfig {
    /// Widget edge length in pixels.
    #[builder(default = 200)]
    pub size: u32,
    #[builder(default = backgrounds::DARK_GRAY)]
    pub background: BackgroundTheme,
    #[builder(default = pointers::RED)]
    pub pointer: PointerTheme,
    /// Symbols for the eight principal winds, starting at north.
    #[builder(default = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"])]
    pub point_symbols: [&'static str; 8],
    /// Draw intermediate rose lines between the principal winds.
    #[builder(default = true)]
    pub rose_visible: bool,
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// =============================================================================
// Widget
// =============================================================================

/// Compass gauge with shortest-path needle rotation.
pub struct Compass {
    config: CompassConfig,
    /// Unwrapped heading; may leave [0, 360) during shortest-path rotation.
    heading: AnimatedValue,
    background: Layer,
    background_dirty: bool,
    gate: RepaintGate,
}

impl Compass {
    pub fn new(config: CompassConfig) -> Self {
        let size = Size::new(config.size, config.size);
        Self {
            heading: AnimatedValue::new(0.0),
            background: Layer::new(size),
            background_dirty: true,
            gate: RepaintGate::new(),
            config,
        }
    }

    /// Current heading in degrees, normalized into `[0, 360)`.
    pub fn value(&self) -> f32 {
        wrap(self.heading.get(), 0.0, 360.0)
    }

    /// Set the heading immediately. NaN is ignored; the heading is
    /// normalized into `[0, 360)`.
    pub fn set_value(&mut self, heading: f32) {
        if heading.is_nan() {
            return;
        }
        if self.heading.set(wrap(heading, 0.0, 360.0)) {
            self.gate.request();
        }
    }

    /// Rotate the needle to `heading` through the shorter side of the rose.
    /// NaN is ignored.
    pub fn set_value_animated(&mut self, heading: f32, now: Instant) {
        if heading.is_nan() {
            return;
        }
        let target = wrap(heading, 0.0, 360.0);
        let diff = shortest_angle(self.value(), target);
        if diff == 0.0 {
            return;
        }
        self.heading
            .animate_to(self.heading.get() + diff, Easing::ElasticOut, ROTATE_TIME, now);
    }

    pub fn is_value_animating(&self) -> bool {
        self.heading.is_animating()
    }

    pub fn set_background_theme(&mut self, theme: BackgroundTheme) {
        self.config.background = theme;
        self.background_dirty = true;
        self.gate.request();
    }

    pub fn set_pointer_theme(&mut self, theme: PointerTheme) {
        self.config.pointer = theme;
        self.gate.request();
    }

    /// Replace the wind symbols (e.g. localized cardinal letters).
    pub fn set_point_symbols(&mut self, symbols: [&'static str; 8]) {
        self.config.point_symbols = symbols;
        self.background_dirty = true;
        self.gate.request();
    }

    // -------------------------------------------------------------------------
    // Frame Integration
    // -------------------------------------------------------------------------

    /// Advance the needle animation by one host tick. Returns whether a
    /// repaint is pending afterwards.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.heading.update(now).changed {
            self.gate.request();
        }
        self.gate.is_pending()
    }

    pub fn needs_repaint(&self) -> bool {
        self.gate.is_pending()
    }

    /// Repaint the whole widget into `target`.
    pub fn draw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.gate.begin();

        if self.background_dirty {
            self.render_background();
            self.background_dirty = false;
        }
        self.background.draw_to(target, Point::zero())?;

        let center = self.center();
        let radius = self.config.size as f32 / 2.0;
        let angle = self.needle_angle();

        // North half of the needle in the pointer color, south half in a
        // neutral light shade
        let half_width = (radius / 22.0).max(2.0);
        let left = polar_to_point(center, half_width, angle - HALF_PI);
        let right = polar_to_point(center, half_width, angle + HALF_PI);

        let north_tip = polar_to_point(center, radius * 0.70, angle);
        Triangle::new(north_tip, left, right)
            .into_styled(PrimitiveStyle::with_fill(self.config.pointer.medium))
            .draw(target)?;

        let south_tip = polar_to_point(center, radius * 0.70, angle + core::f32::consts::PI);
        Triangle::new(south_tip, left, right)
            .into_styled(PrimitiveStyle::with_fill(pointers::GRAY.light))
            .draw(target)?;

        draw_knob(target, center, self.config.size / 10)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    fn center(&self) -> Point {
        Point::new(self.config.size as i32 / 2, self.config.size as i32 / 2)
    }

    /// Screen angle of the needle: heading 0 (north) points straight up.
    fn needle_angle(&self) -> f32 {
        self.heading.get() * RAD_FACTOR - HALF_PI
    }

    // -------------------------------------------------------------------------
    // Background Artwork
    // -------------------------------------------------------------------------

    fn render_background(&mut self) {
        self.background.clear();
        let center = self.center();
        let radius = self.config.size as f32 / 2.0;
        let theme = self.config.background;

        draw_rim(&mut self.background, center, self.config.size, &theme).ok();

        // Degree ticks every 5 degrees, stronger every 15
        for deg in (0..360).step_by(5) {
            let angle = deg as f32 * RAD_FACTOR - HALF_PI;
            let (r_inner, width) = if deg % 15 == 0 {
                (radius * 0.76, 2)
            } else {
                (radius * 0.80, 1)
            };
            draw_radial_tick(
                &mut self.background,
                center,
                angle,
                r_inner,
                radius * 0.84,
                width,
                theme.symbol,
            )
            .ok();
        }

        // Rose lines between the principal winds
        if self.config.rose_visible {
            for deg in (0..360).step_by(45) {
                let angle = (deg as f32 + 22.5) * RAD_FACTOR - HALF_PI;
                draw_radial_tick(
                    &mut self.background,
                    center,
                    angle,
                    radius * 0.2,
                    radius * 0.6,
                    1,
                    theme.symbol,
                )
                .ok();
            }
        }

        // Cardinal and intercardinal symbols
        for (i, symbol) in self.config.point_symbols.iter().enumerate() {
            let cardinal = i % 2 == 0;
            let angle = i as f32 * 45.0 * RAD_FACTOR - HALF_PI;
            let r = if cardinal { radius * 0.62 } else { radius * 0.66 };
            let font = if cardinal { TITLE_FONT } else { LABEL_FONT };
            let style = MonoTextStyle::new(font, theme.label);
            let pos = polar_to_point(center, r, angle);
            Text::with_text_style(symbol, pos, style, CENTERED)
                .draw(&mut self.background)
                .ok();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    fn test_compass() -> Compass {
        Compass::new(CompassConfig::builder().size(120).build())
    }

    #[test]
    fn test_heading_normalizes() {
        let mut compass = test_compass();
        compass.set_value(370.0);
        assert_eq!(compass.value(), 10.0);
        compass.set_value(-45.0);
        assert_eq!(compass.value(), 315.0);
    }

    #[test]
    fn test_nan_heading_is_ignored() {
        let mut compass = test_compass();
        compass.set_value(90.0);
        compass.set_value(f32::NAN);
        assert_eq!(compass.value(), 90.0);

        let t0 = Instant::now();
        compass.set_value_animated(f32::NAN, t0);
        assert!(!compass.is_value_animating());
    }

    #[test]
    fn test_animated_rotation_takes_shortest_path() {
        let t0 = Instant::now();
        let mut compass = test_compass();
        compass.set_value(350.0);
        compass.set_value_animated(10.0, t0);

        // Midway the unwrapped heading is between 350 and 370: the needle
        // crosses north instead of swinging the long way round
        compass.update(t0 + secs(1.0));
        let mid = compass.value();
        assert!(
            mid >= 350.0 || mid <= 30.0,
            "needle went the long way: {mid}"
        );

        for i in 1..=12 {
            compass.update(t0 + secs(1.0) + secs(0.1 * i as f32));
        }
        assert_eq!(compass.value(), 10.0, "lands exactly on the target heading");
        assert!(!compass.is_value_animating());
    }

    #[test]
    fn test_animated_rotation_westward() {
        let t0 = Instant::now();
        let mut compass = test_compass();
        compass.set_value(10.0);
        compass.set_value_animated(350.0, t0);

        for i in 1..=22 {
            compass.update(t0 + secs(0.1 * i as f32));
        }
        assert_eq!(compass.value(), 350.0);
    }

    #[test]
    fn test_same_heading_is_noop() {
        let t0 = Instant::now();
        let mut compass = test_compass();
        compass.set_value(45.0);
        compass.set_value_animated(45.0, t0);
        assert!(!compass.is_value_animating());
    }

    #[test]
    fn test_needle_moves_between_headings() {
        let mut compass = test_compass();
        compass.set_value(0.0);
        let mut north = Layer::new(Size::new(120, 120));
        compass.draw(&mut north).ok();

        compass.set_value(90.0);
        let mut east = Layer::new(Size::new(120, 120));
        compass.draw(&mut east).ok();

        // North needle tip near the top at heading 0, near the right at 90
        assert!(north.pixel(Point::new(60, 25)).is_some());
        assert_ne!(
            north.pixel(Point::new(60, 25)),
            east.pixel(Point::new(60, 25)),
        );
    }

    #[test]
    fn test_rose_cache_survives_needle_redraws() {
        let mut compass = test_compass();
        let mut a = Layer::new(Size::new(120, 120));
        compass.draw(&mut a).ok();

        compass.set_value(123.0);
        let mut b = Layer::new(Size::new(120, 120));
        compass.draw(&mut b).ok();

        // A rim pixel comes from the cached rose both times
        assert_eq!(a.pixel(Point::new(60, 1)), b.pixel(Point::new(60, 1)));
        assert_eq!(a.pixel(Point::new(60, 1)), Some(backgrounds::DARK_GRAY.rim_outer));
    }
}
