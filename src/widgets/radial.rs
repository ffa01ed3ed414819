//! Round pointer gauge with tickmarks, sections, and threshold alarm.
//!
//! The static artwork (rim, dial face, tickmarks, labels, section bands,
//! threshold marker, title) is rendered once into a cached background layer
//! and blitted on every repaint; only the pointer, knob, measured-value
//! markers and the threshold LED are drawn per frame. Setters that change
//! the artwork flip the invalidation flag so the layer is rebuilt on the
//! next repaint.
//!
//! # Animated Movement
//!
//! `set_value_animated` drives the pointer through the shared transition
//! engine with a quadratic in-out curve. The transition time scales with the
//! travel distance so a small correction moves quickly while a full-scale
//! deflection takes `full_scale_time` seconds, with a floor of one fifth of
//! that so short hops remain visible.
//!
//! # Threshold Alarm
//!
//! When a threshold is configured and the value rises to or above it, the
//! on-dial LED starts blinking; dropping below the threshold turns it off.
//! Blinking is driven by the host timestamps handed to `update`.

use std::time::{Duration, Instant};

use bon::Builder;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use embedded_graphics::text::Text;

use crate::colors;
use crate::easing::Easing;
use crate::geometry::{HALF_PI, RAD_FACTOR, TWO_PI, nice_number, set_in_range};
use crate::layer::Layer;
use crate::repaint::RepaintGate;
use crate::styles::{CENTERED, LABEL_FONT, TITLE_FONT};
use crate::themes::{BackgroundTheme, PointerTheme, Section, backgrounds, pointers};
use crate::tween::AnimatedValue;
use crate::widgets::primitives::{
    draw_arc_band, draw_knob, draw_pointer, draw_radial_tick, draw_rim, format_value,
};

/// Blink period of the threshold LED.
const LED_BLINK_INTERVAL: Duration = Duration::from_secs(1);

/// Upper bound on major tickmarks, scale steps are niced to stay below it.
const MAX_MAJOR_TICKS: f32 = 10.0;

/// Minor tickmarks per major interval (before nicing).
const MAX_MINOR_TICKS: f32 = 10.0;

// =============================================================================
// Gauge Geometry
// =============================================================================

/// Angular extent of the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GaugeKind {
    /// 90 degree scale.
    Quarter,
    /// 180 degree scale.
    Half,
    /// 270 degree scale.
    ThreeQuarter,
    /// Full circle minus a 60 degree free area at the bottom.
    #[default]
    Standard,
}

impl GaugeKind {
    /// Rotation offset of the scale start and the swept angle, in radians.
    pub(crate) fn rotation_params(self) -> (f32, f32) {
        match self {
            Self::Quarter => (core::f32::consts::PI, HALF_PI),
            Self::Half => (core::f32::consts::PI, core::f32::consts::PI),
            Self::ThreeQuarter => (HALF_PI, 1.5 * core::f32::consts::PI),
            Self::Standard => {
                let free_area = 60.0 * RAD_FACTOR;
                (HALF_PI + free_area / 2.0, TWO_PI - free_area)
            }
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Visual and scale parameters of a [`Radial`] gauge.
#[derive(Debug, Clone, Builder)]
pub struct RadialConfig {
    /// Widget edge length in pixels (the gauge is square).
    #[builder(default = 200)]
    pub size: u32,
    #[builder(default = 0.0)]
    pub min_value: f32,
    #[builder(default = 100.0)]
    pub max_value: f32,
    #[builder(default)]
    pub gauge_kind: GaugeKind,
    #[builder(default = backgrounds::DARK_GRAY)]
    pub background: BackgroundTheme,
    #[builder(default = pointers::RED)]
    pub pointer: PointerTheme,
    /// Colored scale ranges, drawn as arc bands inside the tickmarks.
    #[builder(default)]
    pub sections: Vec<Section>,
    /// Alarm threshold; the on-dial LED blinks while the value is at or
    /// above it.
    pub threshold: Option<f32>,
    /// Seconds for a full-scale pointer deflection.
    #[builder(default = 2.5)]
    pub full_scale_time: f32,
    #[builder(default = "")]
    pub title: &'static str,
    #[builder(default = "")]
    pub unit: &'static str,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// =============================================================================
// Widget
// =============================================================================

/// Round pointer gauge.
pub struct Radial {
    config: RadialConfig,
    value: AnimatedValue,
    min_measured: f32,
    max_measured: f32,
    led_blinking: bool,
    led_on: bool,
    last_blink: Option<Instant>,
    background: Layer,
    background_dirty: bool,
    gate: RepaintGate,
}

impl Radial {
    pub fn new(config: RadialConfig) -> Self {
        let size = Size::new(config.size, config.size);
        let initial = config.min_value;
        Self {
            min_measured: config.max_value,
            max_measured: config.min_value,
            value: AnimatedValue::new(initial),
            led_blinking: false,
            led_on: false,
            last_blink: None,
            background: Layer::new(size),
            background_dirty: true,
            gate: RepaintGate::new(),
            config,
        }
    }

    // -------------------------------------------------------------------------
    // Value
    // -------------------------------------------------------------------------

    pub fn value(&self) -> f32 {
        self.value.get()
    }

    /// Set the value immediately. NaN is ignored; the value is clamped into
    /// the scale range.
    pub fn set_value(&mut self, value: f32) {
        if value.is_nan() {
            return;
        }
        let target = set_in_range(value, self.config.min_value, self.config.max_value);
        if self.value.set(target) {
            self.track_measured();
            self.gate.request();
        }
    }

    /// Animate the pointer toward `value`. NaN is ignored; the target is
    /// clamped into the scale range. A transition already in flight is
    /// stopped and replaced.
    pub fn set_value_animated(&mut self, value: f32, now: Instant) {
        if value.is_nan() {
            return;
        }
        let target = set_in_range(value, self.config.min_value, self.config.max_value);
        let span = self.span();
        let time = ((self.config.full_scale_time * (target - self.value.get()).abs()) / span)
            .max(self.config.full_scale_time / 5.0);
        self.value.animate_to(target, Easing::RegularInOut, time, now);
    }

    pub fn is_value_animating(&self) -> bool {
        self.value.is_animating()
    }

    // -------------------------------------------------------------------------
    // Measured Extremes
    // -------------------------------------------------------------------------

    pub fn min_measured_value(&self) -> f32 {
        self.min_measured
    }

    pub fn max_measured_value(&self) -> f32 {
        self.max_measured
    }

    /// Reset the minimum marker to the current value.
    pub fn reset_min_measured_value(&mut self) {
        self.min_measured = self.value.get();
        self.gate.request();
    }

    /// Reset the maximum marker to the current value.
    pub fn reset_max_measured_value(&mut self) {
        self.max_measured = self.value.get();
        self.gate.request();
    }

    fn track_measured(&mut self) {
        let value = self.value.get();
        if value > self.max_measured {
            self.max_measured = value;
        }
        if value < self.min_measured {
            self.min_measured = value;
        }
    }

    // -------------------------------------------------------------------------
    // Threshold
    // -------------------------------------------------------------------------

    pub fn threshold(&self) -> Option<f32> {
        self.config.threshold
    }

    /// Change the alarm threshold. NaN is ignored, the threshold is clamped
    /// into the scale range.
    pub fn set_threshold(&mut self, threshold: Option<f32>) {
        match threshold {
            Some(t) if t.is_nan() => return,
            Some(t) => {
                self.config.threshold =
                    Some(set_in_range(t, self.config.min_value, self.config.max_value));
            }
            None => self.config.threshold = None,
        }
        self.background_dirty = true;
        self.gate.request();
    }

    /// True while the value is at or above the configured threshold.
    pub fn is_threshold_exceeded(&self) -> bool {
        self.config
            .threshold
            .is_some_and(|t| self.value.get() >= t)
    }

    // -------------------------------------------------------------------------
    // Appearance
    // -------------------------------------------------------------------------

    pub fn background_theme(&self) -> BackgroundTheme {
        self.config.background
    }

    pub fn set_background_theme(&mut self, theme: BackgroundTheme) {
        self.config.background = theme;
        self.background_dirty = true;
        self.gate.request();
    }

    pub fn pointer_theme(&self) -> PointerTheme {
        self.config.pointer
    }

    pub fn set_pointer_theme(&mut self, theme: PointerTheme) {
        self.config.pointer = theme;
        self.gate.request();
    }

    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.config.sections = sections;
        self.background_dirty = true;
        self.gate.request();
    }

    pub fn set_title(&mut self, title: &'static str) {
        self.config.title = title;
        self.background_dirty = true;
        self.gate.request();
    }

    // -------------------------------------------------------------------------
    // Frame Integration
    // -------------------------------------------------------------------------

    /// Advance animations by one host tick. Returns whether a repaint is
    /// pending afterwards.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.value.update(now).changed {
            self.track_measured();
            self.gate.request();
        }

        let exceeded = self.is_threshold_exceeded();
        if exceeded != self.led_blinking {
            // Alarm state flipped: light or darken the LED immediately
            self.led_blinking = exceeded;
            self.led_on = exceeded;
            self.last_blink = Some(now);
            self.gate.request();
        } else if self.led_blinking {
            let due = self
                .last_blink
                .is_none_or(|last| now.saturating_duration_since(last) >= LED_BLINK_INTERVAL);
            if due {
                self.led_on = !self.led_on;
                self.last_blink = Some(now);
                self.gate.request();
            }
        }

        self.gate.is_pending()
    }

    /// True while a repaint is scheduled but not yet executed.
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

        // Measured extreme markers ride just outside the tickmarks
        if self.max_measured > self.min_measured {
            draw_radial_tick(
                target,
                center,
                self.angle_for(self.min_measured),
                radius * 0.86,
                radius * 0.91,
                2,
                colors::CYAN,
            )?;
            draw_radial_tick(
                target,
                center,
                self.angle_for(self.max_measured),
                radius * 0.86,
                radius * 0.91,
                2,
                colors::RED,
            )?;
        }

        if self.config.threshold.is_some() {
            let led_color = if self.led_on {
                colors::RED
            } else {
                colors::DARKER_GRAY
            };
            let led_center = Point::new(
                (self.config.size as f32 * 0.6) as i32,
                (self.config.size as f32 * 0.4) as i32,
            );
            Circle::with_center(led_center, self.config.size / 12)
                .into_styled(PrimitiveStyle::with_fill(led_color))
                .draw(target)?;
        }

        draw_pointer(
            target,
            center,
            self.angle_for(self.value.get()),
            radius * 0.72,
            radius * 0.18,
            (radius / 25.0).max(2.0),
            &self.config.pointer,
        )?;
        draw_knob(target, center, self.config.size / 8)?;

        Ok(())
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    fn center(&self) -> Point {
        Point::new(self.config.size as i32 / 2, self.config.size as i32 / 2)
    }

    fn span(&self) -> f32 {
        let span = self.config.max_value - self.config.min_value;
        if span > 0.0 { span } else { 1.0 }
    }

    /// Pointer angle for a scale value, in radians.
    fn angle_for(&self, value: f32) -> f32 {
        let (offset, range) = self.config.gauge_kind.rotation_params();
        offset + (value - self.config.min_value) / self.span() * range
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

        // Section bands sit just inside the tickmarks
        for section in &self.config.sections {
            let start = set_in_range(section.start, self.config.min_value, self.config.max_value);
            let stop = set_in_range(section.stop, self.config.min_value, self.config.max_value);
            let (offset, range) = self.config.gauge_kind.rotation_params();
            let span = self.span();
            let a0 = offset + (start - self.config.min_value) / span * range;
            let a1 = offset + (stop - self.config.min_value) / span * range;
            draw_arc_band(&mut self.background, center, radius * 0.68, a0, a1, 4, section.color)
                .ok();
        }

        self.render_tickmarks(center, radius);

        if let Some(threshold) = self.config.threshold {
            let angle = self.angle_for(threshold);
            draw_radial_tick(
                &mut self.background,
                center,
                angle,
                radius * 0.62,
                radius * 0.7,
                3,
                colors::RED,
            )
            .ok();
        }

        if !self.config.title.is_empty() {
            let style = MonoTextStyle::new(TITLE_FONT, theme.label);
            let pos = Point::new(center.x, center.y - (radius * 0.3) as i32);
            Text::with_text_style(self.config.title, pos, style, CENTERED)
                .draw(&mut self.background)
                .ok();
        }
        if !self.config.unit.is_empty() {
            let style = MonoTextStyle::new(LABEL_FONT, theme.label);
            let pos = Point::new(center.x, center.y + (radius * 0.3) as i32);
            Text::with_text_style(self.config.unit, pos, style, CENTERED)
                .draw(&mut self.background)
                .ok();
        }
    }

    fn render_tickmarks(&mut self, center: Point, radius: f32) {
        let theme = self.config.background;
        let span = self.span();

        // Nice tick spacing, matching the scale nicing of classic gauges
        let nice_range = nice_number(span, false);
        let major = nice_number(nice_range / (MAX_MAJOR_TICKS - 1.0), true);
        let minor = nice_number(major / (MAX_MINOR_TICKS - 1.0), true);
        if major <= 0.0 || minor <= 0.0 {
            return;
        }

        let steps = (span / minor).round() as u32;
        let per_major = (major / minor).round().max(1.0) as u32;
        let label_style = MonoTextStyle::new(LABEL_FONT, theme.label);

        for i in 0..=steps {
            let value = self.config.min_value + i as f32 * minor;
            let angle = self.angle_for(value);

            if i % per_major == 0 {
                draw_radial_tick(
                    &mut self.background,
                    center,
                    angle,
                    radius * 0.73,
                    radius * 0.83,
                    2,
                    theme.symbol,
                )
                .ok();

                let text = format_value(value, 0);
                let pos = crate::geometry::polar_to_point(center, radius * 0.58, angle);
                Text::with_text_style(text.as_str(), pos, label_style, CENTERED)
                    .draw(&mut self.background)
                    .ok();
            } else {
                draw_radial_tick(
                    &mut self.background,
                    center,
                    angle,
                    radius * 0.78,
                    radius * 0.83,
                    1,
                    theme.symbol,
                )
                .ok();
            }
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

    fn test_gauge() -> Radial {
        Radial::new(RadialConfig::builder().size(120).build())
    }

    #[test]
    fn test_set_value_clamps_into_range() {
        let mut gauge = test_gauge();
        gauge.set_value(150.0);
        assert_eq!(gauge.value(), 100.0);
        gauge.set_value(-20.0);
        assert_eq!(gauge.value(), 0.0);
    }

    #[test]
    fn test_nan_value_is_ignored() {
        let mut gauge = test_gauge();
        gauge.set_value(42.0);
        gauge.draw(&mut Layer::new(Size::new(120, 120))).ok();
        assert!(!gauge.needs_repaint());

        gauge.set_value(f32::NAN);
        assert_eq!(gauge.value(), 42.0);
        assert!(!gauge.needs_repaint(), "NaN must not schedule a repaint");

        let t0 = Instant::now();
        gauge.set_value_animated(f32::NAN, t0);
        assert!(!gauge.is_value_animating());
    }

    #[test]
    fn test_animated_value_lands_exactly() {
        let t0 = Instant::now();
        let mut gauge = test_gauge();
        gauge.set_value_animated(80.0, t0);
        assert!(gauge.is_value_animating());

        // Full-scale time 2.5 s; 80% travel takes 2.0 s
        for i in 1..=21 {
            gauge.update(t0 + secs(0.1 * i as f32));
        }
        assert_eq!(gauge.value(), 80.0);
        assert!(!gauge.is_value_animating());
        assert_eq!(gauge.max_measured_value(), 80.0);
    }

    #[test]
    fn test_animation_time_scales_with_travel() {
        let t0 = Instant::now();
        let mut gauge = test_gauge();

        // Small hop: floored at full_scale_time / 5 = 0.5 s
        gauge.set_value_animated(1.0, t0);
        gauge.update(t0 + secs(0.4));
        assert!(gauge.is_value_animating(), "short hop still in flight at 0.4 s");
        gauge.update(t0 + secs(0.55));
        assert!(!gauge.is_value_animating(), "short hop done by 0.55 s");

        // Full travel: takes the whole full_scale_time
        let t1 = t0 + secs(10.0);
        gauge.set_value(0.0);
        gauge.set_value_animated(100.0, t1);
        gauge.update(t1 + secs(2.4));
        assert!(gauge.is_value_animating(), "full deflection still in flight at 2.4 s");
        gauge.update(t1 + secs(2.6));
        assert!(!gauge.is_value_animating());
    }

    #[test]
    fn test_restart_replaces_transition() {
        let t0 = Instant::now();
        let mut gauge = test_gauge();
        gauge.set_value_animated(100.0, t0);
        gauge.update(t0 + secs(1.0));
        let mid = gauge.value();
        assert!(mid > 0.0 && mid < 100.0);

        gauge.set_value_animated(0.0, t0 + secs(1.0));
        // Wait past both transitions' end; the replaced one must not land
        for i in 1..=30 {
            gauge.update(t0 + secs(1.0) + secs(0.1 * i as f32));
        }
        assert_eq!(gauge.value(), 0.0);
    }

    #[test]
    fn test_threshold_led_blinks() {
        let t0 = Instant::now();
        let mut gauge = Radial::new(
            RadialConfig::builder().size(120).threshold(50.0).build(),
        );
        assert!(!gauge.is_threshold_exceeded());

        gauge.set_value(75.0);
        assert!(gauge.is_threshold_exceeded());

        // LED lights on the first update after exceeding
        gauge.update(t0);
        assert!(gauge.led_on);

        // And toggles after the blink interval
        gauge.update(t0 + secs(1.1));
        assert!(!gauge.led_on);
        gauge.update(t0 + secs(2.2));
        assert!(gauge.led_on);

        // Dropping below the threshold turns it off
        gauge.set_value(10.0);
        gauge.update(t0 + secs(2.3));
        assert!(!gauge.led_on);
        assert!(!gauge.led_blinking);
    }

    #[test]
    fn test_measured_extremes_track_and_reset() {
        let mut gauge = test_gauge();
        gauge.set_value(30.0);
        gauge.set_value(80.0);
        gauge.set_value(50.0);

        assert_eq!(gauge.max_measured_value(), 80.0);
        assert_eq!(gauge.min_measured_value(), 30.0);

        gauge.reset_max_measured_value();
        assert_eq!(gauge.max_measured_value(), 50.0);
    }

    #[test]
    fn test_background_cache_invalidation() {
        let mut gauge = test_gauge();
        let mut frame_a = Layer::new(Size::new(120, 120));
        gauge.draw(&mut frame_a).ok();
        assert!(frame_a.drawn_pixel_count() > 0);

        // Same state: identical output from the cached background
        let mut frame_b = Layer::new(Size::new(120, 120));
        gauge.draw(&mut frame_b).ok();
        assert_eq!(
            frame_a.pixel(Point::new(60, 10)),
            frame_b.pixel(Point::new(60, 10))
        );

        // Theme change rebuilds the artwork with different colors
        gauge.set_background_theme(backgrounds::WHITE);
        assert!(gauge.needs_repaint());
        let mut frame_c = Layer::new(Size::new(120, 120));
        gauge.draw(&mut frame_c).ok();
        assert_ne!(
            frame_a.pixel(Point::new(60, 95)),
            frame_c.pixel(Point::new(60, 95)),
            "face color must change with the theme"
        );
    }

    #[test]
    fn test_update_requests_single_repaint_per_frame() {
        let t0 = Instant::now();
        let mut gauge = test_gauge();
        gauge.set_value_animated(100.0, t0);

        // Many ticks before the host gets to draw: still one pending repaint
        for i in 1..=10 {
            gauge.update(t0 + secs(0.01 * i as f32));
        }
        assert!(gauge.needs_repaint());

        gauge.draw(&mut Layer::new(Size::new(120, 120))).ok();
        assert!(!gauge.needs_repaint(), "draw entry clears the pending flag");
    }

    #[test]
    fn test_pointer_moves_with_value() {
        let mut gauge = test_gauge();
        gauge.set_value(0.0);
        let mut low = Layer::new(Size::new(120, 120));
        gauge.draw(&mut low).ok();

        gauge.set_value(100.0);
        let mut high = Layer::new(Size::new(120, 120));
        gauge.draw(&mut high).ok();

        // Pointer artwork must differ between scale ends
        let differing = (0..120)
            .flat_map(|y| (0..120).map(move |x| Point::new(x, y)))
            .filter(|&p| low.pixel(p) != high.pixel(p))
            .count();
        assert!(differing > 20, "only {differing} pixels differ");
    }
}
