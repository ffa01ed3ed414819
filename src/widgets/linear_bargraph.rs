//! Vertical bargraph gauge with tickmarks, sections, and an LCD readout.
//!
//! The bar rises from the bottom of the track toward the current value. When
//! sections are configured, the bar takes the color of the section the value
//! currently lies in, so a temperature bar can shift green/yellow/red as it
//! climbs. The formatted value is shown on an LCD field below the track.
//!
//! Static artwork (bezel, face, track, tickmarks, labels, threshold marker,
//! LCD face, title) lives in a cached background layer; the bar fill, the
//! measured-extreme markers and the LCD text are drawn per frame.
//!
//! Animated setters share the radial gauge's travel-time policy: duration
//! proportional to distance with a floor of one fifth of the full-scale
//! time.

use std::time::Instant;

use bon::Builder;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors;
use crate::easing::Easing;
use crate::geometry::set_in_range;
use crate::layer::Layer;
use crate::repaint::RepaintGate;
use crate::styles::{CENTERED, LABEL_FONT, LCD_FONT_MEDIUM, RIGHT_ALIGNED};
use crate::themes::{
    BackgroundTheme, LcdTheme, PointerTheme, Section, backgrounds, lcds, pointers,
    section_color_for,
};
use crate::tween::AnimatedValue;
use crate::widgets::primitives::format_value;

// =============================================================================
// Configuration
// =============================================================================

/// Visual and scale parameters of a [`LinearBargraph`].
#[derive(Debug, Clone, Builder)]
pub struct LinearBargraphConfig {
    #[builder(default = 140)]
    pub width: u32,
    #[builder(default = 320)]
    pub height: u32,
    #[builder(default = 0.0)]
    pub min_value: f32,
    #[builder(default = 100.0)]
    pub max_value: f32,
    #[builder(default = backgrounds::DARK_GRAY)]
    pub background: BackgroundTheme,
    /// Bar color when no section matches the current value.
    #[builder(default = pointers::RED)]
    pub value_color: PointerTheme,
    #[builder(default = lcds::STANDARD)]
    pub lcd: LcdTheme,
    #[builder(default = 1)]
    pub lcd_decimals: usize,
    #[builder(default)]
    pub sections: Vec<Section>,
    pub threshold: Option<f32>,
    #[builder(default = 2.5)]
    pub full_scale_time: f32,
    #[builder(default = "")]
    pub title: &'static str,
    #[builder(default = "")]
    pub unit: &'static str,
}

impl Default for LinearBargraphConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// =============================================================================
// Widget
// =============================================================================

/// Vertical bargraph gauge.
pub struct LinearBargraph {
    config: LinearBargraphConfig,
    value: AnimatedValue,
    min_measured: f32,
    max_measured: f32,
    background: Layer,
    background_dirty: bool,
    gate: RepaintGate,
}

impl LinearBargraph {
    pub fn new(config: LinearBargraphConfig) -> Self {
        let size = Size::new(config.width, config.height);
        let initial = config.min_value;
        Self {
            min_measured: config.max_value,
            max_measured: config.min_value,
            value: AnimatedValue::new(initial),
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

    /// Animate the bar toward `value`; same policy as the radial gauge.
    pub fn set_value_animated(&mut self, value: f32, now: Instant) {
        if value.is_nan() {
            return;
        }
        let target = set_in_range(value, self.config.min_value, self.config.max_value);
        let time = ((self.config.full_scale_time * (target - self.value.get()).abs()) / self.span())
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

    pub fn reset_min_measured_value(&mut self) {
        self.min_measured = self.value.get();
        self.gate.request();
    }

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
    // Appearance
    // -------------------------------------------------------------------------

    pub fn set_background_theme(&mut self, theme: BackgroundTheme) {
        self.config.background = theme;
        self.background_dirty = true;
        self.gate.request();
    }

    pub fn set_lcd_theme(&mut self, theme: LcdTheme) {
        self.config.lcd = theme;
        self.background_dirty = true;
        self.gate.request();
    }

    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.config.sections = sections;
        self.gate.request();
    }

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
    // Frame Integration
    // -------------------------------------------------------------------------

    /// Advance animations by one host tick. Returns whether a repaint is
    /// pending afterwards.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.value.update(now).changed {
            self.track_measured();
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

        let (track, lcd) = (self.track_rect(), self.lcd_rect());

        // Value bar, rising from the track bottom
        let bar_top = self.y_for(self.value.get());
        let track_bottom = track.top_left.y + track.size.height as i32;
        if track_bottom > bar_top {
            let color = section_color_for(&self.config.sections, self.value.get())
                .unwrap_or(self.config.value_color.medium);
            Rectangle::new(
                Point::new(track.top_left.x + 1, bar_top),
                Size::new(track.size.width - 2, (track_bottom - bar_top) as u32),
            )
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(target)?;
        }

        // Measured extreme markers to the right of the track
        if self.max_measured > self.min_measured {
            let marker_x0 = track.top_left.x + track.size.width as i32 + 2;
            for (value, color) in [
                (self.min_measured, colors::CYAN),
                (self.max_measured, colors::RED),
            ] {
                let y = self.y_for(value);
                Line::new(Point::new(marker_x0, y), Point::new(marker_x0 + 5, y))
                    .into_styled(PrimitiveStyle::with_stroke(color, 2))
                    .draw(target)?;
            }
        }

        // LCD readout
        let text = format_value(self.value.get(), self.config.lcd_decimals);
        let style = MonoTextStyle::new(LCD_FONT_MEDIUM, self.config.lcd.text);
        let pos = Point::new(
            lcd.top_left.x + lcd.size.width as i32 - 6,
            lcd.top_left.y + lcd.size.height as i32 / 2,
        );
        Text::with_text_style(text.as_str(), pos, style, RIGHT_ALIGNED).draw(target)?;

        Ok(())
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    fn span(&self) -> f32 {
        let span = self.config.max_value - self.config.min_value;
        if span > 0.0 { span } else { 1.0 }
    }

    fn track_rect(&self) -> Rectangle {
        let w = self.config.width as f32;
        let h = self.config.height as f32;
        Rectangle::new(
            Point::new((w * 0.43) as i32, (h * 0.12) as i32),
            Size::new((w * 0.14) as u32, (h * 0.70) as u32),
        )
    }

    fn lcd_rect(&self) -> Rectangle {
        let w = self.config.width as f32;
        let h = self.config.height as f32;
        Rectangle::new(
            Point::new((w * 0.10) as i32, (h * 0.85) as i32),
            Size::new((w * 0.80) as u32, (h * 0.11) as u32),
        )
    }

    /// Screen y coordinate of a scale value on the track.
    fn y_for(&self, value: f32) -> i32 {
        let track = self.track_rect();
        let frac = (value - self.config.min_value) / self.span();
        let bottom = track.top_left.y + track.size.height as i32;
        bottom - (frac * track.size.height as f32) as i32
    }

    // -------------------------------------------------------------------------
    // Background Artwork
    // -------------------------------------------------------------------------

    fn render_background(&mut self) {
        self.background.clear();
        let theme = self.config.background;
        let size = Size::new(self.config.width, self.config.height);

        // Bezel and face
        Rectangle::new(Point::zero(), size)
            .into_styled(PrimitiveStyle::with_fill(theme.rim_outer))
            .draw(&mut self.background)
            .ok();
        Rectangle::new(Point::new(3, 3), Size::new(size.width - 6, size.height - 6))
            .into_styled(PrimitiveStyle::with_fill(theme.face))
            .draw(&mut self.background)
            .ok();

        // Track well
        let track = self.track_rect();
        Rectangle::new(track.top_left, track.size)
            .into_styled(
                embedded_graphics::primitives::PrimitiveStyleBuilder::new()
                    .fill_color(colors::DARKER_GRAY)
                    .stroke_color(theme.symbol)
                    .stroke_width(1)
                    .build(),
            )
            .draw(&mut self.background)
            .ok();

        self.render_tickmarks();

        // Threshold marker right of the track
        if let Some(threshold) = self.config.threshold {
            let y = self.y_for(threshold);
            let x0 = track.top_left.x + track.size.width as i32 + 2;
            Line::new(Point::new(x0, y), Point::new(x0 + 7, y))
                .into_styled(PrimitiveStyle::with_stroke(colors::RED, 3))
                .draw(&mut self.background)
                .ok();
        }

        // LCD bezel and face
        let lcd = self.lcd_rect();
        Rectangle::new(lcd.top_left - Point::new(2, 2), lcd.size + Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(self.config.lcd.bezel))
            .draw(&mut self.background)
            .ok();
        Rectangle::new(lcd.top_left, lcd.size)
            .into_styled(PrimitiveStyle::with_fill(self.config.lcd.background))
            .draw(&mut self.background)
            .ok();

        // Title above the track, unit below it
        let label_style = MonoTextStyle::new(LABEL_FONT, theme.label);
        let center_x = self.config.width as i32 / 2;
        if !self.config.title.is_empty() {
            let pos = Point::new(center_x, (self.config.height as f32 * 0.06) as i32);
            Text::with_text_style(self.config.title, pos, label_style, CENTERED)
                .draw(&mut self.background)
                .ok();
        }
        if !self.config.unit.is_empty() {
            let pos = Point::new(center_x, (self.config.height as f32 * 0.09) as i32);
            Text::with_text_style(self.config.unit, pos, label_style, CENTERED)
                .draw(&mut self.background)
                .ok();
        }
    }

    fn render_tickmarks(&mut self) {
        let theme = self.config.background;
        let track = self.track_rect();
        let label_style = MonoTextStyle::new(LABEL_FONT, theme.label);

        // Ten major intervals with labels at each major tick
        let steps = 10u32;
        for i in 0..=steps {
            let value = self.config.min_value + self.span() * i as f32 / steps as f32;
            let y = self.y_for(value);
            let x1 = track.top_left.x - 2;
            let major = i % 2 == 0;
            let x0 = if major { x1 - 6 } else { x1 - 3 };

            Line::new(Point::new(x0, y), Point::new(x1, y))
                .into_styled(PrimitiveStyle::with_stroke(theme.symbol, 1))
                .draw(&mut self.background)
                .ok();

            if major {
                let text = format_value(value, 0);
                let pos = Point::new(x0 - 12, y);
                Text::with_text_style(text.as_str(), pos, label_style, CENTERED)
                    .draw(&mut self.background)
                    .ok();
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
