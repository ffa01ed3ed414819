//! Signal LED with lit/unlit artwork and host-timed blinking.
//!
//! Both states are pre-rendered into their own layers at construction; a
//! repaint just blits the layer for the current state. Blinking toggles the
//! state once per second, driven by the timestamps the host passes to
//! `update` - the widget owns no timer. Disabling blink always leaves the
//! LED dark.

use std::time::{Duration, Instant};

use bon::Builder;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};

use crate::layer::Layer;
use crate::repaint::RepaintGate;
use crate::themes::{LedTheme, leds};

/// Blink toggle period.
const BLINK_INTERVAL: Duration = Duration::from_secs(1);

// =============================================================================
// Configuration
// =============================================================================

/// Visual parameters of a [`Led`].
#[derive(Debug, Clone, Builder)]
pub struct LedConfig {
    /// Widget edge length in pixels.
    #[builder(default = 32)]
    pub size: u32,
    #[builder(default = leds::RED)]
    pub theme: LedTheme,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// =============================================================================
// Widget
// =============================================================================

/// Round signal LED.
pub struct Led {
    config: LedConfig,
    on: bool,
    blinking: bool,
    last_toggle: Option<Instant>,
    layer_on: Layer,
    layer_off: Layer,
    layers_dirty: bool,
    gate: RepaintGate,
}

impl Led {
    pub fn new(config: LedConfig) -> Self {
        let size = Size::new(config.size, config.size);
        Self {
            on: false,
            blinking: false,
            last_toggle: None,
            layer_on: Layer::new(size),
            layer_off: Layer::new(size),
            layers_dirty: true,
            gate: RepaintGate::new(),
            config,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn set_on(&mut self, on: bool) {
        if self.on != on {
            self.on = on;
            self.gate.request();
        }
    }

    pub fn toggle(&mut self) {
        self.on = !self.on;
        self.gate.request();
    }

    pub fn is_blinking(&self) -> bool {
        self.blinking
    }

    /// Enable or disable blinking. Disabling always darkens the LED.
    pub fn blink(&mut self, enabled: bool, now: Instant) {
        if enabled && !self.blinking {
            self.blinking = true;
            self.last_toggle = Some(now);
        } else if !enabled && self.blinking {
            self.blinking = false;
            self.last_toggle = None;
            if self.on {
                self.on = false;
                self.gate.request();
            }
        }
    }

    pub fn theme(&self) -> LedTheme {
        self.config.theme
    }

    pub fn set_theme(&mut self, theme: LedTheme) {
        self.config.theme = theme;
        self.layers_dirty = true;
        self.gate.request();
    }

    // -------------------------------------------------------------------------
    // Frame Integration
    // -------------------------------------------------------------------------

    /// Advance the blink clock. Returns whether a repaint is pending.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.blinking {
            let due = self
                .last_toggle
                .is_none_or(|last| now.saturating_duration_since(last) >= BLINK_INTERVAL);
            if due {
                self.on = !self.on;
                self.last_toggle = Some(now);
                self.gate.request();
            }
        }
        self.gate.is_pending()
    }

    pub fn needs_repaint(&self) -> bool {
        self.gate.is_pending()
    }

    /// Repaint the LED into `target`.
    pub fn draw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.gate.begin();

        if self.layers_dirty {
            self.render_layers();
            self.layers_dirty = false;
        }
        let layer = if self.on { &self.layer_on } else { &self.layer_off };
        layer.draw_to(target, Point::zero())
    }

    // -------------------------------------------------------------------------
    // Artwork
    // -------------------------------------------------------------------------

    fn render_layers(&mut self) {
        let theme = self.config.theme;
        let size = self.config.size;
        let center = Point::new(size as i32 / 2, size as i32 / 2);

        for (layer, body, highlight) in [
            (&mut self.layer_on, theme.on, Some(theme.glow)),
            (&mut self.layer_off, theme.off, None),
        ] {
            layer.clear();

            Circle::with_center(center, size)
                .into_styled(PrimitiveStyle::with_stroke(theme.rim, 2))
                .draw(layer)
                .ok();
            Circle::with_center(center, size.saturating_sub(6))
                .into_styled(PrimitiveStyle::with_fill(body))
                .draw(layer)
                .ok();

            // Lit LEDs get a bright center highlight
            if let Some(glow) = highlight {
                Circle::with_center(center, size / 3)
                    .into_styled(PrimitiveStyle::with_fill(glow))
                    .draw(layer)
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

    fn render(led: &mut Led) -> Layer {
        let mut frame = Layer::new(Size::new(32, 32));
        led.draw(&mut frame).ok();
        frame
    }

    #[test]
    fn test_on_off_layers_differ() {
        let mut led = Led::new(LedConfig::default());
        let off = render(&mut led);
        led.set_on(true);
        let on = render(&mut led);

        let center = Point::new(16, 16);
        assert_eq!(off.pixel(center), Some(leds::RED.off));
        assert_eq!(on.pixel(center), Some(leds::RED.glow));
    }

    #[test]
    fn test_toggle_requests_repaint() {
        let mut led = Led::new(LedConfig::default());
        render(&mut led);
        assert!(!led.needs_repaint());

        led.toggle();
        assert!(led.is_on());
        assert!(led.needs_repaint());
    }

    #[test]
    fn test_set_same_state_is_noop() {
        let mut led = Led::new(LedConfig::default());
        render(&mut led);
        led.set_on(false);
        assert!(!led.needs_repaint());
    }

    #[test]
    fn test_blink_toggles_on_host_time() {
        let t0 = Instant::now();
        let mut led = Led::new(LedConfig::default());
        led.blink(true, t0);
        assert!(led.is_blinking());
        assert!(!led.is_on(), "first toggle waits a full interval");

        led.update(t0 + secs(0.5));
        assert!(!led.is_on());

        led.update(t0 + secs(1.1));
        assert!(led.is_on());

        led.update(t0 + secs(2.2));
        assert!(!led.is_on());
    }

    #[test]
    fn test_blink_disable_forces_dark() {
        let t0 = Instant::now();
        let mut led = Led::new(LedConfig::default());
        led.blink(true, t0);
        led.update(t0 + secs(1.1));
        assert!(led.is_on());

        led.blink(false, t0 + secs(1.5));
        assert!(!led.is_on());
        assert!(!led.is_blinking());

        // No further toggles once disabled
        led.update(t0 + secs(3.0));
        assert!(!led.is_on());
    }

    #[test]
    fn test_theme_swap_rebuilds_layers() {
        let mut led = Led::new(LedConfig::default());
        led.set_on(true);
        let red = render(&mut led);

        led.set_theme(leds::GREEN);
        let green = render(&mut led);

        assert_ne!(
            red.pixel(Point::new(16, 16)),
            green.pixel(Point::new(16, 16)),
        );
        assert_eq!(green.pixel(Point::new(16, 16)), Some(leds::GREEN.glow));
    }
}
