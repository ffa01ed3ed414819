//! Traffic light with three independently switched lights.
//!
//! The housing (rounded dark body with three sockets) is cached in the
//! background layer; each repaint blits it and fills the three lights in
//! their lit or unlit color. The lights are independent booleans - the
//! widget does not enforce road-traffic semantics, a dashboard may well
//! want red and green lit at once.

use bon::Builder;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle};

use crate::colors;
use crate::layer::Layer;
use crate::repaint::RepaintGate;
use crate::themes::{LedTheme, leds};

// =============================================================================
// Configuration
// =============================================================================

/// Visual parameters of a [`TrafficLight`].
#[derive(Debug, Clone, Builder)]
pub struct TrafficLightConfig {
    #[builder(default = 60)]
    pub width: u32,
    #[builder(default = 160)]
    pub height: u32,
    #[builder(default = leds::RED)]
    pub red: LedTheme,
    #[builder(default = leds::YELLOW)]
    pub yellow: LedTheme,
    #[builder(default = leds::GREEN)]
    pub green: LedTheme,
}

impl Default for TrafficLightConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// =============================================================================
// Widget
// =============================================================================

/// Three-light signal.
pub struct TrafficLight {
    config: TrafficLightConfig,
    red_on: bool,
    yellow_on: bool,
    green_on: bool,
    background: Layer,
    background_dirty: bool,
    gate: RepaintGate,
}

impl TrafficLight {
    pub fn new(config: TrafficLightConfig) -> Self {
        let size = Size::new(config.width, config.height);
        Self {
            red_on: false,
            yellow_on: false,
            green_on: false,
            background: Layer::new(size),
            background_dirty: true,
            gate: RepaintGate::new(),
            config,
        }
    }

    pub fn is_red_on(&self) -> bool {
        self.red_on
    }

    pub fn set_red_on(&mut self, on: bool) {
        if self.red_on != on {
            self.red_on = on;
            self.gate.request();
        }
    }

    pub fn is_yellow_on(&self) -> bool {
        self.yellow_on
    }

    pub fn set_yellow_on(&mut self, on: bool) {
        if self.yellow_on != on {
            self.yellow_on = on;
            self.gate.request();
        }
    }

    pub fn is_green_on(&self) -> bool {
        self.green_on
    }

    pub fn set_green_on(&mut self, on: bool) {
        if self.green_on != on {
            self.green_on = on;
            self.gate.request();
        }
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

        let lights = [
            (0, self.config.red, self.red_on),
            (1, self.config.yellow, self.yellow_on),
            (2, self.config.green, self.green_on),
        ];
        for (slot, theme, on) in lights {
            let center = self.light_center(slot);
            let body = if on { theme.on } else { theme.off };
            Circle::with_center(center, self.light_diameter())
                .into_styled(PrimitiveStyle::with_fill(body))
                .draw(target)?;
            if on {
                Circle::with_center(center, self.light_diameter() / 3)
                    .into_styled(PrimitiveStyle::with_fill(theme.glow))
                    .draw(target)?;
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    fn light_diameter(&self) -> u32 {
        (self.config.width * 3) / 5
    }

    /// Center of light `slot` (0 = top/red, 1 = middle, 2 = bottom).
    fn light_center(&self, slot: i32) -> Point {
        Point::new(
            self.config.width as i32 / 2,
            self.config.height as i32 * (2 * slot + 1) / 6,
        )
    }

    fn render_background(&mut self) {
        self.background.clear();
        let size = Size::new(self.config.width, self.config.height);
        let corner = Size::new(size.width / 6, size.width / 6);

        RoundedRectangle::with_equal_corners(Rectangle::new(Point::zero(), size), corner)
            .into_styled(PrimitiveStyle::with_fill(colors::DARKER_GRAY))
            .draw(&mut self.background)
            .ok();

        // Socket rings behind the lights
        for slot in 0..3 {
            let center = self.light_center(slot);
            Circle::with_center(center, self.light_diameter() + 4)
                .into_styled(PrimitiveStyle::with_stroke(colors::DARK_GRAY, 2))
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

    fn render(light: &mut TrafficLight) -> Layer {
        let mut frame = Layer::new(Size::new(60, 160));
        light.draw(&mut frame).ok();
        frame
    }

    #[test]
    fn test_lights_start_dark() {
        let mut light = TrafficLight::new(TrafficLightConfig::default());
        let frame = render(&mut light);

        // Light centers: (30, 26), (30, 80), (30, 133)
        assert_eq!(frame.pixel(Point::new(30, 26)), Some(leds::RED.off));
        assert_eq!(frame.pixel(Point::new(30, 80)), Some(leds::YELLOW.off));
        assert_eq!(frame.pixel(Point::new(30, 133)), Some(leds::GREEN.off));
    }

    #[test]
    fn test_lights_switch_independently() {
        let mut light = TrafficLight::new(TrafficLightConfig::default());
        light.set_red_on(true);
        light.set_green_on(true);

        assert!(light.is_red_on());
        assert!(!light.is_yellow_on());
        assert!(light.is_green_on());

        let frame = render(&mut light);
        assert_eq!(frame.pixel(Point::new(30, 26)), Some(leds::RED.glow));
        assert_eq!(frame.pixel(Point::new(30, 80)), Some(leds::YELLOW.off));
        assert_eq!(frame.pixel(Point::new(30, 133)), Some(leds::GREEN.glow));
    }

    #[test]
    fn test_redundant_set_does_not_schedule() {
        let mut light = TrafficLight::new(TrafficLightConfig::default());
        render(&mut light);
        assert!(!light.needs_repaint());

        light.set_yellow_on(false);
        assert!(!light.needs_repaint());

        light.set_yellow_on(true);
        assert!(light.needs_repaint());
    }

    #[test]
    fn test_housing_fills_corner_region() {
        let mut light = TrafficLight::new(TrafficLightConfig::default());
        let frame = render(&mut light);
        assert_eq!(frame.pixel(Point::new(30, 55)), Some(colors::DARKER_GRAY));
    }
}
