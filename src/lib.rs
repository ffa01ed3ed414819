//! Instrument gauge widgets for `embedded-graphics` targets.
//!
//! A library of dashboard instruments - radial pointer gauges, vertical
//! bargraphs, a compass, LCD readouts, signal LEDs and a traffic light -
//! drawn onto any `DrawTarget<Color = Rgb565>`. Each widget caches its
//! static artwork in offscreen layers, animates its value through a shared
//! transition engine, and coalesces repaint requests so it repaints at most
//! once per display frame.
//!
//! # Host Integration
//!
//! The library owns no event loop, timer or display. The host supplies a
//! monotonic clock (`std::time::Instant`) and drives each widget once per
//! frame:
//!
//! ```ignore
//! let mut gauge = Radial::new(RadialConfig::builder().title("RPM").build());
//!
//! loop {
//!     let now = Instant::now();
//!     gauge.set_value_animated(reading(), now);
//!
//!     if gauge.update(now) {
//!         gauge.draw(&mut display)?;
//!     }
//!     window.update(&display);
//!     thread::sleep(FRAME_TIME);
//! }
//! ```
//!
//! `update` advances in-flight transitions and reports whether anything
//! needs repainting; `draw` repaints only when asked, reading the widget's
//! current state. Calling `draw` unconditionally also works - the layer
//! caches keep an unchanged repaint cheap.
//!
//! # Module Map
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | `easing`  | easing function families and the [`Easing`] registry    |
//! | `tween`   | [`Tween`] transitions and per-property [`AnimatedValue`]|
//! | `repaint` | [`RepaintGate`] repaint coalescing                      |
//! | `layer`   | [`Layer`] offscreen buffers with transparency           |
//! | `themes`  | dial, pointer, LCD and LED color themes, sections       |
//! | `colors`  | Rgb565 constants and color helpers                      |
//! | `geometry`| angle wrapping, nice numbers, polar helpers             |
//! | `styles`  | shared text styles and font references                  |
//! | `widgets` | the instruments themselves                              |

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod easing;
pub mod geometry;
pub mod layer;
pub mod repaint;
pub mod styles;
pub mod themes;
pub mod tween;
pub mod widgets;

pub use easing::Easing;
pub use layer::Layer;
pub use repaint::RepaintGate;
pub use themes::{BackgroundTheme, LcdTheme, LedTheme, PointerTheme, Section};
pub use tween::{AnimatedValue, Tick, Tween, TweenState, ValueUpdate};
pub use widgets::{
    Compass, CompassConfig, DisplayConfig, DisplaySingle, GaugeKind, Led, LedConfig,
    LinearBargraph, LinearBargraphConfig, Radial, RadialConfig, TrafficLight, TrafficLightConfig,
};

// =============================================================================
// Integration Smoke Test
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::*;
    use embedded_graphics_simulator::SimulatorDisplay;
    use std::time::{Duration, Instant};

    /// Drive a whole dashboard of widgets through a simulated frame loop
    /// against the simulator display, the same target a demo app renders to.
    #[test]
    fn test_dashboard_frame_loop() {
        let mut display: SimulatorDisplay<Rgb565> =
            SimulatorDisplay::new(Size::new(480, 360));

        let mut rpm = Radial::new(
            RadialConfig::builder()
                .size(200)
                .max_value(8000.0)
                .threshold(6500.0)
                .title("RPM")
                .build(),
        );
        let mut temp = LinearBargraph::new(
            LinearBargraphConfig::builder()
                .width(100)
                .height(300)
                .min_value(40.0)
                .max_value(140.0)
                .unit("C")
                .build(),
        );
        let mut heading = Compass::new(CompassConfig::builder().size(160).build());
        let mut speed = DisplaySingle::new(DisplayConfig::builder().unit("km/h").build());
        let mut alarm = Led::new(LedConfig::default());
        let mut signal = TrafficLight::new(TrafficLightConfig::default());

        let t0 = Instant::now();
        rpm.set_value_animated(7200.0, t0);
        temp.set_value_animated(92.0, t0);
        heading.set_value_animated(270.0, t0);
        speed.set_value(118.4);
        alarm.blink(true, t0);
        signal.set_green_on(true);

        // 3 s of frames at 20 ms, drawing only when a widget asks for it
        let mut repaints = 0usize;
        for frame in 1..=150u32 {
            let now = t0 + Duration::from_millis(u64::from(frame) * 20);

            if rpm.update(now) {
                rpm.draw(&mut display).unwrap();
                repaints += 1;
            }
            if temp.update(now) {
                temp.draw(&mut display).unwrap();
            }
            if heading.update(now) {
                heading.draw(&mut display).unwrap();
            }
            if speed.needs_repaint() {
                speed.draw(&mut display).unwrap();
            }
            if alarm.update(now) {
                alarm.draw(&mut display).unwrap();
            }
            if signal.needs_repaint() {
                signal.draw(&mut display).unwrap();
            }
        }

        assert!(repaints > 10, "animation must have repainted the gauge");
        assert_eq!(rpm.value(), 7200.0);
        assert_eq!(temp.value(), 92.0);
        assert_eq!(heading.value(), 270.0);
        assert!(rpm.is_threshold_exceeded());
    }
}
