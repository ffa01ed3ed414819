//! The instrument widgets.
//!
//! Every widget follows the same anatomy:
//! - a config struct with builder-style construction and sensible defaults
//! - cached background layer(s) with an invalidation flag flipped by the
//!   setters that change static artwork
//! - a [`RepaintGate`](crate::repaint::RepaintGate) coalescing repaint
//!   requests, cleared on entry to `draw`
//! - `update(now)` advancing animations from host timestamps
//! - `draw(target)` compositing layers and dynamic elements into any
//!   `DrawTarget<Color = Rgb565>`
//!
//! Numeric setters silently ignore NaN input and clamp into the widget's
//! scale range; redundant state changes neither repaint nor animate.

pub mod compass;
pub mod display;
pub mod led;
pub mod linear_bargraph;
pub mod primitives;
pub mod radial;
pub mod traffic_light;

pub use compass::{Compass, CompassConfig};
pub use display::{DisplayConfig, DisplaySingle};
pub use led::{Led, LedConfig};
pub use linear_bargraph::{LinearBargraph, LinearBargraphConfig};
pub use radial::{GaugeKind, Radial, RadialConfig};
pub use traffic_light::{TrafficLight, TrafficLightConfig};
