//! Single-value LCD display.
//!
//! A rectangular readout in the style of a segment display: bezel, tinted
//! face, right-aligned numeric value with a fixed number of decimals, and
//! optional unit and header strings. The bezel and face are cached in the
//! background layer and rebuilt only when the LCD theme changes; the text
//! is drawn per repaint.
//!
//! There is no animated setter here: readouts jump to the new value, the
//! way real LCD instruments do.

use bon::Builder;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::layer::Layer;
use crate::repaint::RepaintGate;
use crate::styles::{LABEL_FONT, LCD_FONT_LARGE, LCD_FONT_MEDIUM, LEFT_ALIGNED, RIGHT_ALIGNED};
use crate::themes::{LcdTheme, lcds};
use crate::widgets::primitives::format_value;

// =============================================================================
// Configuration
// =============================================================================

/// Visual parameters of a [`DisplaySingle`].
#[derive(Debug, Clone, Builder)]
pub struct DisplayConfig {
    #[builder(default = 160)]
    pub width: u32,
    #[builder(default = 48)]
    pub height: u32,
    #[builder(default = lcds::STANDARD)]
    pub lcd: LcdTheme,
    #[builder(default = 2)]
    pub decimals: usize,
    /// Unit string shown after the value (e.g. `"km/h"`).
    #[builder(default = "")]
    pub unit: &'static str,
    /// Header string shown small above the value.
    #[builder(default = "")]
    pub header: &'static str,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// =============================================================================
// Widget
// =============================================================================

/// Single-value LCD readout.
pub struct DisplaySingle {
    config: DisplayConfig,
    value: f32,
    background: Layer,
    background_dirty: bool,
    gate: RepaintGate,
}

impl DisplaySingle {
    pub fn new(config: DisplayConfig) -> Self {
        let size = Size::new(config.width, config.height);
        Self {
            value: 0.0,
            background: Layer::new(size),
            background_dirty: true,
            gate: RepaintGate::new(),
            config,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the displayed value. NaN is silently ignored.
    pub fn set_value(&mut self, value: f32) {
        if value.is_nan() || value == self.value {
            return;
        }
        self.value = value;
        self.gate.request();
    }

    pub fn lcd_theme(&self) -> LcdTheme {
        self.config.lcd
    }

    pub fn set_lcd_theme(&mut self, theme: LcdTheme) {
        self.config.lcd = theme;
        self.background_dirty = true;
        self.gate.request();
    }

    pub fn set_decimals(&mut self, decimals: usize) {
        self.config.decimals = decimals;
        self.gate.request();
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

        let theme = self.config.lcd;
        let w = self.config.width as i32;
        let h = self.config.height as i32;
        let has_header = !self.config.header.is_empty();

        // Unit string is measured first so the value can sit left of it
        let mut right_edge = w - 6;
        if !self.config.unit.is_empty() {
            let unit_style = MonoTextStyle::new(LABEL_FONT, theme.text);
            let unit_width = self.config.unit.len() as i32 * 6;
            let pos = Point::new(right_edge, value_baseline(h, has_header));
            Text::with_text_style(self.config.unit, pos, unit_style, RIGHT_ALIGNED)
                .draw(target)?;
            right_edge -= unit_width + 4;
        }

        // Value, right-aligned; a smaller font when a header shares the face
        let value_font = if has_header { LCD_FONT_MEDIUM } else { LCD_FONT_LARGE };
        let value_style = MonoTextStyle::new(value_font, theme.text);
        let text = format_value(self.value, self.config.decimals);
        let pos = Point::new(right_edge, value_baseline(h, has_header));
        Text::with_text_style(text.as_str(), pos, value_style, RIGHT_ALIGNED).draw(target)?;

        if has_header {
            let header_style = MonoTextStyle::new(LABEL_FONT, theme.text);
            let pos = Point::new(6, h / 5);
            Text::with_text_style(self.config.header, pos, header_style, LEFT_ALIGNED)
                .draw(target)?;
        }

        Ok(())
    }

    fn render_background(&mut self) {
        self.background.clear();
        let theme = self.config.lcd;
        let size = Size::new(self.config.width, self.config.height);
        let corner = Size::new(size.height / 5, size.height / 5);

        RoundedRectangle::with_equal_corners(Rectangle::new(Point::zero(), size), corner)
            .into_styled(PrimitiveStyle::with_fill(theme.bezel))
            .draw(&mut self.background)
            .ok();

        let face = Rectangle::new(Point::new(2, 2), Size::new(size.width - 4, size.height - 4));
        RoundedRectangle::with_equal_corners(face, corner)
            .into_styled(PrimitiveStyle::with_fill(theme.background))
            .draw(&mut self.background)
            .ok();
    }
}

/// Vertical center of the value text; shifted down when a header occupies
/// the top of the face.
fn value_baseline(height: i32, has_header: bool) -> i32 {
    if has_header { height * 5 / 8 } else { height / 2 }
}

// =============================================================================
// Unit Tests
// =============================================================================
