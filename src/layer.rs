//! Offscreen layer buffers for cached widget artwork.
//!
//! Every widget pre-renders its static artwork (rim, dial face, tickmarks,
//! LCD bezel) into one or more [`Layer`]s and blits them each repaint instead
//! of re-running the vector drawing code. A layer is rebuilt only when a
//! setter flips the widget's invalidation flag (theme change, scale change).
//!
//! Layers track which pixels were actually drawn: untouched pixels are
//! transparent and skipped by the blit, so a round gauge face composites
//! cleanly over whatever the host has behind it.
//!
//! `Layer` implements `DrawTarget`, so the same drawing code runs against a
//! layer or directly against the display. Drawing into a layer cannot fail.

use std::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// An owned pixel buffer with per-pixel transparency.
#[derive(Debug, Clone)]
pub struct Layer {
    size: Size,
    pixels: Vec<Option<Rgb565>>,
}

impl Layer {
    /// Create a fully transparent layer.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![None; (size.width * size.height) as usize],
        }
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(None);
    }

    /// Color at `point`, or `None` if transparent or out of bounds.
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels[(y * self.size.width + x) as usize]
    }

    /// Number of non-transparent pixels.
    pub fn drawn_pixel_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_some()).count()
    }

    /// Blit the layer onto `target` with its top-left corner at `offset`,
    /// skipping transparent pixels.
    pub fn draw_to<D>(&self, target: &mut D, offset: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let width = self.size.width as i32;
        target.draw_iter(self.pixels.iter().enumerate().filter_map(|(i, p)| {
            p.map(|color| {
                let point = Point::new(i as i32 % width, i as i32 / width) + offset;
                Pixel(point, color)
            })
        }))
    }
}

impl OriginDimensions for Layer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Layer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x >= self.size.width || y >= self.size.height {
                continue;
            }
            self.pixels[(y * self.size.width + x) as usize] = Some(color);
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, RED};
    use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};

    #[test]
    fn test_new_layer_is_transparent() {
        let layer = Layer::new(Size::new(10, 10));
        assert_eq!(layer.drawn_pixel_count(), 0);
        assert_eq!(layer.pixel(Point::new(5, 5)), None);
    }

    #[test]
    fn test_drawing_sets_pixels() {
        let mut layer = Layer::new(Size::new(20, 20));
        Rectangle::new(Point::new(2, 2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(RED))
            .draw(&mut layer)
            .ok();

        assert_eq!(layer.pixel(Point::new(3, 3)), Some(RED));
        assert_eq!(layer.pixel(Point::new(10, 10)), None);
        assert_eq!(layer.drawn_pixel_count(), 16);
    }

    #[test]
    fn test_out_of_bounds_drawing_is_ignored() {
        let mut layer = Layer::new(Size::new(8, 8));
        Rectangle::new(Point::new(-2, -2), Size::new(20, 20))
            .into_styled(PrimitiveStyle::with_fill(RED))
            .draw(&mut layer)
            .ok();

        assert_eq!(layer.drawn_pixel_count(), 64, "only in-bounds pixels stored");
        assert_eq!(layer.pixel(Point::new(0, 0)), Some(RED));
        assert_eq!(layer.pixel(Point::new(9, 9)), None);
    }

    #[test]
    fn test_blit_skips_transparent_pixels() {
        let mut background = Layer::new(Size::new(16, 16));
        Rectangle::new(Point::zero(), Size::new(16, 16))
            .into_styled(PrimitiveStyle::with_fill(BLUE))
            .draw(&mut background)
            .ok();

        let mut overlay = Layer::new(Size::new(16, 16));
        Circle::new(Point::new(4, 4), 8)
            .into_styled(PrimitiveStyle::with_fill(RED))
            .draw(&mut overlay)
            .ok();

        overlay.draw_to(&mut background, Point::zero()).ok();

        // Circle center overwritten, corner left untouched
        assert_eq!(background.pixel(Point::new(8, 8)), Some(RED));
        assert_eq!(background.pixel(Point::new(0, 0)), Some(BLUE));
    }

    #[test]
    fn test_blit_applies_offset() {
        let mut src = Layer::new(Size::new(4, 4));
        Rectangle::new(Point::zero(), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(RED))
            .draw(&mut src)
            .ok();

        let mut dst = Layer::new(Size::new(16, 16));
        src.draw_to(&mut dst, Point::new(10, 10)).ok();

        assert_eq!(dst.pixel(Point::new(10, 10)), Some(RED));
        assert_eq!(dst.pixel(Point::new(13, 13)), Some(RED));
        assert_eq!(dst.pixel(Point::new(9, 9)), None);
    }

    #[test]
    fn test_clear_resets_to_transparent() {
        let mut layer = Layer::new(Size::new(8, 8));
        Rectangle::new(Point::zero(), Size::new(8, 8))
            .into_styled(PrimitiveStyle::with_fill(RED))
            .draw(&mut layer)
            .ok();
        assert!(layer.drawn_pixel_count() > 0);

        layer.clear();
        assert_eq!(layer.drawn_pixel_count(), 0);
    }
}
