use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::mock_display::MockDisplay;
use embedded_graphics::pixelcolor::{PixelColor, Rgb565};
use embedded_graphics::Pixel;

use crate::HintRefresh;

impl<C: PixelColor> HintRefresh for MockDisplay<C> {
    fn hint_refresh(&mut self) {}
}

/// Full-size framebuffer that also counts what gets pushed to it.
pub struct Canvas {
    size: Size,
    pixels: Vec<Rgb565>,
    pub drawn: usize,
    pub refreshes: usize,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![Rgb565::default(); (width * height) as usize],
            drawn: 0,
            refreshes: 0,
        }
    }

    pub fn pixel(&self, p: Point) -> Rgb565 {
        self.pixels[self.index(p).expect("point outside canvas")]
    }

    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    pub fn reset_counters(&mut self) {
        self.drawn = 0;
        self.refreshes = 0;
    }

    fn index(&self, p: Point) -> Option<usize> {
        let (w, h) = (self.size.width as i32, self.size.height as i32);
        (p.x >= 0 && p.y >= 0 && p.x < w && p.y < h).then(|| (p.y * w + p.x) as usize)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if let Some(i) = self.index(p) {
                self.pixels[i] = color;
                self.drawn += 1;
            }
        }
        Ok(())
    }
}

impl HintRefresh for Canvas {
    fn hint_refresh(&mut self) {
        self.refreshes += 1;
    }
}
