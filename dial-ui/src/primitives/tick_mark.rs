use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{Line, Primitive, PrimitiveStyle, Styled};
use embedded_graphics::Drawable;

use crate::geometry::DialGeometry;

/// Radial stroke running inward from `inset` px inside the rim.
pub struct TickMark {
    line: Styled<Line, PrimitiveStyle<Rgb565>>,
}

impl TickMark {
    pub fn new(
        geometry: &DialGeometry,
        degrees: f32,
        inset: i32,
        length: i32,
        width: u32,
        color: Rgb565,
    ) -> Self {
        let outer = geometry.rim_point(degrees, inset);
        // A line of length n spans n + 1 pixels
        let inner = geometry.rim_point(degrees, inset + length - 1);
        Self {
            line: Line::new(inner, outer).into_styled(PrimitiveStyle::with_stroke(color, width)),
        }
    }
}

impl Drawable for TickMark {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.line.draw(target)
    }
}
