use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{Circle, Primitive, PrimitiveStyle, Styled};
use embedded_graphics::Drawable;

/// Filled dot centered on a point.
pub struct Marker {
    circle: Styled<Circle, PrimitiveStyle<Rgb565>>,
}

impl Marker {
    pub fn new(center: Point, diameter: u32, color: Rgb565) -> Self {
        Self {
            circle: Circle::with_center(center, diameter)
                .into_styled(PrimitiveStyle::with_fill(color)),
        }
    }
}

impl Drawable for Marker {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.circle.draw(target)
    }
}
