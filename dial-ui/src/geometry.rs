use core::f32::consts::PI;

use dial_model::Field;
use embedded_graphics::geometry::Point;
use embedded_graphics::primitives::Rectangle;
use micromath::F32Ext;

use crate::config as cfg;

/// Where the dial sits inside whatever area the host hands us.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialGeometry {
    center: Point,
    radius: i32,
}

impl DialGeometry {
    pub fn from_bounds(bounds: Rectangle) -> Self {
        let size = bounds.size;
        Self {
            center: bounds.center(),
            radius: (size.width.min(size.height) / 2) as i32,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Point `distance` px from the center. 0° is straight down, angles grow
    /// clockwise.
    pub fn point_at(&self, degrees: f32, distance: i32) -> Point {
        let rad = degrees * PI / 180.0;
        let d = distance as f32;
        self.center
            + Point::new(
                F32Ext::round(-d * F32Ext::sin(rad)) as i32,
                F32Ext::round(d * F32Ext::cos(rad)) as i32,
            )
    }

    /// Point `inset` px inside the rim.
    pub fn rim_point(&self, degrees: f32, inset: i32) -> Point {
        self.point_at(degrees, self.radius - inset)
    }

    pub fn wheel_area(&self, field: Field) -> Rectangle {
        let dx = match field {
            Field::Hour => -cfg::WHEEL_SPREAD,
            Field::Minute => cfg::WHEEL_SPREAD,
        };
        Rectangle::with_center(self.center + Point::new(dx, 0), cfg::WHEEL_SIZE)
    }

    pub fn separator_origin(&self) -> Point {
        self.center
    }

    pub fn wheel_at(&self, point: Point) -> Option<Field> {
        [Field::Hour, Field::Minute]
            .into_iter()
            .find(|field| self.wheel_area(*field).contains(point))
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::geometry::Size;

    use super::*;

    fn dial() -> DialGeometry {
        DialGeometry::from_bounds(Rectangle::new(Point::zero(), Size::new(240, 240)))
    }

    #[test]
    fn radius_fits_the_shorter_side() {
        let g = DialGeometry::from_bounds(Rectangle::new(Point::zero(), Size::new(240, 200)));
        assert_eq!(g.radius(), 100);
        assert_eq!(g.center(), Point::new(119, 99));
    }

    #[test]
    fn zero_points_down_and_angles_turn_clockwise() {
        let g = dial();
        let c = g.center();
        assert_eq!(g.point_at(0.0, 100), c + Point::new(0, 100));
        assert_eq!(g.point_at(90.0, 100), c + Point::new(-100, 0));
        assert_eq!(g.point_at(180.0, 100), c + Point::new(0, -100));
        assert_eq!(g.point_at(270.0, 100), c + Point::new(100, 0));
    }

    #[test]
    fn diagonals_round_to_nearest_pixel() {
        let g = dial();
        let c = g.center();
        // 10 * sin(45°) = 7.07
        assert_eq!(g.point_at(45.0, 10), c + Point::new(-7, 7));
        assert_eq!(g.point_at(225.0, 10), c + Point::new(7, -7));
    }

    #[test]
    fn wheels_sit_either_side_of_center() {
        let g = dial();
        let c = g.center();
        assert_eq!(g.wheel_at(c + Point::new(-32, 0)), Some(Field::Hour));
        assert_eq!(g.wheel_at(c + Point::new(32, 30)), Some(Field::Minute));
        assert_eq!(g.wheel_area(Field::Hour).center(), c - Point::new(32, 0));
        assert_eq!(g.wheel_area(Field::Minute).center(), c + Point::new(32, 0));
        assert_eq!(g.wheel_at(c), None);
        assert_eq!(g.wheel_at(Point::zero()), None);
    }
}
