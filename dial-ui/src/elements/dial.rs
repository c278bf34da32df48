use dial_model::dial::{self, TickKind};
use dial_model::ClockState;
use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::Drawable;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use crate::fonts::NUMERAL_FONT;
use crate::format::two_digits;
use crate::geometry::DialGeometry;
use crate::primitives::{Marker, TickMark};
use crate::{config as cfg, AppDrawTarget, UiError};

pub fn draw_ticks<D: AppDrawTarget<E>, E>(
    display: &mut D,
    geometry: &DialGeometry,
) -> Result<(), UiError<E>> {
    for tick in dial::ticks() {
        let (length, width, color) = match tick.kind {
            TickKind::Major => (
                cfg::MAJOR_TICK_LENGTH,
                cfg::MAJOR_TICK_WIDTH,
                cfg::COLOR_MAJOR_TICK,
            ),
            TickKind::Minor => (
                cfg::MINOR_TICK_LENGTH,
                cfg::MINOR_TICK_WIDTH,
                cfg::COLOR_MINOR_TICK,
            ),
        };
        TickMark::new(
            geometry,
            tick.angle.into(),
            cfg::TICK_INSET,
            length,
            width,
            color,
        )
        .draw(display)
        .map_err(UiError::Display)?;
    }
    Ok(())
}

/// Labels every major tick in the units of `state`'s active field. Drawing
/// the same state again in the background color erases the labels.
pub fn draw_numerals<D: AppDrawTarget<E>, E>(
    display: &mut D,
    geometry: &DialGeometry,
    state: &ClockState,
    color: Rgb565,
) -> Result<(), UiError<E>> {
    for tick in dial::major_ticks() {
        let Some(numeral) = tick.numeral(state) else {
            continue;
        };
        NUMERAL_FONT.render_aligned(
            two_digits(numeral).as_str(),
            geometry.rim_point(tick.label_angle().into(), cfg::NUMERAL_INSET),
            VerticalPosition::Center,
            HorizontalAlignment::Center,
            FontColor::Transparent(color),
            display,
        )?;
    }
    Ok(())
}

pub fn indicator_position(geometry: &DialGeometry, degrees: f32) -> Point {
    geometry.rim_point(degrees, cfg::INDICATOR_INSET)
}

pub fn draw_indicator<D: AppDrawTarget<E>, E>(
    display: &mut D,
    position: Point,
    color: Rgb565,
) -> Result<(), UiError<E>> {
    Marker::new(position, cfg::INDICATOR_DIAMETER, color)
        .draw(display)
        .map_err(UiError::Display)
}

#[cfg(test)]
mod tests {
    use dial_model::Field;
    use embedded_graphics::geometry::Dimensions;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::Rgb565;

    use super::*;
    use crate::testing::Canvas;

    fn mock() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display
    }

    #[test]
    fn ticks_land_on_the_rim() {
        let mut display = mock();
        let geometry = DialGeometry::from_bounds(display.bounding_box());
        draw_ticks(&mut display, &geometry).unwrap();

        // Major tick at 0° points straight down
        let bottom = geometry.rim_point(0.0, cfg::TICK_INSET + 1);
        assert!((-1..=1).any(|dx| {
            display.get_pixel(bottom + Point::new(dx, 0)) == Some(cfg::COLOR_MAJOR_TICK)
        }));

        let minor = geometry.rim_point(6.0, cfg::TICK_INSET);
        assert_eq!(display.get_pixel(minor), Some(cfg::COLOR_MINOR_TICK));

        assert_eq!(display.get_pixel(geometry.center()), None);
    }

    #[test]
    fn indicator_is_drawn_inside_the_rim() {
        let mut display = mock();
        let geometry = DialGeometry::from_bounds(display.bounding_box());
        let at = indicator_position(&geometry, 66.0);
        draw_indicator(&mut display, at, cfg::COLOR_INDICATOR).unwrap();
        assert_eq!(display.get_pixel(at), Some(cfg::COLOR_INDICATOR));
    }

    #[test]
    fn numerals_change_with_active_field() {
        let mut state = ClockState::default();
        let mut hours = Canvas::new(240, 240);
        let geometry = DialGeometry::from_bounds(hours.bounding_box());
        draw_numerals(&mut hours, &geometry, &state, cfg::COLOR_NUMERAL).unwrap();

        state.set_active_field(Field::Minute);
        let mut minutes = Canvas::new(240, 240);
        draw_numerals(&mut minutes, &geometry, &state, cfg::COLOR_NUMERAL).unwrap();

        assert!(hours.drawn > 0);
        // "00" at the top reads the same either way, "04" becomes "10"
        let top = geometry.rim_point(180.0, cfg::NUMERAL_INSET);
        let four = geometry.rim_point(240.0, cfg::NUMERAL_INSET);
        let differs = |c: Point| {
            (-6..=6).any(|dx| {
                (-6..=6).any(|dy| {
                    let p = c + Point::new(dx, dy);
                    hours.pixel(p) != minutes.pixel(p)
                })
            })
        };
        assert!(!differs(top));
        assert!(differs(four));
    }

    #[test]
    fn erasing_numerals_restores_background() {
        let state = ClockState::default();
        let mut display = Canvas::new(240, 240);
        let geometry = DialGeometry::from_bounds(display.bounding_box());
        draw_numerals(&mut display, &geometry, &state, cfg::COLOR_NUMERAL).unwrap();
        draw_numerals(&mut display, &geometry, &state, cfg::COLOR_BACKGROUND).unwrap();

        let blank = Canvas::new(240, 240);
        for x in 0..240 {
            for y in 0..240 {
                let p = Point::new(x, y);
                assert_eq!(display.pixel(p), blank.pixel(p));
            }
        }
    }
}
