use dial_model::Selector;
use eg_seven_segment::SevenSegmentStyleBuilder;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::{
    Primitive, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment,
};
use embedded_graphics::text::{Alignment, Text};
use embedded_graphics::Drawable;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use crate::fonts::{SMALL_FONT, TINY_FONT};
use crate::format::two_digits;
use crate::geometry::DialGeometry;
use crate::{config as cfg, AppDrawTarget, UiError};

const DIGIT_SIZE: Size = Size::new(14, 24);
const NEIGHBOUR_OFFSET: i32 = 30;

/// One bounded wheel: the current value in the middle, its neighbours dimmed
/// above and below, and a focus frame while the wheel's field is active.
pub fn draw_wheel<D: AppDrawTarget<E>, E>(
    display: &mut D,
    area: Rectangle,
    selector: Selector,
    value: u8,
    focused: bool,
) -> Result<(), UiError<E>> {
    display
        .fill_solid(&area, cfg::COLOR_BACKGROUND)
        .map_err(UiError::Display)?;

    let center = area.center();

    let digits = SevenSegmentStyleBuilder::new()
        .digit_size(DIGIT_SIZE)
        .digit_spacing(3)
        .segment_width(3)
        .inactive_segment_color(cfg::COLOR_WHEEL_VALUE_INACTIVE)
        .segment_color(cfg::COLOR_WHEEL_VALUE)
        .build();
    Text::with_alignment(
        two_digits(value as u16).as_str(),
        center + Point::new(0, DIGIT_SIZE.height as i32 / 2),
        digits,
        Alignment::Center,
    )
    .draw(display)
    .map_err(UiError::Display)?;

    for (neighbour, dy) in [
        (selector.previous(value), -NEIGHBOUR_OFFSET),
        (selector.next(value), NEIGHBOUR_OFFSET),
    ] {
        let Some(neighbour) = neighbour else {
            continue;
        };
        TINY_FONT.render_aligned(
            two_digits(neighbour as u16).as_str(),
            center + Point::new(0, dy),
            VerticalPosition::Center,
            HorizontalAlignment::Center,
            FontColor::Transparent(cfg::COLOR_WHEEL_NEIGHBOUR),
            display,
        )?;
    }

    if focused {
        RoundedRectangle::with_equal_corners(
            area,
            Size::new(cfg::WHEEL_CORNER_RADIUS, cfg::WHEEL_CORNER_RADIUS),
        )
        .into_styled(
            PrimitiveStyleBuilder::new()
                .stroke_alignment(StrokeAlignment::Inside)
                .stroke_width(2)
                .stroke_color(cfg::COLOR_WHEEL_FOCUS)
                .build(),
        )
        .draw(display)
        .map_err(UiError::Display)?;
    }
    Ok(())
}

pub fn draw_separator<D: AppDrawTarget<E>, E>(
    display: &mut D,
    geometry: &DialGeometry,
) -> Result<(), UiError<E>> {
    SMALL_FONT.render_aligned(
        ":",
        geometry.separator_origin(),
        VerticalPosition::Center,
        HorizontalAlignment::Center,
        FontColor::Transparent(cfg::COLOR_WHEEL_VALUE),
        display,
    )?;
    Ok(())
}
