use dial_model::dial;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Drawable;
use embedded_text::style::{HeightMode, TextBoxStyleBuilder};
use embedded_text::TextBox;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};
use u8g2_fonts::U8g2TextStyle;

use crate::fonts::{TinyFont, SMALL_FONT, TINY_FONT};
use crate::geometry::DialGeometry;
use crate::primitives::{Marker, TickMark};
use crate::{config as cfg, AppDrawTarget};

/// Last-resort screen: a stopped dial on red with the panic message inside.
/// Every draw error is swallowed since there is nowhere left to report it.
pub fn draw_panic_screen<D: AppDrawTarget<E>, E>(display: &mut D, message: &str) {
    let bounds = display.bounding_box();
    let geometry = DialGeometry::from_bounds(bounds);
    let center = geometry.center();

    let _ = display.fill_solid(&bounds, cfg::COLOR_PANIC);

    for tick in dial::major_ticks() {
        let _ = TickMark::new(
            &geometry,
            tick.angle.into(),
            cfg::TICK_INSET,
            cfg::MAJOR_TICK_LENGTH * 2,
            cfg::MAJOR_TICK_WIDTH,
            Rgb565::BLACK,
        )
        .draw(display);
    }
    let _ = Marker::new(
        geometry.rim_point(180.0, cfg::INDICATOR_INSET + 8),
        cfg::INDICATOR_DIAMETER * 2,
        Rgb565::BLACK,
    )
    .draw(display);

    let _ = SMALL_FONT.render_aligned(
        " FATAL ERROR ",
        center - Point::new(0, geometry.radius() / 2),
        VerticalPosition::Center,
        HorizontalAlignment::Center,
        FontColor::WithBackground {
            fg: cfg::COLOR_PANIC,
            bg: Rgb565::BLACK,
        },
        display,
    );

    let _ = TINY_FONT.render_aligned(
        env!("CARGO_PKG_VERSION"),
        center - Point::new(0, geometry.radius() / 4),
        VerticalPosition::Center,
        HorizontalAlignment::Center,
        FontColor::Transparent(Rgb565::BLACK),
        display,
    );

    let character_style = U8g2TextStyle::new(TinyFont {}, Rgb565::BLACK);
    let textbox_style = TextBoxStyleBuilder::new()
        .height_mode(HeightMode::FitToText)
        .alignment(embedded_text::alignment::HorizontalAlignment::Center)
        .build();

    // Keep the text inside the square inscribed in the dial
    let half = geometry.radius() * 7 / 10;
    let _ = TextBox::with_textbox_style(
        message,
        Rectangle::new(
            Point::new(center.x - half, center.y),
            Size::new(2 * half as u32, half as u32),
        ),
        character_style,
        textbox_style,
    )
    .draw(display);
}

#[cfg(test)]
mod tests {
    use embedded_graphics::geometry::Dimensions;

    use super::*;
    use crate::testing::Canvas;

    #[test]
    fn panic_screen_fills_red_with_a_black_marker() {
        let mut display = Canvas::new(240, 240);
        draw_panic_screen(&mut display, "index out of bounds");

        let geometry = DialGeometry::from_bounds(display.bounding_box());
        assert_eq!(display.pixel(Point::new(0, 0)), cfg::COLOR_PANIC);
        assert_eq!(
            display.pixel(geometry.rim_point(180.0, cfg::INDICATOR_INSET + 8)),
            Rgb565::BLACK
        );
    }
}
