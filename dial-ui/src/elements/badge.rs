use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::Rgb565;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use crate::fonts::SMALL_FONT;
use crate::util::delay_ms;
use crate::{AppDrawTarget, UiError};

const FLASH_MS: u32 = 50;

/// Label that blinks inverted `flashes` times before settling on `fg` over `bg`.
pub async fn draw_badge<D: AppDrawTarget<E>, E>(
    display: &mut D,
    point: Point,
    text: &str,
    fg: Rgb565,
    bg: Rgb565,
    flashes: u8,
) -> Result<(), UiError<E>> {
    let render = |display: &mut D, fg: Rgb565, bg: Rgb565| {
        SMALL_FONT
            .render_aligned(
                text,
                point,
                VerticalPosition::Center,
                HorizontalAlignment::Center,
                FontColor::WithBackground { fg, bg },
                display,
            )
            .map(|_| ())
    };

    for _ in 0..flashes {
        render(display, bg, fg)?;
        display.hint_refresh();
        delay_ms(FLASH_MS).await;
        render(display, fg, bg)?;
        display.hint_refresh();
        delay_ms(FLASH_MS).await;
    }
    render(display, fg, bg)?;
    Ok(())
}
