use core::fmt::Debug;

use dial_model::dial;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::Drawable;

use super::Screen;
use crate::geometry::DialGeometry;
use crate::primitives::TickMark;
use crate::util::delay_ms;
use crate::{config as cfg, draw_badge, AppDrawTarget, UiError};

const TICK_STEP_MS: u32 = 25;

/// Splash shown while the host brings the display up: the major ticks sweep
/// in one by one, then the firmware version flashes in the middle.
pub struct BootScreen<DT, E> {
    _phantom: core::marker::PhantomData<(DT, E)>,
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for BootScreen<DT, E> {
    async fn draw_init(&mut self, display: &mut DT) -> Result<(), UiError<E>> {
        display
            .clear(cfg::COLOR_BACKGROUND)
            .map_err(UiError::Display)?;

        let geometry = DialGeometry::from_bounds(display.bounding_box());
        for tick in dial::major_ticks() {
            TickMark::new(
                &geometry,
                tick.label_angle().into(),
                cfg::TICK_INSET,
                cfg::MAJOR_TICK_LENGTH * 3,
                cfg::MAJOR_TICK_WIDTH,
                cfg::COLOR_INDICATOR,
            )
            .draw(display)
            .map_err(UiError::Display)?;
            display.hint_refresh();
            delay_ms(TICK_STEP_MS).await;
        }

        draw_badge(
            display,
            geometry.center(),
            env!("CARGO_PKG_VERSION"),
            Rgb565::BLACK,
            Rgb565::WHITE,
            2,
        )
        .await?;
        delay_ms(150).await;
        Ok(())
    }

    async fn draw_frame(&mut self, _display: &mut DT) -> Result<(), UiError<E>> {
        Ok(())
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Default for BootScreen<DT, E> {
    fn default() -> Self {
        Self {
            _phantom: core::marker::PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embedded_graphics::geometry::{Dimensions, Point};

    use super::*;
    use crate::testing::Canvas;

    #[tokio::test(flavor = "current_thread")]
    async fn sweeps_every_major_tick() {
        let mut display = Canvas::new(240, 240);
        let mut boot: BootScreen<Canvas, Infallible> = BootScreen::default();
        boot.draw_init(&mut display).await.unwrap();

        let geometry = DialGeometry::from_bounds(display.bounding_box());
        for tick in dial::major_ticks() {
            let at = geometry.rim_point(tick.label_angle().into(), cfg::TICK_INSET + 4);
            let lit = (-1..=1)
                .flat_map(|dx| (-1..=1).map(move |dy| at + Point::new(dx, dy)))
                .any(|p| display.pixel(p) == cfg::COLOR_INDICATOR);
            assert!(lit, "tick {} missing", tick.index);
        }
        // One refresh per tick, then two per badge flash
        assert_eq!(display.refreshes, dial::MAJOR_TICK_COUNT as usize + 4);
    }
}
