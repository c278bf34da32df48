use core::fmt::Debug;

use dial_model::{
    apply, ClockState, Field, IndicatorAnimation, PickerEvent, RotationPath, Selector, Update,
};
use embedded_graphics::geometry::Point;
use embedded_graphics::primitives::Rectangle;
use fugit::MillisDurationU32;

use super::Screen;
use crate::geometry::DialGeometry;
use crate::{
    config as cfg, draw_indicator, draw_numerals, draw_separator, draw_ticks, draw_wheel,
    indicator_position, AppDrawTarget, UiError,
};

const FIELDS: [Field; 2] = [Field::Hour, Field::Minute];

/// The dial with its two wheels. Owns the one [`ClockState`] for as long as
/// the screen is shown.
pub struct PickerScreen<DT, E> {
    state: ClockState,
    indicator: IndicatorAnimation,
    drawn: Option<Drawn>,
    _phantom: core::marker::PhantomData<(DT, E)>,
}

/// What is currently on the glass.
#[derive(Clone, Copy)]
struct Drawn {
    state: ClockState,
    indicator: Point,
}

impl<DT: AppDrawTarget<E>, E: Debug> Screen<DT, E> for PickerScreen<DT, E> {
    async fn draw_init(&mut self, display: &mut DT) -> Result<(), UiError<E>> {
        display
            .clear(cfg::COLOR_BACKGROUND)
            .map_err(UiError::Display)?;

        let geometry = DialGeometry::from_bounds(display.bounding_box());
        draw_ticks(display, &geometry)?;
        draw_numerals(display, &geometry, &self.state, cfg::COLOR_NUMERAL)?;
        draw_separator(display, &geometry)?;
        for field in FIELDS {
            self.draw_wheel(display, &geometry, field)?;
        }

        let indicator = indicator_position(&geometry, self.indicator.current());
        draw_indicator(display, indicator, cfg::COLOR_INDICATOR)?;

        self.drawn = Some(Drawn {
            state: self.state,
            indicator,
        });
        display.hint_refresh();
        Ok(())
    }

    async fn draw_frame(&mut self, display: &mut DT) -> Result<(), UiError<E>> {
        let Some(drawn) = self.drawn else {
            return self.draw_init(display).await;
        };
        let geometry = DialGeometry::from_bounds(display.bounding_box());
        let mut dirty = false;

        let field_changed = drawn.state.active_field() != self.state.active_field();
        if field_changed {
            draw_numerals(display, &geometry, &drawn.state, cfg::COLOR_BACKGROUND)?;
            draw_numerals(display, &geometry, &self.state, cfg::COLOR_NUMERAL)?;
            dirty = true;
        }

        for field in FIELDS {
            if field_changed || drawn.state.value(field) != self.state.value(field) {
                self.draw_wheel(display, &geometry, field)?;
                dirty = true;
            }
        }

        let indicator = indicator_position(&geometry, self.indicator.current());
        if indicator != drawn.indicator {
            draw_indicator(display, drawn.indicator, cfg::COLOR_BACKGROUND)?;
            // The marker overlaps the tick ring
            draw_ticks(display, &geometry)?;
            draw_indicator(display, indicator, cfg::COLOR_INDICATOR)?;
            dirty = true;
        }

        self.drawn = Some(Drawn {
            state: self.state,
            indicator,
        });
        if dirty {
            display.hint_refresh();
        }
        Ok(())
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> PickerScreen<DT, E> {
    pub fn new(state: ClockState) -> Self {
        Self {
            state,
            indicator: IndicatorAnimation::new(
                state.current_angle(),
                cfg::INDICATOR_ANIMATION,
                cfg::INDICATOR_PATH,
            ),
            drawn: None,
            _phantom: core::marker::PhantomData,
        }
    }

    pub fn with_animation(mut self, duration: MillisDurationU32, path: RotationPath) -> Self {
        self.indicator = IndicatorAnimation::new(self.state.current_angle(), duration, path);
        self
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn indicator(&self) -> &IndicatorAnimation {
        &self.indicator
    }

    /// Commits `event` and points the indicator at the resulting angle.
    pub fn handle(&mut self, event: PickerEvent) -> Update {
        let update = apply(&mut self.state, event);
        if update.any() {
            self.indicator.retarget(self.state.current_angle());
        }
        update
    }

    pub fn advance(&mut self, dt: MillisDurationU32) {
        self.indicator.advance(dt);
    }

    /// Which wheel, if any, sits under `point` on a display of `bounds`.
    pub fn hit_test(&self, bounds: Rectangle, point: Point) -> Option<Field> {
        DialGeometry::from_bounds(bounds).wheel_at(point)
    }

    fn draw_wheel(
        &self,
        display: &mut DT,
        geometry: &DialGeometry,
        field: Field,
    ) -> Result<(), UiError<E>> {
        draw_wheel(
            display,
            geometry.wheel_area(field),
            Selector::for_field(field),
            self.state.value(field),
            self.state.active_field() == field,
        )
    }
}

impl<DT: AppDrawTarget<E>, E: Debug> Default for PickerScreen<DT, E> {
    fn default() -> Self {
        Self::new(ClockState::default())
    }
}
