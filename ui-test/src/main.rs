mod display;

use std::convert::Infallible;
use std::thread;
use std::time::{Duration, Instant};

use dial_model::{ClockState, Field, PickerEvent};
use dial_ui::{BootScreen, PickerScreen, Screen, Screens, UiError};
use embedded_graphics::geometry::{Dimensions, Size};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::SimulatorEvent;
use fugit::ExtU32;

use crate::display::Simulator;

const FRAME: Duration = Duration::from_millis(20);

type Picker = PickerScreen<Simulator, Infallible>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), UiError<Infallible>> {
    let mut display = Simulator::new(Size::new(240, 240), 2);
    let bounds = display.bounding_box();

    let mut screen: Screens<Simulator, Infallible> = BootScreen::default().into();
    screen.draw_init(&mut display).await?;

    screen = Picker::new(ClockState::default()).into();
    screen.draw_init(&mut display).await?;

    let mut cursor = bounds.center();
    let mut last_frame = Instant::now();

    'outer: loop {
        let now = Instant::now();
        let dt = (now - last_frame).as_millis() as u32;
        last_frame = now;

        let mut remount = false;
        if let Screens::Picker(ref mut picker) = screen {
            for e in display.events() {
                let event = match e {
                    SimulatorEvent::Quit => break 'outer,
                    SimulatorEvent::KeyUp { keycode, .. } => match keycode {
                        Keycode::Escape => break 'outer,
                        Keycode::Backspace => {
                            remount = true;
                            None
                        }
                        keycode => key_event(keycode),
                    },
                    SimulatorEvent::MouseMove { point } => {
                        cursor = point;
                        None
                    }
                    SimulatorEvent::MouseButtonUp { point, .. } => {
                        picker.hit_test(bounds, point).map(PickerEvent::Tap)
                    }
                    SimulatorEvent::MouseWheel { scroll_delta, .. } => {
                        let field = picker
                            .hit_test(bounds, cursor)
                            .unwrap_or(picker.state().active_field());
                        Some(PickerEvent::Scroll {
                            field,
                            delta: scroll_delta.y,
                        })
                    }
                    _ => None,
                };
                if let Some(event) = event {
                    picker.handle(event);
                }
            }
            picker.advance(dt.millis());
        }

        if remount {
            // Dismissing drops the state with the screen
            screen = Picker::new(ClockState::default()).into();
            screen.draw_init(&mut display).await?;
        }

        screen.draw_frame(&mut display).await?;
        thread::sleep(FRAME);
    }
    Ok(())
}

/// Up raises the active value, like the crown turned clockwise.
fn key_event(keycode: Keycode) -> Option<PickerEvent> {
    match keycode {
        Keycode::Up => Some(PickerEvent::ScrollActive { delta: 1 }),
        Keycode::Down => Some(PickerEvent::ScrollActive { delta: -1 }),
        Keycode::Left => Some(PickerEvent::Tap(Field::Hour)),
        Keycode::Right => Some(PickerEvent::Tap(Field::Minute)),
        Keycode::Space => Some(PickerEvent::Toggle),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use dial_model::apply;

    use super::*;

    #[test]
    fn up_raises_and_down_lowers_the_active_value() {
        let mut state = ClockState::default();
        let up = key_event(Keycode::Up).unwrap();
        let down = key_event(Keycode::Down).unwrap();

        apply(&mut state, up);
        assert_eq!(state.hour(), 10);
        apply(&mut state, down);
        apply(&mut state, down);
        assert_eq!(state.hour(), 8);
    }

    #[test]
    fn arrows_tap_wheels_and_space_toggles() {
        assert_eq!(
            key_event(Keycode::Right),
            Some(PickerEvent::Tap(Field::Minute))
        );
        assert_eq!(key_event(Keycode::Left), Some(PickerEvent::Tap(Field::Hour)));
        assert_eq!(key_event(Keycode::Space), Some(PickerEvent::Toggle));
        assert_eq!(key_event(Keycode::A), None);
    }
}
