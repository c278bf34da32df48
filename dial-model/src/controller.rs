use crate::{ClockState, Field, Selector};

/// Input coming from the hosts' selectors and tap areas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PickerEvent {
    /// The wheel settled on an absolute value.
    Select { field: Field, value: i32 },
    /// The wheel moved by `delta` detents.
    Scroll { field: Field, delta: i32 },
    /// A step from an input that is not bound to one wheel, like a crown.
    ScrollActive { delta: i32 },
    Tap(Field),
    Toggle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Update {
    pub value_changed: bool,
    pub field_changed: bool,
}

impl Update {
    pub fn any(&self) -> bool {
        self.value_changed || self.field_changed
    }
}

/// Validates `event` and commits it to `state`.
///
/// Scrolling a wheel does not make it active; only taps and toggles move focus.
pub fn apply(state: &mut ClockState, event: PickerEvent) -> Update {
    let update = match event {
        PickerEvent::Select { field, value } => {
            let value = Selector::for_field(field).clamp(value);
            Update {
                value_changed: state.set_value(field, value),
                ..Default::default()
            }
        }
        PickerEvent::Scroll { field, delta } => {
            let value = Selector::for_field(field).scrolled(state.value(field), delta);
            Update {
                value_changed: state.set_value(field, value),
                ..Default::default()
            }
        }
        PickerEvent::ScrollActive { delta } => {
            return apply(
                state,
                PickerEvent::Scroll {
                    field: state.active_field(),
                    delta,
                },
            );
        }
        PickerEvent::Tap(field) => Update {
            field_changed: state.set_active_field(field),
            ..Default::default()
        },
        PickerEvent::Toggle => {
            state.toggle_active_field();
            Update {
                field_changed: true,
                ..Default::default()
            }
        }
    };

    if update.any() {
        debug!(
            "commit {} -> {}:{} on {}",
            event,
            state.hour(),
            state.minute(),
            state.active_field()
        );
    }
    update
}
