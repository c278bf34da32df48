//! Tick layout of the dial face.
//!
//! The ring has [`TICK_COUNT`] evenly spaced positions. Every
//! [`MAJOR_TICK_EVERY`]th one is a major tick and carries a numeral; the
//! numeral's value depends on which field is being edited, so the same ring
//! reads as hours or as minutes.

use crate::{Angle, ClockState, FULL_TURN, PHASE_OFFSET};

pub const TICK_COUNT: u8 = 60;
pub const TICK_STEP: u16 = FULL_TURN / TICK_COUNT as u16;
pub const MAJOR_TICK_EVERY: u8 = 5;
pub const MAJOR_TICK_COUNT: u8 = TICK_COUNT / MAJOR_TICK_EVERY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickKind {
    Major,
    Minor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    pub index: u8,
    pub angle: Angle,
    pub kind: TickKind,
}

impl Tick {
    pub fn new(index: u8) -> Self {
        let index = index % TICK_COUNT;
        Self {
            index,
            angle: Angle::from_degrees(index as u32 * TICK_STEP as u32),
            kind: if is_major(index) {
                TickKind::Major
            } else {
                TickKind::Minor
            },
        }
    }

    pub fn is_major(&self) -> bool {
        self.kind == TickKind::Major
    }

    /// Position of the numeral, on the same phase as the indicator.
    pub fn label_angle(&self) -> Angle {
        self.angle.offset(PHASE_OFFSET)
    }

    pub fn numeral(&self, state: &ClockState) -> Option<u16> {
        self.is_major().then(|| state.numeral_for(self.angle))
    }
}

pub fn is_major(index: u8) -> bool {
    index % MAJOR_TICK_EVERY == 0
}

pub fn ticks() -> impl Iterator<Item = Tick> {
    (0..TICK_COUNT).map(Tick::new)
}

pub fn major_ticks() -> impl Iterator<Item = Tick> {
    (0..TICK_COUNT)
        .step_by(MAJOR_TICK_EVERY as usize)
        .map(Tick::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    #[test]
    fn ring_has_twelve_major_and_forty_eight_minor_ticks() {
        let major = ticks().filter(Tick::is_major).count();
        let minor = ticks().filter(|t| !t.is_major()).count();
        assert_eq!(major, 12);
        assert_eq!(minor, 48);
        assert_eq!(major_ticks().count(), MAJOR_TICK_COUNT as usize);
    }

    #[test]
    fn major_ticks_sit_on_thirty_degree_marks() {
        for tick in ticks() {
            assert_eq!(tick.angle.degrees(), tick.index as u16 * 6);
            assert_eq!(tick.is_major(), tick.angle.degrees() % 30 == 0);
            assert_eq!(is_major(tick.index), tick.index % 5 == 0);
        }
    }

    #[test]
    fn tenth_tick_relabels_with_active_field() {
        let mut state = ClockState::default();
        let tick = Tick::new(10);
        assert_eq!(tick.angle.degrees(), 60);
        assert_eq!(tick.numeral(&state), Some(4));
        state.set_active_field(Field::Minute);
        assert_eq!(tick.numeral(&state), Some(10));
    }

    #[test]
    fn minor_ticks_have_no_numeral() {
        let state = ClockState::default();
        assert_eq!(Tick::new(7).numeral(&state), None);
    }

    #[test]
    fn labels_are_rotated_half_a_turn() {
        assert_eq!(Tick::new(0).label_angle().degrees(), 180);
        assert_eq!(Tick::new(45).label_angle().degrees(), 90);
    }

    #[test]
    fn hour_numerals_cover_even_hours() {
        let state = ClockState::default();
        let labels: Vec<u16> = major_ticks().filter_map(|t| t.numeral(&state)).collect();
        assert_eq!(labels, [0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22]);
    }
}
