/// Degrees of indicator travel per hour.
pub const HOUR_SCALE: u16 = 15;
/// Degrees of indicator travel per minute.
pub const MINUTE_SCALE: u16 = 6;
/// Rotates zero to the bottom of the dial.
pub const PHASE_OFFSET: u16 = 180;
pub const FULL_TURN: u16 = 360;

pub const HOURS: u8 = 24;
pub const MINUTES: u8 = 60;

pub const DEFAULT_HOUR: u8 = 9;
pub const DEFAULT_MINUTE: u8 = 41;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    #[default]
    Hour,
    Minute,
}

impl Field {
    /// Exclusive upper bound of the field's domain.
    pub const fn bound(self) -> u8 {
        match self {
            Field::Hour => HOURS,
            Field::Minute => MINUTES,
        }
    }

    pub const fn scale(self) -> u16 {
        match self {
            Field::Hour => HOUR_SCALE,
            Field::Minute => MINUTE_SCALE,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Field::Hour => Field::Minute,
            Field::Minute => Field::Hour,
        }
    }
}

/// Whole degrees, always in `[0, 360)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Angle(u16);

impl Angle {
    pub const ZERO: Angle = Angle(0);

    pub const fn from_degrees(degrees: u32) -> Self {
        Self((degrees % FULL_TURN as u32) as u16)
    }

    pub const fn degrees(self) -> u16 {
        self.0
    }

    pub const fn offset(self, degrees: u16) -> Self {
        Self::from_degrees(self.0 as u32 + degrees as u32)
    }
}

impl From<Angle> for f32 {
    fn from(angle: Angle) -> f32 {
        angle.0 as f32
    }
}

/// The picker's only state. Angles are derived on read, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    hour: u8,
    minute: u8,
    active_field: Field,
}

impl ClockState {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: saturate(hour, HOURS),
            minute: saturate(minute, MINUTES),
            active_field: Field::Hour,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn active_field(&self) -> Field {
        self.active_field
    }

    pub fn value(&self, field: Field) -> u8 {
        match field {
            Field::Hour => self.hour,
            Field::Minute => self.minute,
        }
    }

    /// Returns whether the stored hour changed. Out-of-range input saturates.
    pub fn set_hour(&mut self, hour: u8) -> bool {
        self.set_value(Field::Hour, hour)
    }

    pub fn set_minute(&mut self, minute: u8) -> bool {
        self.set_value(Field::Minute, minute)
    }

    pub fn set_value(&mut self, field: Field, value: u8) -> bool {
        let value = saturate(value, field.bound());
        let slot = match field {
            Field::Hour => &mut self.hour,
            Field::Minute => &mut self.minute,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    pub fn set_active_field(&mut self, field: Field) -> bool {
        if self.active_field == field {
            return false;
        }
        self.active_field = field;
        true
    }

    pub fn toggle_active_field(&mut self) {
        self.active_field = self.active_field.other();
    }

    pub fn hour_angle(&self) -> Angle {
        self.angle_of(Field::Hour)
    }

    pub fn minute_angle(&self) -> Angle {
        self.angle_of(Field::Minute)
    }

    pub fn angle_of(&self, field: Field) -> Angle {
        Angle::from_degrees(self.value(field) as u32 * field.scale() as u32)
            .offset(PHASE_OFFSET)
    }

    /// Where the indicator should point for the field being edited.
    pub fn current_angle(&self) -> Angle {
        self.angle_of(self.active_field)
    }

    /// Label of the major tick at `tick_angle`, in units of the active field.
    pub fn numeral_for(&self, tick_angle: Angle) -> u16 {
        tick_angle.degrees() / self.active_field.scale()
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new(DEFAULT_HOUR, DEFAULT_MINUTE)
    }
}

const fn saturate(value: u8, bound: u8) -> u8 {
    if value >= bound {
        bound - 1
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_angle_matches_formula_for_every_hour() {
        let mut state = ClockState::default();
        for h in 0..HOURS {
            state.set_hour(h);
            let expected = (h as u32 * 15 + 180) % 360;
            assert_eq!(state.hour_angle().degrees() as u32, expected, "hour {h}");
        }
    }

    #[test]
    fn minute_angle_matches_formula_for_every_minute() {
        let mut state = ClockState::default();
        for m in 0..MINUTES {
            state.set_minute(m);
            let expected = (m as u32 * 6 + 180) % 360;
            assert_eq!(state.minute_angle().degrees() as u32, expected, "minute {m}");
        }
    }

    #[test]
    fn starts_at_nine_forty_one_on_hours() {
        let state = ClockState::default();
        assert_eq!(state.hour(), 9);
        assert_eq!(state.minute(), 41);
        assert_eq!(state.active_field(), Field::Hour);
        assert_eq!(state.current_angle(), Angle::from_degrees(315));
    }

    #[test]
    fn switching_to_minutes_points_at_minute_angle() {
        let mut state = ClockState::default();
        assert!(state.set_active_field(Field::Minute));
        assert_eq!(state.current_angle().degrees(), 66);
        assert_eq!((state.hour(), state.minute()), (9, 41));
    }

    #[test]
    fn numerals_follow_active_field() {
        let mut state = ClockState::default();
        let tick = Angle::from_degrees(60);
        assert_eq!(state.numeral_for(tick), 4);
        state.toggle_active_field();
        assert_eq!(state.numeral_for(tick), 10);
    }

    #[test]
    fn setting_same_hour_twice_reports_no_change() {
        let mut state = ClockState::default();
        assert!(state.set_hour(17));
        assert!(!state.set_hour(17));
        assert_eq!(state.hour(), 17);
    }

    #[test]
    fn out_of_range_values_saturate() {
        let mut state = ClockState::new(30, 99);
        assert_eq!((state.hour(), state.minute()), (23, 59));
        state.set_minute(60);
        assert_eq!(state.minute(), 59);
        assert!(!state.set_hour(24));

        let mut state = ClockState::new(20, 10);
        assert!(state.set_hour(24));
        assert_eq!(state.hour(), 23);
    }
}
