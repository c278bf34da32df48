use crate::Field;

/// A bounded wheel over `[0, field.bound())`. It stops at both ends rather
/// than wrapping around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selector {
    field: Field,
}

impl Selector {
    pub const fn for_field(field: Field) -> Self {
        Self { field }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn max(&self) -> u8 {
        self.field.bound() - 1
    }

    pub fn clamp(&self, value: i32) -> u8 {
        value.clamp(0, self.max() as i32) as u8
    }

    pub fn scrolled(&self, current: u8, delta: i32) -> u8 {
        self.clamp((current as i32).saturating_add(delta))
    }

    pub fn previous(&self, current: u8) -> Option<u8> {
        current.checked_sub(1)
    }

    pub fn next(&self, current: u8) -> Option<u8> {
        (current < self.max()).then_some(current + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_stops_at_the_ends() {
        let hours = Selector::for_field(Field::Hour);
        assert_eq!(hours.scrolled(22, 5), 23);
        assert_eq!(hours.scrolled(1, -3), 0);
        assert_eq!(hours.scrolled(9, 1), 10);

        let minutes = Selector::for_field(Field::Minute);
        assert_eq!(minutes.scrolled(58, 1), 59);
        assert_eq!(minutes.scrolled(59, 1), 59);
    }

    #[test]
    fn clamp_rejects_negative_and_oversized_values() {
        let minutes = Selector::for_field(Field::Minute);
        assert_eq!(minutes.clamp(-1), 0);
        assert_eq!(minutes.clamp(60), 59);
        assert_eq!(minutes.clamp(41), 41);
    }

    #[test]
    fn neighbours_end_at_bounds() {
        let hours = Selector::for_field(Field::Hour);
        assert_eq!(hours.previous(0), None);
        assert_eq!(hours.next(0), Some(1));
        assert_eq!(hours.previous(23), Some(22));
        assert_eq!(hours.next(23), None);
    }
}
