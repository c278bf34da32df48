use heapless::String;
use ufmt::uwrite;

/// Room for every `u16`: at most five digits, and only single digits get padded.
pub type Label = String<5>;

/// Zero-padded two digit label, like the wheels and the numeral ring show.
pub fn two_digits(value: u16) -> Label {
    let mut s = Label::new();
    if value < 10 {
        uwrite!(s, "0{}", value).unwrap();
    } else {
        uwrite!(s, "{}", value).unwrap();
    }
    s
}
