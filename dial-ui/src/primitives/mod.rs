mod marker;
mod tick_mark;

pub use marker::Marker;
pub use tick_mark::TickMark;
