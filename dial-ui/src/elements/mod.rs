mod badge;
mod dial;
mod wheel;

pub use badge::draw_badge;
pub use dial::{draw_indicator, draw_numerals, draw_ticks, indicator_position};
pub use wheel::{draw_separator, draw_wheel};
