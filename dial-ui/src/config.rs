use dial_model::{RotationPath, DEFAULT_ANIMATION_DURATION};
use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor, WebColors};
use fugit::MillisDurationU32;

pub const COLOR_BACKGROUND: Rgb565 = Rgb565::BLACK;
pub const COLOR_MAJOR_TICK: Rgb565 = Rgb565::WHITE;
// Half-transparent gray over black
pub const COLOR_MINOR_TICK: Rgb565 = Rgb565::CSS_DIM_GRAY;
pub const COLOR_INDICATOR: Rgb565 = Rgb565::CSS_ORANGE;
pub const COLOR_NUMERAL: Rgb565 = Rgb565::WHITE;
pub const COLOR_WHEEL_VALUE: Rgb565 = Rgb565::WHITE;
pub const COLOR_WHEEL_VALUE_INACTIVE: Rgb565 = Rgb565::new(3, 6, 3);
pub const COLOR_WHEEL_NEIGHBOUR: Rgb565 = Rgb565::CSS_DIM_GRAY;
pub const COLOR_WHEEL_FOCUS: Rgb565 = Rgb565::CSS_PALE_GREEN;
pub const COLOR_PANIC: Rgb565 = Rgb565::RED;

pub const MAJOR_TICK_WIDTH: u32 = 2;
pub const MAJOR_TICK_LENGTH: i32 = 3;
pub const MINOR_TICK_WIDTH: u32 = 1;
pub const MINOR_TICK_LENGTH: i32 = 5;
pub const TICK_INSET: i32 = 1;

pub const INDICATOR_DIAMETER: u32 = 5;
pub const INDICATOR_INSET: i32 = 2;

pub const NUMERAL_INSET: i32 = 15;

pub const WHEEL_SIZE: Size = Size::new(48, 84);
/// Distance from the dial center to each wheel's center.
pub const WHEEL_SPREAD: i32 = 32;
pub const WHEEL_CORNER_RADIUS: u32 = 6;

pub const INDICATOR_ANIMATION: MillisDurationU32 = DEFAULT_ANIMATION_DURATION;
pub const INDICATOR_PATH: RotationPath = RotationPath::ShortestArc;
