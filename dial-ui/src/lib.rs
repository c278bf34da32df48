#![cfg_attr(not(test), no_std)]

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;

mod config;
mod elements;
mod error;
pub mod fonts;
mod format;
mod geometry;
pub mod panic;
mod primitives;
mod screens;
#[cfg(test)]
mod testing;
mod util;

pub use elements::*;
pub use error::UiError;
pub use geometry::DialGeometry;
pub use screens::{BootScreen, PickerScreen, Screen, Screens};

pub trait HintRefresh {
    fn hint_refresh(&mut self);
}

pub trait AppDrawTarget<E>: DrawTarget<Color = Rgb565, Error = E> + HintRefresh {}
impl<E, D: DrawTarget<Color = Rgb565, Error = E> + HintRefresh> AppDrawTarget<E> for D {}
