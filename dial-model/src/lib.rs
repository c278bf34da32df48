#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

mod animation;
mod clock;
mod controller;
pub mod dial;
mod selector;

pub use animation::{IndicatorAnimation, RotationPath, DEFAULT_ANIMATION_DURATION};
pub use clock::*;
pub use controller::{apply, PickerEvent, Update};
pub use selector::Selector;
