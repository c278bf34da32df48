mod boot;
mod picker;

use core::fmt::Debug;

pub use boot::BootScreen;
use enum_dispatch::enum_dispatch;
pub use picker::PickerScreen;

use crate::{AppDrawTarget, UiError};

#[allow(async_fn_in_trait)]
#[enum_dispatch(Screens<DT, E>)]
pub trait Screen<DT: AppDrawTarget<E>, E: Debug> {
    async fn draw_init(&mut self, display: &mut DT) -> Result<(), UiError<E>>;
    async fn draw_frame(&mut self, display: &mut DT) -> Result<(), UiError<E>>;
}

#[allow(clippy::large_enum_variant)]
#[enum_dispatch]
pub enum Screens<DT: AppDrawTarget<E>, E: Debug> {
    Boot(BootScreen<DT, E>),
    Picker(PickerScreen<DT, E>),
}
