use stm32f4xx_hal as hal;

use hal::pac::{RCC, SPI1};
use hal::prelude::*;
use hal::rcc::Clocks;
use hal::spi::Spi;

use crate::display::Display;

pub const HSE_HZ: u32 = 25_000_000;
pub const SYSCLK: u32 = 84_000_000;
pub const HCLK: u32 = 84_000_000;
pub const SPI_FREQ_HZ: u32 = 40_000_000;

pub const DISPLAY_WIDTH: u16 = 240;
pub const DISPLAY_HEIGHT: u16 = 240;

/// Encoder sampling period. Detents shorter than two periods are lost.
pub const ENCODER_POLL_MS: u32 = 1;
/// Frame period of the display task, about 40 fps.
pub const FRAME_MS: u32 = 25;

pub type DisplaySpiType = Spi<SPI1>;
pub type DisplayType = Display<DisplaySpiType>;

pub struct AllGpio {
    pub a: hal::gpio::gpioa::Parts,
    pub b: hal::gpio::gpiob::Parts,
    pub c: hal::gpio::gpioc::Parts,
}

#[rustfmt::skip]
macro_rules! pin_macro {
    ($d:tt $name:ident, $gpio:ident, $pin:ident) => {
        macro_rules! $name {
            ($d gpio:ident) => {
                $d gpio. $gpio . $pin
            };
        }
    };
}

pin_macro!($ display_dc_pin, a, pa8);
pin_macro!($ display_rst_pin, b, pb5);
pin_macro!($ display_sclk_pin, a, pa5);
pin_macro!($ display_miso_pin, a, pa6);
pin_macro!($ display_mosi_pin, a, pa7);
pin_macro!($ display_backlight_pin, b, pb9);

pin_macro!($ encoder_dt_pin, c, pc14);
pin_macro!($ encoder_clk_pin, c, pc15);
// EXTI2
pin_macro!($ encoder_button_pin, a, pa2);

// TIM3 -> display init delay
// SysTick -> monotonic

pub fn setup_clocks(rcc: RCC) -> Clocks {
    rcc.constrain()
        .cfgr
        .use_hse(HSE_HZ.Hz())
        .sysclk(SYSCLK.Hz())
        .hclk(HCLK.Hz())
        .freeze()
}
