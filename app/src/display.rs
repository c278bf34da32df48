use dial_ui::HintRefresh;
use display_interface_spi::SPIInterfaceNoCS;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Dimensions;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Pixel;
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;
use mipidsi::models::ST7789;
use stm32f4xx_hal::gpio::{ErasedPin, Output};

use crate::hardware_config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

pub trait DisplayInterface: embedded_hal::blocking::spi::Write<u8> {}
impl<W: embedded_hal::blocking::spi::Write<u8>> DisplayInterface for W {}

type Panel<DI> = mipidsi::Display<SPIInterfaceNoCS<DI, ErasedPin<Output>>, ST7789, ErasedPin<Output>>;

/// The round ST7789 panel plus its backlight.
pub struct Display<DI: DisplayInterface> {
    inner: Panel<DI>,
    backlight_pin: ErasedPin<Output>,
}

impl<DI: DisplayInterface> Display<DI> {
    pub fn new<Delay: DelayUs<u32>>(
        spi: DI,
        dc_pin: ErasedPin<Output>,
        rst_pin: ErasedPin<Output>,
        backlight_pin: ErasedPin<Output>,
        delay: &mut Delay,
    ) -> Result<Self, mipidsi::error::InitError<<ErasedPin<Output> as OutputPin>::Error>> {
        let di = SPIInterfaceNoCS::new(spi, dc_pin);
        let inner = mipidsi::Builder::st7789(di)
            .with_display_size(DISPLAY_WIDTH, DISPLAY_HEIGHT)
            .with_orientation(mipidsi::Orientation::Portrait(false))
            .with_invert_colors(mipidsi::ColorInversion::Inverted)
            .init(delay, Some(rst_pin))?;
        Ok(Display {
            inner,
            backlight_pin,
        })
    }

    pub fn backlight_on(&mut self) {
        self.backlight_pin.set_high();
    }

    pub fn backlight_off(&mut self) {
        self.backlight_pin.set_low();
    }

    /// Clears with the backlight off so the wipe is not visible.
    pub fn sneaky_clear(&mut self, color: Rgb565) -> Result<(), mipidsi::Error> {
        self.backlight_off();
        let result = self.inner.clear(color);
        self.backlight_on();
        result
    }
}

// Pixels go straight out over SPI
impl<DI: DisplayInterface> HintRefresh for Display<DI> {
    fn hint_refresh(&mut self) {}
}

impl<DI: DisplayInterface> Dimensions for Display<DI> {
    fn bounding_box(&self) -> Rectangle {
        self.inner.bounding_box()
    }
}

impl<DI: DisplayInterface> DrawTarget for Display<DI> {
    type Color = Rgb565;
    type Error = mipidsi::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.inner.draw_iter(pixels)
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        self.inner.fill_contiguous(area, colors)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.inner.fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.inner.fill_solid(&self.bounding_box(), color)
    }
}
