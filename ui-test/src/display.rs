use core::convert::Infallible;

use dial_ui::HintRefresh;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::Pixel;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

/// Simulated panel whose refresh hints push the framebuffer to the window.
pub struct Simulator {
    display: SimulatorDisplay<Rgb565>,
    window: Window,
}

impl Simulator {
    pub fn new(size: Size, scale: u32) -> Self {
        let output_settings = OutputSettingsBuilder::new().scale(scale).build();
        Self {
            display: SimulatorDisplay::new(size),
            window: Window::new("Dial", &output_settings),
        }
    }

    pub fn events(&mut self) -> Vec<SimulatorEvent> {
        self.window.events().collect()
    }
}

impl HintRefresh for Simulator {
    fn hint_refresh(&mut self) {
        self.window.update(&self.display);
    }
}

impl OriginDimensions for Simulator {
    fn size(&self) -> Size {
        self.display.size()
    }
}

impl DrawTarget for Simulator {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.display.draw_iter(pixels)
    }

    fn fill_solid(
        &mut self,
        area: &embedded_graphics::primitives::Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.display.fill_solid(area, color)
    }
}
