#![no_std]
#![no_main]

#[macro_use]
mod hardware_config;
mod display;
mod panic;

use defmt_rtt as _;

#[rtic::app(device = stm32f4xx_hal::pac, dispatchers = [USART1, USART2])]
mod app {
    use core::cell::UnsafeCell;

    use dial_model::{ClockState, PickerEvent};
    use dial_ui::{BootScreen, PickerScreen, Screen, Screens, UiError};
    use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
    use fugit::ExtU32;
    use mipidsi::Error as MipidsiError;
    use rotary_encoder_embedded::standard::StandardMode;
    use rotary_encoder_embedded::{Direction, RotaryEncoder};
    use rtic_monotonics::systick::Systick;
    use rtic_monotonics::{create_systick_token, Monotonic};
    use rtic_sync::channel::{Receiver, Sender};
    use rtic_sync::make_channel;
    use stm32f4xx_hal::gpio::{Edge, ErasedPin, Input, Speed};
    use stm32f4xx_hal::pac;
    use stm32f4xx_hal::prelude::*;
    use stm32f4xx_hal::spi::Spi;

    use crate::display::Display;
    use crate::hardware_config::{self as hw, AllGpio, DisplayType};
    use crate::panic::set_panic_display_ref;

    const EVENT_CAPACITY: usize = 8;

    type EventSender = Sender<'static, PickerEvent, EVENT_CAPACITY>;
    type EventReceiver = Receiver<'static, PickerEvent, EVENT_CAPACITY>;
    type Encoder = RotaryEncoder<StandardMode, ErasedPin<Input>, ErasedPin<Input>>;

    #[shared]
    struct Shared {
        display: UnsafeCell<DisplayType>,
    }

    #[local]
    struct Local {
        encoder: Encoder,
        encoder_events: EventSender,
        button_pin: ErasedPin<Input>,
        button_events: EventSender,
        events: EventReceiver,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local) {
        let mut dp: pac::Peripherals = cx.device;

        let gpio = AllGpio {
            a: dp.GPIOA.split(),
            b: dp.GPIOB.split(),
            c: dp.GPIOC.split(),
        };

        let mut backlight_pin = display_backlight_pin!(gpio).into_push_pull_output();
        backlight_pin.set_low();

        let mut syscfg = dp.SYSCFG.constrain();
        let clocks = hw::setup_clocks(dp.RCC);

        let systick_token = create_systick_token!();
        Systick::start(cx.core.SYST, hw::SYSCLK, systick_token);

        let mut delay = dp.TIM3.delay_us(&clocks);

        let mut display = {
            let mut dc_pin = display_dc_pin!(gpio).into_push_pull_output();
            let mut rst_pin = display_rst_pin!(gpio).into_push_pull_output();
            dc_pin.set_speed(Speed::VeryHigh);
            rst_pin.set_speed(Speed::VeryHigh);

            let mut sclk_pin = display_sclk_pin!(gpio).into_alternate();
            let mut miso_pin = display_miso_pin!(gpio).into_alternate();
            let mut mosi_pin = display_mosi_pin!(gpio).into_alternate();
            sclk_pin.set_speed(Speed::VeryHigh);
            miso_pin.set_speed(Speed::VeryHigh);
            mosi_pin.set_speed(Speed::VeryHigh);

            let spi = Spi::new(
                dp.SPI1,
                (sclk_pin, miso_pin, mosi_pin),
                embedded_hal::spi::MODE_3,
                hw::SPI_FREQ_HZ.Hz(),
                &clocks,
            );

            match Display::new(
                spi,
                dc_pin.erase(),
                rst_pin.erase(),
                backlight_pin.erase(),
                &mut delay,
            ) {
                Ok(display) => display,
                Err(e) => panic!("display init: {:?}", e),
            }
        };

        if let Err(e) = display.sneaky_clear(Rgb565::BLACK) {
            panic!("display clear: {:?}", e);
        }

        let encoder = RotaryEncoder::new(
            encoder_dt_pin!(gpio).into_pull_up_input().erase(),
            encoder_clk_pin!(gpio).into_pull_up_input().erase(),
        )
        .into_standard_mode();

        let mut button_pin = encoder_button_pin!(gpio).into_pull_down_input();
        button_pin.make_interrupt_source(&mut syscfg);
        button_pin.trigger_on_edge(&mut dp.EXTI, Edge::Rising);
        button_pin.enable_interrupt(&mut dp.EXTI);

        let (sender, events) = make_channel!(PickerEvent, EVENT_CAPACITY);

        defmt::info!("dial-app {} up", env!("CARGO_PKG_VERSION"));
        display_task::spawn().ok();
        encoder_task::spawn().ok();

        (
            Shared {
                display: UnsafeCell::new(display),
            },
            Local {
                encoder,
                encoder_events: sender.clone(),
                button_pin: button_pin.erase(),
                button_events: sender,
                events,
            },
        )
    }

    fn send(events: &mut EventSender, event: PickerEvent) {
        if events.try_send(event).is_err() {
            defmt::warn!("event queue full, dropped {}", event);
        }
    }

    #[task(binds = EXTI2, local = [button_pin, button_events], priority = 3)]
    fn button_press(cx: button_press::Context) {
        send(cx.local.button_events, PickerEvent::Toggle);
        cx.local.button_pin.clear_interrupt_pending_bit();
    }

    #[task(local = [encoder, encoder_events], priority = 2)]
    async fn encoder_task(cx: encoder_task::Context) {
        loop {
            let delta = match cx.local.encoder.update() {
                Direction::Clockwise => 1,
                Direction::Anticlockwise => -1,
                Direction::None => 0,
            };
            if delta != 0 {
                send(cx.local.encoder_events, PickerEvent::ScrollActive { delta });
            }
            Systick::delay(hw::ENCODER_POLL_MS.millis()).await;
        }
    }

    fn check<T>(result: Result<T, UiError<MipidsiError>>) -> T {
        match result {
            Ok(value) => value,
            Err(e) => panic!("draw: {:?}", e),
        }
    }

    #[task(local = [events], shared = [display], priority = 1)]
    async fn display_task(mut cx: display_task::Context) {
        // Only shared with the panic handler, which never returns
        let display = unsafe { cx.shared.display.lock(|d| &mut *d.get()) };

        check(BootScreen::default().draw_init(display).await);

        let mut screen: Screens<DisplayType, MipidsiError> =
            PickerScreen::new(ClockState::default()).into();
        check(screen.draw_init(display).await);

        let mut last_frame = Systick::now();
        loop {
            let now = Systick::now();
            let dt = (now - last_frame).to_millis();
            last_frame = now;

            if let Screens::Picker(ref mut picker) = screen {
                while let Ok(event) = cx.local.events.try_recv() {
                    let update = picker.handle(event);
                    defmt::trace!("{} -> {}", event, update);
                }
                picker.advance(dt.millis());
            }

            check(screen.draw_frame(display).await);
            Systick::delay_until(now + hw::FRAME_MS.millis()).await;
        }
    }

    #[idle(shared = [display])]
    fn idle(mut cx: idle::Context) -> ! {
        cx.shared.display.lock(|display| {
            set_panic_display_ref(display);
        });

        loop {
            cortex_m::asm::wfi();
        }
    }

    #[task(binds = BusFault)]
    fn bus_fault(_cx: bus_fault::Context) {
        panic!("BusFault");
    }

    #[task(binds = UsageFault)]
    fn usage_fault(_cx: usage_fault::Context) {
        panic!("UsageFault");
    }
}
