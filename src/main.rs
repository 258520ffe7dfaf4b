#![no_std]
#![no_main]

use defmt_rtt as _;
use max7219::MAX7219;
use panic_probe as _;
use rtic::app;

#[app(device = rp_pico::hal::pac, peripherals = true, dispatchers = [I2C0_IRQ])]
mod app {
    use binary_calendar::{config, BinaryWatchFace, ClockState, MatrixFrame, TimeSource, WatchFace};
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        gpio::{bank0::Gpio15, FunctionSio, Pin, PullUp, SioInput},
        sio::Sio,
        spi::Spi,
        timer::{Alarm, Alarm0, Timer},
        watchdog::Watchdog,
        fugit::{RateExtU32, ExtU32},
    };
    use embedded_hal::digital::v2::{InputPin, ToggleableOutputPin};

    use super::MAX7219;

    // Type definition for the MAX7219 display
    type Spi0 = Spi<rp_pico::hal::spi::Enabled, rp_pico::hal::pac::SPI0, (
        Pin<rp_pico::hal::gpio::bank0::Gpio19, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
        Pin<rp_pico::hal::gpio::bank0::Gpio16, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
        Pin<rp_pico::hal::gpio::bank0::Gpio18, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>
    )>;
    type CsPin = Pin<rp_pico::hal::gpio::bank0::Gpio17, rp_pico::hal::gpio::FunctionSio<rp_pico::hal::gpio::SioOutput>, rp_pico::hal::gpio::PullDown>;
    type DisplayType = MAX7219<max7219::connectors::SpiConnectorSW<Spi0, CsPin>>;

    type Face = BinaryWatchFace<ClockState, MatrixFrame>;

    // Shared resources (accessed by multiple tasks)
    #[shared]
    struct Shared {
        face: Face,
        button: Pin<Gpio15, FunctionSio<SioInput>, PullUp>,
        alarm1: rp_pico::hal::timer::Alarm1,
        repeat_delay: u32,
    }

    // Local resources (accessed by single tasks)
    #[local]
    struct Local {
        display: DisplayType,
        led: rp_pico::hal::gpio::Pin<rp_pico::hal::gpio::bank0::Gpio25, rp_pico::hal::gpio::FunctionSio<rp_pico::hal::gpio::SioOutput>, rp_pico::hal::gpio::PullDown>,
        alarm: Alarm0,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("binary calendar starting");

        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let clocks = init_clocks_and_plls(
            config::EXTERNAL_XTAL_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut alarm = timer.alarm_0().unwrap();
        // First tick in one period; the start-up frame is drawn below
        alarm.schedule(config::TICK_PERIOD_US.micros()).unwrap();
        alarm.enable_interrupt();

        let mut alarm1 = timer.alarm_1().unwrap();
        alarm1.enable_interrupt();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let led = pins.led.into_push_pull_output();
        let button = pins.gpio15.into_pull_up_input();

        // Enable interrupt for button (Falling Edge)
        button.set_interrupt_enabled(rp_pico::hal::gpio::Interrupt::EdgeLow, true);

        let mosi = pins.gpio19.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let sck = pins.gpio18.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let miso = pins.gpio16.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let cs = pins.gpio17.into_push_pull_output();

        let spi = Spi::<_, _, _, 8>::new(pac.SPI0, (mosi, miso, sck));
        let spi = spi.init(
            &mut pac.RESETS,
            clocks.peripheral_clock.freq(),
            config::SPI_FREQ_HZ.Hz(),
            &embedded_hal::spi::MODE_0,
        );

        let devices = binary_calendar::display::DEVICES;
        let mut display = MAX7219::from_spi_cs(devices, spi, cs).unwrap();
        display.power_on().unwrap();
        for i in 0..devices {
            display.set_intensity(i, config::DISPLAY_INTENSITY).unwrap();
            display.clear_display(i).unwrap();
        }

        let (hour, minute, second) = config::START_HMS;
        let clock = ClockState::new(
            config::start_date().unwrap(),
            hour,
            minute,
            second,
            config::DEFAULT_HOUR_FORMAT,
        )
        .unwrap();
        let face = BinaryWatchFace::new(clock, MatrixFrame::new(), config::MATRIX_LAYOUT);

        update_display::spawn().ok();

        (
            Shared {
                face,
                button,
                alarm1,
                repeat_delay: config::BUTTON_REPEAT_START_US,
            },
            Local {
                display,
                led,
                alarm,
            },
            init::Monotonics(),
        )
    }

    // Hardware Task: Timer Interrupt (1Hz)
    #[task(binds = TIMER_IRQ_0, priority = 1, shared = [face], local = [alarm, led])]
    fn timer_tick(mut ctx: timer_tick::Context) {
        // Clear interrupt and schedule next
        ctx.local.alarm.clear_interrupt();
        if ctx.local.alarm.schedule(config::TICK_PERIOD_US.micros()).is_err() {
            defmt::warn!("failed to schedule next tick");
        }

        ctx.local.led.toggle().ok();

        ctx.shared.face.lock(|face| face.time_source_mut().tick());

        update_display::spawn().ok();
    }

    // Hardware Task: GPIO Interrupt (Set Button Press)
    #[task(binds = IO_IRQ_BANK0, priority = 1, shared = [face, button, alarm1, repeat_delay])]
    fn button_press(mut ctx: button_press::Context) {
        // Disable interrupt to prevent bouncing re-entry
        ctx.shared.button.lock(|b| {
            b.set_interrupt_enabled(rp_pico::hal::gpio::Interrupt::EdgeLow, false);
            b.clear_interrupt(rp_pico::hal::gpio::Interrupt::EdgeLow);
        });

        ctx.shared.face.lock(|face| face.time_source_mut().add_minute());
        defmt::debug!("set button: +1 min");

        update_display::spawn().ok();

        let delay = config::BUTTON_REPEAT_START_US;
        ctx.shared.repeat_delay.lock(|d| *d = delay);

        ctx.shared.alarm1.lock(|a| {
            a.clear_interrupt();
            a.schedule(delay.micros()).ok();
        });
    }

    // Hardware Task: Set Button Repeat (Timer 1)
    #[task(binds = TIMER_IRQ_1, priority = 1, shared = [face, button, alarm1, repeat_delay])]
    fn button_repeat(mut ctx: button_repeat::Context) {
        ctx.shared.alarm1.lock(|a| a.clear_interrupt());

        let is_held = ctx.shared.button.lock(|b| b.is_low().unwrap_or(false));

        if is_held {
            ctx.shared.face.lock(|face| face.time_source_mut().add_minute());
            update_display::spawn().ok();

            let delay = ctx.shared.repeat_delay.lock(|d| {
                *d = config::next_repeat_delay(*d);
                *d
            });

            ctx.shared.alarm1.lock(|a| {
                a.schedule(delay.micros()).ok();
            });
        } else {
            // Button released
            ctx.shared.button.lock(|b| {
                // Drop edges latched while bouncing
                b.clear_interrupt(rp_pico::hal::gpio::Interrupt::EdgeLow);
                b.set_interrupt_enabled(rp_pico::hal::gpio::Interrupt::EdgeLow, true);
            });
        }
    }

    // Software Task: full repaint of the face, then push it to the matrices
    #[task(shared = [face], local = [display])]
    fn update_display(mut ctx: update_display::Context) {
        let buffers = ctx.shared.face.lock(|face| {
            face.on_tick().unwrap_or_else(|never| match never {});
            defmt::debug!("{}", face.time_source().sample());
            face.target().device_buffers()
        });

        let display = ctx.local.display;
        for (dev_idx, buffer) in buffers.iter().enumerate() {
            if display.write_raw(dev_idx, buffer).is_err() {
                defmt::warn!("display write failed on device {}", dev_idx);
            }
        }
    }
}
