#![no_std]
#![no_main]

use cortex_m::delay::Delay;
use embedded_hal::digital::{OutputPin, StatefulOutputPin};
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{Clock, Sio, clocks::init_clocks_and_plls, pac, watchdog::Watchdog};
use rtt_target::{rprintln, rtt_init_print};

use press_debouncer::{Debouncer, PressEvent, PullUpInput};

/// Poll period; with the default windows a short press needs 2 ms of
/// contact and a long press 60 ms.
pub const POLL_PERIOD_MS: u32 = 1;

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RP Pico Button Example ===");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // Set up the Single Cycle IO (for GPIO access)
    let sio = Sio::new(pac.SIO);

    // Set the pins to their default state
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // Onboard LED on GPIO25, button between GPIO15 and GND
    let mut led_pin = pins.led.into_push_pull_output();
    let mut button: Debouncer<_> = Debouncer::new();
    button.bind(PullUpInput::new(pins.gpio15.into_pull_up_input()));

    rprintln!("Button configured on GPIO15 (active low)");

    let mut delay = Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());

    loop {
        match button.poll() {
            Some(PressEvent::Short) => {
                led_pin.toggle().unwrap();
                rprintln!("Short press");
            }
            Some(PressEvent::Long) => {
                led_pin.set_low().unwrap();
                rprintln!("Long press, LED off");
            }
            None => {}
        }

        delay.delay_ms(POLL_PERIOD_MS);
    }
}
