#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use press_debouncer::{ButtonPin, Debouncer, LongPressDetector, PinState, ShortPressDetector};

// ============================================================================
// Minimal Pin
// ============================================================================

/// Reads a volatile word so the optimizer cannot fold the samples away
pub struct MinimalPin(*const u32);

impl ButtonPin for MinimalPin {
    fn configure_pull_up(&mut self) {}

    fn is_high(&mut self) -> bool {
        // SAFETY: only ever constructed over a local in `test_debouncers`
        unsafe { core::ptr::read_volatile(self.0) & 1 != 0 }
    }
}

// ============================================================================
// Test Debouncers
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn test_debouncers() {
    let line: u32 = 1;

    // Default windows, combined poll
    let mut button: Debouncer<MinimalPin> = Debouncer::bound(MinimalPin(&line));
    for _ in 0..100 {
        core::hint::black_box(button.poll());
    }
    core::hint::black_box(&button);

    // Independent polls
    let mut split: Debouncer<MinimalPin, 3, 30> = Debouncer::new();
    split.bind(MinimalPin(&line));
    core::hint::black_box(split.poll_short());
    core::hint::black_box(split.poll_long());

    // Bare detectors
    let mut short = ShortPressDetector::new();
    let mut long = LongPressDetector::new();
    let level = core::hint::black_box(PinState::from(line & 1 != 0));
    core::hint::black_box(short.update(level));
    core::hint::black_box(long.update(level));
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    test_debouncers();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
