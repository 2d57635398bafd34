//! Single-button debouncer reporting short and long presses.
//!
//! Provides [`Debouncer`], which owns one [`ButtonPin`] and two independent
//! [`PressDetector`]s: a narrow one for short presses and a wide one for long
//! presses. The caller owns the polling cadence; every poll reads the pin once
//! and runs in constant time without allocating.

use crate::detector::{PressDetector, PressPhase};
use crate::pin::ButtonPin;
use crate::{LONG_PRESS_SAMPLES, SHORT_PRESS_SAMPLES};
use embedded_hal::digital::PinState;

/// A press recognized by [`Debouncer::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressEvent {
    /// The line went low and stayed low for the short-press window.
    Short,
    /// The line has been held low for the long-press window.
    Long,
}

/// Debounces a single active-low push-button.
///
/// Constructed unbound; call [`bind`](Self::bind) before polling. Then call
/// [`poll_short`](Self::poll_short), [`poll_long`](Self::poll_long) or
/// [`poll`](Self::poll) at a steady cadence. Each returns `true` (or an
/// event) on exactly one sample per press.
///
/// # Type Parameters
/// * `P` - Pin implementation type
/// * `SHORT` - Consecutive low samples for a short press (`u16` history)
/// * `LONG` - Consecutive low samples for a long press (`u64` history)
///
/// `SHORT` must be smaller than `LONG`.
#[derive(Debug)]
pub struct Debouncer<
    P: ButtonPin,
    const SHORT: u32 = { SHORT_PRESS_SAMPLES },
    const LONG: u32 = { LONG_PRESS_SAMPLES },
> {
    pin: Option<P>,
    short: PressDetector<u16, SHORT>,
    long: PressDetector<u64, LONG>,
}

impl<P: ButtonPin, const SHORT: u32, const LONG: u32> Debouncer<P, SHORT, LONG> {
    const ORDERED: () = assert!(SHORT < LONG, "short press must need fewer samples than long press");

    /// Creates an unbound debouncer.
    pub const fn new() -> Self {
        let () = Self::ORDERED;

        Self {
            pin: None,
            short: PressDetector::new(),
            long: PressDetector::new(),
        }
    }

    /// Creates a debouncer already bound to `pin`.
    pub fn bound(pin: P) -> Self {
        let mut debouncer = Self::new();
        debouncer.bind(pin);
        debouncer
    }

    /// Takes ownership of `pin`, configures it as a pull-up input and clears
    /// both histories.
    ///
    /// Binding again replaces (and drops) the previous pin. Polling after a
    /// re-bind behaves exactly like a fresh instance.
    pub fn bind(&mut self, mut pin: P) {
        pin.configure_pull_up();
        self.pin = Some(pin);
        self.reset();
    }

    /// Unbinds and returns the pin, if any. Histories are cleared.
    pub fn release(&mut self) -> Option<P> {
        self.reset();
        self.pin.take()
    }

    /// Clears both histories without touching the pin.
    pub fn reset(&mut self) {
        self.short.reset();
        self.long.reset();
    }

    /// Samples the pin and returns `true` on the sample a short press is
    /// recognized.
    pub fn poll_short(&mut self) -> bool {
        let level = self.sample();
        self.short.update(level)
    }

    /// Samples the pin and returns `true` on the sample a long press is
    /// recognized.
    pub fn poll_long(&mut self) -> bool {
        let level = self.sample();
        self.long.update(level)
    }

    /// Samples the pin once and feeds the sample to both detectors.
    ///
    /// Keeps both detectors on the same cadence. Since `SHORT < LONG`, the
    /// two can never fire on the same sample.
    pub fn poll(&mut self) -> Option<PressEvent> {
        let level = self.sample();
        let short = self.short.update(level);
        let long = self.long.update(level);

        if long {
            Some(PressEvent::Long)
        } else if short {
            Some(PressEvent::Short)
        } else {
            None
        }
    }

    /// Returns true if a pin is bound.
    pub fn is_bound(&self) -> bool {
        self.pin.is_some()
    }

    /// Returns a reference to the bound pin, if any.
    pub fn pin(&self) -> Option<&P> {
        self.pin.as_ref()
    }

    /// Phase of the short-press history.
    pub fn short_phase(&self) -> PressPhase {
        self.short.phase()
    }

    /// Phase of the long-press history.
    pub fn long_phase(&self) -> PressPhase {
        self.long.phase()
    }

    fn sample(&mut self) -> PinState {
        debug_assert!(self.pin.is_some(), "debouncer polled before bind");

        // Unbound reads as released so no presses are reported
        match self.pin.as_mut() {
            Some(pin) => PinState::from(pin.is_high()),
            None => PinState::High,
        }
    }
}

impl<P: ButtonPin, const SHORT: u32, const LONG: u32> Default for Debouncer<P, SHORT, LONG> {
    fn default() -> Self {
        Self::new()
    }
}
