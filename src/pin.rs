//! Input line abstraction for platform-agnostic sampling.

use embedded_hal::digital::InputPin;

/// Trait for abstracting the button's input line.
///
/// Implement this for your GPIO to let a [`Debouncer`](crate::Debouncer)
/// configure and sample it. The button is wired active-low: the line reads
/// high while released and low while pressed.
pub trait ButtonPin {
    /// Configures the line as a digital input with the internal pull-up enabled.
    fn configure_pull_up(&mut self);

    /// Returns the current logical level, `true` for high.
    ///
    /// Called once per poll. Handle any hardware errors internally; this
    /// method cannot fail.
    fn is_high(&mut self) -> bool;
}

/// Adapts an [`embedded_hal`] input pin that the HAL already configured with
/// a pull-up.
///
/// Most HALs fix pin mode in the type when the pin is created, e.g.
/// `into_pull_up_input()`, so [`ButtonPin::configure_pull_up`] is a no-op
/// here. A failed read is reported as high, so a faulting line looks
/// released and produces no presses.
#[derive(Debug)]
pub struct PullUpInput<P: InputPin> {
    pin: P,
}

impl<P: InputPin> PullUpInput<P> {
    /// Wraps a pull-up input pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Returns the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ButtonPin for PullUpInput<P> {
    fn configure_pull_up(&mut self) {}

    #[inline]
    fn is_high(&mut self) -> bool {
        self.pin.is_high().unwrap_or(true)
    }
}
