//! Shift-register press detection over a single sample history.
//!
//! A [`PressDetector`] keeps the most recent samples of an active-low input in
//! the low bits of a [`ShiftRegister`]. Every update ORs an idle mask into the
//! word so only a `PRESSED + 1` bit window takes part in the comparison. The
//! detector fires when that window reads one high sample followed by exactly
//! `PRESSED` low samples, which happens on a single sample per press.

use crate::register::ShiftRegister;
use embedded_hal::digital::PinState;

/// Where a detector's sample window currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressPhase {
    /// Nothing sampled yet, or every sample in the window is high.
    Idle,
    /// Mixed highs and lows that do not form a press.
    Bouncing,
    /// The press was recognized on the latest sample.
    Fired,
    /// Every sample in the window is low; the press was already reported.
    Held,
}

/// Detects a press of `PRESSED` consecutive low samples after a high sample.
///
/// # Type Parameters
/// * `R` - Register word holding the sample history
/// * `PRESSED` - Consecutive low samples required; `PRESSED + 1` must be
///   smaller than `R::BITS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressDetector<R: ShiftRegister, const PRESSED: u32> {
    state: R,
}

impl<R: ShiftRegister, const PRESSED: u32> PressDetector<R, PRESSED> {
    /// Width of the compared window: one settled high plus the low run.
    pub const WINDOW: u32 = PRESSED + 1;

    const VALID: () = assert!(
        PRESSED >= 1 && PRESSED + 1 < R::BITS,
        "press window must hold at least one low sample and fit inside the register"
    );

    /// Creates a detector with an all-zero history.
    pub const fn new() -> Self {
        let () = Self::VALID;
        Self { state: R::ZERO }
    }

    /// Bits forced high on every update.
    #[inline]
    pub fn idle_mask() -> R {
        R::window_mask(Self::WINDOW)
    }

    /// Register value on the sample a press is recognized.
    #[inline]
    pub fn target() -> R {
        Self::idle_mask().with_bit(PRESSED)
    }

    /// Shifts in one sample and returns `true` if it completes a press.
    #[inline]
    pub fn update(&mut self, level: PinState) -> bool {
        self.state = self
            .state
            .shift_in(level == PinState::High)
            .or(Self::idle_mask());
        self.state == Self::target()
    }

    /// Clears the history back to zero.
    pub fn reset(&mut self) {
        self.state = R::ZERO;
    }

    /// Raw register contents.
    pub fn state(&self) -> R {
        self.state
    }

    /// Classifies the current register contents.
    pub fn phase(&self) -> PressPhase {
        if self.state == R::ZERO || self.state == R::ONES {
            PressPhase::Idle
        } else if self.state == Self::target() {
            PressPhase::Fired
        } else if self.state == Self::idle_mask() {
            PressPhase::Held
        } else {
            PressPhase::Bouncing
        }
    }
}

impl<R: ShiftRegister, const PRESSED: u32> Default for PressDetector<R, PRESSED> {
    fn default() -> Self {
        Self::new()
    }
}
