#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Debouncer`**: Owns one button pin and reports short and long presses
//! - **`ButtonPin`**: Trait to implement for your GPIO input
//! - **`PullUpInput`**: Ready-made `ButtonPin` for any `embedded-hal` input pin
//! - **`PressDetector`**: A single shift-register window, usable on its own
//! - **`ShiftRegister`**: Integer word holding the sample history
//! - **`PressPhase`**: Where a detector's window currently sits
//! - **`PressEvent`**: Result of a combined `Debouncer::poll`
//!
//! Sample counts are fixed at compile time. Durations follow from the rate at
//! which you poll: at 1 ms per poll the defaults recognize a short press after
//! 2 ms of contact and a long press after 60 ms.

// Re-export PinState from embedded-hal for user convenience
pub use embedded_hal::digital::PinState;

pub mod debouncer;
pub mod detector;
pub mod pin;
pub mod register;

pub use debouncer::{Debouncer, PressEvent};
pub use detector::{PressDetector, PressPhase};
pub use pin::{ButtonPin, PullUpInput};
pub use register::ShiftRegister;

/// Default number of consecutive low samples for a short press.
pub const SHORT_PRESS_SAMPLES: u32 = 2;

/// Default number of consecutive low samples for a long press.
pub const LONG_PRESS_SAMPLES: u32 = 60;

/// Short-press detector with the default window.
pub type ShortPressDetector = PressDetector<u16, SHORT_PRESS_SAMPLES>;

/// Long-press detector with the default window.
pub type LongPressDetector = PressDetector<u64, LONG_PRESS_SAMPLES>;
