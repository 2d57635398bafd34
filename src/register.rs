//! Fixed-width sample history words.

/// An unsigned integer used as a shift register of pin samples.
///
/// Bit 0 holds the most recent sample (1 = high), bit 1 the one before, and
/// so on. Implemented for `u8`, `u16`, `u32` and `u64`.
pub trait ShiftRegister: Copy + Eq + core::fmt::Debug {
    /// All bits clear.
    const ZERO: Self;

    /// All bits set.
    const ONES: Self;

    /// Register width in bits.
    const BITS: u32;

    /// Shifts the history left by one and places `high` in bit 0.
    ///
    /// The oldest sample falls off the top.
    fn shift_in(self, high: bool) -> Self;

    /// Returns a word with every bit at or above `width` set and the low
    /// `width` bits clear. `width` must be less than [`Self::BITS`].
    fn window_mask(width: u32) -> Self;

    /// Returns `self` with bit `index` set.
    fn with_bit(self, index: u32) -> Self;

    /// Bitwise OR.
    fn or(self, other: Self) -> Self;
}

macro_rules! impl_shift_register {
    ($($word:ty),*) => {
        $(
            impl ShiftRegister for $word {
                const ZERO: Self = 0;
                const ONES: Self = <$word>::MAX;
                const BITS: u32 = <$word>::BITS;

                #[inline]
                fn shift_in(self, high: bool) -> Self {
                    (self << 1) | high as $word
                }

                #[inline]
                fn window_mask(width: u32) -> Self {
                    <$word>::MAX << width
                }

                #[inline]
                fn with_bit(self, index: u32) -> Self {
                    self | (1 << index)
                }

                #[inline]
                fn or(self, other: Self) -> Self {
                    self | other
                }
            }
        )*
    };
}

impl_shift_register!(u8, u16, u32, u64);
