//! The numeric [`Element`] trait stored in ragged arrays.

use std::fmt;

/// A numeric value that can be packed into a ragged array's flat buffer.
///
/// Implemented for every primitive integer and float width. A single
/// container always stores one width; mixing is a type error.
pub trait Element: Copy + PartialEq + Default + fmt::Debug + Send + Sync + 'static {
    /// Widen the value to `f64` for tolerance-based comparison.
    ///
    /// Lossy for 64-bit integers beyond 2^53.
    fn to_f64(self) -> f64;

    /// The raw bit pattern, zero-extended to 64 bits.
    fn bit_pattern(self) -> u64;
}

macro_rules! impl_int_element {
    ($($t:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl Element for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn bit_pattern(self) -> u64 {
                    self as $unsigned as u64
                }
            }
        )*
    };
}

impl_int_element!(
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
);

impl Element for f32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn bit_pattern(self) -> u64 {
        u64::from(self.to_bits())
    }
}

impl Element for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn bit_pattern(self) -> u64 {
        self.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_bit_pattern_is_not_sign_extended() {
        assert_eq!((-1i8).bit_pattern(), 0xFF);
        assert_eq!((-1i32).bit_pattern(), 0xFFFF_FFFF);
    }

    #[test]
    fn float_bit_pattern_distinguishes_signed_zero() {
        assert_ne!(0.0f32.bit_pattern(), (-0.0f32).bit_pattern());
        assert_eq!(1.5f64.bit_pattern(), 1.5f64.to_bits());
    }

    #[test]
    fn to_f64_widens() {
        assert_eq!(3u16.to_f64(), 3.0);
        assert_eq!((-7i32).to_f64(), -7.0);
        assert_eq!(0.25f32.to_f64(), 0.25);
    }
}
