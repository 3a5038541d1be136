use crate::{DoubleWord, SIZE};

impl DoubleWord {
    /// Truncates a float to a double word, extracting base-256 digits low to
    /// high by repeated `fmod`/divide.
    ///
    /// Magnitudes of less than one (NaN included) come out as zero. A
    /// magnitude too large to represent clamps to [`Self::MIN`] when negative
    /// and [`Self::UMAX`] when positive.
    pub fn from_f64(v: f64) -> Self {
        let negative = v < 0.0;
        let mut v = if negative { -v } else { v };

        let mut t = Self::ZERO;
        let mut i = 0;
        while i < SIZE && v >= 1.0 {
            t.0[i] = (v % 256.0) as u8;
            v /= 256.0;
            i += 1;
        }

        if v >= 1.0 {
            // overflow
            return if negative { Self::MIN } else { Self::UMAX };
        }
        if negative {
            t.wrapping_neg()
        } else {
            t
        }
    }

    /// The unsigned value as a float, Horner-style from the top digit.
    ///
    /// Wider than the mantissa, the low digits round away.
    pub fn to_f64_unsigned(self) -> f64 {
        let mut v = 0.0;
        for &digit in self.0.iter().rev() {
            v = v * 256.0 + digit as f64;
        }
        v
    }

    /// The two's-complement value as a float.
    pub fn to_f64(self) -> f64 {
        if self.is_negative() {
            -self.wrapping_neg().to_f64_unsigned()
        } else {
            self.to_f64_unsigned()
        }
    }
}
