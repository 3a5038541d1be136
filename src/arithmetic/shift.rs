use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::{DoubleWord, SIZE};

use super::divide::div_rem_assign_digit;
use super::multiply::scale_assign_carry;

// Shifts split into a whole-byte digit move and a sub-byte pass; the sub-byte
// part reuses the single-digit multiply (left) and divide (right) helpers.

impl DoubleWord {
    /// Left shift; bits pushed past the top digit are discarded.
    ///
    /// Shift amounts of `BITS` or more are a caller bug.
    pub fn wrapping_shl(self, n: usize) -> Self {
        assert!(n < Self::BITS, "shift amount out of range");
        let bytes = n / 8;
        let bits = n % 8;

        let mut shifted = Self::ZERO;
        shifted.0[bytes..].copy_from_slice(&self.0[..SIZE - bytes]);
        if bits > 0 {
            scale_assign_carry(&mut shifted.0, 1 << bits);
        }

        shifted
    }

    /// Logical right shift: vacated high digits fill with zero.
    pub fn wrapping_shr(self, n: usize) -> Self {
        assert!(n < Self::BITS, "shift amount out of range");
        let bytes = n / 8;
        let bits = n % 8;

        let mut shifted = Self::ZERO;
        shifted.0[..SIZE - bytes].copy_from_slice(&self.0[bytes..]);
        if bits > 0 {
            div_rem_assign_digit(&mut shifted.0, 1 << bits);
        }

        shifted
    }

    /// Arithmetic right shift: vacated high digits replicate the sign.
    ///
    /// The sub-byte divide zeroes the top bits it vacates, so the top digit
    /// is patched with the sign-extension bits afterwards.
    pub fn arithmetic_shr(self, n: usize) -> Self {
        assert!(n < Self::BITS, "shift amount out of range");
        let fill = if self.is_negative() { 0xff } else { 0 };
        let bytes = n / 8;
        let bits = n % 8;

        let mut shifted = Self([fill; SIZE]);
        shifted.0[..SIZE - bytes].copy_from_slice(&self.0[bytes..]);
        if bits > 0 {
            div_rem_assign_digit(&mut shifted.0, 1 << bits);
            shifted.0[SIZE - 1] |= fill << (8 - bits);
        }

        shifted
    }
}

impl Shl<usize> for DoubleWord {
    type Output = Self;

    fn shl(self, n: usize) -> Self {
        self.wrapping_shl(n)
    }
}

impl ShlAssign<usize> for DoubleWord {
    fn shl_assign(&mut self, n: usize) {
        *self = self.wrapping_shl(n);
    }
}

impl Shr<usize> for DoubleWord {
    type Output = Self;

    /// Logical shift; see [`DoubleWord::arithmetic_shr`] for sign extension.
    fn shr(self, n: usize) -> Self {
        self.wrapping_shr(n)
    }
}

impl ShrAssign<usize> for DoubleWord {
    fn shr_assign(&mut self, n: usize) {
        *self = self.wrapping_shr(n);
    }
}
