use core::ops::{Add, AddAssign};

use crate::{DoubleWord, SIZE};

/// Add with carry, base 256.
#[inline]
pub(crate) fn adc(a: u8, b: u8, acc: &mut u16) -> u8 {
    *acc += a as u16;
    *acc += b as u16;
    let lo = *acc as u8;
    *acc >>= 8;
    lo
}

impl DoubleWord {
    /// Digit-wise addition; the carry out of the top digit is dropped.
    ///
    /// Two's complement makes this serve signed addition as well.
    pub fn wrapping_add(self, summand: Self) -> Self {
        let mut sum = Self::ZERO;
        let mut carry = 0;

        for i in 0..SIZE {
            sum.0[i] = adc(self.0[i], summand.0[i], &mut carry);
        }

        sum
    }
}

impl Add for DoubleWord {
    type Output = Self;

    fn add(self, summand: Self) -> Self {
        self.wrapping_add(summand)
    }
}

impl AddAssign for DoubleWord {
    fn add_assign(&mut self, summand: Self) {
        *self = self.wrapping_add(summand);
    }
}
