use core::ops::{Neg, Sub, SubAssign};

use crate::{DoubleWord, SIZE};

/// Subtract with borrow, base 256.
///
/// A nonzero borrow out of the top digit means the subtrahend was larger;
/// callers in wrapping context simply drop it.
#[inline]
pub(crate) fn sbb(a: u8, b: u8, acc: &mut i16) -> u8 {
    *acc += a as i16;
    *acc -= b as i16;
    let lo = *acc as u8;
    *acc >>= 8;
    lo
}

/// `a -= b` over raw digit slices, returning the final borrow.
///
/// Requires `a.len() == b.len()`; the division engine subtracts a trial
/// product from a window of the running remainder with this.
pub(crate) fn sub_assign_borrow(a: &mut [u8], b: &[u8]) -> u8 {
    debug_assert_eq!(a.len(), b.len());
    let mut borrow = 0;

    for (a, b) in a.iter_mut().zip(b) {
        *a = sbb(*a, *b, &mut borrow);
    }

    borrow as u8
}

impl DoubleWord {
    /// Two's-complement negation: complement every digit, then add one,
    /// with the carry rippling through.
    pub fn wrapping_neg(self) -> Self {
        let mut negated = Self::ZERO;
        let mut carry: u16 = 1;

        for i in 0..SIZE {
            carry += !self.0[i] as u16;
            negated.0[i] = carry as u8;
            carry >>= 8;
        }

        negated
    }

    /// Subtraction as addition of the negated subtrahend.
    ///
    /// Serves both the unsigned and the signed interpretation.
    pub fn wrapping_sub(self, subtrahend: Self) -> Self {
        self.wrapping_add(subtrahend.wrapping_neg())
    }
}

impl Sub for DoubleWord {
    type Output = Self;

    fn sub(self, subtrahend: Self) -> Self {
        self.wrapping_sub(subtrahend)
    }
}

impl SubAssign for DoubleWord {
    fn sub_assign(&mut self, subtrahend: Self) {
        *self = self.wrapping_sub(subtrahend);
    }
}

impl Neg for DoubleWord {
    type Output = Self;

    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn negation() {
        assert_eq!(-DoubleWord::ZERO, DoubleWord::ZERO);
        assert_eq!(-DoubleWord::ONE, DoubleWord::UMAX);
        assert_eq!(-DoubleWord::from_int(-1), DoubleWord::ONE);
        // MIN has no positive counterpart; negation wraps back onto it
        assert_eq!(-DoubleWord::MIN, DoubleWord::MIN);
    }

    #[test]
    fn unsigned_differences() {
        let one = DoubleWord::from_uint(1);
        let two = DoubleWord::from_uint(2);
        assert_eq!(one - one, DoubleWord::ZERO);
        assert_eq!(two - one, one);
        assert_eq!(one - two, DoubleWord::UMAX); // wraps below zero

        let x = DoubleWord::from_uint(512);
        let y = DoubleWord::from_uint(513);
        assert_eq!(x - y, DoubleWord::UMAX);
        assert_eq!(y - x, one);
    }

    #[test]
    fn signed_differences() {
        let one = DoubleWord::from_int(1);
        let two = DoubleWord::from_int(2);
        assert_eq!(one - two, DoubleWord::from_int(-1));
        assert_eq!(two - one, one);

        let x = DoubleWord::from_int(-2_147_483_647);
        assert_eq!((x - one).as_signed().to_string(), "-2147483648");
    }

    #[test]
    fn digit_slice_borrow() {
        let mut a = [0, 0, 1];
        assert_eq!(sub_assign_borrow(&mut a, &[1, 0, 0]), 0);
        assert_eq!(a, [0xff, 0xff, 0]);

        let mut a = [0, 0];
        assert_eq!(sub_assign_borrow(&mut a, &[1, 0]), 0xff);
        assert_eq!(a, [0xff, 0xff]);
    }
}
