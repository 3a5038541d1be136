use core::ops::{Div, DivAssign, Rem, RemAssign};

use crate::{DoubleWord, SIZE};

use super::multiply::scale_assign_carry;
use super::subtract::sub_assign_borrow;

/// Which half of the division result the engine should produce.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Keep {
    Quotient,
    Remainder,
}

/// Divides a digit slice in place by a single digit, returning the remainder.
///
/// Runs down the digits from the top, carrying the running remainder along.
/// Also the workhorse of radix conversion and sub-byte right shifts.
pub(crate) fn div_rem_assign_digit(digits: &mut [u8], divisor: u8) -> u8 {
    debug_assert!(divisor != 0);
    let mut remainder: u32 = 0;

    for digit in digits.iter_mut().rev() {
        remainder = remainder * 256 + *digit as u32;
        *digit = (remainder / divisor as u32) as u8;
        remainder %= divisor as u32;
    }

    remainder as u8
}

/// Multi-digit long division, Knuth's Algorithm D without the normalization
/// step: each quotient digit is estimated from the three leading remainder
/// digits and the two leading divisor digits, then corrected (at most once)
/// by comparing the trial product against the remainder window.
///
/// A divisor of zero yields a zero quotient and a zero remainder.
fn div_rem_unsigned(x: &DoubleWord, y: &DoubleWord, keep: Keep) -> DoubleWord {
    let n = x.significant_digits().len();
    let m = y.significant_digits().len();
    let mut t = DoubleWord::ZERO;

    if m == 1 {
        if y.0[0] == 0 {
            return t;
        }
        let mut digits = x.0;
        let remainder = div_rem_assign_digit(&mut digits, y.0[0]);
        match keep {
            Keep::Quotient => t.0 = digits,
            Keep::Remainder => t.0[0] = remainder,
        }
    } else if m > n {
        // divisor wider than dividend: quotient 0, remainder x
        if keep == Keep::Remainder {
            t = *x;
        }
    } else {
        let mut rem = [0u8; SIZE + 1];
        let mut dq = [0u8; SIZE + 1];
        rem[..n].copy_from_slice(&x.0[..n]);

        for k in (0..=n - m).rev() {
            // estimate the quotient digit from the leading digits
            let y2 = y.0[m - 1] as u32 * 256 + y.0[m - 2] as u32;
            let r3 = rem[k + m] as u32 * 65536
                + rem[k + m - 1] as u32 * 256
                + rem[k + m - 2] as u32;
            let mut qk = (r3 / y2).min(255);

            dq[..m].copy_from_slice(&y.0[..m]);
            dq[m] = scale_assign_carry(&mut dq[..m], qk as u16);

            // single correction: the estimate can be one too large
            let mut i = m;
            while i > 0 && rem[i + k] == dq[i] {
                i -= 1;
            }
            if rem[i + k] < dq[i] {
                qk -= 1;
                dq[..m].copy_from_slice(&y.0[..m]);
                dq[m] = scale_assign_carry(&mut dq[..m], qk as u16);
            }

            t.0[k] = qk as u8;
            sub_assign_borrow(&mut rem[k..k + m + 1], &dq[..m + 1]);
        }

        if keep == Keep::Remainder {
            t = DoubleWord::ZERO;
            t.0[..m].copy_from_slice(&rem[..m]);
        }
    }

    t
}

impl DoubleWord {
    pub fn div_unsigned(self, divisor: Self) -> Self {
        div_rem_unsigned(&self, &divisor, Keep::Quotient)
    }

    pub fn rem_unsigned(self, divisor: Self) -> Self {
        div_rem_unsigned(&self, &divisor, Keep::Remainder)
    }

    /// Signed division, truncating toward zero like native `/`.
    pub fn div_signed(self, divisor: Self) -> Self {
        let sx = self.is_negative();
        let sy = divisor.is_negative();

        let x = if sx { self.wrapping_neg() } else { self };
        let y = if sy { divisor.wrapping_neg() } else { divisor };
        let quotient = x.div_unsigned(y);

        if sx != sy {
            quotient.wrapping_neg()
        } else {
            quotient
        }
    }

    /// Signed remainder; takes the dividend's sign, like native `%`.
    pub fn rem_signed(self, divisor: Self) -> Self {
        let sx = self.is_negative();
        let sy = divisor.is_negative();

        let x = if sx { self.wrapping_neg() } else { self };
        let y = if sy { divisor.wrapping_neg() } else { divisor };
        let remainder = x.rem_unsigned(y);

        if sx {
            remainder.wrapping_neg()
        } else {
            remainder
        }
    }
}

impl Div for DoubleWord {
    type Output = Self;

    fn div(self, divisor: Self) -> Self {
        self.div_unsigned(divisor)
    }
}

impl DivAssign for DoubleWord {
    fn div_assign(&mut self, divisor: Self) {
        *self = self.div_unsigned(divisor);
    }
}

impl Rem for DoubleWord {
    type Output = Self;

    fn rem(self, divisor: Self) -> Self {
        self.rem_unsigned(divisor)
    }
}

impl RemAssign for DoubleWord {
    fn rem_assign(&mut self, divisor: Self) {
        *self = self.rem_unsigned(divisor);
    }
}
