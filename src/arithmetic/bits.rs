use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::{DoubleWord, SIZE};

/// Digit-wise bitwise operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitOp {
    And,
    Xor,
    Or,
}

impl DoubleWord {
    /// Bitwise complement of every digit.
    pub fn complement(self) -> Self {
        let mut complemented = self;
        for digit in complemented.0.iter_mut() {
            *digit = !*digit;
        }
        complemented
    }

    pub fn bitwise(self, other: Self, op: BitOp) -> Self {
        let mut combined = Self::ZERO;
        for i in 0..SIZE {
            combined.0[i] = match op {
                BitOp::And => self.0[i] & other.0[i],
                BitOp::Xor => self.0[i] ^ other.0[i],
                BitOp::Or => self.0[i] | other.0[i],
            };
        }
        combined
    }
}

impl Not for DoubleWord {
    type Output = Self;

    fn not(self) -> Self {
        self.complement()
    }
}

impl BitAnd for DoubleWord {
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        self.bitwise(other, BitOp::And)
    }
}

impl BitAndAssign for DoubleWord {
    fn bitand_assign(&mut self, other: Self) {
        *self = self.bitwise(other, BitOp::And);
    }
}

impl BitXor for DoubleWord {
    type Output = Self;

    fn bitxor(self, other: Self) -> Self {
        self.bitwise(other, BitOp::Xor)
    }
}

impl BitXorAssign for DoubleWord {
    fn bitxor_assign(&mut self, other: Self) {
        *self = self.bitwise(other, BitOp::Xor);
    }
}

impl BitOr for DoubleWord {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        self.bitwise(other, BitOp::Or)
    }
}

impl BitOrAssign for DoubleWord {
    fn bitor_assign(&mut self, other: Self) {
        *self = self.bitwise(other, BitOp::Or);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn complement() {
        assert_eq!(!DoubleWord::ZERO, DoubleWord::UMAX);
        assert_eq!(!DoubleWord::UMAX, DoubleWord::ZERO);
        assert_eq!(!DoubleWord::MAX, DoubleWord::MIN);
    }

    #[test]
    fn complement_plus_one_is_negation() {
        let x = DoubleWord::from_uint(123_456_789) * DoubleWord::from_uint(123_456_789);
        assert_eq!(!x + DoubleWord::ONE, -x);
        assert_eq!(
            (!x + DoubleWord::ONE).as_signed().to_string(),
            "-15241578750190521"
        );
    }

    #[test]
    fn combinations() {
        let x = DoubleWord::from_uint(0b1100);
        let y = DoubleWord::from_uint(0b1010);
        assert_eq!((x & y).to_uint(), 0b1000);
        assert_eq!((x ^ y).to_uint(), 0b0110);
        assert_eq!((x | y).to_uint(), 0b1110);

        assert_eq!(x ^ x, DoubleWord::ZERO);
        assert_eq!(x & DoubleWord::UMAX, x);
        assert_eq!(x | DoubleWord::ZERO, x);
    }

    #[test]
    fn high_half_digits() {
        let low = DoubleWord::from_uint(0xffff_ffff);
        let high = low << 33;
        assert_eq!(
            (high | low).significant_digits(),
            (high + low).significant_digits()
        );
        assert_eq!(high & low, DoubleWord::ZERO);
    }

    #[test]
    fn assign_forms() {
        let mut x = DoubleWord::from_uint(0b1100);
        x &= DoubleWord::from_uint(0b0110);
        assert_eq!(x.to_uint(), 0b0100);
        x |= DoubleWord::from_uint(0b0011);
        assert_eq!(x.to_uint(), 0b0111);
        x ^= DoubleWord::from_uint(0b0101);
        assert_eq!(x.to_uint(), 0b0010);
    }
}
