use core::ops::{Mul, MulAssign};

use crate::{DoubleWord, SIZE};

/// Scales a digit slice in place by a single-digit factor, base 256,
/// returning the carry out of the top digit.
///
/// The nonzero-carry signal is load-bearing: string parsing stops consuming
/// digits the moment a scale-by-radix overflows.
pub(crate) fn scale_assign_carry(digits: &mut [u8], factor: u16) -> u8 {
    debug_assert!(factor < 256);
    let mut carry: u16 = 0;

    for digit in digits.iter_mut() {
        carry += *digit as u16 * factor;
        *digit = carry as u8;
        carry >>= 8;
    }

    carry as u8
}

impl DoubleWord {
    /// Schoolbook multiplication into a full `2 * SIZE`-digit product,
    /// of which the low half is kept.
    ///
    /// Truncating the high half is exactly how native unsigned multiplication
    /// overflows, so this serves `mod 2^BITS` arithmetic directly.
    pub fn wrapping_mul(self, other: Self) -> Self {
        let mut product = [0u8; 2 * SIZE];

        for i in 0..SIZE {
            let mut carry: u16 = 0;
            for j in 0..SIZE {
                carry += self.0[i] as u16 * other.0[j] as u16 + product[i + j] as u16;
                product[i + j] = carry as u8;
                carry >>= 8;
            }
            for k in (i + SIZE)..(2 * SIZE) {
                carry += product[k] as u16;
                product[k] = carry as u8;
                carry >>= 8;
            }
        }

        let mut low = Self::ZERO;
        low.0.copy_from_slice(&product[..SIZE]);
        low
    }

    /// Signed multiplication: unsigned core over the magnitudes, result
    /// negated when the operand signs differ.
    pub fn wrapping_mul_signed(self, other: Self) -> Self {
        let sx = self.is_negative();
        let sy = other.is_negative();

        let x = if sx { self.wrapping_neg() } else { self };
        let y = if sy { other.wrapping_neg() } else { other };
        let product = x.wrapping_mul(y);

        if sx != sy {
            product.wrapping_neg()
        } else {
            product
        }
    }
}

impl Mul for DoubleWord {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.wrapping_mul(other)
    }
}

impl MulAssign for DoubleWord {
    fn mul_assign(&mut self, other: Self) {
        *self = self.wrapping_mul(other);
    }
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn small_products() {
        let cases: &[(u64, u64, u64)] = &[
            (0, 0, 0),
            (0, 1, 0),
            (1, 1, 1),
            (2, 3, 6),
            (255, 255, 65025),
            (256, 256, 65536),
            (123_456_789, 999, 123_333_332_211),
        ];
        for &(x, y, product) in cases {
            assert_eq!(
                DoubleWord::from_uint(x as crate::Word) * DoubleWord::from_uint(y as crate::Word),
                DoubleWord::from_be_slice(&product.to_be_bytes()),
            );
        }
    }

    #[test]
    fn full_width_product() {
        let x = DoubleWord::from_uint(0xffff_ffff);
        assert_eq!(x * x, DoubleWord::from_be_slice(&hex!("fffffffe00000001")));
    }

    #[test]
    fn wrapping() {
        // 2^(BITS/2) squared is 2^BITS, which wraps to zero
        let half = DoubleWord::ONE << (DoubleWord::BITS / 2);
        assert_eq!(half * half, DoubleWord::ZERO);
        assert_eq!(DoubleWord::UMAX * DoubleWord::UMAX, DoubleWord::ONE);
    }

    #[test]
    fn signed_products() {
        let minus_one = DoubleWord::from_int(-1);
        let minus_two = DoubleWord::from_int(-2);
        assert_eq!(
            DoubleWord::ZERO.wrapping_mul_signed(minus_one),
            DoubleWord::ZERO
        );
        assert_eq!(minus_one.wrapping_mul_signed(minus_one), DoubleWord::ONE);
        assert_eq!(
            minus_two.wrapping_mul_signed(minus_two),
            DoubleWord::from_uint(4)
        );
        let x = DoubleWord::from_uint(0x8000_0000);
        assert_eq!(x.wrapping_mul_signed(minus_one), x.wrapping_neg());
    }

    #[test]
    fn scale_in_place() {
        let mut digits = [10, 0, 0];
        assert_eq!(scale_assign_carry(&mut digits, 36), 0);
        assert_eq!(digits, [0x68, 0x01, 0]);

        let mut digits = [0xff, 0xff];
        assert_eq!(scale_assign_carry(&mut digits, 255), 0xfe);
        assert_eq!(digits, [0x01, 0xff]);

        let mut digits = [0x34, 0x12];
        assert_eq!(scale_assign_carry(&mut digits, 1), 0);
        assert_eq!(digits, [0x34, 0x12]);
    }
}
