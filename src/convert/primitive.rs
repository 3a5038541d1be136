use crate::{DoubleWord, SignedWord, Word, SIZE};

impl DoubleWord {
    /// Widens a native unsigned word, filling the low digits.
    pub fn from_uint(mut v: Word) -> Self {
        let mut t = Self::ZERO;
        let mut i = 0;

        loop {
            t.0[i] = (v % 256) as u8;
            i += 1;
            v /= 256;
            if v == 0 || i == SIZE {
                break;
            }
        }

        t
    }

    /// Widens a native signed word, sign-extending.
    ///
    /// `unsigned_abs` sidesteps the one magnitude (`SignedWord::MIN`) that a
    /// native negation could not represent.
    pub fn from_int(v: SignedWord) -> Self {
        if v < 0 {
            Self::from_uint(v.unsigned_abs()).wrapping_neg()
        } else {
            Self::from_uint(v as Word)
        }
    }

    /// Narrows to a native unsigned word, truncating to the low word.
    pub fn to_uint(self) -> Word {
        let mut v: Word = 0;

        for &digit in self.0[..SIZE / 2].iter().rev() {
            v = (v << 8) | digit as Word;
        }

        v
    }

    /// Narrows to a native signed word: the magnitude truncates, the sign
    /// of the double word carries over.
    pub fn to_int(self) -> SignedWord {
        if self.is_negative() {
            self.wrapping_neg().to_uint().wrapping_neg() as SignedWord
        } else {
            self.to_uint() as SignedWord
        }
    }
}

impl From<Word> for DoubleWord {
    fn from(v: Word) -> Self {
        Self::from_uint(v)
    }
}

impl From<SignedWord> for DoubleWord {
    fn from(v: SignedWord) -> Self {
        Self::from_int(v)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unsigned_round_trip() {
        for v in [0, 1, 2, 255, 256, 65537, 0xffff_ffff, Word::MAX] {
            assert_eq!(DoubleWord::from_uint(v).to_uint(), v);
        }
    }

    #[test]
    fn signed_round_trip() {
        for v in [
            0,
            1,
            -1,
            -2,
            127,
            -128,
            SignedWord::MAX,
            SignedWord::MIN,
            SignedWord::MIN + 1,
        ] {
            assert_eq!(DoubleWord::from_int(v).to_int(), v);
        }
    }

    #[test]
    fn negative_values_sign_extend() {
        assert_eq!(DoubleWord::from_int(-1), DoubleWord::UMAX);

        let x = DoubleWord::from_int(-2);
        assert_eq!(x.0[0], 0xfe);
        assert!(x.0[1..].iter().all(|&digit| digit == 0xff));
    }

    #[test]
    fn min_magnitude() {
        let x = DoubleWord::from_int(SignedWord::MIN);
        assert!(x.is_negative());
        assert_eq!(x.wrapping_neg().to_uint(), SignedWord::MIN.unsigned_abs());
        assert_eq!(x.as_signed().to_string(), SignedWord::MIN.to_string());
    }

    #[test]
    fn narrowing_truncates() {
        // one bit above the native word is dropped
        let wide = DoubleWord::from_uint(1) << (8 * SIZE / 2);
        assert_eq!(wide.to_uint(), 0);
        assert_eq!((wide + DoubleWord::from_uint(7)).to_uint(), 7);
    }

    #[test]
    fn from_impls() {
        assert_eq!(DoubleWord::from(5 as Word).to_uint(), 5);
        assert_eq!(DoubleWord::from(-5 as SignedWord).to_int(), -5);
    }
}
