use core::cmp::Ordering;

use crate::{DoubleWord, Signed, SIZE};

// Digits are stored little-endian, so ordering must start at the *last*
// digit, not at the first as derived array ordering would.

impl Ord for DoubleWord {
    /// Unsigned ordering. See [`DoubleWord::signed_cmp`] and [`Signed`]
    /// for the two's-complement ordering.
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..SIZE).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => (),
                not_equal => return not_equal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for DoubleWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl DoubleWord {
    /// Two's-complement ordering: differing signs decide outright, equal
    /// signs defer to the unsigned comparison.
    pub fn signed_cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.cmp(other),
        }
    }
}

impl Ord for Signed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.signed_cmp(&other.0)
    }
}

impl PartialOrd for Signed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
