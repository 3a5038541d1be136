use core::fmt;
use core::ops::Deref;

use ref_cast::RefCast;

use crate::Word;

/// Width of a [`DoubleWord`] in bytes: twice the native word.
pub const SIZE: usize = 2 * core::mem::size_of::<Word>();

/// Integer twice as wide as the native [`Word`].
///
/// Internal representation is little-endian base-256: digit `[0]` is the
/// least significant, digit `[SIZE-1]` the most significant. Interpreted as a
/// two's-complement integer of `8 * SIZE` bits, or as an unsigned integer of
/// the same width where an operation says so.
///
/// Every operation takes its operands by value and returns a fresh value;
/// results wrap modulo `2^(8*SIZE)` and overflow is never reported.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoubleWord(pub(crate) [u8; SIZE]);

impl DoubleWord {
    /// Number of bits in a double word.
    pub const BITS: usize = 8 * SIZE;

    pub const ZERO: Self = Self([0; SIZE]);

    pub const ONE: Self = {
        let mut digits = [0; SIZE];
        digits[0] = 1;
        Self(digits)
    };

    /// Largest unsigned value, `2^BITS - 1`.
    pub const UMAX: Self = Self([0xff; SIZE]);

    /// Largest signed value, `2^(BITS-1) - 1`.
    pub const MAX: Self = {
        let mut digits = [0xff; SIZE];
        digits[SIZE - 1] = 0x7f;
        Self(digits)
    };

    /// Smallest signed value, `-2^(BITS-1)`.
    pub const MIN: Self = {
        let mut digits = [0; SIZE];
        digits[SIZE - 1] = 0x80;
        Self(digits)
    };

    /// The two's-complement sign: the top bit of the top digit.
    pub fn is_negative(&self) -> bool {
        self.0[SIZE - 1] & 0x80 != 0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; SIZE]
    }

    /// The digits up to and including the highest nonzero one.
    ///
    /// Zero has one significant digit, so the result is never empty.
    pub(crate) fn significant_digits(&self) -> &[u8] {
        let len = self
            .0
            .iter()
            .rposition(|&digit| digit != 0)
            .map_or(1, |i| i + 1);
        &self.0[..len]
    }

    /// The digits as stored: little-endian.
    pub fn to_le_bytes(self) -> [u8; SIZE] {
        self.0
    }

    pub fn from_le_bytes(bytes: [u8; SIZE]) -> Self {
        Self(bytes)
    }

    pub fn to_be_bytes(self) -> [u8; SIZE] {
        let mut bytes = self.0;
        bytes.reverse();
        bytes
    }

    pub fn from_be_bytes(mut bytes: [u8; SIZE]) -> Self {
        bytes.reverse();
        Self(bytes)
    }

    /// Big-endian construction from at most `SIZE` bytes, zero-extending.
    ///
    /// Convenient for byte-string fixtures shorter than the full width.
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        assert!(bytes.len() <= SIZE);
        let mut digits = [0; SIZE];
        for (digit, &byte) in digits.iter_mut().zip(bytes.iter().rev()) {
            *digit = byte;
        }
        Self(digits)
    }

    /// Borrow as the signed view, changing ordering and formatting
    /// to two's-complement semantics.
    pub fn as_signed(&self) -> &Signed {
        Signed::ref_cast(self)
    }
}

/// Signed view of a [`DoubleWord`].
///
/// Same digits, but `Ord` and `Display` use two's-complement semantics
/// instead of the unsigned ones of the underlying type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, RefCast)]
#[repr(transparent)]
pub struct Signed(pub(crate) DoubleWord);

impl Signed {
    pub fn get(&self) -> DoubleWord {
        self.0
    }
}

impl Default for DoubleWord {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Deref for DoubleWord {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for DoubleWord {
    /// Big-endian hex of all digits, leading zeros included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for digit in self.0.iter().rev() {
            write!(f, "{:02x}", digit)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Signed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}
