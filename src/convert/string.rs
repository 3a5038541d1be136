use core::fmt;
use core::str::FromStr;

use crate::arithmetic::divide::div_rem_assign_digit;
use crate::arithmetic::multiply::scale_assign_carry;
use crate::{DoubleWord, Error, Signed, Word, SIZE};

/// Digit alphabet shared by both conversion directions.
static ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Enough for any rendering: sign plus one character per bit (radix 2).
pub const STR_CAPACITY: usize = 1 + 8 * SIZE;

/// The buffer contents are taken from [`ALPHABET`] (plus `-`),
/// which is pure ASCII.
fn ascii(buf: &[u8]) -> &str {
    debug_assert!(buf.is_ascii());
    unsafe { core::str::from_utf8_unchecked(buf) }
}

impl DoubleWord {
    /// Renders the unsigned value into `buf`, radix 2..=36.
    ///
    /// Repeated short division by the radix produces the digits least
    /// significant first; the slice is reversed at the end. A radix outside
    /// the range is a caller bug.
    pub fn to_str_radix_unsigned<'a>(self, radix: u32, buf: &'a mut [u8]) -> &'a str {
        assert!((2..=36).contains(&radix), "radix out of range");
        assert!(buf.len() >= 8 * SIZE, "buffer too small");

        let mut digits = self.0;
        let mut len = 0;
        loop {
            let r = div_rem_assign_digit(&mut digits, radix as u8);
            buf[len] = ALPHABET[r as usize];
            len += 1;
            if digits == [0; SIZE] {
                break;
            }
        }
        buf[..len].reverse();

        ascii(&buf[..len])
    }

    /// Renders the two's-complement value into `buf`: a `-` and the
    /// negated magnitude when the sign bit is set.
    pub fn to_str_radix<'a>(self, radix: u32, buf: &'a mut [u8]) -> &'a str {
        assert!(buf.len() >= STR_CAPACITY, "buffer too small");

        let (sign_len, magnitude) = if self.is_negative() {
            buf[0] = b'-';
            (1, self.wrapping_neg())
        } else {
            (0, self)
        };

        let len = magnitude.to_str_radix_unsigned(radix, &mut buf[sign_len..]).len();
        ascii(&buf[..sign_len + len])
    }

    /// Parses a number prefix of `s`, returning the value and how many bytes
    /// were consumed.
    ///
    /// Leading ASCII whitespace and an optional `+`/`-` are accepted. A radix
    /// of 0 auto-detects: `0x`/`0X` followed by a hex digit means 16, a
    /// leading `0` means 8, anything else means 10; an explicit radix of 16
    /// also skips a hex prefix. Any other radix outside 2..=36 is a caller
    /// bug.
    ///
    /// Digits accumulate by scale-and-add; when the scale step carries out of
    /// the top digit the parse stops *before* consuming the offending digit,
    /// leaving the already-wrapped value. This "partial consumption on
    /// overflow" contract is deliberate (callers detect it through the
    /// consumed count) and differs from the clamp-and-keep-consuming behavior
    /// of `strtoul`. If no valid digit is found at all, the consumed count is
    /// 0 — a lone sign is not consumed either.
    pub fn from_str_radix(s: &str, radix: u32) -> (Self, usize) {
        assert!(
            radix == 0 || (2..=36).contains(&radix),
            "radix out of range"
        );
        let bytes = s.as_bytes();
        let mut p = 0;

        while bytes.get(p).map_or(false, |c| c.is_ascii_whitespace()) {
            p += 1;
        }

        let mut negative = false;
        match bytes.get(p) {
            Some(b'-') => {
                negative = true;
                p += 1;
            }
            Some(b'+') => p += 1,
            _ => (),
        }

        let hex_prefix = |at: usize| {
            bytes.get(at) == Some(&b'0')
                && matches!(bytes.get(at + 1), Some(&b'x') | Some(&b'X'))
                && bytes.get(at + 2).map_or(false, |c| c.is_ascii_hexdigit())
        };

        let mut radix = radix;
        if radix == 0 {
            radix = if bytes.get(p) != Some(&b'0') {
                10
            } else if hex_prefix(p) {
                p += 2;
                16
            } else {
                8
            };
        } else if radix == 16 && hex_prefix(p) {
            p += 2;
        }

        let digit_value = |c: u8| {
            ALPHABET
                .iter()
                .position(|&d| d == c.to_ascii_lowercase())
                .filter(|&v| (v as u32) < radix)
        };

        let mut t = Self::ZERO;
        let mut any = false;
        while let Some(v) = bytes.get(p).copied().and_then(digit_value) {
            if scale_assign_carry(&mut t.0, radix as u16) > 0 {
                break;
            }
            t = t.wrapping_add(Self::from_uint(v as Word));
            any = true;
            p += 1;
        }

        if !any {
            p = 0;
        }
        (if negative { t.wrapping_neg() } else { t }, p)
    }
}

impl FromStr for DoubleWord {
    type Err = Error;

    /// Whole-string parse with radix auto-detection.
    fn from_str(s: &str) -> crate::Result<Self> {
        let (value, consumed) = Self::from_str_radix(s, 0);
        if consumed == s.len() && !s.is_empty() {
            Ok(value)
        } else {
            Err(Error)
        }
    }
}

impl fmt::Display for DoubleWord {
    /// Unsigned decimal; use [`DoubleWord::as_signed`] for the signed
    /// rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; STR_CAPACITY];
        f.pad(self.to_str_radix_unsigned(10, &mut buf))
    }
}

impl fmt::Display for Signed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; STR_CAPACITY];
        f.pad(self.0.to_str_radix(10, &mut buf))
    }
}

impl fmt::LowerHex for DoubleWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; STR_CAPACITY];
        f.pad(self.to_str_radix_unsigned(16, &mut buf))
    }
}

impl fmt::UpperHex for DoubleWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; STR_CAPACITY];
        let len = self.to_str_radix_unsigned(16, &mut buf).len();
        buf[..len].make_ascii_uppercase();
        f.pad(ascii(&buf[..len]))
    }
}

impl fmt::Octal for DoubleWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; STR_CAPACITY];
        f.pad(self.to_str_radix_unsigned(8, &mut buf))
    }
}

impl fmt::Binary for DoubleWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; STR_CAPACITY];
        f.pad(self.to_str_radix_unsigned(2, &mut buf))
    }
}
