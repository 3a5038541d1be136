#![cfg_attr(not(test), no_std)]
//! A fixed-width "double-word" integer: twice as wide as the native machine
//! word, built entirely from single-word operations.
//!
//! [`DoubleWord`] stores its value as little-endian base-256 digits and wraps
//! on overflow, exactly like the native unsigned types do. Signed behavior is
//! two's complement; the sign is the top bit of the top digit, never stored
//! separately.

mod arithmetic;
pub use arithmetic::bits::BitOp;
mod convert;
pub use convert::string::STR_CAPACITY;
mod dwa;
pub use dwa::{DoubleWord, Signed, SIZE};
mod error;
pub use error::{Error, Result};
mod word;
pub use word::{SignedWord, Word};
