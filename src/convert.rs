//! Conversions between [`DoubleWord`](crate::DoubleWord) and native
//! integers, strings of any radix 2..=36, and floating point.

pub(crate) mod float;
pub(crate) mod primitive;
pub(crate) mod string;
