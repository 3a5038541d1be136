//! Wrapping arithmetic over the base-256 digits of a [`DoubleWord`].
//!
//! Everything here computes "$\text{mod } 2^{8 \cdot \text{SIZE}}$": carries
//! past the top digit are dropped, exactly as native unsigned overflow drops
//! them. The signed operations are thin wrappers that negate operands into
//! magnitudes, run the unsigned core, and fix up the result's sign.

pub(crate) mod add;
pub(crate) mod bits;
pub(crate) mod compare;
pub(crate) mod divide;
pub(crate) mod multiply;
pub(crate) mod shift;
pub(crate) mod subtract;
