//! Building blocks for fixed-width multi-word arithmetic.
//!
//! These algorithms work on slices of 64-bit words in big-endian word order:
//! for `[0, 1, 2, 3]`, `0` is the most significant word and `3` the least
//! significant. Unsigned and signed values share the representation; only
//! comparison and the right shift look at the sign.

pub(crate) mod bits;
pub(crate) mod carry;
pub(crate) mod mul;
pub(crate) mod scalar;
pub(crate) mod shift;
