//! Multi-precision division.
//!
//! Division of a width-`B` value is expressed in terms of division at width
//! `B/2`, all the way down to the native `u128 / u64` division at `B = 64`.
//! Each width only has to provide a [`Digit`] implementation; the algorithms
//! below are written once for every [`Split`] type:
//!
//! - [`div_rem`] divides two width-`B` values. A divisor that fits in the low
//!   half takes two chained half-width divisions. Any other divisor is
//!   normalized, estimated with one half-width [`div_wide`] and corrected by
//!   at most one step (Hacker's Delight, `divlu2`).
//! - [`div_wide`] divides the double-width value `hi:lo` by `d` when
//!   `hi < d`. The dividend is treated as three half-digits over a two
//!   half-digit divisor, and each quotient half-digit is estimated and
//!   corrected as in Knuth's Algorithm D (Hacker's Delight, `divlu`).
//!
//! The correction loops branch on the data: nothing in this module runs in
//! constant time.

use core::ops::BitOr;

/// A fixed-width unsigned value usable as one digit of the division.
pub(crate) trait Digit: Copy + Ord + BitOr<Output = Self> {
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;

    /// Number of zero bits above the most significant one.
    fn leading_zeros(self) -> u32;

    /// Logical left shift by `n < BITS`.
    fn shl(self, n: u32) -> Self;

    /// Logical right shift by `n < BITS`.
    fn shr(self, n: u32) -> Self;

    /// `self + y` modulo 2<sup>BITS</sup>.
    fn wrapping_add(self, y: Self) -> Self;

    /// `self - y` modulo 2<sup>BITS</sup>.
    fn wrapping_sub(self, y: Self) -> Self;

    /// `self * y` modulo 2<sup>BITS</sup>.
    fn wrapping_mul(self, y: Self) -> Self;

    /// `(self / d, self % d)`. Panics if `d` is zero.
    fn div_rem(self, d: Self) -> (Self, Self);

    /// `(hi:lo / d, hi:lo % d)`. Panics unless `hi < d`.
    fn div_wide(hi: Self, lo: Self, d: Self) -> (Self, Self);
}

/// A digit made of two digits of half the width.
pub(crate) trait Split: Digit {
    type Half: Digit;

    /// `(high, low)` halves.
    fn split(self) -> (Self::Half, Self::Half);

    fn join(hi: Self::Half, lo: Self::Half) -> Self;
}

impl Digit for u64 {
    const BITS: u32 = u64::BITS;
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[inline]
    fn leading_zeros(self) -> u32 {
        u64::leading_zeros(self)
    }

    #[inline]
    fn shl(self, n: u32) -> Self {
        self << n
    }

    #[inline]
    fn shr(self, n: u32) -> Self {
        self >> n
    }

    #[inline]
    fn wrapping_add(self, y: Self) -> Self {
        u64::wrapping_add(self, y)
    }

    #[inline]
    fn wrapping_sub(self, y: Self) -> Self {
        u64::wrapping_sub(self, y)
    }

    #[inline]
    fn wrapping_mul(self, y: Self) -> Self {
        u64::wrapping_mul(self, y)
    }

    #[inline]
    fn div_rem(self, d: Self) -> (Self, Self) {
        (self / d, self % d)
    }

    #[inline]
    fn div_wide(hi: Self, lo: Self, d: Self) -> (Self, Self) {
        crate::math::scalar::div_wide(hi, lo, d)
    }
}

/// Zero-extend a half digit.
#[inline]
fn widen<T: Split>(x: T::Half) -> T {
    T::join(T::Half::ZERO, x)
}

/// Unsigned `(a / b, a % b)`.
pub(crate) fn div_rem<T: Split>(a: T, b: T) -> (T, T) {
    let (b_hi, b_lo) = b.split();

    if b_hi == T::Half::ZERO {
        // The divisor fits in a half: divide the high half on its own, then
        // the remainder followed by the low half. The second quotient fits in
        // a half because the remainder is below the divisor.
        assert!(b_lo != T::Half::ZERO, "attempt to divide by zero");
        let (a_hi, a_lo) = a.split();
        let (q_hi, r) = a_hi.div_rem(b_lo);
        let (q_lo, r) = T::Half::div_wide(r, a_lo, b_lo);
        return (T::join(q_hi, q_lo), widen(r));
    }

    // Normalize the divisor so its top half has the top bit set, and halve
    // the dividend so the estimate cannot overflow a half digit.
    let n = b_hi.leading_zeros();
    let (v1, _) = b.shl(n).split();
    let (u1_hi, u1_lo) = a.shr(1).split();
    let (q1, _) = T::Half::div_wide(u1_hi, u1_lo, v1);

    // Undo both shifts. The estimate is now exact or one too large;
    // stepping it down leaves it exact or one too small.
    let mut q = widen::<T>(q1).shr(T::Half::BITS - 1 - n);
    if q != T::ZERO {
        q = q.wrapping_sub(T::ONE);
    }
    let mut r = a.wrapping_sub(q.wrapping_mul(b));
    if r >= b {
        q = q.wrapping_add(T::ONE);
        r = r.wrapping_sub(b);
    }
    (q, r)
}

/// Unsigned `(hi:lo / d, hi:lo % d)` for `hi < d`.
pub(crate) fn div_wide<T: Split>(hi: T, lo: T, d: T) -> (T, T) {
    assert!(hi < d, "quotient does not fit in the divisor's width");

    // Normalize so the top bit of the divisor is set.
    let s = d.leading_zeros();
    let d = d.shl(s);
    let (un32, un10) = if s == 0 {
        (hi, lo)
    } else {
        (hi.shl(s) | lo.shr(T::BITS - s), lo.shl(s))
    };

    let (yn1, yn0) = d.split();
    let (un1, un0) = un10.split();

    let (q1, un21) = div_step(un32, un1, d, yn1, yn0);
    let (q0, r) = div_step(un21, un0, d, yn1, yn0);

    (T::join(q1, q0), r.shr(s))
}

/// One quotient half-digit: divide the three half-digits `u:next` by the
/// normalized divisor `d = yn1:yn0`, where `u < d`.
///
/// Returns the half-digit and the remainder.
fn div_step<T: Split>(u: T, next: T::Half, d: T, yn1: T::Half, yn0: T::Half) -> (T::Half, T) {
    // Estimate from the leading half-digit of the divisor. The estimate may
    // not fit a half-digit yet, and may be up to two too large.
    let (mut q, mut rhat) = u.div_rem(widen(yn1));
    loop {
        let (q_hi, q_lo) = q.split();
        let (r_hi, r_lo) = rhat.split();
        if r_hi != T::Half::ZERO {
            break;
        }
        if q_hi == T::Half::ZERO && widen::<T>(q_lo).wrapping_mul(widen(yn0)) <= T::join(r_lo, next) {
            break;
        }
        q = q.wrapping_sub(T::ONE);
        rhat = rhat.wrapping_add(widen(yn1));
    }

    // The estimate is exact now. The remainder is below `d`, so computing it
    // modulo the width loses nothing.
    let (_, q) = q.split();
    let (_, u_lo) = u.split();
    let r = T::join(u_lo, next).wrapping_sub(widen::<T>(q).wrapping_mul(d));
    (q, r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Uint1024, Uint128, Uint256};

    const MAX: u64 = u64::MAX;

    fn u128w(x: u128) -> Uint128 {
        Uint128::from(x)
    }

    #[test]
    fn u64_digit_test() {
        assert_eq!(Digit::div_rem(17u64, 5), (3, 2));
        assert_eq!(<u64 as Digit>::div_wide(1, 0, 3), (0x5555555555555555, 1));
    }

    #[test]
    fn div_rem_small_divisor_test() {
        // Divisor fits in the low half.
        let (q, r) = div_rem(u128w(u128::MAX), u128w(10));
        assert_eq!(q, u128w(u128::MAX / 10));
        assert_eq!(r, u128w(u128::MAX % 10));

        let (q, r) = div_rem(u128w(5), u128w(7));
        assert_eq!((q, r), (u128w(0), u128w(5)));
    }

    #[test]
    fn div_rem_large_divisor_test() {
        let cases = [
            (u128::MAX, 1u128 << 64),
            (u128::MAX, u128::MAX),
            (u128::MAX - 1, u128::MAX),
            (0x1234_5678_9abc_def0_0fed_cba9_8765_4321, 0x1_0000_0000_0000_0001),
            (1 << 127, (1 << 64) | 3),
            (0xffff_ffff_ffff_fffe_0000_0000_0000_0001, 0xffff_ffff_ffff_ffff_0000_0000_0000_0000),
        ];
        for &(a, b) in &cases {
            let (q, r) = div_rem(u128w(a), u128w(b));
            assert_eq!(q, u128w(a / b), "{} / {}", a, b);
            assert_eq!(r, u128w(a % b), "{} % {}", a, b);
        }
    }

    #[test]
    fn div_wide_test() {
        let m = Uint128::MAX;
        let (q, r) = div_wide(Uint128::from(0u64), m, m);
        assert_eq!((q, r), (Uint128::ONE, Uint128::from(0u64)));

        let (q, r) = div_wide(m.sub(Uint128::ONE), m, m);
        assert_eq!(q, m);
        assert_eq!(r, m.sub(Uint128::ONE));

        // Unnormalized divisor.
        let (q, r) = div_wide(u128w(2), u128w(5), u128w(3));
        assert_eq!(q, u128w(0xaaaa_aaaa_aaaa_aaaa_aaaa_aaaa_aaaa_aaac));
        assert_eq!(r, u128w(1));
    }

    #[test]
    fn div_rem_256_test() {
        let a = Uint256::from_words([MAX, MAX, MAX, MAX]);
        let b = Uint256::from_words([0, 1, 0, 0]);
        let (q, r) = div_rem(a, b);
        assert_eq!(q, Uint256::from_words([0, 0, MAX, MAX]));
        assert_eq!(r, Uint256::from_words([0, 0, MAX, MAX]));

        let b = Uint256::from_words([0x8000_0000_0000_0000, 0, 0, 1]);
        let (q, r) = div_rem(a, b);
        assert_eq!(q, Uint256::from_words([0, 0, 0, 1]));
        assert_eq!(r, Uint256::from_words([MAX >> 1, MAX, MAX, MAX - 1]));
    }

    #[test]
    fn div_rem_1024_test() {
        let a = Uint1024::MAX;
        let (q, r) = div_rem(a, Uint1024::from(2u64));
        assert_eq!(q, a.rsh(1));
        assert_eq!(r, Uint1024::ONE);

        let b = Uint1024::ONE.lsh(700).add(Uint1024::from(12345u64));
        let (q, r) = div_rem(a, b);
        assert_eq!(b.mul(q).add(r), a);
        assert!(r < b);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn div_rem_zero_test() {
        div_rem(Uint256::ONE, Uint256::ZERO);
    }

    #[test]
    #[should_panic]
    fn div_wide_overflow_test() {
        div_wide(u128w(3), u128w(0), u128w(3));
    }
}
