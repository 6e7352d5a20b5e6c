//! Word-to-word operations, the building blocks of every multi-word kernel.
//!
//! Only `div_wide` branches on the value of its operands.

/// Number of bits in a word.
pub(crate) const WORD_BITS: u32 = u64::BITS;

// MASKS

/// All-ones if `flag` is set, all-zeros otherwise.
#[inline(always)]
pub(crate) fn mask(flag: bool) -> u64 {
    (flag as u64).wrapping_neg()
}

/// All-ones if `x` is negative when read as two's complement, else zero.
#[inline(always)]
pub(crate) fn sign_mask(x: u64) -> u64 {
    ((x as i64) >> (WORD_BITS - 1)) as u64
}

// ADDITION

/// Add with carry-in, returning the `(sum, carry)` pair. `carry` is 0 or 1.
#[inline(always)]
pub(crate) fn add(x: u64, y: u64, carry: u64) -> (u64, u64) {
    let (s, c1) = x.overflowing_add(y);
    let (s, c2) = s.overflowing_add(carry);
    (s, (c1 | c2) as u64)
}

// SUBTRACTION

/// Subtract with borrow-in, returning the `(difference, borrow)` pair.
/// `borrow` is 0 or 1.
#[inline(always)]
pub(crate) fn sub(x: u64, y: u64, borrow: u64) -> (u64, u64) {
    let (d, b1) = x.overflowing_sub(y);
    let (d, b2) = d.overflowing_sub(borrow);
    (d, (b1 | b2) as u64)
}

// MULTIPLICATION

/// Full 64x64 product, returned as `(high, low)`.
#[inline(always)]
pub(crate) fn mul(x: u64, y: u64) -> (u64, u64) {
    let z = x as u128 * y as u128;
    ((z >> WORD_BITS) as u64, z as u64)
}

// DIVISION

/// Divide the two-word value `hi:lo` by `d`, returning `(quotient, remainder)`.
///
/// Requires `hi < d`, which guarantees the quotient fits in one word.
#[inline]
pub(crate) fn div_wide(hi: u64, lo: u64, d: u64) -> (u64, u64) {
    assert!(hi < d, "quotient does not fit in a word");
    let n = ((hi as u128) << WORD_BITS) | lo as u128;
    let d = d as u128;
    ((n / d) as u64, (n % d) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_test() {
        assert_eq!(mask(true), u64::MAX);
        assert_eq!(mask(false), 0);
        assert_eq!(sign_mask(1 << 63), u64::MAX);
        assert_eq!(sign_mask(i64::MAX as u64), 0);
    }

    #[test]
    fn add_test() {
        assert_eq!(add(1, 2, 0), (3, 0));
        assert_eq!(add(u64::MAX, 1, 0), (0, 1));
        assert_eq!(add(u64::MAX, 0, 1), (0, 1));
        assert_eq!(add(u64::MAX, u64::MAX, 1), (u64::MAX, 1));
    }

    #[test]
    fn sub_test() {
        assert_eq!(sub(3, 2, 0), (1, 0));
        assert_eq!(sub(0, 1, 0), (u64::MAX, 1));
        assert_eq!(sub(0, 0, 1), (u64::MAX, 1));
        assert_eq!(sub(0, u64::MAX, 1), (0, 1));
    }

    #[test]
    fn mul_test() {
        assert_eq!(mul(u64::MAX, u64::MAX), (u64::MAX - 1, 1));
        assert_eq!(mul(1 << 32, 1 << 32), (1, 0));
    }

    #[test]
    fn div_wide_test() {
        assert_eq!(div_wide(0, 7, 2), (3, 1));
        assert_eq!(div_wide(1, 0, 2), (1 << 63, 0));
        assert_eq!(div_wide(u64::MAX - 1, u64::MAX, u64::MAX), (u64::MAX, u64::MAX - 1));
    }

    #[test]
    #[should_panic]
    fn div_wide_overflow_test() {
        div_wide(2, 0, 2);
    }
}
