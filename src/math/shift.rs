//! Shift kernel.
//!
//! Every destination word is built from the contribution of every source
//! word, so the running time depends only on the buffer length, never on the
//! shift distance or the data. Each contribution is a native shift whose
//! amount is reduced modulo 64 and then masked away when the real amount is
//! outside `0..64`; a native shift is never asked to move 64 bits or more.
//!
//! Buffers are in big-endian word order. Distances of the full width or more
//! produce zero, or all sign bits for the arithmetic right shift.

use super::scalar::{self, WORD_BITS};

/// `x << amount` if `amount < 64`, else zero.
#[inline(always)]
fn lshift(x: u64, amount: u64) -> u64 {
    (x << (amount % WORD_BITS as u64)) & scalar::mask(amount < WORD_BITS as u64)
}

/// `x >> amount` if `amount < 64`, else zero.
#[inline(always)]
fn rshift(x: u64, amount: u64) -> u64 {
    (x >> (amount % WORD_BITS as u64)) & scalar::mask(amount < WORD_BITS as u64)
}

// SHL

/// `z = x << n`, logical.
pub(crate) fn shl(x: &[u64], n: u32, z: &mut [u64]) {
    debug_assert!(x.len() == z.len());
    // Indexes below count words from the least significant end.
    for (e, zi) in z.iter_mut().rev().enumerate() {
        let mut acc = 0;
        for (s, &xs) in x.iter().rev().enumerate() {
            // Word `s` moves `n` bits up, which is `m` bits into word `e`.
            let m = n as i64 - WORD_BITS as i64 * (e as i64 - s as i64);
            acc |= lshift(xs, m as u64) | rshift(xs, m.wrapping_neg() as u64);
        }
        *zi = acc;
    }
}

// SHR

/// Right shift where every word above the top of `x` reads as `fill`.
///
/// Only `extent` source words are visited: `x.len()` for a logical shift,
/// twice that when sign words must reach every destination word.
#[inline(always)]
fn shr_impl(x: &[u64], n: u32, fill: u64, extent: usize, z: &mut [u64]) {
    debug_assert!(x.len() == z.len());
    let len = x.len();
    for (e, zi) in z.iter_mut().rev().enumerate() {
        let mut acc = 0;
        for s in 0..extent {
            let xs = if s < len { x[len - 1 - s] } else { fill };
            // Word `s` moves `n` bits down, which is `m` bits below word `e`.
            let m = n as i64 - WORD_BITS as i64 * (s as i64 - e as i64);
            acc |= rshift(xs, m as u64) | lshift(xs, m.wrapping_neg() as u64);
        }
        *zi = acc;
    }
}

/// `z = x >> n`, logical: zeros enter from the top.
pub(crate) fn shr(x: &[u64], n: u32, z: &mut [u64]) {
    shr_impl(x, n, 0, x.len(), z);
}

/// `z = x >> n`, arithmetic: copies of the sign bit enter from the top.
pub(crate) fn sar(x: &[u64], n: u32, z: &mut [u64]) {
    debug_assert!(!x.is_empty());
    let fill = scalar::sign_mask(x[0]);
    shr_impl(x, n, fill, 2 * x.len(), z);
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u64 = u64::MAX;

    fn shl3(x: [u64; 3], n: u32) -> [u64; 3] {
        let mut z = [0; 3];
        shl(&x, n, &mut z);
        z
    }

    fn shr3(x: [u64; 3], n: u32) -> [u64; 3] {
        let mut z = [0; 3];
        shr(&x, n, &mut z);
        z
    }

    fn sar3(x: [u64; 3], n: u32) -> [u64; 3] {
        let mut z = [0; 3];
        sar(&x, n, &mut z);
        z
    }

    #[test]
    fn shl_test() {
        assert_eq!(shl3([0, 0, 1], 0), [0, 0, 1]);
        assert_eq!(shl3([0, 0, 1], 1), [0, 0, 2]);
        assert_eq!(shl3([0, 0, 1], 63), [0, 0, 1 << 63]);
        assert_eq!(shl3([0, 0, 1], 64), [0, 1, 0]);
        assert_eq!(shl3([0, 0, 1], 191), [1 << 63, 0, 0]);
        assert_eq!(shl3([0, 0xD2210408, MAX], 5), [0, 0x1A44208100 | 0x1F, MAX << 5]);
        assert_eq!(shl3([0, 0, MAX], 100), [MAX >> 28, MAX << 36, 0]);
        assert_eq!(shl3([MAX, MAX, MAX], 192), [0, 0, 0]);
    }

    #[test]
    fn shr_test() {
        assert_eq!(shr3([1, 0, 0], 0), [1, 0, 0]);
        assert_eq!(shr3([1, 0, 0], 1), [0, 1 << 63, 0]);
        assert_eq!(shr3([1, 0, 0], 128), [0, 0, 1]);
        assert_eq!(shr3([1 << 63, 0, 0], 191), [0, 0, 1]);
        assert_eq!(shr3([MAX, 0, 0], 100), [0, MAX >> 36, MAX << 28]);
        assert_eq!(shr3([MAX, MAX, MAX], 192), [0, 0, 0]);
    }

    #[test]
    fn sar_test() {
        // Non-negative values shift like the logical shift.
        assert_eq!(sar3([1, 0, 0], 1), [0, 1 << 63, 0]);
        assert_eq!(sar3([MAX >> 1, MAX, MAX], 191), [0, 0, 0]);

        // Negative values pull in ones.
        assert_eq!(sar3([1 << 63, 0, 0], 1), [3 << 62, 0, 0]);
        assert_eq!(sar3([1 << 63, 0, 0], 64), [MAX, 1 << 63, 0]);
        assert_eq!(sar3([1 << 63, 0, 0], 191), [MAX, MAX, MAX]);
        assert_eq!(sar3([MAX, MAX, MAX - 1], 1), [MAX, MAX, MAX]);
        assert_eq!(sar3([MAX << 4, 0, 0], 100), [MAX, MAX, MAX << 32]);
    }
}
