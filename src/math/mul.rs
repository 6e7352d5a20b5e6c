//! Multiplication kernel.
//!
//! Grade-school multiplication in product-scanning order: the output is
//! produced one column at a time, least significant first, and every partial
//! product `x[i] * y[j]` with `i + j` equal to the column is folded into a
//! three-word accumulator. A column holds at most `min(x.len(), y.len())`
//! products, so the top accumulator word can never overflow and each carry
//! chain is two words long.
//!
//! Only the columns that fit in the output are visited. A truncated product
//! (output as long as the inputs) therefore never computes the roughly
//! `n^2 / 2` partial products that lie entirely above the retained window,
//! and a widening product (output as long as both inputs together) is exact.
//!
//! Buffers are in big-endian word order.

use super::scalar;

/// `z = x * y`, keeping the low `z.len()` words of the product.
pub(crate) fn mul(x: &[u64], y: &[u64], z: &mut [u64]) {
    debug_assert!(!x.is_empty() && !y.is_empty());
    debug_assert!(z.len() <= x.len() + y.len());
    let (xlen, ylen, zlen) = (x.len(), y.len(), z.len());

    // Accumulator, least significant word first.
    let (mut c0, mut c1, mut c2) = (0u64, 0u64, 0u64);
    // Indexes below count words from the least significant end.
    for k in 0..zlen {
        let first = k.saturating_sub(ylen - 1);
        let last = k.min(xlen - 1);
        for i in first..=last {
            let (hi, lo) = scalar::mul(x[xlen - 1 - i], y[ylen - 1 - (k - i)]);
            let (s, carry) = scalar::add(c0, lo, 0);
            c0 = s;
            let (s, carry) = scalar::add(c1, hi, carry);
            c1 = s;
            c2 += carry;
        }
        z[zlen - 1 - k] = c0;
        c0 = c1;
        c1 = c2;
        c2 = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u64 = u64::MAX;

    #[test]
    fn truncated_test() {
        let mut z = [0; 2];
        mul(&[0, 5], &[0, 7], &mut z);
        assert_eq!(z, [0, 35]);

        // Carry from the low column.
        mul(&[0, MAX], &[0, MAX], &mut z);
        assert_eq!(z, [MAX - 1, 1]);

        // High words of the product are dropped.
        mul(&[MAX, MAX], &[MAX, MAX], &mut z);
        assert_eq!(z, [0, 1]);

        mul(&[1, 0], &[1, 0], &mut z);
        assert_eq!(z, [0, 0]);
    }

    #[test]
    fn wide_test() {
        let mut z = [0; 4];
        mul(&[MAX, MAX], &[MAX, MAX], &mut z);
        assert_eq!(z, [MAX, MAX - 1, 0, 1]);

        mul(&[1, 0], &[1, 0], &mut z);
        assert_eq!(z, [0, 1, 0, 0]);

        mul(&[0, 0], &[MAX, MAX], &mut z);
        assert_eq!(z, [0; 4]);

        let mut z = [0; 8];
        mul(&[MAX; 4], &[MAX; 4], &mut z);
        assert_eq!(z, [MAX, MAX, MAX, MAX - 1, 0, 0, 0, 1]);
    }

    #[test]
    fn uneven_test() {
        // 3 words by 1 word into 4.
        let mut z = [0; 4];
        mul(&[MAX, MAX, MAX], &[2], &mut z);
        assert_eq!(z, [1, MAX, MAX, MAX - 1]);
    }
}
