//! Carry-chain kernel: addition, subtraction, negation, comparison and the
//! word-wise logical operations.
//!
//! Buffers are in big-endian word order, `x[0]` is the most significant
//! word, so carries travel from the end of the slice toward the front.
//! All slices passed to one call have the same length.

use super::scalar;
use core::cmp::Ordering;

// ADDITION

/// `z = x + y`, returning the carry out of the most significant word.
#[inline]
pub(crate) fn add(x: &[u64], y: &[u64], z: &mut [u64]) -> u64 {
    debug_assert!(x.len() == y.len() && x.len() == z.len());
    let mut carry = 0;
    for ((zi, &xi), &yi) in z.iter_mut().zip(x).zip(y).rev() {
        let (s, c) = scalar::add(xi, yi, carry);
        *zi = s;
        carry = c;
    }
    carry
}

// SUBTRACTION

/// `z = x - y`, returning the borrow out of the most significant word.
#[inline]
pub(crate) fn sub(x: &[u64], y: &[u64], z: &mut [u64]) -> u64 {
    debug_assert!(x.len() == y.len() && x.len() == z.len());
    let mut borrow = 0;
    for ((zi, &xi), &yi) in z.iter_mut().zip(x).zip(y).rev() {
        let (d, b) = scalar::sub(xi, yi, borrow);
        *zi = d;
        borrow = b;
    }
    borrow
}

/// `z = 0 - x`, the two's-complement negation.
#[inline]
pub(crate) fn neg(x: &[u64], z: &mut [u64]) {
    debug_assert!(x.len() == z.len());
    let mut borrow = 0;
    for (zi, &xi) in z.iter_mut().zip(x).rev() {
        let (d, b) = scalar::sub(0, xi, borrow);
        *zi = d;
        borrow = b;
    }
}

// RELATIVE OPERATORS

/// Compare `x` to `y` as unsigned integers.
#[inline]
pub(crate) fn compare(x: &[u64], y: &[u64]) -> Ordering {
    debug_assert!(x.len() == y.len());
    for (xi, yi) in x.iter().zip(y) {
        match xi.cmp(yi) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Compare `x` to `y` as two's-complement signed integers.
///
/// Only the most significant word carries the sign. Once the leading words
/// are equal both operands have the same sign, and the remaining words order
/// the same way for negative values as for positive ones.
#[inline]
pub(crate) fn compare_signed(x: &[u64], y: &[u64]) -> Ordering {
    debug_assert!(!x.is_empty() && x.len() == y.len());
    match (x[0] as i64).cmp(&(y[0] as i64)) {
        Ordering::Equal => compare(&x[1..], &y[1..]),
        ord => ord,
    }
}

/// Whether every word is zero.
#[inline]
pub(crate) fn is_zero(x: &[u64]) -> bool {
    x.iter().fold(0, |acc, &xi| acc | xi) == 0
}

// LOGICAL

/// `z = x & y`.
#[inline]
pub(crate) fn and(x: &[u64], y: &[u64], z: &mut [u64]) {
    for ((zi, &xi), &yi) in z.iter_mut().zip(x).zip(y) {
        *zi = xi & yi;
    }
}

/// `z = x & !y`.
#[inline]
pub(crate) fn and_not(x: &[u64], y: &[u64], z: &mut [u64]) {
    for ((zi, &xi), &yi) in z.iter_mut().zip(x).zip(y) {
        *zi = xi & !yi;
    }
}

/// `z = x | y`.
#[inline]
pub(crate) fn or(x: &[u64], y: &[u64], z: &mut [u64]) {
    for ((zi, &xi), &yi) in z.iter_mut().zip(x).zip(y) {
        *zi = xi | yi;
    }
}

/// `z = x ^ y`.
#[inline]
pub(crate) fn xor(x: &[u64], y: &[u64], z: &mut [u64]) {
    for ((zi, &xi), &yi) in z.iter_mut().zip(x).zip(y) {
        *zi = xi ^ yi;
    }
}

/// `z = !x`.
#[inline]
pub(crate) fn not(x: &[u64], z: &mut [u64]) {
    for (zi, &xi) in z.iter_mut().zip(x) {
        *zi = !xi;
    }
}
