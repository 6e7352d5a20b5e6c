//! Bit-query kernel.
//!
//! Buffers are in big-endian word order. Every query is defined for zero.

use super::scalar::WORD_BITS;

// BIT LENGTH

/// Number of leading zero bits; the full width for zero.
#[inline]
pub(crate) fn leading_zeros(x: &[u64]) -> u32 {
    let mut count = 0;
    for &xi in x {
        count += xi.leading_zeros();
        if xi != 0 {
            break;
        }
    }
    count
}

/// Number of trailing zero bits; the full width for zero.
#[inline]
pub(crate) fn trailing_zeros(x: &[u64]) -> u32 {
    let mut count = 0;
    for &xi in x.iter().rev() {
        count += xi.trailing_zeros();
        if xi != 0 {
            break;
        }
    }
    count
}

/// Minimum number of bits needed to represent `x`; zero for zero.
#[inline]
pub(crate) fn bit_length(x: &[u64]) -> u32 {
    x.len() as u32 * WORD_BITS - leading_zeros(x)
}

/// Whether bit `index` (zero is the least significant bit) is set.
#[inline]
pub(crate) fn bit(x: &[u64], index: u32) -> bool {
    let word = (index / WORD_BITS) as usize;
    if word >= x.len() {
        return false;
    }
    (x[x.len() - 1 - word] >> (index % WORD_BITS)) & 1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zeros_test() {
        assert_eq!(leading_zeros(&[0, 0, 0]), 192);
        assert_eq!(leading_zeros(&[0, 0, 1]), 191);
        assert_eq!(leading_zeros(&[0, 1 << 63, 1]), 64);
        assert_eq!(leading_zeros(&[u64::MAX, 0, 0]), 0);
    }

    #[test]
    fn trailing_zeros_test() {
        assert_eq!(trailing_zeros(&[0, 0, 0]), 192);
        assert_eq!(trailing_zeros(&[1 << 63, 0, 0]), 191);
        assert_eq!(trailing_zeros(&[1, 2, 0]), 65);
        assert_eq!(trailing_zeros(&[0, 0, 1]), 0);
    }

    #[test]
    fn bit_length_test() {
        assert_eq!(bit_length(&[0, 0, 0, 0]), 0);
        assert_eq!(bit_length(&[0, 0, 1, 0]), 65);
        assert_eq!(bit_length(&[0, 0, 3, 0]), 66);
        assert_eq!(bit_length(&[1 << 63, 0, 0, 0]), 256);
    }

    #[test]
    fn bit_test() {
        let x = [1, 0, 1 << 5];
        assert!(bit(&x, 5));
        assert!(!bit(&x, 4));
        assert!(bit(&x, 128));
        assert!(!bit(&x, 192));
    }
}
