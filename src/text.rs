//! Conversion of magnitudes to digit strings in bases 2 through 62.
//!
//! The magnitude is repeatedly divided, in place, by the largest power of
//! the base that fits in a word. Each pass is a long division by a single
//! word from the most significant word down and yields one "super-digit",
//! the remainder, which expands into a fixed number of base digits. Words
//! that become zero at the top are dropped from later passes. Digits are
//! produced least significant first into the end of a stack buffer, so the
//! finished text is the tail of the buffer.

use crate::math::scalar::{self, WORD_BITS};
#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::fmt;
use core::str;

/// Digits for every supported base, in value order.
const DIGITS: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Smallest and largest supported base.
pub(crate) const MIN_BASE: u32 = 2;
pub(crate) const MAX_BASE: u32 = 62;

/// Widest supported value, in words.
const MAX_WORDS: usize = 16;

/// Enough room for the widest value in base 2, plus a sign.
const BUF_LEN: usize = MAX_WORDS * WORD_BITS as usize + 1;

/// `(base^k, k)` for the largest `k` with `base^k` fitting in a word.
const fn super_digit(base: u64) -> (u64, usize) {
    let mut power = base;
    let mut digits = 1;
    while let Some(next) = power.checked_mul(base) {
        power = next;
        digits += 1;
    }
    (power, digits)
}

const SUPER_DIGITS: [(u64, usize); MAX_BASE as usize + 1] = {
    let mut table = [(0, 0); MAX_BASE as usize + 1];
    let mut base = MIN_BASE as usize;
    while base <= MAX_BASE as usize {
        table[base] = super_digit(base as u64);
        base += 1;
    }
    table
};

/// A stack buffer that a magnitude is formatted into.
pub(crate) struct Buffer {
    bytes: [u8; BUF_LEN],
}

impl Buffer {
    #[inline]
    pub(crate) fn new() -> Self {
        Buffer {
            bytes: [0; BUF_LEN],
        }
    }

    /// Format the magnitude `words` (most significant word first) in `base`,
    /// preceded by `-` if `negative`.
    ///
    /// `words` is used as scratch space and holds zero afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `base` is not in `2..=62`.
    pub(crate) fn format(&mut self, words: &mut [u64], negative: bool, base: u32) -> &str {
        assert!(
            (MIN_BASE..=MAX_BASE).contains(&base),
            "base {} is not in the range 2..=62",
            base,
        );
        assert!(words.len() <= MAX_WORDS);

        let mut top = words.iter().take_while(|&&w| w == 0).count();
        let mut pos = BUF_LEN;

        if base == 10 && top + 1 >= words.len() {
            // Fits in one word.
            let mut small = itoa::Buffer::new();
            let digits = small.format(words.last().copied().unwrap_or(0)).as_bytes();
            pos -= digits.len();
            self.bytes[pos..].copy_from_slice(digits);
        } else {
            let (divisor, width) = SUPER_DIGITS[base as usize];
            while top < words.len() {
                let mut rem = 0;
                for w in &mut words[top..] {
                    let (q, r) = scalar::div_wide(rem, *w, divisor);
                    *w = q;
                    rem = r;
                }
                while top < words.len() && words[top] == 0 {
                    top += 1;
                }

                // Every super-digit but the most significant is zero padded.
                let mut written = 0;
                while rem != 0 || (top < words.len() && written < width) {
                    pos -= 1;
                    self.bytes[pos] = DIGITS[(rem % base as u64) as usize];
                    rem /= base as u64;
                    written += 1;
                }
            }
            if pos == BUF_LEN {
                pos -= 1;
                self.bytes[pos] = b'0';
            }
        }

        if negative {
            pos -= 1;
            self.bytes[pos] = b'-';
        }

        // SAFETY: only ASCII digits and '-' were written to the tail.
        unsafe { str::from_utf8_unchecked(&self.bytes[pos..]) }
    }
}

/// Write the magnitude `words` through a formatter, honoring width, fill,
/// `+` and `#` the way the native integers do.
pub(crate) fn fmt<const N: usize>(
    mut words: [u64; N],
    negative: bool,
    base: u32,
    prefix: &str,
    f: &mut fmt::Formatter,
) -> fmt::Result {
    let mut buf = Buffer::new();
    f.pad_integral(!negative, prefix, buf.format(&mut words, false, base))
}

/// Append the digits of the magnitude `words` to `out`.
#[cfg(feature = "alloc")]
pub(crate) fn append<const N: usize>(
    mut words: [u64; N],
    negative: bool,
    base: u32,
    out: &mut Vec<u8>,
) {
    let mut buf = Buffer::new();
    out.extend_from_slice(buf.format(&mut words, negative, base).as_bytes());
}

#[cfg(feature = "alloc")]
pub(crate) fn to_string<const N: usize>(mut words: [u64; N], negative: bool, base: u32) -> String {
    let mut buf = Buffer::new();
    String::from(buf.format(&mut words, negative, base))
}
