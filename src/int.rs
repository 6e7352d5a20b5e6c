use crate::error::Error;
use crate::math::{bits, carry, scalar, shift};
use crate::uint::Uint;
use core::cmp::Ordering;

/// A two's-complement signed integer of `64 * N` bits.
///
/// Same layout as [`Uint<N>`]; the most significant word carries the sign.
/// Use the aliases [`Int128`], [`Int256`], [`Int512`] and [`Int1024`]; like
/// [`Uint<N>`], the other widths have no division and no text output.
///
/// Arithmetic wraps modulo 2<sup>`64 * N`</sup>, so `MIN.neg() == MIN`.
///
/// [`Int128`]: crate::Int128
/// [`Int256`]: crate::Int256
/// [`Int512`]: crate::Int512
/// [`Int1024`]: crate::Int1024
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Int<const N: usize> {
    words: [u64; N],
}

impl<const N: usize> Int<N> {
    /// The size of this type in bits.
    pub const BITS: u32 = N as u32 * 64;

    /// The size of this type in words.
    pub const WORDS: usize = N;

    /// The value `0`.
    pub const ZERO: Self = Int { words: [0; N] };

    /// The value `1`.
    pub const ONE: Self = Int::from_unsigned(Uint::ONE);

    /// The value `-1`.
    pub const MINUS_ONE: Self = Int {
        words: [u64::MAX; N],
    };

    /// The smallest value, -2<sup>`64 * N - 1`</sup>.
    pub const MIN: Self = {
        let mut words = [0; N];
        words[0] = 1 << 63;
        Int { words }
    };

    /// The largest value, 2<sup>`64 * N - 1`</sup> - 1.
    pub const MAX: Self = {
        let mut words = [u64::MAX; N];
        words[0] = i64::MAX as u64;
        Int { words }
    };

    /// Build a value from its two's-complement words, most significant first.
    ///
    /// ```
    /// # use wideint::Int128;
    /// let x = Int128::from_words([u64::MAX, u64::MAX]);
    /// assert_eq!(x.to_string(), "-1");
    /// ```
    #[inline]
    pub const fn from_words(words: [u64; N]) -> Self {
        Int { words }
    }

    /// The two's-complement words of the value, most significant first.
    #[inline]
    pub const fn words(self) -> [u64; N] {
        self.words
    }

    #[inline]
    const fn from_unsigned(x: Uint<N>) -> Self {
        Int { words: x.words() }
    }

    /// Reinterpret the bits as unsigned.
    #[inline]
    pub const fn as_unsigned(self) -> Uint<N> {
        Uint::from_words(self.words)
    }

    #[inline]
    fn map2(self, y: Self, f: impl FnOnce(&[u64], &[u64], &mut [u64])) -> Self {
        let mut z = Self::ZERO;
        f(&self.words, &y.words, &mut z.words);
        z
    }

    #[inline]
    fn map1(self, f: impl FnOnce(&[u64], &mut [u64])) -> Self {
        let mut z = Self::ZERO;
        f(&self.words, &mut z.words);
        z
    }

    /// `self + y`, wrapping.
    #[inline]
    pub fn add(self, y: Self) -> Self {
        self.map2(y, |x, y, z| {
            carry::add(x, y, z);
        })
    }

    /// `self - y`, wrapping.
    #[inline]
    pub fn sub(self, y: Self) -> Self {
        self.map2(y, |x, y, z| {
            carry::sub(x, y, z);
        })
    }

    /// `self * y`, wrapping.
    ///
    /// The magnitudes are multiplied as unsigned values and the product is
    /// negated when exactly one operand is negative.
    pub fn mul(self, y: Self) -> Self {
        let negative = self.is_negative() != y.is_negative();
        let product = self.unsigned_abs().mul(y.unsigned_abs());
        Int::from_unsigned(if negative { product.neg() } else { product })
    }

    /// `-self`, wrapping: the negation of [`MIN`](Self::MIN) is `MIN`.
    #[inline]
    pub fn neg(self) -> Self {
        self.map1(carry::neg)
    }

    /// `|self|`, wrapping: the absolute value of [`MIN`](Self::MIN) is `MIN`.
    #[inline]
    pub fn abs(self) -> Self {
        if self.is_negative() {
            self.neg()
        } else {
            self
        }
    }

    /// `|self|` as an unsigned value, exact for every input.
    #[inline]
    pub fn unsigned_abs(self) -> Uint<N> {
        self.abs().as_unsigned()
    }

    /// Bitwise `self & y`.
    #[inline]
    pub fn and(self, y: Self) -> Self {
        self.map2(y, carry::and)
    }

    /// Bitwise `self & !y`.
    #[inline]
    pub fn and_not(self, y: Self) -> Self {
        self.map2(y, carry::and_not)
    }

    /// Bitwise `self | y`.
    #[inline]
    pub fn or(self, y: Self) -> Self {
        self.map2(y, carry::or)
    }

    /// Bitwise `self ^ y`.
    #[inline]
    pub fn xor(self, y: Self) -> Self {
        self.map2(y, carry::xor)
    }

    /// Bitwise `!self`.
    #[inline]
    pub fn not(self) -> Self {
        self.map1(carry::not)
    }

    /// `self << n`. Distances of [`BITS`](Self::BITS) or more give zero.
    ///
    /// Runs in time independent of both `self` and `n`.
    #[inline]
    pub fn lsh(self, n: u32) -> Self {
        let n = n.min(Self::BITS);
        self.map1(|x, z| shift::shl(x, n, z))
    }

    /// `self >> n`, shifting in copies of the sign bit. Distances of
    /// [`BITS`](Self::BITS) or more give `0` or `-1`.
    ///
    /// Runs in time independent of both `self` and `n`.
    #[inline]
    pub fn rsh(self, n: u32) -> Self {
        let n = n.min(Self::BITS);
        self.map1(|x, z| shift::sar(x, n, z))
    }

    /// Number of leading zero bits of the two's-complement pattern.
    #[inline]
    pub fn leading_zeros(self) -> u32 {
        bits::leading_zeros(&self.words)
    }

    /// Number of trailing zero bits; [`BITS`](Self::BITS) for zero.
    #[inline]
    pub fn trailing_zeros(self) -> u32 {
        bits::trailing_zeros(&self.words)
    }

    /// Number of bits of the two's-complement pattern below its leading
    /// zeros; `0` for zero.
    #[inline]
    pub fn bit_len(self) -> u32 {
        bits::bit_length(&self.words)
    }

    /// Whether bit `i` of the two's-complement pattern is set.
    #[inline]
    pub fn bit(self, i: u32) -> bool {
        bits::bit(&self.words, i)
    }

    /// `-1`, `0` or `1` as the value is negative, zero or positive.
    #[inline]
    pub fn sign(self) -> i32 {
        if self.is_negative() {
            -1
        } else {
            i32::from(!self.is_zero())
        }
    }

    /// Whether the value is below zero.
    #[inline]
    pub fn is_negative(self) -> bool {
        scalar::sign_mask(self.words[0]) != 0
    }

    /// Whether the value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        carry::is_zero(&self.words)
    }

    pub(crate) fn magnitude(&self) -> ([u64; N], bool) {
        (self.unsigned_abs().words(), self.is_negative())
    }
}

impl<const N: usize> Uint<N> {
    /// Reinterpret the bits as signed.
    #[inline]
    pub const fn as_signed(self) -> Int<N> {
        Int::from_words(self.words())
    }
}

impl<const N: usize> Default for Int<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> Ord for Int<N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        carry::compare_signed(&self.words, &other.words)
    }
}

impl<const N: usize> PartialOrd for Int<N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> core::ops::Neg for Int<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Int::neg(self)
    }
}

forward_binop! {
    Int:
    Add add, AddAssign add_assign => add;
    Sub sub, SubAssign sub_assign => sub;
    Mul mul, MulAssign mul_assign => mul;
    BitAnd bitand, BitAndAssign bitand_assign => and;
    BitOr bitor, BitOrAssign bitor_assign => or;
    BitXor bitxor, BitXorAssign bitxor_assign => xor;
}

forward_shift!(Int);

////////////////////////////////////////////////////////////////////////////////

macro_rules! from_signed {
    ($($ty:ty)*) => {
        $(
            impl<const N: usize> From<$ty> for Int<N> {
                #[inline]
                fn from(x: $ty) -> Self {
                    Int::from(x as i128)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty)*) => {
        $(
            impl<const N: usize> From<$ty> for Int<N> {
                #[inline]
                fn from(x: $ty) -> Self {
                    Int::from_unsigned(Uint::from(x))
                }
            }
        )*
    };
}

from_signed!(i8 i16 i32 i64 isize);
from_unsigned!(u8 u16 u32 u64 usize);

impl<const N: usize> From<i128> for Int<N> {
    #[inline]
    fn from(x: i128) -> Self {
        let mut words = [scalar::sign_mask((x >> 64) as u64); N];
        for (w, part) in words.iter_mut().rev().zip([x as u64, (x >> 64) as u64]) {
            *w = part;
        }
        Int { words }
    }
}

impl<const N: usize> TryFrom<Int<N>> for i64 {
    type Error = Error;

    fn try_from(x: Int<N>) -> Result<Self, Error> {
        let (high, low) = x.words.split_at(N - 1);
        let fill = scalar::sign_mask(low[0]);
        if high.iter().all(|&w| w == fill) {
            Ok(low[0] as i64)
        } else {
            Err(Error::out_of_range())
        }
    }
}

impl<const N: usize> TryFrom<Int<N>> for i128 {
    type Error = Error;

    fn try_from(x: Int<N>) -> Result<Self, Error> {
        let (high, low) = x.words.split_at(N.saturating_sub(2));
        let fill = scalar::sign_mask(low[0]);
        if !high.iter().all(|&w| w == fill) {
            return Err(Error::out_of_range());
        }
        let init = fill as i64 as i128;
        Ok(low.iter().fold(init, |acc, &w| (acc << 64) | i128::from(w)))
    }
}

impl<const N: usize> TryFrom<Int<N>> for Uint<N> {
    type Error = Error;

    fn try_from(x: Int<N>) -> Result<Self, Error> {
        if x.is_negative() {
            Err(Error::negative())
        } else {
            Ok(x.as_unsigned())
        }
    }
}

impl<const N: usize> TryFrom<Uint<N>> for Int<N> {
    type Error = Error;

    fn try_from(x: Uint<N>) -> Result<Self, Error> {
        let x = x.as_signed();
        if x.is_negative() {
            Err(Error::out_of_range())
        } else {
            Ok(x)
        }
    }
}
