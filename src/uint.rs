use crate::error::Error;
use crate::math::{bits, carry, mul, shift};
use core::cmp::Ordering;

/// An unsigned integer of `64 * N` bits.
///
/// The value is stored as `N` words, most significant first. Use the
/// aliases [`Uint128`], [`Uint256`], [`Uint512`] and [`Uint1024`]: division,
/// widening multiplication, the width conversions, text output and the
/// formatting traits are only provided for those widths.
///
/// ```compile_fail
/// let x = wideint::Uint::<17>::ONE;
/// let _ = format!("{}", x);
/// ```
///
/// Arithmetic wraps modulo 2<sup>`64 * N`</sup>.
///
/// [`Uint128`]: crate::Uint128
/// [`Uint256`]: crate::Uint256
/// [`Uint512`]: crate::Uint512
/// [`Uint1024`]: crate::Uint1024
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Uint<const N: usize> {
    words: [u64; N],
}

impl<const N: usize> Uint<N> {
    /// The size of this type in bits.
    pub const BITS: u32 = N as u32 * 64;

    /// The size of this type in words.
    pub const WORDS: usize = N;

    /// The value `0`.
    pub const ZERO: Self = Uint { words: [0; N] };

    /// The value `1`.
    pub const ONE: Self = {
        let mut words = [0; N];
        words[N - 1] = 1;
        Uint { words }
    };

    /// The smallest value, `0`.
    pub const MIN: Self = Self::ZERO;

    /// The largest value, 2<sup>`64 * N`</sup> - 1.
    pub const MAX: Self = Uint {
        words: [u64::MAX; N],
    };

    /// Build a value from its words, most significant first.
    ///
    /// ```
    /// # use wideint::Uint128;
    /// let x = Uint128::from_words([1, 0]);
    /// assert_eq!(x.to_string(), "18446744073709551616");
    /// ```
    #[inline]
    pub const fn from_words(words: [u64; N]) -> Self {
        Uint { words }
    }

    /// The words of the value, most significant first.
    #[inline]
    pub const fn words(self) -> [u64; N] {
        self.words
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

    /// `self * y`, keeping the low `64 * N` bits of the product.
    #[inline]
    pub fn mul(self, y: Self) -> Self {
        self.map2(y, mul::mul)
    }

    /// `0 - self`, wrapping.
    #[inline]
    pub fn neg(self) -> Self {
        self.map1(carry::neg)
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

    /// `self >> n`, shifting in zeros. Distances of [`BITS`](Self::BITS) or
    /// more give zero.
    ///
    /// Runs in time independent of both `self` and `n`.
    #[inline]
    pub fn rsh(self, n: u32) -> Self {
        let n = n.min(Self::BITS);
        self.map1(|x, z| shift::shr(x, n, z))
    }

    /// Number of leading zero bits; [`BITS`](Self::BITS) for zero.
    #[inline]
    pub fn leading_zeros(self) -> u32 {
        bits::leading_zeros(&self.words)
    }

    /// Number of trailing zero bits; [`BITS`](Self::BITS) for zero.
    #[inline]
    pub fn trailing_zeros(self) -> u32 {
        bits::trailing_zeros(&self.words)
    }

    /// Number of bits needed to represent the value; `0` for zero.
    #[inline]
    pub fn bit_len(self) -> u32 {
        bits::bit_length(&self.words)
    }

    /// Whether bit `i` is set, counting from the least significant bit.
    /// Bits at or above [`BITS`](Self::BITS) read as unset.
    #[inline]
    pub fn bit(self, i: u32) -> bool {
        bits::bit(&self.words, i)
    }

    /// `0` for zero, `1` otherwise.
    #[inline]
    pub fn sign(self) -> i32 {
        i32::from(!self.is_zero())
    }

    /// Whether the value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        carry::is_zero(&self.words)
    }

    pub(crate) fn magnitude(&self) -> ([u64; N], bool) {
        (self.words, false)
    }
}

impl<const N: usize> Default for Uint<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> Ord for Uint<N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        carry::compare(&self.words, &other.words)
    }
}

impl<const N: usize> PartialOrd for Uint<N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

forward_binop! {
    Uint:
    Add add, AddAssign add_assign => add;
    Sub sub, SubAssign sub_assign => sub;
    Mul mul, MulAssign mul_assign => mul;
    BitAnd bitand, BitAndAssign bitand_assign => and;
    BitOr bitor, BitOrAssign bitor_assign => or;
    BitXor bitxor, BitXorAssign bitxor_assign => xor;
}

forward_shift!(Uint);

////////////////////////////////////////////////////////////////////////////////

macro_rules! from_unsigned {
    ($($ty:ty)*) => {
        $(
            impl<const N: usize> From<$ty> for Uint<N> {
                #[inline]
                fn from(x: $ty) -> Self {
                    let mut words = [0; N];
                    words[N - 1] = x as u64;
                    Uint { words }
                }
            }
        )*
    };
}

from_unsigned!(u8 u16 u32 u64 usize);

impl<const N: usize> From<u128> for Uint<N> {
    #[inline]
    fn from(x: u128) -> Self {
        let mut words = [0; N];
        for (w, part) in words.iter_mut().rev().zip([x as u64, (x >> 64) as u64]) {
            *w = part;
        }
        Uint { words }
    }
}

impl<const N: usize> TryFrom<Uint<N>> for u64 {
    type Error = Error;

    fn try_from(x: Uint<N>) -> Result<Self, Error> {
        let (high, low) = x.words.split_at(N - 1);
        if carry::is_zero(high) {
            Ok(low[0])
        } else {
            Err(Error::out_of_range())
        }
    }
}

impl<const N: usize> TryFrom<Uint<N>> for u128 {
    type Error = Error;

    fn try_from(x: Uint<N>) -> Result<Self, Error> {
        let (high, low) = x.words.split_at(N.saturating_sub(2));
        if !carry::is_zero(high) {
            return Err(Error::out_of_range());
        }
        Ok(low.iter().fold(0, |acc, &w| (acc << 64) | u128::from(w)))
    }
}
