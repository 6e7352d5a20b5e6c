//! The concrete widths, and everything that needs to name a second width or
//! a bounded size: division recurses into the half width, widening
//! multiplication and [`widen`](Uint128::widen) produce the double width, and
//! text output formats into a stack buffer sized for the widest type.

use crate::div::{self, Digit, Split};
use crate::int::Int;
use crate::math::mul;
use crate::uint::Uint;
#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// 128-bit unsigned integer.
pub type Uint128 = Uint<2>;
/// 256-bit unsigned integer.
pub type Uint256 = Uint<4>;
/// 512-bit unsigned integer.
pub type Uint512 = Uint<8>;
/// 1024-bit unsigned integer.
pub type Uint1024 = Uint<16>;

/// 128-bit signed integer.
pub type Int128 = Int<2>;
/// 256-bit signed integer.
pub type Int256 = Int<4>;
/// 512-bit signed integer.
pub type Int512 = Int<8>;
/// 1024-bit signed integer.
pub type Int1024 = Int<16>;

////////////////////////////////////////////////////////////////////////////////

macro_rules! digit {
    ($($n:literal)*) => {
        $(
            impl Digit for Uint<$n> {
                const BITS: u32 = Uint::<$n>::BITS;
                const ZERO: Self = Uint::<$n>::ZERO;
                const ONE: Self = Uint::<$n>::ONE;

                #[inline]
                fn leading_zeros(self) -> u32 {
                    Uint::<$n>::leading_zeros(self)
                }

                #[inline]
                fn shl(self, n: u32) -> Self {
                    self.lsh(n)
                }

                #[inline]
                fn shr(self, n: u32) -> Self {
                    self.rsh(n)
                }

                #[inline]
                fn wrapping_add(self, y: Self) -> Self {
                    Uint::<$n>::add(self, y)
                }

                #[inline]
                fn wrapping_sub(self, y: Self) -> Self {
                    Uint::<$n>::sub(self, y)
                }

                #[inline]
                fn wrapping_mul(self, y: Self) -> Self {
                    Uint::<$n>::mul(self, y)
                }

                #[inline]
                fn div_rem(self, d: Self) -> (Self, Self) {
                    div::div_rem(self, d)
                }

                #[inline]
                fn div_wide(hi: Self, lo: Self, d: Self) -> (Self, Self) {
                    div::div_wide(hi, lo, d)
                }
            }
        )*
    };
}

digit!(2 4 8 16);

////////////////////////////////////////////////////////////////////////////////

impl Uint<2> {
    /// The `(high, low)` halves.
    #[inline]
    pub fn halves(self) -> (u64, u64) {
        let [hi, lo] = self.words();
        (hi, lo)
    }

    /// Join two halves.
    #[inline]
    pub fn from_halves(hi: u64, lo: u64) -> Self {
        Uint::from_words([hi, lo])
    }
}

macro_rules! halves {
    ($($n:literal => $h:literal)*) => {
        $(
            impl Uint<$n> {
                /// The `(high, low)` halves.
                #[inline]
                pub fn halves(self) -> (Uint<$h>, Uint<$h>) {
                    let words = self.words();
                    let (mut hi, mut lo) = ([0; $h], [0; $h]);
                    hi.copy_from_slice(&words[..$h]);
                    lo.copy_from_slice(&words[$h..]);
                    (Uint::<$h>::from_words(hi), Uint::<$h>::from_words(lo))
                }

                /// Join two halves.
                #[inline]
                pub fn from_halves(hi: Uint<$h>, lo: Uint<$h>) -> Self {
                    let mut words = [0; $n];
                    words[..$h].copy_from_slice(&hi.words());
                    words[$h..].copy_from_slice(&lo.words());
                    Uint::from_words(words)
                }
            }
        )*
    };
}

halves!(4 => 2 8 => 4 16 => 8);

macro_rules! split {
    ($($n:literal => $half:ty)*) => {
        $(
            impl Split for Uint<$n> {
                type Half = $half;

                #[inline]
                fn split(self) -> ($half, $half) {
                    self.halves()
                }

                #[inline]
                fn join(hi: $half, lo: $half) -> Self {
                    Self::from_halves(hi, lo)
                }
            }
        )*
    };
}

split!(2 => u64 4 => Uint<2> 8 => Uint<4> 16 => Uint<8>);

////////////////////////////////////////////////////////////////////////////////

macro_rules! division {
    ($($n:literal)*) => {
        $(
            impl Uint<$n> {
                /// `(self / y, self % y)`.
                ///
                /// Not constant time.
                ///
                /// # Panics
                ///
                /// Panics if `y` is zero.
                #[inline]
                pub fn div_mod(self, y: Self) -> (Self, Self) {
                    div::div_rem(self, y)
                }

                /// `self / y`. Panics if `y` is zero.
                #[inline]
                pub fn div(self, y: Self) -> Self {
                    self.div_mod(y).0
                }

                /// `self % y`. Panics if `y` is zero.
                #[inline]
                pub fn modulo(self, y: Self) -> Self {
                    self.div_mod(y).1
                }

                /// Same as [`div_mod`](Self::div_mod): truncating and
                /// Euclidean division agree for unsigned values.
                #[inline]
                pub fn quo_rem(self, y: Self) -> (Self, Self) {
                    self.div_mod(y)
                }

                /// Same as [`div`](Self::div).
                #[inline]
                pub fn quo(self, y: Self) -> Self {
                    self.div(y)
                }

                /// Same as [`modulo`](Self::modulo).
                #[inline]
                pub fn rem(self, y: Self) -> Self {
                    self.modulo(y)
                }

                /// [`div_mod`](Self::div_mod), or `None` if `y` is zero.
                #[inline]
                pub fn checked_div_mod(self, y: Self) -> Option<(Self, Self)> {
                    if y.is_zero() {
                        None
                    } else {
                        Some(self.div_mod(y))
                    }
                }

                /// [`quo_rem`](Self::quo_rem), or `None` if `y` is zero.
                #[inline]
                pub fn checked_quo_rem(self, y: Self) -> Option<(Self, Self)> {
                    self.checked_div_mod(y)
                }

                /// `self / y`, or `None` if `y` is zero.
                #[inline]
                pub fn checked_div(self, y: Self) -> Option<Self> {
                    self.checked_div_mod(y).map(|(q, _)| q)
                }

                /// `self % y`, or `None` if `y` is zero.
                #[inline]
                pub fn checked_rem(self, y: Self) -> Option<Self> {
                    self.checked_div_mod(y).map(|(_, r)| r)
                }
            }

            impl Int<$n> {
                /// Truncating division: `(q, r)` with `q` rounded toward zero
                /// and `r` carrying the sign of `self`, like `/` and `%` on
                /// the native integers. `MIN.quo_rem(-1)` wraps to `(MIN, 0)`.
                ///
                /// Not constant time.
                ///
                /// # Panics
                ///
                /// Panics if `y` is zero.
                pub fn quo_rem(self, y: Self) -> (Self, Self) {
                    let (q, r) = div::div_rem(self.unsigned_abs(), y.unsigned_abs());
                    let q = if self.is_negative() != y.is_negative() { q.neg() } else { q };
                    let r = if self.is_negative() { r.neg() } else { r };
                    (q.as_signed(), r.as_signed())
                }

                /// Truncated `self / y`. Panics if `y` is zero.
                #[inline]
                pub fn quo(self, y: Self) -> Self {
                    self.quo_rem(y).0
                }

                /// Truncated `self % y`, with the sign of `self`. Panics if
                /// `y` is zero.
                #[inline]
                pub fn rem(self, y: Self) -> Self {
                    self.quo_rem(y).1
                }

                /// Euclidean division: `(q, r)` with `self == y * q + r` and
                /// `0 <= r < |y|`.
                ///
                /// ```
                #[doc = concat!("# type T = wideint::Int<", stringify!($n), ">;")]
                /// let (q, r) = T::from(-7i64).div_mod(T::from(2i64));
                /// assert_eq!((q, r), (T::from(-4i64), T::from(1i64)));
                ///
                /// let (q, r) = T::from(-7i64).div_mod(T::from(-2i64));
                /// assert_eq!((q, r), (T::from(4i64), T::from(1i64)));
                /// ```
                ///
                /// # Panics
                ///
                /// Panics if `y` is zero.
                pub fn div_mod(self, y: Self) -> (Self, Self) {
                    let (mut q, mut r) = self.quo_rem(y);
                    if r.is_negative() {
                        if y.is_negative() {
                            q = q.add(Self::ONE);
                            r = r.sub(y);
                        } else {
                            q = q.sub(Self::ONE);
                            r = r.add(y);
                        }
                    }
                    (q, r)
                }

                /// Euclidean `self / y`. Panics if `y` is zero.
                #[inline]
                pub fn div(self, y: Self) -> Self {
                    self.div_mod(y).0
                }

                /// Euclidean `self mod y`, never negative. Panics if `y` is
                /// zero.
                #[inline]
                pub fn modulo(self, y: Self) -> Self {
                    self.div_mod(y).1
                }

                /// [`div_mod`](Self::div_mod), or `None` if `y` is zero.
                #[inline]
                pub fn checked_div_mod(self, y: Self) -> Option<(Self, Self)> {
                    if y.is_zero() {
                        None
                    } else {
                        Some(self.div_mod(y))
                    }
                }

                /// [`quo_rem`](Self::quo_rem), or `None` if `y` is zero.
                #[inline]
                pub fn checked_quo_rem(self, y: Self) -> Option<(Self, Self)> {
                    if y.is_zero() {
                        None
                    } else {
                        Some(self.quo_rem(y))
                    }
                }

                /// Truncated `self / y`, or `None` if `y` is zero.
                #[inline]
                pub fn checked_div(self, y: Self) -> Option<Self> {
                    self.checked_quo_rem(y).map(|(q, _)| q)
                }

                /// Truncated `self % y`, or `None` if `y` is zero.
                #[inline]
                pub fn checked_rem(self, y: Self) -> Option<Self> {
                    self.checked_quo_rem(y).map(|(_, r)| r)
                }
            }

            division!(@ops Uint $n);
            division!(@ops Int $n);
        )*
    };

    // `/` and `%` truncate, like the native integers.
    (@ops $ty:ident $n:literal) => {
        impl core::ops::Div for $ty<$n> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                self.quo(rhs)
            }
        }

        impl core::ops::Rem for $ty<$n> {
            type Output = Self;

            #[inline]
            fn rem(self, rhs: Self) -> Self {
                $ty::<$n>::rem(self, rhs)
            }
        }

        impl core::ops::DivAssign for $ty<$n> {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = self.quo(rhs);
            }
        }

        impl core::ops::RemAssign for $ty<$n> {
            #[inline]
            fn rem_assign(&mut self, rhs: Self) {
                *self = $ty::<$n>::rem(*self, rhs);
            }
        }
    };
}

division!(2 4 8 16);

////////////////////////////////////////////////////////////////////////////////

macro_rules! wide {
    ($($n:literal => $w:literal)*) => {
        $(
            impl Uint<$n> {
                /// The exact double-width product `self * y`.
                ///
                /// ```
                #[doc = concat!("# type T = wideint::Uint<", stringify!($n), ">;")]
                /// let p = T::MAX.mul_wide(T::MAX);
                /// assert_eq!(p.halves(), (T::MAX.sub(T::ONE), T::ONE));
                /// ```
                #[inline]
                pub fn mul_wide(self, y: Self) -> Uint<$w> {
                    let mut z = [0; $w];
                    mul::mul(&self.words(), &y.words(), &mut z);
                    Uint::from_words(z)
                }

                /// Zero-extend to the double width.
                #[inline]
                pub fn widen(self) -> Uint<$w> {
                    Uint::<$w>::from_halves(Self::ZERO, self)
                }
            }

            impl Int<$n> {
                /// The exact double-width product `self * y`.
                pub fn mul_wide(self, y: Self) -> Int<$w> {
                    let negative = self.is_negative() != y.is_negative();
                    let product = self.unsigned_abs().mul_wide(y.unsigned_abs());
                    let product = if negative { product.neg() } else { product };
                    product.as_signed()
                }

                /// Sign-extend to the double width.
                #[inline]
                pub fn widen(self) -> Int<$w> {
                    let fill = if self.is_negative() { Uint::<$n>::MAX } else { Uint::<$n>::ZERO };
                    Uint::<$w>::from_halves(fill, self.as_unsigned()).as_signed()
                }
            }
        )*
    };
}

wide!(2 => 4 4 => 8 8 => 16);

////////////////////////////////////////////////////////////////////////////////

macro_rules! text {
    ($($n:literal)*) => {
        $(
            impl Uint<$n> {
                /// The value in `base` using the digits `0-9a-zA-Z`.
                ///
                /// ```
                #[doc = concat!("# type T = wideint::Uint<", stringify!($n), ">;")]
                /// let x = T::from(255u64);
                /// assert_eq!(x.text(16), "ff");
                /// assert_eq!(x.text(62), "47");
                /// ```
                ///
                /// # Panics
                ///
                /// Panics if `base` is not in `2..=62`.
                #[cfg(feature = "alloc")]
                pub fn text(self, base: u32) -> String {
                    crate::text::to_string(self.words(), false, base)
                }

                /// Append [`text(base)`](Self::text) to `buf` and return the
                /// extended buffer.
                ///
                /// # Panics
                ///
                /// Panics if `base` is not in `2..=62`.
                #[cfg(feature = "alloc")]
                pub fn append(self, mut buf: Vec<u8>, base: u32) -> Vec<u8> {
                    crate::text::append(self.words(), false, base, &mut buf);
                    buf
                }

                /// Append the base-10 text to `buf` and return the extended
                /// buffer.
                #[cfg(feature = "alloc")]
                pub fn append_text(self, buf: Vec<u8>) -> Vec<u8> {
                    self.append(buf, 10)
                }
            }

            impl Int<$n> {
                /// The value in `base` using the digits `0-9a-zA-Z`, with a
                /// leading `-` if negative.
                ///
                /// ```
                #[doc = concat!("# type T = wideint::Int<", stringify!($n), ">;")]
                /// assert_eq!(T::from(-255i64).text(16), "-ff");
                /// ```
                ///
                /// # Panics
                ///
                /// Panics if `base` is not in `2..=62`.
                #[cfg(feature = "alloc")]
                pub fn text(self, base: u32) -> String {
                    let (words, negative) = self.magnitude();
                    crate::text::to_string(words, negative, base)
                }

                /// Append [`text(base)`](Self::text) to `buf` and return the
                /// extended buffer.
                ///
                /// # Panics
                ///
                /// Panics if `base` is not in `2..=62`.
                #[cfg(feature = "alloc")]
                pub fn append(self, mut buf: Vec<u8>, base: u32) -> Vec<u8> {
                    let (words, negative) = self.magnitude();
                    crate::text::append(words, negative, base, &mut buf);
                    buf
                }

                /// Append the base-10 text to `buf` and return the extended
                /// buffer.
                #[cfg(feature = "alloc")]
                pub fn append_text(self, buf: Vec<u8>) -> Vec<u8> {
                    self.append(buf, 10)
                }
            }

            impl_fmt!(Uint $n);
            impl_fmt!(Int $n);
        )*
    };
}

text!(2 4 8 16);

////////////////////////////////////////////////////////////////////////////////
