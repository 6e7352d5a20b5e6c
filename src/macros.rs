/// Implement operator traits for a word-array type by forwarding to its
/// inherent methods of the same meaning.
///
/// Each entry names the operator trait and its method, the compound
/// assignment trait and its method, and the inherent method to call:
///
/// ```ignore
/// forward_binop! {
///     Uint:
///     Add add, AddAssign add_assign => add;
/// }
/// ```
macro_rules! forward_binop {
    ($ty:ident: $($trait:ident $method:ident, $assign:ident $assign_method:ident => $inherent:ident;)*) => {
        $(
            impl<const N: usize> core::ops::$trait for $ty<N> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    $ty::$inherent(self, rhs)
                }
            }

            impl<'a, const N: usize> core::ops::$trait<&'a $ty<N>> for $ty<N> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: &'a Self) -> Self {
                    $ty::$inherent(self, *rhs)
                }
            }

            impl<const N: usize> core::ops::$assign for $ty<N> {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    *self = $ty::$inherent(*self, rhs);
                }
            }
        )*
    };
}

/// Shift operators by a `u32` distance, forwarding to `lsh` and `rsh`, and
/// the `!` operator.
macro_rules! forward_shift {
    ($ty:ident) => {
        impl<const N: usize> core::ops::Shl<u32> for $ty<N> {
            type Output = Self;

            #[inline]
            fn shl(self, n: u32) -> Self {
                self.lsh(n)
            }
        }

        impl<const N: usize> core::ops::Shr<u32> for $ty<N> {
            type Output = Self;

            #[inline]
            fn shr(self, n: u32) -> Self {
                self.rsh(n)
            }
        }

        impl<const N: usize> core::ops::ShlAssign<u32> for $ty<N> {
            #[inline]
            fn shl_assign(&mut self, n: u32) {
                *self = self.lsh(n);
            }
        }

        impl<const N: usize> core::ops::ShrAssign<u32> for $ty<N> {
            #[inline]
            fn shr_assign(&mut self, n: u32) {
                *self = self.rsh(n);
            }
        }

        impl<const N: usize> core::ops::Not for $ty<N> {
            type Output = Self;

            #[inline]
            fn not(self) -> Self {
                $ty::not(self)
            }
        }
    };
}

/// Formatting traits for one concrete width. The type provides
/// `magnitude()`, returning the magnitude words and whether the value is
/// negative.
macro_rules! impl_fmt {
    ($ty:ident $n:literal) => {
        impl core::fmt::Display for $ty<$n> {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                let (words, negative) = self.magnitude();
                crate::text::fmt(words, negative, 10, "", f)
            }
        }

        impl core::fmt::Debug for $ty<$n> {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                core::fmt::Display::fmt(self, f)
            }
        }

        impl_fmt!(@pattern $ty $n, LowerHex 16 "0x");
        impl_fmt!(@pattern $ty $n, Octal 8 "0o");
        impl_fmt!(@pattern $ty $n, Binary 2 "0b");
    };

    // Other bases print the bit pattern, like the native integers.
    (@pattern $ty:ident $n:literal, $trait:ident $base:literal $prefix:literal) => {
        impl core::fmt::$trait for $ty<$n> {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                crate::text::fmt(self.words(), false, $base, $prefix, f)
            }
        }
    };
}
