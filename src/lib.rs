//! # wideint
//!
//! Fixed-width signed and unsigned integers of 128, 256, 512 and 1024 bits.
//!
//! Every type is a plain array of 64-bit words, most significant word first,
//! with the same wrapping semantics as Rust's native integers: addition,
//! subtraction, multiplication and negation are performed modulo 2<sup>W</sup>
//! and never signal overflow.
//!
//! ```
//! use wideint::{Int128, Uint128, Uint512};
//!
//! let a = Uint128::from_words([0, 1]);
//! let b = Uint128::from_words([0, u64::MAX]);
//! assert_eq!(a.add(b), Uint128::from_words([1, 0]));
//!
//! assert_eq!(Int128::from(-1i64).to_string(), "-1");
//!
//! let (q, r) = Uint512::MAX.div_mod(Uint512::from(2u64));
//! assert_eq!(q, Uint512::MAX.rsh(1));
//! assert_eq!(r, Uint512::ONE);
//! ```
//!
//! # Division
//!
//! Signed types offer two families of division:
//!
//! - **Euclidean** [`div`], [`modulo`], [`div_mod`]: the remainder is always
//!   non-negative and smaller than the divisor's magnitude.
//! - **Truncating** [`quo`], [`rem`], [`quo_rem`]: the quotient is rounded
//!   toward zero, like the `/` and `%` operators on native integers.
//!
//! Dividing by zero panics, exactly like the native integer types.
//!
//! [`div`]: Int256::div
//! [`modulo`]: Int256::modulo
//! [`div_mod`]: Int256::div_mod
//! [`quo`]: Int256::quo
//! [`rem`]: Int256::rem
//! [`quo_rem`]: Int256::quo_rem
//!
//! # Timing
//!
//! Addition, subtraction, negation and both shifts execute in time
//! independent of their operands, shift distance included. Multiplication
//! and division do not: division runs data-dependent correction loops and
//! must not be used on secret values.
//!
//! # Text
//!
//! Values convert to text in any base from 2 to 62 using the digits `0-9`,
//! `a-z`, `A-Z`. [`Display`] writes base 10 without allocating; with the
//! `alloc` feature `text`, `append` and `append_text` produce owned output.
//! Parsing text back into integers is not supported.
//!
//! [`Display`]: core::fmt::Display

#![doc(html_root_url = "https://docs.rs/wideint/0.1.0")]
#![deny(clippy::all, clippy::pedantic)]
// Ignored clippy lints
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::many_single_char_names,
    clippy::needless_range_loop,
    clippy::should_implement_trait,
    clippy::unreadable_literal
)]
// Ignored clippy_pedantic lints
#![allow(
    clippy::return_self_not_must_use,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::inline_always
)]
#![deny(missing_docs)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "serde")]
extern crate serde_core as serde;

#[macro_use]
mod macros;

pub mod error;

mod div;
mod int;
mod math;
#[cfg(feature = "serde")]
mod ser;
mod text;
mod uint;
mod widths;

#[doc(inline)]
pub use crate::error::{Error, Result};
pub use crate::int::Int;
pub use crate::uint::Uint;
pub use crate::widths::{Int1024, Int128, Int256, Int512, Uint1024, Uint128, Uint256, Uint512};
