//! When converting between integer types goes wrong.

use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::error;

/// This type represents the errors that can occur when converting a value
/// into a type that cannot hold it.
///
/// Arithmetic never produces an `Error`: it wraps on overflow, and dividing
/// by zero panics like it does for the native integers.
pub struct Error {
    code: ErrorCode,
}

/// Alias for a `Result` with the error type `wideint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// Returns true if the value did not fit because it was negative.
    pub fn is_negative(&self) -> bool {
        self.code == ErrorCode::NegativeNumber
    }

    #[cold]
    pub(crate) fn out_of_range() -> Self {
        Error {
            code: ErrorCode::NumberOutOfRange,
        }
    }

    #[cold]
    pub(crate) fn negative() -> Self {
        Error {
            code: ErrorCode::NegativeNumber,
        }
    }
}

/// The cause of an [`Error`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The value is too large in magnitude for the target type.
    NumberOutOfRange,

    /// The value is negative and the target type is unsigned.
    NegativeNumber,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::NumberOutOfRange => f.write_str("number out of range"),
            ErrorCode::NegativeNumber => f.write_str("negative number for an unsigned type"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.code, f)
    }
}

// Debug output carries the message; `unwrap` on a failed conversion prints it.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error(\"{}\")", self.code)
    }
}
