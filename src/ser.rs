//! Serialize every integer as its base-10 string.
//!
//! Self-describing formats have no number type wide enough, and a string
//! keeps the value exact, the way arbitrary precision numbers are written
//! out by `serde_json`.

use crate::int::Int;
use crate::text::Buffer;
use crate::uint::Uint;
use serde::{Serialize, Serializer};

macro_rules! serialize_text {
    ($($ty:ident $n:literal)*) => {
        $(
            impl Serialize for $ty<$n> {
                #[inline]
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    let (mut words, negative) = self.magnitude();
                    let mut buf = Buffer::new();
                    serializer.serialize_str(buf.format(&mut words, negative, 10))
                }
            }
        )*
    };
}

serialize_text!(Uint 2 Uint 4 Uint 8 Uint 16 Int 2 Int 4 Int 8 Int 16);
