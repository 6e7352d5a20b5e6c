#![no_main]

use libfuzzer_sys::fuzz_target;
use wideint::{Int512, Uint512};

fn words(data: &[u8]) -> [u64; 8] {
    let mut words = [0; 8];
    for (w, chunk) in words.iter_mut().zip(data.chunks(8)) {
        let mut bytes = [0; 8];
        bytes[..chunk.len()].copy_from_slice(chunk);
        *w = u64::from_be_bytes(bytes);
    }
    words
}

fuzz_target!(|data: &[u8]| {
    let (a, b) = data.split_at(data.len() / 2);
    let (a, b) = (Uint512::from_words(words(a)), Uint512::from_words(words(b)));

    if let Some((q, r)) = a.checked_div_mod(b) {
        assert_eq!(b.mul(q).add(r), a);
        assert!(r < b);
    }

    let (a, b): (Int512, Int512) = (a.as_signed(), b.as_signed());
    if let Some((q, r)) = a.checked_div_mod(b) {
        assert_eq!(b.mul(q).add(r), a);
        assert!(!r.is_negative() && r.as_unsigned() < b.unsigned_abs());
    }
    if let Some((q, r)) = a.checked_quo_rem(b) {
        assert_eq!(b.mul(q).add(r), a);
        assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }
});
