#![no_main]

use libfuzzer_sys::fuzz_target;
use wideint::Int256;

fn digit(b: u8) -> u64 {
    match b {
        b'0'..=b'9' => (b - b'0') as u64,
        b'a'..=b'z' => (b - b'a' + 10) as u64,
        _ => (b - b'A' + 36) as u64,
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 33 {
        return;
    }
    let base = 2 + u32::from(data[0]) % 61;
    let mut words = [0; 4];
    for (w, chunk) in words.iter_mut().zip(data[1..33].chunks(8)) {
        *w = u64::from_be_bytes(chunk.try_into().unwrap());
    }
    let x = Int256::from_words(words);

    // Parse the text back with Horner's rule, wrapping like the type does.
    let text = x.text(base);
    let digits = text.strip_prefix('-').unwrap_or(&text);
    let mut y = Int256::ZERO;
    for b in digits.bytes() {
        y = y.mul(Int256::from(base)).add(Int256::from(digit(b)));
    }
    if text.starts_with('-') {
        y = y.neg();
    }
    assert_eq!(x, y);
});
