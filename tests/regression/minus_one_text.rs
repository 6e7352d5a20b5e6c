#![cfg(feature = "alloc")]

use wideint::Int128;

#[test]
fn test() {
    let x = Int128::from_words([0xFFFF_FFFF_FFFF_FFFF, 0xFFFF_FFFF_FFFF_FFFF]);
    assert_eq!(x.text(10), "-1");
    assert_eq!(x.to_string(), "-1");
}
