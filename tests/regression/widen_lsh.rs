use wideint::{Uint256, Uint512};

// Widening then shifting left must keep the bits a truncated shift drops.
#[test]
fn test() {
    let x = Uint256::from_words([0, 0, 0, 1]);
    let wide = x.widen().lsh(300);
    assert_eq!(wide, Uint512::ONE.lsh(300));
    assert_eq!(x.lsh(300), Uint256::ZERO);
    assert_eq!(wide.halves().0, Uint256::ONE.lsh(44));
}
