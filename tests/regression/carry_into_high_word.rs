use wideint::Uint128;

#[test]
fn test() {
    let a = Uint128::from_words([0, 1]);
    let b = Uint128::from_words([0, 0xFFFF_FFFF_FFFF_FFFF]);
    assert_eq!(a.add(b), Uint128::from_words([1, 0]));
}
