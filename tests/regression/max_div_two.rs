use wideint::Uint512;

#[test]
fn test() {
    let two = Uint512::from_words([0, 0, 0, 0, 0, 0, 0, 2]);
    let (q, r) = Uint512::MAX.div_mod(two);
    assert_eq!(q, Uint512::MAX.rsh(1));
    assert_eq!(q.words()[0], 0x7FFF_FFFF_FFFF_FFFF);
    assert_eq!(r, Uint512::ONE);
}
