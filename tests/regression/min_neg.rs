use wideint::Int1024;

#[test]
fn test() {
    let min = Int1024::MIN;
    assert_eq!(min.neg(), min);
    assert_eq!(min.abs(), min);
    assert_eq!(min.sign(), -1);
    assert_eq!(min.unsigned_abs().bit_len(), 1024);
}
