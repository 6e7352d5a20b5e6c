use wideint::{Int1024, Int128, Int256, Int512, Uint1024, Uint128, Uint256, Uint512};

macro_rules! check {
    ($($uint:ident $int:ident $bits:literal;)*) => {
        $(
            assert_eq!(format!("{}", $uint::ONE), "1");
            assert_eq!(format!("{:?}", $int::MINUS_ONE), "-1");
            assert_eq!(format!("{:b}", $uint::MAX).len(), $bits);
            assert_eq!(format!("{:x}", $int::MIN).len(), $bits / 4);
            assert_eq!(format!("{:o}", $uint::ONE.lsh($bits - 1)).len(), ($bits + 2) / 3);
            assert_eq!(
                format!("{}", $int::MIN),
                format!("-{}", $int::MIN.unsigned_abs()),
            );
        )*
    };
}

#[test]
fn test() {
    check! {
        Uint128 Int128 128;
        Uint256 Int256 256;
        Uint512 Int512 512;
        Uint1024 Int1024 1024;
    }
}
