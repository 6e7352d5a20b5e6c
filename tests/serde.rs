#![cfg(feature = "serde")]

use serde_derive::Serialize;
use serde_json::json;
use wideint::{Int1024, Int128, Uint256, Uint512};

#[derive(Serialize)]
struct Balance {
    account: u32,
    amount: Uint256,
    delta: Int128,
}

#[test]
fn integers_serialize_as_decimal_strings() {
    assert_eq!(serde_json::to_string(&Uint256::ZERO).unwrap(), "\"0\"");
    assert_eq!(
        serde_json::to_string(&Uint512::MAX.rsh(448)).unwrap(),
        "\"18446744073709551615\"",
    );
    assert_eq!(serde_json::to_string(&Int128::MINUS_ONE).unwrap(), "\"-1\"");

    let min = serde_json::to_value(Int1024::MIN).unwrap();
    assert_eq!(min, json!(Int1024::MIN.to_string()));
}

#[test]
fn nested_in_derived_struct() {
    let balance = Balance {
        account: 7,
        amount: Uint256::ONE.lsh(128),
        delta: Int128::from(-5i64),
    };
    assert_eq!(
        serde_json::to_value(&balance).unwrap(),
        json!({
            "account": 7,
            "amount": "340282366920938463463374607431768211456",
            "delta": "-5",
        }),
    );
}
