#![allow(dead_code)]

use num_bigint::{BigInt, BigUint, RandomBits};
use num_traits::{One, Zero};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use wideint::{Int, Uint};

pub const ROUNDS: usize = 500;

pub fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0)
}

pub fn modulus(bits: u32) -> BigInt {
    BigInt::one() << bits as usize
}

pub fn to_biguint<const N: usize>(x: Uint<N>) -> BigUint {
    x.words()
        .iter()
        .fold(BigUint::zero(), |acc, &w| (acc << 64usize) | BigUint::from(w))
}

pub fn to_bigint<const N: usize>(x: Int<N>) -> BigInt {
    let u = BigInt::from(to_biguint(x.as_unsigned()));
    if x.is_negative() {
        u - modulus(Int::<N>::BITS)
    } else {
        u
    }
}

/// The value modulo 2^(64 * N).
pub fn from_biguint<const N: usize>(x: &BigUint) -> Uint<N> {
    let mut words = [0; N];
    for (w, digit) in words.iter_mut().rev().zip(x.to_u64_digits()) {
        *w = digit;
    }
    Uint::from_words(words)
}

/// The value modulo 2^(64 * N), as two's complement.
pub fn from_bigint<const N: usize>(x: &BigInt) -> Int<N> {
    let m = modulus(Uint::<N>::BITS);
    let r = ((x % &m) + &m) % &m;
    from_biguint::<N>(&r.to_biguint().unwrap()).as_signed()
}

/// A value with a random number of significant bits, so that short and long
/// operands both show up. Every so often one of the extreme values.
pub fn random_uint<const N: usize>(rng: &mut ChaCha20Rng) -> Uint<N> {
    match rng.gen_range(0..16) {
        0 => Uint::ZERO,
        1 => Uint::ONE,
        2 => Uint::MAX,
        3 => Uint::ONE.lsh(rng.gen_range(0..Uint::<N>::BITS)),
        _ => {
            let bits = rng.gen_range(1..=Uint::<N>::BITS) as u64;
            let x: BigUint = rng.sample(RandomBits::new(bits));
            from_biguint(&x)
        }
    }
}

pub fn random_int<const N: usize>(rng: &mut ChaCha20Rng) -> Int<N> {
    match rng.gen_range(0..16) {
        0 => Int::MIN,
        1 => Int::MAX,
        2 => Int::MINUS_ONE,
        _ => {
            let x = random_uint::<N>(rng).as_signed();
            if rng.gen() {
                x.neg()
            } else {
                x
            }
        }
    }
}

/// Parse digits in any base up to 62 with the `0-9a-zA-Z` alphabet.
pub fn parse_digits(text: &str, base: u32) -> BigInt {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    assert!(!digits.is_empty());
    let mut x = BigInt::zero();
    for b in digits.bytes() {
        let d = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'z' => b - b'a' + 10,
            b'A'..=b'Z' => b - b'A' + 36,
            _ => panic!("unexpected digit {:?} in {:?}", b as char, text),
        } as u32;
        assert!(d < base, "digit {} out of range for base {}", d, base);
        x = x * base + d;
    }
    if negative {
        -x
    } else {
        x
    }
}
