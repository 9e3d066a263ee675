// Textbook RSA: no padding, no blinding.

use num_bigint::BigUint;
use num_traits::One;

use crate::{Error, Result};

pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// d = e^-1 mod (p - 1)(q - 1)
pub fn private_exponent(p: &BigUint, q: &BigUint, e: &BigUint) -> Result<BigUint> {
    let one = BigUint::one();
    for factor in [p, q] {
        if factor <= &one {
            return Err(Error::DegenerateFactor(factor.to_string()));
        }
    }
    let totient = (p - &one) * (q - &one);
    // None whenever gcd(e, totient) != 1.
    e.modinv(&totient).ok_or_else(|| Error::NotInvertible {
        e: e.to_string(),
        modulus: totient.to_string(),
    })
}

pub fn rsa_encrypt(plaintext: &BigUint, e: &BigUint, n: &BigUint) -> BigUint {
    plaintext.modpow(e, n)
}

pub fn rsa_decrypt(ciphertext: &BigUint, d: &BigUint, n: &BigUint) -> BigUint {
    ciphertext.modpow(d, n)
}
