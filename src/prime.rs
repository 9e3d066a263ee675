// Probabilistic primality testing, used to confirm recovered RSA factors.

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};

const MILLER_RABIN_ROUNDS: u32 = 16;

const SMALL_ODD_PRIMES: [u64; 53] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

pub fn is_likely_prime(candidate_prime: &BigUint, rng: &mut impl RandBigInt) -> bool {
    let two = BigUint::from(2u64);
    if candidate_prime < &two {
        return false;
    }
    if candidate_prime == &two {
        return true;
    }
    if (candidate_prime % &two).is_zero() {
        return false;
    }

    for small_prime in SMALL_ODD_PRIMES {
        let x = BigUint::from(small_prime);
        if candidate_prime == &x {
            return true;
        }
        if (candidate_prime % &x).is_zero() {
            return false;
        }
    }

    miller_rabin(candidate_prime, MILLER_RABIN_ROUNDS, rng)
}

fn miller_rabin(candidate_prime: &BigUint, n_rounds: u32, rng: &mut impl RandBigInt) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u64);
    let n_minus_one = candidate_prime - &one;

    // n - 1 = d * 2^r with d odd.
    let r = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> r;

    'witness: for _ in 0..n_rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, candidate_prime);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..r {
            x = x.modpow(&two, candidate_prime);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_traits::Num;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    use crate::config::{COURSEWORK_MODULUS, COURSEWORK_PRIME_P, COURSEWORK_PRIME_Q};

    fn decimal(digits: &str) -> BigUint {
        BigUint::from_str_radix(digits, 10).unwrap()
    }

    #[rstest]
    #[case(BigUint::from(2u64))]
    #[case(BigUint::from(251u64))]
    #[case(BigUint::from(5003u64))]
    #[case(BigUint::from(65537u64))]
    #[case(BigUint::from(1_000_000_007u64))]
    #[case(decimal(COURSEWORK_PRIME_P))]
    #[case(decimal(COURSEWORK_PRIME_Q))]
    fn recovered_factors_are_recognised_as_prime(#[case] prime: BigUint) {
        let mut rng = StdRng::from_seed([101; 32]);

        assert!(is_likely_prime(&prime, &mut rng));
    }

    #[rstest]
    #[case(BigUint::from(0u64))]
    #[case(BigUint::from(1u64))]
    #[case(BigUint::from(1024u64))]
    #[case(BigUint::from(35021u64))]
    #[case(BigUint::from(561u64))]
    #[case(BigUint::from(1_000_000_016_000_000_063u64))]
    #[case(decimal(COURSEWORK_MODULUS))]
    fn moduli_and_other_composites_are_rejected(#[case] composite: BigUint) {
        let mut rng = StdRng::from_seed([101; 32]);

        assert!(!is_likely_prime(&composite, &mut rng));
    }
}
