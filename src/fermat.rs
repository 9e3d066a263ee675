// Fermat factorization of an RSA modulus with close prime factors.
//
// Write n = a^2 - b^2 = (a + b)(a - b). When p and q are close together, a is
// the first integer above sqrt(n), and a^2 - n is already a perfect square.
// Only that single step is attempted: if |p - q| < (64n)^(1/4) it is
// guaranteed to succeed, otherwise the factors are too far apart and no
// factorization is returned.

use num_bigint::BigUint;
use num_traits::One;

/// The values computed by one step of Fermat's method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FermatStep {
    pub a: BigUint,
    pub s: BigUint,
    /// `sqrt(s)`, if `s` is a perfect square.
    pub b: Option<BigUint>,
}

impl FermatStep {
    pub fn new(n: &BigUint) -> Self {
        // n is not a perfect square, so floor(sqrt(n)) + 1 is the smallest a
        // with a^2 > n.
        let a = n.sqrt() + BigUint::one();
        let s = &a * &a - n;
        let root = s.sqrt();
        let b = (&root * &root == s).then_some(root);
        Self { a, s, b }
    }

    /// The factors `(p, q)` with `p >= q`, unless this step found none or
    /// only the trivial split `n * 1`.
    pub fn factors(&self) -> Option<(BigUint, BigUint)> {
        let b = self.b.as_ref()?;
        let p = &self.a + b;
        let q = &self.a - b;
        if q <= BigUint::one() {
            return None;
        }
        Some((p, q))
    }
}

/// (64n)^(1/4), rounded down.
pub fn fermat_bound(n: &BigUint) -> BigUint {
    (n * BigUint::from(64u64)).sqrt().sqrt()
}

pub fn gap_bound_holds(n: &BigUint, gap_bound: &BigUint) -> bool {
    gap_bound < &fermat_bound(n)
}

pub fn factor_modulus(n: &BigUint, gap_bound: Option<&BigUint>) -> Option<(BigUint, BigUint)> {
    if let Some(gap_bound) = gap_bound {
        if gap_bound_holds(n, gap_bound) {
            log::info!("|p - q| < {gap_bound} is within the (64n)^1/4 bound");
        } else {
            log::warn!(
                "|p - q| < {gap_bound} is not within the (64n)^1/4 bound of {}",
                fermat_bound(n)
            );
        }
    }

    let step = FermatStep::new(n);
    log::debug!("a = {}, s = {}", step.a, step.s);
    let factors = step.factors();
    if factors.is_none() {
        log::debug!("s is not the square of an integer larger than 1");
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_traits::Num;
    use rstest::rstest;

    use crate::config::{COURSEWORK_MODULUS, COURSEWORK_PRIME_P, COURSEWORK_PRIME_Q};

    #[rstest]
    #[case(7, 5)]
    #[case(103, 101)]
    #[case(65537, 65521)]
    #[case(1_000_000_009, 1_000_000_007)]
    fn factor_modulus_recovers_close_primes(#[case] p: u64, #[case] q: u64) {
        let n = BigUint::from(p) * BigUint::from(q);

        let factors = factor_modulus(&n, None);

        assert_eq!(factors, Some((BigUint::from(p), BigUint::from(q))));
    }

    #[rstest]
    #[case(7, 5003)]
    #[case(3, 1_000_003)]
    fn factor_modulus_signals_not_found_for_distant_primes(#[case] p: u64, #[case] q: u64) {
        let n = BigUint::from(p) * BigUint::from(q);

        assert_eq!(factor_modulus(&n, None), None);
    }

    #[rstest]
    #[case(103, 101, 1_000_000)]
    #[case(7, 5, 100)]
    fn factor_modulus_reports_but_does_not_enforce_gap_bound(
        #[case] p: u64,
        #[case] q: u64,
        #[case] bound: u64,
    ) {
        let n = BigUint::from(p) * BigUint::from(q);
        let bound = BigUint::from(bound);

        assert!(!gap_bound_holds(&n, &bound));
        assert_eq!(
            factor_modulus(&n, Some(&bound)),
            Some((BigUint::from(p), BigUint::from(q)))
        );
    }

    #[test]
    fn factor_modulus_does_not_split_a_prime_into_itself_and_one() {
        assert_eq!(factor_modulus(&BigUint::from(3u64), None), None);
    }

    #[test]
    fn fermat_step_exposes_intermediate_values() {
        // 35021 = 7 * 5003: a = 188, s = 188^2 - 35021 = 323.
        let step = FermatStep::new(&BigUint::from(35021u64));

        assert_eq!(step.a, BigUint::from(188u64));
        assert_eq!(step.s, BigUint::from(323u64));
        assert_eq!(step.b, None);
    }

    #[test]
    fn factor_modulus_recovers_coursework_primes() {
        let n = BigUint::from_str_radix(COURSEWORK_MODULUS, 10).unwrap();
        let p = BigUint::from_str_radix(COURSEWORK_PRIME_P, 10).unwrap();
        let q = BigUint::from_str_radix(COURSEWORK_PRIME_Q, 10).unwrap();

        let step = FermatStep::new(&n);
        let factors = factor_modulus(&n, Some(&BigUint::from(10_000u64)));

        assert_eq!(step.b, Some(BigUint::from(153u64)));
        assert_eq!(factors, Some((p.clone(), q.clone())));
        assert_eq!(p * q, n);
    }

    #[rstest]
    #[case(10_000, true)]
    #[case(1_000_000_000, false)]
    fn gap_bound_is_checked_against_fourth_root(#[case] bound: u64, #[case] holds: bool) {
        // (64 * 10^30)^(1/4) = 89442719.
        let n = BigUint::from(10u64).pow(30);

        assert_eq!(fermat_bound(&n), BigUint::from(89_442_719u64));
        assert_eq!(gap_bound_holds(&n, &BigUint::from(bound)), holds);
    }
}
