// Break RSA whose primes are too close together.

use std::io::Write;

use crate::{
    bytes_to_hex, fermat_bound, gap_bound_holds, is_likely_prime, private_exponent, rsa_decrypt,
    rsa_encrypt, Error, FermatConfig, FermatStep, Result,
};

use super::{print_bool, Demonstration, Steps};

pub struct FermatRsaDemo {
    config: FermatConfig,
}

impl FermatRsaDemo {
    pub fn new(config: FermatConfig) -> Self {
        Self { config }
    }
}

impl Demonstration for FermatRsaDemo {
    fn name(&self) -> &'static str {
        "rsa-fermat"
    }

    fn description(&self) -> &'static str {
        "Factor an RSA modulus with close primes and decrypt its ciphertext"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let FermatConfig {
            modulus: n,
            ciphertext,
            public_exponent: e,
            known_gap_bound,
        } = &self.config;
        let mut steps = Steps::new(self.name());

        steps.begin(out, "Get p and q with one step of Fermat's method")?;
        writeln!(out, "n = {}", n)?;
        writeln!(out)?;
        writeln!(out, "Assumption 1. Does |p - q| < (64n)^1/4 hold?")?;
        writeln!(out, "(64n)^1/4 = {}", fermat_bound(n))?;
        print_bool(out, gap_bound_holds(n, known_gap_bound))?;
        writeln!(out)?;

        let step = FermatStep::new(n);
        writeln!(out, "a = {}", step.a)?;
        writeln!(out, "s = {}", step.s)?;
        writeln!(out)?;
        writeln!(out, "Assumption 2. Is s the square of some integer?")?;
        print_bool(out, step.b.is_some())?;
        let (p, q) = step.factors().ok_or(Error::FactorsNotFound)?;
        if let Some(b) = &step.b {
            writeln!(out, "b = {}", b)?;
        }
        writeln!(out)?;
        writeln!(out, "p = {}", p)?;
        writeln!(out, "q = {}", q)?;
        writeln!(out)?;
        let mut rng = rand::thread_rng();
        writeln!(out, "Are p and q prime?")?;
        print_bool(
            out,
            is_likely_prime(&p, &mut rng) && is_likely_prime(&q, &mut rng),
        )?;

        steps.begin(out, "Find private exponent d = e^-1 mod (p-1)(q-1)")?;
        let d = private_exponent(&p, &q, e)?;
        writeln!(out, "d = {}", d)?;

        steps.begin(out, "Compute plaintext = ciphertext^d mod n")?;
        let plaintext = rsa_decrypt(ciphertext, &d, n);
        writeln!(out, "Decrypted plaintext = {}", plaintext)?;
        writeln!(out, "As bytes = {}", bytes_to_hex(&plaintext.to_bytes_be()))?;

        steps.begin(out, "Confirm that re-encrypting the plaintext yields the ciphertext")?;
        let round_trips = print_bool(out, &rsa_encrypt(&plaintext, e, n) == ciphertext)?;
        log::info!("RSA round trip {}", if round_trips { "succeeded" } else { "failed" });
        Ok(())
    }
}
