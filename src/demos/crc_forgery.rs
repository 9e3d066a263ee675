// Forge WEP frames by exploiting the affine structure of CRC32.

use std::io::Write;

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    affine_constant, affine_constant_for_len, affine_constant_is_invariant, bytes_to_hex, crc32,
    flip_bit, forge_frame, forge_with_payload_delta, random_keystream, wep_decrypt, wep_encrypt,
    xor, xor_many, Result, WepConfig, WepFrame,
};

use super::{print_bool, Demonstration, Steps};

const INVARIANCE_SAMPLES: usize = 1000;

pub struct CrcForgeryDemo {
    config: WepConfig,
}

impl CrcForgeryDemo {
    pub fn new(config: WepConfig) -> Self {
        Self { config }
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Demonstration for CrcForgeryDemo {
    fn name(&self) -> &'static str {
        "wep-crc32"
    }

    fn description(&self) -> &'static str {
        "Rewrite WEP frames without the key by exploiting CRC32's linearity"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let m = self.config.message.as_bytes();
        let m2 = self.config.replacement.as_bytes();
        let mut rng = self.rng();
        let mut steps = Steps::new(self.name());

        steps.begin(out, "Show the (affine) XOR property of CRC32")?;
        let crc_const = affine_constant(m, m2)?;
        writeln!(out, "XOR constant: {}", bytes_to_hex(&crc_const))?;
        let crc_then_xor = xor_many(&crc32(m), &crc32(m2), &[&crc_const])?;
        writeln!(out, "{}", bytes_to_hex(&crc_then_xor))?;
        let xor_then_crc = crc32(&xor(m, m2)?);
        writeln!(out, "{}", bytes_to_hex(&xor_then_crc))?;
        writeln!(out)?;
        writeln!(out, "Does CRC then XOR == XOR then CRC?")?;
        print_bool(out, crc_then_xor == xor_then_crc)?;
        writeln!(out, "Is the constant the CRC of {} zero bytes?", m.len())?;
        print_bool(out, crc_const == affine_constant_for_len(m.len()))?;
        writeln!(
            out,
            "Is the constant the same for {} random pairs?",
            INVARIANCE_SAMPLES
        )?;
        print_bool(
            out,
            affine_constant_is_invariant(m.len(), INVARIANCE_SAMPLES, &mut rng),
        )?;

        steps.begin(out, "Modify a checksum")?;
        let x = b"attack at dawn";
        let y = b"attack at noon";
        let (lx, ly) = (crc32(x), crc32(y));
        let d = xor(x, y)?;
        let ld = xor(&lx, &ly)?;
        writeln!(out, "  X: {}", String::from_utf8_lossy(x))?;
        writeln!(out, "+ Δ: {}", bytes_to_hex(&d))?;
        writeln!(out, "= X XOR Δ: {}", String::from_utf8_lossy(&xor(x, &d)?))?;
        writeln!(out, "=       Y: {}", String::from_utf8_lossy(y))?;
        writeln!(out)?;
        writeln!(out, "  L(X): {}", bytes_to_hex(&lx))?;
        writeln!(out, "+ L(Δ): {}", bytes_to_hex(&ld))?;
        writeln!(out, "= L(X) XOR L(Δ): {}", bytes_to_hex(&xor(&lx, &ld)?))?;
        writeln!(out, "=          L(Y): {}", bytes_to_hex(&ly))?;

        steps.begin(
            out,
            "Modify packet without key, without plaintext (and without detection)",
        )?;
        let keystream = random_keystream(self.config.keystream_len, &mut rng);
        let ciphertext = wep_encrypt(m, &keystream)?;
        print_encryption(out, m, &ciphertext)?;
        let mut payload_delta = vec![0u8; m.len()];
        if let Some(first) = payload_delta.first_mut() {
            *first = 0b0000_0100;
        }
        let forged = forge_with_payload_delta(&ciphertext, &payload_delta)?;
        print_frame(out, &wep_decrypt(&forged, &keystream)?)?;

        steps.begin(
            out,
            "Modify packet to chosen plaintext without key (and without detection)",
        )?;
        let keystream = random_keystream(self.config.keystream_len, &mut rng);
        let ciphertext = wep_encrypt(m, &keystream)?;
        print_encryption(out, m, &ciphertext)?;
        let forged = forge_frame(&ciphertext, m, m2)?;
        print_frame(out, &wep_decrypt(&forged, &keystream)?)?;

        steps.begin(out, "Flip a single bit without fixing the checksum")?;
        let tampered = flip_bit(&ciphertext, 0)?;
        let frame = wep_decrypt(&tampered, &keystream)?;
        print_frame(out, &frame)?;
        if !frame.is_valid() {
            log::debug!("tampered frame rejected by its ICV");
        }
        Ok(())
    }
}

fn print_encryption(out: &mut dyn Write, plaintext: &[u8], ciphertext: &[u8]) -> Result<()> {
    writeln!(out, "Original plaintext: {}", String::from_utf8_lossy(plaintext))?;
    writeln!(out, "Computed CRC: {}", bytes_to_hex(&crc32(plaintext)))?;
    writeln!(out, "Encrypted ciphertext: {}", bytes_to_hex(ciphertext))?;
    Ok(())
}

fn print_frame(out: &mut dyn Write, frame: &WepFrame) -> Result<()> {
    writeln!(
        out,
        "Decrypted plaintext: {}",
        String::from_utf8_lossy(&frame.payload)
    )?;
    writeln!(out, "Obtained CRC: {}", bytes_to_hex(&frame.icv))?;
    writeln!(out, "Computed CRC: {}", bytes_to_hex(&frame.computed_icv()))?;
    writeln!(
        out,
        "{}",
        if frame.is_valid() {
            "CRC validated"
        } else {
            "CRC invalid"
        }
    )?;
    Ok(())
}
