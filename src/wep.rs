// WEP-style framing and packet forgery.
//
// A frame carries M || CRC(M) XOR-ed with an RC4 keystream. Because both the
// stream cipher and (up to a constant) the CRC are linear in XOR, an attacker
// can rewrite the payload of a captured frame and patch up the ICV to match,
// without ever learning the keystream:
//
//   C' = C ⊕ ((M || CRC(M)) ⊕ (M' || CRC(M')))
//      = K ⊕ (M' || CRC(M'))

use rand::RngCore;
use rayon::prelude::*;

use crate::{crc32, xor, Error, Result};

const ICV_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WepFrame {
    pub payload: Vec<u8>,
    pub icv: [u8; 4],
}

impl WepFrame {
    pub fn computed_icv(&self) -> [u8; 4] {
        crc32(&self.payload)
    }

    /// Whether the transmitted ICV matches the checksum of the payload. A
    /// receiver decides what to do with an invalid frame.
    pub fn is_valid(&self) -> bool {
        self.computed_icv() == self.icv
    }
}

/// `CRC(x) ⊕ CRC(y) ⊕ CRC(x ⊕ y)` for two buffers of the same length.
pub fn affine_constant(x: &[u8], y: &[u8]) -> Result<[u8; 4]> {
    let xy = xor(x, y)?;
    let constant = crate::xor_many(&crc32(x), &crc32(y), &[&crc32(&xy)])?;
    Ok(to_icv(&constant))
}

/// The affine constant for every pair of buffers of length `len`.
pub fn affine_constant_for_len(len: usize) -> [u8; 4] {
    crc32(&vec![0u8; len])
}

/// Check over `samples` random pairs of length `len` that the affine
/// constant never changes.
pub fn affine_constant_is_invariant(len: usize, samples: usize, rng: &mut impl RngCore) -> bool {
    let pairs: Vec<(Vec<u8>, Vec<u8>)> = (0..samples)
        .map(|_| (random_keystream(len, rng), random_keystream(len, rng)))
        .collect();
    let expected = affine_constant_for_len(len);
    pairs
        .par_iter()
        .all(|(x, y)| matches!(affine_constant(x, y), Ok(k) if k == expected))
}

pub fn random_keystream(len: usize, rng: &mut impl RngCore) -> Vec<u8> {
    let mut keystream = vec![0u8; len];
    rng.fill_bytes(&mut keystream);
    keystream
}

pub fn wep_encrypt(plaintext: &[u8], keystream: &[u8]) -> Result<Vec<u8>> {
    let frame = with_icv(plaintext);
    xor(&frame, keystream_prefix(keystream, frame.len())?)
}

pub fn wep_decrypt(ciphertext: &[u8], keystream: &[u8]) -> Result<WepFrame> {
    if ciphertext.len() < ICV_LEN {
        return Err(Error::FrameTooShort(ciphertext.len()));
    }
    let mut payload = xor(ciphertext, keystream_prefix(keystream, ciphertext.len())?)?;
    let icv = payload.split_off(payload.len() - ICV_LEN);
    Ok(WepFrame {
        payload,
        icv: to_icv(&icv),
    })
}

/// The XOR difference between the frames carrying `message` and
/// `replacement`.
pub fn forgery_delta(message: &[u8], replacement: &[u8]) -> Result<Vec<u8>> {
    xor(&with_icv(message), &with_icv(replacement))
}

/// Rewrite a captured frame known to carry `message` so it decrypts to
/// `replacement` with a valid ICV.
pub fn forge_frame(ciphertext: &[u8], message: &[u8], replacement: &[u8]) -> Result<Vec<u8>> {
    xor(ciphertext, &forgery_delta(message, replacement)?)
}

/// Flip the bits set in `payload_delta` in a captured frame, whose plaintext
/// need not be known, and patch the ICV using the affine constant.
pub fn forge_with_payload_delta(ciphertext: &[u8], payload_delta: &[u8]) -> Result<Vec<u8>> {
    let icv_delta = xor(
        &crc32(payload_delta),
        &affine_constant_for_len(payload_delta.len()),
    )?;
    let delta = [payload_delta, icv_delta.as_slice()].concat();
    xor(ciphertext, &delta)
}

fn with_icv(payload: &[u8]) -> Vec<u8> {
    [payload, crc32(payload).as_slice()].concat()
}

fn keystream_prefix(keystream: &[u8], needed: usize) -> Result<&[u8]> {
    keystream.get(..needed).ok_or(Error::KeystreamTooShort {
        needed,
        available: keystream.len(),
    })
}

fn to_icv(bytes: &[u8]) -> [u8; 4] {
    let mut icv = [0u8; 4];
    icv.copy_from_slice(bytes);
    icv
}
