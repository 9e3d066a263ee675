// CRC32 (ISO-HDLC, as used by zlib, PNG and the 802.11 ICV).
//
// The register is seeded with all ones and inverted on output. That final
// inversion, together with the seed, is what makes CRC32 affine rather than
// linear over XOR: for buffers of a fixed length L,
//
//   CRC(x ⊕ y) = CRC(x) ⊕ CRC(y) ⊕ CRC(0^L)
//
// so the "constant" is just the checksum of L zero bytes.

use crate::Checksum;

const POLYNOMIAL: u32 = 0xedb88320;
const CRC32_TABLE: [u32; 256] = generate_table();

const fn generate_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut j = 0;
        while j < 8 {
            if crc & 1 == 1 {
                crc = (crc >> 1) ^ POLYNOMIAL;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

pub struct Crc32 {
    state: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self { state: 0xffffffff }
    }
}

impl Checksum<4> for Crc32 {
    fn update(&mut self, data: &[u8]) {
        for &byte in data {
            let idx = ((self.state ^ byte as u32) & 0xff) as usize;
            self.state = (self.state >> 8) ^ CRC32_TABLE[idx];
        }
    }

    /// The checksum in big-endian order, so it can be XOR-ed directly with
    /// other byte buffers.
    fn digest(self) -> [u8; 4] {
        (self.state ^ 0xffffffff).to_be_bytes()
    }
}

pub fn crc32(data: &[u8]) -> [u8; 4] {
    Crc32::digest_message(data)
}
