use crate::{Error, Result};

pub fn xor(buf_a: &[u8], buf_b: &[u8]) -> Result<Vec<u8>> {
    if buf_a.len() != buf_b.len() {
        return Err(Error::LengthMismatch {
            left: buf_a.len(),
            right: buf_b.len(),
        });
    }
    Ok(buf_a.iter().zip(buf_b.iter()).map(|(a, b)| a ^ b).collect())
}

/// XOR two or more equal-length buffers together, left to right.
pub fn xor_many(buf_a: &[u8], buf_b: &[u8], rest: &[&[u8]]) -> Result<Vec<u8>> {
    rest.iter()
        .try_fold(xor(buf_a, buf_b)?, |acc, buf| xor(&acc, buf))
}

/// Flip a single bit of the payload. Bit `i` lives in byte `i / 8` under the
/// mask `1 << (i % 8)`.
pub fn flip_bit(payload: &[u8], bit_index: usize) -> Result<Vec<u8>> {
    let target = bit_index / 8;
    if target >= payload.len() {
        return Err(Error::BitOutOfRange {
            bit: bit_index,
            len: payload.len(),
        });
    }
    let mut mask = vec![0u8; payload.len()];
    mask[target] = 1 << (bit_index % 8);
    xor(&mask, payload)
}

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .fold(String::new(), |s, hb| s + &hb)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn xor_combines_equal_length_buffers() {
        let a = [0x1c, 0x01, 0x11, 0x00];
        let b = [0x68, 0x69, 0x74, 0x20];

        let xored = xor(&a, &b).unwrap();

        assert_eq!(xored, vec![0x74, 0x68, 0x65, 0x20]);
    }

    #[test]
    fn xor_rejects_buffers_of_different_length() {
        let result = xor(b"abc", b"ab");

        assert!(matches!(
            result,
            Err(Error::LengthMismatch { left: 3, right: 2 })
        ));
    }

    #[test]
    fn xor_many_folds_left_to_right() {
        let a = b"attack at dawn";
        let b = b"attack at noon";
        let c = b"\x01\x02\x03\x04\x05\x06\x07\x08\x09\x0a\x0b\x0c\x0d\x0e";

        let folded = xor_many(a, b, &[c, a]).unwrap();

        assert_eq!(folded, xor(b, c).unwrap());
    }

    #[test]
    fn xor_many_rejects_a_mismatched_trailing_buffer() {
        let result = xor_many(b"ab", b"cd", &[b"e"]);

        assert!(matches!(result, Err(Error::LengthMismatch { .. })));
    }

    #[rstest]
    #[case(0, 0, 0b0000_0001)]
    #[case(7, 0, 0b1000_0000)]
    #[case(10, 1, 0b0000_0100)]
    #[case(31, 3, 0b1000_0000)]
    fn flip_bit_changes_exactly_one_bit(
        #[case] bit: usize,
        #[case] byte: usize,
        #[case] mask: u8,
    ) {
        let payload = b"\xde\xad\xbe\xef";

        let flipped = flip_bit(payload, bit).unwrap();

        let diff = xor(payload, &flipped).unwrap();
        let mut expected = vec![0u8; payload.len()];
        expected[byte] = mask;
        assert_eq!(diff, expected);
        assert_eq!(diff.iter().map(|b| b.count_ones()).sum::<u32>(), 1);
    }

    #[test]
    fn flip_bit_twice_restores_the_payload() {
        let payload = b"Hello, world!";

        let restored = flip_bit(&flip_bit(payload, 42).unwrap(), 42).unwrap();

        assert_eq!(restored, payload);
    }

    #[test]
    fn flip_bit_rejects_bits_past_the_end() {
        assert!(matches!(
            flip_bit(b"ab", 16),
            Err(Error::BitOutOfRange { bit: 16, len: 2 })
        ));
    }

    #[test]
    fn bytes_to_hex_is_lowercase_and_padded() {
        assert_eq!(bytes_to_hex(&[0x0a, 0xff, 0x00]), "0aff00");
    }
}
