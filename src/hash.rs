/// A streaming checksum producing an `N` byte digest.
pub trait Checksum<const N: usize>: Default {
    fn update(&mut self, data: &[u8]);

    fn digest(self) -> [u8; N];

    fn digest_message(message: &[u8]) -> [u8; N] {
        let mut checksum = Self::default();
        checksum.update(message);
        checksum.digest()
    }
}
