mod config;
mod crc32;
pub mod demos;
mod error;
mod fermat;
mod hash;
mod prime;
mod rsa;
mod wep;
mod xor;

pub use config::{Config, FermatConfig, WepConfig};
pub use crc32::{crc32, Crc32};
pub use error::{Error, Result};
pub use fermat::{factor_modulus, fermat_bound, gap_bound_holds, FermatStep};
pub use hash::Checksum;
pub use prime::is_likely_prime;
pub use rsa::{private_exponent, rsa_decrypt, rsa_encrypt, DEFAULT_PUBLIC_EXPONENT};
pub use wep::{
    affine_constant, affine_constant_for_len, affine_constant_is_invariant, forge_frame,
    forge_with_payload_delta, forgery_delta, random_keystream, wep_decrypt, wep_encrypt, WepFrame,
};
pub use xor::{bytes_to_hex, flip_bit, xor, xor_many};
