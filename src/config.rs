use std::path::Path;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::{rsa::DEFAULT_PUBLIC_EXPONENT, Result};

pub(crate) const COURSEWORK_MODULUS: &str = "\
    2006767465286470550761847807889437182570329918998522976958951142152453555825957085195251153139\
    7245086777923890860793377793308430786064838968878551026724279066734424284905076041579325272841\
    3562056336893788110247230123264524619406083156919164352680781747765967889547853479627903860296\
    17883800516764964060553491";

pub(crate) const COURSEWORK_CIPHERTEXT: &str = "\
    1979260647004415521145520415043454994807253833604422369495467436453724747510101881200863835329\
    8641469273134687688990436824521982866914567238087017185646832618538036395592603265241964273726\
    6013766499621515903081625020722203187649831094279997861544651489904613807763091842136047285770\
    20438154325916782604166322";

#[cfg(test)]
pub(crate) const COURSEWORK_PRIME_P: &str = "\
    4479695821466531839818954765738045516081642359785305988879443725765526196051289619900437018838\
    260596407081479343412316275084159573413408850340964303556283";

#[cfg(test)]
pub(crate) const COURSEWORK_PRIME_Q: &str = "\
    4479695821466531839818954765738045516081642359785305988879443725765526196051289619900437018838\
    260596407081479343412316275084159573413408850340964303555977";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fermat: FermatConfig,
    pub wep: WepConfig,
}

impl Config {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// The public key, the intercepted ciphertext and the known bound on
/// `|p - q|` to attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FermatConfig {
    #[serde(with = "decimal")]
    pub modulus: BigUint,
    #[serde(with = "decimal")]
    pub ciphertext: BigUint,
    #[serde(with = "decimal")]
    pub public_exponent: BigUint,
    #[serde(with = "decimal")]
    pub known_gap_bound: BigUint,
}

impl Default for FermatConfig {
    fn default() -> Self {
        Self {
            modulus: parse_decimal(COURSEWORK_MODULUS),
            ciphertext: parse_decimal(COURSEWORK_CIPHERTEXT),
            public_exponent: BigUint::from(DEFAULT_PUBLIC_EXPONENT),
            known_gap_bound: BigUint::from(10_000u64),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WepConfig {
    /// The payload of the captured frame.
    pub message: String,
    /// What the attacker wants the frame to say. Must be as long as `message`.
    pub replacement: String,
    pub keystream_len: usize,
    /// Seed for the demo keystream. A fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for WepConfig {
    fn default() -> Self {
        Self {
            message: "Hello, world!".to_string(),
            replacement: "Howdy partner".to_string(),
            keystream_len: 64,
            seed: None,
        }
    }
}

fn parse_decimal(digits: &str) -> BigUint {
    // Only used on the literals above.
    BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_default()
}

mod decimal {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let digits = String::deserialize(deserializer)?;
        digits
            .trim()
            .parse::<BigUint>()
            .map_err(|_| de::Error::custom(crate::Error::InvalidInteger(digits.clone())))
    }
}
