use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Buffers are not of equal length: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Keystream of {available} bytes is too short, need at least {needed}")]
    KeystreamTooShort { needed: usize, available: usize },

    #[error("Frame of {0} bytes is too short to carry a CRC32 ICV")]
    FrameTooShort(usize),

    #[error("Bit {bit} is out of range for a {len} byte payload")]
    BitOutOfRange { bit: usize, len: usize },

    #[error("{e} has no inverse modulo {modulus}")]
    NotInvertible { e: String, modulus: String },

    #[error("Prime factor {0} is smaller than 2")]
    DegenerateFactor(String),

    #[error("Fermat's method could not factor the modulus in one step")]
    FactorsNotFound,

    #[error("Unknown demonstration `{0}`")]
    UnknownDemonstration(String),

    #[error("Invalid decimal integer `{0}`")]
    InvalidInteger(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
