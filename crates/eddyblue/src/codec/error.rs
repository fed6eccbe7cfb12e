//! Error type for the attribute value codecs
use thiserror::Error;

/// Errors raised when converting between attribute values and bytes
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Value {value} does not fit in {width} bytes")]
    ValueOutOfRange { value: u32, width: usize },

    #[error("Empty URL payload")]
    EmptyUrl,

    #[error("Unknown URL scheme prefix: 0x{0:02X}")]
    InvalidScheme(u8),

    #[error("URL has no encodable scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Reserved byte 0x{byte:02X} at offset {offset}")]
    InvalidByte { byte: u8, offset: usize },

    #[error("Character {0:?} cannot be encoded")]
    InvalidCharacter(char),

    #[error("Value does not match codec: {0}")]
    TypeMismatch(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
