use thiserror::Error;

/// Main error type for ASN.1 TLV decoding
#[derive(Error, Debug)]
pub enum Asn1Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Malformed length: {0}")]
    MalformedLength(String),

    #[error("Truncated data: need {needed} bytes, have {available}")]
    Truncated { needed: u64, available: u64 },

    #[error("Unsupported tag byte 0x{0:02X}: multi-byte tag numbers are not supported")]
    UnsupportedTag(u8),

    #[error("Nesting depth exceeds limit of {0}")]
    DepthExceeded(usize),

    #[error("Declared length {0} exceeds configured maximum")]
    LengthTooLarge(u64),

    #[error("Invalid object identifier: {0}")]
    InvalidOid(String),
}

/// Result type alias for ASN.1 TLV operations
pub type Asn1Result<T> = Result<T, Asn1Error>;
