//! Common error types for primitives

use thiserror::Error;

/// Primitive parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrimitiveError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    /// Input has the wrong number of bytes
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Required byte count
        expected: usize,
        /// Byte count supplied
        got: usize,
    },
}

impl From<hex::FromHexError> for PrimitiveError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitiveError::InvalidHex(e.to_string())
    }
}
