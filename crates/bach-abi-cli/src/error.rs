//! CLI error types

use bach_abi::{AbiError, PrimitiveError};
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid hex string
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Input does not fit the declared types
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Encoding failed
    #[error("Encoding error: {0}")]
    Abi(#[from] AbiError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config error
    #[error("Config error: {0}")]
    Config(String),
}

impl From<hex::FromHexError> for CliError {
    fn from(e: hex::FromHexError) -> Self {
        CliError::InvalidHex(e.to_string())
    }
}

impl From<PrimitiveError> for CliError {
    fn from(e: PrimitiveError) -> Self {
        match e {
            PrimitiveError::InvalidHex(msg) => CliError::InvalidHex(msg),
            PrimitiveError::InvalidLength { .. } => CliError::InvalidInput(e.to_string()),
        }
    }
}
