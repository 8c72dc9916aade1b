//! ABI encoding error types

use bach_abi_crypto::CryptoError;
use thiserror::Error;

/// ABI encoding error
///
/// Every failure aborts the whole encode call; no partial buffer is returned.
#[derive(Debug, Error)]
pub enum AbiError {
    /// Value count does not match the type list, tuple or array arity
    #[error("arity mismatch: expected {expected} values, got {got}")]
    ArityMismatch {
        /// Number of values the types call for
        expected: usize,
        /// Number of values supplied
        got: usize,
    },

    /// Integer does not fit its declared width
    #[error("overflow: {len}-byte value does not fit in uint{bits}")]
    Overflow {
        /// Declared bit width
        bits: usize,
        /// Minimal big-endian length of the value
        len: usize,
    },

    /// Value shape does not match its paired type
    #[error("invalid value for {expected}: got {got}")]
    InvalidValue {
        /// Canonical name of the declared type
        expected: String,
        /// Kind of the supplied value
        got: &'static str,
    },

    /// Type outside the encodable grammar
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Selector hash function failed
    #[error("hash error: {0}")]
    Hash(#[from] CryptoError),
}

/// Result alias for ABI operations
pub type Result<T> = std::result::Result<T, AbiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_names_both_kinds() {
        let err = AbiError::InvalidValue {
            expected: "uint32".to_string(),
            got: "boolean",
        };
        assert_eq!(err.to_string(), "invalid value for uint32: got boolean");
    }

    #[test]
    fn test_hash_error_converts() {
        let err: AbiError = CryptoError::DigestTooShort { expected: 4, got: 2 }.into();
        assert!(matches!(err, AbiError::Hash(CryptoError::DigestTooShort { .. })));
    }
}
