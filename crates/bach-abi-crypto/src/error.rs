//! Cryptographic errors

use thiserror::Error;

/// Hashing error
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The hash function itself failed
    #[error("hash failed: {0}")]
    HashFailed(String),

    /// The digest is too short to take a prefix from
    #[error("digest too short: expected at least {expected} bytes, got {got}")]
    DigestTooShort {
        /// Minimum digest length
        expected: usize,
        /// Actual digest length
        got: usize,
    },
}
