//! Keccak-256 hashing and the hasher seam

use bach_abi_primitives::Word;
use sha3::{Digest, Keccak256 as Keccak};

use crate::CryptoError;

/// A hash function the selector resolver can delegate to.
///
/// Implementations must be pure: equal inputs yield equal digests.
pub trait Hasher: Send + Sync {
    /// Hash `data` and return the full digest
    fn hash(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

impl<F> Hasher for F
where
    F: Fn(&[u8]) -> Result<Vec<u8>, CryptoError> + Send + Sync,
{
    fn hash(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self(data)
    }
}

/// Keccak-256, the hash used by Ethereum-compatible selectors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256;

impl Hasher for Keccak256 {
    fn hash(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(keccak256(data).as_bytes().to_vec())
    }
}

/// Compute Keccak-256 hash of the input data
pub fn keccak256(data: &[u8]) -> Word {
    let mut hasher = Keccak::new();
    hasher.update(data);
    let result = hasher.finalize();
    Word::from_bytes(result.into())
}
