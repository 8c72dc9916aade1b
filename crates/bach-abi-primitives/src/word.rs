//! 32-byte ABI word

use std::fmt;

use primitive_types::U256;

use crate::{strip_hex_prefix, PrimitiveError};

/// Size of one ABI word in bytes
pub const WORD_LEN: usize = 32;

/// Smallest multiple of [`WORD_LEN`] that is `>= len`
pub fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD_LEN) * WORD_LEN
}

/// A single 32-byte unit of the ABI wire format
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Word([u8; WORD_LEN]);

impl Word {
    /// Size in bytes
    pub const LEN: usize = WORD_LEN;

    /// All-zero word
    pub const ZERO: Word = Word([0u8; WORD_LEN]);

    /// Create from bytes
    pub const fn from_bytes(bytes: [u8; WORD_LEN]) -> Self {
        Word(bytes)
    }

    /// Create from slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, PrimitiveError> {
        if slice.len() != WORD_LEN {
            return Err(PrimitiveError::InvalidLength {
                expected: WORD_LEN,
                got: slice.len(),
            });
        }
        let mut bytes = [0u8; WORD_LEN];
        bytes.copy_from_slice(slice);
        Ok(Word(bytes))
    }

    /// Parse from hex string (with or without 0x prefix)
    pub fn from_hex(s: &str) -> Result<Self, PrimitiveError> {
        Self::from_slice(&hex::decode(strip_hex_prefix(s))?)
    }

    /// Big-endian encoding of an unsigned integer
    pub fn from_u256(value: U256) -> Self {
        let mut bytes = [0u8; WORD_LEN];
        value.to_big_endian(&mut bytes);
        Word(bytes)
    }

    /// Big-endian encoding of a length or count
    pub fn from_usize(value: usize) -> Self {
        Self::from_u256(U256::from(value))
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Interpret the word as a big-endian unsigned integer
    pub fn to_u256(&self) -> U256 {
        U256::from_big_endian(&self.0)
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; WORD_LEN]
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self.to_hex())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; WORD_LEN]> for Word {
    fn from(bytes: [u8; WORD_LEN]) -> Self {
        Word(bytes)
    }
}

impl From<U256> for Word {
    fn from(value: U256) -> Self {
        Word::from_u256(value)
    }
}

impl AsRef<[u8]> for Word {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
