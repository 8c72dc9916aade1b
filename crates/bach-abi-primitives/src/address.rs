//! 20-byte account address

use std::fmt;

use crate::word::{Word, WORD_LEN};
use crate::{strip_hex_prefix, PrimitiveError};

/// Account address, encoded on the wire as a `uint160`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address([u8; 20]);

impl Address {
    /// Size of address in bytes
    pub const LEN: usize = 20;

    /// Zero address
    pub const ZERO: Address = Address([0u8; 20]);

    /// Parse a 20-byte hex string; the `0x`/`0X` prefix is optional
    pub fn from_hex(s: &str) -> Result<Self, PrimitiveError> {
        let raw = hex::decode(strip_hex_prefix(s))?;
        let bytes: [u8; 20] = raw.as_slice().try_into().map_err(|_| {
            PrimitiveError::InvalidLength {
                expected: Self::LEN,
                got: raw.len(),
            }
        })?;
        Ok(Address(bytes))
    }

    /// Get as byte slice
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Left-padded word holding this address
    pub fn to_word(&self) -> Word {
        let mut bytes = [0u8; WORD_LEN];
        bytes[WORD_LEN - Self::LEN..].copy_from_slice(&self.0);
        Word::from_bytes(bytes)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
