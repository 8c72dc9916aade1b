//! # bach-abi-primitives
//!
//! Primitive types for BachLedger ABI encoding.
//!
//! This crate provides the fixed-size building blocks the encoder works in:
//! the 32-byte [`Word`], the 20-byte [`Address`] and the [`U256`] integer.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod error;
mod word;

pub use address::Address;
pub use error::PrimitiveError;
pub use word::{padded_len, Word, WORD_LEN};

// Re-export primitive-types for U256
pub use primitive_types::U256;

/// Strip a leading `0x` or `0X`, if present
pub fn strip_hex_prefix(s: &str) -> &str {
    match s.as_bytes() {
        [b'0', b'x' | b'X', ..] => &s[2..],
        _ => s,
    }
}
