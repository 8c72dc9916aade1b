//! # bach-abi
//!
//! Solidity ABI call-data encoding for BachLedger.
//!
//! This crate provides functionality for:
//! - Rendering canonical function signatures
//! - Computing function selectors
//! - Encoding typed arguments into 32-byte-word call data
//!
//! # Example
//!
//! ```rust
//! use bach_abi::{encode, CallDescriptor, ParamType, Value};
//!
//! let call = CallDescriptor::function("baz", vec![ParamType::Uint(32), ParamType::Bool]);
//! let data = encode(&[Value::uint(69), Value::Bool(true)], &call).unwrap();
//!
//! assert_eq!(&data[..4], &[0xcd, 0xcd, 0x77, 0xc0]);
//! assert_eq!(data.len(), 4 + 2 * 32);
//! ```
//!
//! Tuples and arrays use a head/tail layout. A dynamic element's head slot
//! holds the byte length of that element's encoding, and top-level
//! arguments are concatenated without head slots.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod call;
mod encode;
mod error;
mod selector;
mod types;
pub mod util;

pub use call::{signature, CallDescriptor};
pub use encode::{encode_sequence, encode_type, Encoder};
pub use error::{AbiError, Result};
pub use selector::{function_selector, resolve, SELECTOR_LEN};
pub use types::{ParamType, Value, ADDRESS_BITS};

// Re-export collaborators for convenience
pub use bach_abi_crypto::{CryptoError, Hasher, Keccak256};
pub use bach_abi_primitives::{strip_hex_prefix, Address, PrimitiveError, Word, U256};

/// Encode `values` against `call` using Keccak-256 selectors
pub fn encode(values: &[Value], call: &CallDescriptor) -> Result<Vec<u8>> {
    Encoder::new().encode(values, call)
}

/// Encode a bare argument list (no selector)
pub fn encode_arguments(values: &[Value], types: &[ParamType]) -> Result<Vec<u8>> {
    encode_sequence(types, values)
}
