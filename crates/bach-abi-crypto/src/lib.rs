//! # bach-abi-crypto
//!
//! Hashing for BachLedger ABI selectors.
//!
//! - Keccak-256 hashing
//! - The [`Hasher`] seam the selector resolver hashes through

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod hash;

pub use error::CryptoError;
pub use hash::{keccak256, Hasher, Keccak256};
