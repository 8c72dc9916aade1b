//! Padding and unsigned-integer helpers

use bach_abi_primitives::{padded_len, U256, WORD_LEN};

use crate::error::{AbiError, Result};

/// Pad with leading zeros to `min_len`, then further to a whole number of words.
///
/// Content longer than `min_len` is padded from its own length.
pub fn left_pad(bytes: &[u8], min_len: usize) -> Vec<u8> {
    let target = padded_len(bytes.len().max(min_len));
    let mut out = vec![0u8; target - bytes.len()];
    out.extend_from_slice(bytes);
    out
}

/// Pad with trailing zeros to the next word boundary (no-op when aligned)
pub fn right_pad(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(padded_len(bytes.len()));
    out.extend_from_slice(bytes);
    out.resize(padded_len(bytes.len()), 0);
    out
}

/// Minimal big-endian representation; empty for zero
pub fn encode_unsigned(value: &U256) -> Vec<u8> {
    let mut bytes = [0u8; WORD_LEN];
    value.to_big_endian(&mut bytes);
    strip_leading_zeros(&bytes).to_vec()
}

/// Drop leading zero bytes from a big-endian integer
pub fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Fail with [`AbiError::Overflow`] if `minimal` does not fit in `bits`
pub fn check_width(minimal: &[u8], bits: usize) -> Result<()> {
    if minimal.len() > bits / 8 {
        return Err(AbiError::Overflow {
            bits,
            len: minimal.len(),
        });
    }
    Ok(())
}
