//! Function selector resolution

use bach_abi_crypto::{keccak256, CryptoError, Hasher};

use crate::call::signature;
use crate::error::Result;
use crate::types::ParamType;

/// Length of a function selector in bytes
pub const SELECTOR_LEN: usize = 4;

/// Resolve the selector for `name(types...)` through `hasher`.
///
/// Returns an empty vector when `name` is `None`.
pub fn resolve<H>(name: Option<&str>, types: &[ParamType], hasher: &H) -> Result<Vec<u8>>
where
    H: Hasher + ?Sized,
{
    let Some(name) = name else {
        return Ok(Vec::new());
    };

    let signature = signature(name, types);
    let digest = hasher.hash(signature.as_bytes())?;
    if digest.len() < SELECTOR_LEN {
        return Err(CryptoError::DigestTooShort {
            expected: SELECTOR_LEN,
            got: digest.len(),
        }
        .into());
    }

    let selector = digest[..SELECTOR_LEN].to_vec();
    tracing::trace!(%signature, selector = %hex::encode(&selector), "resolved selector");
    Ok(selector)
}

/// Compute function selector (first 4 bytes of keccak256(signature))
pub fn function_selector(signature: &str) -> [u8; SELECTOR_LEN] {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; SELECTOR_LEN];
    selector.copy_from_slice(&hash.as_bytes()[..SELECTOR_LEN]);
    selector
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AbiError;
    use bach_abi_crypto::Keccak256;

    #[test]
    fn test_function_selector() {
        assert_eq!(function_selector("transfer(address,uint256)"), [0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(function_selector("balanceOf(address)"), [0x70, 0xa0, 0x82, 0x31]);
    }

    #[test]
    fn test_resolve_baz() {
        let selector = resolve(
            Some("baz"),
            &[ParamType::Uint(32), ParamType::Bool],
            &Keccak256,
        )
        .unwrap();
        assert_eq!(selector, vec![0xcd, 0xcd, 0x77, 0xc0]);
    }

    #[test]
    fn test_resolve_without_name() {
        let selector = resolve(None, &[ParamType::Bool], &Keccak256).unwrap();
        assert!(selector.is_empty());
    }

    #[test]
    fn test_resolve_without_name_skips_hasher() {
        let hasher = |_: &[u8]| -> std::result::Result<Vec<u8>, CryptoError> {
            Err(CryptoError::HashFailed("must not be called".into()))
        };
        assert!(resolve(None, &[], &hasher).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_hashes_exact_signature() {
        let echo = |data: &[u8]| -> std::result::Result<Vec<u8>, CryptoError> { Ok(data.to_vec()) };
        let selector = resolve(Some("f"), &[ParamType::Bool], &echo).unwrap();
        assert_eq!(selector, b"f(bo".to_vec());
    }

    #[test]
    fn test_resolve_propagates_hash_failure() {
        let failing = |_: &[u8]| -> std::result::Result<Vec<u8>, CryptoError> {
            Err(CryptoError::HashFailed("offline".into()))
        };
        let err = resolve(Some("f"), &[], &failing).unwrap_err();
        assert!(matches!(err, AbiError::Hash(CryptoError::HashFailed(_))));
    }

    #[test]
    fn test_resolve_short_digest() {
        let short = |_: &[u8]| -> std::result::Result<Vec<u8>, CryptoError> { Ok(vec![1, 2]) };
        let err = resolve(Some("f"), &[], &short).unwrap_err();
        assert!(matches!(
            err,
            AbiError::Hash(CryptoError::DigestTooShort { expected: 4, got: 2 })
        ));
    }
}
