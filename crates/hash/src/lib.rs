//! A minimal crate containing the PoCo [`keccak256`] hash, the
//! [`concatenate_and_hash`] primitive every protocol hash is built on, and
//! the content-checksum [`sha256`].
//!
//! Keccak-256 here is the legacy Keccak padding used by Ethereum, not the
//! FIPS-202 SHA3-256.

#![deny(missing_docs)]
#![deny(unsafe_code)]

use poco_types::{strip_hex_prefix, Bytes32, Hash};
use sha2::Digest;
use tiny_keccak::{Hasher, Keccak};

pub mod protocol;

/// Hash data using Keccak-256.
pub fn keccak256(data: impl AsRef<[u8]>) -> Hash {
    let mut hasher = Keccak::v256();
    hasher.update(data.as_ref());
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Hash the concatenation of `parts`, in order, using Keccak-256.
pub fn concatenate_and_hash<T: AsRef<[u8]>>(parts: &[T]) -> Bytes32 {
    let mut hasher = Keccak::v256();
    for part in parts {
        hasher.update(part.as_ref());
    }
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    Bytes32(output)
}

/// [`concatenate_and_hash`] over hex strings, each with or without `0x`.
pub fn concatenate_and_hash_hex(parts: &[&str]) -> Result<Bytes32, hex::FromHexError> {
    let bytes = parts
        .iter()
        .map(|part| hex::decode(strip_hex_prefix(part)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(concatenate_and_hash(&bytes))
}

/// Hash data using SHA-256.
///
/// Only used for content checksums, never for signed payloads.
pub fn sha256(data: impl AsRef<[u8]>) -> Hash {
    let mut hasher = sha2::Sha256::new();
    hasher.update(data.as_ref());
    hasher.finalize().into()
}

/// [`sha256`] as a `0x`-prefixed hex string.
pub fn sha256_hex(data: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(sha256(data)))
}

/// The 4-byte selector of a function signature such as `"viewTask(bytes32)"`.
pub fn selector(signature: &str) -> [u8; 4] {
    let [a, b, c, d, ..] = keccak256(signature.as_bytes());
    [a, b, c, d]
}

/// The topic of an event signature such as
/// `"Transfer(address,address,uint256)"`.
pub fn event_topic(signature: &str) -> Bytes32 {
    Bytes32(keccak256(signature.as_bytes()))
}
