//! Base types shared by the PoCo codec and signing crates.
//!
//! Primitive values ([`Address`], [`Bytes32`], [`Signature`], [`Word`]),
//! the signed [`order`]s, the [`Eip712Domain`] and the on-chain [`chain`]
//! entities produced by decoding contract return data.

#![deny(missing_docs)]
#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

pub mod chain;
pub mod config;
pub mod deal_params;
mod fmt;
pub mod order;
mod serde_hex;
pub mod tag;
pub mod task_description;

pub use chain::{
    ChainAccount, ChainApp, ChainCategory, ChainContribution, ChainContributionStatus,
    ChainDataset, ChainDeal, ChainTask, ChainTaskStatus, Resource,
};
pub use order::{AppOrder, DatasetOrder, Order, RequestOrder, WorkerpoolOrder};
pub use ruint::aliases::U256;
pub use task_description::TaskDescription;

/// A raw 32-byte digest.
pub type Hash = [u8; 32];

/// The 32-byte unit of ABI layout.
pub type Word = [u8; 32];

/// A 20-byte Ethereum account or contract address.
///
/// Parsing accepts any hex casing, formatting is always lower-case, so two
/// addresses compare equal regardless of the casing they were read from.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(#[serde(with = "serde_hex")] pub [u8; 20]);

/// An opaque 32-byte value: ids, tags, salts and hashes.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bytes32(#[serde(with = "serde_hex")] pub Hash);

/// A recoverable secp256k1 signature in Ethereum `r‖s‖v` form.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
    /// The `r` component.
    pub r: [u8; 32],
    /// The `s` component.
    pub s: [u8; 32],
    /// The recovery byte, conventionally 27 or 28.
    pub v: u8,
}

/// A signature was not exactly [`Signature::LEN`] bytes long.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("a signature must be {} bytes long, found {0}", Signature::LEN)]
pub struct SignatureLengthError(pub usize);

/// Failed to parse a hex string into a fixed-size value.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseHexError {
    /// The string is not valid hex.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// The decoded bytes have the wrong length.
    #[error("expected {expected} bytes, found {found}")]
    Length {
        /// Number of bytes required.
        expected: usize,
        /// Number of bytes decoded.
        found: usize,
    },
}

/// The [`EIP-712`](https://eips.ethereum.org/EIPS/eip-712) domain a typed
/// message is signed under.
///
/// The domain type string has three fields when `verifying_contract` is
/// `None` and four fields otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip712Domain {
    /// Signing domain name.
    pub name: String,
    /// Signing domain version.
    pub version: String,
    /// Chain the signature is valid on.
    pub chain_id: u64,
    /// Contract that verifies the signature, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifying_contract: Option<Address>,
}

impl Address {
    /// The zero address.
    pub const ZERO: Self = Self([0; 20]);

    /// Whether this is the zero address.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Bytes32 {
    /// The all-zero value.
    pub const ZERO: Self = Self([0; 32]);

    /// Whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<Hash> for Bytes32 {
    fn from(hash: Hash) -> Self {
        Self(hash)
    }
}

impl From<Bytes32> for Hash {
    fn from(value: Bytes32) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for Bytes32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Signature {
    /// Length of the serialized `r‖s‖v` form.
    pub const LEN: usize = 65;

    /// The all-zero placeholder, submitted where no enclave signed.
    pub const ZERO: Self = Self {
        r: [0; 32],
        s: [0; 32],
        v: 0,
    };

    /// Serialize to `r‖s‖v`.
    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut out = [0; Self::LEN];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// Parse an `r‖s‖v` byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureLengthError> {
        let bytes: &[u8; Self::LEN] = bytes
            .try_into()
            .map_err(|_| SignatureLengthError(bytes.len()))?;
        Ok(Self::from(*bytes))
    }
}

impl From<[u8; Signature::LEN]> for Signature {
    fn from(bytes: [u8; Signature::LEN]) -> Self {
        let mut r = [0; 32];
        let mut s = [0; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Self { r, s, v: bytes[64] }
    }
}

impl From<Signature> for [u8; Signature::LEN] {
    fn from(sig: Signature) -> Self {
        sig.to_bytes()
    }
}

impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde_hex::serialize(&self.to_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes: [u8; Signature::LEN] = serde_hex::deserialize(d)?;
        Ok(bytes.into())
    }
}

impl Eip712Domain {
    /// Name of the domain orders are signed under.
    pub const POCO_NAME: &'static str = "iExecODB";
    /// Version of the domain orders are signed under.
    pub const POCO_VERSION: &'static str = "5.0.0";
    /// Name of the domain challenges are signed under.
    pub const CHALLENGE_NAME: &'static str = "COMMON";
    /// Version of the domain challenges are signed under.
    pub const CHALLENGE_VERSION: &'static str = "1";

    /// The domain market orders are signed under, verified by the hub.
    pub fn poco(chain_id: u64, hub: Address) -> Self {
        Self {
            name: Self::POCO_NAME.to_string(),
            version: Self::POCO_VERSION.to_string(),
            chain_id,
            verifying_contract: Some(hub),
        }
    }

    /// The domain of off-chain challenge messages, bound to no contract.
    pub fn challenge(chain_id: u64) -> Self {
        Self {
            name: Self::CHALLENGE_NAME.to_string(),
            version: Self::CHALLENGE_VERSION.to_string(),
            chain_id,
            verifying_contract: None,
        }
    }
}

/// Strip an optional `0x`/`0X` prefix.
pub fn strip_hex_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex)
}

/// Decode a hex string, with or without `0x`, into exactly `N` bytes.
pub fn bytes_from_hex<const N: usize>(hex: &str) -> Result<[u8; N], ParseHexError> {
    let bytes = hex::decode(strip_hex_prefix(hex))?;
    let found = bytes.len();
    bytes
        .try_into()
        .map_err(|_| ParseHexError::Length { expected: N, found })
}
