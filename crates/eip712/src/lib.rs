//! [EIP-712](https://eips.ethereum.org/EIPS/eip-712) hashing of the fixed
//! set of typed messages the protocol signs.
//!
//! The signed digest of a message is
//! `keccak(0x1901 ‖ domain_separator(domain) ‖ message_hash(message))`,
//! see [`final_hash`]. The hub recomputes the same digest on-chain, so type
//! strings and field orders are protocol constants.

#![deny(missing_docs)]
#![deny(unsafe_code)]

use poco_hash::{concatenate_and_hash, keccak256};
use poco_types::{Address, Bytes32, Eip712Domain, Hash, Word, U256};

pub use message::Challenge;

mod message;


/// Solidity type of a message field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// `address`
    Address,
    /// `uint256`
    Uint256,
    /// `bytes32`
    Bytes32,
    /// `string`, hashed before encoding.
    String,
}

/// A named field of a message type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    /// Field name as it appears in the type string.
    pub name: &'static str,
    /// Field type.
    pub ty: FieldType,
}

/// A field value, in the order of [`Eip712Message::FIELDS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// `address`
    Address(Address),
    /// `uint256`
    Uint256(U256),
    /// `bytes32`
    Bytes32(Bytes32),
    /// `string`
    String(&'a str),
}

/// A message with a fixed EIP-712 schema.
pub trait Eip712Message {
    /// Name of the struct type.
    const PRIMARY_TYPE: &'static str;
    /// Fields in declaration order.
    const FIELDS: &'static [Field];

    /// Values of [`Self::FIELDS`], in the same order.
    fn values(&self) -> Vec<FieldValue<'_>>;
}

impl FieldType {
    /// Solidity name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Address => "address",
            FieldType::Uint256 => "uint256",
            FieldType::Bytes32 => "bytes32",
            FieldType::String => "string",
        }
    }
}

impl FieldValue<'_> {
    /// Type of the value.
    pub fn ty(&self) -> FieldType {
        match self {
            FieldValue::Address(_) => FieldType::Address,
            FieldValue::Uint256(_) => FieldType::Uint256,
            FieldValue::Bytes32(_) => FieldType::Bytes32,
            FieldValue::String(_) => FieldType::String,
        }
    }

    /// The 32-byte encoding of the value inside a struct hash.
    pub fn encode(&self) -> Word {
        match self {
            FieldValue::Address(address) => {
                let mut word = [0; 32];
                word[12..].copy_from_slice(&address.0);
                word
            }
            FieldValue::Uint256(value) => value.to_be_bytes(),
            FieldValue::Bytes32(value) => value.0,
            FieldValue::String(value) => keccak256(value.as_bytes()),
        }
    }
}

/// The type string of `M`, e.g. `Challenge(string challenge)`.
pub fn type_string<M: Eip712Message>() -> String {
    let fields: Vec<String> = M::FIELDS
        .iter()
        .map(|field| format!("{} {}", field.ty.as_str(), field.name))
        .collect();
    format!("{}({})", M::PRIMARY_TYPE, fields.join(","))
}

/// Keccak of [`type_string`].
pub fn type_hash<M: Eip712Message>() -> Hash {
    keccak256(type_string::<M>())
}

/// The domain type string.
///
/// `verifyingContract` is only part of the type when the domain has one.
pub fn domain_type_string(domain: &Eip712Domain) -> &'static str {
    match domain.verifying_contract {
        Some(_) => "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)",
        None => "EIP712Domain(string name,string version,uint256 chainId)",
    }
}

/// Hash of the domain a message is signed under.
pub fn domain_separator(domain: &Eip712Domain) -> Bytes32 {
    let mut words = vec![
        keccak256(domain_type_string(domain)),
        keccak256(domain.name.as_bytes()),
        keccak256(domain.version.as_bytes()),
        FieldValue::Uint256(U256::from(domain.chain_id)).encode(),
    ];
    if let Some(contract) = domain.verifying_contract {
        words.push(FieldValue::Address(contract).encode());
    }
    concatenate_and_hash(&words)
}

/// Struct hash of a message: its type hash followed by its encoded values.
pub fn message_hash<M: Eip712Message>(message: &M) -> Bytes32 {
    let mut words = vec![type_hash::<M>()];
    words.extend(message.values().iter().map(FieldValue::encode));
    concatenate_and_hash(&words)
}

/// The digest signed for `message` under `domain`.
pub fn final_hash<M: Eip712Message>(message: &M, domain: &Eip712Domain) -> Bytes32 {
    concatenate_and_hash(&[
        &[0x19, 0x01][..],
        &domain_separator(domain).0[..],
        &message_hash(message).0[..],
    ])
}
