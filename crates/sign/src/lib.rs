//! A minimal crate providing PoCo's signing, verification and signer
//! recovery functions implemented using [`secp256k1`] and the
//! [`poco_hash`] crate.
//!
//! Signatures are Ethereum style: `r‖s‖v` with `v ∈ {27, 28}`. A signer is
//! identified by its [`Address`], so verification recovers the signing
//! address and compares it with the expected one.
//!
//! Includes [`sign`], [`sign_personal_hash`], [`recover_address`] and
//! [`verify`], plus helpers for [`order`]s and [`authorization`]s.

#![deny(missing_docs)]
#![deny(unsafe_code)]

use poco_hash::{keccak256, protocol::personal_message_hash};
use poco_types::{Address, Bytes32, Signature};
pub use secp256k1;
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message, PublicKey, Secp256k1, SecretKey,
};

pub mod authorization;
pub mod encode;
pub mod order;

/// How a hash was framed before being signed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Framing {
    /// The hash itself was signed.
    #[default]
    Raw,
    /// The hash was wrapped as an Ethereum "personal message" first.
    PersonalMessage,
}

impl Framing {
    /// The digest actually signed for `hash`.
    pub fn digest(&self, hash: &Bytes32) -> Bytes32 {
        match self {
            Framing::Raw => *hash,
            Framing::PersonalMessage => personal_message_hash(hash),
        }
    }
}

/// Sign a 32-byte hash with a secret key using the secp256k1 curve.
pub fn sign(hash: &Bytes32, sk: &SecretKey) -> Signature {
    let secp = Secp256k1::new();
    let message = Message::from_digest(hash.0);
    let sig = secp.sign_ecdsa_recoverable(&message, sk);
    encode::signature(&sig)
}

/// Sign a hash wrapped as a personal message.
pub fn sign_personal_hash(hash: &Bytes32, sk: &SecretKey) -> Signature {
    sign(&personal_message_hash(hash), sk)
}

/// The recovery id selected by `v`.
///
/// Accepts `{27, 28}`, `{0, 1}` and EIP-155 values (`35 + 2 * chain_id` and
/// `36 + 2 * chain_id`). Any other value is ambiguous and yields `None`.
pub fn recovery_id(v: u8) -> Option<RecoveryId> {
    let id = match v {
        0 | 1 => v,
        27 | 28 => v - 27,
        35..=u8::MAX => (v - 35) % 2,
        _ => return None,
    };
    RecoveryId::from_i32(i32::from(id)).ok()
}

/// Recover the public key that signed `hash` under `framing`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn recover_public_key(
    hash: &Bytes32,
    signature: &Signature,
    framing: Framing,
) -> Option<PublicKey> {
    let recovery_id = recovery_id(signature.v)?;
    recover_with_id(&framing.digest(hash), signature, recovery_id)
}

/// Recover the address that signed `hash` under `framing`.
///
/// `None` if the signature is malformed or nothing can be recovered.
/// A `v` that [`recovery_id`] does not map to an id also yields `None`:
/// with no expected address there is no way to pick among the four
/// candidate keys. [`verify`] tries all four instead.
pub fn recover_address(hash: &Bytes32, signature: &Signature, framing: Framing) -> Option<Address> {
    recover_public_key(hash, signature, framing).map(|pk| address_from_public_key(&pk))
}

/// Whether `signature` over `hash` was produced by `expected`.
///
/// When `v` does not select a recovery id, each of the four ids is tried.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(signer = %expected)))]
pub fn verify(hash: &Bytes32, signature: &Signature, expected: &Address, framing: Framing) -> bool {
    let digest = framing.digest(hash);
    let ids = match recovery_id(signature.v) {
        Some(id) => vec![id],
        None => (0..4).filter_map(|id| RecoveryId::from_i32(id).ok()).collect(),
    };
    let verified = ids.into_iter().any(|id| {
        recover_with_id(&digest, signature, id)
            .is_some_and(|pk| address_from_public_key(&pk) == *expected)
    });
    #[cfg(feature = "tracing")]
    if !verified {
        tracing::debug!("signature does not match {expected}");
    }
    verified
}

fn recover_with_id(digest: &Bytes32, signature: &Signature, id: RecoveryId) -> Option<PublicKey> {
    let mut compact = [0u8; 64];
    compact[..32].copy_from_slice(&signature.r);
    compact[32..].copy_from_slice(&signature.s);
    let recoverable = RecoverableSignature::from_compact(&compact, id).ok()?;
    let message = Message::from_digest(digest.0);
    let secp = Secp256k1::new();
    let public_key = secp.recover_ecdsa(&message, &recoverable);
    #[cfg(feature = "tracing")]
    if let Err(err) = &public_key {
        tracing::trace!("{err}");
    }
    public_key.ok()
}

/// The address of a public key: the low 20 bytes of the keccak of its
/// 64-byte uncompressed form.
pub fn address_from_public_key(pk: &PublicKey) -> Address {
    let hash = keccak256(encode::public_key(pk));
    let mut address = [0; 20];
    address.copy_from_slice(&hash[12..]);
    Address(address)
}

/// The address controlled by a secret key.
pub fn address_of(sk: &SecretKey) -> Address {
    let secp = Secp256k1::new();
    address_from_public_key(&PublicKey::from_secret_key(&secp, sk))
}

/// Whether `bytes` has the shape of a signature: exactly 65 bytes and not
/// all zero.
pub fn is_signature_well_formed(bytes: &[u8]) -> bool {
    bytes.len() == Signature::LEN && bytes.iter().any(|b| *b != 0)
}
