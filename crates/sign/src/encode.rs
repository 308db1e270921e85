//! Functions for encoding signatures and public keys.

use poco_types::Signature;
use secp256k1::{ecdsa::RecoverableSignature, PublicKey};

/// Offset added to the recovery id to form `v`.
pub const V_OFFSET: u8 = 27;

/// Encode a secp256k1 public key into its 64-byte uncompressed form,
/// without the `0x04` tag.
pub fn public_key(pk: &PublicKey) -> [u8; 64] {
    let [_tag, xy @ ..] = pk.serialize_uncompressed();
    xy
}

/// Encode a secp256k1 recoverable signature as `r‖s‖v`.
pub fn signature(sig: &RecoverableSignature) -> Signature {
    let (rec_id, compact) = sig.serialize_compact();
    let mut r = [0; 32];
    let mut s = [0; 32];
    r.copy_from_slice(&compact[..32]);
    s.copy_from_slice(&compact[32..]);
    // Recovery ids are 0..=3.
    let v = V_OFFSET + rec_id.to_i32() as u8;
    Signature { r, s, v }
}

/// Encode a secp256k1 recoverable signature into 65 bytes.
pub fn signature_as_bytes(sig: &RecoverableSignature) -> [u8; Signature::LEN] {
    signature(sig).to_bytes()
}
