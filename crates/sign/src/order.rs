//! Signing and verification of market orders and challenges.
//!
//! Orders are signed over their EIP-712 [`final_hash`] under the hub's
//! domain, with no personal message framing.

use crate::{sign, verify, Framing};
use poco_eip712::{final_hash, Challenge, Eip712Message};
use poco_types::{Address, Eip712Domain, Order, Signature};
use secp256k1::SecretKey;

/// Sign an order.
///
/// Returns a signed copy; `order` itself is left unsigned.
pub fn sign_order<O>(order: &O, domain: &Eip712Domain, sk: &SecretKey) -> O
where
    O: Order + Eip712Message,
{
    let signature = sign(&final_hash(order, domain), sk);
    order.with_signature(signature)
}

/// Whether `order` carries a signature by `signer` under `domain`.
///
/// Unsigned orders never verify.
pub fn verify_order<O>(order: &O, domain: &Eip712Domain, signer: &Address) -> bool
where
    O: Order + Eip712Message,
{
    order
        .signature()
        .is_some_and(|signature| verify(&final_hash(order, domain), signature, signer, Framing::Raw))
}

/// Sign a challenge string under the challenge domain of `chain_id`.
pub fn sign_challenge(challenge: &str, chain_id: u64, sk: &SecretKey) -> Signature {
    let message = Challenge {
        challenge: challenge.to_string(),
    };
    sign(&final_hash(&message, &Eip712Domain::challenge(chain_id)), sk)
}

/// Whether `signature` signs `challenge` by `signer` on `chain_id`.
pub fn verify_challenge(
    challenge: &str,
    chain_id: u64,
    signature: &Signature,
    signer: &Address,
) -> bool {
    let message = Challenge {
        challenge: challenge.to_string(),
    };
    let hash = final_hash(&message, &Eip712Domain::challenge(chain_id));
    verify(&hash, signature, signer, Framing::Raw)
}
