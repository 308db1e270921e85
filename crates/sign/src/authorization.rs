//! Worker authorizations and enclave signatures.
//!
//! Both are signed with the personal message framing, which is what the hub
//! checks them against during `contribute`.

use crate::{recover_address, sign_personal_hash, verify, Framing};
use poco_hash::protocol::{authorization_hash, enclave_message_hash};
use poco_types::{Address, Bytes32, Signature};
use secp256k1::SecretKey;
use serde::{Deserialize, Serialize};

/// A scheduler's permission for a worker to contribute to a task.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerpoolAuthorization {
    /// Authorized worker.
    pub worker_wallet: Address,
    /// Task the worker may contribute to.
    pub chain_task_id: Bytes32,
    /// Enclave signing address, zero outside TEE.
    pub enclave_challenge: Address,
    /// Workerpool owner signature.
    pub signature: Signature,
}

impl WorkerpoolAuthorization {
    /// The hash the workerpool owner signs.
    pub fn hash(&self) -> Bytes32 {
        authorization_hash(
            &self.worker_wallet,
            &self.chain_task_id,
            &self.enclave_challenge,
        )
    }

    /// Address that signed this authorization.
    pub fn signer(&self) -> Option<Address> {
        recover_address(&self.hash(), &self.signature, Framing::PersonalMessage)
    }
}

/// Authorize `worker_wallet` to contribute to a task.
pub fn sign_authorization(
    worker_wallet: Address,
    chain_task_id: Bytes32,
    enclave_challenge: Address,
    sk: &SecretKey,
) -> WorkerpoolAuthorization {
    let hash = authorization_hash(&worker_wallet, &chain_task_id, &enclave_challenge);
    WorkerpoolAuthorization {
        worker_wallet,
        chain_task_id,
        enclave_challenge,
        signature: sign_personal_hash(&hash, sk),
    }
}

/// Whether `authorization` was signed by `scheduler`.
pub fn verify_authorization(authorization: &WorkerpoolAuthorization, scheduler: &Address) -> bool {
    verify(
        &authorization.hash(),
        &authorization.signature,
        scheduler,
        Framing::PersonalMessage,
    )
}

/// Sign a contribution from inside an enclave.
pub fn sign_enclave_message(result_hash: &Bytes32, result_seal: &Bytes32, sk: &SecretKey) -> Signature {
    sign_personal_hash(&enclave_message_hash(result_hash, result_seal), sk)
}

/// Whether `signature` is the enclave's signature of a contribution.
pub fn verify_enclave_message(
    result_hash: &Bytes32,
    result_seal: &Bytes32,
    signature: &Signature,
    enclave: &Address,
) -> bool {
    verify(
        &enclave_message_hash(result_hash, result_seal),
        signature,
        enclave,
        Framing::PersonalMessage,
    )
}
