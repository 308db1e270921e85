//! Hashes the hub recomputes on-chain during task execution.

use crate::{concatenate_and_hash, keccak256};
use poco_types::{Address, Bytes32, ChainDeal, U256};

/// Prefix of the Ethereum "personal message" framing for a 32-byte payload.
pub const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Id of the task at index `idx` of a deal.
pub fn chain_task_id(deal_id: &Bytes32, idx: u64) -> Bytes32 {
    let idx = U256::from(idx).to_be_bytes::<32>();
    concatenate_and_hash(&[&deal_id.0[..], &idx[..]])
}

/// Ids of every task of `deal`, in index order.
pub fn deal_task_ids(deal: &ChainDeal) -> impl Iterator<Item = Bytes32> + '_ {
    deal.task_indices()
        .map(|idx| chain_task_id(&deal.chain_deal_id, idx))
}

/// Hash of a worker's result, shared by every worker agreeing on it.
pub fn result_hash(chain_task_id: &Bytes32, result_digest: &Bytes32) -> Bytes32 {
    concatenate_and_hash(&[chain_task_id, result_digest])
}

/// Seal binding a result to the worker that computed it.
pub fn result_seal(worker: &Address, chain_task_id: &Bytes32, result_digest: &Bytes32) -> Bytes32 {
    concatenate_and_hash(&[&worker.0[..], &chain_task_id.0[..], &result_digest.0[..]])
}

/// Message a scheduler signs to let `worker` contribute to a task.
pub fn authorization_hash(
    worker: &Address,
    chain_task_id: &Bytes32,
    enclave_challenge: &Address,
) -> Bytes32 {
    concatenate_and_hash(&[
        &worker.0[..],
        &chain_task_id.0[..],
        &enclave_challenge.0[..],
    ])
}

/// Message an enclave signs to vouch for a contribution.
pub fn enclave_message_hash(result_hash: &Bytes32, result_seal: &Bytes32) -> Bytes32 {
    concatenate_and_hash(&[result_hash, result_seal])
}

/// `keccak("\x19Ethereum Signed Message:\n32" ‖ hash)`.
pub fn personal_message_hash(hash: &Bytes32) -> Bytes32 {
    let mut data = Vec::with_capacity(PERSONAL_MESSAGE_PREFIX.len() + 32);
    data.extend_from_slice(PERSONAL_MESSAGE_PREFIX);
    data.extend_from_slice(&hash.0);
    Bytes32(keccak256(data))
}
