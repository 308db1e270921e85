//! # Logs
//! Event logs of a transaction receipt, as returned by `eth_getTransactionReceipt`.

use crate::{selector::TRANSFER_EVENT, word::word_to_address};
use poco_types::{Address, Bytes32};
use serde::{Deserialize, Serialize};


/// An event emitted by a contract.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// Emitting contract.
    pub address: Address,
    /// Event topic followed by the indexed arguments.
    #[serde(default)]
    pub topics: Vec<Bytes32>,
    /// Hex encoded non-indexed arguments.
    #[serde(default)]
    pub data: String,
}

/// The part of a transaction receipt the codec reads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Hash of the mined transaction.
    #[serde(default)]
    pub transaction_hash: Bytes32,
    /// Logs in emission order.
    #[serde(default)]
    pub logs: Vec<Log>,
}

impl Log {
    /// Whether this log's first topic is `topic`.
    pub fn is_event(&self, topic: &Bytes32) -> bool {
        self.topics.first() == Some(topic)
    }

    /// Indexed argument `ix`, counted after the event topic.
    pub fn indexed(&self, ix: usize) -> Option<&Bytes32> {
        self.topics.get(ix + 1)
    }
}

/// Address of the asset minted by a create transaction.
///
/// Registries mint each new asset as a token whose id is the asset address,
/// so this is the token id of the first `Transfer` out of the zero address.
pub fn asset_address_from_receipt(receipt: &TransactionReceipt) -> Option<Address> {
    let address = receipt
        .logs
        .iter()
        .filter(|log| log.is_event(&TRANSFER_EVENT))
        .find(|log| log.indexed(0).is_some_and(Bytes32::is_zero))
        .and_then(|log| log.indexed(2))
        .map(|token_id| word_to_address(&token_id.0));
    #[cfg(feature = "tracing")]
    if address.is_none() {
        tracing::debug!(
            "no asset minted in transaction {}",
            receipt.transaction_hash
        );
    }
    address
}
