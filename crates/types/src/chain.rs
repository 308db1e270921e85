//! # Chain entities
//! Read-only records decoded from hub and registry contract return data.
//!
//! A [`ChainDeal`] carries the addresses of the resources it was made with,
//! never the resources themselves. A [`ChainTask`] refers to its deal by
//! [`ChainTask::deal_id`] only.

use crate::{Address, Bytes32, U256};
use serde::{Deserialize, Serialize};


/// A registered application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainApp {
    /// App contract address.
    pub id: Address,
    /// App owner.
    pub owner: Address,
    /// Name.
    pub name: String,
    /// Type, e.g. `DOCKER`.
    pub app_type: String,
    /// Location of the app image.
    pub multiaddr: String,
    /// Checksum of the app image.
    pub checksum: Bytes32,
    /// Raw TEE enclave configuration, empty for standard apps.
    pub mr_enclave: Vec<u8>,
}

/// TEE enclave configuration stored in an app's mrenclave field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnclaveConfiguration {
    /// TEE provider, e.g. `SCONE` or `GRAMINE`.
    pub provider: String,
    /// Provider version.
    pub version: String,
    /// Command run inside the enclave.
    pub entrypoint: String,
    /// Enclave heap size in bytes.
    pub heap_size: u64,
    /// Enclave measurement.
    pub fingerprint: String,
}

/// A registered dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDataset {
    /// Dataset contract address.
    pub id: Address,
    /// Dataset owner.
    pub owner: Address,
    /// Name.
    pub name: String,
    /// Location of the encrypted dataset.
    pub multiaddr: String,
    /// Checksum of the dataset.
    pub checksum: Bytes32,
}

/// A hub category, bounding task execution time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainCategory {
    /// Category index.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Maximum execution time in seconds (the contract's `workClockTimeRef`).
    pub max_execution_time: u64,
}

/// Balance of an account held by the hub.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainAccount {
    /// Freely usable balance.
    pub deposit: U256,
    /// Balance locked by ongoing deals.
    pub locked: U256,
}

/// Status of a worker's contribution to a task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChainContributionStatus {
    /// No contribution.
    #[default]
    Unset,
    /// Contribution submitted.
    Contributed,
    /// Contribution revealed.
    Proved,
    /// Contribution rejected by consensus.
    Rejected,
}

/// A worker's contribution to a task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainContribution {
    /// Status.
    pub status: ChainContributionStatus,
    /// `keccak(taskId ‖ resultDigest)`.
    pub result_hash: Bytes32,
    /// `keccak(worker ‖ taskId ‖ resultDigest)`.
    pub result_seal: Bytes32,
    /// Enclave challenge address, zero for standard tasks.
    pub enclave_challenge: Address,
    /// Contribution weight.
    pub weight: U256,
}

/// Status of a task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChainTaskStatus {
    /// Not initialized.
    #[default]
    Unset,
    /// Accepting contributions.
    Active,
    /// Consensus reached, accepting reveals.
    Revealing,
    /// Finalized.
    Completed,
    /// Claimed after the final deadline.
    Failed,
}

/// An on-chain task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainTask {
    /// Task id.
    pub chain_task_id: Bytes32,
    /// Status.
    pub status: ChainTaskStatus,
    /// Id of the deal this task belongs to.
    pub deal_id: Bytes32,
    /// Index of the task within its deal.
    pub idx: u64,
    /// Category time reference, in seconds.
    pub time_ref: u64,
    /// Timestamp after which no contribution is accepted.
    pub contribution_deadline: u64,
    /// Timestamp after which no reveal is accepted.
    pub reveal_deadline: u64,
    /// Timestamp after which the task can only fail.
    pub final_deadline: u64,
    /// Result hash agreed on by consensus.
    pub consensus_value: Bytes32,
    /// Number of reveals so far.
    pub reveal_counter: u64,
    /// Number of contributions agreeing with the consensus.
    pub winner_counter: u64,
    /// Workers that contributed.
    pub contributors: Vec<Address>,
    /// Digest of the finalized result.
    pub result_digest: Bytes32,
    /// Result location.
    pub results: Vec<u8>,
    /// Finalization timestamp.
    pub results_timestamp: u64,
    /// Data passed to the deal's callback.
    pub results_callback: Vec<u8>,
}

/// Where a task stands with respect to the reveal phase at a given time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealOutcome {
    /// Some winners have not revealed and the deadline is ahead.
    Pending,
    /// Every winner revealed.
    AllRevealed,
    /// The deadline passed with `revealed` out of the winners having revealed.
    DeadlineReached {
        /// Number of reveals received.
        revealed: u64,
    },
    /// The deadline passed without any reveal.
    DeadlineReachedWithoutReveal,
}

/// A resource a deal was made with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource contract address.
    pub pointer: Address,
    /// Resource owner.
    pub owner: Address,
    /// Price per task.
    pub price: U256,
}

/// An on-chain deal produced by matching orders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDeal {
    /// Deal id.
    pub chain_deal_id: Bytes32,
    /// App used.
    pub app: Resource,
    /// Dataset used, zero pointer for none.
    pub dataset: Resource,
    /// Workerpool running the tasks.
    pub workerpool: Resource,
    /// Trust level.
    pub trust: U256,
    /// Category index.
    pub category: u64,
    /// Requirement tag.
    pub tag: Bytes32,
    /// Requester account.
    pub requester: Address,
    /// Beneficiary of the results.
    pub beneficiary: Address,
    /// Callback contract, zero for none.
    pub callback: Address,
    /// Execution parameters.
    pub params: String,
    /// Deal start timestamp.
    pub start_time: u64,
    /// Index of the first task of the deal.
    pub bot_first: u64,
    /// Number of tasks in the deal.
    pub bot_size: u64,
    /// Stake required from each worker.
    pub worker_stake: U256,
    /// Share of the workerpool reward kept by the scheduler.
    pub scheduler_reward_ratio: U256,
    /// Account paying for the deal.
    pub sponsor: Address,
}

/// An integer did not map to a status variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid {name} index {value}")]
pub struct InvalidStatus {
    /// Status type name.
    pub name: &'static str,
    /// The rejected value.
    pub value: u64,
}

impl ChainApp {
    /// Parse the enclave configuration, `None` for standard apps or
    /// unparseable content.
    pub fn enclave_configuration(&self) -> Option<EnclaveConfiguration> {
        if self.mr_enclave.is_empty() {
            return None;
        }
        serde_json::from_slice(&self.mr_enclave).ok()
    }
}

impl ChainCategory {
    /// Maximum execution time in milliseconds.
    pub fn max_execution_time_ms(&self) -> u64 {
        self.max_execution_time.saturating_mul(1000)
    }
}

impl ChainTaskStatus {
    const TABLE: [Self; 5] = [
        Self::Unset,
        Self::Active,
        Self::Revealing,
        Self::Completed,
        Self::Failed,
    ];
}

impl ChainContributionStatus {
    const TABLE: [Self; 4] = [
        Self::Unset,
        Self::Contributed,
        Self::Proved,
        Self::Rejected,
    ];
}

impl TryFrom<u64> for ChainTaskStatus {
    type Error = InvalidStatus;
    fn try_from(value: u64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|ix| Self::TABLE.get(ix).copied())
            .ok_or(InvalidStatus {
                name: "task status",
                value,
            })
    }
}

impl TryFrom<u64> for ChainContributionStatus {
    type Error = InvalidStatus;
    fn try_from(value: u64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|ix| Self::TABLE.get(ix).copied())
            .ok_or(InvalidStatus {
                name: "contribution status",
                value,
            })
    }
}

impl ChainTask {
    /// Whether `now` (unix seconds) is at or after the contribution deadline.
    pub fn is_contribution_deadline_reached(&self, now: u64) -> bool {
        now >= self.contribution_deadline
    }

    /// Whether `now` (unix seconds) is at or after the reveal deadline.
    pub fn is_reveal_deadline_reached(&self, now: u64) -> bool {
        now >= self.reveal_deadline
    }

    /// Whether `now` (unix seconds) is at or after the final deadline.
    pub fn is_final_deadline_reached(&self, now: u64) -> bool {
        now >= self.final_deadline
    }

    /// Whether `worker` contributed to this task.
    pub fn has_contributed(&self, worker: &Address) -> bool {
        self.contributors.contains(worker)
    }

    /// Classify the reveal phase at `now`.
    ///
    /// A full reveal takes precedence over the deadline.
    pub fn reveal_outcome(&self, now: u64) -> RevealOutcome {
        if self.winner_counter > 0 && self.reveal_counter >= self.winner_counter {
            return RevealOutcome::AllRevealed;
        }
        if !self.is_reveal_deadline_reached(now) {
            return RevealOutcome::Pending;
        }
        match self.reveal_counter {
            0 => RevealOutcome::DeadlineReachedWithoutReveal,
            revealed => RevealOutcome::DeadlineReached { revealed },
        }
    }

    /// Whether the task can be finalized: every winner revealed, or the
    /// deadline passed with at least one reveal.
    ///
    /// Use [`ChainTask::reveal_outcome`] to tell the two apart.
    pub fn is_revealed(&self, now: u64) -> bool {
        matches!(
            self.reveal_outcome(now),
            RevealOutcome::AllRevealed | RevealOutcome::DeadlineReached { .. }
        )
    }
}

impl ChainDeal {
    /// Whether a dataset is part of this deal.
    pub fn has_dataset(&self) -> bool {
        !self.dataset.pointer.is_zero()
    }

    /// Whether `idx` designates a task of this deal.
    pub fn contains_task(&self, idx: u64) -> bool {
        idx >= self.bot_first && idx - self.bot_first < self.bot_size
    }

    /// Task indices of this deal.
    pub fn task_indices(&self) -> core::ops::Range<u64> {
        self.bot_first..self.bot_first.saturating_add(self.bot_size)
    }
}
