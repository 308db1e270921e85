//! A flattened view of a task and the deal it belongs to.

use crate::{
    deal_params::DealParams,
    tag::{self, TeeFramework},
    Address, Bytes32, ChainDeal, ChainTask, U256,
};
use serde::{Deserialize, Serialize};

/// Everything a worker needs to know to run a task.
///
/// Recomputed from its [`ChainDeal`] and [`ChainTask`] on demand and never
/// stored on its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDescription {
    /// Task id.
    pub chain_task_id: Bytes32,
    /// Deal id.
    pub chain_deal_id: Bytes32,
    /// Requester account.
    pub requester: Address,
    /// Beneficiary of the results.
    pub beneficiary: Address,
    /// Callback contract, zero for none.
    pub callback: Address,
    /// App contract address.
    pub app_address: Address,
    /// Dataset contract address, zero for none.
    pub dataset_address: Address,
    /// Workerpool owner, the scheduler signing worker authorizations.
    pub workerpool_owner: Address,
    /// Category index.
    pub category: u64,
    /// Trust level.
    pub trust: U256,
    /// Requirement tag.
    pub tag: Bytes32,
    /// Whether the task runs in an enclave.
    pub is_tee_task: bool,
    /// Enclave framework for TEE tasks.
    pub tee_framework: Option<TeeFramework>,
    /// Index of the task within its deal.
    pub bot_index: u64,
    /// Number of tasks in the deal.
    pub bot_size: u64,
    /// Index of the first task of the deal.
    pub bot_first_index: u64,
    /// Parsed deal parameters.
    pub deal_params: DealParams,
    /// Deal start timestamp.
    pub start_time: u64,
    /// Contribution deadline timestamp.
    pub contribution_deadline: u64,
    /// Final deadline timestamp.
    pub final_deadline: u64,
}

impl TaskDescription {
    /// Combine a deal and one of its tasks.
    ///
    /// Returns `None` when either side is missing.
    pub fn from_chain(deal: Option<&ChainDeal>, task: Option<&ChainTask>) -> Option<Self> {
        let (deal, task) = (deal?, task?);
        Some(Self {
            chain_task_id: task.chain_task_id,
            chain_deal_id: deal.chain_deal_id,
            requester: deal.requester,
            beneficiary: deal.beneficiary,
            callback: deal.callback,
            app_address: deal.app.pointer,
            dataset_address: deal.dataset.pointer,
            workerpool_owner: deal.workerpool.owner,
            category: deal.category,
            trust: deal.trust,
            tag: deal.tag,
            is_tee_task: tag::is_tee_tag(&deal.tag),
            tee_framework: tag::tee_framework(&deal.tag),
            bot_index: task.idx,
            bot_size: deal.bot_size,
            bot_first_index: deal.bot_first,
            deal_params: DealParams::from_params(&deal.params),
            start_time: deal.start_time,
            contribution_deadline: task.contribution_deadline,
            final_deadline: task.final_deadline,
        })
    }

    /// Whether a dataset is used.
    pub fn contains_dataset(&self) -> bool {
        !self.dataset_address.is_zero()
    }

    /// Whether results are sent to a callback contract.
    pub fn contains_callback(&self) -> bool {
        !self.callback.is_zero()
    }

    /// Whether input files are downloaded before execution.
    pub fn contains_input_files(&self) -> bool {
        !self.deal_params.input_files.is_empty()
    }
}
