//! Items related to the validation of decoded hub entities.

use crate::types::{Bytes32, ChainCategory, ChainDeal, ChainTask, ChainTaskStatus};
use poco_hash::protocol::chain_task_id;
use thiserror::Error;


/// [`check_category`] error.
#[derive(Debug, Error)]
pub enum InvalidCategory {
    /// Tasks of this category would have no time to run.
    #[error("category {0} has a zero max execution time")]
    ZeroMaxExecutionTime(u64),
}

/// [`check_deal`] error.
#[derive(Debug, Error)]
pub enum InvalidDeal {
    /// The deal was never created.
    #[error("deal has a zero start time")]
    ZeroStartTime,
    /// The deal references no app.
    #[error("deal has no app")]
    NoApp,
    /// The deal references no workerpool.
    #[error("deal has no workerpool")]
    NoWorkerpool,
    /// The deal contains no task.
    #[error("deal has an empty bag of tasks")]
    EmptyBag,
    /// The last task index overflows.
    #[error("bag of tasks starting at {bot_first} with {bot_size} tasks overflows")]
    BagOverflow {
        /// First task index.
        bot_first: u64,
        /// Number of tasks.
        bot_size: u64,
    },
}

/// [`check_task`] error.
#[derive(Debug, Error)]
pub enum InvalidTask {
    /// The task was never initialized.
    #[error("task is not initialized")]
    Unset,
    /// The task belongs to another deal.
    #[error("task belongs to deal {found}, expected {expected}")]
    DealMismatch {
        /// Id of the deal checked against.
        expected: Bytes32,
        /// Deal id carried by the task.
        found: Bytes32,
    },
    /// The task index is outside the deal's bag of tasks.
    #[error("task index {0} is not part of the deal")]
    IndexOutOfDeal(u64),
    /// The task id is not derived from its deal id and index.
    #[error("task id {found} does not derive from its deal, expected {expected}")]
    IdMismatch {
        /// Id derived from the deal id and task index.
        expected: Bytes32,
        /// Id carried by the task.
        found: Bytes32,
    },
    /// The contribution deadline falls after the final deadline.
    #[error("contribution deadline {contribution} is after final deadline {last}")]
    DeadlinesOutOfOrder {
        /// Contribution deadline.
        contribution: u64,
        /// Final deadline.
        last: u64,
    },
}

/// Validate a category.
pub fn check_category(category: &ChainCategory) -> Result<(), InvalidCategory> {
    if category.max_execution_time == 0 {
        #[cfg(feature = "tracing")]
        tracing::debug!(id = category.id, "rejecting category without execution time");
        return Err(InvalidCategory::ZeroMaxExecutionTime(category.id));
    }
    Ok(())
}

/// Validate a deal.
///
/// Checks that the deal was created and that its bag of tasks is usable.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(deal = %deal.chain_deal_id), err))]
pub fn check_deal(deal: &ChainDeal) -> Result<(), InvalidDeal> {
    if deal.start_time == 0 {
        return Err(InvalidDeal::ZeroStartTime);
    }
    if deal.app.pointer.is_zero() {
        return Err(InvalidDeal::NoApp);
    }
    if deal.workerpool.pointer.is_zero() {
        return Err(InvalidDeal::NoWorkerpool);
    }
    if deal.bot_size == 0 {
        return Err(InvalidDeal::EmptyBag);
    }
    if deal.bot_first.checked_add(deal.bot_size).is_none() {
        return Err(InvalidDeal::BagOverflow {
            bot_first: deal.bot_first,
            bot_size: deal.bot_size,
        });
    }
    Ok(())
}

/// Validate a task against the deal it claims to belong to.
///
/// The deal itself is assumed valid, see [`check_deal`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(task = %task.chain_task_id), err))]
pub fn check_task(task: &ChainTask, deal: &ChainDeal) -> Result<(), InvalidTask> {
    if task.status == ChainTaskStatus::Unset {
        return Err(InvalidTask::Unset);
    }
    if task.deal_id != deal.chain_deal_id {
        return Err(InvalidTask::DealMismatch {
            expected: deal.chain_deal_id,
            found: task.deal_id,
        });
    }
    if !deal.contains_task(task.idx) {
        return Err(InvalidTask::IndexOutOfDeal(task.idx));
    }
    let expected = chain_task_id(&deal.chain_deal_id, task.idx);
    if task.chain_task_id != expected {
        return Err(InvalidTask::IdMismatch {
            expected,
            found: task.chain_task_id,
        });
    }
    if task.contribution_deadline > task.final_deadline {
        return Err(InvalidTask::DeadlinesOutOfOrder {
            contribution: task.contribution_deadline,
            last: task.final_deadline,
        });
    }
    Ok(())
}
