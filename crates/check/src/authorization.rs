//! Items related to the validation of worker authorizations.

use crate::{
    sign::authorization::{verify_authorization, WorkerpoolAuthorization},
    types::{Address, Bytes32},
};
use thiserror::Error;

/// [`check_authorization`] error.
#[derive(Debug, Error)]
pub enum InvalidAuthorization {
    /// The authorization is for another worker.
    #[error("authorization is for worker {found}, expected {expected}")]
    Worker {
        /// Worker asking to contribute.
        expected: Address,
        /// Worker named in the authorization.
        found: Address,
    },
    /// The authorization is for another task.
    #[error("authorization is for task {found}, expected {expected}")]
    Task {
        /// Task being contributed to.
        expected: Bytes32,
        /// Task named in the authorization.
        found: Bytes32,
    },
    /// The authorization is not signed by the scheduler.
    #[error("authorization is signed by {found:?}, expected scheduler {expected}")]
    Signer {
        /// Owner of the deal's workerpool.
        expected: Address,
        /// Address recovered from the signature, if any.
        found: Option<Address>,
    },
}

/// Validate that `authorization` lets `worker` contribute to
/// `chain_task_id`, signed by `scheduler`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(worker = %worker, task = %chain_task_id), err))]
pub fn check_authorization(
    authorization: &WorkerpoolAuthorization,
    worker: &Address,
    chain_task_id: &Bytes32,
    scheduler: &Address,
) -> Result<(), InvalidAuthorization> {
    if authorization.worker_wallet != *worker {
        return Err(InvalidAuthorization::Worker {
            expected: *worker,
            found: authorization.worker_wallet,
        });
    }
    if authorization.chain_task_id != *chain_task_id {
        return Err(InvalidAuthorization::Task {
            expected: *chain_task_id,
            found: authorization.chain_task_id,
        });
    }
    if !verify_authorization(authorization, scheduler) {
        return Err(InvalidAuthorization::Signer {
            expected: *scheduler,
            found: authorization.signer(),
        });
    }
    Ok(())
}
