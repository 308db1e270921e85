//! # Hub
//! Call-data for the hub's market and task functions and decoders for the
//! entities its view functions return.
//!
//! ## Return layouts
//! `viewDeal`, `viewTask` and `viewCategory` return a single dynamic tuple,
//! so their first word is the offset of that tuple. `viewContribution` and
//! `viewAccount` return static tuples laid out inline.

use crate::{
    decode::{DecodeError, Tuple},
    encode::{encode_call, Token},
    order::{decode_order, AbiOrder},
    selector,
    word::words_from_hex,
};
use poco_types::{
    chain::Resource, Address, AppOrder, Bytes32, ChainAccount, ChainCategory, ChainContribution,
    ChainContributionStatus, ChainDeal, ChainTask, ChainTaskStatus, DatasetOrder, RequestOrder,
    Signature, WorkerpoolOrder,
};


/// Head words of the deal tuple.
pub const DEAL_HEAD_LEN: usize = 22;
/// Head words of the task tuple.
pub const TASK_HEAD_LEN: usize = 15;
/// Head words of the category tuple.
pub const CATEGORY_HEAD_LEN: usize = 3;
/// Words of the contribution tuple.
pub const CONTRIBUTION_LEN: usize = 5;
/// Words of the account tuple.
pub const ACCOUNT_LEN: usize = 2;

/// The four orders submitted together to `matchOrders`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchOrders {
    /// The app order.
    pub app: AppOrder,
    /// The dataset order, all zero when no dataset is used.
    pub dataset: DatasetOrder,
    /// The workerpool order.
    pub workerpool: WorkerpoolOrder,
    /// The request order.
    pub request: RequestOrder,
}

/// `matchOrders(appOrder, datasetOrder, workerpoolOrder, requestOrder)`.
pub fn encode_match_orders(orders: &MatchOrders) -> String {
    encode_call(
        selector::MATCH_ORDERS,
        &[
            orders.app.to_token(),
            orders.dataset.to_token(),
            orders.workerpool.to_token(),
            orders.request.to_token(),
        ],
    )
}

/// Read the orders back out of `matchOrders` call-data.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
pub fn decode_match_orders(call_data: &str) -> Result<MatchOrders, DecodeError> {
    let args = strip_selector(call_data, selector::MATCH_ORDERS)?;
    let words = words_from_hex(args)?;
    let outer = Tuple::new(&words, 0, 4)?;
    Ok(MatchOrders {
        app: decode_order(&outer, 0)?,
        dataset: decode_order(&outer, 1)?,
        workerpool: decode_order(&outer, 2)?,
        request: decode_order(&outer, 3)?,
    })
}

/// `assertDatasetDealCompatibility(datasetOrder, dealId)`.
pub fn encode_assert_dataset_deal_compatibility(
    dataset_order: &DatasetOrder,
    chain_deal_id: &Bytes32,
) -> String {
    encode_call(
        selector::ASSERT_DATASET_DEAL_COMPATIBILITY,
        &[dataset_order.to_token(), Token::FixedBytes(*chain_deal_id)],
    )
}

/// `initialize(dealId, idx)`.
pub fn encode_initialize(chain_deal_id: &Bytes32, task_index: u64) -> String {
    encode_call(
        selector::INITIALIZE,
        &[Token::FixedBytes(*chain_deal_id), task_index.into()],
    )
}

/// `contribute(taskId, resultHash, resultSeal, enclaveChallenge, enclaveSign, authorizationSign)`.
///
/// Outside an enclave, `enclave_challenge` is the zero address and
/// `enclave_sign` is [`Signature::ZERO`].
pub fn encode_contribute(
    chain_task_id: &Bytes32,
    result_hash: &Bytes32,
    result_seal: &Bytes32,
    enclave_challenge: &Address,
    enclave_sign: &Signature,
    authorization_sign: &Signature,
) -> String {
    encode_call(
        selector::CONTRIBUTE,
        &[
            Token::FixedBytes(*chain_task_id),
            Token::FixedBytes(*result_hash),
            Token::FixedBytes(*result_seal),
            Token::Address(*enclave_challenge),
            Token::Bytes(enclave_sign.to_bytes().to_vec()),
            Token::Bytes(authorization_sign.to_bytes().to_vec()),
        ],
    )
}

/// `reveal(taskId, resultDigest)`.
pub fn encode_reveal(chain_task_id: &Bytes32, result_digest: &Bytes32) -> String {
    encode_call(
        selector::REVEAL,
        &[
            Token::FixedBytes(*chain_task_id),
            Token::FixedBytes(*result_digest),
        ],
    )
}

/// `finalize(taskId, results, resultsCallback)`.
pub fn encode_finalize(chain_task_id: &Bytes32, results: &[u8], results_callback: &[u8]) -> String {
    encode_call(
        selector::FINALIZE,
        &[
            Token::FixedBytes(*chain_task_id),
            Token::Bytes(results.to_vec()),
            Token::Bytes(results_callback.to_vec()),
        ],
    )
}

/// Arguments of `contributeAndFinalize`, the single-step flow of TEE tasks
/// with trust 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContributeAndFinalize {
    /// Task being completed.
    pub chain_task_id: Bytes32,
    /// Digest of the result.
    pub result_digest: Bytes32,
    /// Result location.
    pub results: Vec<u8>,
    /// Data handed to the callback contract.
    pub results_callback: Vec<u8>,
    /// Enclave signing key address.
    pub enclave_challenge: Address,
    /// Enclave signature of the contribution.
    pub enclave_sign: Signature,
    /// Scheduler authorization of the worker.
    pub authorization_sign: Signature,
}

/// `contributeAndFinalize(taskId, resultDigest, results, resultsCallback, enclaveChallenge, enclaveSign, authorizationSign)`.
pub fn encode_contribute_and_finalize(args: &ContributeAndFinalize) -> String {
    encode_call(
        selector::CONTRIBUTE_AND_FINALIZE,
        &[
            Token::FixedBytes(args.chain_task_id),
            Token::FixedBytes(args.result_digest),
            Token::Bytes(args.results.clone()),
            Token::Bytes(args.results_callback.clone()),
            Token::Address(args.enclave_challenge),
            Token::Bytes(args.enclave_sign.to_bytes().to_vec()),
            Token::Bytes(args.authorization_sign.to_bytes().to_vec()),
        ],
    )
}

/// `viewDeal(dealId)`.
pub fn encode_view_deal(chain_deal_id: &Bytes32) -> String {
    encode_call(selector::VIEW_DEAL, &[Token::FixedBytes(*chain_deal_id)])
}

/// `viewTask(taskId)`.
pub fn encode_view_task(chain_task_id: &Bytes32) -> String {
    encode_call(selector::VIEW_TASK, &[Token::FixedBytes(*chain_task_id)])
}

/// `viewContribution(taskId, worker)`.
pub fn encode_view_contribution(chain_task_id: &Bytes32, worker: &Address) -> String {
    encode_call(
        selector::VIEW_CONTRIBUTION,
        &[Token::FixedBytes(*chain_task_id), Token::Address(*worker)],
    )
}

/// `viewCategory(id)`.
pub fn encode_view_category(category: u64) -> String {
    encode_call(selector::VIEW_CATEGORY, &[category.into()])
}

/// `viewAccount(account)`.
pub fn encode_view_account(account: &Address) -> String {
    encode_call(selector::VIEW_ACCOUNT, &[Token::Address(*account)])
}

/// `viewConsumed(orderHash)`.
pub fn encode_view_consumed(order_hash: &Bytes32) -> String {
    encode_call(selector::VIEW_CONSUMED, &[Token::FixedBytes(*order_hash)])
}

fn resource(t: &Tuple<'_>, first: usize) -> Result<Resource, DecodeError> {
    Ok(Resource {
        pointer: t.address(first)?,
        owner: t.address(first + 1)?,
        price: t.u256(first + 2)?,
    })
}

/// Decode `viewDeal` return data.
///
/// # Layout
/// | words | field |
/// |-------|-------|
/// | 0-2 | app pointer, owner, price |
/// | 3-5 | dataset pointer, owner, price |
/// | 6-8 | workerpool pointer, owner, price |
/// | 9-14 | trust, category, tag, requester, beneficiary, callback |
/// | 15 | offset of `params` |
/// | 16-21 | startTime, botFirst, botSize, workerStake, schedulerRewardRatio, sponsor |
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(deal = %chain_deal_id), err))]
pub fn decode_deal(chain_deal_id: &Bytes32, raw: &str) -> Result<ChainDeal, DecodeError> {
    let words = words_from_hex(raw)?;
    let t = Tuple::new(&words, 0, 1)?.tuple(0, DEAL_HEAD_LEN)?;
    Ok(ChainDeal {
        chain_deal_id: *chain_deal_id,
        app: resource(&t, 0)?,
        dataset: resource(&t, 3)?,
        workerpool: resource(&t, 6)?,
        trust: t.u256(9)?,
        category: t.u64(10)?,
        tag: t.bytes32(11)?,
        requester: t.address(12)?,
        beneficiary: t.address(13)?,
        callback: t.address(14)?,
        params: t.string(15)?,
        start_time: t.u64(16)?,
        bot_first: t.u64(17)?,
        bot_size: t.u64(18)?,
        worker_stake: t.u256(19)?,
        scheduler_reward_ratio: t.u256(20)?,
        sponsor: t.address(21)?,
    })
}

/// Decode `viewTask` return data.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(task = %chain_task_id), err))]
pub fn decode_task(chain_task_id: &Bytes32, raw: &str) -> Result<ChainTask, DecodeError> {
    let words = words_from_hex(raw)?;
    let t = Tuple::new(&words, 0, 1)?.tuple(0, TASK_HEAD_LEN)?;
    Ok(ChainTask {
        chain_task_id: *chain_task_id,
        status: ChainTaskStatus::try_from(t.u64(0)?)?,
        deal_id: t.bytes32(1)?,
        idx: t.u64(2)?,
        time_ref: t.u64(3)?,
        contribution_deadline: t.u64(4)?,
        reveal_deadline: t.u64(5)?,
        final_deadline: t.u64(6)?,
        consensus_value: t.bytes32(7)?,
        reveal_counter: t.u64(8)?,
        winner_counter: t.u64(9)?,
        contributors: t.address_array(10)?,
        result_digest: t.bytes32(11)?,
        results: t.bytes(12)?,
        results_timestamp: t.u64(13)?,
        results_callback: t.bytes(14)?,
    })
}

/// Decode `viewCategory` return data.
///
/// A zero execution time decodes successfully; rejecting it is left to the
/// caller.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(category = id), err))]
pub fn decode_category(id: u64, raw: &str) -> Result<ChainCategory, DecodeError> {
    let words = words_from_hex(raw)?;
    let t = Tuple::new(&words, 0, 1)?.tuple(0, CATEGORY_HEAD_LEN)?;
    Ok(ChainCategory {
        id,
        name: t.string(0)?,
        description: t.string(1)?,
        max_execution_time: t.u64(2)?,
    })
}

/// Decode `viewContribution` return data.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
pub fn decode_contribution(raw: &str) -> Result<ChainContribution, DecodeError> {
    let words = words_from_hex(raw)?;
    let t = Tuple::new(&words, 0, CONTRIBUTION_LEN)?;
    Ok(ChainContribution {
        status: ChainContributionStatus::try_from(t.u64(0)?)?,
        result_hash: t.bytes32(1)?,
        result_seal: t.bytes32(2)?,
        enclave_challenge: t.address(3)?,
        weight: t.u256(4)?,
    })
}

/// Decode `viewAccount` return data.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
pub fn decode_account(raw: &str) -> Result<ChainAccount, DecodeError> {
    let words = words_from_hex(raw)?;
    let t = Tuple::new(&words, 0, ACCOUNT_LEN)?;
    Ok(ChainAccount {
        deposit: t.u256(0)?,
        locked: t.u256(1)?,
    })
}

fn strip_selector(call_data: &str, expected: [u8; 4]) -> Result<&str, DecodeError> {
    let hex = poco_types::strip_hex_prefix(call_data);
    let at = hex.char_indices().nth(8).map_or(hex.len(), |(ix, _)| ix);
    let (head, args) = hex.split_at(at);
    let found = hex::decode(head)?;
    if found != expected {
        return Err(DecodeError::Selector { expected, found });
    }
    Ok(args)
}
