//! # Orders
//! Off-chain market intents that are signed, published and later matched
//! on-chain into a deal.
//!
//! Orders are immutable. Attaching a signature with
//! [`Order::with_signature`] yields a new order and leaves the unsigned
//! original untouched.

use crate::{Address, Bytes32, Signature, U256};
use serde::{Deserialize, Serialize};


/// Behaviour shared by the four order kinds.
pub trait Order: Clone {
    /// Number of tasks this order may be matched for.
    fn volume(&self) -> U256;
    /// Requirement tag (TEE bits etc.).
    fn tag(&self) -> Bytes32;
    /// Salt making otherwise identical orders distinct.
    fn salt(&self) -> Bytes32;
    /// The attached signature, absent for unsigned orders.
    fn signature(&self) -> Option<&Signature>;
    /// A copy of this order carrying `signature`.
    fn with_signature(&self, signature: Signature) -> Self;

    /// Whether a signature is attached.
    fn is_signed(&self) -> bool {
        self.signature().is_some()
    }
}

/// Offer to run an app.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppOrder {
    /// App contract address.
    pub app: Address,
    /// Price per task.
    #[serde(rename = "appprice")]
    pub app_price: U256,
    /// Number of tasks.
    pub volume: U256,
    /// Requirement tag.
    pub tag: Bytes32,
    /// Only this dataset may be used, unless zero.
    #[serde(rename = "datasetrestrict")]
    pub dataset_restrict: Address,
    /// Only this workerpool may be used, unless zero.
    #[serde(rename = "workerpoolrestrict")]
    pub workerpool_restrict: Address,
    /// Only this requester may be served, unless zero.
    #[serde(rename = "requesterrestrict")]
    pub requester_restrict: Address,
    /// Salt.
    pub salt: Bytes32,
    /// Owner signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<Signature>,
}

/// Offer to lend a dataset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetOrder {
    /// Dataset contract address.
    pub dataset: Address,
    /// Price per task.
    #[serde(rename = "datasetprice")]
    pub dataset_price: U256,
    /// Number of tasks.
    pub volume: U256,
    /// Requirement tag.
    pub tag: Bytes32,
    /// Only this app may be used, unless zero.
    #[serde(rename = "apprestrict")]
    pub app_restrict: Address,
    /// Only this workerpool may be used, unless zero.
    #[serde(rename = "workerpoolrestrict")]
    pub workerpool_restrict: Address,
    /// Only this requester may be served, unless zero.
    #[serde(rename = "requesterrestrict")]
    pub requester_restrict: Address,
    /// Salt.
    pub salt: Bytes32,
    /// Owner signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<Signature>,
}

/// Offer of computing power.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerpoolOrder {
    /// Workerpool contract address.
    pub workerpool: Address,
    /// Price per task.
    #[serde(rename = "workerpoolprice")]
    pub workerpool_price: U256,
    /// Number of tasks.
    pub volume: U256,
    /// Requirement tag.
    pub tag: Bytes32,
    /// Category the workerpool runs tasks in.
    pub category: U256,
    /// Trust level offered.
    pub trust: U256,
    /// Only this app may be used, unless zero.
    #[serde(rename = "apprestrict")]
    pub app_restrict: Address,
    /// Only this dataset may be used, unless zero.
    #[serde(rename = "datasetrestrict")]
    pub dataset_restrict: Address,
    /// Only this requester may be served, unless zero.
    #[serde(rename = "requesterrestrict")]
    pub requester_restrict: Address,
    /// Salt.
    pub salt: Bytes32,
    /// Owner signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<Signature>,
}

/// Request to run an app, optionally on a dataset, within price bounds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestOrder {
    /// App to run.
    pub app: Address,
    /// Maximum app price.
    #[serde(rename = "appmaxprice")]
    pub app_max_price: U256,
    /// Dataset to use, zero for none.
    pub dataset: Address,
    /// Maximum dataset price.
    #[serde(rename = "datasetmaxprice")]
    pub dataset_max_price: U256,
    /// Workerpool to use, zero for any.
    pub workerpool: Address,
    /// Maximum workerpool price.
    #[serde(rename = "workerpoolmaxprice")]
    pub workerpool_max_price: U256,
    /// Requester account.
    pub requester: Address,
    /// Number of tasks.
    pub volume: U256,
    /// Requirement tag.
    pub tag: Bytes32,
    /// Category to run in.
    pub category: U256,
    /// Minimum trust level.
    pub trust: U256,
    /// Account receiving the results.
    pub beneficiary: Address,
    /// Contract called back with the results, zero for none.
    pub callback: Address,
    /// Execution parameters, see [`DealParams`](crate::deal_params::DealParams).
    pub params: String,
    /// Salt.
    pub salt: Bytes32,
    /// Requester signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<Signature>,
}

macro_rules! impl_order {
    ($($ty:ty),*) => {
        $(
            impl Order for $ty {
                fn volume(&self) -> U256 {
                    self.volume
                }

                fn tag(&self) -> Bytes32 {
                    self.tag
                }

                fn salt(&self) -> Bytes32 {
                    self.salt
                }

                fn signature(&self) -> Option<&Signature> {
                    self.sign.as_ref()
                }

                fn with_signature(&self, signature: Signature) -> Self {
                    Self {
                        sign: Some(signature),
                        ..self.clone()
                    }
                }
            }
        )*
    };
}

impl_order!(AppOrder, DatasetOrder, WorkerpoolOrder, RequestOrder);
