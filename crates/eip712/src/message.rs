use crate::{
    Eip712Message, Field,
    FieldType::{Address, Bytes32, String as Str, Uint256},
    FieldValue as V,
};
use poco_types::{AppOrder, DatasetOrder, RequestOrder, WorkerpoolOrder};
use serde::{Deserialize, Serialize};

/// A challenge string signed to prove control of an account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// The challenge text.
    pub challenge: String,
}

const fn field(name: &'static str, ty: crate::FieldType) -> Field {
    Field { name, ty }
}

impl Eip712Message for Challenge {
    const PRIMARY_TYPE: &'static str = "Challenge";
    const FIELDS: &'static [Field] = &[field("challenge", Str)];

    fn values(&self) -> Vec<V<'_>> {
        vec![V::String(&self.challenge)]
    }
}

impl Eip712Message for AppOrder {
    const PRIMARY_TYPE: &'static str = "AppOrder";
    const FIELDS: &'static [Field] = &[
        field("app", Address),
        field("appprice", Uint256),
        field("volume", Uint256),
        field("tag", Bytes32),
        field("datasetrestrict", Address),
        field("workerpoolrestrict", Address),
        field("requesterrestrict", Address),
        field("salt", Bytes32),
    ];

    fn values(&self) -> Vec<V<'_>> {
        vec![
            V::Address(self.app),
            V::Uint256(self.app_price),
            V::Uint256(self.volume),
            V::Bytes32(self.tag),
            V::Address(self.dataset_restrict),
            V::Address(self.workerpool_restrict),
            V::Address(self.requester_restrict),
            V::Bytes32(self.salt),
        ]
    }
}

impl Eip712Message for DatasetOrder {
    const PRIMARY_TYPE: &'static str = "DatasetOrder";
    const FIELDS: &'static [Field] = &[
        field("dataset", Address),
        field("datasetprice", Uint256),
        field("volume", Uint256),
        field("tag", Bytes32),
        field("apprestrict", Address),
        field("workerpoolrestrict", Address),
        field("requesterrestrict", Address),
        field("salt", Bytes32),
    ];

    fn values(&self) -> Vec<V<'_>> {
        vec![
            V::Address(self.dataset),
            V::Uint256(self.dataset_price),
            V::Uint256(self.volume),
            V::Bytes32(self.tag),
            V::Address(self.app_restrict),
            V::Address(self.workerpool_restrict),
            V::Address(self.requester_restrict),
            V::Bytes32(self.salt),
        ]
    }
}

impl Eip712Message for WorkerpoolOrder {
    const PRIMARY_TYPE: &'static str = "WorkerpoolOrder";
    const FIELDS: &'static [Field] = &[
        field("workerpool", Address),
        field("workerpoolprice", Uint256),
        field("volume", Uint256),
        field("tag", Bytes32),
        field("category", Uint256),
        field("trust", Uint256),
        field("apprestrict", Address),
        field("datasetrestrict", Address),
        field("requesterrestrict", Address),
        field("salt", Bytes32),
    ];

    fn values(&self) -> Vec<V<'_>> {
        vec![
            V::Address(self.workerpool),
            V::Uint256(self.workerpool_price),
            V::Uint256(self.volume),
            V::Bytes32(self.tag),
            V::Uint256(self.category),
            V::Uint256(self.trust),
            V::Address(self.app_restrict),
            V::Address(self.dataset_restrict),
            V::Address(self.requester_restrict),
            V::Bytes32(self.salt),
        ]
    }
}

impl Eip712Message for RequestOrder {
    const PRIMARY_TYPE: &'static str = "RequestOrder";
    const FIELDS: &'static [Field] = &[
        field("app", Address),
        field("appmaxprice", Uint256),
        field("dataset", Address),
        field("datasetmaxprice", Uint256),
        field("workerpool", Address),
        field("workerpoolmaxprice", Uint256),
        field("requester", Address),
        field("volume", Uint256),
        field("tag", Bytes32),
        field("category", Uint256),
        field("trust", Uint256),
        field("beneficiary", Address),
        field("callback", Address),
        field("params", Str),
        field("salt", Bytes32),
    ];

    fn values(&self) -> Vec<V<'_>> {
        vec![
            V::Address(self.app),
            V::Uint256(self.app_max_price),
            V::Address(self.dataset),
            V::Uint256(self.dataset_max_price),
            V::Address(self.workerpool),
            V::Uint256(self.workerpool_max_price),
            V::Address(self.requester),
            V::Uint256(self.volume),
            V::Bytes32(self.tag),
            V::Uint256(self.category),
            V::Uint256(self.trust),
            V::Address(self.beneficiary),
            V::Address(self.callback),
            V::String(&self.params),
            V::Bytes32(self.salt),
        ]
    }
}
