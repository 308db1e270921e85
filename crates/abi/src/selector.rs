//! Function selectors and event topics of the hub and asset registries.
//!
//! Each selector is the first four bytes of the keccak-256 of the signature
//! shown in its documentation.

use poco_types::Bytes32;

/// `createApp(address,string,string,bytes,bytes32,bytes)`
pub const CREATE_APP: [u8; 4] = [0x3f, 0x78, 0x68, 0xff];
/// `predictApp(address,string,string,bytes,bytes32,bytes)`
pub const PREDICT_APP: [u8; 4] = [0xe9, 0x21, 0x18, 0xed];
/// `createDataset(address,string,bytes,bytes32)`
pub const CREATE_DATASET: [u8; 4] = [0x33, 0x54, 0xbc, 0xdb];
/// `predictDataset(address,string,bytes,bytes32)`
pub const PREDICT_DATASET: [u8; 4] = [0xfe, 0x17, 0xfc, 0x7a];
/// `createWorkerpool(address,string)`
pub const CREATE_WORKERPOOL: [u8; 4] = [0xe4, 0x02, 0x38, 0xf4];
/// `predictWorkerpool(address,string)`
pub const PREDICT_WORKERPOOL: [u8; 4] = [0x06, 0x4a, 0x6c, 0x2a];
/// `isRegistered(address)`
pub const IS_REGISTERED: [u8; 4] = [0xc3, 0xc5, 0xa5, 0x47];

/// `matchOrders((address,uint256,uint256,bytes32,address,address,address,bytes32,bytes),(address,uint256,uint256,bytes32,address,address,address,bytes32,bytes),(address,uint256,uint256,bytes32,uint256,uint256,address,address,address,bytes32,bytes),(address,uint256,address,uint256,address,uint256,address,uint256,bytes32,uint256,uint256,address,address,string,bytes32,bytes))`
pub const MATCH_ORDERS: [u8; 4] = [0x15, 0x61, 0x94, 0xd4];
/// `assertDatasetDealCompatibility((address,uint256,uint256,bytes32,address,address,address,bytes32,bytes),bytes32)`
pub const ASSERT_DATASET_DEAL_COMPATIBILITY: [u8; 4] = [0x80, 0xf0, 0x34, 0x25];
/// `initialize(bytes32,uint256)`
pub const INITIALIZE: [u8; 4] = [0x5b, 0x36, 0xc6, 0x6b];
/// `contribute(bytes32,bytes32,bytes32,address,bytes,bytes)`
pub const CONTRIBUTE: [u8; 4] = [0x34, 0x62, 0x34, 0x84];
/// `reveal(bytes32,bytes32)`
pub const REVEAL: [u8; 4] = [0xfc, 0x33, 0x4e, 0x8c];
/// `finalize(bytes32,bytes,bytes)`
pub const FINALIZE: [u8; 4] = [0x8f, 0xc3, 0x75, 0xe5];
/// `contributeAndFinalize(bytes32,bytes32,bytes,bytes,address,bytes,bytes)`
pub const CONTRIBUTE_AND_FINALIZE: [u8; 4] = [0x5f, 0xac, 0xd7, 0x61];

/// `viewDeal(bytes32)`
pub const VIEW_DEAL: [u8; 4] = [0xb7, 0x48, 0x61, 0xb2];
/// `viewTask(bytes32)`
pub const VIEW_TASK: [u8; 4] = [0xad, 0xcc, 0xf0, 0xd5];
/// `viewContribution(bytes32,address)`
pub const VIEW_CONTRIBUTION: [u8; 4] = [0xe7, 0x41, 0x36, 0x3b];
/// `viewCategory(uint256)`
pub const VIEW_CATEGORY: [u8; 4] = [0x4f, 0x5f, 0x44, 0xec];
/// `viewAccount(address)`
pub const VIEW_ACCOUNT: [u8; 4] = [0x6b, 0x55, 0xf4, 0xa5];
/// `viewConsumed(bytes32)`
pub const VIEW_CONSUMED: [u8; 4] = [0x4b, 0x2b, 0xec, 0x8c];
/// `countCategory()`
pub const COUNT_CATEGORY: [u8; 4] = [0xc1, 0x40, 0x99, 0x6f];
/// `callbackgas()`
pub const CALLBACK_GAS: [u8; 4] = [0xe6, 0x3e, 0xc0, 0x7d];
/// `contribution_deadline_ratio()`
pub const CONTRIBUTION_DEADLINE_RATIO: [u8; 4] = [0x74, 0xed, 0x52, 0x44];
/// `reveal_deadline_ratio()`
pub const REVEAL_DEADLINE_RATIO: [u8; 4] = [0x2b, 0x88, 0x57, 0xc1];
/// `final_deadline_ratio()`
pub const FINAL_DEADLINE_RATIO: [u8; 4] = [0xdb, 0x8a, 0xaa, 0x26];

/// `owner()`
pub const OWNER: [u8; 4] = [0x8d, 0xa5, 0xcb, 0x5b];
/// `m_appName()`
pub const APP_NAME: [u8; 4] = [0x35, 0x89, 0x82, 0xa3];
/// `m_appType()`
pub const APP_TYPE: [u8; 4] = [0xf8, 0xc2, 0xce, 0xb3];
/// `m_appMultiaddr()`
pub const APP_MULTIADDR: [u8; 4] = [0x39, 0xe7, 0x5d, 0x45];
/// `m_appChecksum()`
pub const APP_CHECKSUM: [u8; 4] = [0x84, 0xaa, 0xf1, 0x2e];
/// `m_appMREnclave()`
pub const APP_MR_ENCLAVE: [u8; 4] = [0xe3, 0x0d, 0x26, 0xa8];
/// `m_datasetName()`
pub const DATASET_NAME: [u8; 4] = [0x08, 0x47, 0xc4, 0x31];
/// `m_datasetMultiaddr()`
pub const DATASET_MULTIADDR: [u8; 4] = [0xa6, 0x1c, 0xa6, 0xc5];
/// `m_datasetChecksum()`
pub const DATASET_CHECKSUM: [u8; 4] = [0x1b, 0xa9, 0x9d, 0x7e];
/// `m_workerpoolDescription()`
pub const WORKERPOOL_DESCRIPTION: [u8; 4] = [0x58, 0x4f, 0xeb, 0x3a];

/// `Transfer(address,address,uint256)`
pub const TRANSFER_EVENT: Bytes32 = Bytes32([
    0xdd, 0xf2, 0x52, 0xad, 0x1b, 0xe2, 0xc8, 0x9b, 0x69, 0xc2, 0xb0, 0x68, 0xfc, 0x37, 0x8d, 0xaa,
    0x95, 0x2b, 0xa7, 0xf1, 0x63, 0xc4, 0xa1, 0x16, 0x28, 0xf5, 0x5a, 0x4d, 0xf5, 0x23, 0xb3, 0xef,
]);

/// `SchedulerNotice(address,bytes32)`
pub const SCHEDULER_NOTICE_EVENT: Bytes32 = Bytes32([
    0x69, 0x2a, 0xd6, 0x10, 0x76, 0xdc, 0xed, 0xdd, 0x0f, 0x1a, 0x86, 0x1f, 0x73, 0x75, 0x53, 0xdd,
    0x61, 0xfc, 0x85, 0x01, 0xcf, 0x41, 0x90, 0xd2, 0x9c, 0x4e, 0x90, 0xaf, 0x66, 0x07, 0xf7, 0x65,
]);

/// Call-data of a function taking no argument.
pub fn call_without_arguments(selector: [u8; 4]) -> String {
    format!("0x{}", hex::encode(selector))
}
