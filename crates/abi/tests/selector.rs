use poco_abi::selector::*;
use poco_hash::{event_topic, selector};
use test_case::test_case;

#[test_case(CREATE_APP, "createApp(address,string,string,bytes,bytes32,bytes)")]
#[test_case(PREDICT_APP, "predictApp(address,string,string,bytes,bytes32,bytes)")]
#[test_case(CREATE_DATASET, "createDataset(address,string,bytes,bytes32)")]
#[test_case(PREDICT_DATASET, "predictDataset(address,string,bytes,bytes32)")]
#[test_case(CREATE_WORKERPOOL, "createWorkerpool(address,string)")]
#[test_case(PREDICT_WORKERPOOL, "predictWorkerpool(address,string)")]
#[test_case(IS_REGISTERED, "isRegistered(address)")]
#[test_case(MATCH_ORDERS, "matchOrders((address,uint256,uint256,bytes32,address,address,address,bytes32,bytes),(address,uint256,uint256,bytes32,address,address,address,bytes32,bytes),(address,uint256,uint256,bytes32,uint256,uint256,address,address,address,bytes32,bytes),(address,uint256,address,uint256,address,uint256,address,uint256,bytes32,uint256,uint256,address,address,string,bytes32,bytes))")]
#[test_case(ASSERT_DATASET_DEAL_COMPATIBILITY, "assertDatasetDealCompatibility((address,uint256,uint256,bytes32,address,address,address,bytes32,bytes),bytes32)")]
#[test_case(INITIALIZE, "initialize(bytes32,uint256)")]
#[test_case(CONTRIBUTE, "contribute(bytes32,bytes32,bytes32,address,bytes,bytes)")]
#[test_case(REVEAL, "reveal(bytes32,bytes32)")]
#[test_case(FINALIZE, "finalize(bytes32,bytes,bytes)")]
#[test_case(CONTRIBUTE_AND_FINALIZE, "contributeAndFinalize(bytes32,bytes32,bytes,bytes,address,bytes,bytes)")]
#[test_case(VIEW_DEAL, "viewDeal(bytes32)")]
#[test_case(VIEW_TASK, "viewTask(bytes32)")]
#[test_case(VIEW_CONTRIBUTION, "viewContribution(bytes32,address)")]
#[test_case(VIEW_CATEGORY, "viewCategory(uint256)")]
#[test_case(VIEW_ACCOUNT, "viewAccount(address)")]
#[test_case(VIEW_CONSUMED, "viewConsumed(bytes32)")]
#[test_case(COUNT_CATEGORY, "countCategory()")]
#[test_case(CALLBACK_GAS, "callbackgas()")]
#[test_case(CONTRIBUTION_DEADLINE_RATIO, "contribution_deadline_ratio()")]
#[test_case(REVEAL_DEADLINE_RATIO, "reveal_deadline_ratio()")]
#[test_case(FINAL_DEADLINE_RATIO, "final_deadline_ratio()")]
#[test_case(OWNER, "owner()")]
#[test_case(APP_NAME, "m_appName()")]
#[test_case(APP_TYPE, "m_appType()")]
#[test_case(APP_MULTIADDR, "m_appMultiaddr()")]
#[test_case(APP_CHECKSUM, "m_appChecksum()")]
#[test_case(APP_MR_ENCLAVE, "m_appMREnclave()")]
#[test_case(DATASET_NAME, "m_datasetName()")]
#[test_case(DATASET_MULTIADDR, "m_datasetMultiaddr()")]
#[test_case(DATASET_CHECKSUM, "m_datasetChecksum()")]
#[test_case(WORKERPOOL_DESCRIPTION, "m_workerpoolDescription()")]
fn selector_matches_signature(constant: [u8; 4], signature: &str) {
    assert_eq!(constant, selector(signature));
}

#[test]
fn event_topics() {
    assert_eq!(TRANSFER_EVENT, event_topic("Transfer(address,address,uint256)"));
    assert_eq!(
        SCHEDULER_NOTICE_EVENT,
        event_topic("SchedulerNotice(address,bytes32)")
    );
}

#[test]
fn getters() {
    assert_eq!(call_without_arguments(CALLBACK_GAS), "0xe63ec07d");
    assert_eq!(
        call_without_arguments(CONTRIBUTION_DEADLINE_RATIO),
        "0x74ed5244"
    );
}
