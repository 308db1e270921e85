use poco_eip712::{domain_separator, final_hash, message_hash, type_string, Eip712Message};
use poco_types::{
    Address, AppOrder, Bytes32, DatasetOrder, Eip712Domain, Order, RequestOrder, Signature,
    WorkerpoolOrder, U256,
};
use proptest::prelude::*;

const HUB: &str = "0x3eca1B216A7DF1C7689aEb259fFB83ADFB894E7f";
const PARAMS: &str = r#"{"iexec_args":"--x 1","iexec_result_storage_provider":"ipfs","x":"y"}"#;

fn domain() -> Eip712Domain {
    Eip712Domain::poco(134, HUB.parse().unwrap())
}

fn tag() -> Bytes32 {
    let mut tag = [0; 32];
    tag[31] = 0x03;
    Bytes32(tag)
}

fn app_order() -> AppOrder {
    AppOrder {
        app: Address([1; 20]),
        app_price: U256::ZERO,
        volume: U256::from(1u64),
        tag: Bytes32::ZERO,
        dataset_restrict: Address::ZERO,
        workerpool_restrict: Address::ZERO,
        requester_restrict: Address::ZERO,
        salt: Bytes32([0xa1; 32]),
        sign: None,
    }
}

fn dataset_order() -> DatasetOrder {
    DatasetOrder {
        dataset: Address([2; 20]),
        dataset_price: U256::from(5u64),
        volume: U256::from(10u64),
        tag: Bytes32::ZERO,
        app_restrict: Address([1; 20]),
        workerpool_restrict: Address::ZERO,
        requester_restrict: Address::ZERO,
        salt: Bytes32([0xa2; 32]),
        sign: None,
    }
}

fn workerpool_order() -> WorkerpoolOrder {
    WorkerpoolOrder {
        workerpool: Address([3; 20]),
        workerpool_price: U256::from(2u64),
        volume: U256::from(1u64),
        tag: tag(),
        category: U256::ZERO,
        trust: U256::from(1u64),
        app_restrict: Address::ZERO,
        dataset_restrict: Address::ZERO,
        requester_restrict: Address::ZERO,
        salt: Bytes32([0xa3; 32]),
        sign: None,
    }
}

fn request_order() -> RequestOrder {
    RequestOrder {
        app: Address([1; 20]),
        app_max_price: U256::ZERO,
        dataset: Address::ZERO,
        dataset_max_price: U256::ZERO,
        workerpool: Address([3; 20]),
        workerpool_max_price: U256::from(2u64),
        requester: Address([4; 20]),
        volume: U256::from(1u64),
        tag: tag(),
        category: U256::ZERO,
        trust: U256::from(1u64),
        beneficiary: Address([4; 20]),
        callback: Address::ZERO,
        params: PARAMS.to_string(),
        salt: Bytes32([0xa4; 32]),
        sign: None,
    }
}

#[test]
fn poco_domain_separator() {
    assert_eq!(
        domain_separator(&domain()).to_string(),
        "0xf2cbd98a556869939d25b73c3fa68ba45f19932f8c9a06f744c98290ed9ef860"
    );
}

#[test]
fn app_order_vector() {
    assert_eq!(
        type_string::<AppOrder>(),
        "AppOrder(address app,uint256 appprice,uint256 volume,bytes32 tag,address datasetrestrict,address workerpoolrestrict,address requesterrestrict,bytes32 salt)"
    );
    assert_eq!(
        message_hash(&app_order()).to_string(),
        "0xdc3bccfb1eb6a172036eaadb619e4cb45d3718717de529758280b64f7b847d07"
    );
    assert_eq!(
        final_hash(&app_order(), &domain()).to_string(),
        "0xd1461485fb5653556f90e87b9e60a772c52dc00fe07b5fbdac10eb040a59520b"
    );
}

#[test]
fn dataset_order_vector() {
    assert_eq!(
        type_string::<DatasetOrder>(),
        "DatasetOrder(address dataset,uint256 datasetprice,uint256 volume,bytes32 tag,address apprestrict,address workerpoolrestrict,address requesterrestrict,bytes32 salt)"
    );
    assert_eq!(
        message_hash(&dataset_order()).to_string(),
        "0x4dd0c906f8aadf4d4738f8ad0da6376f53f48e6a8b08b9a075c7200559ade98a"
    );
    assert_eq!(
        final_hash(&dataset_order(), &domain()).to_string(),
        "0xb53eb6cb6bed110f0a29b544f5645855ce55524f105a987ef19388f1d4b0d906"
    );
}

#[test]
fn workerpool_order_vector() {
    assert_eq!(
        type_string::<WorkerpoolOrder>(),
        "WorkerpoolOrder(address workerpool,uint256 workerpoolprice,uint256 volume,bytes32 tag,uint256 category,uint256 trust,address apprestrict,address datasetrestrict,address requesterrestrict,bytes32 salt)"
    );
    assert_eq!(
        message_hash(&workerpool_order()).to_string(),
        "0xd78e3df931b66a7716b456592a60247b2e471181afb0158922b69604d22c931f"
    );
    assert_eq!(
        final_hash(&workerpool_order(), &domain()).to_string(),
        "0x8cdbb13aa62c5094e1617465dad32dbd765c626e025029dfc3463a69ab5e39f5"
    );
}

#[test]
fn request_order_vector() {
    assert_eq!(
        type_string::<RequestOrder>(),
        "RequestOrder(address app,uint256 appmaxprice,address dataset,uint256 datasetmaxprice,address workerpool,uint256 workerpoolmaxprice,address requester,uint256 volume,bytes32 tag,uint256 category,uint256 trust,address beneficiary,address callback,string params,bytes32 salt)"
    );
    assert_eq!(
        message_hash(&request_order()).to_string(),
        "0xa08a93b392d63ade26fc34fe372f2fa4c385febdf0e7bb7c2e82f3c6b3b6bc83"
    );
    assert_eq!(
        final_hash(&request_order(), &domain()).to_string(),
        "0x68297ddd41312ee0f726be5b64454ee45e49300b4b61b715141ec3f6307cb8de"
    );
}

#[test]
fn signature_is_not_hashed() {
    let signed = request_order().with_signature(Signature::from([7; 65]));
    assert_eq!(message_hash(&signed), message_hash(&request_order()));
}

fn fields_match_values<M: Eip712Message>(message: &M) {
    let values = message.values();
    assert_eq!(values.len(), M::FIELDS.len());
    for (field, value) in M::FIELDS.iter().zip(&values) {
        assert_eq!(field.ty, value.ty(), "field {}", field.name);
    }
}

#[test]
fn values_follow_declared_fields() {
    fields_match_values(&app_order());
    fields_match_values(&dataset_order());
    fields_match_values(&workerpool_order());
    fields_match_values(&request_order());
}

proptest! {
    #[test]
    fn params_change_request_hash(a in ".{0,80}", b in ".{0,80}") {
        prop_assume!(a != b);
        let mut first = request_order();
        first.params = a;
        let mut second = request_order();
        second.params = b;
        prop_assert_ne!(message_hash(&first), message_hash(&second));
    }
}
