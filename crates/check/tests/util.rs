use poco_check::{
    sign::secp256k1::{PublicKey, Secp256k1, SecretKey},
    types::{
        Address, AppOrder, Bytes32, DatasetOrder, Eip712Domain, RequestOrder, WorkerpoolOrder,
        U256,
    },
};
use rand::SeedableRng;

pub fn random_keypair(seed: [u8; 32]) -> (SecretKey, PublicKey) {
    let mut rng = rand::rngs::SmallRng::from_seed(seed);
    let secp = Secp256k1::new();
    secp.generate_keypair(&mut rng)
}

pub fn domain() -> Eip712Domain {
    Eip712Domain::poco(134, Address([0x3e; 20]))
}

pub const APP: Address = Address([1; 20]);
pub const DATASET: Address = Address([2; 20]);
pub const WORKERPOOL: Address = Address([3; 20]);
pub const REQUESTER: Address = Address([4; 20]);

pub fn app_order() -> AppOrder {
    AppOrder {
        app: APP,
        app_price: U256::from(1u64),
        volume: U256::from(10u64),
        tag: Bytes32::ZERO,
        dataset_restrict: Address::ZERO,
        workerpool_restrict: Address::ZERO,
        requester_restrict: Address::ZERO,
        salt: Bytes32([0xa1; 32]),
        sign: None,
    }
}

pub fn dataset_order() -> DatasetOrder {
    DatasetOrder {
        dataset: DATASET,
        dataset_price: U256::from(2u64),
        volume: U256::from(10u64),
        tag: Bytes32::ZERO,
        app_restrict: Address::ZERO,
        workerpool_restrict: Address::ZERO,
        requester_restrict: Address::ZERO,
        salt: Bytes32([0xa2; 32]),
        sign: None,
    }
}

pub fn workerpool_order() -> WorkerpoolOrder {
    WorkerpoolOrder {
        workerpool: WORKERPOOL,
        workerpool_price: U256::from(3u64),
        volume: U256::from(10u64),
        tag: Bytes32::ZERO,
        category: U256::from(1u64),
        trust: U256::from(5u64),
        app_restrict: Address::ZERO,
        dataset_restrict: Address::ZERO,
        requester_restrict: Address::ZERO,
        salt: Bytes32([0xa3; 32]),
        sign: None,
    }
}

pub fn request_order() -> RequestOrder {
    RequestOrder {
        app: APP,
        app_max_price: U256::from(1u64),
        dataset: DATASET,
        dataset_max_price: U256::from(2u64),
        workerpool: Address::ZERO,
        workerpool_max_price: U256::from(3u64),
        requester: REQUESTER,
        volume: U256::from(1u64),
        tag: Bytes32::ZERO,
        category: U256::from(1u64),
        trust: U256::from(1u64),
        beneficiary: REQUESTER,
        callback: Address::ZERO,
        params: r#"{"iexec_args":"--x 1"}"#.to_string(),
        salt: Bytes32([0xa4; 32]),
        sign: None,
    }
}
