use poco_hash::protocol::{authorization_hash, result_hash, result_seal};
use poco_sign::{
    address_of,
    authorization::{
        sign_authorization, sign_enclave_message, verify_authorization, verify_enclave_message,
        WorkerpoolAuthorization,
    },
    order::{sign_challenge, sign_order, verify_challenge, verify_order},
    recover_address, Framing,
};
use poco_types::{Address, AppOrder, Bytes32, Eip712Domain, Order, RequestOrder, Signature, U256};
use rand::SeedableRng;
use secp256k1::{Secp256k1, SecretKey};

fn random_key(seed: u8) -> SecretKey {
    let mut rng = rand::rngs::SmallRng::from_seed([seed; 32]);
    Secp256k1::new().generate_keypair(&mut rng).0
}

fn domain() -> Eip712Domain {
    Eip712Domain::poco(134, "0x3eca1B216A7DF1C7689aEb259fFB83ADFB894E7f".parse().unwrap())
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

fn request_order() -> RequestOrder {
    RequestOrder {
        app: Address([1; 20]),
        app_max_price: U256::ZERO,
        dataset: Address::ZERO,
        dataset_max_price: U256::ZERO,
        workerpool: Address::ZERO,
        workerpool_max_price: U256::from(2u64),
        requester: Address([4; 20]),
        volume: U256::from(1u64),
        tag: Bytes32::ZERO,
        category: U256::ZERO,
        trust: U256::ZERO,
        beneficiary: Address([4; 20]),
        callback: Address::ZERO,
        params: r#"{"iexec_args":"hello"}"#.to_string(),
        salt: Bytes32([0xa4; 32]),
        sign: None,
    }
}

#[test]
fn signed_order_is_a_new_value() {
    let sk = random_key(1);
    let unsigned = app_order();
    let signed = sign_order(&unsigned, &domain(), &sk);
    assert!(!unsigned.is_signed());
    assert!(signed.is_signed());
    assert_eq!(AppOrder { sign: None, ..signed.clone() }, unsigned);
    assert!(verify_order(&signed, &domain(), &address_of(&sk)));
}

#[test]
fn order_verification_failures() {
    let sk = random_key(2);
    let owner = address_of(&sk);
    let signed = sign_order(&request_order(), &domain(), &sk);

    assert!(!verify_order(&request_order(), &domain(), &owner));
    assert!(!verify_order(&signed, &domain(), &address_of(&random_key(3))));
    assert!(!verify_order(&signed, &Eip712Domain::poco(1, Address::ZERO), &owner));

    let tampered = RequestOrder {
        params: r#"{"iexec_args":"bye"}"#.to_string(),
        ..signed.clone()
    };
    assert!(!verify_order(&tampered, &domain(), &owner));

    let zeroed = signed.with_signature(Signature::ZERO);
    assert!(!verify_order(&zeroed, &domain(), &owner));
}

#[test]
fn challenge_vector() {
    let sk = SecretKey::from_slice(
        &hex::decode("4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318").unwrap(),
    )
    .unwrap();
    let signature = sign_challenge("challenge", 15, &sk);
    assert_eq!(
        signature.to_string(),
        concat!(
            "0xb912404af1eaf5f15a293685ac3f30b12d0a24c8e39c437120ea3a6f908e6019",
            "6751d3e5c59f808c42db2940acefa6bca5961dd4bf89f2bc444cfdaceaae7f47",
            "1c"
        )
    );
    assert!(verify_challenge("challenge", 15, &signature, &address_of(&sk)));
    assert!(!verify_challenge("challenge", 16, &signature, &address_of(&sk)));
}

#[test]
fn authorization() {
    let scheduler = random_key(4);
    let worker = address_of(&random_key(5));
    let task = Bytes32([0x7a; 32]);
    let authorization = sign_authorization(worker, task, Address::ZERO, &scheduler);
    assert_eq!(authorization.hash(), authorization_hash(&worker, &task, &Address::ZERO));
    assert_eq!(authorization.signer(), Some(address_of(&scheduler)));
    assert!(verify_authorization(&authorization, &address_of(&scheduler)));

    // Signed with the personal framing, never raw.
    assert_ne!(
        recover_address(&authorization.hash(), &authorization.signature, Framing::Raw),
        Some(address_of(&scheduler))
    );

    let other_worker = WorkerpoolAuthorization {
        worker_wallet: Address([9; 20]),
        ..authorization.clone()
    };
    assert!(!verify_authorization(&other_worker, &address_of(&scheduler)));
}

#[test]
fn authorization_json() {
    let authorization = sign_authorization(
        Address([1; 20]),
        Bytes32([2; 32]),
        Address([3; 20]),
        &random_key(6),
    );
    let json = serde_json::to_value(&authorization).unwrap();
    assert_eq!(json["workerWallet"], format!("0x{}", "01".repeat(20)));
    assert_eq!(json["enclaveChallenge"], format!("0x{}", "03".repeat(20)));
    let back: WorkerpoolAuthorization = serde_json::from_value(json).unwrap();
    assert_eq!(back, authorization);
}

#[test]
fn enclave_message() {
    let enclave = random_key(7);
    let worker = Address([8; 20]);
    let task = Bytes32([0x7a; 32]);
    let digest = Bytes32([0xdd; 32]);
    let hash = result_hash(&task, &digest);
    let seal = result_seal(&worker, &task, &digest);
    let signature = sign_enclave_message(&hash, &seal, &enclave);
    assert!(verify_enclave_message(&hash, &seal, &signature, &address_of(&enclave)));
    assert!(!verify_enclave_message(&seal, &hash, &signature, &address_of(&enclave)));
}
