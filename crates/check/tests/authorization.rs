use poco_check::{
    authorization::{check_authorization, InvalidAuthorization},
    sign::{address_from_public_key, authorization::sign_authorization},
    types::{Address, Bytes32},
};
use poco_hash::protocol::chain_task_id;
use util::random_keypair;

pub mod util;

#[test]
fn valid_authorization() {
    let _ = tracing_subscriber::fmt::try_init();
    let (scheduler_sk, scheduler_pk) = random_keypair([0x51; 32]);
    let (_, worker_pk) = random_keypair([0x52; 32]);
    let worker = address_from_public_key(&worker_pk);
    let task = chain_task_id(&Bytes32([0xde; 32]), 0);
    let authorization = sign_authorization(worker, task, Address::ZERO, &scheduler_sk);
    check_authorization(
        &authorization,
        &worker,
        &task,
        &address_from_public_key(&scheduler_pk),
    )
    .unwrap();
}

#[test]
fn invalid_authorizations() {
    let (scheduler_sk, scheduler_pk) = random_keypair([0x51; 32]);
    let (other_sk, other_pk) = random_keypair([0x53; 32]);
    let scheduler = address_from_public_key(&scheduler_pk);
    let worker = Address([7; 20]);
    let task = chain_task_id(&Bytes32([0xde; 32]), 1);
    let authorization = sign_authorization(worker, task, Address::ZERO, &scheduler_sk);

    assert!(matches!(
        check_authorization(&authorization, &Address([8; 20]), &task, &scheduler).unwrap_err(),
        InvalidAuthorization::Worker { found, .. } if found == worker
    ));

    let other_task = chain_task_id(&Bytes32([0xde; 32]), 2);
    assert!(matches!(
        check_authorization(&authorization, &worker, &other_task, &scheduler).unwrap_err(),
        InvalidAuthorization::Task { .. }
    ));

    let forged = sign_authorization(worker, task, Address::ZERO, &other_sk);
    match check_authorization(&forged, &worker, &task, &scheduler).unwrap_err() {
        InvalidAuthorization::Signer { expected, found } => {
            assert_eq!(expected, scheduler);
            assert_eq!(found, Some(address_from_public_key(&other_pk)));
        }
        err => panic!("unexpected error: {err}"),
    }
}
