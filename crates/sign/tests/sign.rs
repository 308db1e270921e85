use poco_hash::keccak256;
use poco_sign::{
    address_from_public_key, address_of, is_signature_well_formed, recover_address,
    recover_public_key, recovery_id, sign, sign_personal_hash, verify, Framing,
};
use poco_types::{Address, Bytes32, Signature};
use proptest::prelude::*;
use rand::SeedableRng;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use test_case::test_case;

const WEB3_KEY: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

fn web3_key() -> SecretKey {
    SecretKey::from_slice(&hex::decode(WEB3_KEY).unwrap()).unwrap()
}

fn random_keypair(seed: [u8; 32]) -> (SecretKey, PublicKey) {
    let mut rng = rand::rngs::SmallRng::from_seed(seed);
    let secp = Secp256k1::new();
    secp.generate_keypair(&mut rng)
}

fn hash_of(data: &[u8]) -> Bytes32 {
    Bytes32(keccak256(data))
}

#[test]
fn address_of_key() {
    assert_eq!(
        address_of(&web3_key()).to_string(),
        "0x2c7536e3605d9c16a7a3d7b1898e529396a65c23"
    );
}

#[test]
fn sign_known_hash() {
    // keccak("\x19Ethereum Signed Message:\n9Some data")
    let hash: Bytes32 = "0x1da44b586eb0729ff70a73c326926f6ed5a25f5b056e7f47fbc6e58d86871655"
        .parse()
        .unwrap();
    let signature = sign(&hash, &web3_key());
    let expected = concat!(
        "0xb91467e570a6466aa9e9876cbcd013baba02900b8979d43fe208a4a4f339f5fd",
        "6007e74cd82e037b800186422fc2da167c747ef045e5d18a5f5d4300f8e1a029",
        "1c"
    );
    assert_eq!(signature.to_string(), expected);
}

#[test]
fn sign_personal_known_hash() {
    let signature = sign_personal_hash(&hash_of(b""), &web3_key());
    let expected = concat!(
        "0x4eff6dcb03d6872bce89018a566540c311c96dd59a1feefaa4c90827c4c6edd2",
        "4c79eae46643e16b54ea20075317b031c89e5740df5469e42e1b95a93ca036ec",
        "1b"
    );
    assert_eq!(signature.to_string(), expected);
    assert!(verify(
        &hash_of(b""),
        &signature,
        &address_of(&web3_key()),
        Framing::PersonalMessage
    ));
    assert!(!verify(
        &hash_of(b""),
        &signature,
        &address_of(&web3_key()),
        Framing::Raw
    ));
}

#[test]
fn recover() {
    let (sk, pk) = random_keypair([0xcd; 32]);
    let hash = hash_of(b"task");
    let signature = sign(&hash, &sk);
    assert!(signature.v == 27 || signature.v == 28);
    assert_eq!(recover_public_key(&hash, &signature, Framing::Raw), Some(pk));
    assert_eq!(
        recover_address(&hash, &signature, Framing::Raw),
        Some(address_from_public_key(&pk))
    );
}

#[test]
fn fail_to_recover() {
    let (sk, pk) = random_keypair([0xcd; 32]);
    let hash = hash_of(b"task");
    let mut corrupted = sign(&hash, &sk);
    corrupted.v = 27 + (corrupted.v - 26) % 2;
    assert_ne!(
        recover_address(&hash, &corrupted, Framing::Raw),
        Some(address_from_public_key(&pk))
    );
    assert_eq!(recover_address(&hash, &Signature::ZERO, Framing::Raw), None);
}

#[test]
fn verify_signature() {
    let (sk, pk) = random_keypair([0xcd; 32]);
    let (_, other) = random_keypair([0xab; 32]);
    let hash = hash_of(b"task");
    let signature = sign(&hash, &sk);
    let signer = address_from_public_key(&pk);
    assert!(verify(&hash, &signature, &signer, Framing::Raw));
    assert!(!verify(
        &hash,
        &signature,
        &address_from_public_key(&other),
        Framing::Raw
    ));
    assert!(!verify(&hash_of(b"other"), &signature, &signer, Framing::Raw));
    assert!(!verify(&hash, &Signature::ZERO, &signer, Framing::Raw));
}

#[test]
fn verify_tolerates_v_forms() {
    let (sk, pk) = random_keypair([0x42; 32]);
    let hash = hash_of(b"v forms");
    let signer = address_from_public_key(&pk);
    let signature = sign(&hash, &sk);
    let id = signature.v - 27;
    for v in [id, id + 27, id + 37, 2 + id] {
        let signature = Signature { v, ..signature };
        assert!(verify(&hash, &signature, &signer, Framing::Raw), "v = {v}");
    }
    // Ambiguous v: recovery needs an explicit id.
    let ambiguous = Signature { v: 5, ..signature };
    assert_eq!(recover_address(&hash, &ambiguous, Framing::Raw), None);
    assert!(verify(&hash, &ambiguous, &signer, Framing::Raw));
}

#[test_case(0 => Some(0))]
#[test_case(1 => Some(1))]
#[test_case(27 => Some(0))]
#[test_case(28 => Some(1))]
#[test_case(37 => Some(0) ; "eip155 chain 1 even")]
#[test_case(38 => Some(1) ; "eip155 chain 1 odd")]
#[test_case(2 => None)]
#[test_case(29 => None)]
fn recovery_ids(v: u8) -> Option<i32> {
    recovery_id(v).map(|id| id.to_i32())
}

#[test_case(&[1; 65] => true)]
#[test_case(&[0; 65] => false ; "all zero")]
#[test_case(&[1; 64] => false ; "too short")]
#[test_case(&[1; 66] => false ; "too long")]
#[test_case(&[] => false ; "empty")]
fn well_formed(bytes: &[u8]) -> bool {
    is_signature_well_formed(bytes)
}

#[test]
fn signature_round_trips_through_bytes() {
    let (sk, _) = random_keypair([0x01; 32]);
    let signature = sign(&hash_of(b"bytes"), &sk);
    let bytes = signature.to_bytes();
    assert!(is_signature_well_formed(&bytes));
    assert_eq!(Signature::from_slice(&bytes), Ok(signature));
    assert_eq!(signature.to_string().parse::<Signature>().unwrap(), signature);
}

fn secret_key() -> impl Strategy<Value = SecretKey> {
    any::<[u8; 32]>().prop_filter_map("not a valid secret key", |bytes| {
        SecretKey::from_slice(&bytes).ok()
    })
}

proptest! {
    #[test]
    fn sign_recover_round_trip(sk in secret_key(), hash in any::<[u8; 32]>(), personal in any::<bool>()) {
        let hash = Bytes32(hash);
        let framing = if personal { Framing::PersonalMessage } else { Framing::Raw };
        let signature = match framing {
            Framing::Raw => sign(&hash, &sk),
            Framing::PersonalMessage => sign_personal_hash(&hash, &sk),
        };
        let signer = address_of(&sk);
        prop_assert_eq!(recover_address(&hash, &signature, framing), Some(signer));
        prop_assert!(verify(&hash, &signature, &signer, framing));
        prop_assert!(!verify(&hash, &signature, &Address::ZERO, framing));
    }
}
