use super::*;
use crate::{
    decode::Tuple,
    word::{word_to_u64, words_from_bytes},
};
use test_case::test_case;

const TASK_ID: Bytes32 = Bytes32([0x11; 32]);

#[test]
fn static_arguments() {
    let call = encode_call([0x5b, 0x36, 0xc6, 0x6b], &[Token::FixedBytes(TASK_ID), 3u64.into()]);
    assert_eq!(
        call,
        concat!(
            "0x5b36c66b",
            "1111111111111111111111111111111111111111111111111111111111111111",
            "0000000000000000000000000000000000000000000000000000000000000003",
        )
    );
}

#[test]
fn dynamic_arguments() {
    let call = encode_call(
        [0x8f, 0xc3, 0x75, 0xe5],
        &[
            Token::FixedBytes(TASK_ID),
            Token::Bytes(b"hello".to_vec()),
            Token::Bytes(vec![]),
        ],
    );
    assert_eq!(
        call,
        concat!(
            "0x8fc375e5",
            "1111111111111111111111111111111111111111111111111111111111111111",
            "0000000000000000000000000000000000000000000000000000000000000060",
            "00000000000000000000000000000000000000000000000000000000000000a0",
            "0000000000000000000000000000000000000000000000000000000000000005",
            "68656c6c6f000000000000000000000000000000000000000000000000000000",
            "0000000000000000000000000000000000000000000000000000000000000000",
        )
    );
}

#[test_case(0 => 32)]
#[test_case(1 => 64)]
#[test_case(32 => 64)]
#[test_case(33 => 96)]
#[test_case(65 => 128)]
fn bytes_size(len: usize) -> usize {
    encoded_bytes_len(len)
}

#[test]
fn offsets_advance_by_previous_tails() {
    let tokens = [
        Token::Bytes(vec![1; 33]),
        Token::String("x".into()),
        Token::Bytes(vec![2; 65]),
    ];
    let encoded = encode_tokens(&tokens);
    let words = words_from_bytes(&encoded).unwrap();
    let heads: Vec<u64> = words[..3].iter().map(|w| word_to_u64(w).unwrap()).collect();
    assert_eq!(heads, vec![96, 96 + 96, 96 + 96 + 64]);
    assert_eq!(encoded.len(), 96 + 96 + 64 + 128);
}

#[test]
fn static_tuple_is_inline() {
    let tuple = Token::Tuple(vec![Token::Address(Address([1; 20])), 7u64.into()]);
    assert!(!tuple.is_dynamic());
    assert_eq!(tuple.head_len(), 64);
    let encoded = encode_tokens(&[tuple, 9u64.into()]);
    assert_eq!(encoded.len(), 96);
    assert_eq!(word_to_u64(&words_from_bytes(&encoded).unwrap()[2]).unwrap(), 9);
}

#[test]
fn dynamic_tuple_offsets_are_relative_to_tuple() {
    let first = Token::Tuple(vec![8u64.into(), Token::Bytes(vec![0xaa; 3])]);
    let second = Token::Tuple(vec![9u64.into(), Token::Bytes(vec![0xbb; 40])]);
    let encoded = encode_tokens(&[first, second]);
    let words = words_from_bytes(&encoded).unwrap();

    let outer = Tuple::new(&words, 0, 2).unwrap();
    let first = outer.tuple(0, 2).unwrap();
    let second = outer.tuple(1, 2).unwrap();
    assert_eq!(first.base(), 2);
    assert_eq!(second.base(), 2 + 4);
    // Inner offsets are 0x40 in both tuples: right after their own two heads.
    assert_eq!(word_to_u64(first.word(1).unwrap()).unwrap(), 64);
    assert_eq!(word_to_u64(second.word(1).unwrap()).unwrap(), 64);
    assert_eq!(first.u64(0).unwrap(), 8);
    assert_eq!(first.bytes(1).unwrap(), vec![0xaa; 3]);
    assert_eq!(second.bytes(1).unwrap(), vec![0xbb; 40]);
}
