//! # Encoding
//! Head/tail encoding of function arguments.
//!
//! Static values are written inline in the head. Each dynamic value writes
//! its byte offset into the head and appends its data to the tail, in the
//! same order as the heads. Offsets are relative to the start of the
//! enclosing tuple, which for call arguments is right after the selector.

use crate::word::{address_to_word, u256_to_word, u64_to_word, WORD_BYTES};
use poco_types::{Address, Bytes32, U256};

#[cfg(test)]
mod tests;

/// A single ABI value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// `address`.
    Address(Address),
    /// `uint256`.
    Uint(U256),
    /// `bytes32`.
    FixedBytes(Bytes32),
    /// `bytes`.
    Bytes(Vec<u8>),
    /// `string`.
    String(String),
    /// A tuple (struct) of values.
    Tuple(Vec<Token>),
}

impl Token {
    /// Whether the value is encoded in the tail.
    pub fn is_dynamic(&self) -> bool {
        match self {
            Token::Bytes(_) | Token::String(_) => true,
            Token::Tuple(tokens) => tokens.iter().any(Token::is_dynamic),
            Token::Address(_) | Token::Uint(_) | Token::FixedBytes(_) => false,
        }
    }

    /// Size in bytes of the value's head.
    pub fn head_len(&self) -> usize {
        match self {
            Token::Tuple(tokens) if !self.is_dynamic() => tokens.iter().map(Token::head_len).sum(),
            _ => WORD_BYTES,
        }
    }
}

impl From<u64> for Token {
    fn from(value: u64) -> Self {
        Token::Uint(U256::from(value))
    }
}

/// Size in bytes of an encoded `bytes` or `string` of `len` bytes: one length
/// word followed by the data padded to whole words.
pub fn encoded_bytes_len(len: usize) -> usize {
    WORD_BYTES + WORD_BYTES * len.div_ceil(WORD_BYTES)
}

/// Encode a sequence of values as a tuple.
pub fn encode_tokens(tokens: &[Token]) -> Vec<u8> {
    let head_len: usize = tokens.iter().map(Token::head_len).sum();
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();
    for token in tokens {
        match token {
            Token::Address(address) => head.extend_from_slice(&address_to_word(address)),
            Token::Uint(value) => head.extend_from_slice(&u256_to_word(value)),
            Token::FixedBytes(value) => head.extend_from_slice(&value.0),
            Token::Tuple(tokens) if !token.is_dynamic() => {
                head.extend_from_slice(&encode_tokens(tokens));
            }
            Token::Bytes(bytes) => {
                head.extend_from_slice(&offset_word(head_len + tail.len()));
                encode_bytes(bytes, &mut tail);
            }
            Token::String(string) => {
                head.extend_from_slice(&offset_word(head_len + tail.len()));
                encode_bytes(string.as_bytes(), &mut tail);
            }
            Token::Tuple(tokens) => {
                head.extend_from_slice(&offset_word(head_len + tail.len()));
                tail.extend_from_slice(&encode_tokens(tokens));
            }
        }
    }
    head.extend_from_slice(&tail);
    head
}

/// Encode a function call as `0x`-prefixed hex: selector then arguments.
pub fn encode_call(selector: [u8; 4], tokens: &[Token]) -> String {
    format!(
        "0x{}{}",
        hex::encode(selector),
        hex::encode(encode_tokens(tokens))
    )
}

fn offset_word(offset: usize) -> [u8; WORD_BYTES] {
    // Saturating cast
    u64_to_word(offset.try_into().unwrap_or(u64::MAX))
}

fn encode_bytes(bytes: &[u8], out: &mut Vec<u8>) {
    // Saturating cast
    out.extend_from_slice(&u64_to_word(bytes.len().try_into().unwrap_or(u64::MAX)));
    out.extend_from_slice(bytes);
    let padding = encoded_bytes_len(bytes.len()) - WORD_BYTES - bytes.len();
    out.resize(out.len() + padding, 0);
}
