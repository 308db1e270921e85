//! # Words
//! Splitting raw payloads into 32-byte words and converting single words to
//! and from scalar values.

use crate::decode::DecodeError;
use poco_types::{strip_hex_prefix, Address, Bytes32, Word, U256};

/// Bytes in a word.
pub const WORD_BYTES: usize = 32;

/// Hex characters in a word.
pub const WORD_HEX_LEN: usize = 2 * WORD_BYTES;

/// Split a hex payload into 64-character words, preserving order.
///
/// An optional `0x` prefix is ignored. A trailing chunk shorter than a word is
/// returned as is; use [`words_from_hex`] to reject such payloads.
pub fn to_words(hex: &str) -> Vec<&str> {
    let mut rest = strip_hex_prefix(hex);
    let mut words = Vec::with_capacity(rest.len().div_ceil(WORD_HEX_LEN));
    while !rest.is_empty() {
        let at = rest
            .char_indices()
            .nth(WORD_HEX_LEN)
            .map_or(rest.len(), |(ix, _)| ix);
        let (word, tail) = rest.split_at(at);
        words.push(word);
        rest = tail;
    }
    words
}

/// Decode a hex payload into whole words.
pub fn words_from_hex(hex: &str) -> Result<Vec<Word>, DecodeError> {
    let bytes = hex::decode(strip_hex_prefix(hex))?;
    words_from_bytes(&bytes)
}

/// Split a byte payload into whole words.
pub fn words_from_bytes(bytes: &[u8]) -> Result<Vec<Word>, DecodeError> {
    if bytes.len() % WORD_BYTES != 0 {
        return Err(DecodeError::PartialWord(bytes.len()));
    }
    Ok(bytes
        .chunks_exact(WORD_BYTES)
        .map(|chunk| {
            let mut word = [0; WORD_BYTES];
            word.copy_from_slice(chunk);
            word
        })
        .collect())
}

/// Read a word as an unsigned 256-bit integer.
pub fn word_to_u256(word: &Word) -> U256 {
    U256::from_be_bytes(*word)
}

/// Read a word as a `u64`, failing if the value does not fit.
pub fn word_to_u64(word: &Word) -> Result<u64, DecodeError> {
    let (high, low) = word.split_at(WORD_BYTES - 8);
    if high.iter().any(|b| *b != 0) {
        return Err(DecodeError::Overflow("u64"));
    }
    let mut bytes = [0; 8];
    bytes.copy_from_slice(low);
    Ok(u64::from_be_bytes(bytes))
}

/// Read a word as a `usize`, failing if the value does not fit.
pub fn word_to_usize(word: &Word) -> Result<usize, DecodeError> {
    usize::try_from(word_to_u64(word)?).map_err(|_| DecodeError::Overflow("usize"))
}

/// Read the address held in the low 20 bytes of a word.
pub fn word_to_address(word: &Word) -> Address {
    let mut address = [0; 20];
    address.copy_from_slice(&word[WORD_BYTES - 20..]);
    Address(address)
}

/// Read a word as a `bytes32`.
pub fn word_to_bytes32(word: &Word) -> Bytes32 {
    Bytes32(*word)
}

/// Read a word's bytes as UTF-8 text, replacing invalid sequences.
pub fn word_to_ascii(word: &Word) -> String {
    String::from_utf8_lossy(word).into_owned()
}

/// Left-pad an address to a word.
pub fn address_to_word(address: &Address) -> Word {
    let mut word = [0; WORD_BYTES];
    word[WORD_BYTES - 20..].copy_from_slice(&address.0);
    word
}

/// Big-endian word of an unsigned 256-bit integer.
pub fn u256_to_word(value: &U256) -> Word {
    value.to_be_bytes::<WORD_BYTES>()
}

/// Big-endian word of a `u64`.
pub fn u64_to_word(value: u64) -> Word {
    let mut word = [0; WORD_BYTES];
    word[WORD_BYTES - 8..].copy_from_slice(&value.to_be_bytes());
    word
}
