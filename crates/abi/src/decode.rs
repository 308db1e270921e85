//! # Decoding
//! Reading dynamic fields and tuples out of a sequence of words.
//!
//! Offsets in a tuple's head are measured in bytes from the start of that
//! tuple. A [`Tuple`] remembers the word index it starts at, so nested tuples
//! resolve their offsets against their own start, never the outer payload.

use crate::word::{
    word_to_address, word_to_bytes32, word_to_u256, word_to_u64, word_to_usize, words_from_hex,
    WORD_BYTES,
};
use poco_types::{chain::InvalidStatus, Address, Bytes32, SignatureLengthError, Word, U256};
use thiserror::Error;


/// Errors that can occur when decoding contract data.
///
/// Any of these means the payload as a whole is unusable.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// The payload is not valid hex.
    #[error("invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),
    /// The payload length is not a multiple of the word size.
    #[error("payload of {0} bytes is not a whole number of words")]
    PartialWord(usize),
    /// The payload is shorter than its layout requires.
    #[error("expected at least {expected} words, found {found}")]
    WordsTooShort {
        /// Words required.
        expected: usize,
        /// Words available.
        found: usize,
    },
    /// A head offset is not a multiple of the word size.
    #[error("offset {0} is not word aligned")]
    MisalignedOffset(usize),
    /// A value does not fit the target integer type.
    #[error("value overflows {0}")]
    Overflow(&'static str),
    /// A status index is out of range.
    #[error("{0}")]
    Status(#[from] InvalidStatus),
    /// A string field is not valid UTF-8.
    #[error("invalid utf-8 string: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// A signature field has the wrong length.
    #[error("{0}")]
    Signature(#[from] SignatureLengthError),
    /// Call-data does not start with the expected selector.
    #[error("expected selector {expected:02x?}, found {found:02x?}")]
    Selector {
        /// Selector of the decoded function.
        expected: [u8; 4],
        /// Leading bytes of the call-data.
        found: Vec<u8>,
    },
}

/// Get the word at `index`.
pub fn word_at(words: &[Word], index: usize) -> Result<&Word, DecodeError> {
    words.get(index).ok_or(DecodeError::WordsTooShort {
        expected: index.saturating_add(1),
        found: words.len(),
    })
}

/// Decode a length-prefixed byte string whose length word is at `word_index`.
///
/// # Layout
/// ```text
/// +-----------------+-----------------+-----------------+-----+
/// | length in bytes | data word 1     | data word 2     | ... |
/// +-----------------+-----------------+-----------------+-----+
/// ```
/// The last data word is truncated to the bytes remaining.
pub fn decode_dynamic_bytes(words: &[Word], word_index: usize) -> Result<Vec<u8>, DecodeError> {
    let len = word_to_usize(word_at(words, word_index)?)?;
    let start = word_index + 1;
    let end = start
        .checked_add(len.div_ceil(WORD_BYTES))
        .ok_or(DecodeError::Overflow("usize"))?;
    let data = words.get(start..end).ok_or(DecodeError::WordsTooShort {
        expected: end,
        found: words.len(),
    })?;
    Ok(data.iter().flatten().copied().take(len).collect())
}

/// Decode a length-prefixed UTF-8 string.
pub fn decode_ascii_string(words: &[Word], word_index: usize) -> Result<String, DecodeError> {
    Ok(String::from_utf8(decode_dynamic_bytes(words, word_index)?)?)
}

/// Decode a length-prefixed byte string as `0x`-prefixed hex.
pub fn decode_hex_string(words: &[Word], word_index: usize) -> Result<String, DecodeError> {
    let bytes = decode_dynamic_bytes(words, word_index)?;
    Ok(format!("0x{}", hex::encode(bytes)))
}

/// Decode an `address[]` whose length word is at `word_index`.
pub fn decode_address_array(words: &[Word], word_index: usize) -> Result<Vec<Address>, DecodeError> {
    let len = word_to_usize(word_at(words, word_index)?)?;
    let start = word_index + 1;
    let end = start.checked_add(len).ok_or(DecodeError::Overflow("usize"))?;
    let items = words.get(start..end).ok_or(DecodeError::WordsTooShort {
        expected: end,
        found: words.len(),
    })?;
    Ok(items.iter().map(word_to_address).collect())
}

/// Resolve the head word at `head_index` to the word index its data starts at.
///
/// The head holds a byte offset from the start of the enclosing tuple, which
/// itself starts at word `base`.
pub fn tail_index(words: &[Word], head_index: usize, base: usize) -> Result<usize, DecodeError> {
    let offset = word_to_usize(word_at(words, head_index)?)?;
    if offset % WORD_BYTES != 0 {
        return Err(DecodeError::MisalignedOffset(offset));
    }
    base.checked_add(offset / WORD_BYTES)
        .ok_or(DecodeError::Overflow("usize"))
}

/// A tuple laid out in a word sequence, starting at word `base`.
#[derive(Clone, Copy, Debug)]
pub struct Tuple<'a> {
    words: &'a [Word],
    base: usize,
}

impl<'a> Tuple<'a> {
    /// The tuple starting at `base`, checking its `head_len` head words exist.
    pub fn new(words: &'a [Word], base: usize, head_len: usize) -> Result<Self, DecodeError> {
        let expected = base
            .checked_add(head_len)
            .ok_or(DecodeError::Overflow("usize"))?;
        if words.len() < expected {
            return Err(DecodeError::WordsTooShort {
                expected,
                found: words.len(),
            });
        }
        Ok(Self { words, base })
    }

    /// Word index the tuple starts at.
    pub fn base(&self) -> usize {
        self.base
    }

    /// Head word `ix`.
    pub fn word(&self, ix: usize) -> Result<&'a Word, DecodeError> {
        word_at(self.words, self.base + ix)
    }

    /// Head word `ix` as an unsigned 256-bit integer.
    pub fn u256(&self, ix: usize) -> Result<U256, DecodeError> {
        self.word(ix).map(word_to_u256)
    }

    /// Head word `ix` as a `u64`.
    pub fn u64(&self, ix: usize) -> Result<u64, DecodeError> {
        word_to_u64(self.word(ix)?)
    }

    /// Head word `ix` as an address.
    pub fn address(&self, ix: usize) -> Result<Address, DecodeError> {
        self.word(ix).map(word_to_address)
    }

    /// Head word `ix` as a `bytes32`.
    pub fn bytes32(&self, ix: usize) -> Result<Bytes32, DecodeError> {
        self.word(ix).map(word_to_bytes32)
    }

    /// Word index of the data referenced by head word `ix`.
    pub fn tail(&self, ix: usize) -> Result<usize, DecodeError> {
        tail_index(self.words, self.base + ix, self.base)
    }

    /// Dynamic `bytes` referenced by head word `ix`.
    pub fn bytes(&self, ix: usize) -> Result<Vec<u8>, DecodeError> {
        decode_dynamic_bytes(self.words, self.tail(ix)?)
    }

    /// Dynamic `string` referenced by head word `ix`.
    pub fn string(&self, ix: usize) -> Result<String, DecodeError> {
        decode_ascii_string(self.words, self.tail(ix)?)
    }

    /// Dynamic `address[]` referenced by head word `ix`.
    pub fn address_array(&self, ix: usize) -> Result<Vec<Address>, DecodeError> {
        decode_address_array(self.words, self.tail(ix)?)
    }

    /// Dynamic tuple of `head_len` head words referenced by head word `ix`.
    pub fn tuple(&self, ix: usize, head_len: usize) -> Result<Tuple<'a>, DecodeError> {
        Tuple::new(self.words, self.tail(ix)?, head_len)
    }
}

fn single_value(raw: &str) -> Result<Word, DecodeError> {
    let words = words_from_hex(raw)?;
    Ok(*word_at(&words, 0)?)
}

fn single_dynamic(raw: &str) -> Result<Vec<u8>, DecodeError> {
    let words = words_from_hex(raw)?;
    Tuple::new(&words, 0, 1)?.bytes(0)
}

/// Decode the return data of a function returning an `address`.
pub fn decode_address_return(raw: &str) -> Result<Address, DecodeError> {
    single_value(raw).map(|w| word_to_address(&w))
}

/// Decode the return data of a function returning a `uint256`.
pub fn decode_u256_return(raw: &str) -> Result<U256, DecodeError> {
    single_value(raw).map(|w| word_to_u256(&w))
}

/// Decode the return data of a function returning a `uint256` that fits a `u64`.
pub fn decode_u64_return(raw: &str) -> Result<u64, DecodeError> {
    word_to_u64(&single_value(raw)?)
}

/// Decode the return data of a function returning a `bytes32`.
pub fn decode_bytes32_return(raw: &str) -> Result<Bytes32, DecodeError> {
    single_value(raw).map(|w| word_to_bytes32(&w))
}

/// Decode the return data of a function returning a `bool`.
pub fn decode_bool_return(raw: &str) -> Result<bool, DecodeError> {
    Ok(!word_to_u256(&single_value(raw)?).is_zero())
}

/// Decode the return data of a function returning a `string`.
pub fn decode_string_return(raw: &str) -> Result<String, DecodeError> {
    Ok(String::from_utf8(single_dynamic(raw)?)?)
}

/// Decode the return data of a function returning `bytes`.
pub fn decode_bytes_return(raw: &str) -> Result<Vec<u8>, DecodeError> {
    single_dynamic(raw)
}
