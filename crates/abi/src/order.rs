//! # Orders
//! ABI tuples of the four market orders.
//!
//! An order tuple is its EIP-712 fields in declaration order followed by
//! `bytes sign`. Unsigned orders encode an empty signature.

use crate::{
    decode::{DecodeError, Tuple},
    encode::Token,
};
use poco_types::{AppOrder, DatasetOrder, Order, RequestOrder, Signature, WorkerpoolOrder};

/// An order that can be written to and read back from its ABI tuple.
pub trait AbiOrder: Order + Sized {
    /// Number of head words of the order tuple.
    const HEAD_LEN: usize;

    /// The order as a dynamic tuple token.
    fn to_token(&self) -> Token;

    /// Read the order from its tuple.
    fn from_tuple(tuple: &Tuple<'_>) -> Result<Self, DecodeError>;
}

fn sign_token(sign: Option<&Signature>) -> Token {
    Token::Bytes(sign.map(|s| s.to_bytes().to_vec()).unwrap_or_default())
}

fn sign_from_tuple(tuple: &Tuple<'_>, ix: usize) -> Result<Option<Signature>, DecodeError> {
    let bytes = tuple.bytes(ix)?;
    if bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(Signature::from_slice(&bytes)?))
}

impl AbiOrder for AppOrder {
    const HEAD_LEN: usize = 9;

    fn to_token(&self) -> Token {
        Token::Tuple(vec![
            Token::Address(self.app),
            Token::Uint(self.app_price),
            Token::Uint(self.volume),
            Token::FixedBytes(self.tag),
            Token::Address(self.dataset_restrict),
            Token::Address(self.workerpool_restrict),
            Token::Address(self.requester_restrict),
            Token::FixedBytes(self.salt),
            sign_token(self.sign.as_ref()),
        ])
    }

    fn from_tuple(t: &Tuple<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            app: t.address(0)?,
            app_price: t.u256(1)?,
            volume: t.u256(2)?,
            tag: t.bytes32(3)?,
            dataset_restrict: t.address(4)?,
            workerpool_restrict: t.address(5)?,
            requester_restrict: t.address(6)?,
            salt: t.bytes32(7)?,
            sign: sign_from_tuple(t, 8)?,
        })
    }
}

impl AbiOrder for DatasetOrder {
    const HEAD_LEN: usize = 9;

    fn to_token(&self) -> Token {
        Token::Tuple(vec![
            Token::Address(self.dataset),
            Token::Uint(self.dataset_price),
            Token::Uint(self.volume),
            Token::FixedBytes(self.tag),
            Token::Address(self.app_restrict),
            Token::Address(self.workerpool_restrict),
            Token::Address(self.requester_restrict),
            Token::FixedBytes(self.salt),
            sign_token(self.sign.as_ref()),
        ])
    }

    fn from_tuple(t: &Tuple<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            dataset: t.address(0)?,
            dataset_price: t.u256(1)?,
            volume: t.u256(2)?,
            tag: t.bytes32(3)?,
            app_restrict: t.address(4)?,
            workerpool_restrict: t.address(5)?,
            requester_restrict: t.address(6)?,
            salt: t.bytes32(7)?,
            sign: sign_from_tuple(t, 8)?,
        })
    }
}

impl AbiOrder for WorkerpoolOrder {
    const HEAD_LEN: usize = 11;

    fn to_token(&self) -> Token {
        Token::Tuple(vec![
            Token::Address(self.workerpool),
            Token::Uint(self.workerpool_price),
            Token::Uint(self.volume),
            Token::FixedBytes(self.tag),
            Token::Uint(self.category),
            Token::Uint(self.trust),
            Token::Address(self.app_restrict),
            Token::Address(self.dataset_restrict),
            Token::Address(self.requester_restrict),
            Token::FixedBytes(self.salt),
            sign_token(self.sign.as_ref()),
        ])
    }

    fn from_tuple(t: &Tuple<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            workerpool: t.address(0)?,
            workerpool_price: t.u256(1)?,
            volume: t.u256(2)?,
            tag: t.bytes32(3)?,
            category: t.u256(4)?,
            trust: t.u256(5)?,
            app_restrict: t.address(6)?,
            dataset_restrict: t.address(7)?,
            requester_restrict: t.address(8)?,
            salt: t.bytes32(9)?,
            sign: sign_from_tuple(t, 10)?,
        })
    }
}

impl AbiOrder for RequestOrder {
    const HEAD_LEN: usize = 16;

    fn to_token(&self) -> Token {
        Token::Tuple(vec![
            Token::Address(self.app),
            Token::Uint(self.app_max_price),
            Token::Address(self.dataset),
            Token::Uint(self.dataset_max_price),
            Token::Address(self.workerpool),
            Token::Uint(self.workerpool_max_price),
            Token::Address(self.requester),
            Token::Uint(self.volume),
            Token::FixedBytes(self.tag),
            Token::Uint(self.category),
            Token::Uint(self.trust),
            Token::Address(self.beneficiary),
            Token::Address(self.callback),
            Token::String(self.params.clone()),
            Token::FixedBytes(self.salt),
            sign_token(self.sign.as_ref()),
        ])
    }

    fn from_tuple(t: &Tuple<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            app: t.address(0)?,
            app_max_price: t.u256(1)?,
            dataset: t.address(2)?,
            dataset_max_price: t.u256(3)?,
            workerpool: t.address(4)?,
            workerpool_max_price: t.u256(5)?,
            requester: t.address(6)?,
            volume: t.u256(7)?,
            tag: t.bytes32(8)?,
            category: t.u256(9)?,
            trust: t.u256(10)?,
            beneficiary: t.address(11)?,
            callback: t.address(12)?,
            params: t.string(13)?,
            salt: t.bytes32(14)?,
            sign: sign_from_tuple(t, 15)?,
        })
    }
}

/// Read the order whose tuple is referenced by head word `ix` of `outer`.
pub fn decode_order<O: AbiOrder>(outer: &Tuple<'_>, ix: usize) -> Result<O, DecodeError> {
    O::from_tuple(&outer.tuple(ix, O::HEAD_LEN)?)
}
