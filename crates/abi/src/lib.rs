//! Contract ABI codec for the PoCo hub and asset registries.
//!
//! Reading goes raw return data → [`word`] → [`decode`] → typed entity.
//! Writing goes typed parameters → [`encode`] → call-data, with the
//! protocol's calls assembled in [`hub`] and [`asset`].
//!
//! Only the types the protocol uses are supported: `address`, `uint256`,
//! `bytes32`, `bytes`, `string`, tuples of those and `address[]`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod asset;
pub mod decode;
pub mod encode;
pub mod hub;
pub mod log;
pub mod order;
pub mod selector;
pub mod word;

#[doc(inline)]
pub use poco_types as types;

pub use decode::DecodeError;
pub use encode::{encode_call, Token};
