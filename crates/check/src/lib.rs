//! Caller-side validation of decoded PoCo entities, signed orders and
//! worker authorizations.
//!
//! Decoders in `poco-abi` only reject structurally corrupt return data. A
//! payload that decodes fine may still describe an entity the protocol
//! would never produce, e.g. a category with no execution time. The checks
//! here reject those.
//!
//! ## Entity Validation
//!
//! - [`entity::check_category`] validates a category.
//! - [`entity::check_deal`] validates a deal.
//! - [`entity::check_task`] validates a task against the deal it belongs to.
//!
//! ## Order Validation
//!
//! - [`order::check_signed_order`] validates an order and its signature.
//! - [`order::check_orders_match`] validates that four orders may be matched
//!   into a deal.
//!
//! ## Authorization Validation
//!
//! - [`authorization::check_authorization`] validates a worker authorization
//!   against the scheduler of its deal.

#![deny(missing_docs)]
#![deny(unsafe_code)]

#[doc(inline)]
pub use poco_sign as sign;
#[doc(inline)]
pub use poco_types as types;

pub mod authorization;
pub mod entity;
pub mod order;
