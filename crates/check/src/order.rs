//! Items related to the validation of market orders.

use crate::{
    sign::{is_signature_well_formed, order::verify_order, recover_address, Framing},
    types::{
        tag::{is_tee_tag, tag_satisfies},
        Address, AppOrder, Bytes32, DatasetOrder, Eip712Domain, Order, RequestOrder,
        WorkerpoolOrder, U256,
    },
};
use poco_eip712::{final_hash, Eip712Message};
use thiserror::Error;

/// [`check_signed_order`] error.
#[derive(Debug, Error)]
pub enum InvalidSignedOrder {
    /// No signature is attached.
    #[error("order is not signed")]
    Unsigned,
    /// The attached signature is all zeroes.
    #[error("order signature is malformed")]
    MalformedSignature,
    /// The order cannot be matched for any task.
    #[error("order has a zero volume")]
    ZeroVolume,
    /// The signature does not verify against the expected signer.
    #[error("order is signed by {found:?}, expected {expected}")]
    Signer {
        /// Address the order should be signed by.
        expected: Address,
        /// Address recovered from the signature, if any.
        found: Option<Address>,
    },
}

/// [`check_orders_match`] error.
#[derive(Debug, Error)]
pub enum OrdersMismatch {
    /// One of the orders has no volume left to match.
    #[error("{0} order has a zero volume")]
    ZeroVolume(&'static str),
    /// The request targets another app.
    #[error("request asks for app {requested}, app order offers {offered}")]
    App {
        /// App in the request.
        requested: Address,
        /// App in the app order.
        offered: Address,
    },
    /// The request targets another dataset, or a dataset order is missing
    /// or superfluous.
    #[error("request asks for dataset {requested}, dataset order offers {offered}")]
    Dataset {
        /// Dataset in the request, zero for none.
        requested: Address,
        /// Dataset in the dataset order, zero for none.
        offered: Address,
    },
    /// The request is restricted to another workerpool.
    #[error("request asks for workerpool {requested}, workerpool order offers {offered}")]
    Workerpool {
        /// Workerpool in the request.
        requested: Address,
        /// Workerpool in the workerpool order.
        offered: Address,
    },
    /// A resource is priced above what the requester pays.
    #[error("{resource} price {price} exceeds the requester's maximum {max}")]
    Price {
        /// Which resource.
        resource: &'static str,
        /// Price asked by the resource order.
        price: U256,
        /// Maximum price in the request.
        max: U256,
    },
    /// The workerpool serves another category.
    #[error("request asks for category {requested}, workerpool offers {offered}")]
    Category {
        /// Category in the request.
        requested: U256,
        /// Category in the workerpool order.
        offered: U256,
    },
    /// The workerpool offers less trust than requested.
    #[error("request asks for trust {requested}, workerpool offers {offered}")]
    Trust {
        /// Trust in the request.
        requested: U256,
        /// Trust in the workerpool order.
        offered: U256,
    },
    /// The workerpool lacks a required tag bit.
    #[error("workerpool tag {offered} does not cover required tag {required}")]
    Tag {
        /// Union of the app, dataset and request tags.
        required: Bytes32,
        /// Tag of the workerpool order.
        offered: Bytes32,
    },
    /// The app tag and the required tag disagree on the TEE bit.
    #[error("app tag {app} disagrees with required tag {required} on TEE execution")]
    Tee {
        /// Union of the app, dataset and request tags.
        required: Bytes32,
        /// Tag of the app order.
        app: Bytes32,
    },
    /// An order restricts a counterparty that is not part of the match.
    #[error("{order} order restricts {field} to {restriction}, got {candidate}")]
    Restriction {
        /// Which order carries the restriction.
        order: &'static str,
        /// Which counterparty is restricted.
        field: &'static str,
        /// Allowed counterparty.
        restriction: Address,
        /// Counterparty in the match.
        candidate: Address,
    },
}

/// Validate a signed order.
///
/// Checks the volume, then that the order is signed by `signer` under
/// `domain`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(signer = %signer), err))]
pub fn check_signed_order<O>(
    order: &O,
    domain: &Eip712Domain,
    signer: &Address,
) -> Result<(), InvalidSignedOrder>
where
    O: Order + Eip712Message,
{
    if order.volume().is_zero() {
        return Err(InvalidSignedOrder::ZeroVolume);
    }
    let signature = order.signature().ok_or(InvalidSignedOrder::Unsigned)?;
    if !is_signature_well_formed(&signature.to_bytes()) {
        return Err(InvalidSignedOrder::MalformedSignature);
    }
    if !verify_order(order, domain, signer) {
        let found = recover_address(&final_hash(order, domain), signature, Framing::Raw);
        return Err(InvalidSignedOrder::Signer {
            expected: *signer,
            found,
        });
    }
    Ok(())
}

/// Validate that the orders may be matched into a deal.
///
/// Covers what can be decided from the orders alone: resources, prices,
/// category, trust, tags, restrictions and volumes. Consumed volumes,
/// registered categories and group restrictions are left to the hub.
///
/// `dataset` is `None` when the request uses no dataset.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(app = %app.app, workerpool = %workerpool.workerpool), err))]
pub fn check_orders_match(
    app: &AppOrder,
    dataset: Option<&DatasetOrder>,
    workerpool: &WorkerpoolOrder,
    request: &RequestOrder,
) -> Result<(), OrdersMismatch> {
    check_volumes(app, dataset, workerpool, request)?;

    if request.app != app.app {
        return Err(OrdersMismatch::App {
            requested: request.app,
            offered: app.app,
        });
    }
    let dataset_address = dataset.map_or(Address::ZERO, |d| d.dataset);
    if request.dataset != dataset_address {
        return Err(OrdersMismatch::Dataset {
            requested: request.dataset,
            offered: dataset_address,
        });
    }
    if !request.workerpool.is_zero() && request.workerpool != workerpool.workerpool {
        return Err(OrdersMismatch::Workerpool {
            requested: request.workerpool,
            offered: workerpool.workerpool,
        });
    }

    check_price("app", app.app_price, request.app_max_price)?;
    if let Some(dataset) = dataset {
        check_price("dataset", dataset.dataset_price, request.dataset_max_price)?;
    }
    check_price(
        "workerpool",
        workerpool.workerpool_price,
        request.workerpool_max_price,
    )?;

    if request.category != workerpool.category {
        return Err(OrdersMismatch::Category {
            requested: request.category,
            offered: workerpool.category,
        });
    }
    if request.trust > workerpool.trust {
        return Err(OrdersMismatch::Trust {
            requested: request.trust,
            offered: workerpool.trust,
        });
    }

    check_tags(app, dataset, workerpool, request)?;
    check_restrictions(app, dataset, workerpool, request)
}

fn check_volumes(
    app: &AppOrder,
    dataset: Option<&DatasetOrder>,
    workerpool: &WorkerpoolOrder,
    request: &RequestOrder,
) -> Result<(), OrdersMismatch> {
    let volumes = [
        ("app", app.volume()),
        ("dataset", dataset.map_or(U256::from(1u64), |d| d.volume())),
        ("workerpool", workerpool.volume()),
        ("request", request.volume()),
    ];
    match volumes.iter().find(|(_, volume)| volume.is_zero()) {
        Some((order, _)) => Err(OrdersMismatch::ZeroVolume(*order)),
        None => Ok(()),
    }
}

fn check_price(resource: &'static str, price: U256, max: U256) -> Result<(), OrdersMismatch> {
    if price > max {
        #[cfg(feature = "tracing")]
        tracing::debug!(resource, %price, %max, "resource priced above the request");
        return Err(OrdersMismatch::Price {
            resource,
            price,
            max,
        });
    }
    Ok(())
}

fn check_tags(
    app: &AppOrder,
    dataset: Option<&DatasetOrder>,
    workerpool: &WorkerpoolOrder,
    request: &RequestOrder,
) -> Result<(), OrdersMismatch> {
    let mut required = app.tag.0;
    let others = [dataset.map_or(Bytes32::ZERO, |d| d.tag), request.tag];
    for tag in others {
        required.iter_mut().zip(tag.0).for_each(|(r, t)| *r |= t);
    }
    let required = Bytes32(required);
    if !tag_satisfies(&workerpool.tag, &required) {
        return Err(OrdersMismatch::Tag {
            required,
            offered: workerpool.tag,
        });
    }
    if is_tee_tag(&required) != is_tee_tag(&app.tag) {
        return Err(OrdersMismatch::Tee {
            required,
            app: app.tag,
        });
    }
    Ok(())
}

fn check_restrictions(
    app: &AppOrder,
    dataset: Option<&DatasetOrder>,
    workerpool: &WorkerpoolOrder,
    request: &RequestOrder,
) -> Result<(), OrdersMismatch> {
    let dataset_address = dataset.map_or(Address::ZERO, |d| d.dataset);
    let mut restrictions = vec![
        ("app", "dataset", app.dataset_restrict, dataset_address),
        ("app", "workerpool", app.workerpool_restrict, workerpool.workerpool),
        ("app", "requester", app.requester_restrict, request.requester),
        ("workerpool", "app", workerpool.app_restrict, app.app),
        ("workerpool", "dataset", workerpool.dataset_restrict, dataset_address),
        ("workerpool", "requester", workerpool.requester_restrict, request.requester),
    ];
    if let Some(dataset) = dataset {
        restrictions.extend([
            ("dataset", "app", dataset.app_restrict, app.app),
            ("dataset", "workerpool", dataset.workerpool_restrict, workerpool.workerpool),
            ("dataset", "requester", dataset.requester_restrict, request.requester),
        ]);
    }
    for (order, field, restriction, candidate) in restrictions {
        // Zero is unrestricted.
        if !restriction.is_zero() && restriction != candidate {
            return Err(OrdersMismatch::Restriction {
                order,
                field,
                restriction,
                candidate,
            });
        }
    }
    Ok(())
}
