//! Response operations of the partner API.
//!
//! Each operation is a unit struct whose `response()` decodes the reply to the matching request:
//!
//! - [`Order`] for `QuickOrder`
//! - [`GetOrderByPartnerOrderId`] for `GetOrderByPartnerOrderID`
//! - [`GetModifiedOrders`] for `GetModifiedOrders`
//! - [`ModifyOrder`] for `ModifyOrder`
//! - [`ValidateOrderParameters`] for `ValidateOrderParameters`
//!
//! A `SuccessCode` other than `0` is returned as a [`SymantecError`] inside the report.
//!
//! [`SymantecError`]: crate::SymantecError

use crate::response::Field;

mod details;
mod modify;
mod quick;
mod validate;

pub use self::{
    details::{GetModifiedOrders, GetOrderByPartnerOrderId},
    modify::ModifyOrder,
    quick::Order,
    validate::ValidateOrderParameters,
};

/// Fields of an `OrderInfo` block, shared by the order query operations.
pub(crate) const ORDER_INFO_FIELDS: &[Field] = &[
    Field::leaf(&["Method"]),
    Field::leaf(&["DomainName"]),
    Field::leaf(&["ProductCode"]),
    Field::leaf(&["PartnerOrderID"]),
    Field::leaf(&["ServerCount"]),
    Field::leaf(&["ValidityPeriod"]),
    Field::leaf(&["OrderStatusMajor"]),
    Field::leaf(&["OrderState"]),
    Field::leaf(&["OrderDate"]),
    Field::leaf(&["RenewalInd"]),
    Field::leaf(&["Price"]),
    Field::leaf(&["GeoTrustOrderID"]),
];
