use xmltree::Element;

use super::ORDER_INFO_FIELDS;
use crate::{
    response::{checked_root, extract, OrderResponse, ResponseShape},
    util::find_path,
};

const ORDER_SHAPE: ResponseShape = ResponseShape {
    header: "QueryResponseHeader",
    error_context: "There was an error getting the order details",
};

const MODIFIED_SHAPE: ResponseShape = ResponseShape {
    header: "QueryResponseHeader",
    error_context: "There was an error getting the modified orders",
};

/// `OrderInfo` fields of one `OrderDetail`; empty when it has no `OrderInfo`.
fn order_info(detail: &Element) -> OrderResponse {
    find_path(detail, &["OrderInfo"])
        .map(|info| extract(info, ORDER_INFO_FIELDS))
        .unwrap_or_default()
}

/// Response to a `GetOrderByPartnerOrderID` query.
///
/// Yields the `OrderInfo` of the matched order: status, dates, price and identifiers. `Price`
/// is kept as the text the API sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetOrderByPartnerOrderId;

impl GetOrderByPartnerOrderId {
    pub fn response(&self, xml: &[u8]) -> eyre::Result<OrderResponse> {
        let root = checked_root(xml, &ORDER_SHAPE)?;

        Ok(root
            .get_child("OrderDetail")
            .map(order_info)
            .unwrap_or_default())
    }
}

/// Response to a `GetModifiedOrders` query.
///
/// Yields one mapping per `OrderDetails/OrderDetail`, in document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetModifiedOrders;

impl GetModifiedOrders {
    pub fn response(&self, xml: &[u8]) -> eyre::Result<Vec<OrderResponse>> {
        let root = checked_root(xml, &MODIFIED_SHAPE)?;

        let Some(details) = root.get_child("OrderDetails") else {
            return Ok(Vec::new());
        };

        Ok(details
            .children
            .iter()
            .filter_map(|node| node.as_element())
            .filter(|el| el.name == "OrderDetail")
            .map(order_info)
            .collect())
    }
}
