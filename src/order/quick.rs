use crate::response::{checked_root, extract, Field, OrderResponse, ResponseShape};

const SHAPE: ResponseShape = ResponseShape {
    header: "OrderResponseHeader",
    error_context: "There was an error submitting this SSL certificate",
};

const FIELDS: &[Field] = &[
    Field::Text {
        key: "PartnerOrderID",
        path: &["OrderResponseHeader", "PartnerOrderID"],
    },
    Field::leaf(&["GeoTrustOrderID"]),
];

/// Response to a `QuickOrder` request.
///
/// On success yields `PartnerOrderID` (echoed back in the header) and the CA assigned
/// `GeoTrustOrderID`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Order;

impl Order {
    pub fn response(&self, xml: &[u8]) -> eyre::Result<OrderResponse> {
        let root = checked_root(xml, &SHAPE)?;
        Ok(extract(&root, FIELDS))
    }
}
