//! Request documents for the partner API.
//!
//! Each request type implements [`Payload`], which builds the `<Request>` element and declares
//! the [`RequestKind`] it is sent as. [`RequestEnvelope`] adds the outer element:
//!
//! ```text
//! <QuickOrder>
//!   <Request>
//!     <OrderRequestHeader>...</OrderRequestHeader>
//!     <OrderParameter>...</OrderParameter>
//!     <ApproverEmail>...</ApproverEmail>
//!   </Request>
//! </QuickOrder>
//! ```
//!
//! Building a request does no I/O and no validation.

use xmltree::Element;

use crate::util::{push, write_xml};

mod contact;
mod header;
mod modify;
mod order_params;
mod query;
mod query_options;
mod quick_order;

pub use self::{
    contact::ContactInfo,
    header::{Credentials, HeaderKind, RequestHeader},
    modify::{ModifyOperation, ModifyOrderRequest},
    order_params::{ApproverEmail, OrderParameters},
    query::{GetModifiedOrdersRequest, GetOrderByPartnerOrderIdRequest, QueryDate},
    query_options::OrderQueryOptions,
    quick_order::{QuickOrderRequest, ValidateOrderParametersRequest},
};

/// The API call a request is sent as; names the envelope's root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    QuickOrder,
    ValidateOrderParameters,
    ModifyOrder,
    GetOrderByPartnerOrderId,
    GetModifiedOrders,
}

impl RequestKind {
    pub fn root_tag(&self) -> &'static str {
        match self {
            RequestKind::QuickOrder => "QuickOrder",
            RequestKind::ValidateOrderParameters => "ValidateOrderParameters",
            RequestKind::ModifyOrder => "ModifyOrder",
            RequestKind::GetOrderByPartnerOrderId => "GetOrderByPartnerOrderID",
            RequestKind::GetModifiedOrders => "GetModifiedOrders",
        }
    }
}

/// A request body that can be wrapped in a [`RequestEnvelope`].
pub trait Payload {
    /// Root element the envelope is built under.
    const KIND: RequestKind;

    /// What a successful response decodes to.
    type Output;

    fn request_header_mut(&mut self) -> &mut RequestHeader;

    /// Builds the `<Request>` element.
    fn serialize(&self) -> Element;

    /// Decodes the API's reply to this request.
    fn parse_response(xml: &[u8]) -> eyre::Result<Self::Output>;

    fn set_credentials(&mut self, credentials: &Credentials) {
        self.request_header_mut().set_credentials(credentials);
    }
}

/// Outer structure wrapping exactly one request payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestEnvelope<P> {
    payload: P,
}

impl<P: Payload> RequestEnvelope<P> {
    pub fn new(payload: P) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }

    pub fn kind(&self) -> RequestKind {
        P::KIND
    }

    pub fn serialize(&self) -> Element {
        let mut root = Element::new(P::KIND.root_tag());
        push(&mut root, self.payload.serialize());
        root
    }

    /// Serialized document, ready to be sent.
    pub fn to_xml(&self) -> eyre::Result<Vec<u8>> {
        write_xml(&self.serialize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test::{find, find_all, text},
        util::parse_xml,
    };

    #[test]
    fn test_serialize_modified_orders() {
        let re = RequestEnvelope::new(GetModifiedOrdersRequest::default());

        let root = re.serialize();

        assert_eq!(root.name, "GetModifiedOrders");
        assert_eq!(root.children.len(), 1);
        assert!(!find(&root, "Request").unwrap().children.is_empty());
        assert_eq!(find_all(&root, "GetModifiedOrders").len(), 0);
    }

    #[test]
    fn test_root_follows_payload_kind() {
        let quick = RequestEnvelope::new(QuickOrderRequest::default());
        assert_eq!(quick.kind(), RequestKind::QuickOrder);
        assert_eq!(quick.serialize().name, "QuickOrder");

        let lookup = RequestEnvelope::new(GetOrderByPartnerOrderIdRequest::new("1"));
        assert_eq!(lookup.serialize().name, "GetOrderByPartnerOrderID");

        let modify =
            RequestEnvelope::new(ModifyOrderRequest::new("SSL123", "1", ModifyOperation::Approve));
        assert_eq!(modify.serialize().name, "ModifyOrder");

        let validate = RequestEnvelope::new(ValidateOrderParametersRequest::default());
        assert_eq!(validate.serialize().name, "ValidateOrderParameters");
    }

    #[test]
    fn test_to_xml_round_trips_through_parser() {
        let mut req = GetModifiedOrdersRequest::default();
        req.set_credentials(&Credentials::new("BL2", "Axton", "pw"));
        req.set_time_frame("2012-09-18", "2015-01-08");

        let bytes = RequestEnvelope::new(req).to_xml().unwrap();
        let root = parse_xml(&bytes).unwrap();

        assert_eq!(root.name, "GetModifiedOrders");
        assert_eq!(text(&root, "UserName").as_deref(), Some("Axton"));
        assert_eq!(text(&root, "FromDate").as_deref(), Some("2012-09-18"));
    }
}
