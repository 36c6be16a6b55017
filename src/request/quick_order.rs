use xmltree::Element;

use super::{
    ApproverEmail, ContactInfo, HeaderKind, OrderParameters, Payload, RequestHeader, RequestKind,
};
use crate::{order, response::OrderResponse, util::push};

/// A `QuickOrder` request: place a new certificate order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickOrderRequest {
    pub request_header: RequestHeader,
    pub order_parameters: OrderParameters,
    pub admin_contact: Option<ContactInfo>,
    pub tech_contact: Option<ContactInfo>,
    pub approver_email: ApproverEmail,
}

impl QuickOrderRequest {
    pub fn set_order_parameters(&mut self, order_parameters: OrderParameters) {
        self.order_parameters = order_parameters;
    }
}

impl Payload for QuickOrderRequest {
    const KIND: RequestKind = RequestKind::QuickOrder;
    type Output = OrderResponse;

    fn request_header_mut(&mut self) -> &mut RequestHeader {
        &mut self.request_header
    }

    fn serialize(&self) -> Element {
        let mut root = Element::new("Request");
        push(&mut root, self.request_header.serialize(HeaderKind::Order));
        push(&mut root, self.order_parameters.serialize());

        if let Some(contact) = &self.admin_contact {
            push(&mut root, contact.serialize("AdminContact"));
        }
        if let Some(contact) = &self.tech_contact {
            push(&mut root, contact.serialize("TechContact"));
        }

        push(&mut root, self.approver_email.serialize());
        root
    }

    fn parse_response(xml: &[u8]) -> eyre::Result<OrderResponse> {
        order::Order.response(xml)
    }
}

/// A `ValidateOrderParameters` request: dry-run an order and have the CA parse its CSR.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidateOrderParametersRequest {
    pub request_header: RequestHeader,
    pub order_parameters: OrderParameters,
}

impl ValidateOrderParametersRequest {
    pub fn set_order_parameters(&mut self, order_parameters: OrderParameters) {
        self.order_parameters = order_parameters;
    }
}

impl Payload for ValidateOrderParametersRequest {
    const KIND: RequestKind = RequestKind::ValidateOrderParameters;
    type Output = OrderResponse;

    fn request_header_mut(&mut self) -> &mut RequestHeader {
        &mut self.request_header
    }

    fn serialize(&self) -> Element {
        let mut root = Element::new("Request");
        push(&mut root, self.request_header.serialize(HeaderKind::Order));
        push(&mut root, self.order_parameters.serialize());
        root
    }

    fn parse_response(xml: &[u8]) -> eyre::Result<OrderResponse> {
        order::ValidateOrderParameters.response(xml)
    }
}
