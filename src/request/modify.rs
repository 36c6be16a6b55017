use std::fmt;

use xmltree::Element;

use super::{HeaderKind, Payload, RequestHeader, RequestKind};
use crate::{
    order,
    util::{push, push_text},
};

/// Operation applied to an existing order by a `ModifyOrder` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifyOperation {
    Approve,
    Cancel,
    Reject,
    Deactivate,
    ResendApproverEmail,
    ResendFulfillmentEmail,
    RequestOnDemandScan,

    /// Any operation name not listed above, sent verbatim.
    Other(String),
}

impl ModifyOperation {
    pub fn as_str(&self) -> &str {
        match self {
            ModifyOperation::Approve => "APPROVE",
            ModifyOperation::Cancel => "CANCEL",
            ModifyOperation::Reject => "REJECT",
            ModifyOperation::Deactivate => "DEACTIVATE",
            ModifyOperation::ResendApproverEmail => "RESEND_APPROVER_EMAIL",
            ModifyOperation::ResendFulfillmentEmail => "RESEND_FULFILLMENT_EMAIL",
            ModifyOperation::RequestOnDemandScan => "REQUEST_ON_DEMAND_SCAN",
            ModifyOperation::Other(operation) => operation,
        }
    }
}

impl fmt::Display for ModifyOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `ModifyOrder` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyOrderRequest {
    pub request_header: RequestHeader,
    pub operation: ModifyOperation,
}

impl ModifyOrderRequest {
    /// Modify the order placed for `product_code` under `partner_order_id`.
    pub fn new(
        product_code: impl Into<String>,
        partner_order_id: impl Into<String>,
        operation: ModifyOperation,
    ) -> Self {
        let mut request_header = RequestHeader::default();
        request_header.set_request_header(product_code, partner_order_id);

        Self {
            request_header,
            operation,
        }
    }
}

impl Payload for ModifyOrderRequest {
    const KIND: RequestKind = RequestKind::ModifyOrder;
    type Output = ();

    fn request_header_mut(&mut self) -> &mut RequestHeader {
        &mut self.request_header
    }

    fn serialize(&self) -> Element {
        let mut root = Element::new("Request");
        push(&mut root, self.request_header.serialize(HeaderKind::Order));
        push_text(&mut root, "ModifyOrderOperation", Some(self.operation.as_str()));
        root
    }

    fn parse_response(xml: &[u8]) -> eyre::Result<()> {
        order::ModifyOrder.response(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::text;

    #[test]
    fn test_serialize_modify_order_request() {
        let req = ModifyOrderRequest::new("SSL123", "1234", ModifyOperation::Cancel);
        let root = req.serialize();

        assert_eq!(text(&root, "ProductCode").as_deref(), Some("SSL123"));
        assert_eq!(text(&root, "PartnerOrderID").as_deref(), Some("1234"));
        assert_eq!(text(&root, "ModifyOrderOperation").as_deref(), Some("CANCEL"));
    }

    #[test]
    fn test_other_operation_is_verbatim() {
        let op = ModifyOperation::Other("PUSH_STATE".to_owned());
        assert_eq!(op.to_string(), "PUSH_STATE");
        assert_eq!(ModifyOperation::ResendApproverEmail.as_str(), "RESEND_APPROVER_EMAIL");
    }
}
