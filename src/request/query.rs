use xmltree::Element;

use super::{HeaderKind, OrderQueryOptions, Payload, RequestHeader, RequestKind};
use crate::{
    order,
    response::OrderResponse,
    util::{push, push_text},
};

/// A date bound for order queries, sent as `YYYY-MM-DD`.
///
/// Built from an already formatted string or from a [`time::Date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDate(String);

impl QueryDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for QueryDate {
    fn from(date: String) -> Self {
        Self(date)
    }
}

impl From<&str> for QueryDate {
    fn from(date: &str) -> Self {
        Self(date.to_owned())
    }
}

impl From<time::Date> for QueryDate {
    fn from(date: time::Date) -> Self {
        Self(format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        ))
    }
}

impl From<QueryDate> for String {
    fn from(date: QueryDate) -> Self {
        date.0
    }
}

/// A `GetModifiedOrders` query: orders changed within a date range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetModifiedOrdersRequest {
    pub request_header: RequestHeader,
    pub query_options: OrderQueryOptions,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

impl GetModifiedOrdersRequest {
    /// Sets both date bounds from strings or [`time::Date`]s.
    pub fn set_time_frame(
        &mut self,
        from_date: impl Into<QueryDate>,
        to_date: impl Into<QueryDate>,
    ) {
        let (from_date, to_date): (QueryDate, QueryDate) = (from_date.into(), to_date.into());
        self.from_date = Some(from_date.into());
        self.to_date = Some(to_date.into());
    }

    pub fn set_query_options(&mut self, query_options: OrderQueryOptions) {
        self.query_options = query_options;
    }
}

impl Payload for GetModifiedOrdersRequest {
    const KIND: RequestKind = RequestKind::GetModifiedOrders;
    type Output = Vec<OrderResponse>;

    fn request_header_mut(&mut self) -> &mut RequestHeader {
        &mut self.request_header
    }

    fn serialize(&self) -> Element {
        let mut root = Element::new("Request");
        push(&mut root, self.request_header.serialize(HeaderKind::Query));
        push(&mut root, self.query_options.serialize());
        push_text(&mut root, "FromDate", self.from_date.as_deref());
        push_text(&mut root, "ToDate", self.to_date.as_deref());
        root
    }

    fn parse_response(xml: &[u8]) -> eyre::Result<Vec<OrderResponse>> {
        order::GetModifiedOrders.response(xml)
    }
}

/// A `GetOrderByPartnerOrderID` query: look up one order by the partner's own ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOrderByPartnerOrderIdRequest {
    pub request_header: RequestHeader,
    pub partner_order_id: Option<String>,
    pub query_options: OrderQueryOptions,
}

impl GetOrderByPartnerOrderIdRequest {
    pub fn new(partner_order_id: impl Into<String>) -> Self {
        Self {
            partner_order_id: Some(partner_order_id.into()),
            ..Default::default()
        }
    }

    pub fn set_query_options(&mut self, query_options: OrderQueryOptions) {
        self.query_options = query_options;
    }
}

impl Payload for GetOrderByPartnerOrderIdRequest {
    const KIND: RequestKind = RequestKind::GetOrderByPartnerOrderId;
    type Output = OrderResponse;

    fn request_header_mut(&mut self) -> &mut RequestHeader {
        &mut self.request_header
    }

    fn serialize(&self) -> Element {
        let mut root = Element::new("Request");
        push(&mut root, self.request_header.serialize(HeaderKind::Query));
        push_text(&mut root, "PartnerOrderID", self.partner_order_id.as_deref());
        push(&mut root, self.query_options.serialize());
        root
    }

    fn parse_response(xml: &[u8]) -> eyre::Result<OrderResponse> {
        order::GetOrderByPartnerOrderId.response(xml)
    }
}

#[cfg(test)]
mod tests {
    use time::{Date, Month};

    use super::*;
    use crate::{
        request::Credentials,
        test::{find_all, text},
    };

    #[test]
    fn test_serialize_get_modified_orders_request() {
        let gmor = GetModifiedOrdersRequest {
            from_date: Some("2012-09-18".to_owned()),
            to_date: Some("2015-01-08".to_owned()),
            ..Default::default()
        };
        let root = gmor.serialize();

        assert_eq!(text(&root, "FromDate").as_deref(), Some("2012-09-18"));
        assert_eq!(text(&root, "ToDate").as_deref(), Some("2015-01-08"));
        assert_eq!(find_all(&root, "OrderQueryOptions").len(), 1);
        assert_eq!(find_all(&root, "QueryRequestHeader").len(), 1);
    }

    #[test]
    fn test_set_credentials() {
        let mut gmor = GetModifiedOrdersRequest::default();
        gmor.set_credentials(&Credentials::new("BL2", "Maya", "SirenHarmony"));

        assert_eq!(gmor.request_header.username.as_deref(), Some("Maya"));
        assert_eq!(gmor.request_header.password.as_deref(), Some("SirenHarmony"));
        assert_eq!(gmor.request_header.partner_code.as_deref(), Some("BL2"));
    }

    #[test]
    fn test_set_time_frame() {
        let from_date = Date::from_calendar_date(2012, Month::September, 18).unwrap();
        let to_date = Date::from_calendar_date(2015, Month::January, 8).unwrap();

        let mut gmor = GetModifiedOrdersRequest::default();
        gmor.set_time_frame(from_date, to_date);

        assert_eq!(gmor.from_date.as_deref(), Some("2012-09-18"));
        assert_eq!(gmor.to_date.as_deref(), Some("2015-01-08"));
    }

    #[test]
    fn test_set_time_frame_from_strings() {
        let mut gmor = GetModifiedOrdersRequest::default();
        gmor.set_time_frame("2012-09-18", String::from("2015-01-08"));

        assert_eq!(gmor.from_date.as_deref(), Some("2012-09-18"));
        assert_eq!(gmor.to_date.as_deref(), Some("2015-01-08"));
    }

    #[test]
    fn test_set_query_options() {
        let mut gmor = GetModifiedOrdersRequest::default();
        gmor.set_query_options(OrderQueryOptions {
            product_detail: false,
            contacts: false,
            vulnerability_scan_details: false,
            ..Default::default()
        });

        assert!(!gmor.query_options.product_detail);
        assert!(!gmor.query_options.contacts);
        assert!(!gmor.query_options.vulnerability_scan_details);
        assert!(gmor.query_options.payment_info);

        let root = gmor.serialize();
        assert_eq!(text(&root, "ReturnContacts").as_deref(), Some("false"));
        assert_eq!(text(&root, "ReturnPaymentInfo").as_deref(), Some("true"));
    }

    #[test]
    fn test_serialize_get_order_by_partner_order_id_request() {
        let req = GetOrderByPartnerOrderIdRequest::new("1234");
        let root = req.serialize();

        assert_eq!(text(&root, "PartnerOrderID").as_deref(), Some("1234"));
        assert_eq!(find_all(&root, "QueryRequestHeader").len(), 1);
        assert_eq!(find_all(&root, "OrderQueryOptions").len(), 1);
    }
}
