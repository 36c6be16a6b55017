use std::fmt;

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::util::{push, push_text};

/// Partner API login.
///
/// Deserializable so it can be loaded from whatever configuration format the caller uses.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub partner_code: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        partner_code: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            partner_code: partner_code.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("partner_code", &self.partner_code)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Which header element a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// `OrderRequestHeader`, with `ProductCode` and `PartnerOrderID`.
    Order,

    /// `QueryRequestHeader`, credentials only.
    Query,
}

/// Request header: credentials plus, for order requests, the product and partner order ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeader {
    pub partner_code: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub product_code: Option<String>,
    pub partner_order_id: Option<String>,
}

impl RequestHeader {
    pub fn set_credentials(&mut self, credentials: &Credentials) {
        self.partner_code = Some(credentials.partner_code.clone());
        self.username = Some(credentials.username.clone());
        self.password = Some(credentials.password.clone());
    }

    /// Sets the product being ordered and the partner's own ID for the order.
    pub fn set_request_header(
        &mut self,
        product_code: impl Into<String>,
        partner_order_id: impl Into<String>,
    ) {
        self.product_code = Some(product_code.into());
        self.partner_order_id = Some(partner_order_id.into());
    }

    pub fn serialize(&self, kind: HeaderKind) -> Element {
        let mut root = match kind {
            HeaderKind::Order => {
                let mut root = Element::new("OrderRequestHeader");
                push_text(&mut root, "ProductCode", self.product_code.as_deref());
                push_text(&mut root, "PartnerOrderID", self.partner_order_id.as_deref());
                root
            }
            HeaderKind::Query => Element::new("QueryRequestHeader"),
        };

        push_text(&mut root, "PartnerCode", self.partner_code.as_deref());

        // always present, even without credentials
        let mut auth_token = Element::new("AuthToken");
        push_text(&mut auth_token, "UserName", self.username.as_deref());
        push_text(&mut auth_token, "Password", self.password.as_deref());
        push(&mut root, auth_token);

        root
    }
}
