use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::util::{push_text, text_element};

/// Certificate order parameters, serialized as `OrderParameter`.
///
/// Values are passed through as text; nothing is parsed or checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderParameters {
    /// PEM encoded certificate signing request.
    pub csr: Option<String>,
    pub domain_name: Option<String>,

    /// Partner order ID of the order being renewed.
    pub partner_order_id: Option<String>,
    pub renewal_indicator: Option<String>,
    pub renewal_behavior: Option<String>,
    pub server_count: Option<String>,
    pub hash_algorithm: Option<String>,
    pub special_instructions: Option<String>,

    /// Validity period in months.
    pub valid_period: Option<String>,
    pub web_server_type: Option<String>,
    pub wildcard: Option<String>,

    /// Comma separated subject alternative names.
    pub dns_names: Option<String>,
}

impl OrderParameters {
    pub fn serialize(&self) -> Element {
        let mut root = Element::new("OrderParameter");

        for (name, value) in [
            ("CSR", &self.csr),
            ("DomainName", &self.domain_name),
            ("OriginalPartnerOrderID", &self.partner_order_id),
            ("RenewalIndicator", &self.renewal_indicator),
            ("RenewalBehavior", &self.renewal_behavior),
            ("ServerCount", &self.server_count),
            ("SignatureHashAlgorithm", &self.hash_algorithm),
            ("SpecialInstructions", &self.special_instructions),
            ("ValidityPeriod", &self.valid_period),
            ("WebServerType", &self.web_server_type),
            ("WildCard", &self.wildcard),
            ("DNSNames", &self.dns_names),
        ] {
            push_text(&mut root, name, value.as_deref());
        }

        root
    }
}

/// Address the domain control approval email is sent to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApproverEmail {
    pub email: Option<String>,
}

impl ApproverEmail {
    pub fn set_approver_email(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }

    pub fn serialize(&self) -> Element {
        text_element("ApproverEmail", self.email.as_deref())
    }
}
