use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::util::push_text;

/// Contact details for an order.
///
/// The role (`AdminContact`, `TechContact`, ...) is chosen at serialization time so the same
/// value can be used for every contact of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
    pub org_name: Option<String>,
    pub address_line_one: Option<String>,
    pub address_line_two: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub fax: Option<String>,
}

impl ContactInfo {
    pub fn serialize(&self, role: &str) -> Element {
        let mut root = Element::new(role);

        for (name, value) in [
            ("FirstName", &self.first_name),
            ("LastName", &self.last_name),
            ("Phone", &self.phone),
            ("Email", &self.email),
            ("Title", &self.title),
            ("OrganizationName", &self.org_name),
            ("AddressLine1", &self.address_line_one),
            ("AddressLine2", &self.address_line_two),
            ("City", &self.city),
            ("Region", &self.region),
            ("PostalCode", &self.postal_code),
            ("Country", &self.country),
            ("Fax", &self.fax),
        ] {
            push_text(&mut root, name, value.as_deref());
        }

        root
    }
}
