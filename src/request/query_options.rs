use xmltree::Element;

use crate::util::push_bool;

/// Detail flags for order queries, serialized as `OrderQueryOptions`.
///
/// Everything is requested by default. Turn individual flags off with struct update syntax:
///
/// ```
/// use symantecssl::request::OrderQueryOptions;
///
/// let options = OrderQueryOptions {
///     contacts: false,
///     payment_info: false,
///     ..Default::default()
/// };
/// assert!(options.product_detail);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderQueryOptions {
    pub product_detail: bool,
    pub contacts: bool,
    pub payment_info: bool,
    pub certificate_info: bool,
    pub fulfillment: bool,
    pub ca_certs: bool,
    pub pkcs7_cert: bool,
    pub partner_tags: bool,
    pub authentication_comments: bool,
    pub authentication_statuses: bool,
    pub file_auth_dv_summary: bool,
    pub trust_services_summary: bool,
    pub trust_services_details: bool,
    pub vulnerability_scan_summary: bool,
    pub vulnerability_scan_details: bool,
    pub certificate_algorithm_info: bool,
}

impl Default for OrderQueryOptions {
    fn default() -> Self {
        Self {
            product_detail: true,
            contacts: true,
            payment_info: true,
            certificate_info: true,
            fulfillment: true,
            ca_certs: true,
            pkcs7_cert: true,
            partner_tags: true,
            authentication_comments: true,
            authentication_statuses: true,
            file_auth_dv_summary: true,
            trust_services_summary: true,
            trust_services_details: true,
            vulnerability_scan_summary: true,
            vulnerability_scan_details: true,
            certificate_algorithm_info: true,
        }
    }
}

impl OrderQueryOptions {
    /// Flags paired with their element names, in document order.
    fn flags(&self) -> [(&'static str, bool); 16] {
        [
            ("ReturnProductDetail", self.product_detail),
            ("ReturnContacts", self.contacts),
            ("ReturnPaymentInfo", self.payment_info),
            ("ReturnCertificateInfo", self.certificate_info),
            ("ReturnFulfillment", self.fulfillment),
            ("ReturnCACerts", self.ca_certs),
            ("ReturnPKCS7Cert", self.pkcs7_cert),
            ("ReturnPartnerTags", self.partner_tags),
            ("ReturnAuthenticationComments", self.authentication_comments),
            ("ReturnAuthenticationStatuses", self.authentication_statuses),
            ("ReturnFileAuthDVSummary", self.file_auth_dv_summary),
            ("ReturnTrustServicesSummary", self.trust_services_summary),
            ("ReturnTrustServicesDetails", self.trust_services_details),
            ("ReturnVulnerabilityScanSummary", self.vulnerability_scan_summary),
            ("ReturnVulnerabilityScanDetails", self.vulnerability_scan_details),
            ("ReturnCertificateAlgorithmInfo", self.certificate_algorithm_info),
        ]
    }

    pub fn serialize(&self) -> Element {
        let mut root = Element::new("OrderQueryOptions");
        for (name, value) in self.flags() {
            push_bool(&mut root, name, value);
        }
        root
    }
}
