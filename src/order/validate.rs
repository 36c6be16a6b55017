use crate::response::{checked_root, extract, Field, OrderResponse, ResponseShape};

const SHAPE: ResponseShape = ResponseShape {
    header: "OrderResponseHeader",
    error_context: "There was an error validating the order parameters",
};

const PARSED_CSR_FIELDS: &[Field] = &[
    Field::leaf(&["State"]),
    Field::leaf(&["Country"]),
    Field::leaf(&["DomainName"]),
    Field::leaf(&["EncryptionAlgorithm"]),
    Field::leaf(&["Locality"]),
    Field::leaf(&["Organization"]),
    Field::leaf(&["Email"]),
    Field::leaf(&["HashAlgorithm"]),
    Field::leaf(&["OrganizationUnit"]),
    Field::leaf(&["IsValidTrueDomainName"]),
    Field::leaf(&["IsValidQuickDomainName"]),
    Field::leaf(&["HasBadExtensions"]),
];

const FIELDS: &[Field] = &[
    Field::leaf(&["ValidityPeriod"]),
    Field::leaf(&["Price"]),
    Field::Section {
        key: "ParsedCSR",
        path: &["ParsedCSR"],
        fields: PARSED_CSR_FIELDS,
    },
    Field::leaf(&["CertificateSignatureHashAlgorithm"]),
];

/// Response to a `ValidateOrderParameters` request.
///
/// Yields the validity period and price the order would get, plus the CA's reading of the CSR
/// under the nested `ParsedCSR` section.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOrderParameters;

impl ValidateOrderParameters {
    pub fn response(&self, xml: &[u8]) -> eyre::Result<OrderResponse> {
        let root = checked_root(xml, &SHAPE)?;
        Ok(extract(&root, FIELDS))
    }
}
