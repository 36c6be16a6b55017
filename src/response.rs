//! Response documents decoded into plain field mappings.
//!
//! Every partner API response carries a header (`OrderResponseHeader` or `QueryResponseHeader`)
//! with a `SuccessCode`. Anything other than `0` is a failure and the header's `Errors` block is
//! turned into a [`SymantecError`]. Successful responses are reduced to an [`OrderResponse`] by
//! walking a static table of [`Field`]s.

use std::collections::BTreeMap;

use serde::Serialize;
use xmltree::Element;

use crate::{
    error::{ErrorEntry, SymantecError},
    util::{element_text, find_path, parse_xml},
};

/// Value of one extracted response field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Leaf element text. `None` when the element was present but empty or whitespace only.
    Text(Option<String>),

    /// A nested section, such as `ParsedCSR`.
    Section(OrderResponse),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => text.as_deref(),
            FieldValue::Section(_) => None,
        }
    }

    pub fn as_section(&self) -> Option<&OrderResponse> {
        match self {
            FieldValue::Section(section) => Some(section),
            FieldValue::Text(_) => None,
        }
    }
}

/// Mapping of field name to value decoded from one response document.
///
/// Only fields present in the document appear; a present but empty element maps to
/// `FieldValue::Text(None)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderResponse(BTreeMap<String, FieldValue>);

impl OrderResponse {
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Text of a leaf field. `None` for absent, empty or section fields.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    pub fn section(&self, key: &str) -> Option<&OrderResponse> {
        self.get(key).and_then(FieldValue::as_section)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// One entry of a field extraction table.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Field {
    /// Leaf element at `path`, stored under `key`.
    Text {
        key: &'static str,
        path: &'static [&'static str],
    },

    /// Element at `path` whose children are extracted with `fields`.
    Section {
        key: &'static str,
        path: &'static [&'static str],
        fields: &'static [Field],
    },
}

impl Field {
    /// Leaf field named after its own tag, directly under the extraction root.
    pub(crate) const fn leaf(path: &'static [&'static str]) -> Self {
        Field::Text {
            key: path[path.len() - 1],
            path,
        }
    }
}

/// Per-operation response shape.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResponseShape {
    /// Tag of the header element under the document root.
    pub header: &'static str,

    /// Lead-in of the failure message, e.g. `There was an error modifying the order`.
    pub error_context: &'static str,
}

/// Parses `xml` and checks its header.
///
/// Returns the document root when `SuccessCode` is `0`. Otherwise returns a [`SymantecError`]
/// wrapped in the report.
pub(crate) fn checked_root(xml: &[u8], shape: &ResponseShape) -> eyre::Result<Element> {
    log::trace!("{}", String::from_utf8_lossy(xml));
    let root = parse_xml(xml)?;

    let header = root
        .get_child(shape.header)
        .ok_or_else(|| eyre::eyre!("response <{}> has no <{}>", root.name, shape.header))?;

    let success_code = header
        .get_child("SuccessCode")
        .and_then(element_text)
        .ok_or_else(|| eyre::eyre!("<{}> has no SuccessCode", shape.header))?;

    if success_code.trim() == "0" {
        return Ok(root);
    }

    let err = api_error(header, &success_code, shape);
    log::debug!("API reported failure (SuccessCode {success_code}): {err}");
    Err(err.into())
}

fn api_error(header: &Element, success_code: &str, shape: &ResponseShape) -> SymantecError {
    let mut errors = collect_errors(header);

    // never surface a failure without at least one entry
    if errors.is_empty() {
        errors.push(ErrorEntry::from_iter([("ErrorCode", success_code.trim())]));
    }

    let message = match errors[0].message() {
        Some(message) => format!("{}: '{message}'", shape.error_context),
        None => format!(
            "{}: 'unknown error (SuccessCode {})'",
            shape.error_context,
            success_code.trim()
        ),
    };

    SymantecError::new(message, errors)
}

/// Every `Errors/Error` record in document order.
fn collect_errors(header: &Element) -> Vec<ErrorEntry> {
    let Some(errors) = header.get_child("Errors") else {
        return Vec::new();
    };

    errors
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(|el| el.name == "Error")
        .map(|error| {
            let mut entry = ErrorEntry::default();
            for part in error.children.iter().filter_map(|node| node.as_element()) {
                entry.insert(part.name.as_str(), element_text(part));
            }
            entry
        })
        .collect()
}

/// Extracts `fields` relative to `root`. Absent elements are skipped.
pub(crate) fn extract(root: &Element, fields: &[Field]) -> OrderResponse {
    let mut out = BTreeMap::new();

    for field in fields {
        match *field {
            Field::Text { key, path } => {
                if let Some(el) = find_path(root, path) {
                    out.insert(key.to_owned(), FieldValue::Text(element_text(el)));
                }
            }

            Field::Section { key, path, fields } => {
                if let Some(el) = find_path(root, path) {
                    out.insert(key.to_owned(), FieldValue::Section(extract(el, fields)));
                }
            }
        }
    }

    OrderResponse(out)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const SHAPE: ResponseShape = ResponseShape {
        header: "OrderResponseHeader",
        error_context: "There was an error doing the thing",
    };

    const FIELDS: &[Field] = &[
        Field::leaf(&["Name"]),
        Field::Text {
            key: "Renamed",
            path: &["Deep", "Original"],
        },
        Field::leaf(&["Missing"]),
        Field::Section {
            key: "Deep",
            path: &["Deep"],
            fields: &[Field::leaf(&["Original"]), Field::leaf(&["Empty"])],
        },
    ];

    #[test]
    fn test_extract_table() {
        let root = parse_xml(
            b"<Doc><Name>n</Name><Deep><Original>o</Original><Empty/></Deep></Doc>",
        )
        .unwrap();

        let res = extract(&root, FIELDS);

        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({
                "Name": "n",
                "Renamed": "o",
                "Deep": { "Original": "o", "Empty": null },
            })
        );
        assert!(!res.contains_key("Missing"));
        assert_eq!(res.section("Deep").unwrap().text("Original"), Some("o"));
        assert_eq!(
            res.section("Deep").unwrap().get("Empty"),
            Some(&FieldValue::Text(None))
        );
    }

    #[test]
    fn test_missing_section_is_omitted() {
        let root = parse_xml(b"<Doc><Name>n</Name></Doc>").unwrap();
        let res = extract(&root, FIELDS);
        assert_eq!(res.len(), 1);
        assert!(res.section("Deep").is_none());
    }

    #[test]
    fn test_success_code_zero() {
        let xml = b"<Doc><OrderResponseHeader><SuccessCode>0</SuccessCode></OrderResponseHeader></Doc>";
        let root = checked_root(xml, &SHAPE).unwrap();
        assert_eq!(root.name, "Doc");
    }

    #[test]
    fn test_failure_collects_all_errors() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<Doc>
    <OrderResponseHeader>
        <Errors>
            <Error>
                <ErrorCode>-1</ErrorCode>
                <ErrorMessage>first</ErrorMessage>
            </Error>
            <Error>
                <ErrorField>CSR</ErrorField>
                <ErrorMessage>second</ErrorMessage>
            </Error>
        </Errors>
        <SuccessCode>-1</SuccessCode>
    </OrderResponseHeader>
</Doc>"#;

        let report = checked_root(xml, &SHAPE).unwrap_err();
        let err = report.downcast_ref::<SymantecError>().unwrap();

        assert_eq!(err.message(), "There was an error doing the thing: 'first'");
        assert_eq!(err.errors().len(), 2);
        assert_eq!(
            serde_json::to_value(err.errors()).unwrap(),
            json!([
                { "ErrorCode": "-1", "ErrorMessage": "first" },
                { "ErrorField": "CSR", "ErrorMessage": "second" },
            ])
        );
    }

    #[test]
    fn test_failure_keeps_empty_error_fields() {
        let xml = b"<Doc><OrderResponseHeader><Errors><Error>\
            <ErrorCode>-1</ErrorCode><ErrorField/><ErrorMessage> spaced msg </ErrorMessage>\
            </Error></Errors><SuccessCode>-1</SuccessCode></OrderResponseHeader></Doc>";

        let report = checked_root(xml, &SHAPE).unwrap_err();
        let err = report.downcast_ref::<SymantecError>().unwrap();

        assert_eq!(
            err.message(),
            "There was an error doing the thing: ' spaced msg '"
        );
        assert!(err.errors()[0].contains_key("ErrorField"));
        assert_eq!(err.errors()[0].field(), None);
        assert_eq!(
            serde_json::to_value(err.errors()).unwrap(),
            json!([{ "ErrorCode": "-1", "ErrorField": null, "ErrorMessage": " spaced msg " }])
        );
    }

    #[test]
    fn test_success_code_zero_ignores_errors_block() {
        let xml = b"<Doc><OrderResponseHeader><Errors><Error>\
            <ErrorCode>-1</ErrorCode><ErrorMessage>stale</ErrorMessage>\
            </Error></Errors><SuccessCode>0</SuccessCode></OrderResponseHeader></Doc>";

        let root = checked_root(xml, &SHAPE).unwrap();
        assert_eq!(root.name, "Doc");
    }

    #[test]
    fn test_failure_without_errors_block() {
        let xml = b"<Doc><OrderResponseHeader><SuccessCode>-3</SuccessCode></OrderResponseHeader></Doc>";

        let report = checked_root(xml, &SHAPE).unwrap_err();
        let err = report.downcast_ref::<SymantecError>().unwrap();

        assert_eq!(
            err.message(),
            "There was an error doing the thing: 'unknown error (SuccessCode -3)'"
        );
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].code(), Some("-3"));
    }

    #[test]
    fn test_missing_header_is_not_an_api_error() {
        let report = checked_root(b"<Doc/>", &SHAPE).unwrap_err();
        assert!(report.downcast_ref::<SymantecError>().is_none());

        let xml = b"<Doc><OrderResponseHeader/></Doc>";
        let report = checked_root(xml, &SHAPE).unwrap_err();
        assert!(report.downcast_ref::<SymantecError>().is_none());
    }

    #[test]
    fn test_malformed_document() {
        let report = checked_root(b"<Doc><OrderResponseHeader>", &SHAPE).unwrap_err();
        assert!(report.downcast_ref::<SymantecError>().is_none());
        assert!(report.downcast_ref::<xmltree::ParseError>().is_some());
    }
}
