use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// One `Error` record from a response header's `Errors` block.
///
/// Holds exactly the sub-elements the API sent, keyed by tag name. Usually some subset of
/// `ErrorCode`, `ErrorField` and `ErrorMessage`. A sub-element that was sent empty is kept with a
/// `None` value and serializes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorEntry(BTreeMap<String, Option<String>>);

impl ErrorEntry {
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.0.insert(key.into(), value);
    }

    /// Returns the text of the given sub-element. `None` if it was absent or empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.as_deref())
    }

    /// Whether the sub-element was sent at all, empty or not.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// API error code, e.g. `-2019`.
    pub fn code(&self) -> Option<&str> {
        self.get("ErrorCode")
    }

    /// Name of the request field the error refers to.
    pub fn field(&self) -> Option<&str> {
        self.get("ErrorField")
    }

    /// Human readable error message.
    pub fn message(&self) -> Option<&str> {
        self.get("ErrorMessage")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorEntry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }
}

/// A failure reported by the partner API (`SuccessCode` other than `0`).
///
/// Returned inside an [`eyre::Report`]; use `report.downcast_ref::<SymantecError>()` to inspect
/// the individual [`ErrorEntry`] records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymantecError {
    message: String,
    errors: Vec<ErrorEntry>,
}

impl SymantecError {
    pub(crate) fn new(message: String, errors: Vec<ErrorEntry>) -> Self {
        Self { message, errors }
    }

    /// Human readable message built from the first reported error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// All errors reported by the API, in document order.
    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }
}

impl fmt::Display for SymantecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SymantecError {}
