//! Field-level validation results.
//!
//! [`FieldErrors`] is the immutable field -> message map returned by every
//! validator in this crate. It is built in one pass from an iterator of
//! violations; when the same field fails more than one rule, the first
//! message wins.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Field name to human-readable message. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message recorded for `field`, if it failed validation.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Combine two result sets. Messages already present in `self` win.
    pub fn merge(self, other: FieldErrors) -> FieldErrors {
        self.0.into_iter().chain(other.0).collect()
    }

    /// `Ok(())` when empty, otherwise the errors themselves.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BTreeMap::new();
        for (field, message) in iter {
            map.entry(field.into()).or_insert_with(|| message.into());
        }
        FieldErrors(map)
    }
}

impl From<&validator::ValidationErrors> for FieldErrors {
    fn from(errors: &validator::ValidationErrors) -> Self {
        errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                let first = errs.first()?;
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                Some((field.to_string(), message))
            })
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}
