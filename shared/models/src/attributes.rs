//! Attribute set for a configured product variant.
//!
//! A variant carries one selected value per attribute name ("Drive Head",
//! "Auger Diameter", "Teeth", ...). Rule builders only ever read from it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable mapping from attribute name to selected value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
    values: BTreeMap<String, String>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used when assembling a variant from raw values.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Selected value, or an empty string when the attribute is absent.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Selected value when present and not blank.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    pub fn has(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// First non-blank value among several attribute names.
    pub fn first_of(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|n| self.value(n))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attribute_reads_as_empty() {
        let attrs = AttributeSet::new().with("Drive Head", "Drive Head - 130mm Square");
        assert_eq!(attrs.get("Drive Head"), "Drive Head - 130mm Square");
        assert_eq!(attrs.get("Teeth"), "");
        assert!(attrs.value("Teeth").is_none());
    }

    #[test]
    fn test_blank_value_is_not_present() {
        let attrs: AttributeSet = [("Pilot", "  "), ("Teeth", "22mm BC86 Teeth")]
            .into_iter()
            .collect();
        assert!(!attrs.has("Pilot"));
        assert_eq!(attrs.first_of(&["Pilot", "Teeth"]), Some("22mm BC86 Teeth"));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let attrs = AttributeSet::new().with("Type", "Dual Rock");
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"{"Type":"Dual Rock"}"#);
    }
}
