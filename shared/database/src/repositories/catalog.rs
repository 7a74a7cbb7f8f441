//! Product Catalog
//!
//! Read-only view of product names used by the rules for availability
//! checks (permanent casings, flights) and flight inner-diameter searches.

use std::collections::BTreeSet;

pub trait ProductCatalog: Send + Sync {
    /// True when a product with exactly this name exists.
    fn exists(&self, name: &str) -> bool;

    /// Names containing `fragment` anywhere, in name order.
    fn names_containing(&self, fragment: &str) -> Vec<String>;
}

/// Catalog held in memory: seeded directly in tests and previews, or loaded
/// from PostgreSQL as a snapshot by `ProductRepository::catalog_snapshot`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    names: BTreeSet<String>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, name: impl Into<String>) -> Self {
        self.insert(name);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for InMemoryCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn exists(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    fn names_containing(&self, fragment: &str) -> Vec<String> {
        self.names
            .iter()
            .filter(|name| name.contains(fragment))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exists_is_exact() {
        let catalog = InMemoryCatalog::new().with_product("Permanent Casing - OD1232 WT16");
        assert!(catalog.exists("Permanent Casing - OD1232 WT16"));
        assert!(!catalog.exists("Permanent Casing - OD1232"));
    }

    #[test]
    fn test_names_containing_is_ordered() {
        let catalog: InMemoryCatalog = [
            "Flight - OD880 ID157 P330 T32 RH ",
            "Drive Head - 130mm Square",
            "Flight - OD880 ID152 P330 T32 RH ",
            "Hardfaced Flight - OD600 ID127 P200 T20 RH ",
        ]
        .into_iter()
        .collect();

        assert_eq!(
            catalog.names_containing("Flight -"),
            vec![
                "Flight - OD880 ID152 P330 T32 RH ".to_string(),
                "Flight - OD880 ID157 P330 T32 RH ".to_string(),
                "Hardfaced Flight - OD600 ID127 P200 T20 RH ".to_string(),
            ]
        );
        assert!(catalog.names_containing("Gusset").is_empty());
    }
}
