//! Attribute Extractor
//!
//! Flattens a variant's selected attribute values into an [`AttributeSet`].

use std::collections::HashMap;

use forgebom_models::AttributeSet;

/// Attribute extraction result
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub attributes: AttributeSet,
    pub duplicate_count: usize,
    pub blank_count: usize,
    pub warnings: Vec<String>,
}

/// Builds attribute sets from raw `(attribute, value)` pairs.
pub struct AttributeExtractor {
    /// Keep attributes whose value is blank after trimming
    keep_blank: bool,
}

impl Default for AttributeExtractor {
    fn default() -> Self {
        Self { keep_blank: true }
    }
}

impl AttributeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blank_values(mut self, keep: bool) -> Self {
        self.keep_blank = keep;
        self
    }

    /// Extract attributes. Names and values are trimmed; a repeated
    /// attribute keeps its last value and is reported as a warning.
    pub fn extract<I, K, V>(&self, pairs: I) -> ExtractionResult
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut values: Vec<(String, String)> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut warnings = Vec::new();
        let mut duplicate_count = 0;
        let mut blank_count = 0;

        for (name, value) in pairs {
            let name = name.as_ref().trim();
            let value = value.as_ref().trim();

            if name.is_empty() {
                warnings.push(format!("Ignored value '{}' with no attribute name", value));
                continue;
            }

            if value.is_empty() {
                blank_count += 1;
                if !self.keep_blank {
                    continue;
                }
            }

            match seen.get(name) {
                Some(&index) => {
                    duplicate_count += 1;
                    warnings.push(format!(
                        "Attribute '{}' selected more than once; using '{}' over '{}'",
                        name, value, values[index].1
                    ));
                    values[index].1 = value.to_string();
                }
                None => {
                    seen.insert(name.to_string(), values.len());
                    values.push((name.to_string(), value.to_string()));
                }
            }
        }

        for warning in &warnings {
            tracing::warn!(warning = %warning, "Attribute extraction");
        }

        ExtractionResult {
            attributes: values.into_iter().collect(),
            duplicate_count,
            blank_count,
            warnings,
        }
    }
}
