//! Component lines produced by the rule builders.
//!
//! A line is a (component name, quantity) pair. Builders push candidate
//! lines freely, including "not applicable" placeholders with an empty name
//! or a zero quantity, and filter them out before persistence.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Keywords that mark a component as stocked by the metre.
pub const DEFAULT_METER_KEYWORDS: &[&str] = &[
    "Permanent Casing",
    "Hollow Bar",
    "Flat Bar",
    "Pipe",
    "Parallel Flange Channel",
    "Bright Bar",
];

/// CFA augers use a narrower keyword set.
pub const CFA_METER_KEYWORDS: &[&str] = &["Hollow Bar", "Pipe", "Pilot Support"];

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ComponentLine {
    #[validate(length(min = 1, message = "Component name must not be empty"))]
    pub name: String,
    pub qty: f64,
}

impl ComponentLine {
    pub fn new(name: impl Into<String>, qty: f64) -> Self {
        Self {
            name: name.into(),
            qty,
        }
    }

    /// True when the line names a component and carries a non-zero quantity.
    pub fn is_applicable(&self) -> bool {
        !self.name.trim().is_empty() && self.qty != 0.0 && !self.qty.is_nan()
    }
}

/// Ordered list of candidate component lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ComponentList {
    lines: Vec<ComponentLine>,
}

impl ComponentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, qty: f64) {
        self.lines.push(ComponentLine::new(name, qty));
    }

    /// Push a line only when a component was selected; `None` records nothing.
    pub fn push_opt<S: Into<String>>(&mut self, name: Option<S>, qty: f64) {
        if let Some(name) = name {
            self.push(name, qty);
        }
    }

    pub fn push_line(&mut self, line: ComponentLine) {
        self.lines.push(line);
    }

    pub fn append(&mut self, other: ComponentList) {
        self.lines.extend(other.lines);
    }

    /// Drop placeholders: empty names and zero quantities.
    pub fn filtered(self) -> Self {
        Self {
            lines: self
                .lines
                .into_iter()
                .filter(ComponentLine::is_applicable)
                .collect(),
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.lines.iter().all(ComponentLine::is_applicable)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComponentLine> {
        self.lines.iter()
    }

    pub fn lines(&self) -> &[ComponentLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<ComponentLine> {
        self.lines
    }

    /// Quantity of the first line with the given name.
    pub fn qty_of(&self, name: &str) -> Option<f64> {
        self.lines.iter().find(|l| l.name == name).map(|l| l.qty)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lines.iter().any(|l| l.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.name.as_str()).collect()
    }
}

impl From<Vec<ComponentLine>> for ComponentList {
    fn from(lines: Vec<ComponentLine>) -> Self {
        Self { lines }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ComponentList {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            lines: iter
                .into_iter()
                .map(|(name, qty)| ComponentLine::new(name, qty))
                .collect(),
        }
    }
}

impl IntoIterator for ComponentList {
    type Item = ComponentLine;
    type IntoIter = std::vec::IntoIter<ComponentLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a ComponentList {
    type Item = &'a ComponentLine;
    type IntoIter = std::slice::Iter<'a, ComponentLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UnitOfMeasure {
    Unit,
    Meter,
}

impl UnitOfMeasure {
    /// Metre when the component name contains any of the keywords.
    pub fn for_component(name: &str, meter_keywords: &[&str]) -> Self {
        if meter_keywords.iter().any(|k| name.contains(k)) {
            Self::Meter
        } else {
            Self::Unit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Meter => "meter",
        }
    }

    /// Parses a stored unit code; anything other than "meter" is a unit.
    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("meter") {
            Self::Meter
        } else {
            Self::Unit
        }
    }
}

impl std::fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
