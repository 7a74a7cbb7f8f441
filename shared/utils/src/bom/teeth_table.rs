//! Teeth quantity table
//!
//! Core barrel teeth counts come from a CSV keyed by diameter, one column
//! per teeth option:
//!
//! ```text
//! Diameter,22mm_teeth,22mm_extra_teeth,25mm_teeth,25mm_extra_teeth,38_30_teeth
//! 600,8,12,8,10,6
//! ```

use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::parser::first_integer;
use crate::error::{ForgeError, ForgeResult};

pub const TEETH_COLUMNS: [&str; 5] = [
    "22mm_teeth",
    "22mm_extra_teeth",
    "25mm_teeth",
    "25mm_extra_teeth",
    "38_30_teeth",
];

#[derive(Debug, Deserialize)]
struct TeethRow {
    #[serde(rename = "Diameter")]
    diameter: i64,
    #[serde(rename = "22mm_teeth")]
    teeth_22mm: i64,
    #[serde(rename = "22mm_extra_teeth")]
    extra_teeth_22mm: i64,
    #[serde(rename = "25mm_teeth")]
    teeth_25mm: i64,
    #[serde(rename = "25mm_extra_teeth")]
    extra_teeth_25mm: i64,
    #[serde(rename = "38_30_teeth")]
    teeth_38_30mm: i64,
}

impl TeethRow {
    fn into_columns(self) -> (i64, HashMap<String, i64>) {
        let values = [
            self.teeth_22mm,
            self.extra_teeth_22mm,
            self.teeth_25mm,
            self.extra_teeth_25mm,
            self.teeth_38_30mm,
        ];
        let columns = TEETH_COLUMNS
            .iter()
            .zip(values)
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        (self.diameter, columns)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeethTable {
    rows: BTreeMap<i64, HashMap<String, i64>>,
}

impl TeethTable {
    pub fn from_reader<R: Read>(reader: R) -> ForgeResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut rows = BTreeMap::new();

        for record in csv_reader.deserialize::<TeethRow>() {
            let (diameter, columns) = record?.into_columns();
            rows.insert(diameter, columns);
        }

        if rows.is_empty() {
            return Err(ForgeError::configuration("Teeth table has no rows"));
        }

        tracing::debug!(rows = rows.len(), "Loaded teeth table");
        Ok(Self { rows })
    }

    pub fn from_path(path: impl AsRef<Path>) -> ForgeResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            ForgeError::configuration(format!(
                "Cannot open teeth table {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_reader(file)
    }

    /// Teeth count for a diameter and a normalized column key.
    ///
    /// Uses the exact row when present, otherwise the largest diameter below
    /// the key, otherwise the smallest row. Unknown columns read as zero.
    pub fn lookup(&self, diameter: i64, column: &str) -> i64 {
        let row = self
            .rows
            .get(&diameter)
            .or_else(|| self.rows.range(..=diameter).next_back().map(|(_, row)| row))
            .or_else(|| self.rows.values().next());

        row.and_then(|columns| columns.get(column).copied())
            .unwrap_or(0)
    }

    /// Looks up a raw "Teeth" attribute against a raw "Diameter" attribute.
    pub fn teeth_for(&self, diameter: &str, teeth: &str) -> i64 {
        match first_integer(diameter) {
            Some(dia) => self.lookup(dia, &normalize_key(teeth)),
            None => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// "38/30 Teeth" -> "38_30_teeth"
pub fn normalize_key(attribute: &str) -> String {
    attribute
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace([' ', '/'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Diameter,22mm_teeth,22mm_extra_teeth,25mm_teeth,25mm_extra_teeth,38_30_teeth
600,8,12,8,10,6
900,10,14,10,12,8
1200,12,18,12,16,10
";

    fn table() -> TeethTable {
        TeethTable::from_reader(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("38/30 Teeth"), "38_30_teeth");
        assert_eq!(normalize_key("  22mm   Extra Teeth "), "22mm_extra_teeth");
    }

    #[test]
    fn test_exact_and_floor_lookup() {
        let table = table();
        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup(900, "22mm_teeth"), 10);
        assert_eq!(table.lookup(1000, "22mm_extra_teeth"), 14);
        assert_eq!(table.lookup(3000, "38_30_teeth"), 10);
    }

    #[test]
    fn test_shipped_table_parses() {
        let shipped = include_str!("../../../../data/core_barrel_teeth_qty.csv");
        let table = TeethTable::from_reader(shipped.as_bytes()).unwrap();
        assert!(!table.is_empty());
        assert_eq!(table.teeth_for("600mm", "22mm Teeth"), 10);
    }

    #[test]
    fn test_below_smallest_uses_first_row() {
        assert_eq!(table().lookup(450, "25mm_teeth"), 8);
    }

    #[test]
    fn test_unknown_column_reads_zero() {
        assert_eq!(table().teeth_for("900mm", "CJ2 Teeth"), 0);
        assert_eq!(table().teeth_for("900mm", "25mm Extra Teeth"), 12);
        assert_eq!(table().teeth_for("", "25mm Teeth"), 0);
    }

    #[test]
    fn test_malformed_table_is_rejected() {
        let err = TeethTable::from_reader("Diameter,22mm_teeth\nabc,1\n".as_bytes()).unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        assert!(TeethTable::from_reader(SAMPLE.lines().next().unwrap().as_bytes()).is_err());
    }
}
