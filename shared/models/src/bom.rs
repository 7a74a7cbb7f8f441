//! BOM records written by the persistence adapter.
//!
//! A BOM is created once per product variant: header, ordered lines and the
//! fixed routing operations of its product family. It is never edited in
//! place; regenerating means deleting and creating again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::component::UnitOfMeasure;

/// One routing step executed at a work center.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoutingOperation {
    pub name: String,
    pub work_center_id: u32,
}

impl RoutingOperation {
    pub fn new(name: impl Into<String>, work_center_id: u32) -> Self {
        Self {
            name: name.into(),
            work_center_id,
        }
    }
}

/// A persisted BOM line pointing at a (found or created) component product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct BomLine {
    pub component_id: Uuid,
    #[validate(length(min = 1, max = 255))]
    pub component_name: String,
    pub qty: f64,
    pub uom: UnitOfMeasure,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct BomRecord {
    pub id: Uuid,
    pub product_id: Uuid,
    #[validate(length(min = 1, max = 255, message = "BOM code must be between 1 and 255 characters"))]
    pub code: String,
    pub product_qty: f64,
    #[validate]
    pub lines: Vec<BomLine>,
    pub operations: Vec<RoutingOperation>,
    pub created_at: DateTime<Utc>,
}

impl BomRecord {
    pub fn new(
        product_id: Uuid,
        code: impl Into<String>,
        lines: Vec<BomLine>,
        operations: Vec<RoutingOperation>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            code: code.into(),
            product_qty: 1.0,
            lines,
            operations,
            created_at: Utc::now(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total metres across metre-stocked lines.
    pub fn total_meters(&self) -> f64 {
        self.lines
            .iter()
            .filter(|l| l.uom == UnitOfMeasure::Meter)
            .map(|l| l.qty)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_record_defaults_to_single_unit() {
        let record = BomRecord::new(
            Uuid::new_v4(),
            "Pile Casing Stock (Standard, 1200mm)",
            vec![
                BomLine {
                    component_id: Uuid::new_v4(),
                    component_name: "Permanent Casing - OD1232 WT16".to_string(),
                    qty: 6.0,
                    uom: UnitOfMeasure::Meter,
                },
                BomLine {
                    component_id: Uuid::new_v4(),
                    component_name: "BFZ318TB - Weld on Casing teeth".to_string(),
                    qty: 12.0,
                    uom: UnitOfMeasure::Unit,
                },
            ],
            vec![RoutingOperation::new("Tacking", 1)],
        );
        assert_eq!(record.product_qty, 1.0);
        assert_eq!(record.line_count(), 2);
        assert_eq!(record.total_meters(), 6.0);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_empty_code_fails_validation() {
        let record = BomRecord::new(Uuid::new_v4(), "", vec![], vec![]);
        assert!(record.validate().is_err());
    }
}
