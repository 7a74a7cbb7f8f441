//! BOM Line Validator
//!
//! Checks a derived component list before it is persisted.

use std::collections::HashSet;

use forgebom_models::ComponentList;

/// Validation severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

/// Single validation issue
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub severity: ValidationSeverity,
    pub line: usize,
    pub component: Option<String>,
    pub message: String,
}

/// Validation result for a component list
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub issues: Vec<ValidationIssue>,
    pub summary: ValidationSummary,
}

/// Summary statistics for validation
#[derive(Debug, Clone, Default)]
pub struct ValidationSummary {
    pub total_lines: usize,
    pub persisted_lines: usize,
    pub dropped_lines: usize,
    pub duplicate_names: usize,
}

/// Line validator
pub struct BomLineValidator {
    /// Report repeated component names
    report_duplicates: bool,
}

impl Default for BomLineValidator {
    fn default() -> Self {
        Self {
            report_duplicates: true,
        }
    }
}

impl BomLineValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicate_reporting(mut self, enabled: bool) -> Self {
        self.report_duplicates = enabled;
        self
    }

    /// Validate derived lines.
    ///
    /// Placeholder lines (blank name or zero quantity) are dropped by the
    /// filter and reported as warnings; negative or non-finite quantities are
    /// errors.
    pub fn validate(&self, lines: &ComponentList) -> ValidationResult {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        let mut dropped_lines = 0;
        let mut duplicate_names = 0;

        for (index, line) in lines.iter().enumerate() {
            let name = line.name.trim();

            if name.is_empty() {
                dropped_lines += 1;
                issues.push(ValidationIssue {
                    severity: ValidationSeverity::Warning,
                    line: index,
                    component: None,
                    message: "Line has no component and will be dropped".to_string(),
                });
                continue;
            }

            if line.qty == 0.0 {
                dropped_lines += 1;
                issues.push(ValidationIssue {
                    severity: ValidationSeverity::Warning,
                    line: index,
                    component: Some(name.to_string()),
                    message: format!("'{}' has zero quantity and will be dropped", name),
                });
                continue;
            }

            if !line.qty.is_finite() || line.qty < 0.0 {
                issues.push(ValidationIssue {
                    severity: ValidationSeverity::Error,
                    line: index,
                    component: Some(name.to_string()),
                    message: format!("'{}' has invalid quantity {}", name, line.qty),
                });
                continue;
            }

            if self.report_duplicates && !seen.insert(name.to_string()) {
                duplicate_names += 1;
                issues.push(ValidationIssue {
                    severity: ValidationSeverity::Info,
                    line: index,
                    component: Some(name.to_string()),
                    message: format!("'{}' appears on more than one line", name),
                });
            }
        }

        let error_count = issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Error)
            .count();
        let warning_count = issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Warning)
            .count();

        ValidationResult {
            is_valid: error_count == 0,
            error_count,
            warning_count,
            issues,
            summary: ValidationSummary {
                total_lines: lines.len(),
                persisted_lines: lines.len() - dropped_lines,
                dropped_lines,
                duplicate_names,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_dropped_with_warnings() {
        let lines: ComponentList = vec![
            ("Drive Head - 130mm Square", 1.0),
            ("", 1.0),
            ("Base Plate - 130mm Head", 0.0),
        ]
        .into_iter()
        .collect();

        let result = BomLineValidator::new().validate(&lines);
        assert!(result.is_valid);
        assert_eq!(result.warning_count, 2);
        assert_eq!(result.summary.dropped_lines, 2);
        assert_eq!(result.summary.persisted_lines, 1);
    }

    #[test]
    fn test_negative_and_nan_quantities_are_errors() {
        let lines: ComponentList = vec![("Flat Bar - 100mm x 10.0mm", -1.2), ("Pipe", f64::NAN)]
            .into_iter()
            .collect();

        let result = BomLineValidator::new().validate(&lines);
        assert!(!result.is_valid);
        assert_eq!(result.error_count, 2);
    }

    #[test]
    fn test_duplicates_are_informational() {
        let lines: ComponentList = vec![("WS20 Teeth", 4.0), ("WS20 Teeth", 4.0)]
            .into_iter()
            .collect();

        let result = BomLineValidator::new().validate(&lines);
        assert!(result.is_valid);
        assert_eq!(result.summary.duplicate_names, 1);
        assert_eq!(result.issues[0].severity, ValidationSeverity::Info);

        let quiet = BomLineValidator::new()
            .with_duplicate_reporting(false)
            .validate(&lines);
        assert!(quiet.issues.is_empty());
    }
}
