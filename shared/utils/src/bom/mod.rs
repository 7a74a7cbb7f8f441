//! BOM rule helpers
//!
//! Numeric and text primitives shared by the product-family rules:
//! range-bucketed lookups, encoded-string parsing, parity rounding,
//! attribute extraction, line validation and the teeth quantity table.

pub mod extractor;
pub mod parity;
pub mod parser;
pub mod range;
pub mod teeth_table;
pub mod validator;

pub use extractor::{AttributeExtractor, ExtractionResult};
pub use parser::{FlatBarSize, FlightPitch, FlightSpec, PitchDefaults};
pub use range::RangeTable;
pub use teeth_table::TeethTable;
pub use validator::{BomLineValidator, ValidationResult, ValidationSeverity};
