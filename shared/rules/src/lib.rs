//! # Forgebom BOM Rules
//!
//! Attribute-driven bill-of-materials rules for the manufactured product
//! families. A product variant's selected attributes go in; an ordered list
//! of component lines and the family's routing operations come out.
//!
//! ## Layout
//!
//! - **common**: part tables shared across families (heads, gussets, pilots, flights)
//! - **families**: one rule module per product family
//! - **dispatch**: family to rule routing and line filtering
//! - **routing**: routing operation templates
//! - **generator**: unit-of-measure resolution and persistence through a `BomStore`

pub mod common;
pub mod context;
pub mod dispatch;
pub mod families;
pub mod generator;
pub mod routing;

pub use context::RuleContext;
pub use dispatch::derive;
pub use generator::{unit_of_measure, BomGenerator, BomPreview, GenerationOutcome, PreviewLine};
pub use routing::operations;
