//! # Forgebom Core Domain Models
//!
//! Domain types shared by the BOM rule engine, the persistence adapter and
//! the HTTP service.
//!
//! ## Key Models
//!
//! - **AttributeSet**: the selected attribute values of one product variant
//! - **ComponentLine / ComponentList**: derived (component name, quantity) pairs
//! - **UnitOfMeasure**: unit vs. metre stocking of a component
//! - **ProductFamily**: the manufactured families that carry BOM rules
//! - **BomRecord**: a persisted BOM with lines and routing operations

pub mod attributes;
pub mod bom;
pub mod component;
pub mod family;


pub use attributes::*;
pub use bom::*;
pub use component::*;
pub use family::*;
