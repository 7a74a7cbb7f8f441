//! Component rules, one module per product family.

pub mod barrel;
pub mod bored_pile;
pub mod cfa;
pub mod core_barrel;
pub mod extension_bar;
pub mod high_tensile;
pub mod pile_casing;
pub mod tremie_pipe;
