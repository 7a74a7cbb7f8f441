mod bom;

pub use bom::*;
