//! Repository module for catalog and BOM persistence
//!
//! Provides the catalog and store interfaces the rules depend on, with
//! in-memory and PostgreSQL implementations.

pub mod bom;
pub mod catalog;
pub mod product;

pub use bom::{
    BomStore, BomTransaction, InMemoryBomStore, InMemoryBomTransaction, PgBomStore,
    PgBomTransaction,
};
pub use catalog::{InMemoryCatalog, ProductCatalog};
pub use product::ProductRepository;
