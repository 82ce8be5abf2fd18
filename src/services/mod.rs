// Service exports
pub mod catalog;
pub mod tool;

pub use catalog::{CatalogError, CatalogStore, SchemeCatalog, ValidationMode};
pub use tool::FindSchemesTool;
