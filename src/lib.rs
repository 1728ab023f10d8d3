//! Normalize a Latin-1 salon offer export into a category → subcategory →
//! service catalog document.

pub mod catalog;
pub mod error;
pub mod inspect;
pub mod output;
pub mod settings;
pub mod source;

pub use catalog::{build_catalog, BuildReport, Catalog};
pub use error::CatalogError;
