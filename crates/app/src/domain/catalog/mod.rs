//! Product Catalog
//!
//! The catalog is the external source of truth for product identity, display
//! name and current unit price.

pub mod client;
pub mod errors;
pub mod models;

pub use client::*;
pub use errors::CatalogError;
