//! Product catalog module.
//!
//! Contains the product record and the read-only session index.

mod index;
mod product;

pub use index::{CatalogIndex, ProductsDocument};
pub use product::Product;
