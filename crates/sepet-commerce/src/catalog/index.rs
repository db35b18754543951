//! Read-only product lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ProductId;

/// Shape of the products document: a wrapper object with a `products`
/// array. A document without the array yields an empty catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductsDocument {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Exact-match lookup from product id to product record.
///
/// Built once at startup and read-only afterwards. A missing id is an
/// ordinary `None`, never an error: callers treat whatever operation
/// referenced it as a no-op. An empty index is the degraded mode used
/// when the products document failed to load.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    by_id: HashMap<ProductId, Product>,
}

impl CatalogIndex {
    /// An empty catalog. Every add against it is a no-op.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the index from a product list. A duplicate id keeps the
    /// last record seen, matching a last-write-wins document edit.
    pub fn from_products(products: Vec<Product>) -> Self {
        let by_id = products.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self { by_id }
    }

    /// Build the index from a parsed products document.
    pub fn from_document(document: ProductsDocument) -> Self {
        Self::from_products(document.products)
    }

    /// Look up a product by exact id.
    pub fn lookup(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id)
    }

    /// Check whether an id resolves.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Check if the catalog is empty (degraded mode).
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
