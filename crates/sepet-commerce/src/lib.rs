//! Storefront domain types and logic for Sepet.
//!
//! This crate holds the pure core of the basket engine:
//!
//! - **Money**: kurus-based amounts with Turkish display formatting
//! - **Catalog**: read-only product lookup built once at startup
//! - **Basket**: line items with add-time price snapshots
//! - **Totals**: subtotal, shipment weight, and tiered shipping cost
//!
//! Nothing here performs I/O or touches the page. The store crate wires
//! these types to the query string, the copy documents, and the
//! WhatsApp checkout link.
//!
//! # Example
//!
//! ```rust
//! use sepet_commerce::prelude::*;
//!
//! let catalog = CatalogIndex::from_products(vec![Product::new(
//!     "FSTK500",
//!     "Fıstık Ezmesi",
//!     "fistik-ezmesi",
//!     Money::from_lira(450.0),
//! )]);
//!
//! let mut basket = Basket::new();
//! basket.add(&catalog, &ProductId::new("FSTK500"), 2).unwrap();
//!
//! let totals = Totals::of(&basket);
//! assert_eq!(totals.subtotal, Money::from_lira(900.0));
//! ```

pub mod basket;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;

pub use basket::{Basket, BasketItem, Totals};
pub use catalog::{CatalogIndex, Product};
pub use error::BasketError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::basket::{shipping_for_weight, Basket, BasketItem, Totals, FREE_SHIPPING_KG};
    pub use crate::catalog::{CatalogIndex, Product, ProductsDocument};
    pub use crate::error::BasketError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;
}
