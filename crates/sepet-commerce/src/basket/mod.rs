//! Shopping basket module.
//!
//! Contains the basket, its line items, and the derived totals.

mod basket;
mod totals;

pub use basket::{Basket, BasketItem};
pub use totals::{shipping_for_weight, Totals, FREE_SHIPPING_KG};
