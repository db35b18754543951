//! Basket and line item types.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogIndex;
use crate::error::BasketError;
use crate::ids::ProductId;
use crate::money::Money;

/// A line in the basket.
///
/// Name, url and price are snapshotted from the catalog at first add, so
/// a later catalog price change never rewrites a line the shopper
/// already holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasketItem {
    /// Product id of the line.
    pub id: ProductId,
    /// Name at add time.
    pub name: String,
    /// URL slug at add time.
    pub url: String,
    /// Unit price at add time, VAT included.
    pub price: Money,
    /// Quantity, always at least 1. A line that would reach 0 is
    /// removed instead.
    pub quantity: u32,
}

impl BasketItem {
    /// Line subtotal (price times quantity).
    pub fn line_total(&self) -> Money {
        self.price.multiply(i64::from(self.quantity))
    }

    /// Weight contribution in kilograms, from the id's gram proxy.
    pub fn weight_kg(&self) -> f64 {
        let grams = self.id.weight_grams().unwrap_or(0);
        f64::from(grams) / 1000.0 * f64::from(self.quantity)
    }
}

/// Insertion-ordered collection of basket lines.
///
/// At most one line per product id. Order is first-added-first and
/// survives quantity changes; a removed-then-readded product goes to
/// the end. The basket is never durably persisted; the query string is
/// its only carrier between page loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Basket {
    items: Vec<BasketItem>,
}

impl Basket {
    /// Create an empty basket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the basket.
    ///
    /// The id is resolved against the catalog; an unknown id is an
    /// error the caller downgrades to a no-op. If a line for the id
    /// already exists its quantity steps up by exactly one and the
    /// requested quantity is ignored; the quantity argument applies
    /// only to the first insertion. The step saturates at `u32::MAX`,
    /// so a mutation never panics and never wraps a line back to 0.
    pub fn add(
        &mut self,
        catalog: &CatalogIndex,
        id: &ProductId,
        quantity: u32,
    ) -> Result<(), BasketError> {
        let product = catalog
            .lookup(id)
            .ok_or_else(|| BasketError::UnknownProduct(id.to_string()))?;

        if let Some(existing) = self.items.iter_mut().find(|i| &i.id == id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return Ok(());
        }

        if quantity == 0 {
            return Err(BasketError::InvalidQuantity(quantity));
        }

        self.items.push(BasketItem {
            id: product.id.clone(),
            name: product.name.clone(),
            url: product.url.clone(),
            price: product.price,
            quantity,
        });
        Ok(())
    }

    /// Step a line's quantity down by one.
    ///
    /// A quantity-1 line is left untouched, never dropped to zero;
    /// callers that want the line gone pair this with [`Basket::remove`],
    /// as the cart controls do. Unknown ids are a no-op. Returns whether
    /// anything changed.
    pub fn decrease(&mut self, id: &ProductId) -> bool {
        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(item) if item.quantity > 1 => {
                item.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Delete a line entirely, whatever its quantity. Returns whether a
    /// line was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < before
    }

    /// Empty the basket.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total item count (sum of quantities), for the header badge.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Quantity of a product, if it is in the basket. Drives the
    /// add-button versus quantity-stepper swap on catalog views.
    pub fn quantity_of(&self, id: &ProductId) -> Option<u32> {
        self.items.iter().find(|i| &i.id == id).map(|i| i.quantity)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }
}
