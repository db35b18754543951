//! Catalog product records.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable product, as supplied by the products document.
///
/// Immutable for the lifetime of a session. Basket lines snapshot the
/// fields they need at add time, so a later change to the stored record
/// never rewrites a line the shopper already has.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalog primary key.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL slug, used for the product page and image paths.
    pub url: String,
    /// Unit price, VAT included.
    pub price: Money,
    /// Short description for listing views.
    #[serde(
        default,
        rename = "shortDesc",
        skip_serializing_if = "Option::is_none"
    )]
    pub short_desc: Option<String>,
}

impl Product {
    /// Create a product record.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        url: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            price,
            short_desc: None,
        }
    }
}
