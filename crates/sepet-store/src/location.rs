//! Addressable location state.
//!
//! The query string is the only carrier of basket state between page
//! loads: the basket serializes to `id=qty` pairs, and sharing the page
//! address shares the cart. After every mutation the query is rewritten
//! wholesale, so it can never disagree with the live basket.

use std::time::Duration;

use sepet_commerce::basket::Basket;
use sepet_commerce::ids::ProductId;

/// Delay before the one-time rehydration pass, giving the rest of the
/// page time to mount first. Scheduling the delay is the embedder's
/// job; the engine only promises rehydration runs once and only after
/// the startup documents have resolved.
pub const REHYDRATE_DELAY: Duration = Duration::from_millis(987);

/// Read and overwrite access to the page's query state.
///
/// `replace_query` replaces the whole query in place and must not
/// create a history entry; navigation is invisible to the shopper.
pub trait Location {
    /// Current query string, without the leading `?`.
    fn query(&self) -> String;

    /// Overwrite the query string wholesale.
    fn replace_query(&mut self, query: &str);
}

/// In-memory location for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    query: String,
}

impl MemoryLocation {
    /// Create a location holding an initial query string.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl Location for MemoryLocation {
    fn query(&self) -> String {
        self.query.clone()
    }

    fn replace_query(&mut self, query: &str) {
        self.query = query.to_string();
    }
}

/// Encode basket lines as `id=qty` pairs in basket order. An empty
/// basket encodes to an empty string; a quantity of 0 cannot appear
/// because the basket never holds one.
pub fn encode_basket(basket: &Basket) -> String {
    basket
        .items()
        .iter()
        .map(|item| format!("{}={}", item.id, item.quantity))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a query string into candidate `(id, quantity)` pairs.
///
/// Malformed entries and non-positive quantities are dropped here;
/// whether an id is worth anything is the catalog's call, not ours.
pub fn decode_pairs(query: &str) -> Vec<(ProductId, u32)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut pairs = Vec::new();
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or("");
        let value = parts.next().unwrap_or("");
        if key.is_empty() {
            continue;
        }
        // Parsing as u32 rejects negatives and out-of-range values in
        // one step; a truncating cast could smuggle in a 0 quantity.
        let Ok(quantity) = value.parse::<u32>() else {
            continue;
        };
        if quantity == 0 {
            continue;
        }
        pairs.push((ProductId::new(key), quantity));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use sepet_commerce::catalog::{CatalogIndex, Product};
    use sepet_commerce::money::Money;

    #[test]
    fn test_encode_preserves_basket_order() {
        let catalog = CatalogIndex::from_products(vec![
            Product::new("FSTK500", "Fıstık", "fistik", Money::from_lira(450.0)),
            Product::new("BDM250", "Badem", "badem", Money::from_lira(380.0)),
        ]);
        let mut basket = Basket::new();
        basket.add(&catalog, &ProductId::new("FSTK500"), 2).unwrap();
        basket.add(&catalog, &ProductId::new("BDM250"), 1).unwrap();

        assert_eq!(encode_basket(&basket), "FSTK500=2&BDM250=1");
    }

    #[test]
    fn test_empty_basket_encodes_empty() {
        assert_eq!(encode_basket(&Basket::new()), "");
    }

    #[test]
    fn test_decode_pairs() {
        let pairs = decode_pairs("FSTK500=2&BDM250=1");
        assert_eq!(
            pairs,
            vec![
                (ProductId::new("FSTK500"), 2),
                (ProductId::new("BDM250"), 1)
            ]
        );
    }

    #[test]
    fn test_decode_tolerates_leading_question_mark() {
        assert_eq!(decode_pairs("?A=1"), vec![(ProductId::new("A"), 1)]);
    }

    #[test]
    fn test_decode_skips_malformed_entries() {
        assert!(decode_pairs("").is_empty());
        assert!(decode_pairs("A").is_empty());
        assert!(decode_pairs("A=").is_empty());
        assert!(decode_pairs("A=abc").is_empty());
        assert!(decode_pairs("=3").is_empty());
    }

    #[test]
    fn test_decode_rejects_non_positive_quantities() {
        assert!(decode_pairs("A=0").is_empty());
        assert!(decode_pairs("A=-2").is_empty());
        assert_eq!(decode_pairs("A=0&B=3"), vec![(ProductId::new("B"), 3)]);
    }

    #[test]
    fn test_decode_rejects_out_of_range_quantities() {
        // Values past u32 must be dropped whole, never truncated into a
        // different (or zero) quantity.
        assert!(decode_pairs("A=5000000000").is_empty());
        assert!(decode_pairs("A=4294967296").is_empty());
        assert_eq!(
            decode_pairs("A=4294967295"),
            vec![(ProductId::new("A"), u32::MAX)]
        );
    }

    #[test]
    fn test_memory_location_round_trip() {
        let mut location = MemoryLocation::new("A=1");
        assert_eq!(location.query(), "A=1");
        location.replace_query("A=2&B=1");
        assert_eq!(location.query(), "A=2&B=1");
    }
}
