//! Basket totals: subtotal, shipment weight and shipping cost.

use serde::{Deserialize, Serialize};

use crate::basket::{Basket, BasketItem};
use crate::money::Money;

/// Orders at or above this shipment weight ship free.
pub const FREE_SHIPPING_KG: f64 = 15.0;

/// Derived totals for a basket.
///
/// Never stored: recomputed fresh from the basket on every read, so no
/// staleness is possible. The basket is always small, so the O(n)
/// recompute is cheaper than any invalidation scheme would be.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Carrier cost for the aggregate weight.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub grand_total: Money,
    /// Aggregate shipment weight in kilograms.
    pub weight_kg: f64,
}

impl Totals {
    /// Compute totals for the current basket state.
    pub fn of(basket: &Basket) -> Self {
        let subtotal: Money = basket.items().iter().map(BasketItem::line_total).sum();
        let weight_kg: f64 = basket.items().iter().map(BasketItem::weight_kg).sum();
        let shipping = shipping_for_weight(weight_kg);
        Self {
            subtotal,
            shipping,
            grand_total: subtotal + shipping,
            weight_kg,
        }
    }

    /// Check whether the order qualifies for free shipping.
    pub fn free_shipping(&self) -> bool {
        self.weight_kg >= FREE_SHIPPING_KG
    }
}

/// Carrier price for a shipment weight, evaluated in ascending tiers;
/// the first matching tier wins.
pub fn shipping_for_weight(weight_kg: f64) -> Money {
    if weight_kg <= 3.0 {
        Money::from_kurus(14_600)
    } else if weight_kg <= 5.0 {
        Money::from_kurus(16_800)
    } else if weight_kg <= 10.0 {
        Money::from_kurus(9_600)
    } else if weight_kg < FREE_SHIPPING_KG {
        Money::from_kurus(12_350)
    } else {
        Money::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogIndex, Product};
    use crate::ids::ProductId;

    fn lira(amount: f64) -> Money {
        Money::from_lira(amount)
    }

    #[test]
    fn test_shipping_tiers() {
        assert_eq!(shipping_for_weight(2.0), lira(146.0));
        assert_eq!(shipping_for_weight(4.0), lira(168.0));
        assert_eq!(shipping_for_weight(7.0), lira(96.0));
        assert_eq!(shipping_for_weight(12.0), lira(123.5));
        assert_eq!(shipping_for_weight(15.0), Money::zero());
        assert_eq!(shipping_for_weight(20.0), Money::zero());
    }

    #[test]
    fn test_shipping_tier_boundaries() {
        // Thresholds are inclusive on the low side; 15 kg is free.
        assert_eq!(shipping_for_weight(3.0), lira(146.0));
        assert_eq!(shipping_for_weight(5.0), lira(168.0));
        assert_eq!(shipping_for_weight(10.0), lira(96.0));
        assert_eq!(shipping_for_weight(14.999), lira(123.5));
    }

    fn catalog() -> CatalogIndex {
        CatalogIndex::from_products(vec![
            Product::new("FSTK500", "Fıstık Ezmesi", "fistik-ezmesi", lira(450.0)),
            Product::new("BDM250", "Badem Ezmesi", "badem-ezmesi", lira(380.0)),
            Product::new("HEDIYE", "Hediye Paketi", "hediye-paketi", lira(50.0)),
        ])
    }

    #[test]
    fn test_totals_of_basket() {
        let mut basket = Basket::new();
        let catalog = catalog();
        basket.add(&catalog, &ProductId::new("FSTK500"), 2).unwrap();
        basket.add(&catalog, &ProductId::new("BDM250"), 1).unwrap();

        let totals = Totals::of(&basket);
        assert_eq!(totals.subtotal, lira(1280.0));
        // 2 x 500 g + 1 x 250 g = 1.25 kg, first tier.
        assert!((totals.weight_kg - 1.25).abs() < 1e-9);
        assert_eq!(totals.shipping, lira(146.0));
        assert_eq!(totals.grand_total, lira(1426.0));
    }

    #[test]
    fn test_id_without_digits_weighs_nothing() {
        let mut basket = Basket::new();
        basket.add(&catalog(), &ProductId::new("HEDIYE"), 3).unwrap();

        let totals = Totals::of(&basket);
        assert_eq!(totals.weight_kg, 0.0);
        assert_eq!(totals.shipping, lira(146.0));
    }

    #[test]
    fn test_totals_are_idempotent() {
        let mut basket = Basket::new();
        basket.add(&catalog(), &ProductId::new("FSTK500"), 2).unwrap();

        assert_eq!(Totals::of(&basket), Totals::of(&basket));
    }

    #[test]
    fn test_empty_basket_totals() {
        let totals = Totals::of(&Basket::new());
        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.weight_kg, 0.0);
        // An empty basket still falls in the first tier; callers never
        // show shipping for an empty basket.
        assert_eq!(totals.shipping, lira(146.0));
    }

    #[test]
    fn test_heavy_basket_ships_free() {
        let mut basket = Basket::new();
        let catalog = catalog();
        // 30 x 500 g = 15 kg exactly.
        basket.add(&catalog, &ProductId::new("FSTK500"), 30).unwrap();

        let totals = Totals::of(&basket);
        assert!(totals.free_shipping());
        assert_eq!(totals.shipping, Money::zero());
        assert_eq!(totals.grand_total, totals.subtotal);
    }
}
