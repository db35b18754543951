//! Money type for representing lira amounts.
//!
//! Uses kurus-based integer representation to avoid floating-point
//! precision issues. The storefront sells in a single currency, so there
//! is no currency field; the JSON form is a plain number of lira because
//! that is what the product documents carry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// A monetary amount in kurus (1/100 lira).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Money {
    /// Amount in kurus.
    pub kurus: i64,
}

impl Money {
    /// Create a Money value from kurus.
    pub fn from_kurus(kurus: i64) -> Self {
        Self { kurus }
    }

    /// Create a Money value from a decimal lira amount.
    ///
    /// ```
    /// use sepet_commerce::money::Money;
    /// assert_eq!(Money::from_lira(49.99).kurus, 4999);
    /// ```
    pub fn from_lira(lira: f64) -> Self {
        Self {
            kurus: (lira * 100.0).round() as i64,
        }
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self { kurus: 0 }
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.kurus == 0
    }

    /// Convert to a decimal lira value.
    pub fn to_lira(&self) -> f64 {
        self.kurus as f64 / 100.0
    }

    /// Multiply by a quantity.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::from_kurus(self.kurus * factor)
    }

    /// Format the bare amount the way the storefront displays prices:
    /// `.` thousands grouping, `,` decimal separator, trailing zeros
    /// dropped. `12350` kurus renders as `123,5`.
    pub fn display_amount(&self) -> String {
        let abs = self.kurus.unsigned_abs();
        let lira = abs / 100;
        let rem = abs % 100;

        let digits = lira.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
        if self.kurus < 0 {
            out.push('-');
        }
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(c);
        }
        if rem != 0 {
            if rem % 10 == 0 {
                out.push_str(&format!(",{}", rem / 10));
            } else {
                out.push_str(&format!(",{:02}", rem));
            }
        }
        out
    }

    /// Format with the fixed currency suffix, e.g. `1.234,5 TL`.
    ///
    /// This is a presentation transform only: the kurus amount that fed it
    /// is the same one used in totals and shipping math.
    pub fn display(&self) -> String {
        format!("{} TL", self.display_amount())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_kurus(self.kurus + other.kurus)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::from_kurus(self.kurus - other.kurus)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

// The documents carry prices as plain lira numbers, so Money crosses the
// serde boundary as one.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.kurus % 100 == 0 {
            serializer.serialize_i64(self.kurus / 100)
        } else {
            serializer.serialize_f64(self.to_lira())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let lira = f64::deserialize(deserializer)?;
        Ok(Money::from_lira(lira))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lira() {
        assert_eq!(Money::from_lira(49.99).kurus, 4999);
        assert_eq!(Money::from_lira(450.0).kurus, 45000);
        assert_eq!(Money::from_lira(123.5).kurus, 12350);
    }

    #[test]
    fn test_display_plain() {
        assert_eq!(Money::from_kurus(14600).display(), "146 TL");
        assert_eq!(Money::from_kurus(0).display(), "0 TL");
    }

    #[test]
    fn test_display_drops_trailing_zero() {
        assert_eq!(Money::from_kurus(12350).display(), "123,5 TL");
        assert_eq!(Money::from_kurus(12355).display(), "123,55 TL");
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Money::from_lira(1234.0).display(), "1.234 TL");
        assert_eq!(Money::from_lira(1234567.5).display(), "1.234.567,5 TL");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_kurus(1000);
        let b = Money::from_kurus(500);
        assert_eq!((a + b).kurus, 1500);
        assert_eq!((a - b).kurus, 500);
        assert_eq!((a * 3).kurus, 3000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].map(Money::from_kurus).into_iter().sum();
        assert_eq!(total.kurus, 600);
    }

    #[test]
    fn test_serde_round_trip() {
        let price = Money::from_lira(123.5);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "123.5");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);

        let whole: Money = serde_json::from_str("450").unwrap();
        assert_eq!(whole.kurus, 45000);
    }
}
