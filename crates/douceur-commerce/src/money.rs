//! Money type for representing dirham amounts.
//!
//! Amounts are stored as integer centimes to avoid the floating-point
//! precision issues that plague monetary calculations. The shop trades in a
//! single currency (MAD), so there is no currency dimension to carry around.

use crate::weight::Weight;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// ISO code of the shop currency.
pub const CURRENCY_CODE: &str = "MAD";

/// A monetary amount in Moroccan dirhams, stored as centimes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money value from centimes.
    pub const fn new(centimes: i64) -> Self {
        Self(centimes)
    }

    /// Create a Money value from a decimal dirham amount, rounding half-up
    /// to the centime.
    ///
    /// ```
    /// use douceur_commerce::money::Money;
    /// let price = Money::from_decimal(129.5);
    /// assert_eq!(price.centimes(), 12950);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    /// Zero dirhams.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Amount in centimes.
    pub const fn centimes(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Convert to a decimal dirham value.
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Format as a display string (e.g., "129.50 MAD").
    pub fn display(&self) -> String {
        format!("{:.2} {}", self.to_decimal(), CURRENCY_CODE)
    }

    /// Try to add, returning `None` on overflow.
    pub fn try_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Try to subtract, returning `None` on overflow.
    pub fn try_subtract(&self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Sum an iterator of Money values, saturating on overflow.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>) -> Money {
        iter.fold(Money::zero(), |acc, m| Money(acc.0.saturating_add(m.0)))
    }

    /// Multiply a per-kilogram price by a weight, rounding half-up to the
    /// centime.
    ///
    /// ```
    /// use douceur_commerce::money::Money;
    /// use douceur_commerce::weight::Weight;
    /// let per_kg = Money::new(10_000); // 100.00 MAD/kg
    /// assert_eq!(per_kg.times_weight(Weight::from_kg(0.3)).centimes(), 3000);
    /// ```
    pub fn times_weight(&self, weight: Weight) -> Money {
        let centimes = (self.0 as i128 * weight.grams() as i128 + 500) / 1000;
        Money(i64::try_from(centimes).unwrap_or(i64::MAX))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_centimes() {
        let m = Money::new(12950);
        assert_eq!(m.centimes(), 12950);
    }

    #[test]
    fn test_money_from_decimal_rounds() {
        assert_eq!(Money::from_decimal(49.99).centimes(), 4999);
        assert_eq!(Money::from_decimal(0.005).centimes(), 1);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(12950);
        assert_eq!(m.display(), "129.50 MAD");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000);
        let b = Money::new(500);
        assert_eq!((a + b).centimes(), 1500);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::new(1000);
        let b = Money::new(300);
        assert_eq!((a - b).centimes(), 700);
    }

    #[test]
    fn test_money_sum() {
        let amounts = [Money::new(100), Money::new(250), Money::new(50)];
        assert_eq!(Money::sum(amounts.iter()).centimes(), 400);
    }

    #[test]
    fn test_times_weight_exact() {
        // 80.00 MAD/kg * 0.5 kg = 40.00 MAD
        let per_kg = Money::new(8000);
        assert_eq!(per_kg.times_weight(Weight::from_kg(0.5)).centimes(), 4000);
    }

    #[test]
    fn test_times_weight_rounds_half_up() {
        // 33.33 MAD/kg * 0.1 kg = 3.333 MAD -> 3.33 MAD
        let per_kg = Money::new(3333);
        assert_eq!(per_kg.times_weight(Weight::from_kg(0.1)).centimes(), 333);
        // 33.35 MAD/kg * 0.1 kg = 3.335 MAD -> 3.34 MAD
        let per_kg = Money::new(3335);
        assert_eq!(per_kg.times_weight(Weight::from_kg(0.1)).centimes(), 334);
    }

    #[test]
    fn test_money_ordering() {
        assert!(Money::new(50_001) > Money::new(50_000));
    }
}
