//! Weight type for kilogram quantities.
//!
//! Pastries are sold by weight. Quantities are stored as integer grams and
//! constrained to tenths of a kilogram: every conversion from a decimal
//! kilogram value rounds half-up to the nearest 0.1 kg, which is the single
//! rounding rule applied on every cart mutation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A weight in grams, held to 0.1 kg granularity by construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Weight(i64);

impl Weight {
    /// Zero weight.
    pub const ZERO: Weight = Weight(0);

    /// Create a weight from raw grams.
    pub const fn from_grams(grams: i64) -> Self {
        Self(grams)
    }

    /// Create a weight from a decimal kilogram value, rounding half-up to
    /// the nearest tenth of a kilogram.
    ///
    /// ```
    /// use douceur_commerce::weight::Weight;
    /// assert_eq!(Weight::from_kg(0.5).grams(), 500);
    /// assert_eq!(Weight::from_kg(0.25).grams(), 300);
    /// assert_eq!(Weight::from_kg(0.04).grams(), 0);
    /// ```
    pub fn from_kg(kg: f64) -> Self {
        Self(((kg * 10.0).round() as i64).saturating_mul(100))
    }

    /// Weight in grams.
    pub const fn grams(&self) -> i64 {
        self.0
    }

    /// Weight as a decimal kilogram value.
    pub fn to_kg(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Check if this is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Round to the nearest tenth of a kilogram (half-up).
    ///
    /// Weights built through [`Weight::from_kg`] already satisfy this;
    /// raw-gram constructions may not.
    pub fn rounded_to_tenth(&self) -> Weight {
        Weight((self.0 + 50).div_euclid(100) * 100)
    }

    /// Add, saturating on overflow.
    pub fn saturating_add(&self, other: Weight) -> Weight {
        Weight(self.0.saturating_add(other.0))
    }

    /// The smaller of two weights.
    pub fn min(self, other: Weight) -> Weight {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Sum an iterator of weights, saturating on overflow.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Weight>) -> Weight {
        iter.fold(Weight::ZERO, |acc, w| acc.saturating_add(*w))
    }

    /// Format as a display string (e.g., "0.5 kg").
    pub fn display(&self) -> String {
        format!("{:.1} kg", self.to_kg())
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
