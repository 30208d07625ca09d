//! # Money Module
//!
//! The `Money` type for rental prices and quotes.
//!
//! ## Stored As A Plain Number
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  pricePerDay is a JSON number, exactly as a browser writes it:         │
//! │                                                                         │
//! │    "pricePerDay": 3500        ──► Money(3500.0)  ──► "pricePerDay":3500 │
//! │    "pricePerDay": 1499.5      ──► Money(1499.5)  ──► "pricePerDay":1499.5│
//! │                                                                         │
//! │  Whole amounts are written back without a trailing ".0", so a stored   │
//! │  collection round-trips byte-for-byte.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::money::Money;
//!
//! let per_day = Money::new(5000);
//! let quote = per_day.for_days(3);
//! assert_eq!(quote.amount(), 15000.0);
//! ```

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Largest integer an `f64` (and a JavaScript number) holds exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in currency units, possibly fractional.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Creates a Money value from an amount in currency units.
    #[inline]
    pub fn new(amount: impl Into<f64>) -> Self {
        Money(amount.into())
    }

    /// Returns the amount in currency units.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Not NaN and not infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Finite and greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.is_finite() && self.0 > 0.0
    }

    /// Total for renting at this daily rate for `days` days.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// // 2025-09-24 ..= 2025-09-26 is three days
    /// assert_eq!(Money::new(5000).for_days(3).amount(), 15000.0);
    /// assert_eq!(Money::new(1499.5).for_days(2).amount(), 2999.0);
    /// ```
    #[inline]
    pub fn for_days(&self, days: i64) -> Self {
        Money(self.0 * days as f64)
    }

    /// Whether the amount has no fractional part and fits an exact integer.
    fn is_whole(&self) -> bool {
        self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Whole amounts serialize as JSON integers, others as JSON floats.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Plain number, no symbol. The CLI adds the configured currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_positive() {
        let money = Money::new(3500);
        assert_eq!(money.amount(), 3500.0);
        assert!(money.is_positive());
        assert!(!Money::zero().is_positive());
        assert!(!Money::new(-1.5).is_positive());
        assert!(!Money::new(f64::INFINITY).is_positive());
        assert!(!Money::new(f64::NAN).is_positive());
    }

    #[test]
    fn test_for_days() {
        assert_eq!(Money::new(2500).for_days(4).amount(), 10000.0);
        assert_eq!(Money::new(2500).for_days(1).amount(), 2500.0);
        assert_eq!(Money::new(1499.5).for_days(3).amount(), 4498.5);
    }

    #[test]
    fn test_whole_amount_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Money::new(4000)).unwrap(), "4000");

        let back: Money = serde_json::from_str("4000").unwrap();
        assert_eq!(back, Money::new(4000));
    }

    #[test]
    fn test_fractional_amount_keeps_its_value() {
        let money: Money = serde_json::from_str("1499.5").unwrap();
        assert_eq!(money.amount(), 1499.5);
        assert_eq!(serde_json::to_string(&money).unwrap(), "1499.5");
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(5000).to_string(), "5000");
        assert_eq!(Money::new(1499.5).to_string(), "1499.5");
    }
}
