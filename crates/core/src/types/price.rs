//! Currency-agnostic price using decimal arithmetic.
//!
//! Prices arrive from the backend as plain JSON numbers (`45`, `89.5`) and
//! are summed for the cart total. `Decimal` keeps `0.1 + 0.2` exact, so the
//! cart total never drifts from the sum of its lines.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product price in the store's single display unit.
///
/// Displayed as-is on product cards (`45`, `89.5`) and with two decimal
/// places in cart totals (`134.00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero, used when a product carries no price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from whole units.
    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format with exactly two decimal places (e.g., `"134.00"`).
    #[must_use]
    pub fn fixed(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_pads_whole_units() {
        assert_eq!(Price::from_units(134).fixed(), "134.00");
        assert_eq!(Price::ZERO.fixed(), "0.00");
    }

    #[test]
    fn test_display_is_unpadded() {
        assert_eq!(Price::from_units(45).to_string(), "45");
        let price: Price = serde_json::from_str("89.50").unwrap();
        assert_eq!(price.to_string(), "89.5");
    }

    #[test]
    fn test_deserialize_from_json_numbers() {
        let whole: Price = serde_json::from_str("45").unwrap();
        assert_eq!(whole, Price::from_units(45));

        let fractional: Price = serde_json::from_str("0.1").unwrap();
        let other: Price = serde_json::from_str("0.2").unwrap();
        assert_eq!((fractional + other).fixed(), "0.30");
    }

    #[test]
    fn test_sum() {
        let prices = [Price::from_units(45), Price::from_units(89)];
        let total: Price = prices.iter().sum();
        assert_eq!(total, Price::from_units(134));
    }
}
