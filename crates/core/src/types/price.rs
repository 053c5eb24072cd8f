//! Decimal price as reported by the catalog API.
//!
//! The catalog reports prices as decimal strings without a currency
//! (`"9.99"`, `"0.0"`), occasionally as bare numbers, and often not at all.
//! All prices are displayed in dollars.

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A decimal amount in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Parse a catalog price string.
    ///
    /// Returns `None` for empty or non-numeric input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok()
            .map(Self)
    }

    /// The underlying amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

/// Formats as dollars with two decimal places, e.g. `$12.30`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "${rounded:.2}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Price::parse("9.99").unwrap().amount(), Decimal::new(999, 2));
        assert_eq!(Price::parse(" 5 ").unwrap().amount(), Decimal::new(5, 0));
        assert!(Price::parse("").is_none());
        assert!(Price::parse("   ").is_none());
        assert!(Price::parse("free").is_none());
    }

    #[test]
    fn test_is_positive() {
        assert!(Price::parse("5.00").unwrap().is_positive());
        assert!(!Price::parse("0.0").unwrap().is_positive());
        assert!(!Price::parse("0.00").unwrap().is_positive());
        assert!(!Price::parse("-1").unwrap().is_positive());
    }

    #[test]
    fn test_display_two_places() {
        assert_eq!(Price::parse("9.99").unwrap().to_string(), "$9.99");
        assert_eq!(Price::parse("12.3").unwrap().to_string(), "$12.30");
        assert_eq!(Price::parse("7").unwrap().to_string(), "$7.00");
        assert_eq!(Price::parse("0.0").unwrap().to_string(), "$0.00");
    }

    #[test]
    fn test_display_rounds_half_up() {
        assert_eq!(Price::parse("4.995").unwrap().to_string(), "$5.00");
        assert_eq!(Price::parse("4.994").unwrap().to_string(), "$4.99");
    }
}
