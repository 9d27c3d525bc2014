//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative price in US dollars.
///
/// ## Examples
///
/// ```
/// use petcare_core::Price;
///
/// let price = Price::from_cents(4599);
/// assert_eq!(price.display(), "$45.99");
/// assert_eq!(Price::from_cents(2000).display(), "$20.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount in dollars.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// The amount in dollars.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display with exactly two decimal places (e.g. `$19.99`).
    #[must_use]
    pub fn display(&self) -> String {
        let mut amount = self.0.round_dp(2);
        amount.rescale(2);
        format!("${amount}")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Price::from_cents(2000).display(), "$20.00");
        assert_eq!(Price::new(Decimal::from(5)).unwrap().display(), "$5.00");
    }

    #[test]
    fn test_display_rounds_extra_precision() {
        let price = Price::new(Decimal::from_str("19.999").unwrap()).unwrap();
        assert_eq!(price.display(), "$20.00");
    }

    #[test]
    fn test_negative_rejected() {
        let result = Price::new(Decimal::from_str("-0.01").unwrap());
        assert!(matches!(result, Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_zero_allowed() {
        assert_eq!(Price::new(Decimal::ZERO).unwrap().display(), "$0.00");
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("\"-4.00\"").is_err());
        let price: Price = serde_json::from_str("\"45.99\"").unwrap();
        assert_eq!(price, Price::from_cents(4599));
    }
}
