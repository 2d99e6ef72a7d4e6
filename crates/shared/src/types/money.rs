//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An ISO 4217 style currency code (e.g. "USD", "EUR").
///
/// The set of currencies a storefront actually supports is supplied by an
/// external collaborator at runtime, so this is an open newtype rather than
/// a closed enum. Construction validates shape only (three ASCII letters,
/// stored uppercase), never membership in any enabled set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a currency code from a string, normalizing to uppercase.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly three ASCII letters.
    pub fn new(code: &str) -> Result<Self, String> {
        let trimmed = code.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(format!("Invalid currency code: {code}"))
        }
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major currency units (e.g. 10.50 = ten and a half).
    pub amount: Decimal,
    /// The currency the amount is denominated in.
    pub currency: CurrencyCode,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_currency_code_normalizes_to_uppercase() {
        assert_eq!(CurrencyCode::new("usd").unwrap().as_str(), "USD");
        assert_eq!(CurrencyCode::new(" eur ").unwrap().as_str(), "EUR");
    }

    #[rstest]
    #[case("")]
    #[case("US")]
    #[case("USDT")]
    #[case("U5D")]
    #[case("US$")]
    fn test_currency_code_rejects_bad_shapes(#[case] input: &str) {
        assert!(CurrencyCode::new(input).is_err());
    }

    #[test]
    fn test_currency_code_from_str() {
        assert_eq!(
            CurrencyCode::from_str("gbp").unwrap(),
            CurrencyCode::new("GBP").unwrap()
        );
        assert!(CurrencyCode::from_str("INVALID").is_err());
    }

    #[test]
    fn test_money_new() {
        let usd = CurrencyCode::new("USD").unwrap();
        let money = Money::new(dec!(100.00), usd.clone());
        assert_eq!(money.amount, dec!(100.00));
        assert_eq!(money.currency, usd);
    }

    #[test]
    fn test_money_display() {
        let money = Money::new(dec!(7.50), CurrencyCode::new("EUR").unwrap());
        assert_eq!(money.to_string(), "7.50 EUR");
    }
}
