//! Currency conversion and monetary rounding.
//!
//! CRITICAL: Commission amounts are rounded HALF-UP to 2 decimal places.
//! This must match the host platform's monetary rounding convention exactly,
//! otherwise commission reports drift from order reports by a cent.

use rust_decimal::{Decimal, RoundingStrategy};
use vendra_shared::types::CurrencyCode;

use crate::platform::{CurrencyConverter, PlatformError};

/// Decimal places used for commission amounts.
pub const COMMISSION_SCALE: u32 = 2;

/// Rounds a value half-up (midpoint away from zero) to the given precision.
#[must_use]
pub fn round_half_up(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts `amount` into `to` via the external converter.
///
/// When `from` is omitted the shop base currency is assumed, mirroring the
/// conversion collaborator's own default. Same-currency conversion is an
/// identity and never reaches the collaborator.
///
/// # Errors
///
/// Propagates the collaborator's failure verbatim; there is no retry and no
/// fallback rate.
pub fn convert_amount(
    converter: &dyn CurrencyConverter,
    amount: Decimal,
    to: &CurrencyCode,
    from: Option<&CurrencyCode>,
    base: &CurrencyCode,
) -> Result<Decimal, PlatformError> {
    let from = from.unwrap_or(base);
    if from == to {
        return Ok(amount);
    }
    converter.convert(amount, to, from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::memory::FixedRateConverter;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn usd() -> CurrencyCode {
        CurrencyCode::new("USD").unwrap()
    }

    fn eur() -> CurrencyCode {
        CurrencyCode::new("EUR").unwrap()
    }

    #[rstest]
    #[case(dec!(1.995), dec!(2.00))]
    #[case(dec!(1.994), dec!(1.99))]
    #[case(dec!(7.5), dec!(7.50))]
    #[case(dec!(2.005), dec!(2.01))]
    #[case(dec!(-1.995), dec!(-2.00))]
    fn test_round_half_up_two_places(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(round_half_up(input, COMMISSION_SCALE), expected);
    }

    #[test]
    fn test_half_up_differs_from_bankers_at_midpoint() {
        // Banker's rounding would give 2.4 here; half-up must give 2.5.
        assert_eq!(round_half_up(dec!(2.45), 1), dec!(2.5));
    }

    #[test]
    fn test_convert_amount_defaults_from_to_base() {
        let mut converter = FixedRateConverter::new();
        converter.set_rate(usd(), eur(), dec!(0.90));

        let converted =
            convert_amount(&converter, dec!(100.00), &eur(), None, &usd()).unwrap();
        assert_eq!(converted, dec!(90.00));
    }

    #[test]
    fn test_convert_amount_same_currency_skips_collaborator() {
        // Empty converter would fail for any real pair.
        let converter = FixedRateConverter::new();
        let converted =
            convert_amount(&converter, dec!(42.42), &usd(), Some(&usd()), &eur()).unwrap();
        assert_eq!(converted, dec!(42.42));
    }

    #[test]
    fn test_convert_amount_propagates_collaborator_failure() {
        let converter = FixedRateConverter::new();
        let err =
            convert_amount(&converter, dec!(1.00), &eur(), Some(&usd()), &usd()).unwrap_err();
        assert_eq!(err.error_code(), "CONVERSION_FAILED");
    }
}
