//! Property-based tests for currency operations.
//!
//! - Half-up rounding correctness at the commission scale
//! - Determinism of the commission formula
//! - Enabled-currencies base-membership invariant

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;
use vendra_shared::types::CurrencyCode;

use crate::platform::memory::InMemoryPlatformConfig;

use super::conversion::{COMMISSION_SCALE, round_half_up};
use super::registry::{BASE_CURRENCY_KEY, CurrencyRegistry};

/// Strategy to generate positive amounts with 3 decimal places
/// (the interesting precision for 2-decimal rounding).
fn milli_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|millis| Decimal::new(millis, 3))
}

/// Strategy to generate positive rate percentages (0.01% to 100.00%).
fn rate_percent() -> impl Strategy<Value = Decimal> {
    (1i64..10_000i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate syntactically valid currency codes.
fn currency_code() -> impl Strategy<Value = CurrencyCode> {
    "[A-Z]{3}".prop_map(|s| CurrencyCode::new(&s).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Rounded commission values never carry more than 2 decimal places.
    #[test]
    fn prop_round_half_up_two_decimal_places(value in milli_amount()) {
        let rounded = round_half_up(value, COMMISSION_SCALE);
        let scaled = rounded * Decimal::from(100);
        prop_assert_eq!(
            scaled,
            scaled.round(),
            "Result {} should have at most 2 decimal places",
            rounded
        );
    }

    /// Exact .xx5 midpoints round up (away from zero), never to even.
    #[test]
    fn prop_midpoints_round_up(cents in 0i64..1_000_000i64) {
        let midpoint = Decimal::new(cents * 10 + 5, 3);
        let expected = Decimal::new(cents + 1, 2);
        prop_assert_eq!(round_half_up(midpoint, COMMISSION_SCALE), expected);
    }

    /// The commission formula is a pure function of (price, rate).
    #[test]
    fn prop_commission_formula_is_deterministic(
        price in milli_amount(),
        rate in rate_percent(),
    ) {
        let first = round_half_up(price * rate / Decimal::ONE_HUNDRED, COMMISSION_SCALE);
        let second = round_half_up(price * rate / Decimal::ONE_HUNDRED, COMMISSION_SCALE);
        prop_assert_eq!(first, second);
    }

    /// Whatever a registered filter returns, the enabled list still
    /// contains the base currency and holds no duplicates.
    #[test]
    fn prop_enabled_currencies_always_contain_base(
        filtered in prop::collection::vec(currency_code(), 0..8),
    ) {
        let mut platform = InMemoryPlatformConfig::new();
        platform.set(BASE_CURRENCY_KEY, "USD");
        let mut registry = CurrencyRegistry::new(Arc::new(platform));
        let replacement = filtered.clone();
        registry.register_enabled_filter(move |_| replacement.clone());

        let enabled = registry.enabled_currencies().unwrap();
        let base = CurrencyCode::new("USD").unwrap();
        prop_assert!(enabled.contains(&base));
        for (i, code) in enabled.iter().enumerate() {
            prop_assert!(!enabled[i + 1..].contains(code), "duplicate {}", code);
        }
    }
}
