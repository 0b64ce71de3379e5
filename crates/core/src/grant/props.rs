//! Property-based tests for grant calculation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use pointex_shared::types::{Currency, Money, PointsType};

use super::calculator::GrantCalculator;
use crate::conversion::ResolvedConversion;

fn usd(cents: i64) -> Money {
    Money::new(Decimal::new(cents, 2), Currency::Usd)
}

/// Strategy: a conversion of 1-1000 points per 0.01-1000.00 USD.
fn resolved_conversion() -> impl Strategy<Value = ResolvedConversion> {
    (1u64..1000, 1i64..100_000).prop_map(|(points, rate_cents)| ResolvedConversion {
        points_type: PointsType::new("gold").unwrap(),
        conversion_amount: points,
        conversion_rate: usd(rate_cents),
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A dynamic grant never exceeds the exact point value of the amount.
    #[test]
    fn prop_dynamic_never_over_grants(
        resolved in resolved_conversion(),
        amount_cents in 0i64..10_000_000,
    ) {
        let amount = usd(amount_cents);
        let granted = GrantCalculator::dynamic(&resolved, amount).unwrap();
        let exact = resolved.points_for_amount(amount.amount);
        prop_assert!(
            Decimal::from(granted) <= exact,
            "Granted {} exceeds exact value {}",
            granted,
            exact
        );
    }

    /// A dynamic grant is within one point of the exact value (floor).
    #[test]
    fn prop_dynamic_is_floor_of_exact(
        resolved in resolved_conversion(),
        amount_cents in 0i64..10_000_000,
    ) {
        let amount = usd(amount_cents);
        let granted = GrantCalculator::dynamic(&resolved, amount).unwrap();
        let exact = resolved.points_for_amount(amount.amount);
        prop_assert!(Decimal::from(granted) > exact - Decimal::ONE);
    }

    /// Spending more never grants fewer points.
    #[test]
    fn prop_dynamic_monotone_in_amount(
        resolved in resolved_conversion(),
        amount_cents in 0i64..5_000_000,
        extra_cents in 0i64..5_000_000,
    ) {
        let smaller = GrantCalculator::dynamic(&resolved, usd(amount_cents)).unwrap();
        let larger =
            GrantCalculator::dynamic(&resolved, usd(amount_cents + extra_cents)).unwrap();
        prop_assert!(larger >= smaller);
    }

    /// Fixed grants scale exactly with quantity.
    #[test]
    fn prop_fixed_scales_with_quantity(
        points_per_unit in 0u64..10_000,
        quantity in 0u32..1_000,
    ) {
        let granted = GrantCalculator::fixed(points_per_unit, quantity);
        prop_assert_eq!(granted, points_per_unit * u64::from(quantity));
    }
}
