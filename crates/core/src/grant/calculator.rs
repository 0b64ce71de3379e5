//! Grant calculation primitives.

use pointex_shared::types::{Money, MoneyError};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::error::GrantError;
use crate::conversion::ResolvedConversion;

/// Pure grant calculations. Both forms round toward zero: a purchase
/// never awards more points than the amount spent is worth.
pub struct GrantCalculator;

impl GrantCalculator {
    /// Points for a fixed rule: `points_per_unit` for each purchased unit.
    #[must_use]
    pub fn fixed(points_per_unit: u64, quantity: u32) -> u64 {
        points_per_unit.saturating_mul(u64::from(quantity))
    }

    /// Points for a dynamic rule: the floor value of the amount spent.
    ///
    /// # Errors
    ///
    /// Returns `GrantError` on a currency mismatch or when the count does
    /// not fit into the point range.
    pub fn dynamic(resolved: &ResolvedConversion, amount: Money) -> Result<u64, GrantError> {
        if amount.currency != resolved.currency() {
            return Err(GrantError::Money(MoneyError::CurrencyMismatch {
                left: amount.currency,
                right: resolved.currency(),
            }));
        }
        if !amount.is_positive() {
            return Ok(0);
        }

        let points = resolved.points_for_amount(amount.amount).floor();
        if points < Decimal::ZERO {
            return Ok(0);
        }
        points.to_u64().ok_or(GrantError::PointsOutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointex_shared::types::{Currency, PointsType};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::Usd)
    }

    /// 10 points per $1.00 spent.
    fn ten_per_dollar() -> ResolvedConversion {
        ResolvedConversion {
            points_type: PointsType::new("gold").unwrap(),
            conversion_amount: 10,
            conversion_rate: usd(dec!(1.00)),
        }
    }

    #[rstest]
    #[case(5, 3, 15)]
    #[case(5, 0, 0)]
    #[case(0, 100, 0)]
    #[case(1, 1, 1)]
    fn test_fixed_multiplies_by_quantity(
        #[case] points_per_unit: u64,
        #[case] quantity: u32,
        #[case] expected: u64,
    ) {
        assert_eq!(GrantCalculator::fixed(points_per_unit, quantity), expected);
    }

    #[test]
    fn test_dynamic_floors_fractional_points() {
        // $2.39 at 10/$ = 23.9 points -> 23, never 24.
        let granted = GrantCalculator::dynamic(&ten_per_dollar(), usd(dec!(2.39))).unwrap();
        assert_eq!(granted, 23);
    }

    #[test]
    fn test_dynamic_exact_amount() {
        let granted = GrantCalculator::dynamic(&ten_per_dollar(), usd(dec!(50.00))).unwrap();
        assert_eq!(granted, 500);
    }

    #[test]
    fn test_dynamic_zero_and_negative_amounts_grant_nothing() {
        assert_eq!(
            GrantCalculator::dynamic(&ten_per_dollar(), usd(dec!(0))).unwrap(),
            0
        );
        assert_eq!(
            GrantCalculator::dynamic(&ten_per_dollar(), usd(dec!(-5.00))).unwrap(),
            0
        );
    }

    #[test]
    fn test_dynamic_sub_point_amount_grants_nothing() {
        // $0.09 at 10/$ = 0.9 points -> 0.
        let granted = GrantCalculator::dynamic(&ten_per_dollar(), usd(dec!(0.09))).unwrap();
        assert_eq!(granted, 0);
    }

    #[test]
    fn test_dynamic_currency_mismatch() {
        let result =
            GrantCalculator::dynamic(&ten_per_dollar(), Money::new(dec!(10), Currency::Eur));
        assert!(matches!(result, Err(GrantError::Money(_))));
    }
}
