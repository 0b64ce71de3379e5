//! Property-based tests for redemption calculation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use pointex_shared::types::{Currency, LineItemId, Money, OrderId, PointsType, StoreId, UserId};

use super::calculator::RedemptionCalculator;
use super::types::RedemptionIntent;
use crate::conversion::ResolvedConversion;
use crate::order::{OrderLine, OrderSnapshot};

fn usd(cents: i64) -> Money {
    Money::new(Decimal::new(cents, 2), Currency::Usd)
}

fn gold() -> PointsType {
    PointsType::new("gold").unwrap()
}

fn order_from_cents(subtotals: &[i64]) -> OrderSnapshot {
    OrderSnapshot {
        id: OrderId::new(),
        customer: UserId::new(),
        store: StoreId::new(),
        currency: Currency::Usd,
        line_items: subtotals
            .iter()
            .map(|cents| {
                let subtotal = usd(*cents);
                OrderLine {
                    id: LineItemId::new(),
                    title: "Widget".to_string(),
                    quantity: 1,
                    unit_price: subtotal,
                    subtotal,
                }
            })
            .collect(),
    }
}

/// Strategy: a conversion of 1-1000 points per 0.01-1000.00 USD.
fn resolved_conversion() -> impl Strategy<Value = ResolvedConversion> {
    (1u64..1000, 1i64..100_000).prop_map(|(points, rate_cents)| ResolvedConversion {
        points_type: gold(),
        conversion_amount: points,
        conversion_rate: usd(rate_cents),
    })
}

/// Strategy: 1-6 line items with subtotals of 0.01 to 500.00 USD.
fn line_subtotals() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..50_000, 1..6)
}

fn intent(points: u64) -> RedemptionIntent {
    RedemptionIntent {
        points_type: gold(),
        requested_points: points,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The discount never goes negative and never exceeds the subtotal.
    #[test]
    fn prop_discount_within_bounds(
        resolved in resolved_conversion(),
        subtotals in line_subtotals(),
        requested in 0u64..1_000_000,
        balance in 0u64..1_000_000,
    ) {
        let order = order_from_cents(&subtotals);
        let result =
            RedemptionCalculator::compute(&intent(requested), &resolved, balance, &order).unwrap();

        prop_assert!(!result.discount_amount.is_negative());
        let subtotal = order.subtotal().unwrap();
        prop_assert!(
            result.discount_amount.amount <= subtotal.amount,
            "Discount {} exceeds subtotal {}",
            result.discount_amount,
            subtotal
        );
    }

    /// Consumption never exceeds the requested points, the balance, or the
    /// ceiling value of the subtotal.
    #[test]
    fn prop_consumption_within_caps(
        resolved in resolved_conversion(),
        subtotals in line_subtotals(),
        requested in 0u64..1_000_000,
        balance in 0u64..1_000_000,
    ) {
        let order = order_from_cents(&subtotals);
        let result =
            RedemptionCalculator::compute(&intent(requested), &resolved, balance, &order).unwrap();

        prop_assert!(result.points_consumed <= balance);
        let subtotal = order.subtotal().unwrap();
        let subtotal_worth = resolved.points_for_amount(subtotal.amount).ceil();
        prop_assert!(
            Decimal::from(result.points_consumed) <= subtotal_worth.max(Decimal::from(requested)),
            "Consumed {} beyond both request {} and subtotal worth {}",
            result.points_consumed,
            requested,
            subtotal_worth
        );
    }

    /// Line allocations always sum to the discount exactly.
    #[test]
    fn prop_line_amounts_sum_to_discount(
        resolved in resolved_conversion(),
        subtotals in line_subtotals(),
        requested in 0u64..1_000_000,
        balance in 0u64..1_000_000,
    ) {
        let order = order_from_cents(&subtotals);
        let result =
            RedemptionCalculator::compute(&intent(requested), &resolved, balance, &order).unwrap();

        if !result.is_zero() {
            let sum: Decimal = result.line_amounts.iter().map(|a| a.amount.amount).sum();
            prop_assert_eq!(sum, result.discount_amount.amount);
        }
    }

    /// Computing twice with identical inputs yields identical results.
    #[test]
    fn prop_computation_is_deterministic(
        resolved in resolved_conversion(),
        subtotals in line_subtotals(),
        requested in 0u64..1_000_000,
        balance in 0u64..1_000_000,
    ) {
        let order = order_from_cents(&subtotals);
        let first =
            RedemptionCalculator::compute(&intent(requested), &resolved, balance, &order).unwrap();
        let second =
            RedemptionCalculator::compute(&intent(requested), &resolved, balance, &order).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Requesting more points never shrinks the discount.
    #[test]
    fn prop_discount_monotone_in_request(
        resolved in resolved_conversion(),
        subtotals in line_subtotals(),
        requested in 0u64..500_000,
        extra in 0u64..500_000,
        balance in 0u64..1_000_000,
    ) {
        let order = order_from_cents(&subtotals);
        let smaller =
            RedemptionCalculator::compute(&intent(requested), &resolved, balance, &order).unwrap();
        let larger = RedemptionCalculator::compute(
            &intent(requested + extra),
            &resolved,
            balance,
            &order,
        )
        .unwrap();

        prop_assert!(
            larger.discount_amount.amount >= smaller.discount_amount.amount,
            "Discount shrank from {} to {} when request grew",
            smaller.discount_amount,
            larger.discount_amount
        );
    }
}
