//! Property-based tests for allocation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use pointex_shared::types::{Currency, LineItemId, Money};

use super::splitter::AllocationSplitter;
use crate::order::OrderLine;

fn usd(cents: i64) -> Money {
    Money::new(Decimal::new(cents, 2), Currency::Usd)
}

fn line(subtotal_cents: i64) -> OrderLine {
    let subtotal = usd(subtotal_cents);
    OrderLine {
        id: LineItemId::new(),
        title: "Widget".to_string(),
        quantity: 1,
        unit_price: subtotal,
        subtotal,
    }
}

/// Strategy: 1-10 line items with subtotals of 0.00 to 1,000.00 USD,
/// plus an amount bounded by the order subtotal.
fn lines_and_amount() -> impl Strategy<Value = (Vec<OrderLine>, Money)> {
    prop::collection::vec(0i64..100_000, 1..10).prop_flat_map(|subtotals| {
        let total: i64 = subtotals.iter().sum();
        let lines: Vec<OrderLine> = subtotals.iter().map(|c| line(*c)).collect();
        (Just(lines), (0i64..=total).prop_map(usd))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Conservation: the parts always sum to the whole, exactly.
    #[test]
    fn prop_split_conserves_amount((lines, amount) in lines_and_amount()) {
        let result = AllocationSplitter::split(amount, &lines).unwrap();
        let sum: Decimal = result.iter().map(|a| a.amount.amount).sum();
        prop_assert_eq!(
            sum, amount.amount,
            "Sum of allocations must equal the split amount"
        );
    }

    /// Every line item receives exactly one allocation, in line order.
    #[test]
    fn prop_split_covers_every_line((lines, amount) in lines_and_amount()) {
        let result = AllocationSplitter::split(amount, &lines).unwrap();
        prop_assert_eq!(result.len(), lines.len());
        for (allocation, line) in result.iter().zip(lines.iter()) {
            prop_assert_eq!(allocation.line_item_id, line.id);
        }
    }

    /// No share is negative when the amount fits within the subtotal.
    #[test]
    fn prop_split_shares_non_negative((lines, amount) in lines_and_amount()) {
        let result = AllocationSplitter::split(amount, &lines).unwrap();
        for allocation in &result {
            prop_assert!(
                !allocation.amount.is_negative(),
                "Share {} should be non-negative",
                allocation.amount
            );
        }
    }

    /// Splitting is deterministic: identical inputs, identical output.
    #[test]
    fn prop_split_is_deterministic((lines, amount) in lines_and_amount()) {
        let first = AllocationSplitter::split(amount, &lines).unwrap();
        let second = AllocationSplitter::split(amount, &lines).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Every share lands exactly on the currency's minor unit.
    #[test]
    fn prop_split_respects_minor_unit((lines, amount) in lines_and_amount()) {
        let result = AllocationSplitter::split(amount, &lines).unwrap();
        for allocation in &result {
            let scaled = allocation.amount.amount * Decimal::from(100);
            prop_assert_eq!(
                scaled.fract(), Decimal::ZERO,
                "Share {} should have at most 2 decimal places",
                allocation.amount
            );
        }
    }
}
