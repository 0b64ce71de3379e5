//! Redemption domain types.

use std::collections::BTreeMap;

use pointex_shared::types::{Currency, Money, PointsType};
use serde::{Deserialize, Serialize};

use crate::allocation::LineAllocation;
use crate::order::DiscountAdjustment;

/// A customer's request to redeem points against an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionIntent {
    /// The points type to redeem.
    pub points_type: PointsType,
    /// The requested point count.
    pub requested_points: u64,
}

/// Per-order redemption scratch state, owned by the host.
///
/// Holds at most one intent per points type. Recording an intent for a
/// points type that already has one overwrites it: intents never
/// accumulate across edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionIntents {
    intents: BTreeMap<PointsType, u64>,
}

impl RedemptionIntents {
    /// Creates an empty intent map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or overwrites) the intent for a points type.
    pub fn set(&mut self, points_type: PointsType, requested_points: u64) {
        self.intents.insert(points_type, requested_points);
    }

    /// Removes the intent for a points type.
    pub fn clear(&mut self, points_type: &PointsType) {
        self.intents.remove(points_type);
    }

    /// Returns the requested point count for a points type, if any.
    #[must_use]
    pub fn get(&self, points_type: &PointsType) -> Option<u64> {
        self.intents.get(points_type).copied()
    }

    /// Returns true when no intents are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Iterates intents in points type order.
    pub fn iter(&self) -> impl Iterator<Item = RedemptionIntent> + '_ {
        self.intents
            .iter()
            .map(|(points_type, requested_points)| RedemptionIntent {
                points_type: points_type.clone(),
                requested_points: *requested_points,
            })
    }
}

/// The outcome of one redemption calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionResult {
    /// The points type redeemed.
    pub points_type: PointsType,
    /// Points actually consumed after capping.
    pub points_consumed: u64,
    /// The total discount to apply to the order.
    pub discount_amount: Money,
    /// The discount split across line items; sums to `discount_amount`.
    pub line_amounts: Vec<LineAllocation>,
}

impl RedemptionResult {
    /// A redemption that consumes nothing and discounts nothing.
    #[must_use]
    pub fn zero(points_type: PointsType, currency: Currency) -> Self {
        Self {
            points_type,
            points_consumed: 0,
            discount_amount: Money::zero(currency),
            line_amounts: vec![],
        }
    }

    /// Returns true when the redemption has no monetary effect.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.points_consumed == 0 || self.discount_amount.is_zero()
    }
}

/// A computed redemption together with the adjustments to attach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedRedemption {
    /// The calculation outcome.
    pub result: RedemptionResult,
    /// Negative adjustments for the host to attach to line items.
    pub adjustments: Vec<DiscountAdjustment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gold() -> PointsType {
        PointsType::new("gold").unwrap()
    }

    #[test]
    fn test_intents_overwrite_not_accumulate() {
        let mut intents = RedemptionIntents::new();
        intents.set(gold(), 100);
        intents.set(gold(), 250);
        assert_eq!(intents.get(&gold()), Some(250));
    }

    #[test]
    fn test_intents_clear() {
        let mut intents = RedemptionIntents::new();
        intents.set(gold(), 100);
        intents.clear(&gold());
        assert_eq!(intents.get(&gold()), None);
        assert!(intents.is_empty());
    }

    #[test]
    fn test_intents_iterate_in_type_order() {
        let mut intents = RedemptionIntents::new();
        intents.set(PointsType::new("silver").unwrap(), 5);
        intents.set(gold(), 10);

        let order: Vec<String> = intents.iter().map(|i| i.points_type.to_string()).collect();
        assert_eq!(order, vec!["gold", "silver"]);
    }

    #[test]
    fn test_zero_result() {
        let result = RedemptionResult::zero(gold(), Currency::Usd);
        assert!(result.is_zero());
        assert!(result.line_amounts.is_empty());
        assert!(result.discount_amount.is_zero());
    }
}
