//! Grant domain types.

use std::collections::BTreeMap;
use std::collections::HashMap;

use pointex_shared::types::{LineItemId, PointsType};
use serde::{Deserialize, Serialize};

use crate::conversion::ConversionRule;

/// What a grant rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantScope {
    /// The rule applies once to the whole order.
    Order,
    /// The rule applies to each line item separately.
    LineItem,
}

/// A rule awarding points for a purchase.
///
/// Fixed rules award a flat count per purchased unit; dynamic rules derive
/// the count from the amount spent through a conversion rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GrantRule {
    /// Award a flat point count per purchased unit.
    Fixed {
        /// The points type to award.
        points_type: PointsType,
        /// What the rule applies to.
        scope: GrantScope,
        /// Points per purchased unit (per order when order-scoped).
        points_per_unit: u64,
    },
    /// Award points proportional to the amount spent.
    Dynamic {
        /// What the rule applies to.
        scope: GrantScope,
        /// The exchange ratio; its points type is the award target.
        rule: ConversionRule,
    },
}

impl GrantRule {
    /// The points type this rule awards.
    #[must_use]
    pub fn points_type(&self) -> &PointsType {
        match self {
            Self::Fixed { points_type, .. } => points_type,
            Self::Dynamic { rule, .. } => &rule.points_type,
        }
    }

    /// What this rule applies to.
    #[must_use]
    pub fn scope(&self) -> GrantScope {
        match self {
            Self::Fixed { scope, .. } | Self::Dynamic { scope, .. } => *scope,
        }
    }
}

/// Points awarded to one points type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantResult {
    /// The points type awarded.
    pub points_type: PointsType,
    /// The awarded point count.
    pub points_granted: u64,
}

/// Per-order grant scratch state, owned by the host.
///
/// Accumulates grants additively per points type, keyed by line item for
/// line-scoped rules plus an order-level bucket. The engine does not
/// deduplicate rules; registering the same rule twice doubles the grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantAccumulator {
    line_grants: HashMap<LineItemId, BTreeMap<PointsType, u64>>,
    order_grants: BTreeMap<PointsType, u64>,
}

impl GrantAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds points for one line item.
    pub fn add_line(&mut self, line_item_id: LineItemId, points_type: PointsType, count: u64) {
        if count == 0 {
            return;
        }
        *self
            .line_grants
            .entry(line_item_id)
            .or_default()
            .entry(points_type)
            .or_insert(0) += count;
    }

    /// Adds points at the order level.
    pub fn add_order(&mut self, points_type: PointsType, count: u64) {
        if count == 0 {
            return;
        }
        *self.order_grants.entry(points_type).or_insert(0) += count;
    }

    /// Grants recorded for one line item, in points type order.
    #[must_use]
    pub fn for_line(&self, line_item_id: LineItemId) -> Vec<GrantResult> {
        self.line_grants
            .get(&line_item_id)
            .map(|grants| {
                grants
                    .iter()
                    .map(|(points_type, count)| GrantResult {
                        points_type: points_type.clone(),
                        points_granted: *count,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Order-level grants, in points type order.
    #[must_use]
    pub fn order_grants(&self) -> Vec<GrantResult> {
        self.order_grants
            .iter()
            .map(|(points_type, count)| GrantResult {
                points_type: points_type.clone(),
                points_granted: *count,
            })
            .collect()
    }

    /// Total grants per points type across lines and the order bucket.
    #[must_use]
    pub fn totals(&self) -> BTreeMap<PointsType, u64> {
        let mut totals = self.order_grants.clone();
        for grants in self.line_grants.values() {
            for (points_type, count) in grants {
                *totals.entry(points_type.clone()).or_insert(0) += count;
            }
        }
        totals
    }

    /// Returns true when nothing has been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_grants.is_empty() && self.order_grants.is_empty()
    }
}
