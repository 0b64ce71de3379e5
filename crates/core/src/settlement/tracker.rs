//! Per-order settlement state.

use std::collections::HashMap;

use pointex_shared::types::{OrderId, PointsType};
use serde::{Deserialize, Serialize};

use super::types::{GrantPhase, RedemptionPhase};

/// Explicit settlement state keyed by `(order, points type)`.
///
/// The tracker is the authority on whether a ledger movement has already
/// been applied; line item adjustment bookkeeping is never consulted.
/// The host owns one tracker and persists it alongside its orders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettlementTracker {
    redemptions: HashMap<(OrderId, PointsType), RedemptionPhase>,
    grants: HashMap<(OrderId, PointsType), GrantPhase>,
}

impl SettlementTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current redemption phase for an order and points type.
    #[must_use]
    pub fn redemption_phase(&self, order_id: OrderId, points_type: &PointsType) -> RedemptionPhase {
        self.redemptions
            .get(&(order_id, points_type.clone()))
            .copied()
            .unwrap_or_default()
    }

    /// Current grant phase for an order and points type.
    #[must_use]
    pub fn grant_phase(&self, order_id: OrderId, points_type: &PointsType) -> GrantPhase {
        self.grants
            .get(&(order_id, points_type.clone()))
            .copied()
            .unwrap_or_default()
    }

    /// Marks a redemption as recorded and awaiting its debit.
    ///
    /// A settled pair stays settled; recording again is a no-op.
    pub fn mark_redemption_pending(&mut self, order_id: OrderId, points_type: PointsType) {
        let phase = self
            .redemptions
            .entry((order_id, points_type))
            .or_default();
        if *phase != RedemptionPhase::Settled {
            *phase = RedemptionPhase::Pending;
        }
    }

    /// Marks a redemption debit as applied.
    pub fn mark_redemption_settled(&mut self, order_id: OrderId, points_type: PointsType) {
        self.redemptions
            .insert((order_id, points_type), RedemptionPhase::Settled);
    }

    /// Marks grants as recorded and awaiting their credit.
    ///
    /// A granted pair stays granted; recording again is a no-op.
    pub fn mark_grant_pending(&mut self, order_id: OrderId, points_type: PointsType) {
        let phase = self.grants.entry((order_id, points_type)).or_default();
        if *phase != GrantPhase::Granted {
            *phase = GrantPhase::Pending;
        }
    }

    /// Marks a grant credit as applied.
    pub fn mark_grant_granted(&mut self, order_id: OrderId, points_type: PointsType) {
        self.grants
            .insert((order_id, points_type), GrantPhase::Granted);
    }
}
