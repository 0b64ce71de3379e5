//! Settlement orchestration over the external points ledger.

use tracing::{debug, info};

use pointex_shared::types::{OrderId, PointsType};

use super::error::SettlementError;
use super::tracker::SettlementTracker;
use super::types::{GrantPhase, RedemptionPhase, SettledEntry};
use crate::grant::GrantAccumulator;
use crate::order::OrderSnapshot;
use crate::points::PointsLedger;
use crate::redemption::RedemptionResult;

/// Stateless service reconciling recorded redemption and grant intents
/// into ledger movements, exactly once per order lifecycle transition.
pub struct SettlementService;

impl SettlementService {
    /// Records recomputed redemption results as awaiting settlement.
    ///
    /// Called by the host after every recalculation; results replace
    /// whatever was recorded before. Already-settled pairs are untouched.
    pub fn record_redemptions(
        order: &OrderSnapshot,
        results: &[RedemptionResult],
        tracker: &mut SettlementTracker,
    ) {
        for result in results {
            if result.points_consumed > 0 {
                tracker.mark_redemption_pending(order.id, result.points_type.clone());
            }
        }
    }

    /// Records accumulated grants as awaiting their credit.
    pub fn record_grants(
        order: &OrderSnapshot,
        accumulator: &GrantAccumulator,
        tracker: &mut SettlementTracker,
    ) {
        for (points_type, count) in accumulator.totals() {
            if count > 0 {
                tracker.mark_grant_pending(order.id, points_type);
            }
        }
    }

    /// Order-placed lifecycle hook: debits every non-zero redemption.
    ///
    /// Each `(order, points type)` is debited exactly once; a duplicate
    /// signal finds the pair settled and skips it. On a ledger failure the
    /// pair stays pending and the whole transition fails, so the host can
    /// retry without double-debiting the pairs that already settled.
    ///
    /// # Errors
    ///
    /// Returns `SettlementError` when a debit is rejected or the ledger is
    /// unavailable.
    pub fn on_order_placed<L: PointsLedger>(
        order: &OrderSnapshot,
        results: &[RedemptionResult],
        ledger: &mut L,
        tracker: &mut SettlementTracker,
    ) -> Result<Vec<SettledEntry>, SettlementError> {
        let mut settled = Vec::new();

        for result in results {
            if result.points_consumed == 0 {
                continue;
            }

            match tracker.redemption_phase(order.id, &result.points_type) {
                RedemptionPhase::Settled => {
                    debug!(
                        order_id = %order.id,
                        points_type = %result.points_type,
                        "duplicate order-placed signal, redemption already settled"
                    );
                }
                RedemptionPhase::None | RedemptionPhase::Pending => {
                    tracker.mark_redemption_pending(order.id, result.points_type.clone());
                    let audit = debit_audit(result.points_consumed, order.id);
                    ledger.debit(
                        order.customer,
                        &result.points_type,
                        result.points_consumed,
                        &audit,
                    )?;
                    tracker.mark_redemption_settled(order.id, result.points_type.clone());
                    info!(
                        order_id = %order.id,
                        points_type = %result.points_type,
                        points = result.points_consumed,
                        "debited points for placed order"
                    );
                    settled.push(SettledEntry {
                        points_type: result.points_type.clone(),
                        points: result.points_consumed,
                    });
                }
            }
        }

        Ok(settled)
    }

    /// Order-paid lifecycle hook: credits every non-zero grant.
    ///
    /// Grants are credited once per `(order, points type)`, aggregated
    /// across line items and the order bucket so a retried transition can
    /// never duplicate a partial credit.
    ///
    /// # Errors
    ///
    /// Returns `SettlementError` when the ledger is unavailable.
    pub fn on_order_paid<L: PointsLedger>(
        order: &OrderSnapshot,
        accumulator: &GrantAccumulator,
        ledger: &mut L,
        tracker: &mut SettlementTracker,
    ) -> Result<Vec<SettledEntry>, SettlementError> {
        let mut settled = Vec::new();

        for (points_type, count) in accumulator.totals() {
            if count == 0 {
                continue;
            }

            match tracker.grant_phase(order.id, &points_type) {
                GrantPhase::Granted => {
                    debug!(
                        order_id = %order.id,
                        points_type = %points_type,
                        "duplicate order-paid signal, grant already credited"
                    );
                }
                GrantPhase::None | GrantPhase::Pending => {
                    tracker.mark_grant_pending(order.id, points_type.clone());
                    let audit = credit_audit(
                        count,
                        single_contributing_item(order, accumulator, &points_type),
                        order.id,
                    );
                    ledger.credit(order.customer, &points_type, count, &audit)?;
                    tracker.mark_grant_granted(order.id, points_type.clone());
                    info!(
                        order_id = %order.id,
                        points_type = %points_type,
                        points = count,
                        "credited points for paid order"
                    );
                    settled.push(SettledEntry {
                        points_type,
                        points: count,
                    });
                }
            }
        }

        Ok(settled)
    }
}

/// Audit message for a redemption debit.
fn debit_audit(count: u64, order_id: OrderId) -> String {
    if count == 1 {
        format!("1 point exchanged in order {order_id}.")
    } else {
        format!("{count} points exchanged in order {order_id}.")
    }
}

/// Audit message for a grant credit.
fn credit_audit(count: u64, item_title: Option<&str>, order_id: OrderId) -> String {
    match (count, item_title) {
        (1, Some(item)) => format!("1 point granted on purchase of {item} in order {order_id}."),
        (_, Some(item)) => {
            format!("{count} points granted on purchase of {item} in order {order_id}.")
        }
        (1, None) => format!("1 point granted in order {order_id}."),
        (_, None) => format!("{count} points granted in order {order_id}."),
    }
}

/// The single line item a points type's grants came from, if there is
/// exactly one and no order-level grant contributed.
fn single_contributing_item<'a>(
    order: &'a OrderSnapshot,
    accumulator: &GrantAccumulator,
    points_type: &PointsType,
) -> Option<&'a str> {
    if accumulator
        .order_grants()
        .iter()
        .any(|g| &g.points_type == points_type)
    {
        return None;
    }

    let mut contributing = order.line_items.iter().filter(|line| {
        accumulator
            .for_line(line.id)
            .iter()
            .any(|g| &g.points_type == points_type)
    });

    let first = contributing.next()?;
    if contributing.next().is_some() {
        return None;
    }
    Some(&first.title)
}
