//! Grant rule application over an order.

use pointex_shared::types::{Currency, Money};

use super::calculator::GrantCalculator;
use super::error::GrantError;
use super::types::{GrantAccumulator, GrantRule, GrantScope};
use crate::conversion;
use crate::order::OrderSnapshot;

/// Dispatches grant rules over an order into an accumulator.
pub struct GrantService;

impl GrantService {
    /// Applies every rule to the order, accumulating grants additively.
    ///
    /// Line-scoped rules award per line item (fixed rules multiply by the
    /// purchased quantity, dynamic rules read the line subtotal);
    /// order-scoped rules award once from the order subtotal. The caller
    /// passes a fresh accumulator on recalculation - grants are recomputed,
    /// never stacked across edits.
    ///
    /// # Errors
    ///
    /// Returns `GrantError` when a dynamic rule cannot be resolved into
    /// the order currency; no partial grants are recorded for that rule.
    pub fn apply<F>(
        rules: &[GrantRule],
        order: &OrderSnapshot,
        rate_lookup: F,
        accumulator: &mut GrantAccumulator,
    ) -> Result<(), GrantError>
    where
        F: Fn(Money, Currency) -> Option<Money>,
    {
        for rule in rules {
            match rule {
                GrantRule::Fixed {
                    points_type,
                    scope: GrantScope::Order,
                    points_per_unit,
                } => {
                    accumulator.add_order(points_type.clone(), *points_per_unit);
                }
                GrantRule::Fixed {
                    points_type,
                    scope: GrantScope::LineItem,
                    points_per_unit,
                } => {
                    for line in &order.line_items {
                        accumulator.add_line(
                            line.id,
                            points_type.clone(),
                            GrantCalculator::fixed(*points_per_unit, line.quantity),
                        );
                    }
                }
                GrantRule::Dynamic { scope, rule } => {
                    let resolved = conversion::resolve(rule, order.currency, &rate_lookup)?;
                    match scope {
                        GrantScope::Order => {
                            let subtotal = order.subtotal().map_err(GrantError::Money)?;
                            let count = GrantCalculator::dynamic(&resolved, subtotal)?;
                            accumulator.add_order(rule.points_type.clone(), count);
                        }
                        GrantScope::LineItem => {
                            for line in &order.line_items {
                                let count =
                                    GrantCalculator::dynamic(&resolved, line.subtotal)?;
                                accumulator.add_line(line.id, rule.points_type.clone(), count);
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
