//! Redemption calculation: points to discount, with safety caps.

use std::cmp::Ordering;

use pointex_shared::types::{Money, MoneyError};
use rust_decimal::prelude::ToPrimitive;

use super::error::RedemptionError;
use super::types::{RedemptionIntent, RedemptionResult};
use crate::allocation::AllocationSplitter;
use crate::conversion::ResolvedConversion;
use crate::order::OrderSnapshot;

/// Stateless calculator turning a redemption intent into a capped result.
///
/// Rounding always favors the merchant: monetary amounts round half-up
/// to the minor unit, point consumption rounds up at the subtotal cap.
pub struct RedemptionCalculator;

impl RedemptionCalculator {
    /// Computes the discount for a redemption intent.
    ///
    /// The discount is capped by the order subtotal (an order total must
    /// never go negative) and by the customer's point balance (the amount
    /// must never imply more points than the customer owns). A result
    /// below one minor unit is treated as no redemption at all.
    ///
    /// # Errors
    ///
    /// Returns `RedemptionError` when the intent and rule disagree on
    /// points type or currency, or when allocation fails.
    pub fn compute(
        intent: &RedemptionIntent,
        resolved: &ResolvedConversion,
        points_balance: u64,
        order: &OrderSnapshot,
    ) -> Result<RedemptionResult, RedemptionError> {
        if intent.points_type != resolved.points_type {
            return Err(RedemptionError::PointsTypeMismatch {
                intent: intent.points_type.clone(),
                rule: resolved.points_type.clone(),
            });
        }
        if resolved.currency() != order.currency {
            return Err(RedemptionError::Money(MoneyError::CurrencyMismatch {
                left: resolved.currency(),
                right: order.currency,
            }));
        }

        let subtotal = order.subtotal().map_err(RedemptionError::Money)?;

        let mut points = intent.requested_points;
        let mut amount =
            Money::new(resolved.amount_for_points(points), order.currency).round_half_up();

        // Cap by subtotal. Consumption rounds up: the capped discount must
        // never cost fewer points than the value it grants.
        if amount.try_cmp(&subtotal)? == Ordering::Greater {
            amount = subtotal;
            points = resolved
                .points_for_amount(subtotal.amount)
                .ceil()
                .to_u64()
                .ok_or(RedemptionError::PointsOutOfRange)?;
        }

        // Cap by balance. The amount is recomputed from the reduced count
        // and re-clamped so the subtotal bound holds unconditionally.
        if points > points_balance {
            points = points_balance;
            amount =
                Money::new(resolved.amount_for_points(points), order.currency).round_half_up();
            amount = amount.try_min(&subtotal)?;
        }

        // Below one minor unit there is nothing to discount; skip entirely
        // rather than creating a degenerate zero-value adjustment.
        if points == 0 || amount.amount < order.currency.one_minor_unit() {
            return Ok(RedemptionResult::zero(
                intent.points_type.clone(),
                order.currency,
            ));
        }

        let line_amounts = AllocationSplitter::split(amount, &order.line_items)?;

        Ok(RedemptionResult {
            points_type: intent.points_type.clone(),
            points_consumed: points,
            discount_amount: amount,
            line_amounts,
        })
    }
}
