//! Redemption application: from recorded intent to line item adjustments.

use pointex_shared::types::{Currency, Money};

use super::calculator::RedemptionCalculator;
use super::error::RedemptionError;
use super::types::{AppliedRedemption, RedemptionIntent, RedemptionIntents};
use crate::conversion::{self, ConversionRule};
use crate::order::{DiscountAdjustment, OrderSnapshot, source_tag};

/// Applies a redemption offer to an order.
///
/// This is the offer-application step the host runs on every order
/// recalculation: resolve the rule into the order currency, compute the
/// capped discount, and emit one negative adjustment per allocated line.
/// The host removes adjustments carrying the same source tag beforehand,
/// so recomputation replaces rather than stacks.
pub struct RedemptionService;

impl RedemptionService {
    /// Computes the redemption for `rule` if an intent is recorded for it.
    ///
    /// Returns `Ok(None)` when the order carries no intent for the rule's
    /// points type. A capped-to-zero redemption returns a zero result with
    /// no adjustments.
    ///
    /// # Errors
    ///
    /// Returns `RedemptionError` when rule resolution or the calculation
    /// fails; the caller must abort the recalculation rather than apply a
    /// partial discount.
    pub fn apply<F>(
        order: &OrderSnapshot,
        intents: &RedemptionIntents,
        rule: &ConversionRule,
        rate_lookup: F,
        points_balance: u64,
        promotion_label: &str,
        source_tag_prefix: &str,
    ) -> Result<Option<AppliedRedemption>, RedemptionError>
    where
        F: Fn(Money, Currency) -> Option<Money>,
    {
        let Some(requested_points) = intents.get(&rule.points_type) else {
            return Ok(None);
        };

        let resolved = conversion::resolve(rule, order.currency, rate_lookup)?;
        let intent = RedemptionIntent {
            points_type: rule.points_type.clone(),
            requested_points,
        };
        let result = RedemptionCalculator::compute(&intent, &resolved, points_balance, order)?;

        let tag = source_tag(source_tag_prefix, &rule.points_type);
        let adjustments = result
            .line_amounts
            .iter()
            .filter(|allocation| !allocation.amount.is_zero())
            .map(|allocation| DiscountAdjustment {
                line_item_id: allocation.line_item_id,
                amount: allocation.amount.negated(),
                label: promotion_label.to_string(),
                source_tag: tag.clone(),
            })
            .collect();

        Ok(Some(AppliedRedemption {
            result,
            adjustments,
        }))
    }
}
