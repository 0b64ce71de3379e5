//! Weight-proportional amount splitting across line items.

use pointex_shared::types::{LineItemId, Money};
use serde::{Deserialize, Serialize};

use super::error::AllocationError;
use crate::order::OrderLine;

/// One line item's share of a split amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAllocation {
    /// The line item receiving this share.
    pub line_item_id: LineItemId,
    /// The allocated amount.
    pub amount: Money,
}

/// Splits one aggregate amount across line items.
///
/// Each line is weighted by `subtotal / order_subtotal`. Shares are
/// rounded down to the minor unit in line order, and the final line
/// absorbs the remainder, so the parts always sum to the whole exactly.
/// Identical inputs always produce identical output (the order
/// recomputes allocations whenever the customer edits the redemption).
pub struct AllocationSplitter;

impl AllocationSplitter {
    /// Splits `amount` across `line_items` proportionally to their subtotals.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError::EmptyAllocationSet` when `amount` is
    /// positive and there are no line items, `NegativeAmount` for negative
    /// input, and a currency mismatch error when line subtotals are not in
    /// the amount's currency.
    pub fn split(
        amount: Money,
        line_items: &[OrderLine],
    ) -> Result<Vec<LineAllocation>, AllocationError> {
        if amount.is_negative() {
            return Err(AllocationError::NegativeAmount(amount.amount));
        }
        if line_items.is_empty() {
            if amount.is_zero() {
                return Ok(vec![]);
            }
            return Err(AllocationError::EmptyAllocationSet);
        }

        let mut order_subtotal = Money::zero(amount.currency);
        for line in line_items {
            order_subtotal = order_subtotal.try_add(&line.subtotal)?;
        }

        let mut allocations = Vec::with_capacity(line_items.len());
        let mut allocated = Money::zero(amount.currency);

        // Floor every share but the last; the final line takes the remainder.
        let (head, tail) = line_items.split_at(line_items.len() - 1);
        for line in head {
            let share = if order_subtotal.is_zero() {
                Money::zero(amount.currency)
            } else {
                Money::new(
                    amount.amount * line.subtotal.amount / order_subtotal.amount,
                    amount.currency,
                )
                .floor_to_minor()
            };
            allocated = allocated.try_add(&share)?;
            allocations.push(LineAllocation {
                line_item_id: line.id,
                amount: share,
            });
        }

        let last = &tail[0];
        allocations.push(LineAllocation {
            line_item_id: last.id,
            amount: amount.try_sub(&allocated)?,
        });

        Ok(allocations)
    }
}
