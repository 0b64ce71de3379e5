//! Order view domain types.

use pointex_shared::types::{
    Currency, LineItemId, Money, MoneyError, OrderId, PointsType, StoreId, UserId,
};
use serde::{Deserialize, Serialize};

/// A purchasable line on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// The line item ID.
    pub id: LineItemId,
    /// Display title of the purchased product.
    pub title: String,
    /// Purchased quantity.
    pub quantity: u32,
    /// Price of a single unit.
    pub unit_price: Money,
    /// Line subtotal (unit price times quantity, pre-discount).
    pub subtotal: Money,
}

/// Read-only view of an order, passed in by the host.
///
/// Line item order is significant: allocation assigns the rounding
/// remainder to the final line, so hosts must pass items in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    /// The order ID.
    pub id: OrderId,
    /// The customer who owns the order.
    pub customer: UserId,
    /// The store the order was placed in.
    pub store: StoreId,
    /// The order currency.
    pub currency: Currency,
    /// The order's line items, in display order.
    pub line_items: Vec<OrderLine>,
}

impl OrderSnapshot {
    /// Sums the line subtotals into the order subtotal.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if any line is priced in a
    /// currency other than the order currency.
    pub fn subtotal(&self) -> Result<Money, MoneyError> {
        let mut total = Money::zero(self.currency);
        for line in &self.line_items {
            total = total.try_add(&line.subtotal)?;
        }
        Ok(total)
    }

    /// Returns true if the order has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

/// A discount the host should attach to one line item.
///
/// The amount is negative (it reduces the payable total), mirroring how
/// commerce systems store promotional adjustments. `source_tag` identifies
/// the redemption that produced the adjustment so stale ones can be
/// removed by tag before recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountAdjustment {
    /// The line item the adjustment applies to.
    pub line_item_id: LineItemId,
    /// The (negative) adjustment amount.
    pub amount: Money,
    /// Customer-visible label, e.g. the promotion display name.
    pub label: String,
    /// Machine tag identifying the producing redemption.
    pub source_tag: String,
}

/// Builds the adjustment source tag for a points type.
#[must_use]
pub fn source_tag(prefix: &str, points_type: &PointsType) -> String {
    format!("{prefix}_{points_type}")
}
