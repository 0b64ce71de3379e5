//! Redemption request handling.

use tracing::info;

use pointex_shared::config::EngineConfig;
use pointex_shared::types::PointsType;

use super::error::RequestError;
use super::types::{RedemptionRequest, RequestContext, RequestOutcome};
use crate::conversion::ConversionRule;
use crate::order::OrderSnapshot;
use crate::points::PointsLedger;
use crate::redemption::RedemptionIntents;

/// Validates redemption requests and records intents on the order.
///
/// Checks run in a fixed order: parameter shape, offer availability,
/// ownership, the configured request limit, then the customer's balance.
/// Only after every check passes is the intent mutated.
pub struct RequestHandler;

impl RequestHandler {
    /// Handles one redemption request against an order.
    ///
    /// A positive `requested_points` records (or overwrites) the intent
    /// for the points type; zero cancels it. The host recomputes the
    /// order's discounts afterwards.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` when validation fails; the intents are left
    /// untouched.
    pub fn apply<L: PointsLedger>(
        request: &RedemptionRequest,
        ctx: &RequestContext,
        order: &OrderSnapshot,
        offer_rule: Option<&ConversionRule>,
        intents: &mut RedemptionIntents,
        config: &EngineConfig,
        ledger: &L,
    ) -> Result<RequestOutcome, RequestError> {
        let points_type = PointsType::new(request.points_type.as_str())
            .map_err(|_| RequestError::InvalidPointsType(request.points_type.clone()))?;

        if !offer_rule.is_some_and(|rule| rule.points_type == points_type) {
            return Err(RequestError::NotPermitted { points_type });
        }

        if ctx.requester != order.customer && !ctx.can_administer {
            return Err(RequestError::AccessDenied);
        }

        if let Some(limit) = config.max_points_per_request {
            if request.requested_points > limit {
                return Err(RequestError::ExceedsRequestLimit {
                    requested: request.requested_points,
                    limit,
                });
            }
        }

        let available = ledger.balance(order.customer, &points_type)?;
        if request.requested_points > available {
            return Err(RequestError::InsufficientPoints {
                points_type,
                requested: request.requested_points,
                available,
            });
        }

        let message = if request.requested_points > 0 {
            intents.set(points_type.clone(), request.requested_points);
            info!(
                order_id = %order.id,
                points_type = %points_type,
                points = request.requested_points,
                "recorded redemption intent"
            );
            format!(
                "{} {} points set to be deducted from the order total.",
                request.requested_points, points_type
            )
        } else {
            intents.clear(&points_type);
            info!(
                order_id = %order.id,
                points_type = %points_type,
                "cancelled redemption intent"
            );
            "Cancelled points deduction from the order total.".to_string()
        };

        Ok(RequestOutcome {
            points_type,
            recorded_points: request.requested_points,
            message,
        })
    }
}
