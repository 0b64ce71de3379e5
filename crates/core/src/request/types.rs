//! Redemption request domain types.

use pointex_shared::types::{PointsType, UserId};
use serde::{Deserialize, Serialize};

/// A redemption request as received from the front-end.
///
/// The points type arrives as a raw string and is validated by the
/// handler; the host resolves the target order before calling in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionRequest {
    /// The requested points type machine name.
    pub points_type: String,
    /// The point count to redeem; zero cancels the redemption.
    pub requested_points: u64,
}

/// Who is making the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    /// The requesting user.
    pub requester: UserId,
    /// True when the requester may administer promotions and act on any
    /// customer's order.
    pub can_administer: bool,
}

/// The outcome of a successfully handled request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOutcome {
    /// The validated points type.
    pub points_type: PointsType,
    /// The point count now recorded on the order (zero after a cancel).
    pub recorded_points: u64,
    /// Human-readable summary for the front-end.
    pub message: String,
}
