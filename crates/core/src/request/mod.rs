//! User-facing redemption request validation.
//!
//! Validates a `{points_type, requested_points}` request against the
//! order's offer configuration, ownership, and the customer's balance,
//! then records or cancels the redemption intent.

pub mod error;
pub mod service;
pub mod types;

pub use error::RequestError;
pub use service::RequestHandler;
pub use types::{RedemptionRequest, RequestContext, RequestOutcome};
