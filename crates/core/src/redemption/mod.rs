//! Point redemption calculation and discount application.
//!
//! Converts a customer's requested point count into a capped, rounded
//! monetary discount, split across the order's line items.

pub mod calculator;
pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use calculator::RedemptionCalculator;
pub use error::RedemptionError;
pub use service::RedemptionService;
pub use types::{AppliedRedemption, RedemptionIntent, RedemptionIntents, RedemptionResult};
