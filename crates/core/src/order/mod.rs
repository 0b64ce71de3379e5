//! Read-only order views and discount adjustments.
//!
//! The engine never owns order state. The host passes in an
//! `OrderSnapshot` and applies the `DiscountAdjustment`s the engine
//! hands back.

pub mod types;

pub use types::{DiscountAdjustment, OrderLine, OrderSnapshot, source_tag};
