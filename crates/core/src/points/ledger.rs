//! The points ledger trait the engine settles against.

use pointex_shared::AppError;
use pointex_shared::types::{PointsType, UserId};
use thiserror::Error;

/// Errors from the external points ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointsLedgerError {
    /// A conditional debit was rejected because the balance would go negative.
    ///
    /// Balances are shared across orders, so a concurrent redemption can
    /// consume points between the balance read and the debit. The ledger's
    /// conditional debit is the authority; the engine treats a rejection as
    /// fatal and the caller re-prompts with a fresh cap.
    #[error("Insufficient balance: tried to debit {requested} {points_type} points, {available} available")]
    InsufficientBalance {
        /// The points type debited.
        points_type: PointsType,
        /// The requested debit count.
        requested: u64,
        /// The balance the ledger reported.
        available: u64,
    },

    /// The ledger service could not be reached or failed transiently.
    #[error("Points ledger unavailable: {0}")]
    Unavailable(String),
}

impl From<PointsLedgerError> for AppError {
    fn from(err: PointsLedgerError) -> Self {
        match err {
            PointsLedgerError::InsufficientBalance { .. } => Self::BusinessRule(err.to_string()),
            PointsLedgerError::Unavailable(_) => Self::ExternalService(err.to_string()),
        }
    }
}

/// The external points ledger the engine reads balances from and settles
/// against. Calls are synchronous; timeout and retry policy belong to the
/// implementation.
pub trait PointsLedger {
    /// Current balance for a user and points type.
    ///
    /// # Errors
    ///
    /// Returns `PointsLedgerError::Unavailable` when the ledger cannot be
    /// reached.
    fn balance(&self, user: UserId, points_type: &PointsType) -> Result<u64, PointsLedgerError>;

    /// Atomically debits `count` points, failing if the resulting balance
    /// would be negative.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientBalance` when the conditional debit is
    /// rejected, or `Unavailable` on transport failure. Either way the
    /// ledger must not have been mutated.
    fn debit(
        &mut self,
        user: UserId,
        points_type: &PointsType,
        count: u64,
        audit_message: &str,
    ) -> Result<(), PointsLedgerError>;

    /// Credits `count` points.
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` on transport failure.
    fn credit(
        &mut self,
        user: UserId,
        points_type: &PointsType,
        count: u64,
        audit_message: &str,
    ) -> Result<(), PointsLedgerError>;
}
