//! Settlement error types.

use pointex_shared::AppError;
use thiserror::Error;

use crate::points::PointsLedgerError;

/// Errors that can occur during ledger settlement.
///
/// A failed settlement leaves the affected `(order, points type)` state
/// pending, so the host can retry the lifecycle transition without
/// duplicating ledger movements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    /// The external ledger call failed.
    #[error(transparent)]
    Ledger(#[from] PointsLedgerError),
}

impl SettlementError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Ledger(PointsLedgerError::InsufficientBalance { .. }) => "INSUFFICIENT_BALANCE",
            Self::Ledger(PointsLedgerError::Unavailable(_)) => "LEDGER_UNAVAILABLE",
        }
    }

    /// Returns true if retrying the lifecycle transition can succeed.
    ///
    /// A rejected conditional debit will keep failing until the customer
    /// lowers the redemption; a transient ledger outage will not.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Ledger(PointsLedgerError::Unavailable(_)))
    }
}

impl From<SettlementError> for AppError {
    fn from(err: SettlementError) -> Self {
        match err {
            SettlementError::Ledger(inner) => inner.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointex_shared::types::PointsType;

    #[test]
    fn test_error_codes() {
        let err = SettlementError::Ledger(PointsLedgerError::InsufficientBalance {
            points_type: PointsType::new("gold").unwrap(),
            requested: 10,
            available: 5,
        });
        assert_eq!(err.error_code(), "INSUFFICIENT_BALANCE");
        assert!(!err.is_retryable());

        let err = SettlementError::Ledger(PointsLedgerError::Unavailable("down".into()));
        assert_eq!(err.error_code(), "LEDGER_UNAVAILABLE");
        assert!(err.is_retryable());
    }
}
