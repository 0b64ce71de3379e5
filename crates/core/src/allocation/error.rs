//! Allocation error types.

use pointex_shared::AppError;
use pointex_shared::types::MoneyError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while splitting an amount across line items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// A positive amount was allocated over zero line items.
    ///
    /// This signals a caller sequencing bug (a discount on an order with
    /// no chargeable items), not a user-facing condition.
    #[error("Cannot allocate a positive amount over an empty line item set")]
    EmptyAllocationSet,

    /// The amount to allocate was negative.
    #[error("Cannot allocate a negative amount: {0}")]
    NegativeAmount(Decimal),

    /// Line items and the amount disagree on currency.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl AllocationError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyAllocationSet => "EMPTY_ALLOCATION_SET",
            Self::NegativeAmount(_) => "NEGATIVE_ALLOCATION_AMOUNT",
            Self::Money(_) => "CURRENCY_MISMATCH",
        }
    }
}

impl From<AllocationError> for AppError {
    fn from(err: AllocationError) -> Self {
        // All allocation failures are host bugs, not user input problems.
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointex_shared::types::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AllocationError::EmptyAllocationSet.error_code(),
            "EMPTY_ALLOCATION_SET"
        );
        assert_eq!(
            AllocationError::NegativeAmount(dec!(-1)).error_code(),
            "NEGATIVE_ALLOCATION_AMOUNT"
        );
        assert_eq!(
            AllocationError::Money(MoneyError::CurrencyMismatch {
                left: Currency::Usd,
                right: Currency::Eur,
            })
            .error_code(),
            "CURRENCY_MISMATCH"
        );
    }

    #[test]
    fn test_maps_to_internal_app_error() {
        let err: AppError = AllocationError::EmptyAllocationSet.into();
        assert_eq!(err.status_code(), 500);
    }
}
