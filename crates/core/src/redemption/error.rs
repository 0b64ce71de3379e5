//! Redemption error types.

use pointex_shared::AppError;
use pointex_shared::types::{MoneyError, PointsType};
use thiserror::Error;

use crate::allocation::AllocationError;
use crate::conversion::ConversionError;

/// Errors that can occur while computing a redemption.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedemptionError {
    /// Conversion rule resolution failed.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Splitting the discount across line items failed.
    #[error(transparent)]
    Allocation(#[from] AllocationError),

    /// Currency arithmetic failed.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// The intent and the resolved rule target different points types.
    #[error("Intent is for {intent} points but the rule converts {rule} points")]
    PointsTypeMismatch {
        /// Points type of the intent.
        intent: PointsType,
        /// Points type of the rule.
        rule: PointsType,
    },

    /// A computed point count did not fit into the point range.
    #[error("Computed point count is out of range")]
    PointsOutOfRange,
}

impl RedemptionError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Conversion(inner) => inner.error_code(),
            Self::Allocation(inner) => inner.error_code(),
            Self::Money(_) => "CURRENCY_MISMATCH",
            Self::PointsTypeMismatch { .. } => "POINTS_TYPE_MISMATCH",
            Self::PointsOutOfRange => "POINTS_OUT_OF_RANGE",
        }
    }
}

impl From<RedemptionError> for AppError {
    fn from(err: RedemptionError) -> Self {
        match err {
            RedemptionError::Conversion(inner) => inner.into(),
            RedemptionError::Allocation(inner) => inner.into(),
            RedemptionError::Money(_)
            | RedemptionError::PointsTypeMismatch { .. }
            | RedemptionError::PointsOutOfRange => Self::Internal(err.to_string()),
        }
    }
}
