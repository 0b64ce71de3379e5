//! Grant error types.

use pointex_shared::AppError;
use pointex_shared::types::MoneyError;
use thiserror::Error;

use crate::conversion::ConversionError;

/// Errors that can occur while computing grants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrantError {
    /// Conversion rule resolution failed.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Currency arithmetic failed.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// A computed point count did not fit into the point range.
    #[error("Computed grant count is out of range")]
    PointsOutOfRange,
}

impl GrantError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Conversion(inner) => inner.error_code(),
            Self::Money(_) => "CURRENCY_MISMATCH",
            Self::PointsOutOfRange => "POINTS_OUT_OF_RANGE",
        }
    }
}

impl From<GrantError> for AppError {
    fn from(err: GrantError) -> Self {
        match err {
            GrantError::Conversion(inner) => inner.into(),
            GrantError::Money(_) | GrantError::PointsOutOfRange => {
                Self::Internal(err.to_string())
            }
        }
    }
}
