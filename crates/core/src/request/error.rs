//! Request validation error types.

use pointex_shared::AppError;
use pointex_shared::types::PointsType;
use thiserror::Error;

use crate::points::PointsLedgerError;

/// Errors that can occur while handling a redemption request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The points type parameter was missing or malformed.
    #[error("Invalid points type parameter: {0:?}")]
    InvalidPointsType(String),

    /// The order has no redemption offer for this points type.
    #[error("Points redemption is not available for {points_type} points on this order")]
    NotPermitted {
        /// The requested points type.
        points_type: PointsType,
    },

    /// The requester does not own the order and cannot administer it.
    #[error("Access denied")]
    AccessDenied,

    /// The request exceeds the configured per-request point limit.
    #[error("Requested {requested} points, the per-request limit is {limit}")]
    ExceedsRequestLimit {
        /// The requested point count.
        requested: u64,
        /// The configured limit.
        limit: u64,
    },

    /// The customer does not own enough points.
    #[error("Requested {requested} {points_type} points but only {available} are available")]
    InsufficientPoints {
        /// The requested points type.
        points_type: PointsType,
        /// The requested point count.
        requested: u64,
        /// The customer's balance.
        available: u64,
    },

    /// The balance lookup failed.
    #[error(transparent)]
    Ledger(#[from] PointsLedgerError),
}

impl RequestError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPointsType(_) => "INVALID_POINTS_TYPE",
            Self::NotPermitted { .. } => "REDEMPTION_NOT_PERMITTED",
            Self::AccessDenied => "ACCESS_DENIED",
            Self::ExceedsRequestLimit { .. } => "EXCEEDS_REQUEST_LIMIT",
            Self::InsufficientPoints { .. } => "INSUFFICIENT_POINTS",
            Self::Ledger(_) => "LEDGER_UNAVAILABLE",
        }
    }

    /// Returns the HTTP status code for this error.
    ///
    /// Malformed input maps to 400; ownership and balance violations map
    /// to 403.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidPointsType(_)
            | Self::NotPermitted { .. }
            | Self::ExceedsRequestLimit { .. } => 400,
            Self::AccessDenied | Self::InsufficientPoints { .. } => 403,
            Self::Ledger(_) => 500,
        }
    }
}

impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::InvalidPointsType(_)
            | RequestError::NotPermitted { .. }
            | RequestError::ExceedsRequestLimit { .. } => Self::Validation(err.to_string()),
            RequestError::AccessDenied | RequestError::InsufficientPoints { .. } => {
                Self::Forbidden(err.to_string())
            }
            RequestError::Ledger(inner) => inner.into(),
        }
    }
}
