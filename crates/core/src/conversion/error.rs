//! Conversion error types.

use pointex_shared::AppError;
use pointex_shared::types::{Currency, PointsType};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while resolving a conversion rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The rule's point side is zero, so no exchange ratio exists.
    #[error("Conversion rule for {points_type} has a zero conversion amount")]
    ZeroConversionAmount {
        /// The points type the rule applies to.
        points_type: PointsType,
    },

    /// The rule's monetary side is zero or negative.
    #[error("Conversion rule for {points_type} has a non-positive rate: {rate}")]
    NonPositiveRate {
        /// The points type the rule applies to.
        points_type: PointsType,
        /// The offending rate amount.
        rate: Decimal,
    },

    /// No exchange rate exists between the rule currency and the order currency.
    #[error("No exchange rate available from {from} to {to}")]
    RateUnavailable {
        /// The rule's currency.
        from: Currency,
        /// The order's currency.
        to: Currency,
    },
}

impl ConversionError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroConversionAmount { .. } => "ZERO_CONVERSION_AMOUNT",
            Self::NonPositiveRate { .. } => "NON_POSITIVE_RATE",
            Self::RateUnavailable { .. } => "RATE_UNAVAILABLE",
        }
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::ZeroConversionAmount { .. }
            | ConversionError::NonPositiveRate { .. } => Self::Validation(err.to_string()),
            ConversionError::RateUnavailable { .. } => Self::ExternalService(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn gold() -> PointsType {
        PointsType::new("gold").unwrap()
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ConversionError::ZeroConversionAmount { points_type: gold() }.error_code(),
            "ZERO_CONVERSION_AMOUNT"
        );
        assert_eq!(
            ConversionError::NonPositiveRate {
                points_type: gold(),
                rate: dec!(0),
            }
            .error_code(),
            "NON_POSITIVE_RATE"
        );
        assert_eq!(
            ConversionError::RateUnavailable {
                from: Currency::Eur,
                to: Currency::Usd,
            }
            .error_code(),
            "RATE_UNAVAILABLE"
        );
    }

    #[test]
    fn test_app_error_mapping() {
        let err: AppError = ConversionError::ZeroConversionAmount { points_type: gold() }.into();
        assert_eq!(err.status_code(), 400);

        let err: AppError = ConversionError::RateUnavailable {
            from: Currency::Eur,
            to: Currency::Usd,
        }
        .into();
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_display() {
        let err = ConversionError::RateUnavailable {
            from: Currency::Eur,
            to: Currency::Usd,
        };
        assert_eq!(err.to_string(), "No exchange rate available from EUR to USD");
    }
}
