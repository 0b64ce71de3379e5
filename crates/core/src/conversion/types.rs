//! Conversion rule domain types.

use pointex_shared::types::{Currency, Money, PointsType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ConversionError;

/// The exchange ratio between a point count and a monetary amount.
///
/// `conversion_amount` points are worth `conversion_rate`. A rule is
/// created from promotion configuration and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRule {
    /// The points type this rule exchanges.
    pub points_type: PointsType,
    /// Number of points equivalent to `conversion_rate`.
    pub conversion_amount: u64,
    /// Monetary value of `conversion_amount` points.
    pub conversion_rate: Money,
}

impl ConversionRule {
    /// Creates a validated conversion rule.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError` if the point side is zero or the monetary
    /// side is not positive.
    pub fn new(
        points_type: PointsType,
        conversion_amount: u64,
        conversion_rate: Money,
    ) -> Result<Self, ConversionError> {
        let rule = Self {
            points_type,
            conversion_amount,
            conversion_rate,
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Validates the rule's exchange ratio.
    ///
    /// Rules can also arrive through deserialization, so resolution
    /// re-validates rather than trusting the constructor.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError` if the point side is zero or the monetary
    /// side is not positive.
    pub fn validate(&self) -> Result<(), ConversionError> {
        if self.conversion_amount == 0 {
            return Err(ConversionError::ZeroConversionAmount {
                points_type: self.points_type.clone(),
            });
        }
        if !self.conversion_rate.is_positive() {
            return Err(ConversionError::NonPositiveRate {
                points_type: self.points_type.clone(),
                rate: self.conversion_rate.amount,
            });
        }
        Ok(())
    }
}

/// A conversion rule with its monetary side expressed in the order's currency.
///
/// Derived per calculation and never cached across orders, since exchange
/// rates change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConversion {
    /// The points type this rule exchanges.
    pub points_type: PointsType,
    /// Number of points equivalent to `conversion_rate`.
    pub conversion_amount: u64,
    /// Monetary value of `conversion_amount` points, in the order currency.
    pub conversion_rate: Money,
}

impl ResolvedConversion {
    /// The currency this conversion is expressed in.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.conversion_rate.currency
    }

    /// Points per one major currency unit, as an exact ratio.
    #[must_use]
    pub fn points_per_unit(&self) -> Decimal {
        Decimal::from(self.conversion_amount) / self.conversion_rate.amount
    }

    /// The unrounded monetary value of `points`, in the resolved currency.
    #[must_use]
    pub fn amount_for_points(&self, points: u64) -> Decimal {
        Decimal::from(points) * self.conversion_rate.amount / Decimal::from(self.conversion_amount)
    }

    /// The unrounded point value of a monetary `amount`.
    #[must_use]
    pub fn points_for_amount(&self, amount: Decimal) -> Decimal {
        amount * Decimal::from(self.conversion_amount) / self.conversion_rate.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn gold() -> PointsType {
        PointsType::new("gold").unwrap()
    }

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::Usd)
    }

    #[test]
    fn test_new_valid_rule() {
        let rule = ConversionRule::new(gold(), 10, usd(dec!(1.00))).unwrap();
        assert_eq!(rule.conversion_amount, 10);
        assert_eq!(rule.conversion_rate.amount, dec!(1.00));
    }

    #[test]
    fn test_zero_conversion_amount_rejected() {
        let result = ConversionRule::new(gold(), 0, usd(dec!(1.00)));
        assert!(matches!(
            result,
            Err(ConversionError::ZeroConversionAmount { .. })
        ));
    }

    #[test]
    fn test_non_positive_rate_rejected() {
        assert!(matches!(
            ConversionRule::new(gold(), 10, usd(dec!(0))),
            Err(ConversionError::NonPositiveRate { .. })
        ));
        assert!(matches!(
            ConversionRule::new(gold(), 10, usd(dec!(-1))),
            Err(ConversionError::NonPositiveRate { .. })
        ));
    }

    #[test]
    fn test_points_per_unit() {
        // 10 points = $1.00 -> 10 points per dollar.
        let resolved = ResolvedConversion {
            points_type: gold(),
            conversion_amount: 10,
            conversion_rate: usd(dec!(1.00)),
        };
        assert_eq!(resolved.points_per_unit(), dec!(10));
    }

    #[test]
    fn test_amount_for_points() {
        let resolved = ResolvedConversion {
            points_type: gold(),
            conversion_amount: 10,
            conversion_rate: usd(dec!(1.00)),
        };
        assert_eq!(resolved.amount_for_points(600), dec!(60));
        assert_eq!(resolved.amount_for_points(0), dec!(0));
    }

    #[test]
    fn test_points_for_amount() {
        let resolved = ResolvedConversion {
            points_type: gold(),
            conversion_amount: 10,
            conversion_rate: usd(dec!(1.00)),
        };
        assert_eq!(resolved.points_for_amount(dec!(50.00)), dec!(500));
    }

    #[test]
    fn test_fractional_ratio_is_exact() {
        // 3 points = $2.00 -> 1.5 points per dollar, no truncation.
        let resolved = ResolvedConversion {
            points_type: gold(),
            conversion_amount: 3,
            conversion_rate: usd(dec!(2.00)),
        };
        assert_eq!(resolved.points_per_unit(), dec!(1.5));
        assert_eq!(resolved.points_for_amount(dec!(10.00)), dec!(15.0000));
    }
}
