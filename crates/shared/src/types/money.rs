//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
/// Arithmetic between two `Money` values is checked: mixing currencies
/// is an error, never a silent unit confusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major currency units (e.g., dollars).
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "USD", "IDR").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Indonesian Rupiah
    Idr,
    /// Euro
    Eur,
    /// Singapore Dollar
    Sgd,
    /// Japanese Yen
    Jpy,
}

/// Errors from checked money arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Two amounts in different currencies were combined.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        left: Currency,
        /// Currency of the right-hand operand.
        right: Currency,
    },
}

impl Currency {
    /// Number of minor-unit decimal places for this currency.
    ///
    /// JPY and IDR are transacted in whole units; the rest use cents.
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        match self {
            Self::Jpy | Self::Idr => 0,
            Self::Usd | Self::Eur | Self::Sgd => 2,
        }
    }

    /// The smallest representable amount in this currency (e.g., 0.01 for USD).
    #[must_use]
    pub fn one_minor_unit(&self) -> Decimal {
        Decimal::new(1, self.decimal_places())
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns the amount with the opposite sign.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            amount: -self.amount,
            currency: self.currency,
        }
    }

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if the currencies differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if the currencies differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Checked comparison.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if the currencies differ.
    pub fn try_cmp(&self, other: &Self) -> Result<std::cmp::Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// The smaller of two amounts in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if the currencies differ.
    pub fn try_min(&self, other: &Self) -> Result<Self, MoneyError> {
        match self.try_cmp(other)? {
            std::cmp::Ordering::Greater => Ok(*other),
            _ => Ok(*self),
        }
    }

    /// Rounds to the currency's minor unit, half away from zero.
    ///
    /// This is standard monetary rounding: 0.005 USD becomes 0.01 USD.
    #[must_use]
    pub fn round_half_up(&self) -> Self {
        Self::new(
            self.amount.round_dp_with_strategy(
                self.currency.decimal_places(),
                RoundingStrategy::MidpointAwayFromZero,
            ),
            self.currency,
        )
    }

    /// Rounds down to the currency's minor unit.
    #[must_use]
    pub fn floor_to_minor(&self) -> Self {
        Self::new(
            self.amount.round_dp_with_strategy(
                self.currency.decimal_places(),
                RoundingStrategy::ToNegativeInfinity,
            ),
            self.currency,
        )
    }

    fn ensure_same_currency(&self, other: &Self) -> Result<(), MoneyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            })
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Idr => write!(f, "IDR"),
            Self::Eur => write!(f, "EUR"),
            Self::Sgd => write!(f, "SGD"),
            Self::Jpy => write!(f, "JPY"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "IDR" => Ok(Self::Idr),
            "EUR" => Ok(Self::Eur),
            "SGD" => Ok(Self::Sgd),
            "JPY" => Ok(Self::Jpy),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_money_new() {
        let amount = dec!(100.00);
        let money = Money::new(amount, Currency::Usd);
        assert_eq!(money.amount, amount);
        assert_eq!(money.currency, Currency::Usd);
    }

    #[test]
    fn test_money_zero() {
        let money = Money::zero(Currency::Idr);
        assert!(money.is_zero());
        assert_eq!(money.amount, Decimal::ZERO);
        assert_eq!(money.currency, Currency::Idr);
    }

    #[test]
    fn test_money_signs() {
        let positive = Money::new(dec!(10), Currency::Usd);
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::new(dec!(-10), Currency::Usd);
        assert!(negative.is_negative());
        assert!(!negative.is_positive());

        let zero = Money::new(dec!(0), Currency::Usd);
        assert!(!zero.is_negative());
        assert!(!zero.is_positive());
    }

    #[test]
    fn test_negated() {
        let money = Money::new(dec!(12.34), Currency::Usd);
        assert_eq!(money.negated().amount, dec!(-12.34));
        assert_eq!(money.negated().negated(), money);
    }

    #[test]
    fn test_try_add_same_currency() {
        let a = Money::new(dec!(10.25), Currency::Usd);
        let b = Money::new(dec!(0.75), Currency::Usd);
        assert_eq!(a.try_add(&b).unwrap(), Money::new(dec!(11.00), Currency::Usd));
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let a = Money::new(dec!(10), Currency::Usd);
        let b = Money::new(dec!(10), Currency::Eur);
        assert_eq!(
            a.try_add(&b),
            Err(MoneyError::CurrencyMismatch {
                left: Currency::Usd,
                right: Currency::Eur,
            })
        );
    }

    #[test]
    fn test_try_sub() {
        let a = Money::new(dec!(10.00), Currency::Usd);
        let b = Money::new(dec!(3.50), Currency::Usd);
        assert_eq!(a.try_sub(&b).unwrap().amount, dec!(6.50));
    }

    #[test]
    fn test_try_min() {
        let a = Money::new(dec!(60.00), Currency::Usd);
        let b = Money::new(dec!(50.00), Currency::Usd);
        assert_eq!(a.try_min(&b).unwrap(), b);
        assert_eq!(b.try_min(&a).unwrap(), b);
        assert!(a.try_min(&Money::zero(Currency::Jpy)).is_err());
    }

    #[rstest]
    #[case(Currency::Usd, 2)]
    #[case(Currency::Eur, 2)]
    #[case(Currency::Sgd, 2)]
    #[case(Currency::Jpy, 0)]
    #[case(Currency::Idr, 0)]
    fn test_decimal_places(#[case] currency: Currency, #[case] places: u32) {
        assert_eq!(currency.decimal_places(), places);
    }

    #[test]
    fn test_one_minor_unit() {
        assert_eq!(Currency::Usd.one_minor_unit(), dec!(0.01));
        assert_eq!(Currency::Jpy.one_minor_unit(), dec!(1));
    }

    #[test]
    fn test_round_half_up() {
        // Half away from zero: 0.005 -> 0.01, unlike banker's rounding.
        assert_eq!(
            Money::new(dec!(0.005), Currency::Usd).round_half_up().amount,
            dec!(0.01)
        );
        assert_eq!(
            Money::new(dec!(1.004), Currency::Usd).round_half_up().amount,
            dec!(1.00)
        );
        assert_eq!(
            Money::new(dec!(2.5), Currency::Jpy).round_half_up().amount,
            dec!(3)
        );
    }

    #[test]
    fn test_floor_to_minor() {
        assert_eq!(
            Money::new(dec!(1.999), Currency::Usd).floor_to_minor().amount,
            dec!(1.99)
        );
        assert_eq!(
            Money::new(dec!(99.9), Currency::Jpy).floor_to_minor().amount,
            dec!(99)
        );
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Idr.to_string(), "IDR");
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Sgd.to_string(), "SGD");
        assert_eq!(Currency::Jpy.to_string(), "JPY");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("usd").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("IDR").unwrap(), Currency::Idr);
        assert_eq!(Currency::from_str("EUR").unwrap(), Currency::Eur);
        assert_eq!(Currency::from_str("SGD").unwrap(), Currency::Sgd);
        assert_eq!(Currency::from_str("JPY").unwrap(), Currency::Jpy);

        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }
}
