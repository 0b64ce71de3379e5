//! Exchange rate types and lookup.

use chrono::NaiveDate;
use pointex_shared::types::{Currency, Money};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Exchange rate between two currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
    /// Exchange rate (1 `from` = `rate` `to`).
    pub rate: Decimal,
    /// Date this rate is effective.
    pub effective_date: NaiveDate,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub const fn new(from: Currency, to: Currency, rate: Decimal, effective_date: NaiveDate) -> Self {
        Self {
            from,
            to,
            rate,
            effective_date,
        }
    }

    /// Returns the inverse rate.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            rate: Decimal::ONE / self.rate,
            effective_date: self.effective_date,
        }
    }
}

/// In-memory rate table usable as the engine's rate-lookup collaborator.
///
/// Lookup tries a direct rate first, then the inverse of the opposite pair.
/// When several rates exist for a pair, the most recent effective date wins.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: Vec<ExchangeRate>,
}

impl RateTable {
    /// Creates an empty rate table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rate to the table.
    pub fn add(&mut self, rate: ExchangeRate) {
        self.rates.push(rate);
    }

    /// Looks up the rate from one currency to another.
    #[must_use]
    pub fn lookup(&self, from: Currency, to: Currency) -> Option<Decimal> {
        if from == to {
            return Some(Decimal::ONE);
        }

        let direct = self
            .rates
            .iter()
            .filter(|r| r.from == from && r.to == to)
            .max_by_key(|r| r.effective_date);
        if let Some(rate) = direct {
            return Some(rate.rate);
        }

        self.rates
            .iter()
            .filter(|r| r.from == to && r.to == from && !r.rate.is_zero())
            .max_by_key(|r| r.effective_date)
            .map(|r| r.inverse().rate)
    }

    /// Converts an amount into `target`, or `None` when no rate exists.
    ///
    /// The result keeps four decimal places (half-up) so downstream
    /// minor-unit rounding stays precise.
    #[must_use]
    pub fn convert(&self, amount: Money, target: Currency) -> Option<Money> {
        let rate = self.lookup(amount.currency, target)?;
        let converted = (amount.amount * rate)
            .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
        Some(Money::new(converted, target))
    }
}
