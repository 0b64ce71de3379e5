//! Conversion rule resolution into the order currency.

use pointex_shared::types::{Currency, Money};

use super::error::ConversionError;
use super::types::{ConversionRule, ResolvedConversion};

/// Resolves a conversion rule into `target_currency`.
///
/// Only the monetary side of the rule is converted; the point count is
/// preserved. When the rule already uses the target currency it passes
/// through untouched.
///
/// The `rate_lookup` collaborator converts an amount into the target
/// currency, returning `None` when no conversion path exists.
///
/// # Errors
///
/// Returns `ConversionError::RateUnavailable` when the lookup has no rate
/// (a stale or partial rate must never silently apply), or a validation
/// error when the rule itself is malformed.
pub fn resolve<F>(
    rule: &ConversionRule,
    target_currency: Currency,
    rate_lookup: F,
) -> Result<ResolvedConversion, ConversionError>
where
    F: Fn(Money, Currency) -> Option<Money>,
{
    rule.validate()?;

    if rule.conversion_rate.currency == target_currency {
        return Ok(ResolvedConversion {
            points_type: rule.points_type.clone(),
            conversion_amount: rule.conversion_amount,
            conversion_rate: rule.conversion_rate,
        });
    }

    let converted = rate_lookup(rule.conversion_rate, target_currency)
        .filter(|money| money.currency == target_currency)
        .ok_or(ConversionError::RateUnavailable {
            from: rule.conversion_rate.currency,
            to: target_currency,
        })?;

    if !converted.is_positive() {
        return Err(ConversionError::NonPositiveRate {
            points_type: rule.points_type.clone(),
            rate: converted.amount,
        });
    }

    Ok(ResolvedConversion {
        points_type: rule.points_type.clone(),
        conversion_amount: rule.conversion_amount,
        conversion_rate: converted,
    })
}
