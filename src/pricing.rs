//! Pricing

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;
use tracing::warn;

use crate::{
    items::{CartLineItem, ItemId},
    state::CartState,
};

/// Errors that can occur while pricing cart lines.
#[derive(Debug, Error)]
pub enum PricingError {
    /// The unit cost text is not a number once the currency symbol is stripped.
    #[error("item {id} has a non-numeric unit cost: {text:?}")]
    InvalidUnitCost {
        /// Offending line
        id: ItemId,

        /// Unit cost text as stored on the line
        text: String,
    },

    /// Unit cost multiplied by quantity does not fit in a decimal.
    #[error("item {0} subtotal overflows")]
    Overflow(ItemId),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Parse a displayed unit cost such as `"$10.00"`.
///
/// A leading currency symbol is stripped if present. Returns `None` if what
/// remains is not a decimal number.
pub fn parse_unit_cost(text: &str, currency: &Currency) -> Option<Decimal> {
    let trimmed = text.trim();
    let amount = trimmed.strip_prefix(currency.symbol).unwrap_or(trimmed);

    Decimal::from_str(amount.trim()).ok()
}

/// Subtotal of a single line: unit cost times quantity, rounded to 2 decimal places.
///
/// # Errors
///
/// - [`PricingError::InvalidUnitCost`]: the unit cost text is not numeric.
/// - [`PricingError::Overflow`]: the subtotal does not fit in a decimal.
pub fn total_cost(
    item: &CartLineItem,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError> {
    let Some(unit_cost) = parse_unit_cost(&item.unit_cost_text, currency) else {
        warn!(item = %item.id, unit_cost = %item.unit_cost_text, "unparseable unit cost");

        return Err(PricingError::InvalidUnitCost {
            id: item.id.clone(),
            text: item.unit_cost_text.clone(),
        });
    };

    let subtotal = unit_cost
        .checked_mul(Decimal::from(item.quantity.get()))
        .ok_or_else(|| PricingError::Overflow(item.id.clone()))?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(Money::from_decimal(subtotal, currency))
}

/// Sum of [`total_cost`] over every line. An empty cart totals zero.
///
/// # Errors
///
/// Returns the first [`PricingError`] hit by any line; one bad line makes the
/// whole total unavailable.
pub fn total_amount(
    state: &CartState,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError> {
    state
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, item| {
            Ok(acc.add(total_cost(item, currency)?)?)
        })
}

/// Total number of units across all lines.
pub fn total_quantity(state: &CartState) -> u64 {
    state.iter().map(|item| u64::from(item.quantity.get())).sum()
}

/// Format an amount for display, e.g. `$30.00`.
pub fn format_amount(money: &Money<'_, Currency>) -> String {
    format!("{money}")
}
