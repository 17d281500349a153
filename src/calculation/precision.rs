//! Currency precision rule.
//!
//! Amounts are carried at full precision through every calculation and
//! rounded exactly once, to two places, when the report is assembled.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for amounts and displayed hours.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds to currency precision, half away from zero.
///
/// ```
/// use allowance_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("2.345").unwrap()).to_string(), "2.35");
/// assert_eq!(round_currency(Decimal::from(3000)).to_string(), "3000.00");
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

/// Formats a value with two decimal places for descriptions.
pub(crate) fn format_two_places(value: Decimal) -> String {
    round_currency(value).to_string()
}
