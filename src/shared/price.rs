//! Fixed-point price utilities for the Nomics SDK.
//!
//! Nomics sends every price and volume as a decimal string. All values are
//! kept as `rust_decimal::Decimal` and every derived value is truncated (never
//! rounded) to [`PRICE_SCALE`] fractional digits, so repeated aggregation does
//! not drift.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::SdkError;

/// Number of fractional digits carried by derived prices and volumes.
pub const PRICE_SCALE: u32 = 8;

/// Truncate toward zero to [`PRICE_SCALE`] digits and pad to exactly that scale.
///
/// ```text
/// 5            -> 5.00000000
/// 0.123456789  -> 0.12345678
/// -1.999999999 -> -1.99999999
/// ```
pub fn truncate(value: Decimal) -> Decimal {
    let mut truncated = value.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::ToZero);
    truncated.rescale(PRICE_SCALE);
    truncated
}

/// Parse an upstream decimal string.
///
/// `field` names the JSON field for the error message.
pub fn parse_decimal(input: &str, field: &str) -> Result<Decimal, SdkError> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| {
            SdkError::MalformedResponse(format!("field `{}` is not a decimal ('{}'): {}", field, input, e))
        })
}
