//! Price domain — current USD prices and re-basing against another currency.

pub mod client;
pub mod wire;

use crate::error::SdkError;
use crate::shared::{parse_decimal, truncate};
use rust_decimal::Decimal;
use serde::Serialize;

/// Price of one currency.
///
/// Prices from `/prices` are quoted in USD; [`convert_base`] re-quotes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricePair {
    pub currency: String,
    pub price: Decimal,
}

impl TryFrom<wire::PriceResponse> for PricePair {
    type Error = SdkError;

    fn try_from(source: wire::PriceResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            price: parse_decimal(&source.price, "price")?,
            currency: source.currency,
        })
    }
}

/// Decode a response body holding a JSON array of prices.
pub fn decode_prices(body: &str) -> Result<Vec<PricePair>, SdkError> {
    let raw: Vec<wire::PriceResponse> = serde_json::from_str(body)?;
    raw.into_iter().map(PricePair::try_from).collect()
}

/// Re-quote USD prices in `quote_currency`.
///
/// Each price becomes `usd_price / quote_usd_price`, truncated to 8 digits.
/// The quote currency is looked up by exact symbol.
///
/// # Errors
///
/// - [`SdkError::NotFound`] when `quote_currency` is not in `prices`.
/// - [`SdkError::InvalidArgument`] when its USD price is zero.
pub fn convert_base(prices: &[PricePair], quote_currency: &str) -> Result<Vec<PricePair>, SdkError> {
    let quote = prices
        .iter()
        .find(|p| p.currency == quote_currency)
        .ok_or_else(|| {
            SdkError::NotFound(format!("no USD price for quote currency '{}'", quote_currency))
        })?;

    if quote.price.is_zero() {
        return Err(SdkError::InvalidArgument(format!(
            "quote currency '{}' has a zero USD price",
            quote_currency
        )));
    }

    prices
        .iter()
        .map(|p| {
            let price = p.price.checked_div(quote.price).ok_or_else(|| {
                SdkError::InvalidArgument(format!(
                    "price of '{}' in '{}' is out of range",
                    p.currency, quote_currency
                ))
            })?;
            Ok(PricePair {
                currency: p.currency.clone(),
                price: truncate(price),
            })
        })
        .collect()
}
