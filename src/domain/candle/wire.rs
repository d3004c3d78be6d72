//! Wire types for `/candles` and `/exchange_candles` responses.

use crate::shared::serde_util::decimal_text;
use serde::Deserialize;

/// Raw candle as sent by the backend:
///
/// ```json
/// {
///   "timestamp": "2018-03-19T10:00:00Z",
///   "low": "7024.32225",
///   "open": "8276.19407",
///   "close": "8281.17307",
///   "high": "8566.43000",
///   "volume": "59624801"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CandleResponse {
    pub timestamp: String,
    #[serde(deserialize_with = "decimal_text::deserialize")]
    pub open: String,
    #[serde(deserialize_with = "decimal_text::deserialize")]
    pub high: String,
    #[serde(deserialize_with = "decimal_text::deserialize")]
    pub low: String,
    #[serde(deserialize_with = "decimal_text::deserialize")]
    pub close: String,
    #[serde(deserialize_with = "decimal_text::deserialize")]
    pub volume: String,
}
