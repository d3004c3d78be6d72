//! Conversion: CandleResponse → Candle (TryFrom + validation).

use super::wire::CandleResponse;
use super::Candle;
use crate::error::SdkError;
use crate::shared::parse_decimal;
use chrono::DateTime;

impl TryFrom<CandleResponse> for Candle {
    type Error = SdkError;

    fn try_from(source: CandleResponse) -> Result<Self, Self::Error> {
        DateTime::parse_from_rfc3339(&source.timestamp).map_err(|e| {
            SdkError::MalformedResponse(format!(
                "field `timestamp` is not an RFC 3339 instant ('{}'): {}",
                source.timestamp, e
            ))
        })?;

        Ok(Self {
            open: parse_decimal(&source.open, "open")?,
            high: parse_decimal(&source.high, "high")?,
            low: parse_decimal(&source.low, "low")?,
            close: parse_decimal(&source.close, "close")?,
            volume: parse_decimal(&source.volume, "volume")?,
            timestamp: source.timestamp,
        })
    }
}

/// Decode a response body holding a JSON array of candles.
pub fn decode_candles(body: &str) -> Result<Vec<Candle>, SdkError> {
    let raw: Vec<CandleResponse> = serde_json::from_str(body)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, candle)| {
            Candle::try_from(candle).map_err(|e| match e {
                SdkError::MalformedResponse(msg) => {
                    SdkError::MalformedResponse(format!("candle #{}: {}", index, msg))
                }
                other => other,
            })
        })
        .collect()
}
