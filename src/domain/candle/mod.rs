//! Candle domain — OHLCV records, zero-fill repair, interval re-aggregation.

pub mod client;
mod convert;
pub mod series;
pub mod wire;

pub use convert::decode_candles;
pub use series::{
    aggregate, all_time_high, from_timestamp, last_n, most_recent, most_recent_non_zero,
    repair_zero_candles,
};

use rust_decimal::Decimal;
use serde::Serialize;

/// One OHLCV record for a fixed interval.
///
/// `timestamp` is the upstream ISO-8601 UTC instant, kept verbatim (it is
/// validated as RFC 3339 when decoded). A `close` of exactly zero is the
/// upstream sentinel for "no trades this interval".
///
/// Serializes back to the upstream shape with decimals as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candle {
    pub timestamp: String,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

impl Candle {
    pub fn has_trades(&self) -> bool {
        !self.close.is_zero()
    }

    /// Copy of this candle re-stamped at `timestamp`.
    pub fn carried_to(&self, timestamp: &str) -> Candle {
        Candle {
            timestamp: timestamp.to_string(),
            ..self.clone()
        }
    }
}
