//! Candle sub-clients — `/candles` (all exchanges) and `/exchange_candles`.
//!
//! Synthetic intervals (`2h`, `6h`, `12h`) are served by fetching `1h`
//! candles, repairing zero candles and aggregating. Native intervals are
//! fetched as-is and zero-repaired.

use super::{decode_candles, series, Candle};
use crate::client::NomicsClient;
use crate::error::SdkError;
use crate::fetch::Fetch;
use crate::network::{candles_url, exchange_candles_url};
use crate::shared::Interval;
use rust_decimal::Decimal;

/// Repair, then aggregate when `interval` is synthetic.
fn build_series(raw: Vec<Candle>, interval: Interval) -> Result<Vec<Candle>, SdkError> {
    let repaired = series::repair_zero_candles(&raw);
    match interval.aggregation_hours() {
        Some(hours) => series::aggregate(&repaired, hours),
        None => Ok(repaired),
    }
}

fn require_native(interval: Interval) -> Result<(), SdkError> {
    if interval.is_synthetic() {
        return Err(SdkError::InvalidArgument(format!(
            "interval {} is built locally; the API has no raw series for it",
            interval
        )));
    }
    Ok(())
}

// ─── Exchange candles ────────────────────────────────────────────────────────

/// Sub-client for one market on one exchange.
pub struct ExchangeCandles<'a, F> {
    pub(crate) client: &'a NomicsClient<F>,
}

impl<'a, F: Fetch> ExchangeCandles<'a, F> {
    /// Candle series at `interval` for `market` (exchange-local symbol, e.g.
    /// `BTC-USD`) on `exchange` (e.g. `gdax`), zero-repaired and aggregated
    /// for synthetic intervals.
    pub async fn get(
        &self,
        interval: Interval,
        exchange: &str,
        market: &str,
    ) -> Result<Vec<Candle>, SdkError> {
        let raw = self.fetch_decoded(interval.upstream(), exchange, market).await?;
        build_series(raw, interval)
    }

    /// Response text exactly as returned by the API. Native intervals only.
    pub async fn get_raw(
        &self,
        interval: Interval,
        exchange: &str,
        market: &str,
    ) -> Result<String, SdkError> {
        require_native(interval)?;
        let url = self.url(interval, exchange, market);
        self.client.fetch(&url).await
    }

    /// The latest candle, or `None` when the series is empty.
    pub async fn most_recent(
        &self,
        interval: Interval,
        exchange: &str,
        market: &str,
    ) -> Result<Option<Candle>, SdkError> {
        let candles = self.lookup_series(interval, exchange, market).await?;
        Ok(series::most_recent(&candles).cloned())
    }

    /// The latest candle with a non-zero close, or `None`.
    pub async fn most_recent_non_zero(
        &self,
        interval: Interval,
        exchange: &str,
        market: &str,
    ) -> Result<Option<Candle>, SdkError> {
        let candles = self.lookup_series(interval, exchange, market).await?;
        Ok(series::most_recent_non_zero(&candles).cloned())
    }

    /// The final `n` candles in ascending order.
    pub async fn last_n(
        &self,
        interval: Interval,
        exchange: &str,
        market: &str,
        n: usize,
    ) -> Result<Vec<Candle>, SdkError> {
        let candles = self.lookup_series(interval, exchange, market).await?;
        Ok(series::last_n(&candles, n).to_vec())
    }

    /// Highest `high` across the full series, or `None` when it is empty.
    pub async fn all_time_high(
        &self,
        interval: Interval,
        exchange: &str,
        market: &str,
    ) -> Result<Option<Decimal>, SdkError> {
        let candles = self.lookup_series(interval, exchange, market).await?;
        Ok(series::all_time_high(&candles))
    }

    /// Candles from the one stamped `timestamp` through the end. Empty when no
    /// candle carries that timestamp.
    pub async fn from_timestamp(
        &self,
        interval: Interval,
        exchange: &str,
        market: &str,
        timestamp: &str,
    ) -> Result<Vec<Candle>, SdkError> {
        let candles = self.lookup_series(interval, exchange, market).await?;
        Ok(series::from_timestamp(&candles, timestamp).to_vec())
    }

    /// Lookups read the upstream series untouched for native intervals, so
    /// zero candles stay visible to them. Synthetic intervals have no
    /// upstream series and use the aggregated one.
    async fn lookup_series(
        &self,
        interval: Interval,
        exchange: &str,
        market: &str,
    ) -> Result<Vec<Candle>, SdkError> {
        if interval.is_synthetic() {
            self.get(interval, exchange, market).await
        } else {
            self.fetch_decoded(interval, exchange, market).await
        }
    }

    async fn fetch_decoded(
        &self,
        interval: Interval,
        exchange: &str,
        market: &str,
    ) -> Result<Vec<Candle>, SdkError> {
        let url = self.url(interval, exchange, market);
        let body = self.client.fetch(&url).await?;
        decode_candles(&body)
    }

    fn url(&self, interval: Interval, exchange: &str, market: &str) -> String {
        exchange_candles_url(
            self.client.base_url(),
            self.client.api_key(),
            interval,
            exchange,
            market,
        )
    }
}

// ─── Aggregated candles ──────────────────────────────────────────────────────

/// Sub-client for candles aggregated across all exchanges for one currency.
pub struct Candles<'a, F> {
    pub(crate) client: &'a NomicsClient<F>,
}

impl<'a, F: Fetch> Candles<'a, F> {
    /// Candle series at `interval` for `currency` (e.g. `BTC`), zero-repaired
    /// and aggregated for synthetic intervals.
    pub async fn get(&self, interval: Interval, currency: &str) -> Result<Vec<Candle>, SdkError> {
        let raw = self.fetch_decoded(interval.upstream(), currency).await?;
        build_series(raw, interval)
    }

    /// Response text exactly as returned by the API. Native intervals only.
    pub async fn get_raw(&self, interval: Interval, currency: &str) -> Result<String, SdkError> {
        require_native(interval)?;
        let url = candles_url(self.client.base_url(), self.client.api_key(), interval, currency);
        self.client.fetch(&url).await
    }

    /// Candles from the one stamped `timestamp` through the end.
    pub async fn from_timestamp(
        &self,
        interval: Interval,
        currency: &str,
        timestamp: &str,
    ) -> Result<Vec<Candle>, SdkError> {
        let candles = if interval.is_synthetic() {
            self.get(interval, currency).await?
        } else {
            self.fetch_decoded(interval, currency).await?
        };
        Ok(series::from_timestamp(&candles, timestamp).to_vec())
    }

    async fn fetch_decoded(
        &self,
        interval: Interval,
        currency: &str,
    ) -> Result<Vec<Candle>, SdkError> {
        let url = candles_url(self.client.base_url(), self.client.api_key(), interval, currency);
        let body = self.client.fetch(&url).await?;
        decode_candles(&body)
    }
}
