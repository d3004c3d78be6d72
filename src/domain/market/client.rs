//! Markets sub-client — `/markets` plus exchange-level filters.

use super::{decode_markets, ExchangeMarkets, Market};
use crate::client::NomicsClient;
use crate::error::SdkError;
use crate::fetch::Fetch;
use crate::network::markets_url;

/// Sub-client for market listings.
pub struct Markets<'a, F> {
    pub(crate) client: &'a NomicsClient<F>,
}

impl<'a, F: Fetch> Markets<'a, F> {
    /// Every market on every exchange.
    pub async fn get_all(&self) -> Result<Vec<Market>, SdkError> {
        let body = self.get_all_raw().await?;
        decode_markets(&body)
    }

    /// Response text exactly as returned by the API.
    pub async fn get_all_raw(&self) -> Result<String, SdkError> {
        let url = markets_url(self.client.base_url(), self.client.api_key());
        self.client.fetch(&url).await
    }

    /// Markets listed on `exchange`, in listing order.
    pub async fn by_exchange(&self, exchange: &str) -> Result<Vec<Market>, SdkError> {
        let markets = self.get_all().await?;
        Ok(super::filter_by_exchange(&markets, exchange)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Exchange-local symbol for `base`/`quote` on `exchange`, or `None`.
    pub async fn market_from_pair(
        &self,
        exchange: &str,
        base: &str,
        quote: &str,
    ) -> Result<Option<String>, SdkError> {
        let markets = self.get_all().await?;
        Ok(super::market_from_pair(&markets, exchange, base, quote).map(str::to_string))
    }

    /// Distinct exchange ids, in first-seen order.
    pub async fn supported_exchanges(&self) -> Result<Vec<String>, SdkError> {
        let markets = self.get_all().await?;
        Ok(super::supported_exchanges(&markets)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Per exchange, the markets whose pair is listed on all of `exchanges`.
    ///
    /// One `/markets` fetch covers every exchange.
    pub async fn market_intersections(
        &self,
        exchanges: &[&str],
    ) -> Result<Vec<ExchangeMarkets>, SdkError> {
        let markets = self.get_all().await?;
        Ok(super::market_intersections(&markets, exchanges))
    }
}
