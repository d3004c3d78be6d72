//! Prices sub-client — `/prices`.

use super::{convert_base, decode_prices, PricePair};
use crate::client::NomicsClient;
use crate::error::SdkError;
use crate::fetch::Fetch;
use crate::network::prices_url;

/// Sub-client for current prices.
pub struct Prices<'a, F> {
    pub(crate) client: &'a NomicsClient<F>,
}

impl<'a, F: Fetch> Prices<'a, F> {
    /// Current USD price of every currency.
    pub async fn get_all(&self) -> Result<Vec<PricePair>, SdkError> {
        let body = self.get_all_raw().await?;
        decode_prices(&body)
    }

    /// Response text exactly as returned by the API.
    pub async fn get_all_raw(&self) -> Result<String, SdkError> {
        let url = prices_url(self.client.base_url(), self.client.api_key());
        self.client.fetch(&url).await
    }

    /// Current price of every currency quoted in `quote_currency` (e.g. `ETH`).
    pub async fn get_all_in(&self, quote_currency: &str) -> Result<Vec<PricePair>, SdkError> {
        let prices = self.get_all().await?;
        convert_base(&prices, quote_currency)
    }
}
