//! High-level client — `NomicsClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the API key and the accessor methods.

use crate::domain::candle::client::{Candles, ExchangeCandles};
use crate::domain::market::client::Markets;
use crate::domain::price::client::Prices;
use crate::error::SdkError;
use crate::fetch::Fetch;
use crate::network::{redact_key, API_KEY_ENV, API_URL_ENV, DEFAULT_API_URL, DEFAULT_USER_AGENT};

use std::time::Duration;

#[cfg(feature = "http")]
use crate::http::NomicsHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::candle::client::Candles as CandlesClient;
pub use crate::domain::candle::client::ExchangeCandles as ExchangeCandlesClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::price::client::Prices as PricesClient;

/// The primary entry point for the Nomics SDK.
///
/// Holds the API key and the transport. Provides nested sub-client accessors
/// for each endpoint family: `client.prices()`, `client.markets()`, etc.
///
/// Every call performs one fresh `GET`; nothing is cached between calls.
#[derive(Clone)]
pub struct NomicsClient<F> {
    pub(crate) fetcher: F,
    base_url: String,
    api_key: String,
}

#[cfg(feature = "http")]
impl NomicsClient<NomicsHttp> {
    pub fn builder() -> NomicsClientBuilder {
        NomicsClientBuilder::default()
    }

    /// Client against the default base URL with the given key.
    pub fn new(api_key: &str) -> Result<Self, SdkError> {
        NomicsClientBuilder::default().api_key(api_key).build()
    }
}

impl<F: Fetch> NomicsClient<F> {
    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn prices(&self) -> Prices<'_, F> {
        Prices { client: self }
    }

    pub fn candles(&self) -> Candles<'_, F> {
        Candles { client: self }
    }

    pub fn exchange_candles(&self) -> ExchangeCandles<'_, F> {
        ExchangeCandles { client: self }
    }

    pub fn markets(&self) -> Markets<'_, F> {
        Markets { client: self }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The transport every request goes through.
    pub fn transport(&self) -> &F {
        &self.fetcher
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Fetch a URL through the transport, logging it with the key redacted.
    pub(crate) async fn fetch(&self, url: &str) -> Result<String, SdkError> {
        tracing::debug!(url = %redact_key(url), "GET");
        Ok(self.fetcher.fetch(url).await?)
    }
}

impl<F> std::fmt::Debug for NomicsClient<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NomicsClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct NomicsClientBuilder {
    base_url: String,
    api_key: Option<String>,
    user_agent: String,
    timeout: Option<Duration>,
}

impl Default for NomicsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl NomicsClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded from `NOMICS_API_KEY` and, when set, `NOMICS_API_URL`.
    ///
    /// A missing key is reported by [`build`](Self::build), not here.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            builder.api_key = Some(key);
        }
        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder = builder.base_url(&url);
        }
        builder
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Request timeout for the default transport. Without it the platform
    /// default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build with the reqwest transport.
    #[cfg(feature = "http")]
    pub fn build(self) -> Result<NomicsClient<NomicsHttp>, SdkError> {
        let http = NomicsHttp::with_options(&self.user_agent, self.timeout)?;
        self.build_with(http)
    }

    /// Build with a caller-supplied transport. `user_agent` and `timeout` are
    /// the transport's concern and are ignored here.
    pub fn build_with<F: Fetch>(self, fetcher: F) -> Result<NomicsClient<F>, SdkError> {
        let api_key = match self.api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                return Err(SdkError::InvalidArgument(format!(
                    "an API key is required (set it on the builder or via {})",
                    API_KEY_ENV
                )))
            }
        };
        if self.base_url.is_empty() {
            return Err(SdkError::InvalidArgument("base URL cannot be empty".to_string()));
        }

        Ok(NomicsClient {
            fetcher,
            base_url: self.base_url,
            api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;

    struct NoFetch;

    impl Fetch for NoFetch {
        async fn fetch(&self, _url: &str) -> Result<String, HttpError> {
            Ok("[]".to_string())
        }
    }

    #[test]
    fn test_builder_trims_base_url() {
        let client = NomicsClientBuilder::new()
            .base_url("http://localhost:8080/v1/")
            .api_key("k")
            .build_with(NoFetch)
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
        assert_eq!(client.api_key(), "k");
    }

    #[test]
    fn test_builder_requires_key() {
        let err = NomicsClientBuilder::new().build_with(NoFetch).unwrap_err();
        assert!(matches!(err, SdkError::InvalidArgument(_)));

        let err = NomicsClientBuilder::new()
            .api_key("  ")
            .build_with(NoFetch)
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidArgument(_)));
    }

    #[test]
    fn test_builder_defaults() {
        let client = NomicsClientBuilder::new()
            .api_key("k")
            .build_with(NoFetch)
            .unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_debug_hides_key() {
        let client = NomicsClientBuilder::new()
            .api_key("super-secret")
            .build_with(NoFetch)
            .unwrap();
        let printed = format!("{:?}", client);
        assert!(!printed.contains("super-secret"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_default_transport_build() {
        let client = NomicsClient::builder()
            .api_key("k")
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
        assert!(NomicsClient::new("").is_err());
    }
}
