//! Low-level HTTP client — `NomicsHttp`.
//!
//! Issues a single `GET` and hands back the response text. No retries: every
//! failure surfaces to the caller as an [`HttpError`]. Decoding into domain
//! types happens in the sub-clients.

use crate::error::{HttpError, SdkError};
use crate::fetch::Fetch;
use crate::network::{redact_key, DEFAULT_USER_AGENT};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// Low-level HTTP client for the Nomics REST API.
#[derive(Debug, Clone)]
pub struct NomicsHttp {
    client: Client,
}

impl NomicsHttp {
    /// Client with the default `User-Agent` and the platform default timeout.
    pub fn new() -> Result<Self, SdkError> {
        Self::with_options(DEFAULT_USER_AGENT, None)
    }

    /// Client with a custom `User-Agent` and an optional request timeout.
    ///
    /// The timeout is ignored on WASM, where the browser owns it.
    pub fn with_options(user_agent: &str, timeout: Option<Duration>) -> Result<Self, SdkError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|e| {
                SdkError::InvalidArgument(format!("invalid user agent '{}': {}", user_agent, e))
            })?,
        );

        let mut builder = Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(t) = timeout {
                builder = builder.timeout(t);
            }
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let client = builder.build().map_err(HttpError::from)?;
        Ok(Self { client })
    }

    /// `GET` the URL and return the body of a 2xx response.
    pub async fn get_text(&self, url: &str) -> Result<String, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        tracing::debug!(
            url = %redact_key(url),
            status = status.as_u16(),
            "Nomics response"
        );

        if status.is_success() {
            return Ok(resp.text().await?);
        }

        let body = resp.text().await.unwrap_or_default();
        Err(HttpError::from_status(status.as_u16(), body))
    }
}

impl Fetch for NomicsHttp {
    async fn fetch(&self, url: &str) -> Result<String, HttpError> {
        self.get_text(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_creation() {
        assert!(NomicsHttp::new().is_ok());
        assert!(NomicsHttp::with_options("my-bot/1.0", Some(Duration::from_secs(5))).is_ok());
    }

    #[test]
    fn test_invalid_user_agent_rejected() {
        let err = NomicsHttp::with_options("bad\nagent", None).unwrap_err();
        assert!(matches!(err, SdkError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let http = NomicsHttp::new().unwrap();
        // Nothing listens on local port 9.
        let err = http.fetch("http://127.0.0.1:9/markets?key=x").await.unwrap_err();
        assert!(matches!(err, HttpError::Reqwest(_)));
    }
}
