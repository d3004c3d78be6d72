//! Network constants and endpoint URL builders for the Nomics SDK.

use crate::shared::Interval;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.nomics.com/v1";

/// Default `User-Agent` header sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("nomics-sdk/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the API key (see `NomicsClientBuilder::from_env`).
pub const API_KEY_ENV: &str = "NOMICS_API_KEY";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "NOMICS_API_URL";

/// `GET {base}/prices?key=K`
pub fn prices_url(base_url: &str, key: &str) -> String {
    format!("{}/prices?key={}", base_url, urlencoding::encode(key))
}

/// `GET {base}/candles?key=K&interval=I&currency=C`
pub fn candles_url(base_url: &str, key: &str, interval: Interval, currency: &str) -> String {
    format!(
        "{}/candles?key={}&interval={}&currency={}",
        base_url,
        urlencoding::encode(key),
        interval.as_str(),
        urlencoding::encode(currency)
    )
}

/// `GET {base}/exchange_candles?key=K&interval=I&exchange=E&market=M`
pub fn exchange_candles_url(
    base_url: &str,
    key: &str,
    interval: Interval,
    exchange: &str,
    market: &str,
) -> String {
    format!(
        "{}/exchange_candles?key={}&interval={}&exchange={}&market={}",
        base_url,
        urlencoding::encode(key),
        interval.as_str(),
        urlencoding::encode(exchange),
        urlencoding::encode(market)
    )
}

/// `GET {base}/markets?key=K`
pub fn markets_url(base_url: &str, key: &str) -> String {
    format!("{}/markets?key={}", base_url, urlencoding::encode(key))
}

/// Replace the value of the `key` query parameter so URLs can be logged.
pub fn redact_key(url: &str) -> String {
    let Some((path, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let query = query
        .split('&')
        .map(|pair| {
            if pair.starts_with("key=") {
                "key=***"
            } else {
                pair
            }
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}
