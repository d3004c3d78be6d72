//! Market domain — exchange trading pairs, filtering and cross-exchange intersection.

pub mod client;

use crate::error::SdkError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A tradable pair on one exchange, as listed by `/markets`:
///
/// ```json
/// { "exchange": "bitfinex", "market": "avtbtc", "base": "AVT", "quote": "BTC" }
/// ```
///
/// All four fields are required; a record missing one fails decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Market {
    pub exchange: String,
    /// Exchange-local pair symbol.
    pub market: String,
    pub base: String,
    pub quote: String,
}

impl Market {
    /// `(base, quote)` key used to match the same pair across exchanges.
    pub fn pair(&self) -> (&str, &str) {
        (&self.base, &self.quote)
    }
}

/// The markets of one exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeMarkets {
    pub exchange: String,
    pub markets: Vec<Market>,
}

impl ExchangeMarkets {
    /// Exchange-local symbols, in listing order.
    pub fn symbols(&self) -> Vec<&str> {
        self.markets.iter().map(|m| m.market.as_str()).collect()
    }
}

/// Decode a response body holding a JSON array of markets.
pub fn decode_markets(body: &str) -> Result<Vec<Market>, SdkError> {
    Ok(serde_json::from_str(body)?)
}

/// Markets listed on `exchange` (exact match), in listing order.
pub fn filter_by_exchange<'a>(markets: &'a [Market], exchange: &str) -> Vec<&'a Market> {
    markets.iter().filter(|m| m.exchange == exchange).collect()
}

/// Exchange-local symbol for `base`/`quote` on `exchange`, matching base and
/// quote case-insensitively. First match wins.
pub fn market_from_pair<'a>(
    markets: &'a [Market],
    exchange: &str,
    base: &str,
    quote: &str,
) -> Option<&'a str> {
    filter_by_exchange(markets, exchange)
        .into_iter()
        .find(|m| m.base.eq_ignore_ascii_case(base) && m.quote.eq_ignore_ascii_case(quote))
        .map(|m| m.market.as_str())
}

/// Distinct exchange ids, in first-seen order.
pub fn supported_exchanges(markets: &[Market]) -> Vec<&str> {
    let mut seen = HashSet::new();
    markets
        .iter()
        .map(|m| m.exchange.as_str())
        .filter(|exchange| seen.insert(*exchange))
        .collect()
}

/// For each exchange, the markets whose `(base, quote)` pair is listed on
/// every exchange in `exchanges`.
///
/// Duplicate exchange ids are collapsed (first occurrence kept) and the
/// result follows that order. Each exchange's markets keep their listing
/// order. An exchange with no markets makes every intersection empty.
pub fn market_intersections(markets: &[Market], exchanges: &[&str]) -> Vec<ExchangeMarkets> {
    let mut seen = HashSet::new();
    let exchanges: Vec<&str> = exchanges
        .iter()
        .copied()
        .filter(|exchange| seen.insert(*exchange))
        .collect();

    let per_exchange: Vec<Vec<&Market>> = exchanges
        .iter()
        .map(|exchange| filter_by_exchange(markets, exchange))
        .collect();

    let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
    for listing in &per_exchange {
        let pairs: HashSet<(&str, &str)> = listing.iter().map(|m| m.pair()).collect();
        for pair in pairs {
            *counts.entry(pair).or_default() += 1;
        }
    }

    let required = exchanges.len();
    exchanges
        .iter()
        .zip(per_exchange)
        .map(|(exchange, listing)| ExchangeMarkets {
            exchange: exchange.to_string(),
            markets: listing
                .into_iter()
                .filter(|m| counts.get(&m.pair()) == Some(&required))
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(exchange: &str, symbol: &str, base: &str, quote: &str) -> Market {
        Market {
            exchange: exchange.to_string(),
            market: symbol.to_string(),
            base: base.to_string(),
            quote: quote.to_string(),
        }
    }

    fn sample() -> Vec<Market> {
        vec![
            market("a", "btcusd", "BTC", "USD"),
            market("b", "BTC-USD", "BTC", "USD"),
            market("a", "ethusd", "ETH", "USD"),
            market("c", "XRPBTC", "XRP", "BTC"),
            market("a", "ltcbtc", "LTC", "BTC"),
        ]
    }

    #[test]
    fn test_decode_markets() {
        let body = r#"[{"exchange":"bitfinex","market":"avtbtc","base":"AVT","quote":"BTC"}]"#;
        let markets = decode_markets(body).unwrap();
        assert_eq!(markets, vec![market("bitfinex", "avtbtc", "AVT", "BTC")]);
    }

    #[test]
    fn test_decode_markets_missing_field() {
        let body = r#"[{"exchange":"bitfinex","market":"avtbtc","base":"AVT"}]"#;
        assert!(matches!(
            decode_markets(body),
            Err(SdkError::MalformedResponse(msg)) if msg.contains("quote")
        ));
    }

    #[test]
    fn test_filter_by_exchange_preserves_order() {
        let markets = sample();
        let symbols: Vec<&str> = filter_by_exchange(&markets, "a")
            .into_iter()
            .map(|m| m.market.as_str())
            .collect();
        assert_eq!(symbols, vec!["btcusd", "ethusd", "ltcbtc"]);
        assert!(filter_by_exchange(&markets, "A").is_empty());
    }

    #[test]
    fn test_market_from_pair() {
        let markets = sample();
        assert_eq!(market_from_pair(&markets, "b", "btc", "usd"), Some("BTC-USD"));
        assert_eq!(market_from_pair(&markets, "a", "Eth", "USD"), Some("ethusd"));
        assert_eq!(market_from_pair(&markets, "b", "ETH", "USD"), None);
    }

    #[test]
    fn test_supported_exchanges_first_seen_order() {
        let markets = sample();
        assert_eq!(supported_exchanges(&markets), vec!["a", "b", "c"]);
        assert!(supported_exchanges(&[]).is_empty());
    }

    #[test]
    fn test_market_intersections() {
        let markets = vec![
            market("a", "btcusd", "BTC", "USD"),
            market("a", "ethusd", "ETH", "USD"),
            market("b", "BTC-USD", "BTC", "USD"),
        ];
        let result = market_intersections(&markets, &["a", "b"]);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].exchange, "a");
        assert_eq!(result[0].symbols(), vec!["btcusd"]);
        assert_eq!(result[1].exchange, "b");
        assert_eq!(result[1].symbols(), vec!["BTC-USD"]);
    }

    #[test]
    fn test_market_intersections_duplicate_listing_counts_once() {
        let markets = vec![
            market("a", "btcusd", "BTC", "USD"),
            market("a", "xbtusd", "BTC", "USD"),
            market("b", "ethusd", "ETH", "USD"),
        ];
        let result = market_intersections(&markets, &["a", "b"]);
        assert!(result.iter().all(|e| e.markets.is_empty()));
    }

    #[test]
    fn test_market_intersections_duplicate_exchange_ids() {
        let markets = sample();
        let result = market_intersections(&markets, &["a", "a"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbols(), vec!["btcusd", "ethusd", "ltcbtc"]);
    }

    #[test]
    fn test_market_intersections_unknown_exchange() {
        let markets = sample();
        let result = market_intersections(&markets, &["a", "zzz"]);
        assert_eq!(result.len(), 2);
        assert!(result[0].markets.is_empty());
        assert!(result[1].markets.is_empty());
        assert!(market_intersections(&markets, &[]).is_empty());
    }
}
