//! # Nomics SDK
//!
//! A Rust client for the Nomics cryptocurrency market-data REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Typed records, decoding, and pure series/market transforms
//!    (always available, no I/O)
//! 2. **HTTP API** — `NomicsHttp`, the reqwest transport behind [`fetch::Fetch`]
//! 3. **High-Level Client** — `NomicsClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nomics_sdk::prelude::*;
//!
//! let client = NomicsClient::builder()
//!     .api_key("your-key")
//!     .build()?;
//!
//! let prices = client.prices().get_all_in("ETH").await?;
//! let candles = client
//!     .exchange_candles()
//!     .get(Interval::Hour6, "binance", "BTCUSDT")
//!     .await?;
//! let shared = client.markets().market_intersections(&["binance", "kraken"]).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared types: `Interval`, decimal helpers, serde helpers.
pub mod shared;

/// Domain modules (vertical slices): records, wire types, transforms, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Base URL, environment variable names and endpoint URL builders.
pub mod network;

/// Transport abstraction.
pub mod fetch;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// reqwest-backed transport.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `NomicsClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{to_json, Interval, PRICE_SCALE};

    // Domain types
    pub use crate::domain::candle::Candle;
    pub use crate::domain::market::{ExchangeMarkets, Market};
    pub use crate::domain::price::PricePair;

    // Pure transforms
    pub use crate::domain::candle::{
        aggregate, all_time_high, from_timestamp, last_n, most_recent, most_recent_non_zero,
        repair_zero_candles,
    };
    pub use crate::domain::market::{
        filter_by_exchange, market_from_pair, market_intersections, supported_exchanges,
    };
    pub use crate::domain::price::convert_base;

    // Client
    pub use crate::client::{NomicsClient, NomicsClientBuilder};
    pub use crate::fetch::Fetch;

    #[cfg(feature = "http")]
    pub use crate::http::NomicsHttp;

    // Errors
    pub use crate::error::{HttpError, SdkError};
}
