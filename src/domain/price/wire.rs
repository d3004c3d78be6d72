//! Wire types for `/prices` responses.

use crate::shared::serde_util::decimal_text;
use serde::Deserialize;

/// Raw price entry: `{ "currency": "BTC", "price": "8000.12" }` (USD).
#[derive(Debug, Clone, Deserialize)]
pub struct PriceResponse {
    pub currency: String,
    #[serde(deserialize_with = "decimal_text::deserialize")]
    pub price: String,
}
