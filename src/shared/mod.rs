//! Shared types and utilities used across all domain modules.

pub mod price;
pub mod serde_util;

pub use price::{parse_decimal, truncate, PRICE_SCALE};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SdkError;

// ─── Interval ────────────────────────────────────────────────────────────────

/// Candle interval.
///
/// `1m`, `5m`, `30m`, `1h` and `1d` are served natively by Nomics. `2h`, `6h`
/// and `12h` are synthetic: they are built locally by merging `1h` candles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1m")]
    Minute1,
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "30m")]
    Minute30,
    #[default]
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "2h")]
    Hour2,
    #[serde(rename = "6h")]
    Hour6,
    #[serde(rename = "12h")]
    Hour12,
    #[serde(rename = "1d")]
    Day1,
}

impl Interval {
    pub const ALL: [Interval; 8] = [
        Interval::Minute1,
        Interval::Minute5,
        Interval::Minute30,
        Interval::Hour1,
        Interval::Hour2,
        Interval::Hour6,
        Interval::Hour12,
        Interval::Day1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1m",
            Self::Minute5 => "5m",
            Self::Minute30 => "30m",
            Self::Hour1 => "1h",
            Self::Hour2 => "2h",
            Self::Hour6 => "6h",
            Self::Hour12 => "12h",
            Self::Day1 => "1d",
        }
    }

    /// Number of `1h` candles merged into one candle of this interval, for
    /// synthetic intervals only.
    pub fn aggregation_hours(&self) -> Option<u32> {
        match self {
            Self::Hour2 => Some(2),
            Self::Hour6 => Some(6),
            Self::Hour12 => Some(12),
            _ => None,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.aggregation_hours().is_some()
    }

    /// The interval actually requested from the API.
    pub fn upstream(&self) -> Interval {
        if self.is_synthetic() {
            Interval::Hour1
        } else {
            *self
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .into_iter()
            .find(|interval| interval.as_str() == s)
            .ok_or_else(|| SdkError::InvalidArgument(format!("unsupported interval '{}'", s)))
    }
}

// ─── Utilities ───────────────────────────────────────────────────────────────

/// Serialize a typed result back to the upstream JSON shape.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, SdkError> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_parse() {
        assert_eq!("6h".parse::<Interval>().unwrap(), Interval::Hour6);
        assert_eq!("1d".parse::<Interval>().unwrap(), Interval::Day1);
        assert!(matches!(
            "4h".parse::<Interval>(),
            Err(SdkError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_interval_aggregation() {
        assert_eq!(Interval::Hour2.aggregation_hours(), Some(2));
        assert_eq!(Interval::Hour12.aggregation_hours(), Some(12));
        assert_eq!(Interval::Hour1.aggregation_hours(), None);
        assert_eq!(Interval::Hour6.upstream(), Interval::Hour1);
        assert_eq!(Interval::Minute30.upstream(), Interval::Minute30);
    }

    #[test]
    fn test_interval_serde() {
        let json = serde_json::to_string(&Interval::Hour12).unwrap();
        assert_eq!(json, "\"12h\"");
        let back: Interval = serde_json::from_str("\"30m\"").unwrap();
        assert_eq!(back, Interval::Minute30);
    }
}
