//! Pure transforms over an ascending candle series.
//!
//! Nothing here touches the network. Every function takes the series in
//! ascending timestamp order (as the API returns it) and preserves that order.

use super::Candle;
use crate::error::SdkError;
use crate::shared::truncate;
use rust_decimal::Decimal;

/// Group sizes (in `1h` candles) accepted by [`aggregate`].
pub const AGGREGATION_GROUPS: [u32; 3] = [2, 6, 12];

/// Carry the last traded candle forward over zero-close candles.
///
/// - `close != 0`: passed through and remembered.
/// - `close == 0` after a traded candle: replaced by a copy of the last traded
///   candle stamped with the current timestamp.
/// - `close == 0` before any traded candle: dropped.
///
/// A series without zero candles comes back unchanged.
pub fn repair_zero_candles(candles: &[Candle]) -> Vec<Candle> {
    let mut repaired = Vec::with_capacity(candles.len());
    let mut last_good: Option<&Candle> = None;
    let mut dropped = 0usize;

    for candle in candles {
        if candle.has_trades() {
            repaired.push(candle.clone());
            last_good = Some(candle);
        } else if let Some(good) = last_good {
            repaired.push(good.carried_to(&candle.timestamp));
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, "Dropped leading zero candles");
    }

    repaired
}

/// Merge consecutive groups of `group_hours` base candles into one candle each.
///
/// Each output candle takes the first candle's timestamp and open, the last
/// candle's close, the group's max high, min low and summed volume, all
/// truncated to 8 digits. A trailing group with fewer than `group_hours`
/// candles is not emitted. A summed volume outside `Decimal`'s range is
/// [`SdkError::MalformedResponse`].
///
/// The input is expected to be zero-repaired and gap-free at `1h`.
pub fn aggregate(candles: &[Candle], group_hours: u32) -> Result<Vec<Candle>, SdkError> {
    if !AGGREGATION_GROUPS.contains(&group_hours) {
        return Err(SdkError::InvalidArgument(format!(
            "group size must be one of {:?} hours, got {}",
            AGGREGATION_GROUPS, group_hours
        )));
    }

    let groups = candles.chunks_exact(group_hours as usize);
    let remainder = groups.remainder().len();
    if remainder > 0 {
        tracing::debug!(
            remainder,
            group_hours,
            "Dropped trailing partial aggregation group"
        );
    }

    groups.map(merge_group).collect()
}

fn merge_group(group: &[Candle]) -> Result<Candle, SdkError> {
    let first = &group[0];
    let last = &group[group.len() - 1];

    let mut high = first.high;
    let mut low = first.low;
    let mut volume = Decimal::ZERO;
    for candle in group {
        high = high.max(candle.high);
        low = low.min(candle.low);
        volume = volume.checked_add(candle.volume).ok_or_else(|| {
            SdkError::MalformedResponse(format!(
                "summed volume overflows from {}",
                first.timestamp
            ))
        })?;
    }

    Ok(Candle {
        timestamp: first.timestamp.clone(),
        open: truncate(first.open),
        high: truncate(high),
        low: truncate(low),
        close: truncate(last.close),
        volume: truncate(volume),
    })
}

/// The last candle, or `None` for an empty series.
pub fn most_recent(candles: &[Candle]) -> Option<&Candle> {
    candles.last()
}

/// The last candle whose close is non-zero. Scans the whole series.
pub fn most_recent_non_zero(candles: &[Candle]) -> Option<&Candle> {
    candles.iter().rev().find(|candle| candle.has_trades())
}

/// The final `n` candles, still ascending. Returns everything when `n`
/// exceeds the series length.
pub fn last_n(candles: &[Candle], n: usize) -> &[Candle] {
    &candles[candles.len().saturating_sub(n)..]
}

/// Maximum `high` across the series, truncated to 8 digits.
pub fn all_time_high(candles: &[Candle]) -> Option<Decimal> {
    candles.iter().map(|candle| candle.high).max().map(truncate)
}

/// Suffix of the series starting at the first candle whose timestamp matches
/// `timestamp` (ASCII case-insensitive). Empty when nothing matches.
pub fn from_timestamp<'a>(candles: &'a [Candle], timestamp: &str) -> &'a [Candle] {
    candles
        .iter()
        .position(|candle| candle.timestamp.eq_ignore_ascii_case(timestamp))
        .map(|start| &candles[start..])
        .unwrap_or(&[])
}
