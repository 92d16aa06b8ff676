//! Latency Sample Record
//!
//! One measurement per successfully decoded bookTicker update. Samples
//! are immutable once created and carry the id of the connection that
//! produced them.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Nanoseconds per millisecond
pub const NS_PER_MS: i64 = 1_000_000;

/// One one-way latency measurement.
///
/// `latency_ns` is local receive time minus the exchange event
/// timestamp. It may be negative when the local clock trails the
/// exchange clock; that skew is part of the measurement and is
/// reported as-is, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencySample {
    /// Stable worker identity, 1-based
    pub connection_id: u32,
    /// Binance bookTicker update id (`u`), monotonic per stream
    pub update_id: u64,
    /// receive_ns - event_ms * 1_000_000 (signed, skew preserved)
    pub latency_ns: i64,
}

/// Current wall-clock time in Unix nanoseconds.
///
/// Wall clock, not monotonic, because the measurement correlates with
/// the exchange's wall-clock event timestamps. Falls back to 0 outside
/// the representable nanosecond range.
#[inline]
pub fn wall_clock_ns() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap_or_default()
}

/// Convert an exchange millisecond timestamp to Unix nanoseconds.
#[inline]
pub fn event_ms_to_ns(event_ms: i64) -> i64 {
    event_ms * NS_PER_MS
}
