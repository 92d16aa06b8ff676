//! Fixed Session Configuration
//!
//! The tunable surface of a capture run. Compile-time constants by
//! design: this tool benchmarks a fixed endpoint under a fixed load,
//! and runs are only comparable when these stay put.

use std::time::Duration;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Binance USD-M futures WebSocket endpoint
pub const WS_ENDPOINT: &str = "wss://fstream.binance.com";

/// Subscription topic (single combined path segment, `/ws/<topic>`)
pub const STREAM_TOPIC: &str = "btcusdt@bookTicker";

/// Parallel WebSocket connections per session
pub const CONNECTION_COUNT: u32 = 5;

/// Wall-clock collection window
pub const COLLECTION_DURATION: Duration = Duration::from_secs(60);

/// Sample channel capacity (smooths bursts; a full channel degrades to
/// synchronous handoff, never drops)
pub const CHANNEL_CAPACITY: usize = 100;

/// Output artifact, created fresh each run
pub const OUTPUT_FILE: &str = "latencies.json";

// =============================================================================
// SESSION CONFIG
// =============================================================================

/// Per-session parameters. Production uses [`Default`]; tests shrink the
/// window and connection count.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Number of concurrent connection workers
    pub connections: u32,
    /// Collection window before the stop flag is raised
    pub duration: Duration,
    /// Bounded sample channel capacity
    pub channel_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            connections: CONNECTION_COUNT,
            duration: COLLECTION_DURATION,
            channel_capacity: CHANNEL_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = SessionConfig::default();
        assert_eq!(config.connections, CONNECTION_COUNT);
        assert_eq!(config.duration, COLLECTION_DURATION);
        assert_eq!(config.channel_capacity, CHANNEL_CAPACITY);
    }
}
