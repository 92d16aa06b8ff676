//! Binance WebSocket Latency Capture
//!
//! Measures one-way latency between Binance futures bookTicker event
//! timestamps and local receipt time over multiple concurrent WebSocket
//! connections, for a fixed collection window.
//!
//! Design principles:
//! - One worker task per connection, receive timestamp captured before decode
//! - Bounded MPSC handoff to a single collector (the only backpressure)
//! - Write-once atomic stop flag polled at loop top, never mid-receive
//! - Sample order is collector receipt order, interleaved across connections
//! - Worker failures are contained; only output persistence is fatal

pub mod collector;
pub mod config;
pub mod output;
pub mod sample;
pub mod session;
pub mod transport;
pub mod worker;
