//! Connection Worker
//!
//! Owns one WebSocket connection for the lifetime of the session:
//! receive, timestamp, decode, emit. The receive timestamp is taken
//! before any parsing so decode cost never inflates the measurement.
//!
//! Termination paths:
//! - stop flag observed at loop top (clean; the only clean exit)
//! - transport read error or remote close (logged, no reconnect)
//!
//! Both paths release the connection; the spawned task finishing is the
//! completion signal the coordinator joins on. A malformed message is
//! logged and skipped, never fatal to the worker.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::{Context, Result};
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::sample::{event_ms_to_ns, wall_clock_ns, LatencySample};
use crate::transport::{Connector, MarketStream};

/// Extract the update id (`u`) and event timestamp in milliseconds
/// (`E`) from a bookTicker payload. Any other fields are ignored.
/// Missing or wrong-shaped fields are a recoverable decode error.
pub fn decode_update(payload: &str) -> Result<(u64, i64)> {
    let value: Value = serde_json::from_str(payload).context("malformed message payload")?;
    let update_id = value
        .get("u")
        .and_then(Value::as_u64)
        .context("missing or non-numeric field `u`")?;
    let event_ms = value
        .get("E")
        .and_then(Value::as_i64)
        .context("missing or non-numeric field `E`")?;
    Ok((update_id, event_ms))
}

/// Receive/decode/emit loop for one connection.
///
/// The stop flag is polled only at loop top; a receive already in
/// flight is allowed to finish first. Emitting blocks when the channel
/// is full, which is the session's only backpressure mechanism.
pub async fn run<C: Connector>(
    connector: Arc<C>,
    connection_id: u32,
    tx: mpsc::Sender<LatencySample>,
    stop: Arc<AtomicBool>,
) {
    info!(connection_id, "connecting");
    let mut stream = match connector.connect(connection_id).await {
        Ok(stream) => stream,
        Err(e) => {
            warn!(connection_id, error = %e, "connection failed");
            return;
        }
    };
    info!(connection_id, "connected");

    let mut emitted = 0u64;
    loop {
        if stop.load(Ordering::Relaxed) {
            info!(connection_id, "stop signal observed");
            break;
        }

        let text = match stream.recv().await {
            Ok(Some(text)) => text,
            Ok(None) => {
                info!(connection_id, "stream closed by remote");
                break;
            }
            Err(e) => {
                warn!(connection_id, error = %e, "read error");
                break;
            }
        };

        // Timestamp first, decode after.
        let recv_ns = wall_clock_ns();

        let (update_id, event_ms) = match decode_update(&text) {
            Ok(fields) => fields,
            Err(e) => {
                warn!(connection_id, error = %e, "dropping undecodable message");
                continue;
            }
        };

        let sample = LatencySample {
            connection_id,
            update_id,
            latency_ns: recv_ns - event_ms_to_ns(event_ms),
        };

        // Receiver gone means the session is tearing down.
        if tx.send(sample).await.is_err() {
            warn!(connection_id, "sample channel closed, stopping");
            break;
        }
        emitted += 1;
    }

    stream.close().await;
    info!(connection_id, emitted, "worker finished");
}

// =============================================================================
// TEST SUPPORT
// =============================================================================
