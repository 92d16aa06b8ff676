//! Binance WebSocket latency capture binary.
//!
//! Runs one fixed-window session against the futures bookTicker stream
//! and writes `latencies.json`. A persistence failure is the only fatal
//! error; everything else is contained in the workers and logged.

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use binance_latency_capture::config::{
    SessionConfig, OUTPUT_FILE, STREAM_TOPIC, WS_ENDPOINT,
};
use binance_latency_capture::output;
use binance_latency_capture::session;
use binance_latency_capture::transport::BinanceConnector;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("binance_latency_capture=info")),
        )
        .init();

    let config = SessionConfig::default();
    let connector = Arc::new(BinanceConnector::new(WS_ENDPOINT, STREAM_TOPIC));
    info!(
        endpoint = WS_ENDPOINT,
        topic = STREAM_TOPIC,
        connections = config.connections,
        duration_secs = config.duration.as_secs(),
        "starting latency capture session"
    );

    let samples = session::run(connector, config).await;
    info!(count = samples.len(), "session complete");

    if let Err(e) = output::persist(&samples, OUTPUT_FILE) {
        error!(error = %e, "failed to persist latency samples");
        std::process::exit(1);
    }
    info!(path = OUTPUT_FILE, count = samples.len(), "latencies saved");
}
