//! WebSocket Transport Seam
//!
//! Thin trait layer over tokio-tungstenite so the worker and session
//! loops can run against a scripted stream in tests. The production
//! implementation connects to a single fixed Binance stream path; no
//! reconnect support is offered or wanted here.

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::debug;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// A duplex market-data stream reduced to what the worker consumes:
/// text payloads, clean-close, and transport errors.
#[async_trait]
pub trait MarketStream: Send {
    /// Next text payload. `Ok(None)` means the remote closed cleanly;
    /// `Err` is a transport-level failure. Blocks until one of those.
    async fn recv(&mut self) -> Result<Option<String>>;

    /// Release the connection. Best-effort; errors are ignored.
    async fn close(&mut self);
}

/// Establishes one [`MarketStream`] per worker.
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    type Stream: MarketStream + 'static;

    async fn connect(&self, connection_id: u32) -> Result<Self::Stream>;
}

// =============================================================================
// BINANCE IMPLEMENTATION
// =============================================================================

/// Connects to `{endpoint}/ws/{topic}`.
#[derive(Debug, Clone)]
pub struct BinanceConnector {
    url: String,
}

impl BinanceConnector {
    pub fn new(endpoint: &str, topic: &str) -> Self {
        Self {
            url: format!("{}/ws/{}", endpoint, topic),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Connector for BinanceConnector {
    type Stream = BinanceStream;

    async fn connect(&self, connection_id: u32) -> Result<Self::Stream> {
        let (ws, response) = connect_async(self.url.as_str())
            .await
            .with_context(|| format!("websocket connect to {} failed", self.url))?;
        debug!(connection_id, status = %response.status(), "websocket upgrade complete");
        Ok(BinanceStream { ws })
    }
}

/// Unsplit WebSocket stream. Pings are answered inline so the
/// connection survives Binance's keepalive probes; everything that is
/// not a text frame is skipped.
pub struct BinanceStream {
    ws: WsStream,
}

#[async_trait]
impl MarketStream for BinanceStream {
    async fn recv(&mut self) -> Result<Option<String>> {
        loop {
            match self.ws.next().await {
                Some(Ok(Message::Text(text))) => return Ok(Some(text)),
                Some(Ok(Message::Ping(payload))) => {
                    self.ws
                        .send(Message::Pong(payload))
                        .await
                        .context("failed to answer ping")?;
                }
                Some(Ok(Message::Close(_))) | None => return Ok(None),
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e).context("websocket read failed"),
            }
        }
    }

    async fn close(&mut self) {
        let _ = self.ws.close(None).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_url() {
        let connector = BinanceConnector::new("wss://fstream.binance.com", "btcusdt@bookTicker");
        assert_eq!(
            connector.url(),
            "wss://fstream.binance.com/ws/btcusdt@bookTicker"
        );
    }
}
