//! Sample Collector
//!
//! Single consumer of the shared sample channel. Runs alongside the
//! workers from session start so a full channel always drains, and
//! returns only once the channel is closed and empty. The accumulated
//! vector is owned here exclusively and handed to the coordinator via
//! the task's join handle, so no lock guards it.

use tokio::sync::mpsc;
use tracing::debug;

use crate::sample::LatencySample;

/// Drain the channel into an ordered sequence. Order is strict receipt
/// order: FIFO per sender, interleaved across connections by arrival.
pub async fn drain(mut rx: mpsc::Receiver<LatencySample>) -> Vec<LatencySample> {
    let mut samples = Vec::new();
    while let Some(sample) = rx.recv().await {
        samples.push(sample);
    }
    debug!(count = samples.len(), "collector drained");
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_drains_in_receipt_order_until_close() {
        let (tx, rx) = mpsc::channel(4);
        let collector = tokio::spawn(drain(rx));

        for update_id in [5u64, 3, 9] {
            tx.send(LatencySample {
                connection_id: 1,
                update_id,
                latency_ns: 0,
            })
            .await
            .unwrap();
        }
        drop(tx);

        let samples = collector.await.unwrap();
        let ids: Vec<u64> = samples.iter().map(|s| s.update_id).collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }

    #[tokio::test]
    async fn test_empty_channel_yields_empty_sequence() {
        let (tx, rx) = mpsc::channel::<LatencySample>(1);
        drop(tx);
        assert!(drain(rx).await.is_empty());
    }
}
