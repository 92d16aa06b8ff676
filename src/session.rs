//! Session Coordinator
//!
//! Orchestrates one capture run: spawn the collector and N connection
//! workers, arm a one-shot deadline timer that raises the stop flag,
//! join every worker, then close the channel and wait for the collector
//! to finish draining.
//!
//! Join order matters: the channel is closed (last sender dropped) only
//! after all workers have terminated, so no worker can be caught
//! mid-send and no enqueued sample is lost. Worker failures never
//! escalate past their own task; the session always returns whatever
//! was collected.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::collector;
use crate::config::SessionConfig;
use crate::sample::LatencySample;
use crate::transport::Connector;
use crate::worker;

/// Run one full capture session and return the samples in collector
/// receipt order.
pub async fn run<C: Connector>(connector: Arc<C>, config: SessionConfig) -> Vec<LatencySample> {
    let (tx, rx) = mpsc::channel(config.channel_capacity);
    let stop = Arc::new(AtomicBool::new(false));

    // One-shot deadline. The store is idempotent, so firing after the
    // workers already finished naturally is harmless.
    let timer_stop = stop.clone();
    let duration = config.duration;
    let timer = tokio::spawn(async move {
        tokio::time::sleep(duration).await;
        timer_stop.store(true, Ordering::Release);
        info!("collection window elapsed, stop signalled");
    });

    // Collector runs from the start so the bounded channel always has
    // a consumer behind it.
    let collector = tokio::spawn(collector::drain(rx));

    let mut workers = Vec::with_capacity(config.connections as usize);
    for connection_id in 1..=config.connections {
        workers.push(tokio::spawn(worker::run(
            connector.clone(),
            connection_id,
            tx.clone(),
            stop.clone(),
        )));
    }

    // Primary join point: every spawned worker, success or failure.
    for handle in workers {
        let _ = handle.await;
    }
    debug!("all workers joined");

    // Best-effort cancel; no-op if the deadline already fired.
    timer.abort();

    // All worker senders are gone; dropping ours closes the channel and
    // lets the collector run dry.
    drop(tx);

    collector.await.unwrap_or_default()
}
