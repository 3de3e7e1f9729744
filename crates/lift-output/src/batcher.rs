//! The event batcher: bounded, no-drop, periodically flushed.

use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{bounded, select, Receiver, Sender};

use crate::record::EventRecord;
use crate::sink::EventSink;

/// Tuning knobs for the event batcher.
#[derive(Debug, Clone)]
pub struct BatcherConfig {
    /// Bounded queue capacity; producers block when it fills.
    pub channel_cap: usize,
    /// Most records written per sink flush.
    pub max_batch: usize,
    /// Pause between flushes.
    pub flush_interval: Duration,
}

impl Default for BatcherConfig {
    fn default() -> Self {
        Self {
            channel_cap:    10_000,
            max_batch:      512,
            flush_interval: Duration::from_millis(100),
        }
    }
}

/// Producer handle.  `send` blocks while the queue is full — that is the
/// backpressure contract; no event record is ever dropped upstream of the
/// sink.
#[derive(Clone)]
pub struct EventSender(Sender<EventRecord>);

impl EventSender {
    pub fn send(&self, record: EventRecord) {
        // An error means the consumer is gone (pipeline already shut down);
        // at that point the record has nowhere to go.
        let _ = self.0.send(record);
    }
}

/// Handle to the background flush thread.
pub struct EventBatcher {
    handle:      JoinHandle<()>,
    shutdown_tx: Sender<()>,
}

impl EventBatcher {
    /// Start the flush thread over `sink` and return the producer handle.
    pub fn spawn<S: EventSink + 'static>(sink: S, config: BatcherConfig) -> (EventSender, EventBatcher) {
        let (record_tx, record_rx) = bounded::<EventRecord>(config.channel_cap);
        let (shutdown_tx, shutdown_rx) = bounded::<()>(1);

        let handle = std::thread::spawn(move || {
            run_batcher(sink, record_rx, shutdown_rx, &config);
        });

        (
            EventSender(record_tx),
            EventBatcher { handle, shutdown_tx },
        )
    }

    /// Signal the thread, wait for it to drain and flush the queue, and
    /// close the sink.
    pub fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        let _ = self.handle.join();
    }
}

fn run_batcher<S: EventSink>(
    mut sink:    S,
    records:     Receiver<EventRecord>,
    shutdown:    Receiver<()>,
    config:      &BatcherConfig,
) {
    let mut batch: Vec<EventRecord> = Vec::with_capacity(config.max_batch);

    loop {
        // Wait for the first record of the next batch (or a reason to stop).
        select! {
            recv(records) -> msg => match msg {
                Ok(record) => batch.push(record),
                Err(_)     => break, // all producers gone
            },
            recv(shutdown) -> _ => break,
        }

        // Drain whatever else is immediately available, up to max_batch.
        while batch.len() < config.max_batch {
            match records.try_recv() {
                Ok(record) => batch.push(record),
                Err(_) => break,
            }
        }

        flush(&mut sink, &mut batch);

        // Pace the next flush; a shutdown signal cuts the pause short.
        select! {
            recv(shutdown) -> _ => break,
            default(config.flush_interval) => {}
        }
    }

    // Drain everything still queued and flush in max_batch chunks.
    loop {
        while batch.len() < config.max_batch {
            match records.try_recv() {
                Ok(record) => batch.push(record),
                Err(_) => break,
            }
        }
        if batch.is_empty() {
            break;
        }
        flush(&mut sink, &mut batch);
    }

    if let Err(e) = sink.finish() {
        log::warn!("event sink close failed: {e}");
    }
}

/// Write and clear the batch.  Sink errors must not stall the pipeline —
/// they are logged and the records are dropped.
fn flush<S: EventSink>(sink: &mut S, batch: &mut Vec<EventRecord>) {
    if batch.is_empty() {
        return;
    }
    if let Err(e) = sink.write_batch(batch) {
        log::warn!("event sink write failed, dropping {} records: {e}", batch.len());
    }
    batch.clear();
}
