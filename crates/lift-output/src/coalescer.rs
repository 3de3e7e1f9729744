//! The snapshot coalescer: capacity 1, drop-oldest, optional wall throttle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, select, Receiver, Sender};

use crate::record::SnapshotRecord;
use crate::sink::SnapshotSink;

/// Tuning knobs for the snapshot coalescer.
#[derive(Debug, Clone)]
pub struct CoalescerConfig {
    /// Publish period while the wall-time throttle is on.
    pub throttle_interval: Duration,
    /// How often the fast path re-checks the throttle flag while idle.
    pub idle_poll: Duration,
}

impl Default for CoalescerConfig {
    fn default() -> Self {
        Self {
            throttle_interval: Duration::from_millis(100),
            idle_poll:         Duration::from_millis(25),
        }
    }
}

/// Producer handle.  `offer` never blocks: when the slot is occupied the
/// older snapshot is discarded in favor of the new one.
#[derive(Clone)]
pub struct SnapshotSender {
    tx: Sender<SnapshotRecord>,
    rx: Receiver<SnapshotRecord>,
}

impl SnapshotSender {
    /// Queue `snapshot`, displacing any unconsumed predecessor.
    pub fn offer(&self, snapshot: SnapshotRecord) {
        let mut snapshot = snapshot;
        loop {
            match self.tx.try_send(snapshot) {
                Ok(()) => return,
                Err(crossbeam_channel::TrySendError::Full(s)) => {
                    // Drop the oldest and retry with the new one.
                    let _ = self.rx.try_recv();
                    snapshot = s;
                }
                Err(crossbeam_channel::TrySendError::Disconnected(_)) => return,
            }
        }
    }
}

/// Handle to the background publish thread.
pub struct SnapshotCoalescer {
    handle:      JoinHandle<()>,
    shutdown_tx: Sender<()>,
    throttled:   Arc<AtomicBool>,
}

impl SnapshotCoalescer {
    /// Start the publish thread over `sink` and return the producer handle.
    pub fn spawn<S: SnapshotSink + 'static>(
        sink:   S,
        config: CoalescerConfig,
    ) -> (SnapshotSender, SnapshotCoalescer) {
        let (tx, rx) = bounded::<SnapshotRecord>(1);
        let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
        let throttled = Arc::new(AtomicBool::new(false));

        let consumer_rx = rx.clone();
        let flag = Arc::clone(&throttled);
        let handle = std::thread::spawn(move || {
            run_coalescer(sink, consumer_rx, shutdown_rx, flag, &config);
        });

        (
            SnapshotSender { tx, rx },
            SnapshotCoalescer { handle, shutdown_tx, throttled },
        )
    }

    /// Flip the wall-time throttle at runtime.
    pub fn set_throttled(&self, on: bool) {
        self.throttled.store(on, Ordering::Relaxed);
    }

    pub fn is_throttled(&self) -> bool {
        self.throttled.load(Ordering::Relaxed)
    }

    /// Signal the thread, publish the most recent pending snapshot
    /// best-effort, and close the sink.
    pub fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        let _ = self.handle.join();
    }
}

fn run_coalescer<S: SnapshotSink>(
    mut sink:  S,
    snapshots: Receiver<SnapshotRecord>,
    shutdown:  Receiver<()>,
    throttled: Arc<AtomicBool>,
    config:    &CoalescerConfig,
) {
    loop {
        if throttled.load(Ordering::Relaxed) {
            // Wall-throttle mode: wake once per period, publish the latest.
            let deadline = Instant::now() + config.throttle_interval;
            let mut stop = false;
            loop {
                let now = Instant::now();
                if now >= deadline {
                    break;
                }
                select! {
                    recv(shutdown) -> _ => { stop = true; break; }
                    default(deadline - now) => {}
                }
            }
            if let Some(latest) = drain_latest(&snapshots, None) {
                publish(&mut sink, &latest);
            }
            if stop {
                break;
            }
        } else {
            // Fast mode: publish as soon as a snapshot shows up, keeping
            // only the newest of any backlog.
            select! {
                recv(snapshots) -> msg => match msg {
                    Ok(first) => {
                        if let Some(latest) = drain_latest(&snapshots, Some(first)) {
                            publish(&mut sink, &latest);
                        }
                    }
                    Err(_) => break, // producers gone
                },
                recv(shutdown) -> _ => break,
                // Idle wake-up so a throttle flip takes effect promptly.
                default(config.idle_poll) => {}
            }
        }
    }

    // Best-effort final publish of whatever is still pending.
    if let Some(latest) = drain_latest(&snapshots, None) {
        publish(&mut sink, &latest);
    }
    if let Err(e) = sink.finish() {
        log::warn!("snapshot sink close failed: {e}");
    }
}

/// Consume everything currently queued, returning only the newest.
fn drain_latest(
    rx:   &Receiver<SnapshotRecord>,
    seed: Option<SnapshotRecord>,
) -> Option<SnapshotRecord> {
    let mut latest = seed;
    while let Ok(snapshot) = rx.try_recv() {
        latest = Some(snapshot);
    }
    latest
}

/// A failed write is logged and dropped; the pipeline keeps running.
fn publish<S: SnapshotSink>(sink: &mut S, snapshot: &SnapshotRecord) {
    if let Err(e) = sink.write_snapshot(snapshot) {
        log::warn!("snapshot sink write failed: {e}");
    }
}
