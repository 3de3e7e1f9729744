//! End-to-end pipeline assembly: bus → journal → batcher → `events.ndjson`,
//! observer → coalescer → `snapshots.ndjson`.

use std::path::Path;

use lift_events::EventBus;

use crate::batcher::{BatcherConfig, EventBatcher};
use crate::coalescer::{CoalescerConfig, SnapshotCoalescer};
use crate::journal::EventJournal;
use crate::ndjson::create_run_files;
use crate::observer::PipelineObserver;
use crate::OutputResult;

/// Owns both background streams of a run.
///
/// Create before `Sim::run`, pass the returned observer to it, and call
/// [`shutdown`][Pipeline::shutdown] afterwards — shutdown drains the event
/// queue completely (no-drop) and publishes the last pending snapshot
/// best-effort.
pub struct Pipeline {
    journal:   EventJournal,
    batcher:   EventBatcher,
    coalescer: SnapshotCoalescer,
}

impl Pipeline {
    /// Wire a full NDJSON pipeline into `dir` with default tuning.
    pub fn create(
        dir:    &Path,
        run_id: u32,
        bus:    &EventBus,
    ) -> OutputResult<(Pipeline, PipelineObserver)> {
        Self::create_with(dir, run_id, bus, BatcherConfig::default(), CoalescerConfig::default())
    }

    /// Wire a full NDJSON pipeline with explicit tuning.
    pub fn create_with(
        dir:              &Path,
        run_id:           u32,
        bus:              &EventBus,
        batcher_config:   BatcherConfig,
        coalescer_config: CoalescerConfig,
    ) -> OutputResult<(Pipeline, PipelineObserver)> {
        let (event_sink, snapshot_sink) = create_run_files(dir)?;

        let (event_tx, batcher) = EventBatcher::spawn(event_sink, batcher_config);
        let journal = EventJournal::attach(bus, run_id, event_tx);

        let (snapshot_tx, coalescer) = SnapshotCoalescer::spawn(snapshot_sink, coalescer_config);
        let observer = PipelineObserver::new(run_id, snapshot_tx);

        Ok((Pipeline { journal, batcher, coalescer }, observer))
    }

    /// Flip the snapshot wall-time throttle at runtime.
    pub fn set_snapshot_throttled(&self, on: bool) {
        self.coalescer.set_throttled(on);
    }

    /// Stop both streams: unsubscribe from the bus, drain and flush every
    /// queued event record, and publish the newest pending snapshot.
    pub fn shutdown(self) {
        // Dropping the journal closes the producer side of the batcher.
        drop(self.journal);
        self.batcher.shutdown();
        self.coalescer.shutdown();
    }
}
