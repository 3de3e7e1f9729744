//! `PipelineObserver` — bridges `SimObserver` to the snapshot coalescer.

use lift_building::Building;
use lift_core::Tick;
use lift_fleet::Vehicle;
use lift_sim::SimObserver;

use crate::coalescer::SnapshotSender;
use crate::snapshot::assemble_snapshot;

/// A [`SimObserver`] that assembles a snapshot every tick and offers it to
/// the coalescer.  Offering never blocks; under load the coalescer keeps
/// only the newest snapshot.
pub struct PipelineObserver {
    run_id:    u32,
    snapshots: SnapshotSender,
    offered:   u64,
}

impl PipelineObserver {
    pub fn new(run_id: u32, snapshots: SnapshotSender) -> Self {
        Self { run_id, snapshots, offered: 0 }
    }

    /// Snapshots assembled and offered so far (≥ the number published —
    /// coalescing may discard any of them).
    pub fn offered(&self) -> u64 {
        self.offered
    }
}

impl SimObserver for PipelineObserver {
    fn on_snapshot(&mut self, tick: Tick, t: f64, building: &Building, fleet: &[Vehicle]) {
        let snapshot = assemble_snapshot(self.run_id, tick, t, building, fleet);
        self.snapshots.offer(snapshot);
        self.offered += 1;
    }
}
