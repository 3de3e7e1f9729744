//! Sink traits implemented by output backends.

use crate::record::{EventRecord, SnapshotRecord};
use crate::OutputResult;

/// Destination for event-record batches.
///
/// Implementations flush once per batch; the batcher thread treats a
/// returned error as droppable (logged, never propagated to the sim).
pub trait EventSink: Send {
    /// Write one batch of records.
    fn write_batch(&mut self, batch: &[EventRecord]) -> OutputResult<()>;

    /// Flush and close.  Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

/// Destination for coalesced snapshots, one at a time.
pub trait SnapshotSink: Send {
    /// Write (and flush) one snapshot.
    fn write_snapshot(&mut self, snapshot: &SnapshotRecord) -> OutputResult<()>;

    /// Flush and close.  Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}
