//! `lift-output` — durable output for the rust_lift simulator.
//!
//! Two streams leave a run:
//!
//! | Stream    | Policy                          | File              |
//! |-----------|---------------------------------|-------------------|
//! | events    | bounded, **no drop**, batched   | `events.ndjson`   |
//! | snapshots | capacity 1, **drop oldest**     | `snapshots.ndjson`|
//!
//! Each stream has its own background thread consuming a crossbeam channel;
//! the simulation thread never touches a file.  Event producers block when
//! the channel is full (backpressure); snapshot producers never block.
//! Sink errors are logged and swallowed — the simulation must not observe
//! them.
//!
//! [`Pipeline::create`] wires the whole thing to a bus and an output
//! directory and hands back the [`PipelineObserver`] to pass to
//! [`Sim::run`][lift_sim::Sim::run].

pub mod batcher;
pub mod coalescer;
pub mod error;
pub mod journal;
pub mod ndjson;
pub mod observer;
pub mod pipeline;
pub mod record;
pub mod sink;
pub mod snapshot;


pub use batcher::{BatcherConfig, EventBatcher, EventSender};
pub use coalescer::{CoalescerConfig, SnapshotCoalescer, SnapshotSender};
pub use error::{OutputError, OutputResult};
pub use journal::EventJournal;
pub use ndjson::{create_run_files, NdjsonEvents, NdjsonSnapshots};
pub use observer::PipelineObserver;
pub use pipeline::Pipeline;
pub use record::{
    ElevatorSnapshot, EventPayload, EventRecord, EventType, FloorQueueSnapshot, SnapshotRecord,
};
pub use sink::{EventSink, SnapshotSink};
pub use snapshot::assemble_snapshot;
