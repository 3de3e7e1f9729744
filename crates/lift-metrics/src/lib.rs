//! `lift-metrics` — wait and ride statistics for a run.
//!
//! The aggregator subscribes to the event bus and watches three event kinds:
//! call-requested (request time and person type), person-boarded (wait
//! sample), and person-alighted (ride sample).  Because the bus dispatches
//! synchronously on the simulation thread, the shared state's mutex is
//! never contended; it exists so the aggregator handle can be queried after
//! the run without threading state through the driver.

pub mod aggregator;
pub mod stats;

#[cfg(test)]
mod tests;

pub use aggregator::MetricsAggregator;
pub use stats::{nearest_rank_p95, MetricsReport, StatSummary, DEFAULT_WAIT_TARGET_SECS};
