//! tower — reference launcher for the rust_lift simulator.
//!
//! Simulates one business day of traffic in a 25-floor tower with four cars,
//! writing `events.ndjson` and `snapshots.ndjson` into the output directory
//! (first CLI argument, default `./output`) and printing a one-line summary
//! plus the wait/ride metrics report.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use lift_core::SimParams;
use lift_events::EventBus;
use lift_metrics::{MetricsAggregator, DEFAULT_WAIT_TARGET_SECS};
use lift_output::Pipeline;
use lift_sim::SimBuilder;

// ── Scenario constants ────────────────────────────────────────────────────────

const RUN_ID:            u32 = 1;
const FLOOR_COUNT:       u32 = 25;
const VEHICLE_COUNT:     u32 = 4;
const VEHICLE_CAPACITY:  usize = 16;
const SEED:              u64 = 42;
const DURATION_SECS:     f64 = 12.0 * 3_600.0; // 06:00 → 18:00
const START_OF_DAY_SECS: f64 = 6.0 * 3_600.0;  // 06:00
const DT_SECS:           f64 = 0.2;
const FLOOR_SPEED:       f64 = 1.2; // floors per second
const ARRIVAL_HORIZON:   f64 = 3_600.0;

fn main() -> Result<()> {
    let out_dir: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./output".to_string())
        .into();
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let params = SimParams {
        run_id:               RUN_ID,
        scenario_name:        "tower-day".into(),
        floor_count:          FLOOR_COUNT,
        vehicle_count:        VEHICLE_COUNT,
        vehicle_capacity:     VEHICLE_CAPACITY,
        seed:                 SEED,
        duration_secs:        DURATION_SECS,
        start_of_day_secs:    START_OF_DAY_SECS,
        dt_secs:              DT_SECS,
        floor_speed:          FLOOR_SPEED,
        arrival_horizon_secs: ARRIVAL_HORIZON,
    };

    let bus = EventBus::new();
    let metrics = MetricsAggregator::attach(&bus);
    let (pipeline, mut observer) =
        Pipeline::create(&out_dir, RUN_ID, &bus).context("creating output pipeline")?;

    let mut sim = SimBuilder::new(params).bus(bus).build()?;

    let started = Instant::now();
    sim.run(&mut observer)?;
    let elapsed = started.elapsed();
    pipeline.shutdown();

    println!(
        "run {}: {} people, {} calls completed, {} ticks in {:.2?} → {}",
        RUN_ID,
        sim.people.count(),
        sim.elevator.completed_calls(),
        sim.clock.current_tick.0,
        elapsed,
        out_dir.display(),
    );
    print!("{}", metrics.report(DEFAULT_WAIT_TARGET_SECS));

    Ok(())
}
