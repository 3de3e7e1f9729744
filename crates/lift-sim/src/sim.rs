//! The `Sim` struct and its tick loop.

use lift_building::Building;
use lift_control::{ElevatorController, PassengerController};
use lift_core::{SimClock, SimParams};
use lift_events::{DomainEvent, Event, EventBus};
use lift_fleet::FleetStore;
use lift_people::PersonStore;

use crate::{SimObserver, SimResult};

/// Version of the emitted record contract, "Major.Minor".
pub const CONTRACT_VERSION: &str = "1.0";

const SOURCE: &str = "Sim";

/// The main simulation runner.
///
/// Owns all domain state and drives the fixed-order tick loop (see the
/// crate docs).  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run parameters (validated at build time).
    pub params: SimParams,

    /// Simulation clock — tick counter plus the dt/time-of-day mapping.
    pub clock: SimClock,

    pub building: Building,
    pub fleet:    FleetStore,
    pub people:   PersonStore,

    pub elevator:   ElevatorController,
    pub passengers: PassengerController,

    /// The bus all domain events flow through.  Subscribe before `run` to
    /// observe the whole run.
    pub bus: EventBus,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `params.end_tick()`, bracketed by the
    /// run-started and run-ended events.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.bus.publish(Event::new(
            self.clock.now_secs(),
            SOURCE,
            DomainEvent::RunStarted {
                floor_count:           self.params.floor_count,
                elevator_count:        self.params.vehicle_count,
                random_seed:           self.params.seed,
                planned_duration_secs: self.params.duration_secs,
                scenario_name:         self.params.scenario_name.clone(),
                contract_version:      CONTRACT_VERSION,
            },
        ));

        while self.clock.current_tick < self.params.end_tick() {
            self.process_tick(observer)?;
        }

        self.bus.publish(Event::new(
            self.clock.now_secs(),
            SOURCE,
            DomainEvent::RunEnded {
                total_people:          self.people.count() as u32,
                total_calls_completed: self.elevator.completed_calls(),
            },
        ));
        observer.on_run_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`,
    /// publishes no run bracket events).  Useful for tests and incremental
    /// stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.process_tick(observer)?;
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let tick = self.clock.current_tick;
        let now = self.clock.now_secs();
        observer.on_tick_start(tick);

        // ── Phase 1: arrivals and scheduled returns ───────────────────────
        self.passengers
            .on_tick(now, &mut self.building, &mut self.elevator, &mut self.people)?;

        // ── Phase 2: call assignment and the per-vehicle phase machine ────
        self.elevator
            .on_tick(now, &mut self.fleet, &mut self.building, &mut self.people)?;

        // ── Phase 3: car mechanics ────────────────────────────────────────
        self.fleet
            .update_all(self.params.dt_secs, self.params.floor_speed)?;

        // ── Phase 4: snapshot hand-off ────────────────────────────────────
        observer.on_snapshot(tick, now, &self.building, self.fleet.as_slice());

        observer.on_tick_end(tick);
        self.clock.advance();
        Ok(())
    }
}
