//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter; the
//! continuous simulation clock is derived from it:
//!
//!   sim_seconds = tick * dt_secs
//!
//! Using an integer tick as the canonical time unit means tick arithmetic is
//! exact and two runs with the same `dt` visit exactly the same instants —
//! the continuous clock value is recomputed from the tick each time rather
//! than accumulated, so there is no floating-point drift across a run.
//!
//! Rate curves are defined over a 24-hour day; `time_of_day` maps a sim
//! instant onto seconds-since-midnight using the configured start-of-day.

use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Seconds in one civil day.
pub const SECS_PER_DAY: f64 = 86_400.0;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at 0.2 s per tick a u64 lasts ~117 billion years, so
/// overflow is not a practical concern for any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts, continuous sim-seconds, and time of day.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Seconds since midnight at which sim time 0 falls (e.g. 28 800 = 08:00).
    pub start_of_day_secs: f64,
    /// How many sim-seconds one tick represents.
    pub dt_secs: f64,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock starting at `start_of_day_secs` with the given step.
    pub fn new(start_of_day_secs: f64, dt_secs: f64) -> Self {
        Self {
            start_of_day_secs,
            dt_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Continuous sim time in seconds at the current tick.
    #[inline]
    pub fn now_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.dt_secs
    }

    /// Continuous sim time in seconds at an arbitrary tick.
    #[inline]
    pub fn secs_at(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.dt_secs
    }

    /// Seconds since midnight for the sim instant `sim_secs`.
    ///
    /// Rate curves are defined over `[0, 86_400)`; this folds multi-day runs
    /// back onto the daily cycle.
    #[inline]
    pub fn time_of_day(&self, sim_secs: f64) -> f64 {
        (self.start_of_day_secs + sim_secs).rem_euclid(SECS_PER_DAY)
    }

    /// Break the current time of day into (hour, minute, second) components.
    /// Useful for human-readable logging without a datetime library.
    pub fn hms(&self) -> (u32, u32, u32) {
        let day_secs = self.time_of_day(self.now_secs()).max(0.0) as u64;
        let hours = (day_secs / 3_600) as u32;
        let minutes = ((day_secs % 3_600) / 60) as u32;
        let seconds = (day_secs % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{} ({:02}:{:02}:{:02})", self.current_tick, h, m, s)
    }
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Top-level simulation parameters.
///
/// Typically assembled by the launcher and passed to the simulation builder.
/// `validate()` enforces the construction-time input rules; anything it
/// rejects is a caller bug, not a runtime condition.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Identifier stamped on every emitted record of this run.
    pub run_id: u32,

    /// Human-readable scenario label for the run-started record.
    pub scenario_name: String,

    /// Number of floors, lobby included.  Must be ≥ 1.
    pub floor_count: u32,

    /// Number of cars in the fleet.  Must be ≥ 1.
    pub vehicle_count: u32,

    /// Per-car passenger capacity.  Must be ≥ 1.
    pub vehicle_capacity: usize,

    /// Master RNG seed.  The same seed always produces identical output.
    pub seed: u64,

    /// Total simulated duration in seconds.  Must be ≥ 0.
    pub duration_secs: f64,

    /// Seconds since midnight at which the run starts (e.g. 28 800 = 08:00).
    pub start_of_day_secs: f64,

    /// Sim-seconds per tick.  Must be > 0.
    pub dt_secs: f64,

    /// Car speed in floors per second.  Must be > 0.
    pub floor_speed: f64,

    /// Look-ahead horizon for arrival sampling, in seconds.  Must be > 0.
    pub arrival_horizon_secs: f64,
}

impl SimParams {
    /// Check every construction-time input rule, returning the first failure.
    pub fn validate(&self) -> CoreResult<()> {
        if self.floor_count < 1 {
            return Err(CoreError::Config("floor_count must be >= 1".into()));
        }
        if self.vehicle_count < 1 {
            return Err(CoreError::Config("vehicle_count must be >= 1".into()));
        }
        if self.vehicle_capacity < 1 {
            return Err(CoreError::Config("vehicle_capacity must be >= 1".into()));
        }
        if !(self.dt_secs > 0.0) || !self.dt_secs.is_finite() {
            return Err(CoreError::Config("dt_secs must be a positive finite number".into()));
        }
        if self.duration_secs < 0.0 || !self.duration_secs.is_finite() {
            return Err(CoreError::Config("duration_secs must be >= 0".into()));
        }
        if !(self.floor_speed > 0.0) || !self.floor_speed.is_finite() {
            return Err(CoreError::Config("floor_speed must be a positive finite number".into()));
        }
        if !(0.0..SECS_PER_DAY).contains(&self.start_of_day_secs) {
            return Err(CoreError::Config("start_of_day_secs must be in [0, 86400)".into()));
        }
        if !(self.arrival_horizon_secs > 0.0) {
            return Err(CoreError::Config("arrival_horizon_secs must be > 0".into()));
        }
        Ok(())
    }

    /// Total ticks to simulate (duration rounded up to whole ticks).
    #[inline]
    pub fn total_ticks(&self) -> u64 {
        (self.duration_secs / self.dt_secs).ceil() as u64
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_of_day_secs, self.dt_secs)
    }
}
