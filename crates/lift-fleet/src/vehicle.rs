//! Per-car state: continuous position, motion, and timed sub-states.

use lift_core::{Direction, FloorId, PersonId, VehicleId};

use crate::error::{FleetError, FleetResult};

/// Seconds of loading time per boarding passenger.
pub const BOARD_SECS_PER_PERSON: f64 = 1.0;
/// Seconds of unloading time per alighting passenger.
pub const UNLOAD_SECS_PER_PERSON: f64 = 0.5;

/// Position tolerance for arrival detection; within this of the target the
/// car snaps to the exact floor position.
const ARRIVAL_EPSILON: f64 = 1e-6;

/// What a car is currently doing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum VehicleState {
    /// Doors closed, no assignment (default state).
    #[default]
    Idle,
    /// Travelling toward `target`.
    Moving,
    /// Doors open; `state_time_remaining` counts down the dwell.
    DoorsOpen,
    /// Passengers boarding; no positional change.
    Loading,
    /// Passengers alighting; no positional change.
    Unloading,
    /// Withdrawn from service.
    OutOfService,
}

impl VehicleState {
    /// `true` for the timed service states during which the car cannot move.
    #[inline]
    pub fn is_timed_service(self) -> bool {
        matches!(
            self,
            VehicleState::DoorsOpen | VehicleState::Loading | VehicleState::Unloading
        )
    }

    /// Human-readable label, used in record payloads and summaries.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleState::Idle         => "Idle",
            VehicleState::Moving       => "Moving",
            VehicleState::DoorsOpen    => "DoorsOpen",
            VehicleState::Loading      => "Loading",
            VehicleState::Unloading    => "Unloading",
            VehicleState::OutOfService => "OutOfService",
        }
    }
}

impl std::fmt::Display for VehicleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One car of the fleet.
///
/// Lives for the whole run.  The occupant list never exceeds `capacity`
/// at any observable point.
#[derive(Debug, Clone)]
pub struct Vehicle {
    id:       VehicleId,
    capacity: usize,

    /// Continuous floor position (floor 0 = 0.0, floor 1 = 1.0, …).
    position: f64,

    /// Floor the car is headed to (or last arrived at).
    target: Option<FloorId>,

    direction: Direction,
    state:     VehicleState,

    /// People on board, in boarding order.
    occupants: Vec<PersonId>,

    /// Seconds left in the current timed sub-state.
    state_time_remaining: f64,

    /// Planned dropoff floors for the active assignment, maintained by the
    /// controller.  Exists for snapshot observability.
    stop_queue: Vec<FloorId>,
}

impl Vehicle {
    /// Create a car at `start_floor` with doors closed.
    ///
    /// Errors on a non-positive or sentinel id and on zero capacity.
    pub fn new(id: VehicleId, capacity: usize, start_floor: FloorId) -> FleetResult<Self> {
        if id == VehicleId::INVALID || id.0 == 0 {
            return Err(FleetError::InvalidId);
        }
        if capacity == 0 {
            return Err(FleetError::InvalidCapacity);
        }
        Ok(Self {
            id,
            capacity,
            position:             start_floor.as_position(),
            target:               None,
            direction:            Direction::Idle,
            state:                VehicleState::Idle,
            occupants:            Vec::new(),
            state_time_remaining: 0.0,
            stop_queue:           Vec::new(),
        })
    }

    // ── Read model ────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> VehicleId {
        self.id
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Floor the car is logically at: position rounded half away from zero.
    #[inline]
    pub fn current_floor(&self) -> FloorId {
        FloorId(self.position.round().max(0.0) as u32)
    }

    #[inline]
    pub fn target(&self) -> Option<FloorId> {
        self.target
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn state(&self) -> VehicleState {
        self.state
    }

    #[inline]
    pub fn state_time_remaining(&self) -> f64 {
        self.state_time_remaining
    }

    #[inline]
    pub fn occupants(&self) -> &[PersonId] {
        &self.occupants
    }

    #[inline]
    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupants.len() >= self.capacity
    }

    #[inline]
    pub fn capacity_remaining(&self) -> usize {
        self.capacity - self.occupants.len()
    }

    #[inline]
    pub fn stop_queue(&self) -> &[FloorId] {
        &self.stop_queue
    }

    // ── Commands (invoked by the controller) ──────────────────────────────

    /// Head for `floor`.
    ///
    /// If the car is already at `floor` the doors open immediately with zero
    /// dwell (the controller arms the real dwell afterwards); otherwise the
    /// car starts moving toward it.
    pub fn set_target(&mut self, floor: FloorId) {
        self.target = Some(floor);
        if floor == self.current_floor() {
            self.position             = floor.as_position();
            self.state                = VehicleState::DoorsOpen;
            self.direction            = Direction::Idle;
            self.state_time_remaining = 0.0;
        } else {
            self.state                = VehicleState::Moving;
            self.direction            = Direction::of_travel(self.current_floor(), floor);
            self.state_time_remaining = 0.0;
        }
    }

    /// Hold the doors open for `seconds`.
    pub fn begin_door_dwell(&mut self, seconds: f64) {
        self.state                = VehicleState::DoorsOpen;
        self.direction            = Direction::Idle;
        self.state_time_remaining = seconds.max(0.0);
    }

    /// Start loading `count` passengers.
    pub fn begin_boarding(&mut self, count: usize) {
        self.state                = VehicleState::Loading;
        self.state_time_remaining = count as f64 * BOARD_SECS_PER_PERSON;
    }

    /// Start unloading `count` passengers.
    pub fn begin_unloading(&mut self, count: usize) {
        self.state                = VehicleState::Unloading;
        self.state_time_remaining = count as f64 * UNLOAD_SECS_PER_PERSON;
    }

    /// Close the doors and go idle.
    pub fn close_doors_to_idle(&mut self) {
        self.state                = VehicleState::Idle;
        self.direction            = Direction::Idle;
        self.state_time_remaining = 0.0;
    }

    /// Add a passenger.  Returns the new occupant count.
    ///
    /// Boarding past capacity is a controller bug, not an operational
    /// condition — the capacity check belongs in the boarding loop.
    pub fn add_passenger(&mut self, person: PersonId) -> FleetResult<usize> {
        if self.is_full() {
            return Err(FleetError::AtCapacity {
                vehicle:  self.id,
                capacity: self.capacity,
            });
        }
        self.occupants.push(person);
        Ok(self.occupants.len())
    }

    /// Remove a passenger (O(n) list removal).  Returns whether present.
    pub fn remove_passenger(&mut self, person: PersonId) -> bool {
        match self.occupants.iter().position(|&p| p == person) {
            Some(i) => {
                self.occupants.remove(i);
                true
            }
            None => false,
        }
    }

    /// Record a planned dropoff floor (skips duplicates).
    pub fn push_stop(&mut self, floor: FloorId) {
        if !self.stop_queue.contains(&floor) {
            self.stop_queue.push(floor);
        }
    }

    /// Drop a floor from the planned stops (e.g. after serving it).
    pub fn remove_stop(&mut self, floor: FloorId) {
        self.stop_queue.retain(|&f| f != floor);
    }

    // ── Mechanics ─────────────────────────────────────────────────────────

    /// Advance the car by `dt` seconds at `speed` floors per second.
    ///
    /// Timed service states only count down — no positional change.  A
    /// moving car approaches its target without overshooting and snaps to
    /// the exact floor position on arrival, opening its doors (zero dwell)
    /// as the arrival handshake.
    pub fn update(&mut self, dt: f64, speed: f64) -> FleetResult<()> {
        if self.state.is_timed_service() {
            self.state_time_remaining = (self.state_time_remaining - dt).max(0.0);
            return Ok(());
        }

        if self.state == VehicleState::Moving {
            let Some(target) = self.target else {
                return Err(FleetError::NoTarget(self.id));
            };
            let goal      = target.as_position();
            let remaining = goal - self.position;
            let step      = (speed * dt).min(remaining.abs());
            self.position += step.copysign(remaining);
            self.direction = if remaining > 0.0 { Direction::Up } else { Direction::Down };

            if (self.position - goal).abs() < ARRIVAL_EPSILON {
                self.position             = goal;
                self.direction            = Direction::Idle;
                self.state                = VehicleState::DoorsOpen;
                self.state_time_remaining = 0.0;
            }
        }

        Ok(())
    }
}
