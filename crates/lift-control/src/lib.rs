//! `lift-control` — the two controllers that drive a run.
//!
//! # Tick order
//!
//! The simulation driver calls, in this fixed order every tick:
//!
//! ```text
//! ① PassengerController::on_tick — fire due returns, generate arrivals,
//!    submit calls, enqueue floors.
//! ② ElevatorController::on_tick  — assign pending calls, step each active
//!    assignment through its pickup-to-complete phases.
//! ③ FleetStore::update_all       — advance car mechanics by dt.
//! ```
//!
//! Both controllers are strictly single-threaded; all randomness lives in
//! the passenger controller's seeded RNG, and every iteration over dynamic
//! state is id-ordered.  Determinism depends on both.

pub mod assignment;
pub mod controller;
pub mod error;
pub mod passenger;
pub mod profile;

#[cfg(test)]
mod tests;

pub use assignment::{ActiveAssignment, AssignmentPhase};
pub use controller::{ElevatorController, DOOR_DWELL_SECS};
pub use error::{ControlError, ControlResult};
pub use passenger::PassengerController;
pub use profile::SpawnProfile;
