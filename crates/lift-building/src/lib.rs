//! `lift-building` — the building model for the rust_lift simulator.
//!
//! A [`Building`] is an ordered array of [`Floor`]s; floor 0 is the lobby.
//! Each floor keeps two strict-FIFO queues of waiting passengers (one per
//! travel direction), an occupant count for people staying on the floor, and
//! the observed maximum length of each queue.
//!
//! No motion lives here — cars belong to `lift-fleet`, and all queue
//! manipulation is driven by the controllers in `lift-control`.

pub mod building;
pub mod error;
pub mod floor;

#[cfg(test)]
mod tests;

pub use building::Building;
pub use error::{BuildingError, BuildingResult};
pub use floor::Floor;
