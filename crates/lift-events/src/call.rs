//! The `CallRequest` value type.

use lift_core::{CallId, Direction, FloorId, PersonId, PersonType};

/// A passenger's request for transport from `origin` to `destination`.
///
/// Cheap to copy; a call lives in exactly one place at any time — the
/// controller's pending queue, one active assignment, or (after the
/// person-alighted event) nowhere.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CallRequest {
    pub call:         CallId,
    pub person:       PersonId,
    pub person_type:  PersonType,
    pub origin:       FloorId,
    pub destination:  FloorId,
    /// Travel direction; never `Idle` for a transport call.
    pub direction:    Direction,
    /// Sim-seconds at which the call was submitted.
    pub requested_at: f64,
}

impl CallRequest {
    /// Build a call; the direction is derived from the floor pair.
    pub fn new(
        call:         CallId,
        person:       PersonId,
        person_type:  PersonType,
        origin:       FloorId,
        destination:  FloorId,
        requested_at: f64,
    ) -> Self {
        Self {
            call,
            person,
            person_type,
            origin,
            destination,
            direction: Direction::of_travel(origin, destination),
            requested_at,
        }
    }
}
