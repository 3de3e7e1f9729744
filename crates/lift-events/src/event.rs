//! The tagged domain-event union and its envelope.

use std::fmt;

use lift_core::{CallId, Direction, FloorId, PersonId, PersonState, PersonType, VehicleId};

use crate::call::CallRequest;

/// Everything observable that happens inside a run.
///
/// One enum, one variant per event kind; the journal adapter in
/// `lift-output` pattern-matches to fill the wire payloads.
#[derive(Clone, PartialEq, Debug)]
pub enum DomainEvent {
    RunStarted {
        floor_count:           u32,
        elevator_count:        u32,
        random_seed:           u64,
        planned_duration_secs: f64,
        scenario_name:         String,
        /// Wire-contract version, "Major.Minor".
        contract_version:      &'static str,
    },
    RunEnded {
        total_people:          u32,
        total_calls_completed: u64,
    },
    PersonSpawned {
        person:      PersonId,
        person_type: PersonType,
        floor:       FloorId,
    },
    PersonStateChanged {
        person: PersonId,
        state:  PersonState,
    },
    CallRequested {
        call: CallRequest,
    },
    CallAssigned {
        call:    CallId,
        vehicle: VehicleId,
        /// Unknown until a travel-time estimator exists.
        estimated_pickup_t: Option<f64>,
    },
    ElevatorArrived {
        vehicle: VehicleId,
        floor:   FloorId,
    },
    DoorsOpened {
        vehicle: VehicleId,
        floor:   FloorId,
    },
    DoorsClosed {
        vehicle: VehicleId,
        floor:   FloorId,
    },
    PersonBoarded {
        person:          PersonId,
        call:            CallId,
        vehicle:         VehicleId,
        floor:           FloorId,
        occupants_after: usize,
    },
    PersonAlighted {
        person:          PersonId,
        call:            CallId,
        vehicle:         VehicleId,
        floor:           FloorId,
        occupants_after: usize,
    },
    /// A car arrived at a pickup with no room left; the call is re-queued.
    CapacityHit {
        call:      CallId,
        person:    PersonId,
        vehicle:   VehicleId,
        floor:     FloorId,
        occupants: usize,
        capacity:  usize,
    },
    VehicleStateChanged {
        vehicle: VehicleId,
        from:    &'static str,
        to:      &'static str,
    },
    QueueSizeChanged {
        floor:     FloorId,
        direction: Direction,
        new_size:  usize,
    },
}

impl fmt::Display for DomainEvent {
    /// Human-readable one-liner; becomes the record's `Message` field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DomainEvent::*;
        match self {
            RunStarted { floor_count, elevator_count, scenario_name, .. } => write!(
                f,
                "run started: scenario '{scenario_name}', {floor_count} floors, {elevator_count} cars"
            ),
            RunEnded { total_people, total_calls_completed } => write!(
                f,
                "run ended: {total_people} people, {total_calls_completed} calls completed"
            ),
            PersonSpawned { person, person_type, floor } => {
                write!(f, "{person_type} {person} spawned on floor {}", floor.0)
            }
            PersonStateChanged { person, state } => write!(f, "{person} is now {state}"),
            CallRequested { call } => write!(
                f,
                "call {} from {} floor {} -> {} ({})",
                call.call.0, call.person, call.origin.0, call.destination.0, call.direction
            ),
            CallAssigned { call, vehicle, .. } => {
                write!(f, "call {} assigned to vehicle {}", call.0, vehicle.0)
            }
            ElevatorArrived { vehicle, floor } => {
                write!(f, "vehicle {} arrived at floor {}", vehicle.0, floor.0)
            }
            DoorsOpened { vehicle, floor } => {
                write!(f, "vehicle {} doors opened at floor {}", vehicle.0, floor.0)
            }
            DoorsClosed { vehicle, floor } => {
                write!(f, "vehicle {} doors closed at floor {}", vehicle.0, floor.0)
            }
            PersonBoarded { person, vehicle, floor, occupants_after, .. } => write!(
                f,
                "{person} boarded vehicle {} at floor {} (occupants {occupants_after})",
                vehicle.0, floor.0
            ),
            PersonAlighted { person, vehicle, floor, occupants_after, .. } => write!(
                f,
                "{person} alighted vehicle {} at floor {} (occupants {occupants_after})",
                vehicle.0, floor.0
            ),
            CapacityHit { call, vehicle, floor, .. } => write!(
                f,
                "vehicle {} at capacity at floor {} — call {} re-queued",
                vehicle.0, floor.0, call.0
            ),
            VehicleStateChanged { vehicle, from, to } => {
                write!(f, "vehicle {} {from} -> {to}", vehicle.0)
            }
            QueueSizeChanged { floor, direction, new_size } => {
                write!(f, "floor {} {direction} queue now {new_size}", floor.0)
            }
        }
    }
}

/// Envelope published on the bus: payload plus sim time and source component.
#[derive(Clone, PartialEq, Debug)]
pub struct Event {
    /// Sim-seconds at which the event occurred.
    pub t: f64,
    /// Name of the emitting component (e.g. "ElevatorController").
    pub source: &'static str,
    pub payload: DomainEvent,
}

impl Event {
    pub fn new(t: f64, source: &'static str, payload: DomainEvent) -> Self {
        Self { t, source, payload }
    }
}
