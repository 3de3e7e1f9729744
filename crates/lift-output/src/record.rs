//! Wire record types — the NDJSON external interface.
//!
//! Field names on the wire are PascalCase (`RunId`, `Sequence`, `T`, …);
//! the serde renames below are the contract, version
//! [`CONTRACT_VERSION`][lift_sim::CONTRACT_VERSION].
//!
//! `EstimatedPickupT` stays `null` until a travel-time estimator exists —
//! JSON has no NaN, so "unknown" is encoded as the null of an `Option`.

use lift_core::{CallId, Direction, FloorId, PersonId, PersonType, VehicleId};
use serde::Serialize;

// ── Event records ─────────────────────────────────────────────────────────────

/// The `Type` tag of an event record.
#[derive(Serialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum EventType {
    RunStarted,
    RunEnded,
    PersonSpawned,
    PersonStateChanged,
    CallRequested,
    CallAssigned,
    ElevatorArrived,
    DoorsOpened,
    DoorsClosed,
    PersonBoarded,
    PersonAlighted,
    CapacityHit,
    VehicleStateChanged,
    QueueSizeChanged,
}

/// One line of `events.ndjson`.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct EventRecord {
    pub run_id:   u32,
    /// Strictly monotonic within a run, starting at 1.
    pub sequence: i64,
    /// Sim-seconds.
    pub t:        f64,
    pub r#type:   EventType,
    pub source:   String,
    pub message:  String,
    pub payload:  EventPayload,
}

/// Type-specific payload object.  Serialized untagged — the `Type` field of
/// the enclosing record is the discriminator.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(untagged)]
pub enum EventPayload {
    RunStarted(RunStartedPayload),
    RunEnded(RunEndedPayload),
    PersonSpawned(PersonSpawnedPayload),
    PersonStateChanged(PersonStateChangedPayload),
    CallRequested(CallRequestedPayload),
    CallAssigned(CallAssignedPayload),
    VehicleAtFloor(VehicleAtFloorPayload),
    PersonTransfer(PersonTransferPayload),
    CapacityHit(CapacityHitPayload),
    VehicleStateChanged(VehicleStateChangedPayload),
    QueueSizeChanged(QueueSizeChangedPayload),
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct RunStartedPayload {
    pub floor_count:              u32,
    pub elevator_count:           u32,
    pub random_seed:              u64,
    pub planned_duration_seconds: f64,
    pub scenario_name:            String,
    pub contract_version:         String,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct RunEndedPayload {
    pub total_people:          u32,
    pub total_calls_completed: u64,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct PersonSpawnedPayload {
    pub person_id:   PersonId,
    pub person_type: PersonType,
    pub floor:       FloorId,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct PersonStateChangedPayload {
    pub person_id: PersonId,
    pub state:     String,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct CallRequestedPayload {
    pub call_id:     CallId,
    pub person_id:   PersonId,
    pub person_type: PersonType,
    pub origin:      FloorId,
    pub destination: FloorId,
    pub direction:   Direction,
    pub requested_t: f64,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct CallAssignedPayload {
    pub call_id:    CallId,
    pub vehicle_id: VehicleId,
    /// `null` while no estimator exists.
    pub estimated_pickup_t: Option<f64>,
}

/// Shared by elevator-arrived, doors-opened, and doors-closed.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleAtFloorPayload {
    pub vehicle_id: VehicleId,
    pub floor:      FloorId,
}

/// Shared by person-boarded and person-alighted.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct PersonTransferPayload {
    pub person_id:  PersonId,
    pub call_id:    CallId,
    pub vehicle_id: VehicleId,
    pub floor:      FloorId,
    pub vehicle_occupant_count_after: usize,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct CapacityHitPayload {
    pub call_id:    CallId,
    pub person_id:  PersonId,
    pub vehicle_id: VehicleId,
    pub floor:      FloorId,
    pub vehicle_occupant_count: usize,
    pub vehicle_capacity:       usize,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleStateChangedPayload {
    pub vehicle_id: VehicleId,
    pub from:       String,
    pub to:         String,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct QueueSizeChangedPayload {
    pub floor:          FloorId,
    pub direction:      Direction,
    pub new_queue_size: usize,
}

// ── Snapshot records ──────────────────────────────────────────────────────────

/// One line of `snapshots.ndjson` — an immutable view of one tick.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct SnapshotRecord {
    pub run_id:    u32,
    pub tick:      i64,
    pub t:         f64,
    pub elevators: Vec<ElevatorSnapshot>,
    pub floors:    Vec<FloorQueueSnapshot>,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ElevatorSnapshot {
    pub vehicle_id:     VehicleId,
    /// Continuous position in floor units.
    pub position_floor: f64,
    pub current_floor:  FloorId,
    pub target_floor:   Option<FloorId>,
    pub direction:      Direction,
    pub state:          String,
    pub capacity:       usize,
    pub occupant_count: usize,
    pub stop_queue_floors: Vec<FloorId>,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct FloorQueueSnapshot {
    pub floor:        FloorId,
    pub waiting_up:   usize,
    pub waiting_down: usize,
    pub current_occupants_on_floor: usize,
}
