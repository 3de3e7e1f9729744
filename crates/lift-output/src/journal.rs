//! The journal adapter: domain events → sequenced wire records.

use std::sync::atomic::{AtomicI64, Ordering};

use lift_events::{DomainEvent, Event, EventBus, Subscription};

use crate::batcher::EventSender;
use crate::record::{
    CallAssignedPayload, CallRequestedPayload, CapacityHitPayload, EventPayload, EventRecord,
    EventType, PersonSpawnedPayload, PersonStateChangedPayload, PersonTransferPayload,
    QueueSizeChangedPayload, RunEndedPayload, RunStartedPayload, VehicleAtFloorPayload,
    VehicleStateChangedPayload,
};

/// Subscribes to the bus, stamps each event with the run id and the next
/// sequence number (1, 2, 3, …), and pushes the record into the batcher.
///
/// The push blocks when the batcher queue is full — that backpressure is
/// deliberate and reaches the simulation thread through the synchronous
/// bus.  Keep the journal alive for the whole run; dropping it unsubscribes
/// and closes its producer handle.
pub struct EventJournal {
    _sub: Subscription,
}

impl EventJournal {
    pub fn attach(bus: &EventBus, run_id: u32, producer: EventSender) -> Self {
        let sequence = AtomicI64::new(1);
        let sub = bus.subscribe(move |event| {
            let seq = sequence.fetch_add(1, Ordering::Relaxed);
            producer.send(to_record(run_id, seq, event));
        });
        Self { _sub: sub }
    }
}

/// Flatten one bus event into its wire record.
fn to_record(run_id: u32, sequence: i64, event: &Event) -> EventRecord {
    let (r#type, payload) = match &event.payload {
        DomainEvent::RunStarted {
            floor_count,
            elevator_count,
            random_seed,
            planned_duration_secs,
            scenario_name,
            contract_version,
        } => (
            EventType::RunStarted,
            EventPayload::RunStarted(RunStartedPayload {
                floor_count:              *floor_count,
                elevator_count:           *elevator_count,
                random_seed:              *random_seed,
                planned_duration_seconds: *planned_duration_secs,
                scenario_name:            scenario_name.clone(),
                contract_version:         (*contract_version).to_owned(),
            }),
        ),
        DomainEvent::RunEnded { total_people, total_calls_completed } => (
            EventType::RunEnded,
            EventPayload::RunEnded(RunEndedPayload {
                total_people:          *total_people,
                total_calls_completed: *total_calls_completed,
            }),
        ),
        DomainEvent::PersonSpawned { person, person_type, floor } => (
            EventType::PersonSpawned,
            EventPayload::PersonSpawned(PersonSpawnedPayload {
                person_id:   *person,
                person_type: *person_type,
                floor:       *floor,
            }),
        ),
        DomainEvent::PersonStateChanged { person, state } => (
            EventType::PersonStateChanged,
            EventPayload::PersonStateChanged(PersonStateChangedPayload {
                person_id: *person,
                state:     state.as_str().to_owned(),
            }),
        ),
        DomainEvent::CallRequested { call } => (
            EventType::CallRequested,
            EventPayload::CallRequested(CallRequestedPayload {
                call_id:     call.call,
                person_id:   call.person,
                person_type: call.person_type,
                origin:      call.origin,
                destination: call.destination,
                direction:   call.direction,
                requested_t: call.requested_at,
            }),
        ),
        DomainEvent::CallAssigned { call, vehicle, estimated_pickup_t } => (
            EventType::CallAssigned,
            EventPayload::CallAssigned(CallAssignedPayload {
                call_id:            *call,
                vehicle_id:         *vehicle,
                estimated_pickup_t: *estimated_pickup_t,
            }),
        ),
        DomainEvent::ElevatorArrived { vehicle, floor } => (
            EventType::ElevatorArrived,
            EventPayload::VehicleAtFloor(VehicleAtFloorPayload {
                vehicle_id: *vehicle,
                floor:      *floor,
            }),
        ),
        DomainEvent::DoorsOpened { vehicle, floor } => (
            EventType::DoorsOpened,
            EventPayload::VehicleAtFloor(VehicleAtFloorPayload {
                vehicle_id: *vehicle,
                floor:      *floor,
            }),
        ),
        DomainEvent::DoorsClosed { vehicle, floor } => (
            EventType::DoorsClosed,
            EventPayload::VehicleAtFloor(VehicleAtFloorPayload {
                vehicle_id: *vehicle,
                floor:      *floor,
            }),
        ),
        DomainEvent::PersonBoarded { person, call, vehicle, floor, occupants_after } => (
            EventType::PersonBoarded,
            EventPayload::PersonTransfer(PersonTransferPayload {
                person_id:  *person,
                call_id:    *call,
                vehicle_id: *vehicle,
                floor:      *floor,
                vehicle_occupant_count_after: *occupants_after,
            }),
        ),
        DomainEvent::PersonAlighted { person, call, vehicle, floor, occupants_after } => (
            EventType::PersonAlighted,
            EventPayload::PersonTransfer(PersonTransferPayload {
                person_id:  *person,
                call_id:    *call,
                vehicle_id: *vehicle,
                floor:      *floor,
                vehicle_occupant_count_after: *occupants_after,
            }),
        ),
        DomainEvent::CapacityHit { call, person, vehicle, floor, occupants, capacity } => (
            EventType::CapacityHit,
            EventPayload::CapacityHit(CapacityHitPayload {
                call_id:    *call,
                person_id:  *person,
                vehicle_id: *vehicle,
                floor:      *floor,
                vehicle_occupant_count: *occupants,
                vehicle_capacity:       *capacity,
            }),
        ),
        DomainEvent::VehicleStateChanged { vehicle, from, to } => (
            EventType::VehicleStateChanged,
            EventPayload::VehicleStateChanged(VehicleStateChangedPayload {
                vehicle_id: *vehicle,
                from:       (*from).to_owned(),
                to:         (*to).to_owned(),
            }),
        ),
        DomainEvent::QueueSizeChanged { floor, direction, new_size } => (
            EventType::QueueSizeChanged,
            EventPayload::QueueSizeChanged(QueueSizeChangedPayload {
                floor:          *floor,
                direction:      *direction,
                new_queue_size: *new_size,
            }),
        ),
    };

    EventRecord {
        run_id,
        sequence,
        t: event.t,
        r#type,
        source: event.source.to_owned(),
        message: event.payload.to_string(),
        payload,
    }
}
