//! Snapshot assembly — immutable per-tick copies of the live read models.

use lift_building::Building;
use lift_core::Tick;
use lift_fleet::Vehicle;

use crate::record::{ElevatorSnapshot, FloorQueueSnapshot, SnapshotRecord};

/// Build a [`SnapshotRecord`] from the live building and fleet.
///
/// Every contained sequence is freshly copied — the consumer may hold the
/// snapshot indefinitely without aliasing simulation state.  Floor queue
/// *counts* are read; the queues themselves are never exposed.
pub fn assemble_snapshot(
    run_id:   u32,
    tick:     Tick,
    t:        f64,
    building: &Building,
    fleet:    &[Vehicle],
) -> SnapshotRecord {
    let elevators = fleet
        .iter()
        .map(|v| ElevatorSnapshot {
            vehicle_id:        v.id(),
            position_floor:    v.position(),
            current_floor:     v.current_floor(),
            target_floor:      v.target(),
            direction:         v.direction(),
            state:             v.state().as_str().to_owned(),
            capacity:          v.capacity(),
            occupant_count:    v.occupant_count(),
            stop_queue_floors: v.stop_queue().to_vec(),
        })
        .collect();

    let floors = building
        .floors()
        .map(|f| FloorQueueSnapshot {
            floor:        f.id(),
            waiting_up:   f.waiting_up(),
            waiting_down: f.waiting_down(),
            current_occupants_on_floor: f.occupants(),
        })
        .collect();

    SnapshotRecord {
        run_id,
        tick: tick.0 as i64,
        t,
        elevators,
        floors,
    }
}
