//! Unit tests for lift-dispatch.

use lift_core::{CallId, FloorId, PersonId, PersonType, VehicleId};
use lift_events::CallRequest;
use lift_fleet::{FleetStore, Vehicle};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn call(origin: u32, destination: u32, at: f64) -> CallRequest {
    CallRequest::new(
        CallId(1),
        PersonId(1),
        PersonType::Resident,
        FloorId(origin),
        FloorId(destination),
        at,
    )
}

fn fleet_at(floors: &[u32]) -> Vec<Vehicle> {
    floors
        .iter()
        .enumerate()
        .map(|(i, &f)| Vehicle::new(VehicleId(i as u32 + 1), 8, FloorId(f)).unwrap())
        .collect()
}

#[cfg(test)]
mod nearest_tests {
    use lift_fleet::VehicleState;

    use super::*;
    use crate::{DispatchPolicy, NearestIdle};

    #[test]
    fn picks_nearest_car() {
        let fleet = fleet_at(&[0, 5, 9]);
        let mut policy = NearestIdle;
        // Origin 6: car #2 at floor 5 is nearest.
        assert_eq!(
            policy.select_vehicle(&fleet, &call(6, 0, 0.0)),
            Some(VehicleId(2))
        );
    }

    #[test]
    fn idle_beats_closer_busy() {
        let mut fleet = fleet_at(&[6, 0]);
        // Car #1 sits right at the origin but is moving; idle #2 wins.
        fleet[0].set_target(FloorId(9));
        assert_eq!(fleet[0].state(), VehicleState::Moving);

        let mut policy = NearestIdle;
        assert_eq!(
            policy.select_vehicle(&fleet, &call(6, 9, 0.0)),
            Some(VehicleId(2))
        );
    }

    #[test]
    fn ties_break_by_lowest_id() {
        // Cars 1 and 2 both idle at distance 2 from origin 2.
        let fleet = fleet_at(&[0, 4]);
        let mut policy = NearestIdle;
        assert_eq!(
            policy.select_vehicle(&fleet, &call(2, 5, 0.0)),
            Some(VehicleId(1))
        );
    }

    #[test]
    fn all_busy_still_selects() {
        let mut fleet = fleet_at(&[0, 9]);
        fleet[0].set_target(FloorId(5));
        fleet[1].set_target(FloorId(5));
        let mut policy = NearestIdle;
        // Both busy: nearest busy car is returned, never None.
        assert_eq!(
            policy.select_vehicle(&fleet, &call(8, 0, 0.0)),
            Some(VehicleId(2))
        );
    }

    #[test]
    fn empty_fleet_yields_none() {
        let mut policy = NearestIdle;
        assert_eq!(policy.select_vehicle(&[], &call(0, 5, 0.0)), None);
    }
}

#[cfg(test)]
mod cooldown_tests {
    use super::*;
    use crate::{Cooldown, DispatchPolicy, NearestIdle};

    #[test]
    fn cooling_car_is_skipped() {
        let fleet = fleet_at(&[0, 0]);
        let mut policy = Cooldown::with_cooldown(NearestIdle, 3.0);

        policy.begin_tick(0.0);
        assert_eq!(
            policy.select_vehicle(&fleet, &call(0, 5, 0.0)),
            Some(VehicleId(1))
        );
        policy.note_departure(VehicleId(1), 0.0);

        // At t=1 car #1 is still cooling (until t=3) — #2 is chosen.
        policy.begin_tick(1.0);
        assert_eq!(
            policy.select_vehicle(&fleet, &call(0, 5, 1.0)),
            Some(VehicleId(2))
        );
    }

    #[test]
    fn fallback_when_all_cooling() {
        let fleet = fleet_at(&[0, 0]);
        let mut policy = Cooldown::with_cooldown(NearestIdle, 3.0);

        policy.begin_tick(0.0);
        policy.note_departure(VehicleId(1), 0.0);
        policy.note_departure(VehicleId(2), 1.0);

        // Both cooling at t=2: the anti-starvation branch still assigns,
        // choosing by the underlying policy (lowest id of the tie).
        policy.begin_tick(2.0);
        assert_eq!(
            policy.select_vehicle(&fleet, &call(0, 5, 2.0)),
            Some(VehicleId(1))
        );
    }

    #[test]
    fn cooldown_expires() {
        let fleet = fleet_at(&[0, 9]);
        let mut policy = Cooldown::with_cooldown(NearestIdle, 3.0);

        policy.begin_tick(0.0);
        policy.note_departure(VehicleId(1), 0.0);

        // departed_at + cooldown > now is the cooling test, so at exactly
        // t=3 the car is eligible again.
        policy.begin_tick(3.0);
        assert_eq!(
            policy.select_vehicle(&fleet, &call(0, 5, 3.0)),
            Some(VehicleId(1))
        );
    }

    #[test]
    fn fleet_store_slice_feeds_policies() {
        let store = FleetStore::new(2, 8, FloorId::LOBBY).unwrap();
        let mut policy = Cooldown::new(NearestIdle);
        policy.begin_tick(0.0);
        assert_eq!(
            policy.select_vehicle(store.as_slice(), &call(0, 3, 0.0)),
            Some(VehicleId(1))
        );
    }
}
