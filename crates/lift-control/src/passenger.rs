//! The passenger controller: arrivals, routes, and scheduled returns.

use lift_arrivals::{next_arrival, RateCurve, ReturnQueue, ScheduledReturn};
use lift_building::Building;
use lift_core::{CallId, Direction, FloorId, PersonState, PersonType, SimRng};
use lift_events::{CallRequest, DomainEvent, Event, EventBus};
use lift_people::{PersonStore, Route};

use crate::error::ControlResult;
use crate::profile::SpawnProfile;

const SOURCE: &str = "PassengerController";

/// How far a due return is pushed back when its passenger has not reached
/// their floor yet (stays are timed from spawn, so a long wait or ride can
/// outlast one).
const RETURN_RETRY_SECS: f64 = 1.0;

/// Generates passengers from the per-type rate curves and fires their
/// scheduled return trips.
///
/// Owns the run's single [`SimRng`]; per spawn it draws, in this order, the
/// destination floor and then the stay length.  The draw order and the
/// fixed `PersonType::ALL` iteration order are part of the determinism
/// contract.
pub struct PassengerController {
    rng:               SimRng,
    horizon_secs:      f64,
    start_of_day_secs: f64,

    /// Arrival curve per type, indexed in `PersonType::ALL` order.
    curves: [RateCurve; 3],

    /// Next sampled arrival instant per type; `None` means "nothing within
    /// the horizon — resample next tick".
    next_arrival: [Option<f64>; 3],

    returns:   ReturnQueue,
    next_call: u32,
    bus:       EventBus,
}

impl PassengerController {
    /// Controller with the built-in diurnal curves.
    pub fn new(seed: u64, horizon_secs: f64, start_of_day_secs: f64, bus: EventBus) -> Self {
        let curves = [
            RateCurve::default_for(PersonType::Resident),
            RateCurve::default_for(PersonType::OfficeWorker),
            RateCurve::default_for(PersonType::Shopper),
        ];
        Self::with_curves(seed, horizon_secs, start_of_day_secs, bus, curves)
    }

    /// Controller with explicit curves, indexed in `PersonType::ALL` order.
    /// Scenario tests use this to silence all but one population.
    pub fn with_curves(
        seed:              u64,
        horizon_secs:      f64,
        start_of_day_secs: f64,
        bus:               EventBus,
        curves:            [RateCurve; 3],
    ) -> Self {
        Self {
            rng: SimRng::new(seed),
            horizon_secs,
            start_of_day_secs,
            curves,
            next_arrival: [None; 3],
            returns:   ReturnQueue::new(),
            next_call: 1,
            bus,
        }
    }

    /// Scheduled returns not yet fired (for tests and summaries).
    #[inline]
    pub fn scheduled_returns(&self) -> usize {
        self.returns.len()
    }

    /// Run one passenger tick: fire due returns, then spawn arrivals.
    pub fn on_tick(
        &mut self,
        now:      f64,
        building: &mut Building,
        elevator: &mut crate::ElevatorController,
        people:   &mut PersonStore,
    ) -> ControlResult<()> {
        self.fire_due_returns(now, building, elevator, people)?;
        self.spawn_arrivals(now, building, elevator, people)?;
        Ok(())
    }

    // ── Scheduled returns ─────────────────────────────────────────────────

    fn fire_due_returns(
        &mut self,
        now:      f64,
        building: &mut Building,
        elevator: &mut crate::ElevatorController,
        people:   &mut PersonStore,
    ) -> ControlResult<()> {
        let mut deferred = Vec::new();
        while let Some(ret) = self.returns.pop_due(now) {
            // The stay clock starts at spawn; if the trip out took longer
            // than the stay, the passenger is not on their floor yet.
            if people.get(ret.person)?.state != PersonState::Staying {
                deferred.push(ScheduledReturn { due_secs: now + RETURN_RETRY_SECS, ..ret });
                continue;
            }

            let call = CallRequest::new(
                self.alloc_call(),
                ret.person,
                ret.person_type,
                ret.origin,
                ret.destination,
                now,
            );

            people.depart_stay(ret.person)?;
            building.floor_mut(ret.origin)?.remove_occupant();
            self.publish(now, DomainEvent::PersonStateChanged {
                person: ret.person,
                state:  PersonState::Waiting,
            });

            elevator.submit(call);
            let new_size = building.floor_mut(ret.origin)?.enqueue(call.direction, ret.person);
            self.publish(now, DomainEvent::QueueSizeChanged {
                floor:     ret.origin,
                direction: call.direction,
                new_size,
            });
        }
        for entry in deferred {
            self.returns.push(entry);
        }
        Ok(())
    }

    // ── Arrivals ──────────────────────────────────────────────────────────

    fn spawn_arrivals(
        &mut self,
        now:      f64,
        building: &mut Building,
        elevator: &mut crate::ElevatorController,
        people:   &mut PersonStore,
    ) -> ControlResult<()> {
        if building.floor_count() < 2 {
            return Ok(()); // a lobby-only building has nowhere to go
        }
        for (i, person_type) in PersonType::ALL.into_iter().enumerate() {
            loop {
                let due = match self.next_arrival[i] {
                    Some(t) => t,
                    None => {
                        let sampled = next_arrival(
                            &self.curves[i],
                            &mut self.rng,
                            now,
                            self.horizon_secs,
                            self.start_of_day_secs,
                        );
                        self.next_arrival[i] = sampled;
                        match sampled {
                            Some(t) => t,
                            None => break, // nothing within the horizon
                        }
                    }
                };
                if due > now {
                    break;
                }

                self.spawn_one(person_type, now, building, elevator, people)?;

                // The process continues from the consumed arrival instant.
                self.next_arrival[i] = next_arrival(
                    &self.curves[i],
                    &mut self.rng,
                    due,
                    self.horizon_secs,
                    self.start_of_day_secs,
                );
                if self.next_arrival[i].is_none() {
                    break;
                }
            }
        }
        Ok(())
    }

    fn spawn_one(
        &mut self,
        person_type: PersonType,
        now:         f64,
        building:    &mut Building,
        elevator:    &mut crate::ElevatorController,
        people:      &mut PersonStore,
    ) -> ControlResult<()> {
        let profile = SpawnProfile::for_type(person_type, building.floor_count());

        // Fixed draw order: destination first, then stay.
        let destination = FloorId(self.rng.gen_range(profile.dest_lo.0..=profile.dest_hi.0));
        let stay_secs = self.rng.gen_range(profile.stay_lo_secs..profile.stay_hi_secs);

        let route = Route::round_trip(destination, stay_secs)?;
        let person = people.spawn(person_type, FloorId::LOBBY, route);

        self.publish(now, DomainEvent::PersonSpawned {
            person,
            person_type,
            floor: FloorId::LOBBY,
        });
        self.publish(now, DomainEvent::PersonStateChanged {
            person,
            state: PersonState::Waiting,
        });

        let call = CallRequest::new(
            self.alloc_call(),
            person,
            person_type,
            FloorId::LOBBY,
            destination,
            now,
        );
        elevator.submit(call);

        let new_size = building
            .floor_mut(FloorId::LOBBY)?
            .enqueue(Direction::Up, person);
        self.publish(now, DomainEvent::QueueSizeChanged {
            floor:     FloorId::LOBBY,
            direction: Direction::Up,
            new_size,
        });

        self.returns.push(ScheduledReturn {
            due_secs:    now + stay_secs,
            person,
            person_type,
            origin:      destination,
            destination: FloorId::LOBBY,
        });
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn alloc_call(&mut self) -> CallId {
        let id = CallId(self.next_call);
        self.next_call += 1;
        id
    }

    fn publish(&self, now: f64, payload: DomainEvent) {
        self.bus.publish(Event::new(now, SOURCE, payload));
    }
}
