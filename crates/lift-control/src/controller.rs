//! The elevator controller: call assignment and the per-vehicle phase machine.

use std::collections::{BTreeMap, VecDeque};

use lift_building::Building;
use lift_core::VehicleId;
use lift_dispatch::DispatchPolicy;
use lift_events::{CallRequest, DomainEvent, Event, EventBus};
use lift_fleet::{FleetStore, Vehicle, VehicleState};
use lift_people::PersonStore;

use crate::assignment::{ActiveAssignment, AssignmentPhase};
use crate::error::ControlResult;

/// Door dwell at a stop: open (1.0 s) plus close (1.0 s), lumped into one
/// timer.
pub const DOOR_DWELL_SECS: f64 = 2.0;

const SOURCE: &str = "ElevatorController";

/// Owns the pending-call queue and one [`ActiveAssignment`] per busy car.
///
/// The active map is a `BTreeMap` so per-tick stepping visits vehicles in
/// ascending id order — part of the determinism contract.
pub struct ElevatorController {
    pending: VecDeque<CallRequest>,
    active:  BTreeMap<VehicleId, ActiveAssignment>,
    policy:  Box<dyn DispatchPolicy>,
    bus:     EventBus,
    /// Calls that terminated in a person-alighted event.
    completed_calls: u64,
}

impl ElevatorController {
    pub fn new(policy: Box<dyn DispatchPolicy>, bus: EventBus) -> Self {
        Self {
            pending: VecDeque::new(),
            active:  BTreeMap::new(),
            policy,
            bus,
            completed_calls: 0,
        }
    }

    /// Accept a new call: publish call-requested and queue it for assignment.
    pub fn submit(&mut self, call: CallRequest) {
        self.publish(call.requested_at, DomainEvent::CallRequested { call });
        self.pending.push_back(call);
    }

    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn has_assignment(&self, vehicle: VehicleId) -> bool {
        self.active.contains_key(&vehicle)
    }

    /// Calls completed (person alighted) so far.
    #[inline]
    pub fn completed_calls(&self) -> u64 {
        self.completed_calls
    }

    /// Run one controller tick: assign pending calls, then step every active
    /// assignment in vehicle-id order, then drop completed assignments.
    pub fn on_tick(
        &mut self,
        now:      f64,
        fleet:    &mut FleetStore,
        building: &mut Building,
        people:   &mut PersonStore,
    ) -> ControlResult<()> {
        self.policy.begin_tick(now);
        self.assign_pending(now, fleet)?;

        let ids: Vec<VehicleId> = self.active.keys().copied().collect();
        for vehicle_id in ids {
            let Some(mut assignment) = self.active.remove(&vehicle_id) else {
                continue;
            };
            self.step_assignment(vehicle_id, &mut assignment, now, fleet, building, people)?;
            if assignment.phase != AssignmentPhase::Complete {
                self.active.insert(vehicle_id, assignment);
            }
        }
        Ok(())
    }

    // ── Assignment ────────────────────────────────────────────────────────

    /// Hand pending calls to the policy until it names a busy car (the head
    /// must not be starved by skipping it) or the queue empties.
    fn assign_pending(&mut self, now: f64, fleet: &mut FleetStore) -> ControlResult<()> {
        while let Some(head) = self.pending.front().copied() {
            let Some(vehicle_id) = self.policy.select_vehicle(fleet.as_slice(), &head) else {
                break;
            };
            if self.active.contains_key(&vehicle_id) {
                break;
            }
            self.pending.pop_front();

            self.publish(now, DomainEvent::CallAssigned {
                call:               head.call,
                vehicle:            vehicle_id,
                estimated_pickup_t: None, // unknown until an estimator exists
            });

            let vehicle = fleet.vehicle_mut(vehicle_id)?;
            self.command(now, vehicle, |v| v.set_target(head.origin));
            self.active.insert(vehicle_id, ActiveAssignment::new(head));
        }
        Ok(())
    }

    // ── Phase machine ─────────────────────────────────────────────────────

    fn step_assignment(
        &mut self,
        vehicle_id: VehicleId,
        a:          &mut ActiveAssignment,
        now:        f64,
        fleet:      &mut FleetStore,
        building:   &mut Building,
        people:     &mut PersonStore,
    ) -> ControlResult<()> {
        match a.phase {
            AssignmentPhase::GoingToPickup => {
                let vehicle = fleet.vehicle(vehicle_id)?;
                if vehicle.current_floor() == a.primary.origin
                    && vehicle.state() == VehicleState::DoorsOpen
                {
                    let floor = vehicle.current_floor();
                    self.publish(now, DomainEvent::ElevatorArrived { vehicle: vehicle_id, floor });
                    self.publish(now, DomainEvent::DoorsOpened { vehicle: vehicle_id, floor });
                    a.phase = AssignmentPhase::DoorDwellAtPickup;
                }
            }

            AssignmentPhase::DoorDwellAtPickup => {
                let vehicle = fleet.vehicle_mut(vehicle_id)?;
                if !a.pickup_dwell_armed {
                    a.pickup_dwell_armed = true;
                    self.command(now, vehicle, |v| v.begin_door_dwell(DOOR_DWELL_SECS));
                } else if vehicle.state_time_remaining() <= 0.0 {
                    a.phase = AssignmentPhase::Boarding;
                }
            }

            AssignmentPhase::Boarding => {
                self.step_boarding(vehicle_id, a, now, fleet, building, people)?;
            }

            AssignmentPhase::GoingToDropoff => {
                let vehicle = fleet.vehicle(vehicle_id)?;
                let here = vehicle.current_floor();
                if vehicle.state() == VehicleState::DoorsOpen
                    && a.boarded.iter().any(|c| c.destination == here)
                {
                    self.publish(now, DomainEvent::ElevatorArrived { vehicle: vehicle_id, floor: here });
                    self.publish(now, DomainEvent::DoorsOpened { vehicle: vehicle_id, floor: here });
                    a.phase = AssignmentPhase::DoorDwellAtDropoff;
                }
            }

            AssignmentPhase::DoorDwellAtDropoff => {
                let vehicle = fleet.vehicle_mut(vehicle_id)?;
                if !a.dropoff_dwell_armed {
                    a.dropoff_dwell_armed = true;
                    self.command(now, vehicle, |v| v.begin_door_dwell(DOOR_DWELL_SECS));
                } else if vehicle.state_time_remaining() <= 0.0 {
                    a.phase = AssignmentPhase::Unloading;
                }
            }

            AssignmentPhase::Unloading => {
                self.step_unloading(vehicle_id, a, now, fleet, building, people)?;
            }

            AssignmentPhase::Complete => {}
        }
        Ok(())
    }

    /// The boarding phase: collect the co-directional batch, pull people off
    /// the floor queue, load them, and pick the first dropoff target.
    fn step_boarding(
        &mut self,
        vehicle_id: VehicleId,
        a:          &mut ActiveAssignment,
        now:        f64,
        fleet:      &mut FleetStore,
        building:   &mut Building,
        people:     &mut PersonStore,
    ) -> ControlResult<()> {
        let vehicle = fleet.vehicle_mut(vehicle_id)?;

        if vehicle.state() == VehicleState::Loading {
            if vehicle.state_time_remaining() > 0.0 {
                return Ok(()); // still loading
            }
            if let Some(target) = a.next_target.take() {
                // Loading finished — close up and head for the first dropoff.
                let here = vehicle.current_floor();
                self.command(now, vehicle, |v| v.close_doors_to_idle());
                self.publish(now, DomainEvent::DoorsClosed { vehicle: vehicle_id, floor: here });
                if !a.departure_noted {
                    a.departure_noted = true;
                    self.policy.note_departure(vehicle_id, now);
                }
                self.command(now, vehicle, |v| v.set_target(target));
                a.phase = AssignmentPhase::GoingToDropoff;
                return Ok(());
            }
            return Ok(());
        }

        // First entry: begin boarding this tick.
        let remaining = vehicle.capacity_remaining();
        if remaining == 0 {
            // Recoverable anomaly: re-queue the primary at the tail.
            let here = vehicle.current_floor();
            self.publish(now, DomainEvent::CapacityHit {
                call:      a.primary.call,
                person:    a.primary.person,
                vehicle:   vehicle_id,
                floor:     here,
                occupants: vehicle.occupant_count(),
                capacity:  vehicle.capacity(),
            });
            self.pending.push_back(a.primary);
            self.command(now, vehicle, |v| v.close_doors_to_idle());
            self.publish(now, DomainEvent::DoorsClosed { vehicle: vehicle_id, floor: here });
            a.phase = AssignmentPhase::Complete;
            return Ok(());
        }

        // Collect the batch: the primary plus every pending call with the
        // same (origin, direction), up to capacity, preserving pending FIFO
        // order for everything left behind.
        let mut batch = vec![a.primary];
        let mut kept = VecDeque::with_capacity(self.pending.len());
        while let Some(call) = self.pending.pop_front() {
            if batch.len() < remaining
                && call.origin == a.primary.origin
                && call.direction == a.primary.direction
            {
                batch.push(call);
            } else {
                kept.push_back(call);
            }
        }
        self.pending = kept;

        // Pull each boarder off the floor queue (defensively — the queue may
        // disagree with the batch under accounting drift).
        let pickup = a.primary.origin;
        for call in &batch {
            let floor = building.floor_mut(pickup)?;
            if floor.waiting(call.direction) > 0 {
                floor.dequeue(call.direction);
            }
            let new_size = floor.waiting(call.direction);
            self.publish(now, DomainEvent::QueueSizeChanged {
                floor:     pickup,
                direction: call.direction,
                new_size,
            });
        }

        // Load in batch order; anything past capacity goes back to pending.
        let mut boarded_count = 0usize;
        for call in batch {
            if vehicle.is_full() {
                self.pending.push_back(call);
                continue;
            }
            let occupants_after = vehicle.add_passenger(call.person)?;
            people.board(call.person)?;
            self.publish(now, DomainEvent::PersonStateChanged {
                person: call.person,
                state:  lift_core::PersonState::Riding,
            });
            self.publish(now, DomainEvent::PersonBoarded {
                person:  call.person,
                call:    call.call,
                vehicle: vehicle_id,
                floor:   pickup,
                occupants_after,
            });
            vehicle.push_stop(call.destination);
            a.boarded.push(call);
            boarded_count += 1;
        }

        self.command(now, vehicle, |v| v.begin_boarding(boarded_count));
        a.next_target = a.nearest_destination(pickup);
        Ok(())
    }

    /// The unloading phase: let everyone bound for this floor off, then
    /// either finish the assignment or head for the next-nearest dropoff.
    fn step_unloading(
        &mut self,
        vehicle_id: VehicleId,
        a:          &mut ActiveAssignment,
        now:        f64,
        fleet:      &mut FleetStore,
        building:   &mut Building,
        people:     &mut PersonStore,
    ) -> ControlResult<()> {
        let vehicle = fleet.vehicle_mut(vehicle_id)?;
        let here = vehicle.current_floor();

        if vehicle.state() == VehicleState::Unloading {
            if vehicle.state_time_remaining() > 0.0 {
                return Ok(()); // still unloading
            }
            if a.boarded.is_empty() {
                self.command(now, vehicle, |v| v.close_doors_to_idle());
                self.publish(now, DomainEvent::DoorsClosed { vehicle: vehicle_id, floor: here });
                a.phase = AssignmentPhase::Complete;
            } else {
                // More dropoffs remain: next-nearest destination from here.
                let next = a.nearest_destination(here);
                self.command(now, vehicle, |v| v.close_doors_to_idle());
                self.publish(now, DomainEvent::DoorsClosed { vehicle: vehicle_id, floor: here });
                if let Some(target) = next {
                    self.command(now, vehicle, |v| v.set_target(target));
                }
                a.dropoff_dwell_armed = false;
                a.phase = AssignmentPhase::GoingToDropoff;
            }
            return Ok(());
        }

        // First entry: everyone bound for this floor alights now.
        let (leaving, staying): (Vec<CallRequest>, Vec<CallRequest>) =
            a.boarded.iter().copied().partition(|c| c.destination == here);
        a.boarded = staying;

        for call in &leaving {
            vehicle.remove_passenger(call.person);
            let new_state = people.alight(call.person, here)?;
            if new_state == lift_core::PersonState::Staying {
                building.floor_mut(here)?.add_occupant();
            }
            self.publish(now, DomainEvent::PersonStateChanged {
                person: call.person,
                state:  new_state,
            });
            self.publish(now, DomainEvent::PersonAlighted {
                person:          call.person,
                call:            call.call,
                vehicle:         vehicle_id,
                floor:           here,
                occupants_after: vehicle.occupant_count(),
            });
            self.completed_calls += 1;
        }

        vehicle.remove_stop(here);
        self.command(now, vehicle, |v| v.begin_unloading(leaving.len()));
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn publish(&self, now: f64, payload: DomainEvent) {
        self.bus.publish(Event::new(now, SOURCE, payload));
    }

    /// Apply a vehicle command and publish the state change it caused.
    fn command<F>(&self, now: f64, vehicle: &mut Vehicle, f: F)
    where
        F: FnOnce(&mut Vehicle),
    {
        let from = vehicle.state();
        f(vehicle);
        let to = vehicle.state();
        if from != to {
            self.publish(now, DomainEvent::VehicleStateChanged {
                vehicle: vehicle.id(),
                from:    from.as_str(),
                to:      to.as_str(),
            });
        }
    }
}
