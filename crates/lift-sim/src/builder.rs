//! Fluent builder for constructing a [`Sim`].

use lift_arrivals::RateCurve;
use lift_building::Building;
use lift_control::{ElevatorController, PassengerController};
use lift_core::{FloorId, PersonType, SimParams};
use lift_dispatch::{Cooldown, DispatchPolicy, NearestIdle};
use lift_events::EventBus;
use lift_fleet::FleetStore;
use lift_people::PersonStore;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required input
///
/// - [`SimParams`] — floors, fleet, seed, dt, duration, …
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                    |
/// |----------------|--------------------------------------------|
/// | `.policy(p)`   | `Cooldown::new(NearestIdle)` (3 s cooldown)|
/// | `.curves(c)`   | `RateCurve::default_for` per person type   |
/// | `.bus(b)`      | A fresh `EventBus`                         |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(params)
///     .policy(Box::new(NearestIdle))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    params: SimParams,
    policy: Option<Box<dyn DispatchPolicy>>,
    curves: Option<[RateCurve; 3]>,
    bus:    Option<EventBus>,
}

impl SimBuilder {
    pub fn new(params: SimParams) -> Self {
        Self {
            params,
            policy: None,
            curves: None,
            bus:    None,
        }
    }

    /// Supply a dispatch policy (defaults to cooldown-wrapped nearest-idle).
    pub fn policy(mut self, policy: Box<dyn DispatchPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Supply arrival curves in `PersonType::ALL` order (defaults to the
    /// built-in diurnal curves).
    pub fn curves(mut self, curves: [RateCurve; 3]) -> Self {
        self.curves = Some(curves);
        self
    }

    /// Share an existing bus (e.g. one the publication pipeline already
    /// subscribes to).
    pub fn bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Validate the parameters and assemble a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.params.validate()?;

        let bus = self.bus.unwrap_or_default();
        let building = Building::new(self.params.floor_count)?;
        let fleet = FleetStore::new(
            self.params.vehicle_count,
            self.params.vehicle_capacity,
            FloorId::LOBBY,
        )?;

        let policy = self
            .policy
            .unwrap_or_else(|| Box::new(Cooldown::new(NearestIdle)));
        let elevator = ElevatorController::new(policy, bus.clone());

        let curves = self.curves.unwrap_or_else(|| {
            [
                RateCurve::default_for(PersonType::Resident),
                RateCurve::default_for(PersonType::OfficeWorker),
                RateCurve::default_for(PersonType::Shopper),
            ]
        });
        let passengers = PassengerController::with_curves(
            self.params.seed,
            self.params.arrival_horizon_secs,
            self.params.start_of_day_secs,
            bus.clone(),
            curves,
        );

        Ok(Sim {
            clock: self.params.make_clock(),
            params: self.params,
            building,
            fleet,
            people: PersonStore::new(),
            elevator,
            passengers,
            bus,
        })
    }
}
