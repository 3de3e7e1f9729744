//! `Person`, `Route`, and `RouteStop`.

use lift_core::{FloorId, PersonId, PersonState, PersonType};

use crate::error::{PeopleError, PeopleResult};

/// One leg target of a route: a floor and how long to stay there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStop {
    pub floor:     FloorId,
    /// Planned stay at `floor` in seconds (0 for a final stop).
    pub stay_secs: f64,
}

/// An ordered, non-empty sequence of destinations.  Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    stops: Vec<RouteStop>,
}

impl Route {
    pub fn new(stops: Vec<RouteStop>) -> PeopleResult<Self> {
        if stops.is_empty() {
            return Err(PeopleError::EmptyRoute);
        }
        if let Some(bad) = stops.iter().find(|s| !(s.stay_secs >= 0.0)) {
            return Err(PeopleError::NegativeStay(bad.stay_secs));
        }
        Ok(Self { stops })
    }

    /// The usual round trip: out to `destination` for `stay_secs`, then back
    /// to the lobby.
    pub fn round_trip(destination: FloorId, stay_secs: f64) -> PeopleResult<Self> {
        Self::new(vec![
            RouteStop { floor: destination, stay_secs },
            RouteStop { floor: FloorId::LOBBY, stay_secs: 0.0 },
        ])
    }

    #[inline]
    pub fn stops(&self) -> &[RouteStop] {
        &self.stops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false // construction forbids empty routes
    }
}

/// One passenger of the run.
#[derive(Debug, Clone)]
pub struct Person {
    pub id:            PersonId,
    pub person_type:   PersonType,
    /// Floor the person is currently on (when not riding).
    pub current_floor: FloorId,
    pub route:         Route,
    /// Index of the next route stop not yet reached.
    pub route_index:   usize,
    pub state:         PersonState,
}

impl Person {
    /// The stop the person is currently heading for, if any remain.
    pub fn next_stop(&self) -> Option<RouteStop> {
        self.route.stops().get(self.route_index).copied()
    }
}
