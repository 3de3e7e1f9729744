//! The `PersonStore` — id-indexed storage and the lifecycle state machine.

use lift_core::{FloorId, PersonId, PersonState, PersonType};

use crate::error::{PeopleError, PeopleResult};
use crate::person::{Person, Route};

/// Owns every person of the run.  Ids are assigned `1..` in spawn order;
/// the vector index is `id - 1`.
///
/// All state transitions go through this store so the forward-only
/// lifecycle (`Waiting → Riding → (Staying → Waiting → Riding)* →
/// Completed`) is enforced in one place.  Out-of-order transitions are
/// controller bugs and trip debug assertions.
#[derive(Default)]
pub struct PersonStore {
    people: Vec<Person>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a person at `start_floor`, already waiting for their first car.
    pub fn spawn(
        &mut self,
        person_type: PersonType,
        start_floor: FloorId,
        route:       Route,
    ) -> PersonId {
        let id = PersonId(self.people.len() as u32 + 1);
        self.people.push(Person {
            id,
            person_type,
            current_floor: start_floor,
            route,
            route_index: 0,
            state: PersonState::Waiting,
        });
        id
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.people.len()
    }

    pub fn get(&self, person: PersonId) -> PeopleResult<&Person> {
        self.index_of(person).map(|i| &self.people[i])
    }

    /// Iterate all people in id order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    /// Number of people currently in `state`.
    pub fn count_in(&self, state: PersonState) -> usize {
        self.people.iter().filter(|p| p.state == state).count()
    }

    // ── Lifecycle transitions ─────────────────────────────────────────────

    /// Waiting → Riding.
    pub fn board(&mut self, person: PersonId) -> PeopleResult<()> {
        let i = self.index_of(person)?;
        let p = &mut self.people[i];
        debug_assert_eq!(p.state, PersonState::Waiting, "{person} boarded while {}", p.state);
        p.state = PersonState::Riding;
        Ok(())
    }

    /// Riding → Staying (route stops remain) or Completed (final stop).
    ///
    /// Advances the route index past every stop matching `floor` and
    /// records the person's new floor.  Returns the new state.
    pub fn alight(&mut self, person: PersonId, floor: FloorId) -> PeopleResult<PersonState> {
        let i = self.index_of(person)?;
        let p = &mut self.people[i];
        debug_assert_eq!(p.state, PersonState::Riding, "{person} alighted while {}", p.state);
        p.current_floor = floor;
        if p.route.stops().get(p.route_index).is_some_and(|s| s.floor == floor) {
            p.route_index += 1;
        }
        p.state = if p.route_index >= p.route.len() {
            PersonState::Completed
        } else {
            PersonState::Staying
        };
        Ok(p.state)
    }

    /// Staying → Waiting (the scheduled return fired).
    pub fn depart_stay(&mut self, person: PersonId) -> PeopleResult<()> {
        let i = self.index_of(person)?;
        let p = &mut self.people[i];
        debug_assert_eq!(p.state, PersonState::Staying, "{person} departed while {}", p.state);
        p.state = PersonState::Waiting;
        Ok(())
    }

    fn index_of(&self, person: PersonId) -> PeopleResult<usize> {
        if person.0 >= 1 && (person.0 as usize) <= self.people.len() {
            Ok(person.0 as usize - 1)
        } else {
            Err(PeopleError::UnknownPerson(person))
        }
    }
}
