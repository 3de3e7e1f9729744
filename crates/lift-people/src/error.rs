//! Error types for lift-people.

use lift_core::PersonId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PeopleError {
    #[error("route must have at least one destination")]
    EmptyRoute,

    #[error("route stop has negative stay {0}")]
    NegativeStay(f64),

    #[error("person {0} not found")]
    UnknownPerson(PersonId),
}

pub type PeopleResult<T> = Result<T, PeopleError>;
