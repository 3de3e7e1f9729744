//! `lift-people` — passenger records and lifecycle storage.
//!
//! A [`Person`] is created by the passenger controller when the arrival
//! sampler fires, walks a fixed [`Route`] (lobby → destination → lobby),
//! and moves through the forward-only lifecycle in
//! [`PersonState`][lift_core::PersonState].  The [`PersonStore`] owns every
//! person of the run and is the single writer of their state.

pub mod error;
pub mod person;
pub mod store;


pub use error::{PeopleError, PeopleResult};
pub use person::{Person, Route, RouteStop};
pub use store::PersonStore;
