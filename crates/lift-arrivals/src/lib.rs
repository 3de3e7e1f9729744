//! `lift-arrivals` — passenger arrival generation primitives.
//!
//! # What lives here
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`curve`]   | Piecewise-constant diurnal [`RateCurve`] per person type |
//! | [`sampler`] | Non-homogeneous Poisson next-arrival via thinning        |
//! | [`returns`] | [`ReturnQueue`] — min-heap of scheduled return trips     |
//!
//! The passenger controller in `lift-control` drives all three with the
//! run's single seeded RNG; nothing here holds randomness of its own, which
//! keeps the determinism contract in one place.

pub mod curve;
pub mod error;
pub mod returns;
pub mod sampler;

#[cfg(test)]
mod tests;

pub use curve::{RateCurve, RateSegment};
pub use error::{ArrivalsError, ArrivalsResult};
pub use returns::{ReturnQueue, ScheduledReturn};
pub use sampler::next_arrival;
