//! `lift-core` — foundational types for the `rust_lift` traffic simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VehicleId`, `PersonId`, `CallId`, `FloorId`          |
//! | [`time`]        | `Tick`, `SimClock`, `SimParams`                       |
//! | [`rng`]         | `SimRng` (single seeded stream per run)               |
//! | [`direction`]   | `Direction` enum and its wire encoding                |
//! | [`person_type`] | `PersonType` enum                                     |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `lift-output`.                                 |

pub mod direction;
pub mod error;
pub mod ids;
pub mod person_type;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use ids::{CallId, FloorId, PersonId, VehicleId};
pub use person_type::{PersonState, PersonType};
pub use rng::SimRng;
pub use time::{SimClock, SimParams, Tick, SECS_PER_DAY};
