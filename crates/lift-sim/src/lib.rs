//! `lift-sim` — tick loop orchestrator for the rust_lift simulator.
//!
//! # Fixed-order tick loop
//!
//! ```text
//! for tick in 0..params.total_ticks():
//!   ① Passengers — fire due returns, generate arrivals, submit calls.
//!   ② Controller — assign pending calls, step active assignments.
//!   ③ Mechanics  — every car advances by dt (motion or timer countdown).
//!   ④ Snapshot   — observer sees the building and fleet read models.
//! ```
//!
//! The whole step is single-threaded and runs in exactly this order every
//! tick; with a fixed seed the run is reproducible byte for byte.  Domain
//! events flow out synchronously through the [`EventBus`][lift_events::EventBus]
//! during ① and ②; snapshots flow out through the [`SimObserver`] in ④.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(params).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{} people carried", sim.people.count());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, CONTRACT_VERSION};
