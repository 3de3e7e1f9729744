//! `lift-events` — domain events and the in-process bus.
//!
//! Every observable thing the simulation does is expressed as a
//! [`DomainEvent`] carried inside an [`Event`] envelope (sim time + source).
//! The [`EventBus`] fans events out *synchronously* on the publishing
//! thread, so subscribers (metrics, the journal adapter) can side-effect
//! immediately and in a deterministic order.
//!
//! The bus is thread-safe for subscription management, but handler
//! invocation happens outside the registry lock — a handler may publish
//! further events without deadlocking.

pub mod bus;
pub mod call;
pub mod event;

#[cfg(test)]
mod tests;

pub use bus::{EventBus, Subscription};
pub use call::CallRequest;
pub use event::{DomainEvent, Event};
