//! The in-process typed publish/subscribe bus.

use std::sync::{Arc, Mutex, Weak};

use crate::event::Event;

type Handler = Arc<dyn Fn(&Event) + Send + Sync + 'static>;

struct Registry {
    next_id:  u64,
    handlers: Vec<(u64, Handler)>,
}

/// Synchronous fan-out event bus.
///
/// `publish` invokes each subscribed handler on the calling thread, in
/// subscription order.  The registry lock is held only to snapshot the
/// handler list; dispatch happens outside it, so handlers may publish
/// further events (they are not required to be re-entrant otherwise).
///
/// Cloning the bus yields another handle to the same registry.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<Mutex<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Registry {
                next_id:  1,
                handlers: Vec::new(),
            })),
        }
    }

    /// Register `handler` and return a guard that unregisters it on drop.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        let mut registry = self.inner.lock().expect("event bus poisoned");
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Arc::new(handler)));
        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver `event` to every current subscriber, synchronously.
    pub fn publish(&self, event: Event) {
        // Snapshot under the lock, dispatch outside it.
        let handlers: Vec<Handler> = {
            let registry = self.inner.lock().expect("event bus poisoned");
            registry.handlers.iter().map(|(_, h)| Arc::clone(h)).collect()
        };
        for handler in handlers {
            handler(&event);
        }
    }

    /// Number of live subscriptions (for tests).
    pub fn handler_count(&self) -> usize {
        self.inner.lock().expect("event bus poisoned").handlers.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII subscription guard.  Dropping it unregisters the handler; if the bus
/// itself is already gone the drop is a no-op.
pub struct Subscription {
    id:       u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut registry) = registry.lock() {
                registry.handlers.retain(|(id, _)| *id != self.id);
            }
        }
    }
}
