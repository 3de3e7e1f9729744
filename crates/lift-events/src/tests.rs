//! Unit tests for lift-events.

#[cfg(test)]
mod call_tests {
    use lift_core::{CallId, Direction, FloorId, PersonId, PersonType};

    use crate::CallRequest;

    #[test]
    fn direction_derived_from_floors() {
        let up = CallRequest::new(
            CallId(1),
            PersonId(1),
            PersonType::Resident,
            FloorId(0),
            FloorId(7),
            0.0,
        );
        assert_eq!(up.direction, Direction::Up);

        let down = CallRequest::new(
            CallId(2),
            PersonId(1),
            PersonType::Resident,
            FloorId(7),
            FloorId(0),
            10.0,
        );
        assert_eq!(down.direction, Direction::Down);
    }
}

#[cfg(test)]
mod bus_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use lift_core::{FloorId, PersonId, PersonType};

    use crate::{DomainEvent, Event, EventBus};

    fn spawn_event(t: f64) -> Event {
        Event::new(
            t,
            "test",
            DomainEvent::PersonSpawned {
                person:      PersonId(1),
                person_type: PersonType::Shopper,
                floor:       FloorId(0),
            },
        )
    }

    #[test]
    fn publish_reaches_all_subscribers() {
        let bus = EventBus::new();
        let count = Arc::new(AtomicUsize::new(0));

        let c1 = Arc::clone(&count);
        let _s1 = bus.subscribe(move |_| {
            c1.fetch_add(1, Ordering::SeqCst);
        });
        let c2 = Arc::clone(&count);
        let _s2 = bus.subscribe(move |_| {
            c2.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(spawn_event(0.0));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn handlers_called_in_subscription_order() {
        let bus = EventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let o1 = Arc::clone(&order);
        let _s1 = bus.subscribe(move |_| o1.lock().unwrap().push(1));
        let o2 = Arc::clone(&order);
        let _s2 = bus.subscribe(move |_| o2.lock().unwrap().push(2));
        let o3 = Arc::clone(&order);
        let _s3 = bus.subscribe(move |_| o3.lock().unwrap().push(3));

        bus.publish(spawn_event(1.0));
        assert_eq!(*order.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let bus = EventBus::new();
        let count = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&count);
        let sub = bus.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(bus.handler_count(), 1);

        bus.publish(spawn_event(0.0));
        drop(sub);
        assert_eq!(bus.handler_count(), 0);

        bus.publish(spawn_event(1.0));
        assert_eq!(count.load(Ordering::SeqCst), 1, "no delivery after drop");
    }

    #[test]
    fn handler_may_publish_reentrantly() {
        // A handler publishing on the same bus must not deadlock — dispatch
        // happens outside the registry lock.
        let bus = EventBus::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let inner_bus = bus.clone();
        let seen_c = Arc::clone(&seen);
        let _s = bus.subscribe(move |event| {
            seen_c.fetch_add(1, Ordering::SeqCst);
            if event.t < 1.0 {
                inner_bus.publish(spawn_event(2.0));
            }
        });

        bus.publish(spawn_event(0.0));
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn event_messages_are_human_readable() {
        let event = spawn_event(3.0);
        assert_eq!(event.payload.to_string(), "Shopper PersonId(1) spawned on floor 0");
    }
}
