//! The bus-subscribed metrics aggregator.

use std::sync::{Arc, Mutex};

use lift_core::{CallId, PersonType};
use lift_events::{DomainEvent, Event, EventBus, Subscription};
use rustc_hash::FxHashMap;

use crate::stats::{MetricsReport, StatSummary};

#[derive(Default)]
struct MetricsState {
    /// call id → (request time, person type), from call-requested.
    calls: FxHashMap<CallId, (f64, PersonType)>,
    /// call id → board time, from person-boarded.
    board_times: FxHashMap<CallId, f64>,
    waits: Vec<f64>,
    rides: Vec<f64>,
    waits_by_type: FxHashMap<PersonType, Vec<f64>>,
}

impl MetricsState {
    fn observe(&mut self, event: &Event) {
        match &event.payload {
            DomainEvent::CallRequested { call } => {
                self.calls.insert(call.call, (call.requested_at, call.person_type));
            }
            DomainEvent::PersonBoarded { call, .. } => {
                self.board_times.insert(*call, event.t);
                if let Some(&(requested_at, person_type)) = self.calls.get(call) {
                    let wait = event.t - requested_at;
                    if wait >= 0.0 {
                        self.waits.push(wait);
                        self.waits_by_type.entry(person_type).or_default().push(wait);
                    }
                }
            }
            DomainEvent::PersonAlighted { call, .. } => {
                if let Some(&board_t) = self.board_times.get(call) {
                    self.rides.push(event.t - board_t);
                }
            }
            _ => {}
        }
    }
}

/// Subscribes to the bus and accumulates wait/ride samples for the run.
///
/// Keep the aggregator alive for as long as metrics should be collected —
/// dropping it unsubscribes.
pub struct MetricsAggregator {
    state: Arc<Mutex<MetricsState>>,
    _sub:  Subscription,
}

impl MetricsAggregator {
    pub fn attach(bus: &EventBus) -> Self {
        let state = Arc::new(Mutex::new(MetricsState::default()));
        let handler_state = Arc::clone(&state);
        let sub = bus.subscribe(move |event| {
            handler_state.lock().expect("metrics state poisoned").observe(event);
        });
        Self { state, _sub: sub }
    }

    /// Wait samples recorded so far (for tests).
    pub fn wait_sample_count(&self) -> usize {
        self.state.lock().expect("metrics state poisoned").waits.len()
    }

    /// Build the report against `wait_target_secs`
    /// (see [`DEFAULT_WAIT_TARGET_SECS`][crate::DEFAULT_WAIT_TARGET_SECS]).
    pub fn report(&self, wait_target_secs: f64) -> MetricsReport {
        let state = self.state.lock().expect("metrics state poisoned");
        let wait_by_type = PersonType::ALL
            .into_iter()
            .filter_map(|pt| {
                state
                    .waits_by_type
                    .get(&pt)
                    .map(|samples| (pt, StatSummary::from_samples(samples, wait_target_secs)))
            })
            .collect();
        MetricsReport {
            wait: StatSummary::from_samples(&state.waits, wait_target_secs),
            ride: StatSummary::from_samples(&state.rides, wait_target_secs),
            wait_by_type,
        }
    }
}
