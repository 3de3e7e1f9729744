//! Unit tests for lift-metrics.

#[cfg(test)]
mod stats_tests {
    use crate::{nearest_rank_p95, StatSummary};

    #[test]
    fn p95_empty_is_zero() {
        assert_eq!(nearest_rank_p95(&[]), 0.0);
    }

    #[test]
    fn p95_single_sample() {
        assert_eq!(nearest_rank_p95(&[42.0]), 42.0);
    }

    #[test]
    fn p95_nearest_rank_small_sets() {
        // n=10 → rank = ceil(9.5) = 10 → the largest sample.
        let samples: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        assert_eq!(nearest_rank_p95(&samples), 10.0);

        // n=100 → rank 95 → sorted[94] = 95.
        let samples: Vec<f64> = (1..=100).map(|i| i as f64).collect();
        assert_eq!(nearest_rank_p95(&samples), 95.0);
    }

    #[test]
    fn p95_unsorted_input() {
        let samples = vec![30.0, 10.0, 50.0, 20.0, 40.0];
        // n=5 → rank = ceil(4.75) = 5 → max.
        assert_eq!(nearest_rank_p95(&samples), 50.0);
    }

    #[test]
    fn summary_mean_and_target_share() {
        let samples = vec![10.0, 20.0, 30.0, 90.0];
        let s = StatSummary::from_samples(&samples, 60.0);
        assert_eq!(s.count, 4);
        assert!((s.mean_secs - 37.5).abs() < 1e-12);
        assert_eq!(s.pct_within_target, 75.0);
    }

    #[test]
    fn summary_empty() {
        let s = StatSummary::from_samples(&[], 60.0);
        assert_eq!(s.count, 0);
        assert_eq!(s.mean_secs, 0.0);
        assert_eq!(s.p95_secs, 0.0);
        assert_eq!(s.pct_within_target, 0.0);
    }

    #[test]
    fn target_boundary_is_inclusive() {
        let s = StatSummary::from_samples(&[60.0], 60.0);
        assert_eq!(s.pct_within_target, 100.0);
    }
}

#[cfg(test)]
mod aggregator_tests {
    use lift_core::{CallId, FloorId, PersonId, PersonType, VehicleId};
    use lift_events::{CallRequest, DomainEvent, Event, EventBus};

    use crate::MetricsAggregator;

    fn requested(bus: &EventBus, call: u32, t: f64, person_type: PersonType) {
        let call = CallRequest::new(
            CallId(call),
            PersonId(call),
            person_type,
            FloorId(0),
            FloorId(5),
            t,
        );
        bus.publish(Event::new(t, "test", DomainEvent::CallRequested { call }));
    }

    fn boarded(bus: &EventBus, call: u32, t: f64) {
        bus.publish(Event::new(t, "test", DomainEvent::PersonBoarded {
            person:          PersonId(call),
            call:            CallId(call),
            vehicle:         VehicleId(1),
            floor:           FloorId(0),
            occupants_after: 1,
        }));
    }

    fn alighted(bus: &EventBus, call: u32, t: f64) {
        bus.publish(Event::new(t, "test", DomainEvent::PersonAlighted {
            person:          PersonId(call),
            call:            CallId(call),
            vehicle:         VehicleId(1),
            floor:           FloorId(5),
            occupants_after: 0,
        }));
    }

    #[test]
    fn wait_and_ride_samples_collected() {
        let bus = EventBus::new();
        let metrics = MetricsAggregator::attach(&bus);

        requested(&bus, 1, 0.0, PersonType::Resident);
        boarded(&bus, 1, 12.0);
        alighted(&bus, 1, 30.0);

        let report = metrics.report(60.0);
        assert_eq!(report.wait.count, 1);
        assert!((report.wait.mean_secs - 12.0).abs() < 1e-12);
        assert_eq!(report.ride.count, 1);
        assert!((report.ride.mean_secs - 18.0).abs() < 1e-12);
        assert_eq!(report.wait.pct_within_target, 100.0);
    }

    #[test]
    fn per_type_breakdown() {
        let bus = EventBus::new();
        let metrics = MetricsAggregator::attach(&bus);

        requested(&bus, 1, 0.0, PersonType::Resident);
        boarded(&bus, 1, 10.0);
        requested(&bus, 2, 0.0, PersonType::Shopper);
        boarded(&bus, 2, 30.0);

        let report = metrics.report(60.0);
        assert_eq!(report.wait.count, 2);
        assert_eq!(report.wait_by_type.len(), 2);
        let (pt0, s0) = report.wait_by_type[0];
        assert_eq!(pt0, PersonType::Resident);
        assert!((s0.mean_secs - 10.0).abs() < 1e-12);
        let (pt1, s1) = report.wait_by_type[1];
        assert_eq!(pt1, PersonType::Shopper);
        assert!((s1.mean_secs - 30.0).abs() < 1e-12);
    }

    #[test]
    fn board_without_request_records_no_wait() {
        let bus = EventBus::new();
        let metrics = MetricsAggregator::attach(&bus);

        boarded(&bus, 9, 5.0);
        assert_eq!(metrics.wait_sample_count(), 0);

        // The ride still counts — board time is known.
        alighted(&bus, 9, 25.0);
        let report = metrics.report(60.0);
        assert_eq!(report.ride.count, 1);
        assert!((report.ride.mean_secs - 20.0).abs() < 1e-12);
    }

    #[test]
    fn alight_without_board_ignored() {
        let bus = EventBus::new();
        let metrics = MetricsAggregator::attach(&bus);
        alighted(&bus, 3, 10.0);
        assert_eq!(metrics.report(60.0).ride.count, 0);
    }

    #[test]
    fn dropping_aggregator_unsubscribes() {
        let bus = EventBus::new();
        let metrics = MetricsAggregator::attach(&bus);
        assert_eq!(bus.handler_count(), 1);
        drop(metrics);
        assert_eq!(bus.handler_count(), 0);
    }
}
