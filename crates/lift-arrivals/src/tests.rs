//! Unit tests for lift-arrivals.

#[cfg(test)]
mod curve_tests {
    use lift_core::PersonType;

    use crate::{RateCurve, RateSegment};

    #[test]
    fn empty_curve_rejected() {
        assert!(RateCurve::new(vec![]).is_err());
    }

    #[test]
    fn overlapping_segments_rejected() {
        let segs = vec![
            RateSegment::new(0.0, 7_200.0, 0.1),
            RateSegment::new(3_600.0, 10_800.0, 0.2),
        ];
        assert!(RateCurve::new(segs).is_err());
    }

    #[test]
    fn out_of_order_segments_rejected() {
        let segs = vec![
            RateSegment::new(7_200.0, 10_800.0, 0.1),
            RateSegment::new(0.0, 3_600.0, 0.2),
        ];
        assert!(RateCurve::new(segs).is_err());
    }

    #[test]
    fn inverted_span_rejected() {
        assert!(RateCurve::new(vec![RateSegment::new(100.0, 50.0, 0.1)]).is_err());
    }

    #[test]
    fn negative_rate_rejected() {
        assert!(RateCurve::new(vec![RateSegment::new(0.0, 10.0, -0.1)]).is_err());
    }

    #[test]
    fn rate_lookup_with_gaps() {
        let curve = RateCurve::new(vec![
            RateSegment::new(3_600.0, 7_200.0, 0.5),
            RateSegment::new(10_800.0, 14_400.0, 0.25),
        ])
        .unwrap();

        assert_eq!(curve.rate_at(0.0), 0.0);
        assert_eq!(curve.rate_at(3_600.0), 0.5);
        assert_eq!(curve.rate_at(7_199.9), 0.5);
        assert_eq!(curve.rate_at(7_200.0), 0.0, "segment end is exclusive");
        assert_eq!(curve.rate_at(12_000.0), 0.25);
        assert_eq!(curve.rate_at(80_000.0), 0.0);
        assert_eq!(curve.max_rate(), 0.5);
    }

    #[test]
    fn default_curves_exist_for_all_types() {
        for pt in PersonType::ALL {
            let curve = RateCurve::default_for(pt);
            assert!(curve.max_rate() > 0.0, "{pt} curve has no arrivals");
            // Every built-in curve must pass the public validation rules.
            assert!(RateCurve::new(curve.segments().to_vec()).is_ok());
        }
    }

    #[test]
    fn office_peak_is_morning() {
        let curve = RateCurve::default_for(PersonType::OfficeWorker);
        let peak = curve.rate_at(8.0 * 3_600.0);
        assert_eq!(peak, curve.max_rate());
        assert!(curve.rate_at(3.0 * 3_600.0) == 0.0, "no arrivals at 03:00");
    }
}

#[cfg(test)]
mod sampler_tests {
    use lift_core::SimRng;

    use crate::{next_arrival, RateCurve, RateSegment};

    fn flat(rate: f64) -> RateCurve {
        RateCurve::new(vec![RateSegment::new(0.0, 86_400.0, rate)]).unwrap()
    }

    #[test]
    fn zero_rate_yields_none() {
        let curve = flat(0.0);
        let mut rng = SimRng::new(1);
        assert_eq!(next_arrival(&curve, &mut rng, 0.0, 3_600.0, 0.0), None);
    }

    #[test]
    fn arrivals_fall_inside_horizon() {
        let curve = flat(0.1);
        let mut rng = SimRng::new(7);
        for _ in 0..200 {
            if let Some(t) = next_arrival(&curve, &mut rng, 100.0, 600.0, 0.0) {
                assert!(t > 100.0 && t < 700.0, "arrival {t} outside (100, 700)");
            }
        }
    }

    #[test]
    fn deterministic_under_seed() {
        let curve = flat(0.05);
        let mut r1 = SimRng::new(12_345);
        let mut r2 = SimRng::new(12_345);
        for _ in 0..50 {
            assert_eq!(
                next_arrival(&curve, &mut r1, 0.0, 3_600.0, 0.0),
                next_arrival(&curve, &mut r2, 0.0, 3_600.0, 0.0)
            );
        }
    }

    #[test]
    fn rate_gap_is_skipped() {
        // Rate only in [1000, 2000): arrivals from t=0 must land there.
        let curve = RateCurve::new(vec![RateSegment::new(1_000.0, 2_000.0, 0.05)]).unwrap();
        let mut rng = SimRng::new(3);
        for _ in 0..50 {
            if let Some(t) = next_arrival(&curve, &mut rng, 0.0, 86_400.0, 0.0) {
                assert!((1_000.0..2_000.0).contains(&t), "arrival {t} in zero-rate span");
            }
        }
    }

    #[test]
    fn mean_gap_tracks_rate() {
        // Flat 0.1/s → expected gap 10 s.  Average 1 000 gaps and allow a
        // generous tolerance; this is a sanity check, not a statistics exam.
        let curve = flat(0.1);
        let mut rng = SimRng::new(99);
        let mut t = 0.0;
        let mut gaps = Vec::new();
        while gaps.len() < 1_000 {
            let next = next_arrival(&curve, &mut rng, t, 86_400.0, 0.0).unwrap();
            gaps.push(next - t);
            t = next;
        }
        let mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
        assert!((mean - 10.0).abs() < 1.5, "mean gap {mean}");
    }
}

#[cfg(test)]
mod returns_tests {
    use lift_core::{FloorId, PersonId, PersonType};

    use crate::{ReturnQueue, ScheduledReturn};

    fn entry(due: f64, person: u32) -> ScheduledReturn {
        ScheduledReturn {
            due_secs:    due,
            person:      PersonId(person),
            person_type: PersonType::Resident,
            origin:      FloorId(5),
            destination: FloorId::LOBBY,
        }
    }

    #[test]
    fn pops_in_due_order() {
        let mut q = ReturnQueue::new();
        q.push(entry(30.0, 1));
        q.push(entry(10.0, 2));
        q.push(entry(20.0, 3));

        assert_eq!(q.next_due(), Some(10.0));
        assert_eq!(q.pop_due(100.0).unwrap().person, PersonId(2));
        assert_eq!(q.pop_due(100.0).unwrap().person, PersonId(3));
        assert_eq!(q.pop_due(100.0).unwrap().person, PersonId(1));
        assert!(q.is_empty());
    }

    #[test]
    fn not_due_stays_queued() {
        let mut q = ReturnQueue::new();
        q.push(entry(50.0, 1));
        assert!(q.pop_due(49.9).is_none());
        assert_eq!(q.len(), 1);
        assert!(q.pop_due(50.0).is_some(), "due exactly now fires");
    }

    #[test]
    fn equal_due_times_order_by_person_id() {
        let mut q = ReturnQueue::new();
        q.push(entry(10.0, 9));
        q.push(entry(10.0, 4));
        assert_eq!(q.pop_due(10.0).unwrap().person, PersonId(4));
        assert_eq!(q.pop_due(10.0).unwrap().person, PersonId(9));
    }
}
