//! Unit tests for lift-building.

#[cfg(test)]
mod building_tests {
    use lift_core::FloorId;

    use crate::Building;

    #[test]
    fn zero_floors_rejected() {
        assert!(Building::new(0).is_err());
    }

    #[test]
    fn floor_access_bounds_checked() {
        let b = Building::new(5).unwrap();
        assert!(b.floor(FloorId(4)).is_ok());
        assert!(b.floor(FloorId(5)).is_err());
        assert_eq!(b.top_floor(), FloorId(4));
        assert!(b.contains(FloorId(0)));
        assert!(!b.contains(FloorId(7)));
    }

    #[test]
    fn single_floor_building_is_legal() {
        let b = Building::new(1).unwrap();
        assert_eq!(b.floor_count(), 1);
        assert_eq!(b.top_floor(), FloorId::LOBBY);
    }
}

#[cfg(test)]
mod floor_tests {
    use lift_core::{Direction, FloorId, PersonId};

    use crate::Building;

    #[test]
    fn queues_are_fifo() {
        let mut b = Building::new(3).unwrap();
        let f = b.floor_mut(FloorId(0)).unwrap();
        f.enqueue(Direction::Up, PersonId(1));
        f.enqueue(Direction::Up, PersonId(2));
        f.enqueue(Direction::Up, PersonId(3));

        assert_eq!(f.dequeue(Direction::Up), Some(PersonId(1)));
        assert_eq!(f.dequeue(Direction::Up), Some(PersonId(2)));
        assert_eq!(f.dequeue(Direction::Up), Some(PersonId(3)));
        assert_eq!(f.dequeue(Direction::Up), None);
    }

    #[test]
    fn directions_are_independent() {
        let mut b = Building::new(3).unwrap();
        let f = b.floor_mut(FloorId(1)).unwrap();
        f.enqueue(Direction::Up, PersonId(1));
        f.enqueue(Direction::Down, PersonId(2));

        assert_eq!(f.waiting_up(), 1);
        assert_eq!(f.waiting_down(), 1);
        assert_eq!(f.dequeue(Direction::Down), Some(PersonId(2)));
        assert_eq!(f.waiting_up(), 1, "up queue untouched by down dequeue");
    }

    #[test]
    fn enqueue_reports_new_length() {
        let mut b = Building::new(2).unwrap();
        let f = b.floor_mut(FloorId(0)).unwrap();
        assert_eq!(f.enqueue(Direction::Up, PersonId(1)), 1);
        assert_eq!(f.enqueue(Direction::Up, PersonId(2)), 2);
    }

    #[test]
    fn dequeue_empty_is_defensive_not_fatal() {
        let mut b = Building::new(2).unwrap();
        let f = b.floor_mut(FloorId(0)).unwrap();
        assert_eq!(f.dequeue(Direction::Down), None);
    }

    #[test]
    fn maxima_track_high_water_marks() {
        let mut b = Building::new(2).unwrap();
        let f = b.floor_mut(FloorId(0)).unwrap();
        for i in 1..=4 {
            f.enqueue(Direction::Up, PersonId(i));
        }
        f.dequeue(Direction::Up);
        f.dequeue(Direction::Up);
        // Maximum stays at the peak even after the queue shrinks.
        assert_eq!(f.max_waiting_up(), 4);
        assert_eq!(f.waiting_up(), 2);
        assert_eq!(f.max_waiting_down(), 0);
    }

    #[test]
    fn occupants_add_remove() {
        let mut b = Building::new(2).unwrap();
        let f = b.floor_mut(FloorId(1)).unwrap();
        f.add_occupant();
        f.add_occupant();
        assert_eq!(f.occupants(), 2);
        f.remove_occupant();
        assert_eq!(f.occupants(), 1);
    }

    #[test]
    fn total_waiting_sums_all_queues() {
        let mut b = Building::new(3).unwrap();
        b.floor_mut(FloorId(0)).unwrap().enqueue(Direction::Up, PersonId(1));
        b.floor_mut(FloorId(1)).unwrap().enqueue(Direction::Down, PersonId(2));
        b.floor_mut(FloorId(2)).unwrap().enqueue(Direction::Down, PersonId(3));
        assert_eq!(b.total_waiting(), 3);
    }
}
