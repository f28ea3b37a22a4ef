//! Unit tests for fc-fleet.

#[cfg(test)]
mod builder {
    use fc_core::{FcError, SimRng, TruckStatus};

    use crate::FleetBuilder;

    #[test]
    fn defaults_to_full_and_running() {
        let fleet = FleetBuilder::new(3, 100.0).build().unwrap();
        assert_eq!(fleet.count, 3);
        assert_eq!(fleet.battery, vec![100.0; 3]);
        assert_eq!(fleet.count_in(TruckStatus::Running), 3);
    }

    #[test]
    fn explicit_batteries_kept() {
        let fleet = FleetBuilder::new(2, 100.0).batteries(vec![5.0, 60.0]).build().unwrap();
        assert_eq!(fleet.battery, vec![5.0, 60.0]);
    }

    #[test]
    fn battery_length_mismatch_errors() {
        let result = FleetBuilder::new(3, 100.0).batteries(vec![1.0, 2.0]).build();
        assert!(matches!(result, Err(FcError::Config(_))));
    }

    #[test]
    fn battery_out_of_range_errors() {
        let result = FleetBuilder::new(2, 100.0).batteries(vec![50.0, 101.0]).build();
        assert!(result.is_err());
        let result = FleetBuilder::new(1, 100.0).batteries(vec![-0.1]).build();
        assert!(result.is_err());
    }

    #[test]
    fn status_length_mismatch_errors() {
        let result = FleetBuilder::new(2, 100.0).statuses(vec![TruckStatus::Idle]).build();
        assert!(result.is_err());
    }

    #[test]
    fn non_positive_capacity_errors() {
        assert!(FleetBuilder::new(1, 0.0).build().is_err());
    }

    #[test]
    fn random_batteries_in_range_and_seeded() {
        let a = FleetBuilder::new(50, 500.0)
            .random_batteries(&mut SimRng::new(7), (0.4, 0.8))
            .build()
            .unwrap();
        let b = FleetBuilder::new(50, 500.0)
            .random_batteries(&mut SimRng::new(7), (0.4, 0.8))
            .build()
            .unwrap();
        assert_eq!(a.battery, b.battery);
        assert!(a.battery.iter().all(|&kwh| (200.0..=400.0).contains(&kwh)));
    }
}

#[cfg(test)]
mod store {
    use fc_core::TruckId;

    use crate::FleetBuilder;

    #[test]
    fn adjust_battery_clamps() {
        let mut fleet = FleetBuilder::new(1, 100.0).batteries(vec![95.0]).build().unwrap();
        assert_eq!(fleet.adjust_battery(TruckId(0), 10.0), 100.0);
        assert_eq!(fleet.adjust_battery(TruckId(0), -150.0), 0.0);
    }

    #[test]
    fn truck_ids_ascending() {
        let fleet = FleetBuilder::new(4, 1.0).build().unwrap();
        let ids: Vec<u32> = fleet.truck_ids().map(|t| t.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn soc_fraction() {
        let fleet = FleetBuilder::new(1, 200.0).batteries(vec![50.0]).build().unwrap();
        assert_eq!(fleet.soc(TruckId(0)), 0.25);
    }
}
