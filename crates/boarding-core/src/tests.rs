//! Unit tests for boarding-core primitives.

#[cfg(test)]
mod ids {
    use crate::{PersonId, RowId};

    #[test]
    fn index_roundtrip() {
        let id = PersonId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PersonId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(PersonId(0) < PersonId(1));
        assert!(RowId(10) > RowId(9));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(PersonId::INVALID.0, u32::MAX);
        assert_eq!(RowId::INVALID.0, u16::MAX);
        assert!(!PersonId::INVALID.is_valid());
        assert!(PersonId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(PersonId(7).to_string(), "PersonId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::SimTime;

    #[test]
    fn arithmetic() {
        let t = SimTime(10.0);
        assert_eq!(t + 5.0, SimTime(15.0));
        assert_eq!(t.offset(2.5), SimTime(12.5));
        assert_eq!(SimTime(15.0) - SimTime(10.0), 5.0);
        assert_eq!(SimTime(15.0).since(SimTime(10.0)), 5.0);
    }

    #[test]
    fn nearly_uses_tolerance() {
        assert!(SimTime(1.0).nearly(SimTime(1.0 + 1e-9), 1e-6));
        assert!(!SimTime(1.0).nearly(SimTime(1.01), 1e-6));
    }

    #[test]
    fn total_cmp_orders_times() {
        let mut v = [SimTime(3.0), SimTime(1.0), SimTime(2.0)];
        v.sort_by(SimTime::total_cmp);
        assert_eq!(v, [SimTime(1.0), SimTime(2.0), SimTime(3.0)]);
    }

    #[test]
    fn display() {
        assert_eq!(SimTime(14.175).to_string(), "14.175s");
    }
}

#[cfg(test)]
mod params {
    use crate::{PhysicalParams, RowId};

    #[test]
    fn defaults_validate() {
        let p = PhysicalParams::default();
        p.validate().unwrap();
        assert_eq!(p.waiting_space, 0.8);
        assert_eq!(p.seat_space, 1.5);
        assert_eq!(p.reflex_time, 0.3);
        assert_eq!(p.packing_time, 12.0);
        assert_eq!(p.walking_speed, 0.8);
        assert_eq!(p.epsilon, 1e-6);
    }

    #[test]
    fn rejects_nonpositive_values() {
        let mut p = PhysicalParams::default();
        p.walking_speed = 0.0;
        assert!(p.validate().is_err());

        let mut p = PhysicalParams::default();
        p.packing_time = -1.0;
        assert!(p.validate().is_err());

        let mut p = PhysicalParams::default();
        p.epsilon = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn row_position_scales_by_seat_space() {
        let p = PhysicalParams::default();
        assert_eq!(p.row_position(RowId(1)), 1.5);
        assert_eq!(p.row_position(RowId(10)), 15.0);
    }

    #[test]
    fn near_zero_uses_epsilon() {
        let p = PhysicalParams::default();
        assert!(p.near_zero(1e-9));
        assert!(p.near_zero(-1e-9));
        assert!(!p.near_zero(1e-3));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn shuffle_is_reproducible() {
        let mut a: Vec<u32> = (0..40).collect();
        let mut b: Vec<u32> = (0..40).collect();
        SimRng::new(131).shuffle(&mut a);
        SimRng::new(131).shuffle(&mut b);
        assert_eq!(a, b);
        assert_ne!(a, (0..40).collect::<Vec<u32>>(), "40 elements should not shuffle to identity");
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b, "sibling child RNGs should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[7u8]), Some(&7));
    }
}
