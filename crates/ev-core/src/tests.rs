//! Unit tests for ev-core primitives.

#[cfg(test)]
mod ids {
    use crate::EntityId;

    #[test]
    fn index_roundtrip() {
        let id = EntityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(EntityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn rows_beyond_u32_are_rejected() {
        assert_eq!(EntityId::try_from(u32::MAX as usize).unwrap(), EntityId(u32::MAX));
        #[cfg(target_pointer_width = "64")]
        assert!(EntityId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(EntityId(7).to_string(), "entity#7");
    }
}

#[cfg(test)]
mod geom {
    use crate::geom::{lift_to_ground, yaw_towards};
    use crate::{Domain, Vec2, Vec3};

    #[test]
    fn square_domain_is_twice_half_extent() {
        let d = Domain::square(25.0);
        assert_eq!(d.width, 50.0);
        assert_eq!(d.height, 50.0);
        assert_eq!(d.area(), 2500.0);
    }

    #[test]
    fn containment_is_half_open() {
        let d = Domain::new(10.0, 5.0);
        assert!(d.contains(Vec2::new(0.0, 0.0)));
        assert!(d.contains(Vec2::new(9.999, 4.999)));
        assert!(!d.contains(Vec2::new(10.0, 1.0)));
        assert!(!d.contains(Vec2::new(1.0, 5.0)));
        assert!(!d.contains(Vec2::new(-0.001, 1.0)));
    }

    #[test]
    fn diagonal() {
        let d = Domain::new(3.0, 4.0);
        assert!((d.diagonal() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn lift_centres_on_origin_and_fixes_height() {
        let origin = Vec3::new(10.0, 7.0, -4.0);
        let p = lift_to_ground(Vec2::new(25.0, 25.0), 25.0, origin, 0.5);
        assert_eq!(p, Vec3::new(10.0, 0.5, -4.0));

        let corner = lift_to_ground(Vec2::ZERO, 25.0, Vec3::ZERO, 0.0);
        assert_eq!(corner, Vec3::new(-25.0, 0.0, -25.0));
    }

    #[test]
    fn yaw_faces_target() {
        let yaw = yaw_towards(Vec3::ZERO, Vec3::new(0.0, 3.0, 5.0)).unwrap();
        assert!(yaw.abs() < 1e-6, "facing +Z is zero yaw, got {yaw}");

        let yaw = yaw_towards(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)).unwrap();
        assert!((yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn yaw_undefined_for_vertical_offset() {
        assert!(yaw_towards(Vec3::ZERO, Vec3::new(0.0, 9.0, 0.0)).is_none());
    }
}

#[cfg(test)]
mod time {
    use crate::{FrameClock, SimConfig, Tick};

    #[test]
    fn tick_addition() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick::ZERO + 0, Tick(0));
    }

    #[test]
    fn advance_steps_one_tick_at_a_time() {
        let mut clock = FrameClock::new(0.1);
        for expected in 1..=4 {
            clock.advance();
            assert_eq!(clock.current_tick, Tick::ZERO + expected);
        }
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = FrameClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(3));
        assert!((clock.elapsed_secs() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig { total_ticks: 120, ..SimConfig::default() };
        assert_eq!(cfg.end_tick(), Tick(120));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_frame_dt_rejected() {
        let cfg = SimConfig { frame_dt: 0.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use rand::Rng;

    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.r#gen();
            let b: f32 = r2.r#gen();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut a = root.child(0);
        let mut b = root.child(1);
        let x: u64 = a.r#gen();
        let y: u64 = b.r#gen();
        assert_ne!(x, y, "sibling children should not share a stream");
    }

    #[test]
    fn usable_as_rand_rng() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v: f32 = Rng::gen_range(&mut rng, 0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{AvoiderConfig, ObstacleConfig};

    #[test]
    fn defaults_are_valid() {
        assert!(AvoiderConfig::default().validate().is_ok());
        assert!(ObstacleConfig::default().validate().is_ok());
    }

    #[test]
    fn avoider_domain_spans_twice_sample_radius() {
        let cfg = AvoiderConfig::default();
        let d = cfg.domain();
        assert_eq!(d.width, 50.0);
        assert_eq!(d.height, 50.0);
    }

    #[test]
    fn non_positive_spacing_rejected() {
        let cfg = AvoiderConfig { spacing: 0.0, ..AvoiderConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = AvoiderConfig { spacing: f32::NAN, ..AvoiderConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_attempts_rejected() {
        let cfg = AvoiderConfig { attempts: 0, ..AvoiderConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn inverted_spawn_range_rejected() {
        let cfg = ObstacleConfig { spawn_range: (5.0, -5.0), ..ObstacleConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("spawn_range"));
    }
}
