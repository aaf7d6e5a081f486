//! Unit tests for ep-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Vec3;

    #[test]
    fn zero_distance() {
        let p = Vec3::new(3.0, -4.0, 12.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Vec3::ZERO;
        let b = Vec3::new(3.0, 4.0, 12.0);
        assert_eq!(a.distance(b), 13.0);
        assert_eq!(a.distance_squared(b), 169.0);
    }

    #[test]
    fn box_check_is_per_axis() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        assert!(a.within_box(Vec3::new(1.0, -1.0, 1.0), 1.0));
        assert!(!a.within_box(Vec3::new(1.0, -1.0, 1.01), 1.0));
    }
}

#[cfg(test)]
mod health {
    use crate::{HealthCounts, HealthState};

    #[test]
    fn quarantined_counts_as_infected() {
        assert!(HealthState::Quarantined.is_infected());
        assert!(HealthState::Infected.is_infected());
        assert!(!HealthState::Healthy.is_infected());
    }

    #[test]
    fn count_totals() {
        let c = HealthCounts { healthy: 7, infected: 2, quarantined: 1 };
        assert_eq!(c.infected_total(), 3);
        assert_eq!(c.total(), 10);
        assert!((c.healthy_fraction() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn empty_population_is_fully_healthy() {
        assert_eq!(HealthCounts::default().healthy_fraction(), 1.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimSpeed, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick::ZERO + 1, Tick(1));
    }

    #[test]
    fn days_per_frame_scales_with_speed() {
        assert_eq!(SimClock::new(20.0, SimSpeed::Normal).days_per_frame(), 0.1);
        assert_eq!(SimClock::new(20.0, SimSpeed::Slow).days_per_frame(), 0.05);
    }

    #[test]
    fn advance_accumulates_days_and_ticks() {
        let mut clock = SimClock::new(1.0, SimSpeed::Normal);
        for _ in 0..10 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(10));
        assert!((clock.elapsed_days - 1.0).abs() < 1e-9);
    }

    #[test]
    fn unaware_until_threshold() {
        let mut clock = SimClock::new(0.25, SimSpeed::Normal);
        assert!(clock.still_unaware());
        clock.advance();
        clock.advance();
        assert!(clock.still_unaware());
        clock.advance();
        assert!(!clock.still_unaware());
    }

    #[test]
    fn speed_parses() {
        assert_eq!("slow".parse::<SimSpeed>().unwrap(), SimSpeed::Slow);
        assert_eq!(" Normal ".parse::<SimSpeed>().unwrap(), SimSpeed::Normal);
        assert!("fast".parse::<SimSpeed>().is_err());
    }
}

#[cfg(test)]
mod config {
    use crate::{ConfigLimits, EpError, SimConfig};

    #[test]
    fn default_is_valid_and_in_limits() {
        let cfg = SimConfig::default();
        cfg.validate().unwrap();
        ConfigLimits::standard().check(&cfg).unwrap();
    }

    #[test]
    fn too_many_initial_infected_rejected() {
        let cfg = SimConfig { total_population: 10, initial_infected: 11, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(EpError::InvalidConfiguration(_))));
    }

    #[test]
    fn all_infected_is_valid() {
        let cfg = SimConfig { total_population: 10, initial_infected: 10, ..SimConfig::default() };
        cfg.validate().unwrap();
    }

    #[test]
    fn bad_radius_rejected() {
        let cfg = SimConfig { agent_radius: 0.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { agent_radius: f64::NAN, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn small_population_valid_but_out_of_limits() {
        let cfg = SimConfig { total_population: 10, initial_infected: 0, ..SimConfig::default() };
        cfg.validate().unwrap();
        let err = ConfigLimits::standard().check(&cfg).unwrap_err();
        assert!(err.to_string().contains("total_population"), "{err}");
    }

    #[test]
    fn limit_bounds_are_inclusive() {
        let limits = ConfigLimits::standard();
        let lo = SimConfig {
            total_population: 300,
            initial_infected: 0,
            bed_capacity: 10,
            unaware_days: 10,
            moving_percentage: 0,
            ..SimConfig::default()
        };
        limits.check(&lo).unwrap();
        let hi = SimConfig {
            total_population: 2_000,
            initial_infected: 200,
            bed_capacity: 100,
            unaware_days: 30,
            moving_percentage: 99,
            ..SimConfig::default()
        };
        limits.check(&hi).unwrap();
        assert!(limits.check(&SimConfig { moving_percentage: 100, ..hi.clone() }).is_err());
        assert!(limits.check(&SimConfig { bed_capacity: 9, ..lo }).is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{uniform_quarantine_days, uniform_speed, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn seed_is_remembered() {
        assert_eq!(SimRng::new(99).seed(), 99);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn sign_is_unit() {
        let mut rng = SimRng::new(3);
        for _ in 0..100 {
            let s = rng.sign();
            assert!(s == 1.0 || s == -1.0);
        }
    }

    #[test]
    fn speed_in_bounds_and_two_decimals() {
        let mut rng = SimRng::new(7);
        for _ in 0..1_000 {
            let v = uniform_speed(&mut rng);
            assert!((0.5..=1.2).contains(&v), "got {v}");
            let cents = v * 100.0;
            assert!((cents - cents.round()).abs() < 1e-9, "not rounded: {v}");
        }
    }

    #[test]
    fn quarantine_days_cover_inclusive_range() {
        let mut rng = SimRng::new(11);
        let mut seen = [false; 15];
        for _ in 0..2_000 {
            let d = uniform_quarantine_days(&mut rng);
            assert!((5..=14).contains(&d), "got {d}");
            seen[d as usize] = true;
        }
        assert!(seen[5..=14].iter().all(|&s| s), "every day value should appear");
    }
}
