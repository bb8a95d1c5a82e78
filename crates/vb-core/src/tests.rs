//! Unit tests for vb-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::INVALID.index(), u32::MAX as usize);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert_eq!(AgentId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod team {
    use crate::{Role, Team};

    #[test]
    fn opponent_is_involution_on_playing_teams() {
        for t in Team::PLAYING {
            assert_ne!(t.opponent(), t);
            assert_eq!(t.opponent().opponent(), t);
        }
        assert_eq!(Team::Unset.opponent(), Team::Unset);
    }

    #[test]
    fn sides_are_opposite() {
        assert_eq!(Team::Blue.side_sign(), -Team::Red.side_sign());
        assert_eq!(Team::Unset.side_sign(), 0.0);
    }

    #[test]
    fn index_only_for_playing_teams() {
        assert_eq!(Team::Blue.index(), Some(0));
        assert_eq!(Team::Red.index(), Some(1));
        assert_eq!(Team::Unset.index(), None);
    }

    #[test]
    fn role_one_hot() {
        assert_eq!(Role::Passer.one_hot(), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(Role::Generic.one_hot(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Role::default(), Role::Generic);
    }

    #[test]
    fn display() {
        assert_eq!(Team::Blue.to_string(), "blue");
        assert_eq!(Role::Hitter.to_string(), "hitter");
    }
}

#[cfg(test)]
mod geo {
    use crate::Vec3;

    #[test]
    fn arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vec3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(b * 2.0, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(-b, Vec3::new(-0.5, -0.5, -0.5));
    }

    #[test]
    fn horizontal_distance_ignores_height() {
        let a = Vec3::new(0.0, 10.0, 0.0);
        let b = Vec3::new(3.0, 0.0, 4.0);
        assert_eq!(a.horizontal_distance_sq(b), 25.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{StepClock, Tick};

    #[test]
    fn tick_offset_saturates() {
        assert_eq!(Tick(10).offset(3), Tick(13));
        assert_eq!(Tick(u64::MAX - 1).offset(5), Tick(u64::MAX));
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = StepClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn steps_for_secs_rounds_up() {
        let clock = StepClock::new(0.02);
        assert_eq!(clock.steps_for_secs(0.5), 25);
        assert_eq!(clock.steps_for_secs(0.021), 2);
        assert_eq!(clock.steps_for_secs(0.0), 0);
    }
}

#[cfg(test)]
mod rng {
    use crate::ArenaRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = ArenaRng::new(12345);
        let mut r2 = ArenaRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.gen_range(0.0..1.0);
            let b: f32 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_arenas_differ() {
        let mut r0 = ArenaRng::for_arena(1, 0);
        let mut r1 = ArenaRng::for_arena(1, 1);
        let a: u64 = r0.gen_range(0..u64::MAX);
        let b: u64 = r1.gen_range(0..u64::MAX);
        assert_ne!(a, b, "seeds for adjacent arenas should diverge");
    }

    #[test]
    fn jitter_in_bounds_and_zero_width() {
        let mut rng = ArenaRng::new(0);
        for _ in 0..1000 {
            let v = rng.jitter(0.5);
            assert!((-0.5..=0.5).contains(&v));
        }
        assert_eq!(rng.jitter(0.0), 0.0);
    }

    #[test]
    fn choose_team_never_unset() {
        let mut rng = ArenaRng::new(7);
        let mut seen = [false; 2];
        for _ in 0..200 {
            let t = rng.choose_team();
            seen[t.index().expect("playing team")] = true;
        }
        assert_eq!(seen, [true, true]);
    }
}

#[cfg(test)]
mod config {
    use crate::{RallyConfig, Role, ShapingTable, TouchType};

    #[test]
    fn defaults_validate() {
        RallyConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_limits_are_disabled_not_invalid() {
        let cfg = RallyConfig {
            max_env_steps: 0,
            max_steps_before_drop: 0,
            reset_cooldown_steps: 0,
            feedback_flash_secs: 0.0,
            ..RallyConfig::default()
        };
        cfg.validate().unwrap();
    }

    #[test]
    fn rejects_bad_values() {
        let mut cfg = RallyConfig::default();
        cfg.touch_cooldown_secs = -0.1;
        assert!(cfg.validate().is_err());

        let mut cfg = RallyConfig::default();
        cfg.max_touches = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = RallyConfig::default();
        cfg.step_secs = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = RallyConfig::default();
        cfg.rewards.shaping.hitter[2][2] = f32::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn shaping_shape_contract() {
        let t = ShapingTable::default();
        // Early ball control pays for passers and setters.
        assert!(t.value(Role::Passer, TouchType::Bump, 1) > 0.0);
        assert!(t.value(Role::Setter, TouchType::Set, 2) > 0.0);
        // Late attack pays for hitters, and beats their early attack.
        assert!(t.value(Role::Hitter, TouchType::Spike, 3) > 0.0);
        assert!(
            t.value(Role::Hitter, TouchType::Spike, 3) > t.value(Role::Hitter, TouchType::Spike, 1)
        );
        // Penalties.
        assert!(t.value(Role::Passer, TouchType::Spike, 1) < 0.0);
        assert!(t.value(Role::Setter, TouchType::Spike, 1) < 0.0);
        assert!(t.value(Role::Hitter, TouchType::Bump, 3) < 0.0);
        assert!(t.value(Role::Hitter, TouchType::Set, 3) < 0.0);
        // Small magnitudes.
        for row in [&t.passer, &t.setter, &t.hitter] {
            assert!(row.iter().flatten().all(|v| v.abs() <= 0.1));
        }
    }

    #[test]
    fn generic_reuses_passer_row_and_touch_number_clamps() {
        let t = ShapingTable::default();
        assert_eq!(t.row(Role::Generic), t.row(Role::Passer));
        assert_eq!(
            t.value(Role::Hitter, TouchType::Spike, 7),
            t.value(Role::Hitter, TouchType::Spike, 3)
        );
        assert_eq!(
            t.value(Role::Hitter, TouchType::Spike, 0),
            t.value(Role::Hitter, TouchType::Spike, 1)
        );
    }
}
