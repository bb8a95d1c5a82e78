//! Unit tests for vb-rules.

#[cfg(test)]
mod fixtures {
    use vb_agent::{AgentRegistry, AgentRegistryBuilder, SpawnSlot};
    use vb_core::{Team, Vec3};

    /// Blue: ids 0, 2.  Red: ids 1, 3.
    pub fn two_v_two() -> AgentRegistry {
        AgentRegistryBuilder::new()
            .agent(Team::Blue, SpawnSlot::new(Vec3::new(-1.0, 0.5, -4.0), 0.0))
            .agent(Team::Red, SpawnSlot::new(Vec3::new(-1.0, 0.5, 4.0), 180.0))
            .agent(Team::Blue, SpawnSlot::new(Vec3::new(1.0, 0.5, -4.0), 0.0))
            .agent(Team::Red, SpawnSlot::new(Vec3::new(1.0, 0.5, 4.0), 180.0))
            .build()
    }
}

#[cfg(test)]
mod state {
    use vb_core::{AgentId, BallState, Team};

    use crate::RallyState;

    #[test]
    fn reset_keeps_only_next_server() {
        let mut s = RallyState::new();
        s.touches_red = 2;
        s.last_hitter_team = Team::Red;
        s.last_hitter_agent = Some(AgentId(1));
        s.assist_agent = Some(AgentId(3));
        s.last_touch_was_spike = true;
        s.ball_crossed_net = true;
        s.ball = BallState::Frozen;
        s.steps_since_reset = 99;
        s.next_server = Team::Red;

        s.reset_for_rally();
        assert_eq!(s, RallyState { next_server: Team::Red, ..RallyState::default() });
    }

    #[test]
    fn touches_for_unset_is_zero() {
        let s = RallyState { touches_blue: 2, ..RallyState::default() };
        assert_eq!(s.touches(Team::Blue), 2);
        assert_eq!(s.touches(Team::Unset), 0);
    }
}

#[cfg(test)]
mod ledger {
    use vb_core::{AgentId, Team, TouchType};

    use super::fixtures::two_v_two;
    use crate::{Fault, RallyState, TouchLedger, TouchOutcome};

    fn ledger() -> TouchLedger {
        TouchLedger::new(0.25, 3)
    }

    #[test]
    fn admit_filters_cooldown_and_unknown_agents() {
        let mut reg = two_v_two();
        let l = ledger();
        assert_eq!(l.admit(&mut reg, AgentId(0), 1.0), Some(Team::Blue));
        assert_eq!(l.admit(&mut reg, AgentId(0), 1.1), None);
        // The filtered contact does not restart the cooldown.
        assert_eq!(reg.last_touch_secs(AgentId(0)), Some(1.0));
        assert_eq!(l.admit(&mut reg, AgentId(0), 1.25), Some(Team::Blue));

        assert_eq!(l.admit(&mut reg, AgentId(9), 5.0), None);
        assert_eq!(l.admit(&mut reg, AgentId::INVALID, 5.0), None);
        assert_eq!(l.admit(&mut reg, AgentId(1), f64::NAN), None);
    }

    #[test]
    fn cooldown_holds_late_in_a_long_run() {
        let mut reg = two_v_two();
        let l = ledger();
        let t0 = 3_000_000.0;
        assert_eq!(l.admit(&mut reg, AgentId(0), t0), Some(Team::Blue));
        assert_eq!(l.admit(&mut reg, AgentId(0), t0 + 0.2), None);
        assert_eq!(l.admit(&mut reg, AgentId(0), t0 + 0.25), Some(Team::Blue));
        assert_eq!(reg.last_touch_secs(AgentId(0)), Some(t0 + 0.25));
    }

    #[test]
    fn legal_touch_flips_possession() {
        let l = ledger();
        let mut s = RallyState::new();
        assert_eq!(
            l.record(&mut s, AgentId(0), Team::Blue, TouchType::Bump),
            TouchOutcome::Continue { touch_number: 1 }
        );
        assert_eq!(
            l.record(&mut s, AgentId(2), Team::Blue, TouchType::Set),
            TouchOutcome::Continue { touch_number: 2 }
        );
        assert_eq!(s.assist_agent, Some(AgentId(0)));

        s.ball_crossed_net = true;
        assert_eq!(
            l.record(&mut s, AgentId(1), Team::Red, TouchType::Bump),
            TouchOutcome::Continue { touch_number: 1 }
        );
        assert_eq!((s.touches_blue, s.touches_red), (0, 1));
        assert!(!s.ball_crossed_net);
        assert_eq!(s.assist_agent, None);
        assert_eq!(s.last_hitter_team, Team::Red);
    }

    #[test]
    fn double_touch_checked_before_bookkeeping() {
        let l = ledger();
        let mut s = RallyState::new();
        l.record(&mut s, AgentId(0), Team::Blue, TouchType::Bump);
        let out = l.record(&mut s, AgentId(0), Team::Blue, TouchType::Bump);
        assert_eq!(out, TouchOutcome::Fault { against: Team::Blue, fault: Fault::DoubleTouch });
        assert_eq!(s.touches_blue, 1);
    }

    #[test]
    fn spike_on_spike_applies_across_the_net() {
        let l = ledger();
        let mut s = RallyState::new();
        l.record(&mut s, AgentId(0), Team::Blue, TouchType::Spike);
        let out = l.record(&mut s, AgentId(1), Team::Red, TouchType::Spike);
        assert_eq!(out, TouchOutcome::Fault { against: Team::Red, fault: Fault::SpikeOnSpike });
    }

    #[test]
    fn touch_limit_faults_on_the_fourth() {
        let l = ledger();
        let mut s = RallyState::new();
        for (i, agent) in [0, 2, 0].into_iter().enumerate() {
            let out = l.record(&mut s, AgentId(agent), Team::Blue, TouchType::Bump);
            assert_eq!(out, TouchOutcome::Continue { touch_number: i as u8 + 1 });
        }
        let out = l.record(&mut s, AgentId(2), Team::Blue, TouchType::Bump);
        assert_eq!(out, TouchOutcome::Fault { against: Team::Blue, fault: Fault::FourTouches });
    }

    #[test]
    fn possession_is_exclusive_under_any_sequence() {
        let l = ledger();
        let mut s = RallyState::new();
        let seq = [(0, Team::Blue), (1, Team::Red), (3, Team::Red), (2, Team::Blue), (0, Team::Blue)];
        for (agent, team) in seq {
            l.record(&mut s, AgentId(agent), team, TouchType::Bump);
            assert!(s.touches_blue == 0 || s.touches_red == 0);
        }
    }
}

#[cfg(test)]
mod resolver {
    use vb_core::{AgentId, Team, Vec3};

    use crate::{CourtEvent, EventResolver, Fault, RallyState, Ruling, court_side};

    fn resolver() -> EventResolver {
        EventResolver::new(0.0, 0.02)
    }

    fn after_touch(team: Team, touches: u8) -> RallyState {
        let mut s = RallyState::new();
        s.last_hitter_team = team;
        s.last_hitter_agent = Some(AgentId(0));
        match team {
            Team::Blue => s.touches_blue = touches,
            _ => s.touches_red = touches,
        }
        s
    }

    #[test]
    fn side_split() {
        assert_eq!(court_side(-0.1, 0.0), Team::Blue);
        assert_eq!(court_side(0.0, 0.0), Team::Red);
        assert_eq!(court_side(2.0, 0.0), Team::Red);
    }

    #[test]
    fn legal_attack_scores() {
        let mut s = after_touch(Team::Blue, 1);
        let r = resolver().resolve(&mut s, CourtEvent::HitGoal(Team::Red), None);
        assert_eq!(r, Ruling::Point { winner: Team::Blue });
        assert_eq!(r.winner(), Some(Team::Blue));
    }

    #[test]
    fn grounding_own_side_is_a_fault() {
        let mut s = after_touch(Team::Blue, 2);
        let r = resolver().resolve(&mut s, CourtEvent::HitGoal(Team::Blue), None);
        assert_eq!(r, Ruling::Fault { against: Team::Blue, fault: Fault::OwnCourt });
        assert_eq!(r.winner(), Some(Team::Red));

        let mut fresh = RallyState::new();
        let r = resolver().resolve(&mut fresh, CourtEvent::HitGoal(Team::Blue), None);
        assert_eq!(r, Ruling::Fault { against: Team::Blue, fault: Fault::OwnCourt });
    }

    #[test]
    fn out_of_bounds_blames_hitter_then_server() {
        let mut s = after_touch(Team::Red, 1);
        let r = resolver().resolve(&mut s, CourtEvent::OutOfBounds, None);
        assert_eq!(r, Ruling::Fault { against: Team::Red, fault: Fault::OutOfBounds });

        let mut s = RallyState { next_server: Team::Blue, ..RallyState::default() };
        let r = resolver().resolve(&mut s, CourtEvent::OutOfBounds, None);
        assert_eq!(r, Ruling::Fault { against: Team::Blue, fault: Fault::OutOfBounds });

        let mut s = RallyState::new();
        assert_eq!(resolver().resolve(&mut s, CourtEvent::OutOfBounds, None), Ruling::Ignored);
    }

    #[test]
    fn net_crossing_fires_once_with_touch_bonus() {
        let mut s = after_touch(Team::Blue, 3);
        let over = Some(Vec3::new(0.0, 2.0, 1.0));
        let r = resolver().resolve(&mut s, CourtEvent::PassOverNet, over);
        match r {
            Ruling::NetCrossed { team, bonus } => {
                assert_eq!(team, Team::Blue);
                assert!((bonus - 0.06).abs() < 1e-6);
            }
            other => panic!("expected NetCrossed, got {other:?}"),
        }
        assert!(s.ball_crossed_net);
        assert_eq!(resolver().resolve(&mut s, CourtEvent::PassOverNet, over), Ruling::Ignored);
    }

    #[test]
    fn net_crossing_requires_ball_on_far_side() {
        let mut s = after_touch(Team::Blue, 1);
        let still_blue = Some(Vec3::new(0.0, 2.0, -0.5));
        assert_eq!(resolver().resolve(&mut s, CourtEvent::PassOverNet, still_blue), Ruling::Ignored);
        assert_eq!(resolver().resolve(&mut s, CourtEvent::PassOverNet, None), Ruling::Ignored);
        assert!(!s.ball_crossed_net);
    }

    #[test]
    fn net_crossing_without_hitter_is_ignored() {
        let mut s = RallyState::new();
        let r = resolver().resolve(&mut s, CourtEvent::PassOverNet, Some(Vec3::new(0.0, 2.0, 1.0)));
        assert_eq!(r, Ruling::Ignored);
    }
}

#[cfg(test)]
mod roles {
    use vb_core::{AgentId, ArenaRng, Role, RoleStrategy, Team, Vec3};

    use super::fixtures::two_v_two;
    use crate::{RoleAssigner, RoleContext, predict_landing, receiving_team, static_role};

    #[test]
    fn static_table() {
        let roles: Vec<Role> = (0..8).map(static_role).collect();
        assert_eq!(
            roles,
            vec![
                Role::Hitter,
                Role::Setter,
                Role::Passer,
                Role::Hitter,
                Role::Passer,
                Role::Passer,
                Role::Generic,
                Role::Generic,
            ]
        );
    }

    #[test]
    fn landing_from_rest_is_straight_down() {
        let p = predict_landing(Vec3::new(1.0, 4.905, 2.0), Vec3::ZERO, 9.81);
        assert_eq!((p.x, p.y, p.z), (1.0, 0.0, 2.0));
    }

    #[test]
    fn landing_advances_horizontally() {
        // y0 = 0, vy = 9.81 -> airborne for 2 s.
        let p = predict_landing(Vec3::ZERO, Vec3::new(0.5, 9.81, -1.0), 9.81);
        assert!((p.x - 1.0).abs() < 1e-4);
        assert!((p.z + 2.0).abs() < 1e-4);
        assert_eq!(receiving_team(p, 0.0), Team::Blue);
    }

    #[test]
    fn static_assignment_by_join_order() {
        let mut reg = two_v_two();
        let ctx = RoleContext {
            ball_position: None,
            ball_velocity: None,
            gravity:       9.81,
            net_z:         0.0,
            positions:     &[],
        };
        RoleAssigner::new(RoleStrategy::Static, 0.05).assign(&mut reg, &ctx, &mut ArenaRng::new(1));
        assert_eq!(reg.role(AgentId(0)), Some(Role::Hitter));
        assert_eq!(reg.role(AgentId(2)), Some(Role::Setter));
        assert_eq!(reg.role(AgentId(1)), Some(Role::Hitter));
        assert_eq!(reg.role(AgentId(3)), Some(Role::Setter));
    }

    #[test]
    fn dynamic_ranks_receiving_team_by_distance() {
        let mut reg = two_v_two();
        let positions = [
            Some(Vec3::new(-1.0, 0.5, -4.0)),
            Some(Vec3::new(-1.0, 0.5, 4.0)),
            Some(Vec3::new(1.0, 0.5, -4.0)),
            Some(Vec3::new(1.0, 0.5, 4.0)),
        ];
        // Ball falling straight down onto Red's side near agent 3.
        let ctx = RoleContext {
            ball_position: Some(Vec3::new(1.0, 3.0, 4.0)),
            ball_velocity: Some(Vec3::ZERO),
            gravity:       9.81,
            net_z:         0.0,
            positions:     &positions,
        };
        RoleAssigner::new(RoleStrategy::Dynamic, 0.05).assign(&mut reg, &ctx, &mut ArenaRng::new(1));
        assert_eq!(reg.role(AgentId(3)), Some(Role::Hitter));
        assert_eq!(reg.role(AgentId(1)), Some(Role::Setter));
        assert_eq!(reg.role(AgentId(0)), Some(Role::Generic));
        assert_eq!(reg.role(AgentId(2)), Some(Role::Generic));
    }

    #[test]
    fn dynamic_tie_is_broken_both_ways() {
        let positions = [
            None,
            Some(Vec3::new(-1.0, 0.5, 4.0)),
            None,
            Some(Vec3::new(1.0, 0.5, 4.0)),
        ];
        let ctx = RoleContext {
            ball_position: Some(Vec3::new(0.0, 3.0, 4.0)),
            ball_velocity: Some(Vec3::ZERO),
            gravity:       9.81,
            net_z:         0.0,
            positions:     &positions,
        };
        let assigner = RoleAssigner::new(RoleStrategy::Dynamic, 0.05);
        let mut rng = ArenaRng::new(3);
        let mut hitters = [0u32; 2];
        for _ in 0..200 {
            let mut reg = two_v_two();
            assigner.assign(&mut reg, &ctx, &mut rng);
            if reg.role(AgentId(1)) == Some(Role::Hitter) {
                hitters[0] += 1;
            } else {
                assert_eq!(reg.role(AgentId(3)), Some(Role::Hitter));
                hitters[1] += 1;
            }
        }
        assert!(hitters[0] > 0 && hitters[1] > 0, "coin flip never went one way: {hitters:?}");
    }

    #[test]
    fn dynamic_without_ball_falls_back_to_static() {
        let mut reg = two_v_two();
        let ctx = RoleContext {
            ball_position: None,
            ball_velocity: Some(Vec3::ZERO),
            gravity:       9.81,
            net_z:         0.0,
            positions:     &[],
        };
        RoleAssigner::new(RoleStrategy::Dynamic, 0.05).assign(&mut reg, &ctx, &mut ArenaRng::new(1));
        assert_eq!(reg.role(AgentId(0)), Some(Role::Hitter));
    }
}

#[cfg(test)]
mod shaper {
    use vb_core::{Role, ShapingTable, TouchType};

    use crate::RewardShaper;

    #[test]
    fn reads_configured_table() {
        let mut table = ShapingTable::default();
        table.hitter[2][2] = 0.09;
        let s = RewardShaper::new(table);
        assert_eq!(s.shape(Role::Hitter, TouchType::Spike, 3), 0.09);
        assert_eq!(s.shape(Role::Hitter, TouchType::Spike, 4), 0.09);
        assert_eq!(
            s.shape(Role::Generic, TouchType::Bump, 1),
            s.shape(Role::Passer, TouchType::Bump, 1)
        );
    }
}
