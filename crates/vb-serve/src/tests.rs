//! Unit tests for vb-serve.

#[cfg(test)]
mod manager {
    use vb_core::{ArenaRng, BallState, ServeConfig, Team, Vec3};
    use vb_host::{BallPhysics, Body, PhysicsHandle};
    use vb_rules::RallyState;

    use crate::ServeManager;

    #[derive(Default)]
    struct Recorder {
        flags:    Vec<BallPhysics>,
        velocity: Vec<(Body, Vec3)>,
        teleport: Vec<(Body, Vec3)>,
    }

    impl PhysicsHandle for Recorder {
        fn set_ball_physics(&mut self, flags: BallPhysics) {
            self.flags.push(flags);
        }
        fn set_velocity(&mut self, body: Body, velocity: Vec3) {
            self.velocity.push((body, velocity));
        }
        fn teleport(&mut self, body: Body, position: Vec3, _yaw_deg: f32) {
            self.teleport.push((body, position));
        }
        fn position(&self, _body: Body) -> Option<Vec3> {
            None
        }
        fn velocity(&self, _body: Body) -> Option<Vec3> {
            None
        }
    }

    fn manager() -> ServeManager {
        ServeManager::new(ServeConfig::default(), 0.0)
    }

    #[test]
    fn reset_spawns_frozen_on_server_side() {
        let mut s = RallyState { next_server: Team::Red, ..RallyState::default() };
        let mut phys = Recorder::default();
        let pos = manager().reset_ball(&mut s, &mut phys, &mut ArenaRng::new(1));

        assert!(pos.z > 0.0, "Red serves from z > net");
        assert_eq!(pos.y, 3.0);
        assert_eq!(s.ball, BallState::Frozen);
        assert_eq!(phys.flags, vec![BallPhysics::FROZEN]);
        assert_eq!(phys.velocity, vec![(Body::Ball, Vec3::ZERO)]);
        assert_eq!(phys.teleport, vec![(Body::Ball, pos)]);

        s.next_server = Team::Blue;
        let pos = manager().reset_ball(&mut s, &mut phys, &mut ArenaRng::new(1));
        assert!(pos.z < 0.0);
    }

    #[test]
    fn first_server_is_drawn_and_kept() {
        let mut s = RallyState::new();
        let mut phys = Recorder::default();
        let pos = manager().reset_ball(&mut s, &mut phys, &mut ArenaRng::new(5));
        assert!(s.next_server.is_set());
        assert_eq!(pos.z > 0.0, s.next_server == Team::Red);
    }

    #[test]
    fn release_is_idempotent() {
        let mut s = RallyState { ball: BallState::Frozen, ..RallyState::default() };
        let mut phys = Recorder::default();
        assert!(manager().release(&mut s, &mut phys));
        assert!(!manager().release(&mut s, &mut phys));
        assert_eq!(phys.flags, vec![BallPhysics::LIVE]);
        assert_eq!(s.ball, BallState::Live);
    }

    #[test]
    fn watchdog_drops_after_limit() {
        let m = manager();
        let mut s = RallyState { ball: BallState::Frozen, ..RallyState::default() };
        let mut phys = Recorder::default();

        s.steps_since_reset = 249;
        assert!(!m.watchdog(&mut s, &mut phys, 250));
        s.steps_since_reset = 250;
        assert!(m.watchdog(&mut s, &mut phys, 250));
        assert_eq!(s.ball, BallState::Live);
        assert_eq!(phys.velocity, vec![(Body::Ball, Vec3::new(0.0, -2.0, 0.0))]);

        // Already live: nothing more to do.
        s.steps_since_reset = 500;
        assert!(!m.watchdog(&mut s, &mut phys, 250));
    }

    #[test]
    fn watchdog_disabled_at_zero() {
        let mut s = RallyState { ball: BallState::Frozen, steps_since_reset: 10_000, ..RallyState::default() };
        let mut phys = Recorder::default();
        assert!(!manager().watchdog(&mut s, &mut phys, 0));
        assert_eq!(s.ball, BallState::Frozen);
    }
}
