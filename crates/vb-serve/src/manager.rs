use log::debug;

use vb_core::{ArenaRng, BallState, ServeConfig, Vec3};
use vb_host::{BallPhysics, Body, PhysicsHandle};
use vb_rules::RallyState;

#[derive(Clone, Debug, PartialEq)]
pub struct ServeManager {
    pub serve: ServeConfig,
    pub net_z: f32,
}

impl ServeManager {
    pub fn new(serve: ServeConfig, net_z: f32) -> Self {
        Self { serve, net_z }
    }

    /// Place a frozen ball above `state.next_server`'s side.
    ///
    /// The server is drawn at random only when none has been decided yet,
    /// and the draw is written back so the first rally has a server like
    /// every later one.  Returns the spawn position.
    pub fn reset_ball<P: PhysicsHandle>(
        &self,
        state:   &mut RallyState,
        physics: &mut P,
        rng:     &mut ArenaRng,
    ) -> Vec3 {
        if !state.next_server.is_set() {
            state.next_server = rng.choose_team();
        }
        let side = state.next_server.side_sign();
        let position = Vec3::new(
            rng.jitter(self.serve.jitter),
            self.serve.height,
            self.net_z + side * self.serve.depth + rng.jitter(self.serve.jitter),
        );

        physics.set_ball_physics(BallPhysics::FROZEN);
        physics.set_velocity(Body::Ball, Vec3::ZERO);
        physics.teleport(Body::Ball, position, 0.0);
        state.ball = BallState::Frozen;
        position
    }

    /// Frozen → Live.  `false` if the ball was already live.
    pub fn release<P: PhysicsHandle>(&self, state: &mut RallyState, physics: &mut P) -> bool {
        if state.ball != BallState::Frozen {
            return false;
        }
        physics.set_ball_physics(BallPhysics::LIVE);
        state.ball = BallState::Live;
        debug!("serve released");
        true
    }

    /// Drop a serve nobody touched.  Disabled when `max_steps_before_drop`
    /// is 0.  Returns `true` if the ball was released by this call.
    pub fn watchdog<P: PhysicsHandle>(
        &self,
        state:                 &mut RallyState,
        physics:               &mut P,
        max_steps_before_drop: u64,
    ) -> bool {
        if max_steps_before_drop == 0
            || state.steps_since_reset < max_steps_before_drop
            || !self.release(state, physics)
        {
            return false;
        }
        physics.set_velocity(Body::Ball, Vec3::new(0.0, -self.serve.drop_speed, 0.0));
        debug!("watchdog dropped an untouched serve after {} steps", state.steps_since_reset);
        true
    }
}
