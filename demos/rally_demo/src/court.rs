//! Toy kinematic court.
//!
//! Stands in for a real physics engine: the ball is a point mass with
//! gravity and no drag, agents are points the demo moves directly.  Enough
//! to produce every trigger the rally engine rules on.

use vb_core::{AgentId, Vec3};
use vb_host::{BallPhysics, Body, PhysicsHandle};
use vb_rules::{CourtEvent, court_side};

// ── Geometry ──────────────────────────────────────────────────────────────────

pub const NET_HEIGHT:  f32 = 2.43;
pub const HALF_WIDTH:  f32 = 4.5;
pub const HALF_LENGTH: f32 = 9.0;
const BALL_RADIUS:     f32 = 0.11;

/// Fraction of z speed kept when the ball bounces off the net.
const NET_DAMPING: f32 = 0.3;

#[derive(Copy, Clone, Debug, Default)]
struct Pose {
    position: Vec3,
    velocity: Vec3,
    yaw:      f32,
}

// ── ToyCourt ──────────────────────────────────────────────────────────────────

pub struct ToyCourt {
    net_z:    f32,
    gravity:  f32,
    ball:     Pose,
    flags:    BallPhysics,
    /// Set on floor contact so one landing fires one trigger.
    grounded: bool,
    agents:   Vec<Pose>,
}

impl ToyCourt {
    pub fn new(agent_count: usize, net_z: f32, gravity: f32) -> Self {
        Self {
            net_z,
            gravity,
            ball:     Pose::default(),
            flags:    BallPhysics::FROZEN,
            grounded: false,
            agents:   vec![Pose::default(); agent_count],
        }
    }

    #[inline]
    pub fn ball(&self) -> Vec3 {
        self.ball.position
    }

    #[inline]
    pub fn ball_velocity(&self) -> Vec3 {
        self.ball.velocity
    }

    pub fn agent(&self, id: AgentId) -> Option<Vec3> {
        self.agents.get(id.index()).map(|p| p.position)
    }

    pub fn agent_yaw(&self, id: AgentId) -> Option<f32> {
        self.agents.get(id.index()).map(|p| p.yaw)
    }

    /// Slide an agent along the floor.
    pub fn move_agent(&mut self, id: AgentId, delta: Vec3) {
        if let Some(pose) = self.agents.get_mut(id.index()) {
            pose.position = pose.position + Vec3::new(delta.x, 0.0, delta.z);
        }
    }

    /// Give a live ball a new velocity.  A frozen ball cannot be struck.
    pub fn strike(&mut self, velocity: Vec3) {
        if !self.flags.kinematic {
            self.ball.velocity = velocity;
            self.grounded = false;
        }
    }

    /// Integrate one step and return the triggers it fired, in order.
    pub fn step(&mut self, dt: f32) -> Vec<CourtEvent> {
        let mut events = Vec::new();
        if self.flags.kinematic || self.grounded {
            return events;
        }
        if self.flags.gravity {
            self.ball.velocity.y -= self.gravity * dt;
        }

        let before = self.ball.position;
        let mut after = before + self.ball.velocity * dt;

        if court_side(before.z, self.net_z) != court_side(after.z, self.net_z) {
            if after.y > NET_HEIGHT {
                events.push(CourtEvent::PassOverNet);
            } else {
                after.z = before.z;
                self.ball.velocity.z *= -NET_DAMPING;
            }
        }

        if after.y <= BALL_RADIUS {
            after.y = BALL_RADIUS;
            self.ball.velocity = Vec3::ZERO;
            self.grounded = true;
            let inside =
                after.x.abs() <= HALF_WIDTH && (after.z - self.net_z).abs() <= HALF_LENGTH;
            events.push(if inside {
                CourtEvent::HitGoal(court_side(after.z, self.net_z))
            } else {
                CourtEvent::OutOfBounds
            });
        }

        self.ball.position = after;
        events
    }
}

impl PhysicsHandle for ToyCourt {
    fn set_ball_physics(&mut self, flags: BallPhysics) {
        self.flags = flags;
    }

    fn set_velocity(&mut self, body: Body, velocity: Vec3) {
        match body {
            Body::Ball => {
                self.ball.velocity = velocity;
                if velocity != Vec3::ZERO {
                    self.grounded = false;
                }
            }
            Body::Agent(id) => {
                if let Some(pose) = self.agents.get_mut(id.index()) {
                    pose.velocity = velocity;
                }
            }
        }
    }

    fn teleport(&mut self, body: Body, position: Vec3, yaw_deg: f32) {
        match body {
            Body::Ball => {
                self.ball.position = position;
                self.grounded = false;
            }
            Body::Agent(id) => {
                if let Some(pose) = self.agents.get_mut(id.index()) {
                    pose.position = position;
                    pose.yaw = yaw_deg;
                }
            }
        }
    }

    fn position(&self, body: Body) -> Option<Vec3> {
        match body {
            Body::Ball => Some(self.ball.position),
            Body::Agent(id) => self.agent(id),
        }
    }

    fn velocity(&self, body: Body) -> Option<Vec3> {
        match body {
            Body::Ball => Some(self.ball.velocity),
            Body::Agent(id) => self.agents.get(id.index()).map(|p| p.velocity),
        }
    }
}
