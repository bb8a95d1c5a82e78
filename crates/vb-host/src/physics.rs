//! Physics commands issued by the engine.

use vb_core::{AgentId, Vec3};

/// A rigid body the engine may address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Body {
    Ball,
    Agent(AgentId),
}

/// Ball body flags.  A frozen ball hangs in place and cannot be knocked
/// around by agents; a live ball falls and collides.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BallPhysics {
    pub kinematic:    bool,
    pub gravity:      bool,
    pub trigger_only: bool,
}

impl BallPhysics {
    pub const FROZEN: BallPhysics = BallPhysics {
        kinematic:    true,
        gravity:      false,
        trigger_only: true,
    };

    pub const LIVE: BallPhysics = BallPhysics {
        kinematic:    false,
        gravity:      true,
        trigger_only: false,
    };

    #[inline]
    pub fn is_frozen(self) -> bool {
        self == Self::FROZEN
    }
}

/// Host-side physics.  Reads return `None` when the host does not know the
/// body; the engine treats that as "no information" and degrades.
pub trait PhysicsHandle {
    fn set_ball_physics(&mut self, flags: BallPhysics);

    fn set_velocity(&mut self, body: Body, velocity: Vec3);

    /// Place `body` at `position` with facing `yaw_deg` about the up axis.
    /// The ball ignores `yaw_deg`.
    fn teleport(&mut self, body: Body, position: Vec3, yaw_deg: f32);

    fn position(&self, body: Body) -> Option<Vec3>;

    fn velocity(&self, body: Body) -> Option<Vec3>;
}
