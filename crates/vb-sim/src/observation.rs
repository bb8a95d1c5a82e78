//! Per-agent observation fragment assembled by the engine.

/// What the engine knows that a policy should see.  The host appends its own
/// physical observations (positions, velocities) to this.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentObservation {
    /// Role one-hot in `Passer, Setter, Hitter, Generic` order.
    pub role:         [f32; 4],
    /// +1 if this agent made the last touch, −1 if a teammate did, else 0.
    pub last_touch:   f32,
    /// Own team's touches this possession over the touch limit, in [0, 1].
    pub touches_used: f32,
    /// 1 while the serve is frozen.
    pub ball_frozen:  f32,
}

impl AgentObservation {
    pub const LEN: usize = 7;

    pub fn to_array(&self) -> [f32; Self::LEN] {
        let [p, s, h, g] = self.role;
        [p, s, h, g, self.last_touch, self.touches_used, self.ball_frozen]
    }
}
