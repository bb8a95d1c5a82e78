//! Rally engine configuration.
//!
//! One parameterized rule set: every variant of the rally logic (touch
//! limits, bonus sizes, role scheme) is a value here rather than a separate
//! code path.  A zero step limit or zero bonus means "disabled", never an
//! error.
//!
//! With the `serde` feature every struct deserializes with
//! `#[serde(default)]`, so a config file only needs the fields it changes:
//!
//! ```json
//! { "touch_cooldown_secs": 0.1, "rewards": { "spike_kill": 0.0 } }
//! ```

use crate::{Role, TouchType, VbError, VbResult};

// ── RallyConfig ───────────────────────────────────────────────────────────────

/// Top-level engine configuration, supplied once when an arena is built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct RallyConfig {
    /// Minimum seconds between two admitted touches by the same agent.
    /// Absorbs duplicate contact callbacks from one physical collision.
    pub touch_cooldown_secs: f32,

    /// Touches a team may make per possession; one more is a fault.
    pub max_touches: u8,

    /// Steps a rally may last before it is interrupted with no winner.
    /// 0 disables the limit (and the time-pressure reward scaling).
    pub max_env_steps: u64,

    /// Steps a frozen serve may wait before the watchdog drops it.
    /// 0 disables the watchdog.
    pub max_steps_before_drop: u64,

    /// Steps the re-entrancy guard stays held after a rally ends.
    pub reset_cooldown_steps: u64,

    /// Simulated seconds per physics step.
    pub step_secs: f32,

    /// Master RNG seed.  The same seed always produces identical serves.
    pub seed: u64,

    /// Duration of the winning-side floor flash.  0 disables it.
    pub feedback_flash_secs: f32,

    pub rewards: RewardConfig,
    pub serve:   ServeConfig,
    pub roles:   RoleConfig,
    pub court:   CourtConfig,
}

impl Default for RallyConfig {
    fn default() -> Self {
        Self {
            touch_cooldown_secs:   0.25,
            max_touches:           3,
            max_env_steps:         25_000,
            max_steps_before_drop: 250,
            reset_cooldown_steps:  10,
            step_secs:             0.02,
            seed:                  42,
            feedback_flash_secs:   0.5,
            rewards:               RewardConfig::default(),
            serve:                 ServeConfig::default(),
            roles:                 RoleConfig::default(),
            court:                 CourtConfig::default(),
        }
    }
}

impl RallyConfig {
    /// Reject values that cannot describe a sensible engine: non-finite
    /// numbers, negative durations or magnitudes, a zero touch limit, a
    /// non-positive step size or gravity.
    pub fn validate(&self) -> VbResult<()> {
        non_negative("touch_cooldown_secs", self.touch_cooldown_secs)?;
        non_negative("feedback_flash_secs", self.feedback_flash_secs)?;
        positive("step_secs", self.step_secs)?;
        if self.max_touches == 0 {
            return Err(VbError::Config("max_touches must be at least 1".into()));
        }

        let r = &self.rewards;
        non_negative("rewards.point", r.point)?;
        non_negative("rewards.serve_start", r.serve_start)?;
        non_negative("rewards.net_cross_per_touch", r.net_cross_per_touch)?;
        non_negative("rewards.spike_kill", r.spike_kill)?;
        non_negative("rewards.assist", r.assist)?;
        r.shaping.validate()?;

        let s = &self.serve;
        non_negative("serve.height", s.height)?;
        non_negative("serve.depth", s.depth)?;
        non_negative("serve.jitter", s.jitter)?;
        non_negative("serve.drop_speed", s.drop_speed)?;
        non_negative("serve.agent_jitter", s.agent_jitter)?;

        non_negative("roles.tie_epsilon", self.roles.tie_epsilon)?;

        finite("court.net_z", self.court.net_z)?;
        positive("court.gravity", self.court.gravity)?;
        Ok(())
    }
}

// ── Sections ──────────────────────────────────────────────────────────────────

/// Reward magnitudes.  All shaping values are small relative to `point`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct RewardConfig {
    /// Team reward for winning a rally; the loser receives its negation.
    pub point: f32,
    /// Scale the winner's reward by `1 − steps / max_env_steps`.
    pub time_pressure: bool,
    /// Team reward when one of its agents releases a frozen serve.
    pub serve_start: f32,
    /// `k` in the first-crossing bonus `k * touches_used`.
    pub net_cross_per_touch: f32,
    /// Agent reward for the spiker whose spike won the rally.
    pub spike_kill: f32,
    /// Agent reward for the teammate who touched just before a spike kill.
    pub assist: f32,
    /// Per-touch shaping by role, touch type and touch number.
    pub shaping: ShapingTable,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            point:               1.0,
            time_pressure:       true,
            serve_start:         0.01,
            net_cross_per_touch: 0.02,
            spike_kill:          0.1,
            assist:              0.05,
            shaping:             ShapingTable::default(),
        }
    }
}

/// Ball placement for serves.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct ServeConfig {
    /// Height of the frozen ball above the floor.
    pub height: f32,
    /// Distance of the spawn point behind the net on the serving side.
    pub depth: f32,
    /// Half-width of the random horizontal spawn offset.
    pub jitter: f32,
    /// Downward speed injected when the watchdog drops a stale serve.
    pub drop_speed: f32,
    /// Half-width of the random x offset added to agent spawn slots.
    /// 0 keeps respawns fully deterministic.
    pub agent_jitter: f32,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            height:       3.0,
            depth:        3.0,
            jitter:       0.5,
            drop_speed:   2.0,
            agent_jitter: 0.0,
        }
    }
}

/// How tactical roles are handed out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoleStrategy {
    /// By join order within a team; stable for the whole match.
    #[default]
    Static,
    /// Per rally, ranked by distance to the predicted landing spot on the
    /// receiving side.
    Dynamic,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct RoleConfig {
    pub strategy: RoleStrategy,
    /// Squared-distance difference below which the two closest agents are
    /// considered tied and a coin flip picks the Hitter.
    pub tie_epsilon: f32,
}

impl Default for RoleConfig {
    fn default() -> Self {
        Self {
            strategy:    RoleStrategy::Static,
            tie_epsilon: 0.05,
        }
    }
}

/// Court geometry the rules need.  Everything else about the court belongs
/// to the physics host.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct CourtConfig {
    /// z coordinate of the net plane.
    pub net_z: f32,
    /// Gravity magnitude (m/s², positive) used for landing prediction.
    pub gravity: f32,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self { net_z: 0.0, gravity: 9.81 }
    }
}

// ── ShapingTable ──────────────────────────────────────────────────────────────

/// Per-touch shaping rewards.
///
/// Each row is indexed `[touch_type][touch_number - 1]` with touch types in
/// `Bump, Set, Spike` order.  `Generic` agents use the Passer row.
///
/// The defaults encode the intended shape rather than tuned magnitudes:
/// early ball control pays for Passers and Setters, late attacks pay for
/// Hitters, a Passer/Setter spiking on touch 1 and a Hitter bumping or
/// setting the decisive 3rd touch are penalized.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct ShapingTable {
    pub passer: [[f32; 3]; 3],
    pub setter: [[f32; 3]; 3],
    pub hitter: [[f32; 3]; 3],
}

impl Default for ShapingTable {
    fn default() -> Self {
        Self {
            //         touch 1  touch 2  touch 3
            passer: [
                [0.10,  0.05,  0.00],  // bump
                [0.05,  0.03, -0.01],  // set
                [-0.05, -0.02,  0.02], // spike
            ],
            setter: [
                [0.03,  0.04, -0.01],
                [0.05,  0.10,  0.00],
                [-0.05, -0.02,  0.02],
            ],
            hitter: [
                [0.02,  0.00, -0.05],
                [0.00,  0.01, -0.05],
                [-0.02, 0.05,  0.10],
            ],
        }
    }
}

impl ShapingTable {
    /// The row used for `role`.
    pub fn row(&self, role: Role) -> &[[f32; 3]; 3] {
        match role {
            Role::Setter => &self.setter,
            Role::Hitter => &self.hitter,
            Role::Passer | Role::Generic => &self.passer,
        }
    }

    /// Raw cell lookup.  `touch_number` is clamped into `1..=3`.
    pub fn value(&self, role: Role, touch: TouchType, touch_number: u8) -> f32 {
        let col = touch_number.clamp(1, 3) as usize - 1;
        self.row(role)[touch as usize][col]
    }

    fn validate(&self) -> VbResult<()> {
        let all = [&self.passer, &self.setter, &self.hitter];
        if all.iter().flat_map(|r| r.iter().flatten()).all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(VbError::Config("rewards.shaping contains a non-finite value".into()))
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn finite(name: &str, v: f32) -> VbResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(VbError::Config(format!("{name} must be finite, got {v}")))
    }
}

fn non_negative(name: &str, v: f32) -> VbResult<()> {
    finite(name, v)?;
    if v < 0.0 {
        return Err(VbError::Config(format!("{name} must be >= 0, got {v}")));
    }
    Ok(())
}

fn positive(name: &str, v: f32) -> VbResult<()> {
    finite(name, v)?;
    if v <= 0.0 {
        return Err(VbError::Config(format!("{name} must be > 0, got {v}")));
    }
    Ok(())
}
