//! `AgentRegistry` — Structure-of-Arrays agent association.
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is the
//! index into all of them.  IDs outside `0..count` (including
//! `AgentId::INVALID`) are unknown, and every accessor answers `None` for
//! them instead of panicking, because unknown handles from the host must
//! degrade to no-ops.

use vb_core::{AgentId, Role, Team, VbError, VbResult, Vec3};

/// Where an agent is put back at every scene reset.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnSlot {
    pub position: Vec3,
    /// Facing, in degrees about the up axis.
    pub yaw: f32,
}

impl SpawnSlot {
    #[inline]
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }
}

/// Per-agent officiating state, one SoA array per field.
#[derive(Clone, Debug)]
pub struct AgentRegistry {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Team membership.  Fixed at registration.
    pub team: Vec<Team>,

    /// Role for the current rally.  Reset to `Generic` at every scene reset
    /// and rewritten only by the role assigner.
    pub role: Vec<Role>,

    /// 0-based position of the agent within its team, in registration order.
    pub join_order: Vec<u16>,

    /// Deterministic respawn position and facing.
    pub spawn: Vec<SpawnSlot>,

    /// Timestamp (seconds) of the agent's last admitted touch.
    /// `f64::NEG_INFINITY` until the agent touches the ball.
    pub last_touch_secs: Vec<f64>,
}

impl AgentRegistry {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `true` if `agent` was registered.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Index of `agent`, or `VbError::AgentNotFound`.
    pub fn try_index(&self, agent: AgentId) -> VbResult<usize> {
        if self.contains(agent) {
            Ok(agent.index())
        } else {
            Err(VbError::AgentNotFound(agent))
        }
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + use<> {
        (0..self.count as u32).map(AgentId)
    }

    /// Agents on `team`, in registration order.
    pub fn members(&self, team: Team) -> impl Iterator<Item = AgentId> + '_ {
        self.team
            .iter()
            .enumerate()
            .filter(move |&(_, &t)| t == team)
            .map(|(i, _)| AgentId(i as u32))
    }

    #[inline]
    pub fn team(&self, agent: AgentId) -> Option<Team> {
        self.team.get(agent.index()).copied()
    }

    #[inline]
    pub fn role(&self, agent: AgentId) -> Option<Role> {
        self.role.get(agent.index()).copied()
    }

    #[inline]
    pub fn join_order(&self, agent: AgentId) -> Option<u16> {
        self.join_order.get(agent.index()).copied()
    }

    #[inline]
    pub fn spawn(&self, agent: AgentId) -> Option<SpawnSlot> {
        self.spawn.get(agent.index()).copied()
    }

    #[inline]
    pub fn last_touch_secs(&self, agent: AgentId) -> Option<f64> {
        self.last_touch_secs.get(agent.index()).copied()
    }

    /// Set `agent`'s role.  Returns `false` (and changes nothing) for an
    /// unknown agent.
    pub fn set_role(&mut self, agent: AgentId, role: Role) -> bool {
        match self.role.get_mut(agent.index()) {
            Some(slot) => {
                *slot = role;
                true
            }
            None => false,
        }
    }

    /// Record an admitted touch at `now_secs`.
    pub fn mark_touch(&mut self, agent: AgentId, now_secs: f64) {
        if let Some(slot) = self.last_touch_secs.get_mut(agent.index()) {
            *slot = now_secs;
        }
    }

    /// Per-rally reset: every role back to `Generic`, every touch cooldown
    /// cleared.
    pub fn reset_for_rally(&mut self) {
        self.role.fill(Role::Generic);
        self.last_touch_secs.fill(f64::NEG_INFINITY);
    }

    /// Number of agents on `team`.
    pub fn team_size(&self, team: Team) -> usize {
        self.team.iter().filter(|&&t| t == team).count()
    }

    // ── Package-private constructor used by AgentRegistryBuilder ──────────

    pub(crate) fn new(team: Vec<Team>, join_order: Vec<u16>, spawn: Vec<SpawnSlot>) -> Self {
        let count = team.len();
        Self {
            count,
            team,
            role: vec![Role::Generic; count],
            join_order,
            spawn,
            last_touch_secs: vec![f64::NEG_INFINITY; count],
        }
    }
}
