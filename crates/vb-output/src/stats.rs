//! Reward accounting by agent, team and role.

use vb_agent::AgentRegistry;
use vb_core::{AgentId, Role, Team};
use vb_host::{RewardSink, RewardTarget};

use crate::RewardStatsRow;

// ── RewardTally ───────────────────────────────────────────────────────────────

/// A [`RewardSink`] decorator: forwards every call to `inner` and keeps
/// cumulative totals per agent and per team group.
///
/// Agent totals are sized at construction; rewards for ids outside that
/// range are forwarded but not counted.
pub struct RewardTally<S> {
    inner:  S,
    agents: Vec<f32>,
    group:  [f32; 2],
}

impl<S: RewardSink> RewardTally<S> {
    pub fn new(inner: S, agent_count: usize) -> Self {
        Self { inner, agents: vec![0.0; agent_count], group: [0.0; 2] }
    }

    /// Cumulative individual reward of `agent` (0 for unknown ids).
    pub fn agent_total(&self, agent: AgentId) -> f32 {
        self.agents.get(agent.index()).copied().unwrap_or(0.0)
    }

    /// Cumulative shared reward of `team`'s group.
    pub fn group_total(&self, team: Team) -> f32 {
        team.index().map_or(0.0, |i| self.group[i])
    }

    /// Zero all totals, e.g. between reporting windows.
    pub fn reset(&mut self) {
        self.agents.fill(0.0);
        self.group = [0.0; 2];
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: RewardSink> RewardSink for RewardTally<S> {
    fn add_reward(&mut self, target: RewardTarget, amount: f32) {
        match target {
            RewardTarget::Agent(id) => {
                if let Some(total) = self.agents.get_mut(id.index()) {
                    *total += amount;
                }
            }
            RewardTarget::Team(team) => {
                if let Some(i) = team.index() {
                    self.group[i] += amount;
                }
            }
        }
        self.inner.add_reward(target, amount);
    }

    fn end_episode(&mut self, agent: AgentId) {
        self.inner.end_episode(agent);
    }

    fn episode_interrupted(&mut self, agent: AgentId) {
        self.inner.episode_interrupted(agent);
    }
}

// ── TeamRewardStats ───────────────────────────────────────────────────────────

/// Per-team summary of individual rewards, split by current role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamRewardStats {
    pub team:   Team,
    pub agents: usize,
    /// Mean and max of agents' cumulative individual reward.  0 for an
    /// empty team.
    pub mean:   f32,
    pub max:    f32,
    pub hitter: f32,
    pub setter: f32,
    pub passer: f32,
    pub group:  f32,
}

impl TeamRewardStats {
    /// One entry per playing team, Blue first.
    pub fn collect<S: RewardSink>(registry: &AgentRegistry, tally: &RewardTally<S>) -> Vec<Self> {
        Team::PLAYING
            .into_iter()
            .map(|team| {
                let mut s = TeamRewardStats {
                    team,
                    agents: 0,
                    mean:   0.0,
                    max:    f32::NEG_INFINITY,
                    hitter: 0.0,
                    setter: 0.0,
                    passer: 0.0,
                    group:  tally.group_total(team),
                };
                let mut sum = 0.0;
                for id in registry.members(team) {
                    let r = tally.agent_total(id);
                    s.agents += 1;
                    sum += r;
                    s.max = s.max.max(r);
                    match registry.role(id) {
                        Some(Role::Hitter) => s.hitter += r,
                        Some(Role::Setter) => s.setter += r,
                        Some(Role::Passer) => s.passer += r,
                        _ => {}
                    }
                }
                if s.agents > 0 {
                    s.mean = sum / s.agents as f32;
                } else {
                    s.max = 0.0;
                }
                s
            })
            .collect()
    }

    pub fn to_row(&self, rally: u64) -> RewardStatsRow {
        RewardStatsRow {
            rally,
            team:         self.team,
            mean_reward:  self.mean,
            max_reward:   self.max,
            hitter_sum:   self.hitter,
            setter_sum:   self.setter,
            passer_sum:   self.passer,
            group_reward: self.group,
        }
    }
}
