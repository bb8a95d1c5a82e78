//! Reward and episode signalling.

use vb_core::{AgentId, Team};

/// Who receives a reward.  Team rewards are shared by the whole group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RewardTarget {
    Agent(AgentId),
    Team(Team),
}

/// The learning host.  Rewards accumulate until the episode ends.
pub trait RewardSink {
    fn add_reward(&mut self, target: RewardTarget, amount: f32);

    /// A rally finished normally for `agent`.
    fn end_episode(&mut self, agent: AgentId);

    /// The episode was cut off by the step limit rather than decided.
    fn episode_interrupted(&mut self, agent: AgentId);
}
