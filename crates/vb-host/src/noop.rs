//! Sinks that discard everything.

use vb_core::AgentId;

use crate::{FeedbackSink, RewardSink, RewardTarget};

/// A [`RewardSink`] that drops every reward and episode signal.
///
/// Useful for replaying rallies where only the officiating outcome matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRewards;

impl RewardSink for NoopRewards {
    fn add_reward(&mut self, _target: RewardTarget, _amount: f32) {}
    fn end_episode(&mut self, _agent: AgentId) {}
    fn episode_interrupted(&mut self, _agent: AgentId) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFeedback;

impl FeedbackSink for NoopFeedback {}
