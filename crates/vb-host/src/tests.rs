//! Unit tests for vb-host.

#[cfg(test)]
mod physics {
    use crate::BallPhysics;

    #[test]
    fn frozen_and_live_are_distinct() {
        assert!(BallPhysics::FROZEN.is_frozen());
        assert!(!BallPhysics::LIVE.is_frozen());
        assert!(BallPhysics::FROZEN.kinematic && !BallPhysics::FROZEN.gravity);
        assert!(BallPhysics::LIVE.gravity && !BallPhysics::LIVE.trigger_only);
    }
}

#[cfg(test)]
mod sinks {
    use vb_core::{AgentId, Team};

    use crate::{FeedbackSink, NoopFeedback, NoopRewards, RewardSink, RewardTarget};

    #[test]
    fn noop_sinks_accept_everything() {
        let mut r = NoopRewards;
        r.add_reward(RewardTarget::Team(Team::Blue), 1.0);
        r.add_reward(RewardTarget::Agent(AgentId::INVALID), -1.0);
        r.end_episode(AgentId(0));
        r.episode_interrupted(AgentId(0));

        let mut f = NoopFeedback;
        f.flash(Team::Red, 0.5);
        f.clear_flash(Team::Red);
    }

    /// A host that only cares about flashes can skip the other trait.
    #[test]
    fn feedback_defaults_are_optional() {
        struct Counting(u32);
        impl FeedbackSink for Counting {
            fn flash(&mut self, _team: Team, _secs: f32) {
                self.0 += 1;
            }
        }
        let mut c = Counting(0);
        c.flash(Team::Blue, 0.5);
        c.clear_flash(Team::Blue);
        assert_eq!(c.0, 1);
    }
}
