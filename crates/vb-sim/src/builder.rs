//! Fluent builder for constructing an [`Arena`].

use vb_agent::AgentRegistry;
use vb_core::{ArenaRng, RallyConfig, StepClock};
use vb_host::{FeedbackSink, NoopFeedback, PhysicsHandle, RewardSink};
use vb_rules::{EventResolver, RallyState, RewardShaper, RoleAssigner, TouchLedger};
use vb_serve::ServeManager;

use crate::{Arena, ArenaError, ArenaResult, NoopObserver, RallyObserver, TimerQueue};

/// Fluent builder for [`Arena<P, S, F, O>`].
///
/// # Required inputs
///
/// - [`RallyConfig`]: rule constants and reward magnitudes
/// - [`AgentRegistry`]: from [`vb_agent::AgentRegistryBuilder`] or a roster CSV
/// - `P: PhysicsHandle` and `S: RewardSink`: the host
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                              |
/// |---------------------|--------------------------------------|
/// | `.feedback(f)`      | `NoopFeedback`                       |
/// | `.observer(o)`      | `NoopObserver`                       |
/// | `.arena_index(i)`   | 0 (mixes into the RNG seed)          |
///
/// # Example
///
/// ```rust,ignore
/// let mut arena = ArenaBuilder::new(RallyConfig::default(), registry, physics, NoopRewards)
///     .arena_index(3)
///     .build()?;
/// arena.reset_scene();
/// ```
pub struct ArenaBuilder<P, S, F = NoopFeedback, O = NoopObserver> {
    config:      RallyConfig,
    registry:    AgentRegistry,
    physics:     P,
    rewards:     S,
    feedback:    F,
    observer:    O,
    arena_index: u64,
}

impl<P: PhysicsHandle, S: RewardSink> ArenaBuilder<P, S> {
    pub fn new(config: RallyConfig, registry: AgentRegistry, physics: P, rewards: S) -> Self {
        Self {
            config,
            registry,
            physics,
            rewards,
            feedback:    NoopFeedback,
            observer:    NoopObserver,
            arena_index: 0,
        }
    }
}

impl<P, S, F, O> ArenaBuilder<P, S, F, O>
where
    P: PhysicsHandle,
    S: RewardSink,
    F: FeedbackSink,
    O: RallyObserver,
{
    pub fn feedback<F2: FeedbackSink>(self, feedback: F2) -> ArenaBuilder<P, S, F2, O> {
        ArenaBuilder {
            config:      self.config,
            registry:    self.registry,
            physics:     self.physics,
            rewards:     self.rewards,
            feedback,
            observer:    self.observer,
            arena_index: self.arena_index,
        }
    }

    pub fn observer<O2: RallyObserver>(self, observer: O2) -> ArenaBuilder<P, S, F, O2> {
        ArenaBuilder {
            config:      self.config,
            registry:    self.registry,
            physics:     self.physics,
            rewards:     self.rewards,
            feedback:    self.feedback,
            observer,
            arena_index: self.arena_index,
        }
    }

    /// Index of this court among parallel copies.  Arenas with different
    /// indices draw different serves from the same `config.seed`.
    pub fn arena_index(mut self, index: u64) -> Self {
        self.arena_index = index;
        self
    }

    /// Validate inputs and return an arena that is ready for `reset_scene`.
    pub fn build(self) -> ArenaResult<Arena<P, S, F, O>> {
        self.config
            .validate()
            .map_err(|e| ArenaError::Config(e.to_string()))?;
        if !self.registry.team.iter().any(|t| t.is_set()) {
            return Err(ArenaError::EmptyRoster);
        }

        let cfg = &self.config;
        let ledger = TouchLedger::new(cfg.touch_cooldown_secs, cfg.max_touches);
        let resolver = EventResolver::new(cfg.court.net_z, cfg.rewards.net_cross_per_touch);
        let shaper = RewardShaper::new(cfg.rewards.shaping.clone());
        let roles = RoleAssigner::new(cfg.roles.strategy, cfg.roles.tie_epsilon);
        let serve = ServeManager::new(cfg.serve.clone(), cfg.court.net_z);
        let clock = StepClock::new(cfg.step_secs);
        let rng = ArenaRng::for_arena(cfg.seed, self.arena_index);

        Ok(Arena {
            config:      self.config,
            clock,
            rng,
            registry:    self.registry,
            state:       RallyState::new(),
            ledger,
            resolver,
            shaper,
            roles,
            serve,
            timers:      TimerQueue::new(),
            resetting:   false,
            scene_ready: false,
            flash_until: [None; 2],
            rally_index: 0,
            physics:     self.physics,
            rewards:     self.rewards,
            feedback:    self.feedback,
            observer:    self.observer,
        })
    }
}
