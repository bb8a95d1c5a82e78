//! The `Arena` struct: one court's rally lifecycle.

use log::{debug, info, trace};

use vb_agent::AgentRegistry;
use vb_core::{
    AgentId, ArenaRng, RallyConfig, Role, RoleStrategy, StepClock, Team, Tick, TouchType, VbResult,
    Vec3,
};
use vb_host::{Body, FeedbackSink, NoopFeedback, PhysicsHandle, RewardSink, RewardTarget};
use vb_rules::{
    CourtEvent, EventResolver, RallyState, RewardShaper, RoleAssigner, RoleContext, Ruling,
    TouchLedger, TouchOutcome,
};
use vb_serve::ServeManager;

use crate::{
    AgentObservation, NoopObserver, RallyCause, RallyObserver, RallyRecord, TimerEvent,
    TimerQueue, TouchRecord,
};

// ── Arena ─────────────────────────────────────────────────────────────────────

/// One court.
///
/// `Arena<P, S, F, O>` owns the rally state and every rule component, and
/// talks to the host only through the injected collaborators:
///
/// - `P: PhysicsHandle` for teleports, velocities and ball freezing;
/// - `S: RewardSink` for rewards and episode boundaries;
/// - `F: FeedbackSink` for the win flash;
/// - `O: RallyObserver` for logging and output.
///
/// There is exactly one writer per tick, so nothing here locks.
///
/// Create via [`ArenaBuilder`][crate::ArenaBuilder].
pub struct Arena<P, S, F = NoopFeedback, O = NoopObserver> {
    pub(crate) config:   RallyConfig,
    pub(crate) clock:    StepClock,
    pub(crate) rng:      ArenaRng,
    pub(crate) registry: AgentRegistry,
    pub(crate) state:    RallyState,

    pub(crate) ledger:   TouchLedger,
    pub(crate) resolver: EventResolver,
    pub(crate) shaper:   RewardShaper,
    pub(crate) roles:    RoleAssigner,
    pub(crate) serve:    ServeManager,

    pub(crate) timers: TimerQueue,

    /// End-of-rally re-entrancy guard.  Kept outside `RallyState` so the
    /// scene reset inside `end_rally` does not clear it.
    pub(crate) resetting: bool,

    /// `false` until the first `reset_scene`.
    pub(crate) scene_ready: bool,

    /// Latest flash deadline per team, so an older clear timer cannot cut a
    /// newer flash short.
    pub(crate) flash_until: [Option<Tick>; 2],

    pub(crate) rally_index: u64,

    pub(crate) physics:  P,
    pub(crate) rewards:  S,
    pub(crate) feedback: F,
    pub(crate) observer: O,
}

impl<P, S, F, O> Arena<P, S, F, O>
where
    P: PhysicsHandle,
    S: RewardSink,
    F: FeedbackSink,
    O: RallyObserver,
{
    // ── Callee surface ────────────────────────────────────────────────────

    /// A physical contact between `agent` and the ball at `now_secs`.
    ///
    /// `touch` is the agent's current action state as the host sees it.
    /// Unknown agents, duplicates inside the cooldown, and contacts while a
    /// reset is in flight are `Ignored` without any state change.
    pub fn register_touch(&mut self, agent: AgentId, touch: TouchType, now_secs: f64) -> TouchOutcome {
        if !self.accepting("touch") {
            return TouchOutcome::Ignored;
        }
        let Some(team) = self.ledger.admit(&mut self.registry, agent, now_secs) else {
            return TouchOutcome::Ignored;
        };

        if self.serve.release(&mut self.state, &mut self.physics) {
            self.reward(RewardTarget::Team(team), self.config.rewards.serve_start);
        }

        let role = self.registry.role(agent).unwrap_or_default();
        let outcome = self.ledger.record(&mut self.state, agent, team, touch);
        let shaping = match outcome {
            TouchOutcome::Continue { touch_number } => {
                let r = self.shaper.shape(role, touch, touch_number);
                self.reward(RewardTarget::Agent(agent), r);
                r
            }
            _ => 0.0,
        };
        trace!("{agent} ({team} {role}) {touch} -> {outcome:?}");

        self.observer.on_touch(&TouchRecord {
            tick: self.clock.current_tick,
            agent,
            team,
            role,
            touch,
            outcome,
            shaping,
        });

        if let TouchOutcome::Fault { against, fault } = outcome {
            self.finish_rally(against.opponent(), RallyCause::Fault(fault));
        }
        outcome
    }

    /// A court trigger reported by the physics layer.
    ///
    /// A ruling that ends the rally has already been applied when this
    /// returns.
    pub fn resolve_event(&mut self, event: CourtEvent) -> Ruling {
        if !self.accepting("court event") {
            return Ruling::Ignored;
        }
        let ball = self.physics.position(Body::Ball);
        let ruling = self.resolver.resolve(&mut self.state, event, ball);

        match ruling {
            Ruling::Ignored => {}
            Ruling::NetCrossed { team, bonus } => {
                self.reward(RewardTarget::Team(team), bonus);
                debug!("net crossing accepted for {team}, bonus {bonus:.3}");
                self.observer.on_net_crossing(self.clock.current_tick, team, bonus);
                if self.roles.strategy == RoleStrategy::Dynamic {
                    self.assign_roles();
                }
            }
            Ruling::Point { winner } => {
                self.finish_rally(winner, RallyCause::Point);
            }
            Ruling::Fault { against, fault } => {
                self.finish_rally(against.opponent(), RallyCause::Fault(fault));
            }
        }
        ruling
    }

    /// Award the rally to `winner` directly.
    ///
    /// Returns `false` when nothing happened: `winner` is `Unset`, the scene
    /// was never reset, or another rally end is still inside its cooldown.
    pub fn end_rally(&mut self, winner: Team) -> bool {
        self.finish_rally(winner, RallyCause::Awarded)
    }

    /// Put agents back on their slots, reset the rally, and re-serve.
    ///
    /// Called by the host on startup, and internally after every rally end
    /// and max-step interruption.  Does not touch the re-entrancy guard.
    pub fn reset_scene(&mut self) {
        self.state.reset_for_rally();
        self.registry.reset_for_rally();

        let jitter = self.config.serve.agent_jitter;
        for id in self.registry.agent_ids() {
            let Some(slot) = self.registry.spawn(id) else { continue };
            let position = slot.position + Vec3::new(self.rng.jitter(jitter), 0.0, 0.0);
            self.physics.teleport(Body::Agent(id), position, slot.yaw);
            self.physics.set_velocity(Body::Agent(id), Vec3::ZERO);
        }

        let ball = self.serve.reset_ball(&mut self.state, &mut self.physics, &mut self.rng);
        self.assign_roles();
        self.scene_ready = true;
        trace!("scene reset, {} serving from {ball}", self.state.next_server);
    }

    /// Advance one physics tick.  Call after every contact callback of the
    /// tick has been delivered.
    pub fn step(&mut self) {
        let now = self.clock.current_tick;
        if !self.scene_ready {
            self.clock.advance();
            return;
        }
        self.state.steps_since_reset += 1;

        for event in self.timers.drain_due(now) {
            match event {
                TimerEvent::ReleaseResetGuard => self.resetting = false,
                TimerEvent::ClearFlash(team) => {
                    let deadline = team.index().and_then(|i| self.flash_until[i]);
                    if deadline.is_some_and(|d| d <= now) {
                        self.feedback.clear_flash(team);
                        if let Some(i) = team.index() {
                            self.flash_until[i] = None;
                        }
                    }
                }
            }
        }

        self.serve
            .watchdog(&mut self.state, &mut self.physics, self.config.max_steps_before_drop);

        let max = self.config.max_env_steps;
        if max > 0 && self.state.steps_since_reset >= max {
            self.interrupt(now);
        }

        self.observer.on_step_end(now, &self.state);
        self.clock.advance();
    }

    // ── Read-only queries ─────────────────────────────────────────────────

    #[inline]
    pub fn touches(&self, team: Team) -> u8 {
        self.state.touches(team)
    }

    #[inline]
    pub fn last_hitter(&self) -> Option<AgentId> {
        self.state.last_hitter_agent
    }

    #[inline]
    pub fn last_hitter_team(&self) -> Team {
        self.state.last_hitter_team
    }

    #[inline]
    pub fn role(&self, agent: AgentId) -> Option<Role> {
        self.registry.role(agent)
    }

    #[inline]
    pub fn ball_frozen(&self) -> bool {
        self.state.ball_frozen()
    }

    #[inline]
    pub fn next_server(&self) -> Team {
        self.state.next_server
    }

    /// `true` while an end-of-rally guard is held.
    #[inline]
    pub fn resetting(&self) -> bool {
        self.resetting
    }

    pub fn state(&self) -> &RallyState {
        &self.state
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    pub fn config(&self) -> &RallyConfig {
        &self.config
    }

    pub fn clock(&self) -> &StepClock {
        &self.clock
    }

    /// Number of rallies decided so far (interruptions excluded).
    pub fn rally_count(&self) -> u64 {
        self.rally_index
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut P {
        &mut self.physics
    }

    pub fn rewards(&self) -> &S {
        &self.rewards
    }

    pub fn rewards_mut(&mut self) -> &mut S {
        &mut self.rewards
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Engine-side observation fragment for `agent`.
    pub fn observe(&self, agent: AgentId) -> VbResult<AgentObservation> {
        let i = self.registry.try_index(agent)?;
        let team = self.registry.team[i];

        let last_touch = if self.state.last_hitter_agent == Some(agent) {
            1.0
        } else if team.is_set() && self.state.last_hitter_team == team {
            -1.0
        } else {
            0.0
        };
        let used = f32::from(self.state.touches(team)) / f32::from(self.config.max_touches);

        Ok(AgentObservation {
            role:         self.registry.role[i].one_hot(),
            last_touch,
            touches_used: used.clamp(0.0, 1.0),
            ball_frozen:  if self.state.ball_frozen() { 1.0 } else { 0.0 },
        })
    }

    // ── Lifecycle internals ───────────────────────────────────────────────

    fn accepting(&self, what: &str) -> bool {
        if !self.scene_ready {
            trace!("{what} before first reset_scene ignored");
            return false;
        }
        if self.resetting {
            debug!("{what} ignored: reset in progress");
            return false;
        }
        true
    }

    /// The single guarded path that ends a rally.
    fn finish_rally(&mut self, winner: Team, cause: RallyCause) -> bool {
        if !winner.is_set() || !self.scene_ready {
            return false;
        }
        if self.resetting {
            debug!("end of rally for {winner} ({cause}) dropped: reset in progress");
            return false;
        }
        self.resetting = true;

        let now = self.clock.current_tick;
        let steps = self.state.steps_since_reset;
        let rw = &self.config.rewards;
        let max = self.config.max_env_steps;

        let factor = if rw.time_pressure && max > 0 {
            (1.0 - steps as f64 / max as f64).max(0.0) as f32
        } else {
            1.0
        };
        let winner_reward = rw.point * factor;
        let loser_penalty = -rw.point;
        let (spike_bonus, assist_bonus) = (rw.spike_kill, rw.assist);

        self.reward(RewardTarget::Team(winner), winner_reward);
        self.reward(RewardTarget::Team(winner.opponent()), loser_penalty);

        // A fault after the spike means the other side reached the ball.
        let spike_kill = cause == RallyCause::Point
            && self.state.last_touch_was_spike
            && self.state.last_hitter_team == winner;
        if spike_kill {
            if let Some(hitter) = self.state.last_hitter_agent {
                self.reward(RewardTarget::Agent(hitter), spike_bonus);
            }
            if let Some(assist) = self.state.assist_agent {
                self.reward(RewardTarget::Agent(assist), assist_bonus);
            }
        }

        let flash = self.config.feedback_flash_secs;
        if flash > 0.0 {
            self.feedback.flash(winner, flash);
            let due = now.offset(self.clock.steps_for_secs(flash));
            if let Some(i) = winner.index() {
                self.flash_until[i] = Some(due);
            }
            self.timers.push(due, TimerEvent::ClearFlash(winner));
        }

        for id in self.registry.agent_ids() {
            self.rewards.end_episode(id);
        }

        let record = RallyRecord {
            rally: self.rally_index,
            tick: now,
            winner,
            cause,
            steps,
            touches_blue: self.state.touches_blue,
            touches_red: self.state.touches_red,
            last_hitter: self.state.last_hitter_agent,
            winner_reward,
            spike_kill,
        };
        debug!(
            "rally {} won by {winner} ({cause}) after {steps} steps",
            self.rally_index
        );

        self.state.next_server = winner;
        self.reset_scene();
        self.timers
            .push(now.offset(self.config.reset_cooldown_steps), TimerEvent::ReleaseResetGuard);

        self.rally_index += 1;
        self.observer.on_rally_end(&record);
        true
    }

    fn interrupt(&mut self, now: Tick) {
        let steps = self.state.steps_since_reset;
        for id in self.registry.agent_ids() {
            self.rewards.episode_interrupted(id);
        }
        info!("episode interrupted after {steps} steps without a ruling");
        self.reset_scene();
        self.observer.on_interrupted(now, steps);
    }

    fn assign_roles(&mut self) {
        let positions: Vec<Option<Vec3>> = match self.roles.strategy {
            RoleStrategy::Static => Vec::new(),
            RoleStrategy::Dynamic => self
                .registry
                .agent_ids()
                .map(|id| self.physics.position(Body::Agent(id)))
                .collect(),
        };
        let ctx = RoleContext {
            ball_position: self.physics.position(Body::Ball),
            ball_velocity: self.physics.velocity(Body::Ball),
            gravity:       self.config.court.gravity,
            net_z:         self.config.court.net_z,
            positions:     &positions,
        };
        self.roles.assign(&mut self.registry, &ctx, &mut self.rng);
    }

    #[inline]
    fn reward(&mut self, target: RewardTarget, amount: f32) {
        if amount != 0.0 {
            self.rewards.add_reward(target, amount);
        }
    }
}

// ── Batch stepping ────────────────────────────────────────────────────────────

/// Step every arena once.
///
/// Arenas share nothing, so with the `parallel` feature they are stepped on
/// Rayon's thread pool; each arena's results are identical either way.
#[cfg(not(feature = "parallel"))]
pub fn step_all<P, S, F, O>(arenas: &mut [Arena<P, S, F, O>])
where
    P: PhysicsHandle,
    S: RewardSink,
    F: FeedbackSink,
    O: RallyObserver,
{
    arenas.iter_mut().for_each(Arena::step);
}

/// Step every arena once.
///
/// Arenas share nothing, so with the `parallel` feature they are stepped on
/// Rayon's thread pool; each arena's results are identical either way.
#[cfg(feature = "parallel")]
pub fn step_all<P, S, F, O>(arenas: &mut [Arena<P, S, F, O>])
where
    P: PhysicsHandle + Send,
    S: RewardSink + Send,
    F: FeedbackSink + Send,
    O: RallyObserver + Send,
{
    use rayon::prelude::*;

    arenas.par_iter_mut().for_each(Arena::step);
}
