//! `TouchLedger` — admits raw contacts and turns them into legal touches or
//! faults.
//!
//! The ledger is split in two so the lifecycle can release a frozen serve
//! between the phases:
//!
//! 1. [`admit`](TouchLedger::admit) filters unknown agents and duplicate
//!    contacts inside the per-agent cooldown.
//! 2. [`record`](TouchLedger::record) applies the touch rules in a fixed
//!    order: double touch, spike on spike, bookkeeping, touch limit.

use log::trace;

use vb_agent::AgentRegistry;
use vb_core::{AgentId, Team, TouchType};

use crate::RallyState;

/// Why a rally was lost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Fault {
    /// Same agent touched twice in a row.
    DoubleTouch,
    /// Possession exceeded the touch limit.
    FourTouches,
    /// Two consecutive spikes, by any teams.
    SpikeOnSpike,
    /// Ball left the court.
    OutOfBounds,
    /// Ball grounded on the side of the team that did not attack it over.
    OwnCourt,
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Fault::DoubleTouch => "double_touch",
            Fault::FourTouches => "four_touches",
            Fault::SpikeOnSpike => "spike_on_spike",
            Fault::OutOfBounds => "out_of_bounds",
            Fault::OwnCourt => "own_court",
        };
        f.write_str(s)
    }
}

/// Result of one contact.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TouchOutcome {
    /// Filtered: unknown agent, cooldown, or a reset in flight.  No state
    /// changed.
    Ignored,
    /// Legal touch; `touch_number` is 1-based within the possession.
    Continue { touch_number: u8 },
    /// The touch lost the rally for `against`.
    Fault { against: Team, fault: Fault },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchLedger {
    pub cooldown_secs: f32,
    pub max_touches:   u8,
}

impl TouchLedger {
    pub fn new(cooldown_secs: f32, max_touches: u8) -> Self {
        Self { cooldown_secs, max_touches }
    }

    /// Admit a raw contact from `agent` at `now_secs`.
    ///
    /// Timestamps are `f64` seconds: `f32` steps exceed the cooldown's
    /// resolution after ~10^6 s of simulated time.
    ///
    /// Returns the agent's team, or `None` if the contact must be dropped
    /// without any state change.  An admitted contact restarts the agent's
    /// cooldown.
    pub fn admit(&self, registry: &mut AgentRegistry, agent: AgentId, now_secs: f64) -> Option<Team> {
        let Some(team) = registry.team(agent).filter(|t| t.is_set()) else {
            trace!("touch from unknown or teamless agent {agent} dropped");
            return None;
        };
        if !now_secs.is_finite() {
            trace!("touch from {agent} with non-finite timestamp dropped");
            return None;
        }
        let last = registry.last_touch_secs(agent).unwrap_or(f64::NEG_INFINITY);
        if now_secs - last < f64::from(self.cooldown_secs) {
            trace!("touch from {agent} inside cooldown ({:.3}s since last)", now_secs - last);
            return None;
        }
        registry.mark_touch(agent, now_secs);
        Some(team)
    }

    /// Apply the touch rules to an admitted contact.
    pub fn record(
        &self,
        state: &mut RallyState,
        agent: AgentId,
        team:  Team,
        touch: TouchType,
    ) -> TouchOutcome {
        if state.last_hitter_agent == Some(agent) {
            return TouchOutcome::Fault { against: team, fault: Fault::DoubleTouch };
        }
        if state.last_touch_was_spike && touch == TouchType::Spike {
            return TouchOutcome::Fault { against: team, fault: Fault::SpikeOnSpike };
        }

        // ── Bookkeeping ───────────────────────────────────────────────────
        state.ball_crossed_net = false;
        state.assist_agent = if state.last_hitter_team == team {
            state.last_hitter_agent
        } else {
            None
        };
        state.last_hitter_team = team;
        state.last_hitter_agent = Some(agent);
        state.last_touch_was_spike = touch == TouchType::Spike;
        if let Some(opp) = state.touches_mut(team.opponent()) {
            *opp = 0;
        }
        let touch_number = match state.touches_mut(team) {
            Some(own) => {
                *own = own.saturating_add(1);
                *own
            }
            None => return TouchOutcome::Ignored,
        };

        if touch_number > self.max_touches {
            return TouchOutcome::Fault { against: team, fault: Fault::FourTouches };
        }
        TouchOutcome::Continue { touch_number }
    }
}
