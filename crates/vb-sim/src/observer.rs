//! Rally observer trait for logging and data collection.

use vb_core::{AgentId, Role, Team, Tick, TouchType};
use vb_rules::{Fault, RallyState, TouchOutcome};

/// One admitted touch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchRecord {
    pub tick:    Tick,
    pub agent:   AgentId,
    pub team:    Team,
    /// Role at the time of the touch.
    pub role:    Role,
    pub touch:   TouchType,
    pub outcome: TouchOutcome,
    /// Shaping reward granted to the agent (0 for faults).
    pub shaping: f32,
}

/// How a rally was decided.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RallyCause {
    /// Legal attack grounded on the opponent's floor.
    Point,
    Fault(Fault),
    /// `end_rally` called directly by the host.
    Awarded,
}

impl std::fmt::Display for RallyCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RallyCause::Point => f.write_str("point"),
            RallyCause::Fault(fault) => write!(f, "fault:{fault}"),
            RallyCause::Awarded => f.write_str("awarded"),
        }
    }
}

/// Summary of a decided rally, captured before the scene reset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RallyRecord {
    /// 0-based index among decided rallies of this arena.
    pub rally:         u64,
    pub tick:          Tick,
    pub winner:        Team,
    pub cause:         RallyCause,
    /// Steps from the serve to the ruling.
    pub steps:         u64,
    pub touches_blue:  u8,
    pub touches_red:   u8,
    pub last_hitter:   Option<AgentId>,
    /// Team reward the winner received after time pressure.
    pub winner_reward: f32,
    pub spike_kill:    bool,
}

/// Callbacks invoked by [`Arena`][crate::Arena].
///
/// All methods have default no-op implementations.
///
/// # Example — rally printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl RallyObserver for Printer {
///     fn on_rally_end(&mut self, r: &RallyRecord) {
///         println!("rally {} -> {} ({})", r.rally, r.winner, r.cause);
///     }
/// }
/// ```
pub trait RallyObserver {
    fn on_touch(&mut self, _touch: &TouchRecord) {}

    fn on_net_crossing(&mut self, _tick: Tick, _team: Team, _bonus: f32) {}

    fn on_rally_end(&mut self, _rally: &RallyRecord) {}

    /// The step limit cut a rally off without a winner.
    fn on_interrupted(&mut self, _tick: Tick, _steps: u64) {}

    /// Called at the end of every `step`, after timers and the watchdog.
    fn on_step_end(&mut self, _tick: Tick, _state: &RallyState) {}
}

/// A [`RallyObserver`] that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RallyObserver for NoopObserver {}
