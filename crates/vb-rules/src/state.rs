//! `RallyState` — the per-rally record every ruling is made against.

use vb_core::{AgentId, BallState, Team};

/// Mutable state of the rally in progress.
///
/// Invariants maintained by [`TouchLedger`](crate::TouchLedger):
///
/// - at most one of `touches_blue` / `touches_red` is non-zero;
/// - `ball_crossed_net` is only true between an accepted net crossing and
///   the next legal touch;
/// - two consecutive legal touches never share `last_hitter_agent`.
#[derive(Clone, Debug, PartialEq)]
pub struct RallyState {
    pub touches_blue: u8,
    pub touches_red:  u8,

    pub last_hitter_team:  Team,
    pub last_hitter_agent: Option<AgentId>,

    /// Teammate who touched immediately before `last_hitter_agent`, if the
    /// possession had more than one touch.
    pub assist_agent: Option<AgentId>,

    pub last_touch_was_spike: bool,
    pub ball_crossed_net:     bool,

    /// Survives `reset_for_rally`.  `Unset` only before the first rally.
    pub next_server: Team,

    pub ball: BallState,

    pub steps_since_reset: u64,
}

impl Default for RallyState {
    fn default() -> Self {
        Self {
            touches_blue:         0,
            touches_red:          0,
            last_hitter_team:     Team::Unset,
            last_hitter_agent:    None,
            assist_agent:         None,
            last_touch_was_spike: false,
            ball_crossed_net:     false,
            next_server:          Team::Unset,
            ball:                 BallState::Live,
            steps_since_reset:    0,
        }
    }
}

impl RallyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite everything except `next_server`.
    pub fn reset_for_rally(&mut self) {
        let next_server = self.next_server;
        *self = Self { next_server, ..Self::default() };
    }

    /// Touches used by `team` in the current possession.  0 for `Unset`.
    #[inline]
    pub fn touches(&self, team: Team) -> u8 {
        match team {
            Team::Blue => self.touches_blue,
            Team::Red => self.touches_red,
            Team::Unset => 0,
        }
    }

    pub(crate) fn touches_mut(&mut self, team: Team) -> Option<&mut u8> {
        match team {
            Team::Blue => Some(&mut self.touches_blue),
            Team::Red => Some(&mut self.touches_red),
            Team::Unset => None,
        }
    }

    #[inline]
    pub fn ball_frozen(&self) -> bool {
        self.ball == BallState::Frozen
    }
}
