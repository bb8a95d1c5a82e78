//! Plain data row types written by output backends.

use vb_core::Team;

/// One decided or interrupted rally.
#[derive(Debug, Clone, PartialEq)]
pub struct RallyRow {
    /// Sequence number over all rows written by one observer.
    pub rally:         u64,
    pub tick:          u64,
    /// `Team::Unset` for an interrupted rally.
    pub winner:        Team,
    /// `point`, `awarded`, `fault:<kind>` or `interrupted`.
    pub cause:         String,
    pub steps:         u64,
    pub touches_blue:  u8,
    pub touches_red:   u8,
    /// `u32::MAX` when nobody touched the ball.
    pub last_hitter:   u32,
    pub winner_reward: f32,
    pub spike_kill:    bool,
}

/// Cumulative reward statistics for one team at a point in the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardStatsRow {
    /// Rally count when the statistics were taken.
    pub rally:        u64,
    pub team:         Team,
    pub mean_reward:  f32,
    pub max_reward:   f32,
    pub hitter_sum:   f32,
    pub setter_sum:   f32,
    pub passer_sum:   f32,
    pub group_reward: f32,
}
