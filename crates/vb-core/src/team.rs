//! Small domain enums shared by every crate.

use std::fmt;

// ── Team ──────────────────────────────────────────────────────────────────────

/// Court side / team membership.
///
/// `Unset` is a sentinel: it is the `last_hitter_team` before anyone has
/// touched the ball and the `next_server` before the first rally.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Team {
    Blue,
    Red,
    #[default]
    Unset,
}

impl Team {
    /// The two teams that actually play.
    pub const PLAYING: [Team; 2] = [Team::Blue, Team::Red];

    /// The other team.  `Unset` has no opponent and maps to itself.
    #[inline]
    pub fn opponent(self) -> Team {
        match self {
            Team::Blue  => Team::Red,
            Team::Red   => Team::Blue,
            Team::Unset => Team::Unset,
        }
    }

    #[inline]
    pub fn is_set(self) -> bool {
        self != Team::Unset
    }

    /// Sign of the team's half along the court's z axis: Blue plays on
    /// `z < net`, Red on `z ≥ net`.  `Unset` is 0.
    #[inline]
    pub fn side_sign(self) -> f32 {
        match self {
            Team::Blue  => -1.0,
            Team::Red   => 1.0,
            Team::Unset => 0.0,
        }
    }

    /// Slot in two-element per-team arrays.  `None` for `Unset`.
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            Team::Blue  => Some(0),
            Team::Red   => Some(1),
            Team::Unset => None,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Team::Blue  => "blue",
            Team::Red   => "red",
            Team::Unset => "unset",
        };
        f.write_str(s)
    }
}

// ── Role ──────────────────────────────────────────────────────────────────────

/// Tactical role for the current rally.  Advisory only: it shapes rewards
/// and feeds observations but never decides legality.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Passer,
    Setter,
    Hitter,
    #[default]
    Generic,
}

impl Role {
    /// One-hot encoding in declaration order `[passer, setter, hitter, generic]`.
    pub fn one_hot(self) -> [f32; 4] {
        let mut v = [0.0; 4];
        v[self as usize] = 1.0;
        v
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Passer  => "passer",
            Role::Setter  => "setter",
            Role::Hitter  => "hitter",
            Role::Generic => "generic",
        };
        f.write_str(s)
    }
}

// ── TouchType ─────────────────────────────────────────────────────────────────

/// How an agent played the ball, as reported by the caller at contact time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchType {
    Bump,
    Set,
    Spike,
}

impl fmt::Display for TouchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TouchType::Bump  => "bump",
            TouchType::Set   => "set",
            TouchType::Spike => "spike",
        };
        f.write_str(s)
    }
}

// ── BallState ─────────────────────────────────────────────────────────────────

/// Serve state machine of the ball.
///
/// `Frozen`: kinematic, trigger-only, suspended above the serving side.
/// `Live`: normal physics.  `Live` is terminal until the next ball reset.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BallState {
    Frozen,
    #[default]
    Live,
}
