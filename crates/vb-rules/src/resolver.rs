//! `EventResolver` — maps court trigger events to rulings.

use vb_core::{Team, Vec3};

use crate::{Fault, RallyState};

/// A trigger reported by the physics layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CourtEvent {
    /// Ball contacted the floor on this team's side.
    HitGoal(Team),
    OutOfBounds,
    /// Ball passed through the crossing zone above the net.
    PassOverNet,
}

/// What a court event means for the rally.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Ruling {
    /// No effect: duplicate, unverifiable, or a reset in flight.
    Ignored,
    /// First verified crossing since the last touch.  `bonus` goes to `team`.
    NetCrossed { team: Team, bonus: f32 },
    /// Legal attack grounded on the opponent's floor.
    Point { winner: Team },
    Fault { against: Team, fault: Fault },
}

impl Ruling {
    /// The team this ruling awards the rally to, if it ends one.
    pub fn winner(&self) -> Option<Team> {
        match *self {
            Ruling::Point { winner } => Some(winner),
            Ruling::Fault { against, .. } => Some(against.opponent()),
            Ruling::Ignored | Ruling::NetCrossed { .. } => None,
        }
    }
}

/// Which half of the court `z` lies in.  Blue owns `z < net_z`, Red owns
/// the rest including the net plane itself.
#[inline]
pub fn court_side(z: f32, net_z: f32) -> Team {
    if z < net_z { Team::Blue } else { Team::Red }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EventResolver {
    pub net_z:               f32,
    pub net_cross_per_touch: f32,
}

impl EventResolver {
    pub fn new(net_z: f32, net_cross_per_touch: f32) -> Self {
        Self { net_z, net_cross_per_touch }
    }

    /// Resolve `event` against `state`.  `ball_position` is the host's
    /// current ball position; it is only consulted for `PassOverNet`.
    pub fn resolve(
        &self,
        state:         &mut RallyState,
        event:         CourtEvent,
        ball_position: Option<Vec3>,
    ) -> Ruling {
        match event {
            CourtEvent::HitGoal(Team::Unset) => Ruling::Ignored,
            CourtEvent::HitGoal(side) => {
                let attacker = side.opponent();
                if state.last_hitter_team == attacker {
                    Ruling::Point { winner: attacker }
                } else {
                    Ruling::Fault { against: side, fault: Fault::OwnCourt }
                }
            }

            CourtEvent::OutOfBounds => {
                let responsible = if state.last_hitter_team.is_set() {
                    state.last_hitter_team
                } else {
                    state.next_server
                };
                if responsible.is_set() {
                    Ruling::Fault { against: responsible, fault: Fault::OutOfBounds }
                } else {
                    Ruling::Ignored
                }
            }

            CourtEvent::PassOverNet => {
                let hitter = state.last_hitter_team;
                if !hitter.is_set() || state.ball_crossed_net {
                    return Ruling::Ignored;
                }
                let Some(ball) = ball_position.filter(|p| p.is_finite()) else {
                    return Ruling::Ignored;
                };
                if court_side(ball.z, self.net_z) != hitter.opponent() {
                    return Ruling::Ignored;
                }
                state.ball_crossed_net = true;
                Ruling::NetCrossed {
                    team:  hitter,
                    bonus: self.net_cross_per_touch * f32::from(state.touches(hitter)),
                }
            }
        }
    }
}
