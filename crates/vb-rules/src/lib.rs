//! `vb-rules` — the officiating rules, free of any host or timing concerns.
//!
//! Everything here operates on a borrowed [`RallyState`] and answers with a
//! value ([`TouchOutcome`], [`Ruling`], a shaping scalar).  Applying those
//! answers (rewards, resets, serve release) is the lifecycle's job in
//! `vb-sim`.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`state`]    | `RallyState`                                            |
//! | [`ledger`]   | `TouchLedger`, `TouchOutcome`, `Fault`                  |
//! | [`resolver`] | `EventResolver`, `CourtEvent`, `Ruling`                 |
//! | [`shaper`]   | `RewardShaper`                                          |
//! | [`roles`]    | `RoleAssigner`, `RoleContext`, landing prediction       |

pub mod ledger;
pub mod resolver;
pub mod roles;
pub mod shaper;
pub mod state;

#[cfg(test)]
mod tests;

pub use ledger::{Fault, TouchLedger, TouchOutcome};
pub use resolver::{CourtEvent, EventResolver, Ruling, court_side};
pub use roles::{RoleAssigner, RoleContext, predict_landing, receiving_team, static_role};
pub use shaper::RewardShaper;
pub use state::RallyState;
