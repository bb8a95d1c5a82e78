//! `vb-host` — the seams between the officiating engine and whatever runs
//! the world around it.
//!
//! The engine never integrates motion, renders, or trains anything.  It
//! issues commands through three traits that the host implements:
//!
//! | Trait               | Direction | Used for                                  |
//! |---------------------|-----------|-------------------------------------------|
//! | [`PhysicsHandle`]   | both      | teleports, velocities, ball freeze/release |
//! | [`RewardSink`]      | out       | per-agent and per-team rewards, episodes   |
//! | [`FeedbackSink`]    | out       | optional visual flash per team             |
//!
//! # Crate layout
//!
//! | Module       | Contents                                           |
//! |--------------|----------------------------------------------------|
//! | [`physics`]  | `PhysicsHandle`, `Body`, `BallPhysics`             |
//! | [`rewards`]  | `RewardSink`, `RewardTarget`                       |
//! | [`feedback`] | `FeedbackSink`                                     |
//! | [`noop`]     | `NoopRewards`, `NoopFeedback`                      |

pub mod feedback;
pub mod noop;
pub mod physics;
pub mod rewards;

#[cfg(test)]
mod tests;

pub use feedback::FeedbackSink;
pub use noop::{NoopFeedback, NoopRewards};
pub use physics::{BallPhysics, Body, PhysicsHandle};
pub use rewards::{RewardSink, RewardTarget};
