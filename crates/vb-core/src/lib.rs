//! `vb-core` — foundational types for the rally officiating engine.
//!
//! This crate is a dependency of every other `vb-*` crate.  It intentionally
//! has no `vb-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AgentId`                                                 |
//! | [`team`]    | `Team`, `Role`, `TouchType`, `BallState`                  |
//! | [`geo`]     | `Vec3` court-space vector                                 |
//! | [`time`]    | `Tick`, `StepClock`                                       |
//! | [`rng`]     | `ArenaRng` (per-arena, deterministic)                     |
//! | [`config`]  | `RallyConfig` and its sections, `ShapingTable`            |
//! | [`error`]   | `VbError`, `VbResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod team;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    CourtConfig, RallyConfig, RewardConfig, RoleConfig, RoleStrategy, ServeConfig, ShapingTable,
};
pub use error::{VbError, VbResult};
pub use geo::Vec3;
pub use ids::AgentId;
pub use rng::ArenaRng;
pub use team::{BallState, Role, Team, TouchType};
pub use time::{StepClock, Tick};
