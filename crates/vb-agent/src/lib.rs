//! `vb-agent` — the engine's association table for agents.
//!
//! The simulation layer owns agent transforms and bodies.  The engine only
//! keeps what officiating needs: each agent's team, its current role, its
//! join order within the team, a spawn slot, and the time of its last
//! admitted touch.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`registry`] | `AgentRegistry` (SoA arrays), `SpawnSlot`                  |
//! | [`builder`]  | `AgentRegistryBuilder` (fluent construction)               |
//! | [`roster`]   | `load_roster_csv`, `load_roster_reader`                    |
//! | [`error`]    | `RosterError`, `RosterResult<T>`                           |

pub mod builder;
pub mod error;
pub mod registry;
pub mod roster;


pub use builder::AgentRegistryBuilder;
pub use error::{RosterError, RosterResult};
pub use registry::{AgentRegistry, SpawnSlot};
pub use roster::{load_roster_csv, load_roster_reader};
