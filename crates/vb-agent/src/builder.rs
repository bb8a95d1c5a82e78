//! Fluent builder for [`AgentRegistry`].
//!
//! # Usage
//!
//! ```rust
//! use vb_agent::{AgentRegistryBuilder, SpawnSlot};
//! use vb_core::{Team, Vec3};
//!
//! let registry = AgentRegistryBuilder::new()
//!     .agent(Team::Blue, SpawnSlot::new(Vec3::new(0.0, 0.5, -4.0), 0.0))
//!     .agent(Team::Red,  SpawnSlot::new(Vec3::new(0.0, 0.5,  4.0), 180.0))
//!     .build();
//!
//! assert_eq!(registry.count, 2);
//! assert_eq!(registry.join_order[1], 0);
//! ```

use vb_core::Team;

use crate::{AgentRegistry, SpawnSlot};

/// Collects agent registrations and assigns dense `AgentId`s in insertion
/// order.  Join order is counted per team.
#[derive(Default)]
pub struct AgentRegistryBuilder {
    team:       Vec<Team>,
    join_order: Vec<u16>,
    spawn:      Vec<SpawnSlot>,
    per_team:   [u16; 2],
}

impl AgentRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one agent.  An agent with `Team::Unset` is kept (it can be
    /// queried) but the officiating layer ignores all of its touches.
    pub fn agent(mut self, team: Team, spawn: SpawnSlot) -> Self {
        let order = match team.index() {
            Some(i) => {
                let n = self.per_team[i];
                self.per_team[i] = n.saturating_add(1);
                n
            }
            None => 0,
        };
        self.team.push(team);
        self.join_order.push(order);
        self.spawn.push(spawn);
        self
    }

    /// Number of agents registered so far.
    pub fn len(&self) -> usize {
        self.team.len()
    }

    pub fn is_empty(&self) -> bool {
        self.team.is_empty()
    }

    pub fn build(self) -> AgentRegistry {
        AgentRegistry::new(self.team, self.join_order, self.spawn)
    }
}
