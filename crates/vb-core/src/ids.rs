//! Agent handles.

use std::fmt;

/// Handle of an agent registered with an arena.  Dense, assigned in
/// registration order; the host passes it back on every contact callback.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// The host's null handle.  Never names a registered agent.
    pub const INVALID: AgentId = AgentId(u32::MAX);

    /// Slot in the registry's per-agent columns.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for AgentId {
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}
