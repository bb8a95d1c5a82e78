//! Per-touch reward shaping.

use vb_core::{Role, ShapingTable, TouchType};

/// Looks up the shaping reward for a legal touch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RewardShaper {
    pub table: ShapingTable,
}

impl RewardShaper {
    pub fn new(table: ShapingTable) -> Self {
        Self { table }
    }

    /// `Generic` shares the Passer row; touch numbers outside `1..=3` clamp.
    #[inline]
    pub fn shape(&self, role: Role, touch: TouchType, touch_number: u8) -> f32 {
        self.table.value(role, touch, touch_number)
    }
}
