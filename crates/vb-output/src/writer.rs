//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, RallyRow, RewardStatsRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are stored by [`RallyOutputObserver`](crate::RallyOutputObserver)
/// and retrieved with `take_error`.
pub trait OutputWriter {
    fn write_rally(&mut self, row: &RallyRow) -> OutputResult<()>;

    fn write_reward_stats(&mut self, rows: &[RewardStatsRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
