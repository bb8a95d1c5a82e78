//! `RallyOutputObserver<W>`: bridges `RallyObserver` to an `OutputWriter`.

use vb_core::{Team, Tick};
use vb_sim::{RallyObserver, RallyRecord};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, RallyRow, RewardStatsRow, TeamRewardStats};

/// A [`RallyObserver`] that writes one [`RallyRow`] per decided or
/// interrupted rally.
///
/// Observer hooks cannot fail, so the first write error is kept and
/// returned by [`take_error`][Self::take_error].
pub struct RallyOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RallyOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Rally rows written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Write a statistics snapshot labelled with `rally`.
    pub fn write_reward_stats(&mut self, rally: u64, stats: &[TeamRewardStats]) {
        let rows: Vec<RewardStatsRow> = stats.iter().map(|s| s.to_row(rally)).collect();
        let result = self.writer.write_reward_stats(&rows);
        self.store_err(result);
    }

    /// Flush the writer.  Safe to call more than once.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write(&mut self, mut row: RallyRow) {
        row.rally = self.rows;
        self.rows += 1;
        let result = self.writer.write_rally(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RallyObserver for RallyOutputObserver<W> {
    fn on_rally_end(&mut self, r: &RallyRecord) {
        self.write(RallyRow {
            rally:         0,
            tick:          r.tick.0,
            winner:        r.winner,
            cause:         r.cause.to_string(),
            steps:         r.steps,
            touches_blue:  r.touches_blue,
            touches_red:   r.touches_red,
            last_hitter:   r.last_hitter.map_or(u32::MAX, |a| a.0),
            winner_reward: r.winner_reward,
            spike_kill:    r.spike_kill,
        });
    }

    fn on_interrupted(&mut self, tick: Tick, steps: u64) {
        self.write(RallyRow {
            rally:         0,
            tick:          tick.0,
            winner:        Team::Unset,
            cause:         "interrupted".to_owned(),
            steps,
            touches_blue:  0,
            touches_red:   0,
            last_hitter:   u32::MAX,
            winner_reward: 0.0,
            spike_kill:    false,
        });
    }
}
