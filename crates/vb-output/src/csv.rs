//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `rallies.csv`
//! - `reward_stats.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RallyRow, RewardStatsRow};

pub struct CsvWriter {
    rallies:  Writer<File>,
    stats:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rallies = Writer::from_path(dir.join("rallies.csv"))?;
        rallies.write_record([
            "rally",
            "tick",
            "winner",
            "cause",
            "steps",
            "touches_blue",
            "touches_red",
            "last_hitter",
            "winner_reward",
            "spike_kill",
        ])?;

        let mut stats = Writer::from_path(dir.join("reward_stats.csv"))?;
        stats.write_record([
            "rally",
            "team",
            "mean_reward",
            "max_reward",
            "hitter_sum",
            "setter_sum",
            "passer_sum",
            "group_reward",
        ])?;

        Ok(Self { rallies, stats, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_rally(&mut self, row: &RallyRow) -> OutputResult<()> {
        self.rallies.write_record(&[
            row.rally.to_string(),
            row.tick.to_string(),
            row.winner.to_string(),
            row.cause.clone(),
            row.steps.to_string(),
            row.touches_blue.to_string(),
            row.touches_red.to_string(),
            row.last_hitter.to_string(),
            row.winner_reward.to_string(),
            (row.spike_kill as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_reward_stats(&mut self, rows: &[RewardStatsRow]) -> OutputResult<()> {
        for row in rows {
            self.stats.write_record(&[
                row.rally.to_string(),
                row.team.to_string(),
                row.mean_reward.to_string(),
                row.max_reward.to_string(),
                row.hitter_sum.to_string(),
                row.setter_sum.to_string(),
                row.passer_sum.to_string(),
                row.group_reward.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rallies.flush()?;
        self.stats.flush()?;
        Ok(())
    }
}
