//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `rallies` and `reward_stats`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, RallyRow, RewardStatsRow};

pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS rallies (
                 rally         INTEGER PRIMARY KEY,
                 tick          INTEGER NOT NULL,
                 winner        TEXT    NOT NULL,
                 cause         TEXT    NOT NULL,
                 steps         INTEGER NOT NULL,
                 touches_blue  INTEGER NOT NULL,
                 touches_red   INTEGER NOT NULL,
                 last_hitter   INTEGER NOT NULL,
                 winner_reward REAL    NOT NULL,
                 spike_kill    INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS reward_stats (
                 rally        INTEGER NOT NULL,
                 team         TEXT    NOT NULL,
                 mean_reward  REAL    NOT NULL,
                 max_reward   REAL    NOT NULL,
                 hitter_sum   REAL    NOT NULL,
                 setter_sum   REAL    NOT NULL,
                 passer_sum   REAL    NOT NULL,
                 group_reward REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_rally(&mut self, row: &RallyRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO rallies \
             (rally, tick, winner, cause, steps, touches_blue, touches_red, \
              last_hitter, winner_reward, spike_kill) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            rusqlite::params![
                row.rally as i64,
                row.tick as i64,
                row.winner.to_string(),
                row.cause,
                row.steps as i64,
                row.touches_blue,
                row.touches_red,
                row.last_hitter,
                row.winner_reward as f64,
                row.spike_kill as i64,
            ],
        )?;
        Ok(())
    }

    fn write_reward_stats(&mut self, rows: &[RewardStatsRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO reward_stats \
                 (rally, team, mean_reward, max_reward, hitter_sum, setter_sum, \
                  passer_sum, group_reward) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.rally as i64,
                    row.team.to_string(),
                    row.mean_reward as f64,
                    row.max_reward as f64,
                    row.hitter_sum as f64,
                    row.setter_sum as f64,
                    row.passer_sum as f64,
                    row.group_reward as f64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
