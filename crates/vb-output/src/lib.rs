//! `vb-output` — rally logs and reward statistics.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                          |
//! |-----------|---------|----------------------------------------|
//! | *(none)*  | CSV     | `rallies.csv`, `reward_stats.csv`      |
//! | `sqlite`  | SQLite  | `output.db`                            |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`RallyOutputObserver`], which implements `vb_sim::RallyObserver`.
//! Reward statistics come from a [`RewardTally`] wrapped around the real
//! reward sink.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vb_output::{CsvWriter, RallyOutputObserver, RewardTally, TeamRewardStats};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut arena = ArenaBuilder::new(config, registry, physics, RewardTally::new(sink, n))
//!     .observer(RallyOutputObserver::new(writer))
//!     .build()?;
//! // ... run ...
//! let stats = TeamRewardStats::collect(arena.registry(), arena.rewards());
//! arena.observer_mut().write_reward_stats(arena.rally_count(), &stats);
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod stats;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RallyOutputObserver;
pub use row::{RallyRow, RewardStatsRow};
pub use stats::{RewardTally, TeamRewardStats};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
