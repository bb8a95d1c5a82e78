//! CSV roster loader.
//!
//! # CSV format
//!
//! One row per agent, in registration order.  Row `n` becomes `AgentId(n)`.
//!
//! ```csv
//! team,x,y,z,yaw
//! blue,-1.5,0.5,-4.0,0
//! blue,1.5,0.5,-4.0,0
//! red,-1.5,0.5,4.0,180
//! red,1.5,0.5,4.0,180
//! ```
//!
//! `team` is `blue` or `red`, case-insensitive.  `yaw` is in degrees.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use vb_core::{Team, Vec3};

use crate::{AgentRegistry, AgentRegistryBuilder, RosterError, RosterResult, SpawnSlot};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    team: String,
    x:    f32,
    y:    f32,
    z:    f32,
    yaw:  f32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an [`AgentRegistry`] from a roster CSV file.
pub fn load_roster_csv(path: &Path) -> RosterResult<AgentRegistry> {
    let file = std::fs::File::open(path)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
pub fn load_roster_reader<R: Read>(reader: R) -> RosterResult<AgentRegistry> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = AgentRegistryBuilder::new();

    for (row, result) in csv_reader.deserialize::<RosterRecord>().enumerate() {
        let rec = result.map_err(|e| RosterError::Parse(e.to_string()))?;
        let team = parse_team(&rec.team)?;
        let position = Vec3::new(rec.x, rec.y, rec.z);
        if !position.is_finite() || !rec.yaw.is_finite() {
            return Err(RosterError::Parse(format!(
                "row {row}: spawn transform must be finite"
            )));
        }
        builder = builder.agent(team, SpawnSlot::new(position, rec.yaw));
    }

    Ok(builder.build())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_team(s: &str) -> RosterResult<Team> {
    match s.trim().to_ascii_lowercase().as_str() {
        "blue" => Ok(Team::Blue),
        "red" => Ok(Team::Red),
        other => Err(RosterError::Parse(format!(
            "invalid team {other:?}: expected \"blue\" or \"red\""
        ))),
    }
}
